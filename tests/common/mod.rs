//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use lunar_charge_sim::devices::{Battery, BatterySpec, PanelSpec, SolarPanel};
use lunar_charge_sim::sim::engine::Engine;
use lunar_charge_sim::sim::types::SimConfig;

/// Reference capacity of the station battery (Wh).
pub const CAPACITY_WH: f64 = 5000.0;

/// Float tolerance for hand-calculated values.
pub const EPS: f64 = 1e-9;

/// Reference panel (efficiency 0.2, 2 m²).
pub fn reference_panel() -> SolarPanel {
    SolarPanel::new(PanelSpec::new(0.2, 2.0).expect("reference panel is valid"))
}

/// Reference battery (5000 Wh, 90% charge efficiency, 5%/h self-discharge).
pub fn reference_battery() -> Battery {
    Battery::new(
        BatterySpec::new(CAPACITY_WH, 0.9, 0.05).expect("reference battery is valid"),
    )
}

/// Engine with the reference hardware and a 336 h lunar day.
pub fn reference_engine(total_hours: usize) -> Engine {
    let config = SimConfig::new(total_hours, 336).expect("reference sim config is valid");
    Engine::new(config, reference_panel(), reference_battery())
}
