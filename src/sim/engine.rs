//! Simulation engine driving sunlight, panel, controller, and battery hour by hour.

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::devices::{Battery, SolarPanel};

use super::clock::Clock;
use super::controller::{CONTROL_PERIOD_HOURS, ChargeController};
use super::types::{SimConfig, StatusRecord};

/// Simulation engine owning the panel, charge controller, and battery.
///
/// Each step runs the fixed sequence: sunlight, power, charge, discharge,
/// record. Charging always precedes discharging within a step.
#[derive(Debug, Clone)]
pub struct Engine {
    config: SimConfig,
    panel: SolarPanel,
    controller: ChargeController,
    saturated: bool,
}

impl Engine {
    /// Creates a new simulation engine.
    ///
    /// # Arguments
    ///
    /// * `config` - Run length and day length
    /// * `panel` - Solar array feeding the controller
    /// * `battery` - Battery handed to the charge controller (normally empty)
    pub fn new(config: SimConfig, panel: SolarPanel, battery: Battery) -> Self {
        debug!(
            total_hours = config.total_hours(),
            day_length_hours = config.day_length_hours(),
            rated_power_w = panel.rated_power_w(),
            capacity_wh = battery.capacity_wh(),
            "engine constructed"
        );
        Self {
            config,
            panel,
            controller: ChargeController::new(battery),
            saturated: false,
        }
    }

    /// Executes one hour and returns its status record.
    ///
    /// [`Engine::run`] calls this for hours `0..total_hours` in order; calling
    /// it directly mutates the same battery.
    pub fn step(&mut self, hour: usize) -> StatusRecord {
        // 1. Sunlight for this hour
        let sunlight = self.sunlight_at(hour);
        if hour > 0 && sunlight != self.sunlight_at(hour - 1) {
            if sunlight > 0.0 {
                debug!(hour, "lunar day begins");
            } else {
                debug!(hour, "lunar night begins");
            }
        }

        // 2. Panel output
        let power_generated_w = self.panel.generated_power_w(sunlight);

        // 3. Charge through the controller
        self.controller.manage_charging(power_generated_w);
        if !self.saturated && self.controller.battery().is_full() {
            self.saturated = true;
            warn!(hour, "battery reached capacity, surplus generation is lost");
        }

        // 4. Self-discharge over the same one-hour period
        self.controller
            .battery_mut()
            .discharge(CONTROL_PERIOD_HOURS);

        // 5. Record
        let record = StatusRecord {
            hour,
            sunlight,
            power_generated_w,
            charge_level_wh: self.controller.battery().current_charge_wh(),
        };
        trace!(
            hour,
            sunlight,
            power_generated_w,
            charge_level_wh = record.charge_level_wh,
            "step"
        );
        record
    }

    /// Consumes the engine and returns the lazy sequence of hourly records.
    ///
    /// The sequence yields exactly `total_hours` records with increasing hour
    /// index and cannot be restarted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_charge_sim::devices::{Battery, BatterySpec, PanelSpec, SolarPanel};
    /// use lunar_charge_sim::sim::engine::Engine;
    /// use lunar_charge_sim::sim::types::SimConfig;
    ///
    /// let engine = Engine::new(
    ///     SimConfig::new(3, 336).unwrap(),
    ///     SolarPanel::new(PanelSpec::new(0.2, 2.0).unwrap()),
    ///     Battery::new(BatterySpec::new(5000.0, 0.9, 0.05).unwrap()),
    /// );
    /// let hours: Vec<usize> = engine.run().map(|r| r.hour).collect();
    /// assert_eq!(hours, vec![0, 1, 2]);
    /// ```
    pub fn run(self) -> Run {
        let clock = Clock::new(self.config.total_hours());
        Run {
            engine: self,
            clock,
        }
    }

    /// Runs to completion and collects every record.
    pub fn run_to_end(self) -> Vec<StatusRecord> {
        self.run().collect()
    }

    fn sunlight_at(&self, hour: usize) -> f64 {
        self.config.cycle().sunlight_at(hour)
    }

    pub fn battery(&self) -> &Battery {
        self.controller.battery()
    }

    pub fn panel(&self) -> &SolarPanel {
        &self.panel
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

/// Lazy, finite sequence of hourly status records produced by [`Engine::run`].
#[derive(Debug)]
pub struct Run {
    engine: Engine,
    clock: Clock,
}

impl Run {
    /// The engine in its current state (battery reflects the last yielded hour).
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Total hours the run will produce.
    pub fn total_hours(&self) -> usize {
        self.clock.total()
    }
}

impl Iterator for Run {
    type Item = StatusRecord;

    fn next(&mut self) -> Option<StatusRecord> {
        let hour = self.clock.tick()?;
        Some(self.engine.step(hour))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.clock.size_hint()
    }
}

impl ExactSizeIterator for Run {}

impl FusedIterator for Run {}
