//! Physical components of the charging station.

/// Battery storage with lossy charging and self-discharge.
pub mod battery;
/// Photovoltaic panel power model.
pub mod panel;
/// Lunar day/night sunlight schedule.
pub mod sunlight;

pub use battery::{Battery, BatterySpec};
pub use panel::{PanelSpec, SolarPanel};
pub use sunlight::LunarCycle;
