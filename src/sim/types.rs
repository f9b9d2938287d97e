//! Core simulation types: run configuration and per-hour status records.

use std::fmt;

use crate::config::ConfigError;
use crate::devices::LunarCycle;

/// Hours in one full lunar day/night cycle.
pub const LUNAR_MONTH_HOURS: usize = 28 * 24;

/// Run length and lunar cycle of a simulation.
///
/// Every step covers exactly one hour. Only constructible through
/// [`SimConfig::new`] or [`Default`], so the day length is always valid.
///
/// # Examples
///
/// ```
/// use lunar_charge_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(672, 336).unwrap();
/// assert_eq!(cfg.total_hours(), 672);
/// assert_eq!(cfg.cycle().period_hours(), 672);
/// ```
///
/// Fields are private, so a struct literal does not compile:
///
/// ```compile_fail
/// use lunar_charge_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig { total_hours: 3, ..SimConfig::default() };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    total_hours: usize,
    cycle: LunarCycle,
}

impl SimConfig {
    /// Creates a validated run configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if `day_length_hours` is zero.
    pub fn new(total_hours: usize, day_length_hours: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            total_hours,
            cycle: LunarCycle::new(day_length_hours)?,
        })
    }

    /// Number of hourly steps to simulate (0 is an empty run).
    pub fn total_hours(&self) -> usize {
        self.total_hours
    }

    pub fn day_length_hours(&self) -> usize {
        self.cycle.day_length_hours()
    }

    /// Day/night schedule driving the panel.
    pub fn cycle(&self) -> &LunarCycle {
        &self.cycle
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_hours: LUNAR_MONTH_HOURS,
            cycle: LunarCycle::default(),
        }
    }
}

/// Snapshot of one simulated hour, taken after the discharge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRecord {
    /// Hour index, starting at 0.
    pub hour: usize,
    /// Sunlight fraction (0.0 to 1.0).
    pub sunlight: f64,
    /// Power generated by the panel during this hour (W).
    pub power_generated_w: f64,
    /// Battery charge level at the end of the hour (Wh).
    pub charge_level_wh: f64,
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hour: {}, Sunlight: {:.2}, Power Generated: {:.2} W, Battery Charge Level: {:.2} Wh",
            self.hour, self.sunlight, self.power_generated_w, self.charge_level_wh,
        )
    }
}
