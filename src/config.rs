//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::devices::sunlight::DEFAULT_DAY_LENGTH_HOURS;
use crate::devices::{Battery, BatterySpec, PanelSpec, SolarPanel};
use crate::sim::engine::Engine;
use crate::sim::types::{LUNAR_MONTH_HOURS, SimConfig};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the lunar-month scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::lunar_month`] for the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Run length and lunar day length.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Solar panel parameters.
    #[serde(default)]
    pub panel: PanelConfig,
    /// Battery storage parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
}

/// Run length and lunar day length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of hours to simulate (0 is an empty run).
    pub total_hours: usize,
    /// Hours of daylight, and of darkness, per lunar cycle (must be > 0).
    pub day_length_hours: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_hours: LUNAR_MONTH_HOURS,
            day_length_hours: DEFAULT_DAY_LENGTH_HOURS,
        }
    }
}

/// Solar panel parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Conversion efficiency (0.0–1.0].
    pub efficiency: f64,
    /// Panel area (m²).
    pub area_m2: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            efficiency: 0.2,
            area_m2: 2.0,
        }
    }
}

/// Battery storage parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Usable capacity (Wh).
    pub capacity_wh: f64,
    /// Fraction of input energy stored (0.0–1.0].
    pub charge_efficiency: f64,
    /// Proportional self-discharge per hour [0.0–1.0).
    pub discharge_rate_per_hour: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_wh: 5000.0,
            charge_efficiency: 0.9,
            discharge_rate_per_hour: 0.05,
        }
    }
}

/// Errors raised while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter is outside its physical domain.
    #[error("invalid configuration: {field} {message}")]
    InvalidConfiguration { field: String, message: String },
    /// The requested preset does not exist.
    #[error("unknown preset \"{name}\", available: {available}")]
    UnknownPreset { name: String, available: String },
    /// The scenario file could not be read.
    #[error("cannot read scenario \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The scenario TOML is malformed or has unknown fields.
    #[error("invalid scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Dotted field path for `InvalidConfiguration`, `None` otherwise.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["lunar_month", "three_lunations", "large_array"];

    /// One lunar month with the reference panel and battery.
    pub fn lunar_month() -> Self {
        Self::default()
    }

    /// Three consecutive lunar months with the reference hardware.
    pub fn three_lunations() -> Self {
        Self {
            simulation: SimulationConfig {
                total_hours: 3 * LUNAR_MONTH_HOURS,
                ..SimulationConfig::default()
            },
            ..Self::default()
        }
    }

    /// A 10 m² array that saturates the reference battery within the first day.
    pub fn large_array() -> Self {
        Self {
            panel: PanelConfig {
                area_m2: 10.0,
                ..PanelConfig::default()
            },
            ..Self::default()
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownPreset` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "lunar_month" => Ok(Self::lunar_month()),
            "three_lunations" => Ok(Self::three_lunations()),
            "large_array" => Ok(Self::large_array()),
            _ => Err(ConfigError::UnknownPreset {
                name: name.to_string(),
                available: Self::PRESETS.join(", "),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded scenario file");
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Validates all fields and returns every violation found.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.sim_config() {
            errors.push(e);
        }
        if let Err(e) = self.panel_spec() {
            errors.push(e);
        }

        // BatterySpec::new stops at the first bad field; report each one here.
        let b = &self.battery;
        if let Err(e) = BatterySpec::new(b.capacity_wh, 0.9, 0.0) {
            errors.push(e);
        }
        if let Err(e) = BatterySpec::new(1.0, b.charge_efficiency, 0.0) {
            errors.push(e);
        }
        if let Err(e) = BatterySpec::new(1.0, 0.9, b.discharge_rate_per_hour) {
            errors.push(e);
        }

        errors
    }

    /// Builds a ready-to-run engine with an empty battery.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidConfiguration` encountered.
    pub fn build_engine(&self) -> Result<Engine, ConfigError> {
        let sim = self.sim_config()?;
        let panel = SolarPanel::new(self.panel_spec()?);
        let battery = Battery::new(self.battery_spec()?);
        Ok(Engine::new(sim, panel, battery))
    }

    pub fn sim_config(&self) -> Result<SimConfig, ConfigError> {
        SimConfig::new(
            self.simulation.total_hours,
            self.simulation.day_length_hours,
        )
    }

    pub fn panel_spec(&self) -> Result<PanelSpec, ConfigError> {
        PanelSpec::new(self.panel.efficiency, self.panel.area_m2)
    }

    pub fn battery_spec(&self) -> Result<BatterySpec, ConfigError> {
        let b = &self.battery;
        BatterySpec::new(b.capacity_wh, b.charge_efficiency, b.discharge_rate_per_hour)
    }
}
