use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::config::{ConfigError, ScenarioConfig};

/// Preset used when neither `--scenario` nor `--preset` is given.
pub const DEFAULT_PRESET: &str = "lunar_month";

/// Solar charging station simulator for the lunar day/night cycle.
#[derive(Debug, Parser)]
#[command(name = "lunar-charge-sim", version, about, long_about = None)]
pub struct Args {
    /// Load the scenario from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (lunar_month, three_lunations, large_array)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the number of simulated hours
    #[arg(long, value_name = "N")]
    pub hours: Option<usize>,

    /// Export status records to CSV
    #[arg(long, value_name = "PATH")]
    pub telemetry_out: Option<PathBuf>,

    /// Pause after each printed hour (cosmetic)
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub throttle_ms: u64,

    /// Suppress the per-hour status lines
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Open the live terminal view instead of printing
    #[cfg(feature = "tui")]
    #[arg(long, default_value_t = false)]
    pub tui: bool,
}

impl Args {
    /// Resolves the scenario: `--scenario` first, then `--preset`, then the default preset.
    /// `--hours` is applied on top.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file or preset cannot be loaded.
    pub fn load_scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut scenario = if let Some(ref path) = self.scenario {
            ScenarioConfig::from_toml_file(path)?
        } else {
            ScenarioConfig::from_preset(self.preset.as_deref().unwrap_or(DEFAULT_PRESET))?
        };
        if let Some(hours) = self.hours {
            scenario.simulation.total_hours = hours;
        }
        Ok(scenario)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("lunar-charge-sim").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_runs_default_preset() {
        let args = parse(&[]).expect("parse should succeed");
        assert!(args.scenario.is_none());
        assert!(args.preset.is_none());
        let scenario = args.load_scenario().expect("default preset loads");
        assert_eq!(scenario.simulation.total_hours, 672);
        assert_eq!(args.throttle(), Duration::ZERO);
    }

    #[test]
    fn supports_preset_and_hours_override() {
        let args = parse(&["--preset", "large_array", "--hours", "10"]).expect("parse");
        let scenario = args.load_scenario().expect("preset loads");
        assert_eq!(scenario.simulation.total_hours, 10);
        assert_eq!(scenario.panel.area_m2, 10.0);
    }

    #[test]
    fn scenario_and_preset_are_mutually_exclusive() {
        assert!(parse(&["--scenario", "a.toml", "--preset", "lunar_month"]).is_err());
    }

    #[test]
    fn unknown_preset_is_config_error() {
        let args = parse(&["--preset", "mars"]).expect("parse");
        assert!(matches!(
            args.load_scenario(),
            Err(ConfigError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn verbosity_counts() {
        let args = parse(&["-vv", "--quiet"]).expect("parse");
        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }

    #[test]
    fn throttle_in_millis() {
        let args = parse(&["--throttle-ms", "100"]).expect("parse");
        assert_eq!(args.throttle(), Duration::from_millis(100));
    }
}
