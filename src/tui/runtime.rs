//! Replay state for the live view.

use std::collections::VecDeque;
use std::time::Instant;

use crate::config::{ConfigError, ScenarioConfig};
use crate::sim::engine::Run;
use crate::sim::types::{LUNAR_MONTH_HOURS, StatusRecord};

/// Records kept for the rolling charts (one lunar month).
const MAX_HISTORY: usize = LUNAR_MONTH_HOURS;

/// Tick interval options in milliseconds (slowest → fastest).
const SPEED_LEVELS_MS: [u64; 6] = [500, 250, 100, 50, 20, 5];

/// Default speed index (100 ms per simulated hour).
const DEFAULT_SPEED_IDX: usize = 2;

/// TUI application state.
pub struct App {
    /// The run being replayed.
    run: Run,
    /// Scenario kept for restart.
    scenario: ScenarioConfig,
    /// Rolling history of status records for the charts.
    pub history: VecDeque<StatusRecord>,
    /// Whether the replay is paused.
    pub paused: bool,
    /// Current index into `SPEED_LEVELS_MS`.
    pub speed_idx: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the last simulated hour was shown.
    pub last_tick: Instant,
    /// Scenario label shown in the header.
    pub label: String,
}

impl App {
    /// Creates the replay for `scenario`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the scenario fails validation.
    pub fn new(scenario: ScenarioConfig, label: &str) -> Result<Self, ConfigError> {
        let run = scenario.build_engine()?.run();
        Ok(Self {
            run,
            scenario,
            history: VecDeque::with_capacity(MAX_HISTORY),
            paused: false,
            speed_idx: DEFAULT_SPEED_IDX,
            quit: false,
            last_tick: Instant::now(),
            label: label.to_string(),
        })
    }

    /// Simulates the next hour if the run is not finished.
    pub fn tick(&mut self) {
        let Some(record) = self.run.next() else {
            return;
        };
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(record);
    }

    /// Toggles pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Shortens the tick interval.
    pub fn speed_up(&mut self) {
        if self.speed_idx + 1 < SPEED_LEVELS_MS.len() {
            self.speed_idx += 1;
        }
    }

    /// Lengthens the tick interval.
    pub fn speed_down(&mut self) {
        if self.speed_idx > 0 {
            self.speed_idx -= 1;
        }
    }

    /// Returns the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        SPEED_LEVELS_MS[self.speed_idx]
    }

    /// Switches to a built-in preset, resetting the replay.
    ///
    /// Unknown names leave the current replay untouched.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        if self.reset_to(scenario) {
            self.label = name.to_string();
        }
    }

    /// Restarts the current scenario from hour 0.
    pub fn restart(&mut self) {
        let scenario = self.scenario.clone();
        self.reset_to(scenario);
    }

    fn reset_to(&mut self, scenario: ScenarioConfig) -> bool {
        let Ok(engine) = scenario.build_engine() else {
            return false;
        };
        self.run = engine.run();
        self.scenario = scenario;
        self.history.clear();
        self.paused = false;
        true
    }

    /// Hours simulated so far.
    pub fn hours_done(&self) -> usize {
        self.total_hours() - self.run.len()
    }

    pub fn total_hours(&self) -> usize {
        self.run.total_hours()
    }

    /// Returns `true` when every hour has been simulated.
    pub fn is_finished(&self) -> bool {
        self.run.is_finished()
    }

    /// Battery state of charge after the latest hour.
    pub fn battery_soc(&self) -> f64 {
        self.run.engine().battery().soc()
    }

    pub fn capacity_wh(&self) -> f64 {
        self.run.engine().battery().capacity_wh()
    }

    pub fn rated_power_w(&self) -> f64 {
        self.run.engine().panel().rated_power_w()
    }

    /// Returns the most recent status record, if any.
    pub fn last_record(&self) -> Option<&StatusRecord> {
        self.history.back()
    }

    /// Whether the hour about to be simulated is lunar daytime.
    pub fn is_daylight(&self) -> bool {
        self.run
            .engine()
            .config()
            .cycle()
            .is_daylight(self.hours_done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_scenario(hours: usize) -> ScenarioConfig {
        let mut scenario = ScenarioConfig::lunar_month();
        scenario.simulation.total_hours = hours;
        scenario
    }

    #[test]
    fn app_creates_and_ticks() {
        let mut app = App::new(short_scenario(10), "test").expect("valid scenario");
        assert_eq!(app.hours_done(), 0);
        assert!(!app.is_finished());

        app.tick();
        assert_eq!(app.hours_done(), 1);
        assert_eq!(app.history.len(), 1);
        assert!((app.battery_soc() - 342.0 / 5000.0).abs() < 1e-9);
    }

    #[test]
    fn app_finishes_after_total_hours() {
        let mut app = App::new(short_scenario(5), "test").expect("valid scenario");
        for _ in 0..app.total_hours() {
            app.tick();
        }
        assert!(app.is_finished());
        app.tick(); // no-op
        assert_eq!(app.hours_done(), 5);
        assert_eq!(app.history.len(), 5);
    }

    #[test]
    fn invalid_scenario_rejected() {
        let mut scenario = short_scenario(5);
        scenario.battery.capacity_wh = 0.0;
        assert!(App::new(scenario, "bad").is_err());
    }

    #[test]
    fn speed_controls_stay_in_bounds() {
        let mut app = App::new(short_scenario(1), "test").expect("valid scenario");
        for _ in 0..10 {
            app.speed_down();
        }
        assert_eq!(app.speed_idx, 0);
        for _ in 0..10 {
            app.speed_up();
        }
        assert_eq!(app.speed_idx, SPEED_LEVELS_MS.len() - 1);
    }

    #[test]
    fn switch_preset_resets_state() {
        let mut app = App::new(short_scenario(10), "test").expect("valid scenario");
        app.tick();
        app.tick();
        app.switch_preset("large_array");
        assert_eq!(app.hours_done(), 0);
        assert!(app.history.is_empty());
        assert_eq!(app.label, "large_array");
        assert!((app.rated_power_w() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_preset_keeps_replay() {
        let mut app = App::new(short_scenario(10), "test").expect("valid scenario");
        app.tick();
        app.switch_preset("nope");
        assert_eq!(app.hours_done(), 1);
        assert_eq!(app.label, "test");
    }

    #[test]
    fn restart_resets_state() {
        let mut app = App::new(short_scenario(10), "test").expect("valid scenario");
        for _ in 0..5 {
            app.tick();
        }
        app.restart();
        assert_eq!(app.hours_done(), 0);
        assert!(app.history.is_empty());
        assert_eq!(app.battery_soc(), 0.0);
    }

    #[test]
    fn history_caps_at_one_month() {
        let mut app = App::new(short_scenario(MAX_HISTORY + 20), "test").expect("valid");
        for _ in 0..app.total_hours() {
            app.tick();
        }
        assert_eq!(app.history.len(), MAX_HISTORY);
        assert_eq!(app.history.front().map(|r| r.hour), Some(20));
    }

    #[test]
    fn daylight_tracks_next_hour() {
        let mut scenario = short_scenario(4);
        scenario.simulation.day_length_hours = 1;
        let mut app = App::new(scenario, "test").expect("valid scenario");
        assert!(app.is_daylight());
        app.tick();
        assert!(!app.is_daylight());
    }
}
