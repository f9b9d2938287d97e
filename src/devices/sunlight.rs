use crate::config::ConfigError;

/// Length of one lunar day (and one lunar night) in hours.
pub const DEFAULT_DAY_LENGTH_HOURS: usize = 14 * 24;

/// Square-wave lunar day/night schedule with a validated day length.
///
/// The cycle has period `2 * day_length_hours`: the first `day_length_hours`
/// of each period are full daylight (`1.0`), the rest full darkness (`0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarCycle {
    day_length_hours: usize,
}

impl LunarCycle {
    /// Creates a cycle alternating `day_length_hours` of light and of darkness.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if `day_length_hours` is zero.
    pub fn new(day_length_hours: usize) -> Result<Self, ConfigError> {
        if day_length_hours == 0 {
            return Err(ConfigError::invalid(
                "simulation.day_length_hours",
                "must be > 0",
            ));
        }
        Ok(Self { day_length_hours })
    }

    pub fn day_length_hours(&self) -> usize {
        self.day_length_hours
    }

    /// Full day plus night, in hours (saturates at `usize::MAX`).
    pub fn period_hours(&self) -> usize {
        self.day_length_hours.saturating_mul(2)
    }

    /// Returns the sunlight fraction for `hour`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_charge_sim::devices::LunarCycle;
    ///
    /// let cycle = LunarCycle::new(336).unwrap();
    /// assert_eq!(cycle.sunlight_at(0), 1.0);
    /// assert_eq!(cycle.sunlight_at(335), 1.0);
    /// assert_eq!(cycle.sunlight_at(336), 0.0);
    /// assert_eq!(cycle.sunlight_at(672), 1.0);
    /// ```
    pub fn sunlight_at(&self, hour: usize) -> f64 {
        // period_hours() >= 2 since day_length_hours > 0
        if hour % self.period_hours() < self.day_length_hours {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_daylight(&self, hour: usize) -> bool {
        self.sunlight_at(hour) > 0.0
    }
}

impl Default for LunarCycle {
    fn default() -> Self {
        Self {
            day_length_hours: DEFAULT_DAY_LENGTH_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_wave_over_two_periods() {
        let cycle = LunarCycle::new(5).expect("valid day length");
        for h in 0..40 {
            let expected = if h % 10 < 5 { 1.0 } else { 0.0 };
            assert_eq!(cycle.sunlight_at(h), expected, "hour {h}");
        }
    }

    #[test]
    fn sunlight_always_in_unit_interval() {
        let cycle = LunarCycle::default();
        for h in (0..5000).step_by(7) {
            let s = cycle.sunlight_at(h);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn lunar_boundaries() {
        let cycle = LunarCycle::default();
        assert_eq!(cycle.period_hours(), 672);
        assert!(cycle.is_daylight(0));
        assert!(cycle.is_daylight(335));
        assert!(!cycle.is_daylight(336));
        assert!(!cycle.is_daylight(671));
        assert!(cycle.is_daylight(672));
    }

    #[test]
    fn zero_day_length_rejected() {
        let err = LunarCycle::new(0);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidConfiguration { ref field, .. })
                if field == "simulation.day_length_hours"
        ));
    }

    #[test]
    fn huge_day_length_does_not_overflow() {
        let cycle = LunarCycle::new(usize::MAX).expect("valid day length");
        assert_eq!(cycle.period_hours(), usize::MAX);
        assert!(cycle.is_daylight(usize::MAX - 1));
    }

    #[test]
    fn custom_day_length() {
        let cycle = LunarCycle::new(12).expect("valid day length");
        assert_eq!(cycle.day_length_hours(), 12);
        assert!(cycle.is_daylight(11));
        assert!(!cycle.is_daylight(12));
        assert!(cycle.is_daylight(24));
    }
}
