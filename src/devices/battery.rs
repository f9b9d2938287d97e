use crate::config::ConfigError;

/// Immutable battery parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterySpec {
    capacity_wh: f64,
    charge_efficiency: f64,
    discharge_rate_per_hour: f64,
}

impl BatterySpec {
    /// Creates a validated battery specification.
    ///
    /// # Arguments
    ///
    /// * `capacity_wh` - Usable capacity in watt-hours (must be > 0)
    /// * `charge_efficiency` - Fraction of input energy stored, in `(0, 1]`
    /// * `discharge_rate_per_hour` - Proportional self-discharge per hour, in `[0, 1)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` naming the offending field.
    pub fn new(
        capacity_wh: f64,
        charge_efficiency: f64,
        discharge_rate_per_hour: f64,
    ) -> Result<Self, ConfigError> {
        if !(capacity_wh > 0.0 && capacity_wh.is_finite()) {
            return Err(ConfigError::invalid(
                "battery.capacity_wh",
                format!("must be a finite value > 0, got {capacity_wh}"),
            ));
        }
        if !(charge_efficiency > 0.0 && charge_efficiency <= 1.0) {
            return Err(ConfigError::invalid(
                "battery.charge_efficiency",
                format!("must be in (0.0, 1.0], got {charge_efficiency}"),
            ));
        }
        if !(0.0..1.0).contains(&discharge_rate_per_hour) {
            return Err(ConfigError::invalid(
                "battery.discharge_rate_per_hour",
                format!("must be in [0.0, 1.0), got {discharge_rate_per_hour}"),
            ));
        }
        Ok(Self {
            capacity_wh,
            charge_efficiency,
            discharge_rate_per_hour,
        })
    }

    pub fn capacity_wh(&self) -> f64 {
        self.capacity_wh
    }

    pub fn charge_efficiency(&self) -> f64 {
        self.charge_efficiency
    }

    pub fn discharge_rate_per_hour(&self) -> f64 {
        self.discharge_rate_per_hour
    }
}

/// An energy store with lossy charging and proportional self-discharge.
///
/// The charge level starts at zero and is clamped to `[0, capacity]` after
/// every mutation. Overflow and underflow are absorbed by the clamp rather
/// than reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    spec: BatterySpec,
    charge_level_wh: f64,
}

impl Battery {
    /// Creates an empty battery.
    pub fn new(spec: BatterySpec) -> Self {
        Self {
            spec,
            charge_level_wh: 0.0,
        }
    }

    pub fn spec(&self) -> &BatterySpec {
        &self.spec
    }

    /// Stores `power_w * charge_efficiency * period_hours` watt-hours.
    ///
    /// Negative or NaN energy is ignored, so the charge level never leaves
    /// `[0, capacity]`.
    ///
    /// # Arguments
    ///
    /// * `power_w` - Input power in watts (non-negative)
    /// * `period_hours` - Duration the power is applied for
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_charge_sim::devices::{Battery, BatterySpec};
    ///
    /// let mut battery = Battery::new(BatterySpec::new(5000.0, 0.9, 0.05).unwrap());
    /// battery.charge(400.0, 1.0);
    /// assert!((battery.current_charge_wh() - 360.0).abs() < 1e-9);
    /// ```
    pub fn charge(&mut self, power_w: f64, period_hours: f64) {
        if power_w > 0.0 && period_hours > 0.0 {
            self.charge_level_wh += power_w * self.spec.charge_efficiency * period_hours;
        }
        self.clamp();
    }

    /// Removes `charge_level * discharge_rate * period_hours` watt-hours.
    ///
    /// Negative or NaN losses are ignored.
    pub fn discharge(&mut self, period_hours: f64) {
        let lost_wh = self.charge_level_wh * self.spec.discharge_rate_per_hour * period_hours;
        if lost_wh > 0.0 {
            self.charge_level_wh -= lost_wh;
        }
        self.clamp();
    }

    pub fn current_charge_wh(&self) -> f64 {
        self.charge_level_wh
    }

    pub fn capacity_wh(&self) -> f64 {
        self.spec.capacity_wh
    }

    /// State of charge as a fraction (0.0 to 1.0).
    pub fn soc(&self) -> f64 {
        self.charge_level_wh / self.spec.capacity_wh
    }

    pub fn is_full(&self) -> bool {
        self.charge_level_wh >= self.spec.capacity_wh
    }

    fn clamp(&mut self) {
        self.charge_level_wh = self.charge_level_wh.clamp(0.0, self.spec.capacity_wh);
    }
}
