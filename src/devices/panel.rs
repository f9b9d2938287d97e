use crate::config::ConfigError;

/// Scale from the normalized panel coefficient to watts.
const POWER_SCALE_W: f64 = 1000.0;

/// Immutable photovoltaic panel parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    efficiency: f64,
    area_m2: f64,
}

impl PanelSpec {
    /// Creates a validated panel specification.
    ///
    /// # Arguments
    ///
    /// * `efficiency` - Conversion efficiency in `(0, 1]`
    /// * `area_m2` - Panel area in square meters (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` naming the offending field.
    pub fn new(efficiency: f64, area_m2: f64) -> Result<Self, ConfigError> {
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(ConfigError::invalid(
                "panel.efficiency",
                format!("must be in (0.0, 1.0], got {efficiency}"),
            ));
        }
        if !(area_m2 > 0.0 && area_m2.is_finite()) {
            return Err(ConfigError::invalid(
                "panel.area_m2",
                format!("must be a finite value > 0, got {area_m2}"),
            ));
        }
        Ok(Self {
            efficiency,
            area_m2,
        })
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }
}

/// A solar array converting a sunlight fraction into generated power.
///
/// `power = sunlight * efficiency * area * 1000`. The output is always
/// non-negative; generation is reported as a positive number of watts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPanel {
    spec: PanelSpec,
}

impl SolarPanel {
    pub fn new(spec: PanelSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    /// Instantaneous generated power in watts for a sunlight fraction.
    ///
    /// Sunlight outside `[0, 1]` is clamped first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_charge_sim::devices::{PanelSpec, SolarPanel};
    ///
    /// let panel = SolarPanel::new(PanelSpec::new(0.2, 2.0).unwrap());
    /// assert_eq!(panel.generated_power_w(1.0), 400.0);
    /// assert_eq!(panel.generated_power_w(0.0), 0.0);
    /// ```
    pub fn generated_power_w(&self, sunlight: f64) -> f64 {
        sunlight.clamp(0.0, 1.0) * self.spec.efficiency * self.spec.area_m2 * POWER_SCALE_W
    }

    /// Peak output under full sunlight.
    pub fn rated_power_w(&self) -> f64 {
        self.generated_power_w(1.0)
    }
}
