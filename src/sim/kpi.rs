//! Post-hoc run summary computed from status records.

use std::fmt;

use super::types::StatusRecord;

/// Charge below which the battery counts as depleted (Wh).
pub const DEPLETED_THRESHOLD_WH: f64 = 1.0;

/// Aggregate figures derived from a complete simulation run.
///
/// Computed from the record slice so reported numbers always agree with the
/// per-hour output.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of simulated hours.
    pub hours: usize,
    /// Hours with non-zero sunlight.
    pub daylight_hours: usize,
    /// Energy generated by the panel (Wh, one-hour steps).
    pub generated_energy_wh: f64,
    /// Highest end-of-hour charge (Wh).
    pub peak_charge_wh: f64,
    /// Charge after the last hour (Wh).
    pub final_charge_wh: f64,
    /// Mean end-of-hour charge (Wh).
    pub mean_charge_wh: f64,
    /// Peak charge as a percentage of capacity.
    pub peak_soc_pct: f64,
    /// Hours ending with less than [`DEPLETED_THRESHOLD_WH`] stored.
    pub depleted_hours: usize,
}

impl RunSummary {
    /// Computes the summary from the ordered record sequence.
    ///
    /// # Arguments
    ///
    /// * `records` - Status records of one run
    /// * `capacity_wh` - Battery capacity for the state-of-charge figure
    pub fn from_records(records: &[StatusRecord], capacity_wh: f64) -> Self {
        let Some(last) = records.last() else {
            return Self {
                hours: 0,
                daylight_hours: 0,
                generated_energy_wh: 0.0,
                peak_charge_wh: 0.0,
                final_charge_wh: 0.0,
                mean_charge_wh: 0.0,
                peak_soc_pct: 0.0,
                depleted_hours: 0,
            };
        };

        let mut daylight_hours = 0_usize;
        let mut generated = 0.0_f64;
        let mut peak = 0.0_f64;
        let mut charge_sum = 0.0_f64;
        let mut depleted = 0_usize;

        for r in records {
            if r.sunlight > 0.0 {
                daylight_hours += 1;
            }
            generated += r.power_generated_w;
            peak = peak.max(r.charge_level_wh);
            charge_sum += r.charge_level_wh;
            if r.charge_level_wh < DEPLETED_THRESHOLD_WH {
                depleted += 1;
            }
        }

        let peak_soc_pct = if capacity_wh > 0.0 {
            100.0 * peak / capacity_wh
        } else {
            0.0
        };

        Self {
            hours: records.len(),
            daylight_hours,
            generated_energy_wh: generated,
            peak_charge_wh: peak,
            final_charge_wh: last.charge_level_wh,
            mean_charge_wh: charge_sum / records.len() as f64,
            peak_soc_pct,
            depleted_hours: depleted,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Run Summary ---")?;
        writeln!(
            f,
            "Hours simulated:     {} ({} daylight)",
            self.hours, self.daylight_hours
        )?;
        writeln!(f, "Energy generated:    {:.2} Wh", self.generated_energy_wh)?;
        writeln!(
            f,
            "Peak charge:         {:.2} Wh ({:.1}%)",
            self.peak_charge_wh, self.peak_soc_pct
        )?;
        writeln!(f, "Mean charge:         {:.2} Wh", self.mean_charge_wh)?;
        writeln!(f, "Final charge:        {:.2} Wh", self.final_charge_wh)?;
        write!(f, "Hours depleted:      {}", self.depleted_hours)
    }
}
