use crate::devices::Battery;

/// Step length used for every charging call, in hours.
pub const CONTROL_PERIOD_HOURS: f64 = 1.0;

/// Charge controller routing all generated power into the battery.
///
/// Owns the battery it manages. There is no peak tracking and no current or
/// voltage limiting: every call charges for one fixed hour.
#[derive(Debug, Clone)]
pub struct ChargeController {
    battery: Battery,
}

impl ChargeController {
    pub fn new(battery: Battery) -> Self {
        Self { battery }
    }

    /// Charges the battery with `power_w` for one control period.
    pub fn manage_charging(&mut self, power_w: f64) {
        self.battery.charge(power_w, CONTROL_PERIOD_HOURS);
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    pub fn battery_mut(&mut self) -> &mut Battery {
        &mut self.battery
    }

    /// Releases the managed battery.
    pub fn into_battery(self) -> Battery {
        self.battery
    }
}

#[cfg(test)]
mod tests {
    use super::ChargeController;
    use crate::devices::{Battery, BatterySpec};

    fn controller() -> ChargeController {
        let spec = BatterySpec::new(5000.0, 0.9, 0.05).expect("valid battery");
        ChargeController::new(Battery::new(spec))
    }

    #[test]
    fn charges_for_one_hour() {
        let mut c = controller();
        c.manage_charging(400.0);
        assert!((c.battery().current_charge_wh() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn zero_power_leaves_battery_untouched() {
        let mut c = controller();
        c.manage_charging(400.0);
        let before = c.battery().current_charge_wh();
        c.manage_charging(0.0);
        assert_eq!(c.battery().current_charge_wh(), before);
    }

    #[test]
    fn matches_direct_battery_charge() {
        let mut c = controller();
        let mut direct = c.battery().clone();
        for p in [120.0, 0.0, 999.5, 4000.0] {
            c.manage_charging(p);
            direct.charge(p, 1.0);
        }
        assert_eq!(c.into_battery(), direct);
    }
}
