//! Wet-bulb temperature.
//!
//! The thermodynamic wet-bulb relation (ASHRAE 2017, ch. 1, eqn. 33 and
//! 35) gives the humidity ratio directly from a wet-bulb temperature, but
//! switches formula at the freezing point and is awkward to differentiate
//! in the other direction.  The inverse is therefore found by bisection
//! between the dew point (lower bound) and the dry bulb (upper bound).

use crate::converter::UnitSystem;
use crate::error::*;
use crate::moist_air::bounded_hum_ratio;
use crate::psychrometrics::{MAX_ITER_COUNT, MIN_HUM_RATIO, Psychrometrics};

impl Psychrometrics {
    /// Wet-bulb temperature from humidity ratio, in °F [IP] or °C [SI].
    ///
    /// Humidity ratios below [`MIN_HUM_RATIO`] are treated as
    /// `MIN_HUM_RATIO`; the result always lies between the dew point and
    /// the dry bulb.
    pub fn t_wet_bulb_from_hum_ratio(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let hum_ratio = bounded_hum_ratio(hum_ratio)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;

        let tolerance = self.tolerance();
        let mut upper = t_dry_bulb;
        let mut lower = t_dew_point;
        let mut t_wet_bulb = (lower + upper) / 2.0;
        let mut iterations = 0;

        while upper - lower > tolerance {
            iterations += 1;
            if iterations > MAX_ITER_COUNT {
                log::warn!(
                    "wet bulb did not converge for t_dry_bulb = {t_dry_bulb}, \
                     hum_ratio = {hum_ratio}, pressure = {pressure}"
                );
                return Err(PsychroError::Convergence {
                    solver: "t_wet_bulb_from_hum_ratio",
                    iterations: MAX_ITER_COUNT,
                });
            }

            let w_star = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
            if w_star > hum_ratio {
                upper = t_wet_bulb;
            } else {
                lower = t_wet_bulb;
            }
            t_wet_bulb = (lower + upper) / 2.0;
            log::trace!("wet bulb iteration {iterations}: [{lower}, {upper}]");
        }

        log::debug!("wet bulb converged in {iterations} iterations");
        Ok(t_wet_bulb)
    }

    /// Humidity ratio from wet-bulb temperature, in lb_H₂O/lb_da [IP] or
    /// kg_H₂O/kg_da [SI].
    ///
    /// The branch is chosen at the freezing point (water vs. ice on the
    /// wet bulb), not the triple point.
    pub fn hum_ratio_from_t_wet_bulb(&self, t_dry_bulb: f64, t_wet_bulb: f64, pressure: f64) -> Result<f64> {
        Self::validate_below_dry_bulb("Wet bulb temperature", t_wet_bulb, t_dry_bulb)?;
        let ws_star = self.sat_hum_ratio(t_wet_bulb, pressure)?;
        let above_freezing = t_wet_bulb >= self.coefficients().freezing_point;
        let (tdb, twb) = (t_dry_bulb, t_wet_bulb);

        let hum_ratio = match (self.unit_system(), above_freezing) {
            (UnitSystem::Imperial, true) => {
                ((1093.0 - 0.556 * twb) * ws_star - 0.240 * (tdb - twb))
                    / (1093.0 + 0.444 * tdb - twb)
            }
            (UnitSystem::Imperial, false) => {
                ((1220.0 - 0.04 * twb) * ws_star - 0.240 * (tdb - twb))
                    / (1220.0 + 0.444 * tdb - 0.48 * twb)
            }
            (UnitSystem::Metric, true) => {
                ((2501.0 - 2.326 * twb) * ws_star - 1.006 * (tdb - twb))
                    / (2501.0 + 1.86 * tdb - 4.186 * twb)
            }
            (UnitSystem::Metric, false) => {
                ((2830.0 - 0.24 * twb) * ws_star - 1.006 * (tdb - twb))
                    / (2830.0 + 1.86 * tdb - 2.1 * twb)
            }
        };
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    pub fn t_wet_bulb_from_t_dew_point(&self, t_dry_bulb: f64, t_dew_point: f64, pressure: f64) -> Result<f64> {
        Self::validate_below_dry_bulb("Dew point temperature", t_dew_point, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    pub fn t_wet_bulb_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64, pressure: f64) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    pub fn rel_hum_from_t_wet_bulb(&self, t_dry_bulb: f64, t_wet_bulb: f64, pressure: f64) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }
}
