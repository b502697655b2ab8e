//! Saturation of moist air over liquid water and ice.
//!
//! `ln(Pws)` is the Hyland-Wexler fit of the ASHRAE Handbook (2017, ch. 1,
//! eqn. 5 and 6):
//!
//! ```text
//! ln Pws = C₋₁/T + C₀ + C₁·T + C₂·T² + C₃·T³ + C₄·T⁴ + Cₗₙ·ln T
//! ```
//!
//! with `T` absolute.  The ice branch is used up to and including the
//! **triple point** of water, the liquid branch above it.  Splitting at
//! the freezing point instead leaves a jump in the curve between 0 and
//! 0.01 °C that the dew-point solver cannot converge across.

use crate::error::*;
use crate::psychrometrics::{MIN_HUM_RATIO, Psychrometrics};
use crate::converter::UnitSystem;

/// Coefficients `[C₋₁, C₀, C₁, C₂, C₃, C₄, Cₗₙ]` of one branch of the curve.
type LnPwsCoefficients = [f64; 7];

// T in K, Pws in Pa
static SI_OVER_ICE: LnPwsCoefficients = [
    -5.6745359E+03, 6.3925247, -9.677843E-03, 6.2215701E-07, 2.0747825E-09, -9.484024E-13, 4.1635019,
];
static SI_OVER_WATER: LnPwsCoefficients = [
    -5.8002206E+03, 1.3914993, -4.8640239E-02, 4.1764768E-05, -1.4452093E-08, 0.0, 6.5459673,
];

// T in °R, Pws in psi
static IP_OVER_ICE: LnPwsCoefficients = [
    -1.0214165E+04, -4.8932428, -5.3765794E-03, 1.9202377E-07, 3.5575832E-10, -9.0344688E-14, 4.1635019,
];
static IP_OVER_WATER: LnPwsCoefficients = [
    -1.0440397E+04, -1.1294650E+01, -2.7022355E-02, 1.2890360E-05, -2.4780681E-09, 0.0, 6.5459673,
];

fn ln_pws(c: &LnPwsCoefficients, t: f64) -> f64 {
    c[0] / t + c[1] + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5]))) + c[6] * t.ln()
}

/// Derivative of [`ln_pws`] with respect to absolute temperature.
fn d_ln_pws(c: &LnPwsCoefficients, t: f64) -> f64 {
    -c[0] / (t * t) + c[2] + t * (2.0 * c[3] + t * (3.0 * c[4] + t * 4.0 * c[5])) + c[6] / t
}

impl Psychrometrics {
    fn ln_pws_coefficients(&self, t_dry_bulb: f64) -> &'static LnPwsCoefficients {
        let over_ice = t_dry_bulb <= self.coefficients().triple_point;
        match (self.unit_system(), over_ice) {
            (UnitSystem::Metric, true) => &SI_OVER_ICE,
            (UnitSystem::Metric, false) => &SI_OVER_WATER,
            (UnitSystem::Imperial, true) => &IP_OVER_ICE,
            (UnitSystem::Imperial, false) => &IP_OVER_WATER,
        }
    }

    /// Vapor pressure of saturated air, in psi [IP] or Pa [SI].
    ///
    /// Valid for dry-bulb temperatures in [-148, 392] °F or [-100, 200] °C;
    /// anything else (including NaN) is a [`PsychroError::Range`].
    pub fn sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64> {
        self.validate_t_dry_bulb_range(t_dry_bulb)?;
        let t = self.unit_system().absolute_temperature(t_dry_bulb);
        Ok(ln_pws(self.ln_pws_coefficients(t_dry_bulb), t).exp())
    }

    /// Derivative of `ln(sat_vap_pres)` with respect to temperature.
    ///
    /// Callers keep `t_dry_bulb` inside the valid domain.
    pub(crate) fn d_ln_sat_vap_pres(&self, t_dry_bulb: f64) -> f64 {
        let t = self.unit_system().absolute_temperature(t_dry_bulb);
        d_ln_pws(self.ln_pws_coefficients(t_dry_bulb), t)
    }

    /// Humidity ratio of saturated air, in lb_H₂O/lb_da [IP] or
    /// kg_H₂O/kg_da [SI].
    pub fn sat_hum_ratio(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Self::validate_pressure(pressure)?;
        let sat_vap_pres = self.sat_vap_pres(t_dry_bulb)?;
        let sat_hum_ratio = 0.621945 * sat_vap_pres / (pressure - sat_vap_pres);
        Ok(sat_hum_ratio.max(MIN_HUM_RATIO))
    }

    /// Enthalpy of saturated air, in Btu/lb [IP] or J/kg [SI].
    pub fn sat_air_enthalpy(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        self.moist_air_enthalpy(t_dry_bulb, self.sat_hum_ratio(t_dry_bulb, pressure)?)
    }
}
