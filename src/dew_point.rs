//! Dew-point temperature.
//!
//! [`Psychrometrics::t_dew_point_from_vap_pres`] inverts the saturation
//! curve with Newton-Raphson on `ln Pws(T) - ln Pw`, using the closed-form
//! derivative of the curve.  It typically converges in 3 to 5 iterations
//! and is both wider in range and more accurate than the handbook's
//! regression formulas (eqn. 37 and 38).

use crate::error::*;
use crate::psychrometrics::{MAX_ITER_COUNT, Psychrometrics};

impl Psychrometrics {
    /// Dew-point temperature from partial pressure of water vapor, in °F
    /// [IP] or °C [SI].
    ///
    /// `t_dry_bulb` is the starting point of the iteration and an upper
    /// bound on the result.  Both it and `vap_pres` must lie inside the
    /// domain of the saturation equations, otherwise a
    /// [`PsychroError::Range`] is returned.
    pub fn t_dew_point_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        self.validate_t_dry_bulb_range(t_dry_bulb)?;
        Self::validate_vap_pres(vap_pres)?;

        let (t_min, t_max) = self.t_dry_bulb_bounds();
        let (p_min, p_max) = (self.sat_vap_pres(t_min)?, self.sat_vap_pres(t_max)?);
        if !(p_min..=p_max).contains(&vap_pres) {
            return Err(PsychroError::Range(format!(
                "Partial pressure of water vapor {vap_pres} is outside range of validity \
                 of equations [{p_min}, {p_max}] {}",
                self.unit_system().pressure_unit()
            )));
        }

        let tolerance = self.tolerance();
        let ln_vp = vap_pres.ln();
        let mut t_dew_point = t_dry_bulb;

        for iteration in 1..=MAX_ITER_COUNT {
            let t_iter = t_dew_point;
            let ln_vp_iter = self.sat_vap_pres(t_iter)?.ln();
            let d_ln_vp = self.d_ln_sat_vap_pres(t_iter);

            t_dew_point = (t_iter - (ln_vp_iter - ln_vp) / d_ln_vp).clamp(t_min, t_max);
            log::trace!("dew point iteration {iteration}: T = {t_dew_point}");

            if (t_dew_point - t_iter).abs() <= tolerance {
                log::debug!("dew point converged in {iteration} iterations");
                return Ok(t_dew_point.min(t_dry_bulb));
            }
        }

        log::warn!(
            "dew point did not converge for t_dry_bulb = {t_dry_bulb}, vap_pres = {vap_pres}"
        );
        Err(PsychroError::Convergence {
            solver: "t_dew_point_from_vap_pres",
            iterations: MAX_ITER_COUNT,
        })
    }

    /// Partial pressure of water vapor at a dew point, i.e. the saturation
    /// pressure at that temperature.
    pub fn vap_pres_from_t_dew_point(&self, t_dew_point: f64) -> Result<f64> {
        self.sat_vap_pres(t_dew_point)
    }

    pub fn t_dew_point_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    pub fn rel_hum_from_t_dew_point(&self, t_dry_bulb: f64, t_dew_point: f64) -> Result<f64> {
        Self::validate_below_dry_bulb("Dew point temperature", t_dew_point, t_dry_bulb)?;
        Ok(self.sat_vap_pres(t_dew_point)? / self.sat_vap_pres(t_dry_bulb)?)
    }

    pub fn hum_ratio_from_t_dew_point(&self, t_dew_point: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.sat_vap_pres(t_dew_point)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    pub fn t_dew_point_from_hum_ratio(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    pub fn t_dew_point_from_t_wet_bulb(&self, t_dry_bulb: f64, t_wet_bulb: f64, pressure: f64) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }
}
