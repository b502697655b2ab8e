//! Complete psychrometric state from dry bulb, pressure and one humidity
//! variable.
//!
//! Each function first derives the humidity ratio from the known
//! variable, then the missing temperatures, relative humidity, vapor
//! pressure, enthalpy, volume and degree of saturation from it, in that
//! order.

use crate::error::*;
use crate::properties::PsychrometricState;
use crate::psychrometrics::Psychrometrics;

impl Psychrometrics {
    /// Psychrometric state from dry-bulb and wet-bulb temperature and
    /// pressure.
    pub fn calc_psychrometrics_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        Self::validate_below_dry_bulb("Wet bulb temperature", t_wet_bulb, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Psychrometric state from dry-bulb and dew-point temperature and
    /// pressure.
    pub fn calc_psychrometrics_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        Self::validate_below_dry_bulb("Dew point temperature", t_dew_point, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Psychrometric state from dry-bulb temperature, relative humidity
    /// and pressure.
    ///
    /// ```
    /// use psychrolib::Psychrometrics;
    ///
    /// let state = Psychrometrics::si().calc_psychrometrics_from_rel_hum(25.0, 0.5, 101_325.0)?;
    /// assert!((state.hum_ratio - 0.00988).abs() < 1e-4);
    /// assert!(state.t_dew_point < state.t_wet_bulb);
    /// # Ok::<(), psychrolib::PsychroError>(())
    /// ```
    pub fn calc_psychrometrics_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        Self::validate_rel_hum(rel_hum)?;
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Fields that only depend on the humidity ratio.
    fn complete_state(
        &self,
        t_dry_bulb: f64,
        pressure: f64,
        hum_ratio: f64,
        t_wet_bulb: f64,
        t_dew_point: f64,
        rel_hum: f64,
    ) -> Result<PsychrometricState> {
        Ok(PsychrometricState {
            units: self.unit_system(),
            t_dry_bulb,
            pressure,
            hum_ratio,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            vap_pres: self.vap_pres_from_hum_ratio(hum_ratio, pressure)?,
            moist_air_enthalpy: self.moist_air_enthalpy(t_dry_bulb, hum_ratio)?,
            moist_air_volume: self.moist_air_volume(t_dry_bulb, hum_ratio, pressure)?,
            degree_of_saturation: self.degree_of_saturation(t_dry_bulb, hum_ratio, pressure)?,
        })
    }
}
