//! Non-iterative conversions between humidity variables and the dry- and
//! moist-air properties (ASHRAE Handbook 2017, ch. 1).
//!
//! Humidity ratios below [`MIN_HUM_RATIO`] are floored to it, never
//! rejected; negative ones are a [`PsychroError::Domain`].

use crate::error::*;
use crate::psychrometrics::{MIN_HUM_RATIO, Psychrometrics};

/// Ratio of the molecular mass of water vapor to that of dry air.
const MOLAR_MASS_RATIO: f64 = 0.621945;
/// `1 / MOLAR_MASS_RATIO`, as printed in the handbook (eqn. 26).
const VOLUME_HUM_RATIO_FACTOR: f64 = 1.607858;

impl Psychrometrics {
    // ── Relative humidity ↔ vapor pressure ──────────────────────────

    /// Partial pressure of water vapor from relative humidity (eqn. 12).
    pub fn vap_pres_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        Self::validate_rel_hum(rel_hum)?;
        Ok(rel_hum * self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Relative humidity [0‑1] from partial pressure of water vapor (eqn. 12).
    pub fn rel_hum_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        Self::validate_vap_pres(vap_pres)?;
        Ok(vap_pres / self.sat_vap_pres(t_dry_bulb)?)
    }

    // ── Humidity ratio ↔ relative humidity ──────────────────────────

    pub fn hum_ratio_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    pub fn rel_hum_from_hum_ratio(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.rel_hum_from_vap_pres(t_dry_bulb, vap_pres)
    }

    // ── Humidity ratio ↔ vapor pressure ─────────────────────────────

    /// Humidity ratio from partial pressure of water vapor (eqn. 20).
    pub fn hum_ratio_from_vap_pres(&self, vap_pres: f64, pressure: f64) -> Result<f64> {
        Self::validate_vap_pres(vap_pres)?;
        Self::validate_pressure(pressure)?;
        let hum_ratio = MOLAR_MASS_RATIO * vap_pres / (pressure - vap_pres);
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    /// Partial pressure of water vapor from humidity ratio (eqn. 20 solved
    /// for `Pw`).
    pub fn vap_pres_from_hum_ratio(&self, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Self::validate_pressure(pressure)?;
        Ok(pressure * w / (MOLAR_MASS_RATIO + w))
    }

    // ── Humidity ratio ↔ specific humidity ──────────────────────────

    /// Specific humidity (mass of vapor per mass of moist air) from
    /// humidity ratio (eqn. 9b).
    pub fn specific_hum_from_hum_ratio(&self, hum_ratio: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Ok(w / (1.0 + w))
    }

    pub fn hum_ratio_from_specific_hum(&self, specific_hum: f64) -> Result<f64> {
        if !(0.0..1.0).contains(&specific_hum) {
            return Err(PsychroError::Domain(format!(
                "Specific humidity {specific_hum} is outside range [0, 1)"
            )));
        }
        Ok((specific_hum / (1.0 - specific_hum)).max(MIN_HUM_RATIO))
    }

    // ── Dry air ─────────────────────────────────────────────────────

    /// Dry air enthalpy, in Btu/lb [IP] or J/kg [SI] (eqn. 28).
    pub fn dry_air_enthalpy(&self, t_dry_bulb: f64) -> Result<f64> {
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        let c = self.coefficients();
        Ok(c.cp_dry_air * t_dry_bulb * c.enthalpy_scale)
    }

    /// Dry air density, in lb/ft³ [IP] or kg/m³ [SI] (eqn. 14).
    pub fn dry_air_density(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Ok(1.0 / self.dry_air_volume(t_dry_bulb, pressure)?)
    }

    /// Dry air specific volume, in ft³/lb [IP] or m³/kg [SI] (eqn. 14).
    pub fn dry_air_volume(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        Self::validate_pressure(pressure)?;
        let c = self.coefficients();
        let t = self.unit_system().absolute_temperature(t_dry_bulb);
        Ok(c.r_dry_air * t / (c.gas_law_pressure * pressure))
    }

    // ── Enthalpy ────────────────────────────────────────────────────

    /// Moist air enthalpy, in Btu/lb [IP] or J/kg [SI] (eqn. 30).
    pub fn moist_air_enthalpy(&self, t_dry_bulb: f64, hum_ratio: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        let c = self.coefficients();
        Ok((c.cp_dry_air * t_dry_bulb + w * (c.h_vaporization + c.cp_vapor * t_dry_bulb)) * c.enthalpy_scale)
    }

    /// Dry-bulb temperature from moist air enthalpy and humidity ratio
    /// (eqn. 30 solved for `t`).
    pub fn t_dry_bulb_from_enthalpy_and_hum_ratio(&self, moist_air_enthalpy: f64, hum_ratio: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Self::validate_finite("Moist air enthalpy", moist_air_enthalpy)?;
        let c = self.coefficients();
        Ok((moist_air_enthalpy / c.enthalpy_scale - c.h_vaporization * w) / (c.cp_dry_air + c.cp_vapor * w))
    }

    /// Humidity ratio from moist air enthalpy and dry-bulb temperature
    /// (eqn. 30 solved for `W`).
    pub fn hum_ratio_from_enthalpy_and_t_dry_bulb(&self, moist_air_enthalpy: f64, t_dry_bulb: f64) -> Result<f64> {
        Self::validate_finite("Moist air enthalpy", moist_air_enthalpy)?;
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        let c = self.coefficients();
        let hum_ratio = (moist_air_enthalpy / c.enthalpy_scale - c.cp_dry_air * t_dry_bulb)
            / (c.h_vaporization + c.cp_vapor * t_dry_bulb);
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    // ── Specific volume / density ───────────────────────────────────

    /// Moist air specific volume per unit mass of dry air, in ft³/lb [IP]
    /// or m³/kg [SI] (eqn. 26).
    pub fn moist_air_volume(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        Self::validate_pressure(pressure)?;
        let c = self.coefficients();
        let t = self.unit_system().absolute_temperature(t_dry_bulb);
        Ok(c.r_dry_air * t * (1.0 + VOLUME_HUM_RATIO_FACTOR * w) / (c.gas_law_pressure * pressure))
    }

    /// Dry-bulb temperature from moist air specific volume and humidity
    /// ratio (eqn. 26 solved for `t`).
    pub fn t_dry_bulb_from_moist_air_volume_and_hum_ratio(
        &self,
        moist_air_volume: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Self::validate_finite("Moist air volume", moist_air_volume)?;
        Self::validate_pressure(pressure)?;
        let c = self.coefficients();
        let t = moist_air_volume * c.gas_law_pressure * pressure / (c.r_dry_air * (1.0 + VOLUME_HUM_RATIO_FACTOR * w));
        Ok(self.unit_system().relative_temperature(t))
    }

    /// Moist air density, in lb/ft³ [IP] or kg/m³ [SI] (eqn. 11).
    pub fn moist_air_density(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Ok((1.0 + w) / self.moist_air_volume(t_dry_bulb, w, pressure)?)
    }

    // ── Saturation-relative quantities ──────────────────────────────

    /// Vapor pressure deficit, in psi [IP] or Pa [SI]: how far the vapor
    /// pressure sits below saturation at the same dry-bulb temperature.
    pub fn vapor_pressure_deficit(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        Ok(self.sat_vap_pres(t_dry_bulb)? * (1.0 - rel_hum))
    }

    /// Degree of saturation, `W / Ws` at the same dry-bulb temperature and
    /// pressure.
    ///
    /// The 2017 handbook dropped this equation; it is eqn. 12 of the 2009
    /// edition, unchanged.
    pub fn degree_of_saturation(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let w = bounded_hum_ratio(hum_ratio)?;
        Ok(w / self.sat_hum_ratio(t_dry_bulb, pressure)?)
    }
}

/// Reject negative (or NaN) humidity ratios, floor the rest.
pub(crate) fn bounded_hum_ratio(hum_ratio: f64) -> Result<f64> {
    Psychrometrics::validate_hum_ratio(hum_ratio)?;
    Ok(hum_ratio.max(MIN_HUM_RATIO))
}
