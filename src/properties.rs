use serde::{Deserialize, Serialize};

use crate::converter::{Converter, UnitSystem};

// ── Full psychrometric state of a moist-air sample ──────────────────

/// Result of one of the `calc_psychrometrics_from_*` functions.
///
/// Every field is filled; the value the state was computed from is
/// echoed back in its own field.
///
/// | Field                  | IP             | SI             |
/// |------------------------|----------------|----------------|
/// | t_dry_bulb             | °F             | °C             |
/// | pressure               | psi            | Pa             |
/// | hum_ratio              | lb_H₂O/lb_da   | kg_H₂O/kg_da   |
/// | t_wet_bulb             | °F             | °C             |
/// | t_dew_point            | °F             | °C             |
/// | rel_hum                | 0–1            | 0–1            |
/// | vap_pres               | psi            | Pa             |
/// | moist_air_enthalpy     | Btu/lb_da      | J/kg_da        |
/// | moist_air_volume       | ft³/lb_da      | m³/kg_da       |
/// | degree_of_saturation   | –              | –              |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychrometricState {
    pub units: UnitSystem,
    pub t_dry_bulb: f64,
    pub pressure: f64,
    pub hum_ratio: f64,
    pub t_wet_bulb: f64,
    pub t_dew_point: f64,
    pub rel_hum: f64,
    pub vap_pres: f64,
    pub moist_air_enthalpy: f64,
    pub moist_air_volume: f64,
    pub degree_of_saturation: f64,
}

impl PsychrometricState {
    /// The same state expressed in another unit system.
    pub fn to_units(&self, units: UnitSystem) -> PsychrometricState {
        let conv = Converter::new(self.units, units);
        PsychrometricState {
            units,
            t_dry_bulb:           conv.temperature(self.t_dry_bulb),
            pressure:             conv.pressure(self.pressure),
            hum_ratio:            self.hum_ratio,
            t_wet_bulb:           conv.temperature(self.t_wet_bulb),
            t_dew_point:          conv.temperature(self.t_dew_point),
            rel_hum:              self.rel_hum,
            vap_pres:             conv.pressure(self.vap_pres),
            moist_air_enthalpy:   conv.enthalpy(self.moist_air_enthalpy),
            moist_air_volume:     conv.specific_volume(self.moist_air_volume),
            degree_of_saturation: self.degree_of_saturation,
        }
    }

    /// Moist air density (mass of moist air per volume), in lb/ft³ [IP]
    /// or kg/m³ [SI].
    pub fn moist_air_density(&self) -> f64 {
        (1.0 + self.hum_ratio) / self.moist_air_volume
    }
}

impl std::fmt::Display for PsychrometricState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let u = self.units;
        writeln!(f, "Tdb = {:.3} {}", self.t_dry_bulb, u.temperature_unit())?;
        writeln!(f, "P   = {:.4} {}", self.pressure, u.pressure_unit())?;
        writeln!(f, "W   = {:.7} {}", self.hum_ratio, u.hum_ratio_unit())?;
        writeln!(f, "Twb = {:.3} {}", self.t_wet_bulb, u.temperature_unit())?;
        writeln!(f, "Tdp = {:.3} {}", self.t_dew_point, u.temperature_unit())?;
        writeln!(f, "RH  = {:.2} %", self.rel_hum * 100.0)?;
        writeln!(f, "Pw  = {:.4} {}", self.vap_pres, u.pressure_unit())?;
        writeln!(f, "h   = {:.3} {}", self.moist_air_enthalpy, u.enthalpy_unit())?;
        writeln!(f, "v   = {:.5} {}", self.moist_air_volume, u.volume_unit())?;
        write!(f, "mu  = {:.5}", self.degree_of_saturation)
    }
}
