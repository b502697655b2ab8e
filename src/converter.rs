//! Unit systems and unit conversion for psychrometric values.
//!
//! Every formula in this crate works in one of two unit systems, chosen
//! once per [`Psychrometrics`](crate::Psychrometrics) calculator:
//!
//! | System     | T   | P   | W       | h      | v      | ρ      | Z  |
//! |------------|-----|-----|---------|--------|--------|--------|----|
//! | `Metric`   | °C  | Pa  | kg/kg   | J/kg   | m³/kg  | kg/m³  | m  |
//! | `Imperial` | °F  | psi | lb/lb   | Btu/lb | ft³/lb | lb/ft³ | ft |
//!
//! The per-system constants the formulas need (tolerance, valid temperature
//! domain, freezing and triple point, gas constant, enthalpy coefficients)
//! live in a [`Coefficients`] table so the formulas themselves are written
//! once.
//!
//! [`Converter`] moves values between the two systems:
//!
//! ```
//! use psychrolib::{Converter, UnitSystem};
//!
//! let to_ip = Converter::new(UnitSystem::Metric, UnitSystem::Imperial);
//! assert!((to_ip.temperature(100.0) - 212.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PsychroError, Result};

// ────────────────────────────────────────────────────────────────────
//  Absolute temperature helpers
// ────────────────────────────────────────────────────────────────────

/// Zero degree Fahrenheit expressed in degree Rankine.
pub const ZERO_FAHRENHEIT_AS_RANKINE: f64 = 459.67;
/// Zero degree Celsius expressed in Kelvin.
pub const ZERO_CELSIUS_AS_KELVIN: f64 = 273.15;

pub fn t_rankine_from_t_fahrenheit(t_f: f64) -> f64 { t_f + ZERO_FAHRENHEIT_AS_RANKINE }
pub fn t_fahrenheit_from_t_rankine(t_r: f64) -> f64 { t_r - ZERO_FAHRENHEIT_AS_RANKINE }
pub fn t_kelvin_from_t_celsius(t_c: f64) -> f64 { t_c + ZERO_CELSIUS_AS_KELVIN }
pub fn t_celsius_from_t_kelvin(t_k: f64) -> f64 { t_k - ZERO_CELSIUS_AS_KELVIN }

// ────────────────────────────────────────────────────────────────────
//  UnitSystem
// ────────────────────────────────────────────────────────────────────

/// System of units every input and output is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Inch-pound: °F, psi, Btu/lb, ft³/lb
    #[serde(rename = "IP", alias = "imperial", alias = "Imperial")]
    Imperial,
    /// International System: °C, Pa, J/kg, m³/kg
    #[serde(rename = "SI", alias = "metric", alias = "Metric")]
    Metric,
}

/// Constants that differ between the two unit systems.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    /// Convergence threshold of the solvers (0.001 K in the active unit).
    pub tolerance: f64,
    /// Lower bound of the saturation equations' domain.
    pub t_min: f64,
    /// Upper bound of the saturation equations' domain.
    pub t_max: f64,
    pub freezing_point: f64,
    pub triple_point: f64,
    /// Zero of the relative temperature scale on the absolute scale.
    pub zero_as_absolute: f64,
    /// Gas constant of dry air, ft·lbf/(lb·°R) or J/(kg·K).
    pub r_dry_air: f64,
    /// Factor turning the user pressure into gas-law units (psi → lbf/ft²).
    pub gas_law_pressure: f64,
    /// Specific heat of dry air, Btu/(lb·°F) or kJ/(kg·K).
    pub cp_dry_air: f64,
    /// Specific heat of water vapor, Btu/(lb·°F) or kJ/(kg·K).
    pub cp_vapor: f64,
    /// Enthalpy of vaporization at the reference temperature, Btu/lb or kJ/kg.
    pub h_vaporization: f64,
    /// Multiplier from the enthalpy equations' unit to the user unit.
    pub enthalpy_scale: f64,
}

const IMPERIAL: Coefficients = Coefficients {
    tolerance: 0.001 * 9.0 / 5.0,
    t_min: -148.0,
    t_max: 392.0,
    freezing_point: 32.0,
    triple_point: 32.018,
    zero_as_absolute: ZERO_FAHRENHEIT_AS_RANKINE,
    r_dry_air: 53.350,
    gas_law_pressure: 144.0,
    cp_dry_air: 0.240,
    cp_vapor: 0.444,
    h_vaporization: 1061.0,
    enthalpy_scale: 1.0,
};

const METRIC: Coefficients = Coefficients {
    tolerance: 0.001,
    t_min: -100.0,
    t_max: 200.0,
    freezing_point: 0.0,
    triple_point: 0.01,
    zero_as_absolute: ZERO_CELSIUS_AS_KELVIN,
    r_dry_air: 287.042,
    gas_law_pressure: 1.0,
    cp_dry_air: 1.006,
    cp_vapor: 1.86,
    h_vaporization: 2501.0,
    enthalpy_scale: 1000.0,
};

impl UnitSystem {
    pub fn coefficients(self) -> &'static Coefficients {
        match self {
            UnitSystem::Imperial => &IMPERIAL,
            UnitSystem::Metric => &METRIC,
        }
    }

    /// Relative temperature (°F / °C) → absolute (°R / K).
    pub fn absolute_temperature(self, t: f64) -> f64 {
        match self {
            UnitSystem::Imperial => t_rankine_from_t_fahrenheit(t),
            UnitSystem::Metric => t_kelvin_from_t_celsius(t),
        }
    }

    /// Absolute temperature (°R / K) → relative (°F / °C).
    pub fn relative_temperature(self, t: f64) -> f64 {
        match self {
            UnitSystem::Imperial => t_fahrenheit_from_t_rankine(t),
            UnitSystem::Metric => t_celsius_from_t_kelvin(t),
        }
    }

    // ── Unit labels ─────────────────────────────────────────────────

    pub fn temperature_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "°F", UnitSystem::Metric => "°C" }
    }

    pub fn pressure_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "psi", UnitSystem::Metric => "Pa" }
    }

    pub fn hum_ratio_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "lb_H2O/lb_da", UnitSystem::Metric => "kg_H2O/kg_da" }
    }

    pub fn enthalpy_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "Btu/lb", UnitSystem::Metric => "J/kg" }
    }

    pub fn volume_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "ft³/lb", UnitSystem::Metric => "m³/kg" }
    }

    pub fn density_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "lb/ft³", UnitSystem::Metric => "kg/m³" }
    }

    pub fn length_unit(self) -> &'static str {
        match self { UnitSystem::Imperial => "ft", UnitSystem::Metric => "m" }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Imperial => write!(f, "IP"),
            UnitSystem::Metric => write!(f, "SI"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = PsychroError;

    /// Accepts `SI`/`metric` and `IP`/`imperial`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "SI" | "METRIC" => Ok(UnitSystem::Metric),
            "IP" | "IMPERIAL" => Ok(UnitSystem::Imperial),
            _ => Err(PsychroError::Config(format!(
                "unknown unit system {:?} (expected SI or IP)",
                s.trim()
            ))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter: moves values from one unit system to the other
// ────────────────────────────────────────────────────────────────────

const PA_PER_PSI: f64 = 6_894.757_293_168;
const J_PER_KG_PER_BTU_PER_LB: f64 = 2_326.0;
const M3_PER_KG_PER_FT3_PER_LB: f64 = 0.062_427_960_576;
const M_PER_FT: f64 = 0.3048;
/// IP enthalpy is zero for dry air at 0 °F, SI enthalpy at 0 °C.
const IP_ENTHALPY_DATUM_SHIFT: f64 = 0.240 * 32.0;

/// Converts values expressed in `from` units into `to` units.
///
/// Dimensionless quantities (humidity ratio, relative humidity, degree of
/// saturation) need no conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pub from: UnitSystem,
    pub to: UnitSystem,
}

impl Converter {
    pub fn new(from: UnitSystem, to: UnitSystem) -> Self {
        Self { from, to }
    }

    /// Identity converter.
    pub fn identity(units: UnitSystem) -> Self {
        Self { from: units, to: units }
    }

    /// °F ↔ °C
    pub fn temperature(&self, t: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => t * 9.0 / 5.0 + 32.0,
            (UnitSystem::Imperial, UnitSystem::Metric) => (t - 32.0) * 5.0 / 9.0,
            _ => t,
        }
    }

    /// psi ↔ Pa
    pub fn pressure(&self, p: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => p / PA_PER_PSI,
            (UnitSystem::Imperial, UnitSystem::Metric) => p * PA_PER_PSI,
            _ => p,
        }
    }

    /// Btu/lb ↔ J/kg, including the shift between the two enthalpy datums.
    pub fn enthalpy(&self, h: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => {
                h / J_PER_KG_PER_BTU_PER_LB + IP_ENTHALPY_DATUM_SHIFT
            }
            (UnitSystem::Imperial, UnitSystem::Metric) => {
                (h - IP_ENTHALPY_DATUM_SHIFT) * J_PER_KG_PER_BTU_PER_LB
            }
            _ => h,
        }
    }

    /// ft³/lb ↔ m³/kg
    pub fn specific_volume(&self, v: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => v / M3_PER_KG_PER_FT3_PER_LB,
            (UnitSystem::Imperial, UnitSystem::Metric) => v * M3_PER_KG_PER_FT3_PER_LB,
            _ => v,
        }
    }

    /// lb/ft³ ↔ kg/m³
    pub fn density(&self, rho: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => rho * M3_PER_KG_PER_FT3_PER_LB,
            (UnitSystem::Imperial, UnitSystem::Metric) => rho / M3_PER_KG_PER_FT3_PER_LB,
            _ => rho,
        }
    }

    /// ft ↔ m
    pub fn length(&self, z: f64) -> f64 {
        match (self.from, self.to) {
            (UnitSystem::Metric, UnitSystem::Imperial) => z / M_PER_FT,
            (UnitSystem::Imperial, UnitSystem::Metric) => z * M_PER_FT,
            _ => z,
        }
    }
}
