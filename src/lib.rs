//! # psychrolib
//!
//! Psychrometric properties of moist and dry air, after the formulae of the
//! [ASHRAE Handbook, Fundamentals](https://www.ashrae.org) (2017,
//! chapter 1) in SI and IP units.
//!
//! ## Highlights
//!
//! * **Saturation**: `sat_vap_pres`, `sat_hum_ratio`, `sat_air_enthalpy`
//! * **Solvers**: dew point from vapor pressure (Newton-Raphson),
//!   wet bulb from humidity ratio (bisection)
//! * **Conversions**: every pair of wet bulb, dew point, relative
//!   humidity, vapor pressure, humidity ratio and specific humidity
//! * **Moist / dry air**: enthalpy, specific volume, density, degree of
//!   saturation, vapor pressure deficit
//! * **Atmosphere**: standard atmosphere, sea level ↔ station pressure
//! * **Everything at once**: `calc_psychrometrics_from_*`
//! * **No global state**: the unit system is part of the calculator value
//!
//! ## Quick example
//!
//! ```
//! use psychrolib::{Psychrometrics, UnitSystem};
//!
//! // SI units: °C, Pa, kg/kg, J/kg, m³/kg
//! let psy = Psychrometrics::new(UnitSystem::Metric);
//!
//! let t_dew_point = psy.t_dew_point_from_rel_hum(25.0, 0.80)?;
//! println!("Tdp = {t_dew_point:.3} °C");
//!
//! let state = psy.calc_psychrometrics_from_t_wet_bulb(40.0, 20.0, 101_325.0)?;
//! println!("{state}");
//! # Ok::<(), psychrolib::PsychroError>(())
//! ```
//!
//! ## Unit system
//!
//! Pick the unit system when building the calculator
//! ([`si()`](Psychrometrics::si), [`ip()`](Psychrometrics::ip),
//! [`new()`](Psychrometrics::new)) or read it from the environment:
//!
//! ```no_run
//! use psychrolib::Psychrometrics;
//!
//! // PSYCHROLIB_UNITS=IP in the environment or in a .env file
//! let psy = Psychrometrics::from_env()?;
//! let p_ws = psy.sat_vap_pres(77.0)?;   // psi
//! # Ok::<(), psychrolib::PsychroError>(())
//! ```
//!
//! ## Errors
//!
//! Every function returns [`Result`]; inputs are checked and failures are
//! reported as a [`PsychroError`], never by panicking.  Humidity ratios
//! below [`MIN_HUM_RATIO`] are silently floored to it.

// ── Internal modules ─────────────────────────────────────────────────
mod atmosphere;
mod dew_point;
mod moist_air;
mod saturation;
mod state;
mod wet_bulb;

pub mod converter;
pub mod error;
pub mod properties;
pub mod psychrometrics;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{PsychroError, Result};
pub use properties::PsychrometricState;
pub use psychrometrics::{MAX_ITER_COUNT, MIN_HUM_RATIO, Psychrometrics, UNITS_ENV_VAR};

pub use converter::{
    Coefficients, Converter, UnitSystem,
    t_celsius_from_t_kelvin, t_fahrenheit_from_t_rankine,
    t_kelvin_from_t_celsius, t_rankine_from_t_fahrenheit,
};
