use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

use crate::converter::{Coefficients, UnitSystem};
use crate::error::*;

// ── Numeric safety constants ────────────────────────────────────────

/// Minimum humidity ratio used or returned by any function. Smaller
/// values are floored to this, never rejected.
pub const MIN_HUM_RATIO: f64 = 1e-7;

/// Iteration budget of the dew-point and wet-bulb solvers.
pub const MAX_ITER_COUNT: usize = 100;

/// Environment variable read by [`Psychrometrics::from_env`].
pub const UNITS_ENV_VAR: &str = "PSYCHROLIB_UNITS";

/// High‑level entry point for psychrometric calculations.
///
/// A calculator is bound to one [`UnitSystem`]; every input and output of
/// its methods is in that system.  It is a small `Copy` value, so threads
/// can each hold their own without sharing any state.
///
/// # Quick example
/// ```
/// use psychrolib::{Psychrometrics, UnitSystem};
///
/// let psy = Psychrometrics::new(UnitSystem::Metric);
/// let t_dew_point = psy.t_dew_point_from_rel_hum(25.0, 0.80)?;
/// assert!((t_dew_point - 21.309).abs() < 0.01);
/// # Ok::<(), psychrolib::PsychroError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Psychrometrics {
    units: UnitSystem,
}

impl Psychrometrics {
    // ── Constructors ─────────────────────────────────────────────────

    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Calculator in SI units (°C, Pa, J/kg, m³/kg).
    pub fn si() -> Self {
        Self::new(UnitSystem::Metric)
    }

    /// Calculator in IP units (°F, psi, Btu/lb, ft³/lb).
    pub fn ip() -> Self {
        Self::new(UnitSystem::Imperial)
    }

    /// Create a calculator from the `PSYCHROLIB_UNITS` environment variable
    /// (`SI` or `IP`), loading a `.env` file first if one can be found.
    ///
    /// ```no_run
    /// use psychrolib::Psychrometrics;
    ///
    /// let psy = Psychrometrics::from_env()?;
    /// println!("working in {}", psy.unit_system());
    /// # Ok::<(), psychrolib::PsychroError>(())
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();
        let value = env::var(UNITS_ENV_VAR).map_err(|_| {
            PsychroError::Config(format!(
                "unit system not set. Set {UNITS_ENV_VAR} to SI or IP \
                 (in the environment or in a .env file)."
            ))
        })?;
        let units = value.parse::<UnitSystem>()?;
        log::debug!("unit system {units} loaded from {UNITS_ENV_VAR}");
        Ok(Self::new(units))
    }

    // ── .env loading (once) ──────────────────────────────────────────

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            let loaded = match dotenvy::dotenv() {
                Ok(path) => Some(path),
                Err(_) => Self::dotenv_candidates()
                    .into_iter()
                    .find(|path| path.is_file() && dotenvy::from_path(path).is_ok()),
            };
            match loaded {
                Some(path) => log::debug!("loaded {}", path.display()),
                None => log::debug!("no .env file found"),
            }
        });
    }

    /// `.env` locations tried when none is found from the working
    /// directory: the crate manifest directory, then the executable's.
    fn dotenv_candidates() -> Vec<PathBuf> {
        let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        manifest_dir
            .into_iter()
            .chain(exe_dir)
            .map(|dir| dir.join(".env"))
            .collect()
    }

    // ── Configuration ────────────────────────────────────────────────

    pub fn unit_system(&self) -> UnitSystem {
        self.units
    }

    pub fn set_unit_system(&mut self, units: UnitSystem) {
        self.units = units;
    }

    /// Convergence threshold of the iterative solvers, in the active
    /// temperature unit.
    pub fn tolerance(&self) -> f64 {
        self.coefficients().tolerance
    }

    /// Domain of validity of the saturation equations, `(min, max)`.
    pub fn t_dry_bulb_bounds(&self) -> (f64, f64) {
        let c = self.coefficients();
        (c.t_min, c.t_max)
    }

    pub(crate) fn coefficients(&self) -> &'static Coefficients {
        self.units.coefficients()
    }

    // ================================================================
    //  Input validation
    // ================================================================

    pub(crate) fn validate_finite(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(PsychroError::Domain(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_pressure(pressure: f64) -> Result<()> {
        Self::validate_finite("Atmospheric pressure", pressure)?;
        if pressure <= 0.0 {
            return Err(PsychroError::Domain(format!(
                "Atmospheric pressure must be positive, got {pressure}"
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_rel_hum(rel_hum: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&rel_hum) {
            return Err(PsychroError::Domain(format!(
                "Relative humidity {rel_hum} is outside range [0, 1]"
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_hum_ratio(hum_ratio: f64) -> Result<()> {
        if !(hum_ratio >= 0.0) || hum_ratio.is_infinite() {
            return Err(PsychroError::Domain(format!(
                "Humidity ratio {hum_ratio} is negative or not a number"
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_vap_pres(vap_pres: f64) -> Result<()> {
        if !(vap_pres >= 0.0) || vap_pres.is_infinite() {
            return Err(PsychroError::Domain(format!(
                "Partial pressure of water vapor {vap_pres} is negative or not a number"
            )));
        }
        Ok(())
    }

    /// `what` (a wet-bulb or dew-point temperature) must not exceed the
    /// dry-bulb temperature.
    pub(crate) fn validate_below_dry_bulb(what: &str, t: f64, t_dry_bulb: f64) -> Result<()> {
        Self::validate_finite(what, t)?;
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        if t > t_dry_bulb {
            return Err(PsychroError::Domain(format!(
                "{what} {t} is above dry bulb temperature {t_dry_bulb}"
            )));
        }
        Ok(())
    }

    /// Dry-bulb temperature must lie inside the saturation equations' domain.
    pub(crate) fn validate_t_dry_bulb_range(&self, t_dry_bulb: f64) -> Result<()> {
        let (lo, hi) = self.t_dry_bulb_bounds();
        if !(t_dry_bulb >= lo && t_dry_bulb <= hi) {
            return Err(PsychroError::Range(format!(
                "Dry bulb temperature {t_dry_bulb} is outside range [{lo}, {hi}] {}",
                self.units.temperature_unit()
            )));
        }
        Ok(())
    }
}
