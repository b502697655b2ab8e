//! Standard atmosphere and barometric pressure reduction.

use crate::converter::UnitSystem;
use crate::error::*;
use crate::psychrometrics::Psychrometrics;

impl Psychrometrics {
    /// Standard atmosphere barometric pressure at an altitude (ft [IP] or
    /// m [SI]), in psi [IP] or Pa [SI] (ASHRAE 2017, ch. 1, eqn. 3).
    pub fn standard_atm_pressure(&self, altitude: f64) -> Result<f64> {
        Self::validate_finite("Altitude", altitude)?;
        let (p0, k) = match self.unit_system() {
            UnitSystem::Imperial => (14.696, 6.8754e-06),
            UnitSystem::Metric => (101_325.0, 2.25577e-05),
        };
        let base = 1.0 - k * altitude;
        if base <= 0.0 {
            return Err(PsychroError::Domain(format!(
                "Altitude {altitude} {} is above the standard atmosphere model",
                self.unit_system().length_unit()
            )));
        }
        Ok(p0 * base.powf(5.2559))
    }

    /// Standard atmosphere temperature at an altitude, in °F [IP] or °C
    /// [SI] (eqn. 4).
    pub fn standard_atm_temperature(&self, altitude: f64) -> Result<f64> {
        Self::validate_finite("Altitude", altitude)?;
        Ok(match self.unit_system() {
            UnitSystem::Imperial => 59.0 - 0.003_566_20 * altitude,
            UnitSystem::Metric => 15.0 - 0.0065 * altitude,
        })
    }

    /// Sea level pressure from the pressure observed at a station.
    ///
    /// The air column between the station and sea level is taken at the
    /// mean of the station temperature and the standard lapse rate
    /// extrapolated down to sea level (Hess, *Introduction to Theoretical
    /// Meteorology*, 1979, §6.4).
    pub fn sea_level_pressure(&self, station_pressure: f64, altitude: f64, t_dry_bulb: f64) -> Result<f64> {
        Self::validate_pressure(station_pressure)?;
        Ok(station_pressure * (altitude / self.scale_height(altitude, t_dry_bulb)?).exp())
    }

    /// Station pressure from sea level pressure; inverse of
    /// [`sea_level_pressure`](Self::sea_level_pressure).
    pub fn station_pressure(&self, sea_level_pressure: f64, altitude: f64, t_dry_bulb: f64) -> Result<f64> {
        Self::validate_pressure(sea_level_pressure)?;
        Ok(sea_level_pressure / self.sea_level_pressure(1.0, altitude, t_dry_bulb)?)
    }

    /// Scale height of the air column below the station, ft [IP] or m [SI].
    fn scale_height(&self, altitude: f64, t_dry_bulb: f64) -> Result<f64> {
        Self::validate_finite("Altitude", altitude)?;
        Self::validate_finite("Dry bulb temperature", t_dry_bulb)?;
        let units = self.unit_system();
        Ok(match units {
            UnitSystem::Imperial => {
                let t_column = t_dry_bulb + 0.0036 * altitude / 2.0;
                53.351 * units.absolute_temperature(t_column)
            }
            UnitSystem::Metric => {
                let t_column = t_dry_bulb + 0.0065 * altitude / 2.0;
                287.055 * units.absolute_temperature(t_column) / 9.807
            }
        })
    }
}
