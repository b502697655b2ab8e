use psychrolib::{Psychrometrics, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // PSYCHROLIB_UNITS=IP cargo run --example simple
    let psy = Psychrometrics::from_env().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to SI");
        Psychrometrics::new(UnitSystem::Metric)
    });
    let units = psy.unit_system();

    let (t_dry_bulb, rel_hum, altitude) = match units {
        UnitSystem::Metric => (30.0, 0.45, 500.0),
        UnitSystem::Imperial => (86.0, 0.45, 1640.0),
    };
    let pressure = psy.standard_atm_pressure(altitude)?;
    println!(
        "Standard pressure at {altitude} {}: {pressure:.4} {}",
        units.length_unit(),
        units.pressure_unit()
    );

    let state = psy.calc_psychrometrics_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
    println!("{state}");
    println!("rho = {:.5} {}", state.moist_air_density(), units.density_unit());

    let other = match units {
        UnitSystem::Metric => UnitSystem::Imperial,
        UnitSystem::Imperial => UnitSystem::Metric,
    };
    println!("\nSame state in {other}:\n{}", state.to_units(other));

    Ok(())
}
