use psychrolib::Psychrometrics;

/// One row per dry-bulb temperature: humidity ratio on the constant
/// relative humidity lines of a psychrometric chart at sea level.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let psy = Psychrometrics::si();
    let pressure = psy.standard_atm_pressure(0.0)?;
    let rel_hums = [0.2, 0.4, 0.6, 0.8, 1.0];

    print!("{:>6}", "Tdb");
    for rh in rel_hums {
        print!("{:>10}", format!("{:.0} %", rh * 100.0));
    }
    println!("{:>10}{:>10}", "Twb@50%", "h@50%");

    for t_dry_bulb in (-10..=45).step_by(5).map(f64::from) {
        print!("{t_dry_bulb:>6.0}");
        for rh in rel_hums {
            let w = psy.hum_ratio_from_rel_hum(t_dry_bulb, rh, pressure)?;
            print!("{:>10.5}", w);
        }
        let w = psy.hum_ratio_from_rel_hum(t_dry_bulb, 0.5, pressure)?;
        let t_wet_bulb = psy.t_wet_bulb_from_hum_ratio(t_dry_bulb, w, pressure)?;
        let h = psy.moist_air_enthalpy(t_dry_bulb, w)? / 1000.0;
        println!("{t_wet_bulb:>10.2}{h:>10.1}");
    }

    Ok(())
}
