use approx::assert_relative_eq;
use psychrolib::{PsychroError, PsychrometricState, Psychrometrics, UnitSystem};

// ═══════════════════════════════════════════════════════════════════
//  Handbook example 1 (2017, ch. 1): Tdb 40 °C, Twb 20 °C, 101.325 kPa
// ═══════════════════════════════════════════════════════════════════

#[test]
fn handbook_example_si() {
    let psy = Psychrometrics::si();
    let state = psy.calc_psychrometrics_from_t_wet_bulb(40.0, 20.0, 101_325.0).unwrap();

    assert_eq!(state.units, UnitSystem::Metric);
    assert_eq!(state.t_dry_bulb, 40.0);
    assert_eq!(state.t_wet_bulb, 20.0);
    assert!((state.hum_ratio - 0.0065).abs() < 1e-4, "W = {}", state.hum_ratio);
    assert!((state.moist_air_enthalpy - 56_700.0).abs() < 100.0, "h = {}", state.moist_air_enthalpy);
    assert!((state.t_dew_point - 7.0).abs() < 0.5, "Tdp = {}", state.t_dew_point);
    assert!((state.rel_hum - 0.14).abs() < 0.01, "RH = {}", state.rel_hum);
    assert_relative_eq!(state.moist_air_volume, 0.896, max_relative = 0.01);
    assert!((state.degree_of_saturation - 0.13094).abs() < 1e-3, "mu = {}", state.degree_of_saturation);

    // reverse: wet bulb again from dew point and from relative humidity
    let from_dew = psy.calc_psychrometrics_from_t_dew_point(40.0, state.t_dew_point, 101_325.0).unwrap();
    assert!((from_dew.t_wet_bulb - 20.0).abs() < 0.1, "Twb = {}", from_dew.t_wet_bulb);

    let from_rh = psy.calc_psychrometrics_from_rel_hum(40.0, state.rel_hum, 101_325.0).unwrap();
    assert!((from_rh.t_wet_bulb - 20.0).abs() < 0.1, "Twb = {}", from_rh.t_wet_bulb);
    assert_relative_eq!(from_rh.hum_ratio, state.hum_ratio, max_relative = 1e-6);
}

#[test]
fn handbook_example_ip() {
    let psy = Psychrometrics::ip();
    let state = psy.calc_psychrometrics_from_t_wet_bulb(100.0, 65.0, 14.696).unwrap();

    assert!((state.hum_ratio - 0.00523).abs() < 0.001, "W = {}", state.hum_ratio);
    assert!((state.moist_air_enthalpy - 29.80).abs() < 0.1, "h = {}", state.moist_air_enthalpy);
    assert!((state.t_dew_point - 40.0).abs() < 1.0, "Tdp = {}", state.t_dew_point);
    assert!((state.rel_hum - 0.13).abs() < 0.01, "RH = {}", state.rel_hum);
    assert_relative_eq!(state.moist_air_volume, 14.22, max_relative = 0.01);

    let from_dew = psy.calc_psychrometrics_from_t_dew_point(100.0, state.t_dew_point, 14.696).unwrap();
    assert!((from_dew.t_wet_bulb - 65.0).abs() < 0.1, "Twb = {}", from_dew.t_wet_bulb);

    let from_rh = psy.calc_psychrometrics_from_rel_hum(100.0, state.rel_hum, 14.696).unwrap();
    assert!((from_rh.t_wet_bulb - 65.0).abs() < 0.1, "Twb = {}", from_rh.t_wet_bulb);
}

// ═══════════════════════════════════════════════════════════════════
//  Every field filled and consistent
// ═══════════════════════════════════════════════════════════════════

#[test]
fn state_from_rel_hum_si() {
    let psy = Psychrometrics::si();
    let state = psy.calc_psychrometrics_from_rel_hum(25.0, 0.5, 101_325.0).unwrap();

    assert_eq!(state.rel_hum, 0.5);
    assert_relative_eq!(state.hum_ratio, 0.009881044, max_relative = 1e-5);
    assert!((state.t_wet_bulb - 17.8894).abs() < 0.002, "Twb = {}", state.t_wet_bulb);
    assert!((state.t_dew_point - 13.8640).abs() < 0.002, "Tdp = {}", state.t_dew_point);
    assert_relative_eq!(state.vap_pres, 1584.608, max_relative = 1e-5);
    assert_relative_eq!(state.moist_air_enthalpy, 50_321.96, max_relative = 1e-5);
    assert_relative_eq!(state.moist_air_volume, 0.858043, max_relative = 1e-5);
    assert_relative_eq!(state.degree_of_saturation, 0.492056, max_relative = 1e-5);

    assert!(state.t_dew_point <= state.t_wet_bulb && state.t_wet_bulb <= state.t_dry_bulb);
    assert_relative_eq!(state.moist_air_density(), (1.0 + state.hum_ratio) / state.moist_air_volume);
}

#[test]
fn state_from_rel_hum_ip() {
    let psy = Psychrometrics::ip();
    let state = psy.calc_psychrometrics_from_rel_hum(77.0, 0.5, 14.696).unwrap();

    assert_eq!(state.units, UnitSystem::Imperial);
    assert_relative_eq!(state.hum_ratio, 0.009881004, max_relative = 1e-5);
    assert!((state.t_wet_bulb - 64.19608).abs() < 0.004, "Twb = {}", state.t_wet_bulb);
    assert!((state.t_dew_point - 56.95515).abs() < 0.004, "Tdp = {}", state.t_dew_point);
    assert_relative_eq!(state.vap_pres, 0.2298279, max_relative = 1e-5);
    assert_relative_eq!(state.moist_air_enthalpy, 29.30156, max_relative = 1e-5);
    assert_relative_eq!(state.moist_air_volume, 13.744395, max_relative = 1e-5);
    assert_relative_eq!(state.degree_of_saturation, 0.4920564, max_relative = 1e-5);
}

#[test]
fn saturated_state() {
    let psy = Psychrometrics::si();
    let state = psy.calc_psychrometrics_from_rel_hum(20.0, 1.0, 101_325.0).unwrap();
    assert!((state.t_dew_point - 20.0).abs() < 0.002, "Tdp = {}", state.t_dew_point);
    assert!((state.t_wet_bulb - 20.0).abs() < 0.002, "Twb = {}", state.t_wet_bulb);
    assert_relative_eq!(state.degree_of_saturation, 1.0, max_relative = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
//  Preconditions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn preconditions_are_checked_first() {
    let psy = Psychrometrics::si();
    assert!(matches!(
        psy.calc_psychrometrics_from_t_wet_bulb(20.0, 21.0, 101_325.0),
        Err(PsychroError::Domain(_))
    ));
    assert!(matches!(
        psy.calc_psychrometrics_from_t_dew_point(20.0, 25.0, 101_325.0),
        Err(PsychroError::Domain(_))
    ));
    assert!(matches!(
        psy.calc_psychrometrics_from_rel_hum(20.0, 1.5, 101_325.0),
        Err(PsychroError::Domain(_))
    ));
    assert!(matches!(
        psy.calc_psychrometrics_from_rel_hum(20.0, 0.5, 0.0),
        Err(PsychroError::Domain(_))
    ));
    assert!(matches!(
        psy.calc_psychrometrics_from_rel_hum(250.0, 0.5, 101_325.0),
        Err(PsychroError::Range(_))
    ));
}

// ═══════════════════════════════════════════════════════════════════
//  Display / serde
// ═══════════════════════════════════════════════════════════════════

#[test]
fn display_shows_units() {
    let si = Psychrometrics::si().calc_psychrometrics_from_rel_hum(25.0, 0.5, 101_325.0).unwrap();
    let text = si.to_string();
    assert!(text.contains("Tdb = 25.000 °C"), "{text}");
    assert!(text.contains("Pa"), "{text}");
    assert!(text.contains("J/kg"), "{text}");
    assert!(text.contains("RH  = 50.00 %"), "{text}");

    let ip = Psychrometrics::ip().calc_psychrometrics_from_rel_hum(77.0, 0.5, 14.696).unwrap();
    let text = ip.to_string();
    assert!(text.contains("°F"), "{text}");
    assert!(text.contains("psi"), "{text}");
}

#[test]
fn state_serializes_to_json() {
    let state = Psychrometrics::ip().calc_psychrometrics_from_rel_hum(77.0, 0.5, 14.696).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"units\":\"IP\""), "{json}");

    let back: PsychrometricState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.units, state.units);
    assert_relative_eq!(back.hum_ratio, state.hum_ratio, max_relative = 1e-12);
    assert_relative_eq!(back.moist_air_enthalpy, state.moist_air_enthalpy, max_relative = 1e-12);
    assert_relative_eq!(back.t_dew_point, state.t_dew_point, max_relative = 1e-12);
}
