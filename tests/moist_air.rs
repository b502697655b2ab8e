use approx::assert_relative_eq;
use psychrolib::{MIN_HUM_RATIO, PsychroError, Psychrometrics};

// ═══════════════════════════════════════════════════════════════════
//  Dry air: handbook table 2
// ═══════════════════════════════════════════════════════════════════

#[test]
fn dry_air_si() {
    let psy = Psychrometrics::si();
    assert_relative_eq!(psy.dry_air_enthalpy(25.0).unwrap(), 25148.0, max_relative = 0.0003);
    assert_relative_eq!(psy.dry_air_volume(25.0, 101_325.0).unwrap(), 0.8443, max_relative = 0.001);
    assert_relative_eq!(psy.dry_air_density(25.0, 101_325.0).unwrap(), 1.0 / 0.8443, max_relative = 0.001);

    let t = psy.t_dry_bulb_from_enthalpy_and_hum_ratio(81_316.0, 0.02).unwrap();
    assert!((t - 30.0).abs() < 0.001, "Tdb = {t}");
    let w = psy.hum_ratio_from_enthalpy_and_t_dry_bulb(81_316.0, 30.0).unwrap();
    assert_relative_eq!(w, 0.02, max_relative = 0.001);
}

#[test]
fn dry_air_ip() {
    let psy = Psychrometrics::ip();
    assert!((psy.dry_air_enthalpy(77.0).unwrap() - 18.498).abs() < 0.02);
    assert_relative_eq!(psy.dry_air_volume(77.0, 14.696).unwrap(), 13.5251, max_relative = 0.001);
    assert_relative_eq!(psy.dry_air_density(77.0, 14.696).unwrap(), 1.0 / 13.5251, max_relative = 0.001);

    let t = psy.t_dry_bulb_from_enthalpy_and_hum_ratio(42.6168, 0.02).unwrap();
    assert!((t - 86.0).abs() < 0.05, "Tdb = {t}");
    let w = psy.hum_ratio_from_enthalpy_and_t_dry_bulb(42.6168, 86.0).unwrap();
    assert_relative_eq!(w, 0.02, max_relative = 0.001);
}

// ═══════════════════════════════════════════════════════════════════
//  Moist air enthalpy, volume and density
// ═══════════════════════════════════════════════════════════════════

#[test]
fn moist_air_si() {
    let psy = Psychrometrics::si();
    assert_relative_eq!(psy.moist_air_enthalpy(30.0, 0.02).unwrap(), 81_316.0, max_relative = 0.0003);
    assert_relative_eq!(
        psy.moist_air_volume(30.0, 0.02, 95_461.0).unwrap(),
        0.940855374352943,
        max_relative = 0.0003
    );
    assert_relative_eq!(
        psy.moist_air_density(30.0, 0.02, 95_461.0).unwrap(),
        1.08411986348219,
        max_relative = 0.0003
    );

    let t = psy
        .t_dry_bulb_from_moist_air_volume_and_hum_ratio(0.940855374352943, 0.02, 95_461.0)
        .unwrap();
    assert!((t - 30.0).abs() < 0.001, "Tdb = {t}");
}

#[test]
fn moist_air_ip() {
    let psy = Psychrometrics::ip();
    assert_relative_eq!(psy.moist_air_enthalpy(86.0, 0.02).unwrap(), 42.6168, max_relative = 0.0003);
    assert_relative_eq!(
        psy.moist_air_volume(86.0, 0.02, 14.175).unwrap(),
        14.7205749002918,
        max_relative = 0.0003
    );
    assert_relative_eq!(
        psy.moist_air_density(86.0, 0.02, 14.175).unwrap(),
        0.0692907720594378,
        max_relative = 0.0003
    );

    let t = psy
        .t_dry_bulb_from_moist_air_volume_and_hum_ratio(14.7205749002918, 0.02, 14.175)
        .unwrap();
    assert!((t - 86.0).abs() < 0.001, "Tdb = {t}");
}

#[test]
fn enthalpy_inverse_round_trip() {
    for psy in [Psychrometrics::si(), Psychrometrics::ip()] {
        let h = psy.moist_air_enthalpy(12.5, 0.007).unwrap();
        let t = psy.t_dry_bulb_from_enthalpy_and_hum_ratio(h, 0.007).unwrap();
        let w = psy.hum_ratio_from_enthalpy_and_t_dry_bulb(h, 12.5).unwrap();
        assert!((t - 12.5).abs() < 1e-9, "{}: Tdb = {t}", psy.unit_system());
        assert_relative_eq!(w, 0.007, max_relative = 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Humidity conversions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn hum_ratio_vap_pres_round_trip() {
    let psy = Psychrometrics::si();
    let w = psy.hum_ratio_from_vap_pres(3169.7, 95_461.0).unwrap();
    assert_relative_eq!(w, 0.0213603998047487, max_relative = 1e-6);
    let vap_pres = psy.vap_pres_from_hum_ratio(w, 95_461.0).unwrap();
    assert!((vap_pres - 3169.7).abs() < 1e-4, "Pw = {vap_pres}");

    let psy = Psychrometrics::ip();
    let w = psy.hum_ratio_from_vap_pres(0.45973, 14.175).unwrap();
    assert_relative_eq!(w, 0.0208473311024865, max_relative = 1e-6);
    let vap_pres = psy.vap_pres_from_hum_ratio(w, 14.175).unwrap();
    assert!((vap_pres - 0.45973).abs() < 1e-8, "Pw = {vap_pres}");
}

#[test]
fn rel_hum_vap_pres_round_trip() {
    let psy = Psychrometrics::si();
    let vap_pres = psy.vap_pres_from_rel_hum(25.0, 0.6).unwrap();
    assert_relative_eq!(vap_pres, 0.6 * psy.sat_vap_pres(25.0).unwrap(), max_relative = 1e-12);
    let rel_hum = psy.rel_hum_from_vap_pres(25.0, vap_pres).unwrap();
    assert_relative_eq!(rel_hum, 0.6, max_relative = 1e-12);
}

#[test]
fn hum_ratio_rel_hum_round_trip() {
    let psy = Psychrometrics::ip();
    let w = psy.hum_ratio_from_rel_hum(77.0, 0.5, 14.696).unwrap();
    assert_relative_eq!(w, 0.009881004, max_relative = 1e-4);
    let rel_hum = psy.rel_hum_from_hum_ratio(77.0, w, 14.696).unwrap();
    assert_relative_eq!(rel_hum, 0.5, max_relative = 1e-9);
}

#[test]
fn specific_humidity() {
    let psy = Psychrometrics::si();
    let q = psy.specific_hum_from_hum_ratio(0.006).unwrap();
    assert_relative_eq!(q, 0.00596421471, max_relative = 0.01);
    let w = psy.hum_ratio_from_specific_hum(0.00596421471).unwrap();
    assert_relative_eq!(w, 0.006, max_relative = 0.01);

    assert!(matches!(psy.hum_ratio_from_specific_hum(1.0), Err(PsychroError::Domain(_))));
    assert!(matches!(psy.hum_ratio_from_specific_hum(-0.1), Err(PsychroError::Domain(_))));
    assert_eq!(psy.hum_ratio_from_specific_hum(0.0).unwrap(), MIN_HUM_RATIO);
}

// ═══════════════════════════════════════════════════════════════════
//  Saturation-relative quantities
// ═══════════════════════════════════════════════════════════════════

#[test]
fn vapor_pressure_deficit() {
    let psy = Psychrometrics::si();
    let vpd = psy.vapor_pressure_deficit(25.0, 0.01, 101_325.0).unwrap();
    assert!((vpd - 1565.833).abs() < 0.1, "VPD = {vpd}");

    let saturated = psy.sat_hum_ratio(25.0, 101_325.0).unwrap();
    let vpd = psy.vapor_pressure_deficit(25.0, saturated, 101_325.0).unwrap();
    assert!(vpd.abs() < 1e-6, "VPD at saturation = {vpd}");
}

#[test]
fn degree_of_saturation() {
    let psy = Psychrometrics::si();
    let mu = psy.degree_of_saturation(25.0, 0.01, 101_325.0).unwrap();
    assert!((mu - 0.49798).abs() < 1e-4, "mu = {mu}");

    let saturated = psy.sat_hum_ratio(25.0, 101_325.0).unwrap();
    let mu = psy.degree_of_saturation(25.0, saturated, 101_325.0).unwrap();
    assert_relative_eq!(mu, 1.0, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════
//  Input validation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn invalid_inputs_are_domain_errors() {
    let psy = Psychrometrics::si();
    let domain = |r: psychrolib::Result<f64>| matches!(r, Err(PsychroError::Domain(_)));

    assert!(domain(psy.vap_pres_from_rel_hum(25.0, -0.1)));
    assert!(domain(psy.vap_pres_from_rel_hum(25.0, 1.1)));
    assert!(domain(psy.rel_hum_from_vap_pres(25.0, -1.0)));
    assert!(domain(psy.hum_ratio_from_vap_pres(-1.0, 101_325.0)));
    assert!(domain(psy.vap_pres_from_hum_ratio(-0.001, 101_325.0)));
    assert!(domain(psy.moist_air_enthalpy(25.0, -0.001)));
    assert!(domain(psy.moist_air_volume(25.0, 0.01, 0.0)));
    assert!(domain(psy.moist_air_volume(25.0, 0.01, -101_325.0)));
    assert!(domain(psy.dry_air_volume(f64::NAN, 101_325.0)));
    assert!(domain(psy.degree_of_saturation(25.0, f64::NAN, 101_325.0)));
}

#[test]
fn tiny_hum_ratio_is_floored_not_rejected() {
    let psy = Psychrometrics::si();
    let floored = psy.moist_air_enthalpy(20.0, 0.0).unwrap();
    let at_floor = psy.moist_air_enthalpy(20.0, MIN_HUM_RATIO).unwrap();
    assert_eq!(floored, at_floor);

    let w = psy.hum_ratio_from_vap_pres(0.0, 101_325.0).unwrap();
    assert_eq!(w, MIN_HUM_RATIO);
}
