//! Integration tests for ph-chem: reference solutions and titration scenarios.

use ph_chem::{
    BufferOutcome, BufferPair, BufferSystem, PhEngine, Polarity, Species, Titrant,
    ph_from_h_concentration,
};
use ph_core::{PhError, Tolerances, ml, nearly_equal};

fn ph(h: f64) -> f64 {
    ph_from_h_concentration(h).unwrap()
}

#[test]
fn reference_solutions_at_one_hundredth_molar() {
    let engine = PhEngine::standard();

    let h = engine.h_conc_hcl(0.01).unwrap();
    assert_eq!(h, 0.01);
    assert!((ph(h) - 2.000).abs() < 1e-3);

    let h = engine.h_conc_baoh2(0.01).unwrap();
    assert!((h - 5.00e-13).abs() < 1e-17);
    assert!((ph(h) - 12.301).abs() < 1e-3);

    let h = engine.h_conc_caoh2(0.01).unwrap();
    assert!((ph(h) - 12.301).abs() < 1e-3);

    let h = engine.h_conc_naoh(0.01).unwrap();
    assert!((ph(h) - 12.000).abs() < 1e-9);

    let h = engine.h_conc_hc2h3o2(0.01).unwrap();
    assert!((h - 4.24e-4).abs() < 1e-6);
    assert!((ph(h) - 3.372).abs() < 1e-3);

    assert_eq!(engine.ph_nacl(), 7.00);
}

#[test]
fn every_salt_lands_on_the_expected_side_of_neutral() {
    let engine = PhEngine::standard();
    let c = 0.05;
    assert!(ph(engine.h_conc_nh4cl(c).unwrap()) < 7.0);
    assert!(ph(engine.h_conc_nahso4(c).unwrap()) < 7.0);
    assert!(ph(engine.h_conc_nac2h3o2(c).unwrap()) > 7.0);
    assert!(ph(engine.h_conc_nahco3(c).unwrap()) > 7.0);
    assert!(ph(engine.h_conc_na2co3(c).unwrap()) > 7.0);
    // carbonate hydrolyzes more strongly than bicarbonate
    assert!(engine.h_conc_na2co3(c).unwrap() < engine.h_conc_nahco3(c).unwrap());
}

#[test]
fn salt_concentrations_at_one_tenth_molar() {
    let engine = PhEngine::standard();
    let close = |got: f64, want: f64| (got - want).abs() <= 1e-4 * want;

    assert!(close(engine.h_conc_nh4cl(0.1).unwrap(), 7.4536e-6));
    assert!(close(engine.h_conc_nac2h3o2(0.1).unwrap(), 1.3416e-9));
    assert!(close(engine.h_conc_nahco3(0.1).unwrap(), 2.0736e-10));
    assert!(close(engine.h_conc_na2co3(0.1).unwrap(), 2.3664e-12));
    assert!(close(engine.h_conc_nahso4(0.01).unwrap(), 1.0954e-2));
}

#[test]
fn weak_species_are_milder_than_strong_ones() {
    let engine = PhEngine::standard();
    let c = 0.1;
    assert!(engine.h_conc_h2co3(c).unwrap() < engine.h_conc_hc2h3o2(c).unwrap());
    assert!(engine.h_conc_hc2h3o2(c).unwrap() < engine.h_conc_hno3(c).unwrap());
    assert!(engine.h_conc_nh4oh(c).unwrap() > engine.h_conc_naoh(c).unwrap());
}

#[test]
fn zero_concentration_is_a_domain_error() {
    let engine = PhEngine::standard();
    for species in Species::ALL {
        let err = engine.species_ph(species, 0.0).unwrap_err();
        assert!(matches!(err, PhError::Domain { .. }), "{species:?}");
    }
}

#[test]
fn water_titration_starts_at_pure_water() {
    let engine = PhEngine::standard();
    assert_eq!(engine.h_conc_titration_hcl(0.1, 0).unwrap(), 1e-7);

    let mut last = 7.0;
    for drops in 1..=20 {
        let now = ph(engine.h_conc_titration_hcl(0.1, drops).unwrap());
        assert!(now < last);
        last = now;
    }

    let mut last = 7.0;
    for drops in 1..=20 {
        let now = ph(engine.h_conc_titration_naoh(0.01, drops).unwrap());
        assert!(now > last);
        last = now;
    }
}

#[test]
fn acetate_buffer_at_pka_then_past_capacity() {
    let engine = PhEngine::standard();
    let v0 = ml(10.0);

    let at_start = engine
        .buffer_ph(0.1, 0.1, 4.745, 0.1, 0, v0, Polarity::Acid)
        .unwrap();
    let tol = Tolerances::default();
    assert!(nearly_equal(at_start.ph().unwrap(), 4.745, tol));

    let ten = engine
        .buffer_ph(0.1, 0.1, 4.745, 0.1, 10, v0, Polarity::Acid)
        .unwrap();
    assert!(ten.ph().unwrap() < 4.745);

    // 1 mmol of acetate needs 278 drops of 0.1 M HCl (0.0036 mmol each)
    let in_capacity = engine
        .buffer_ph(0.1, 0.1, 4.745, 0.1, 277, v0, Polarity::Acid)
        .unwrap();
    assert!(matches!(in_capacity, BufferOutcome::InCapacity(_)));
    let exceeded = engine
        .buffer_ph(0.1, 0.1, 4.745, 0.1, 278, v0, Polarity::Acid)
        .unwrap();
    assert_eq!(exceeded, BufferOutcome::CapacityExceeded);

    let overflow = engine
        .buffer_overflow_ph(0.1, 0.1, 4.745, 0.1, 400, v0, Polarity::Acid)
        .unwrap();
    assert!(overflow < in_capacity.ph().unwrap());
}

#[test]
fn titrant_matching_the_base_exactly_exceeds_capacity() {
    let engine = PhEngine::standard();
    let v0 = ml(10.0);

    // 0.036 mmol of acetate, ten drops of 0.1 M HCl bring 0.036 mmol
    let before = engine
        .buffer_ph(0.1, 0.0036, 4.745, 0.1, 9, v0, Polarity::Acid)
        .unwrap();
    assert!(matches!(before, BufferOutcome::InCapacity(_)));

    let at = engine
        .buffer_ph(0.1, 0.0036, 4.745, 0.1, 10, v0, Polarity::Acid)
        .unwrap();
    assert_eq!(at, BufferOutcome::CapacityExceeded);

    let overflow = engine
        .buffer_overflow_ph(0.1, 0.0036, 4.745, 0.1, 10, v0, Polarity::Acid)
        .unwrap();
    assert!((overflow - 2.8725).abs() < 1e-3);
}

#[test]
fn catalogued_buffers_start_at_their_pka() {
    let engine = PhEngine::standard();
    for pair in BufferPair::ALL {
        let system = BufferSystem::for_pair(pair, 0.05, 0.05, engine.constants()).unwrap();
        let reading = engine.buffer_reading(&system, Titrant::none(), 25).unwrap();
        assert!(!reading.capacity_exceeded);
        assert!(
            (reading.ph - pair.pka(engine.constants())).abs() < 1e-12,
            "{pair:?}"
        );
    }
}

#[test]
fn overflow_with_base_titrant_is_basic() {
    let engine = PhEngine::standard();
    let system = BufferSystem::new(0.001, 0.1, 9.255).unwrap();
    let reading = engine
        .buffer_reading(&system, Titrant::base(0.1), 100)
        .unwrap();
    assert!(reading.capacity_exceeded);
    assert!(reading.ph > 7.0 && reading.ph < 14.0);
}
