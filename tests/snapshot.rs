use alloy_design_toolbox::alloy::{Composition, DomainError, ElementData, ElementSymbol};
use alloy_design_toolbox::process::{ProcessParameters, QuenchMedium};
use alloy_design_toolbox::snapshot::{self, evaluate, reference_design, Engine, REFERENCE_NAME};
use alloy_design_toolbox::tables::ReferenceTables;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn stainless_304() -> Composition {
    Composition::from_pairs([
        (ElementSymbol::C, 0.08),
        (ElementSymbol::Mn, 2.0),
        (ElementSymbol::Si, 1.0),
        (ElementSymbol::Cr, 18.0),
        (ElementSymbol::Ni, 8.0),
        (ElementSymbol::Mo, 0.5),
    ])
}

#[test]
fn snapshot_of_304_type_stainless() {
    let process = ProcessParameters::new(QuenchMedium::Oil, 25.0, 500.0);
    let s = evaluate(&stainless_304(), &process, &ReferenceTables::standard()).expect("evaluate");
    assert_close(s.composition.fe(), 70.42, 1e-9);
    assert_close(s.ms_c(), 81.21, 1e-9);
    assert_close(s.mechanical.sigma0_mpa, 379.5, 1e-9);
    assert_eq!(s.yield_strength_mpa(), 384.0);
    assert_eq!(s.uts_mpa(), 481.0);
    assert_eq!(s.hrc(), 65.0);
    assert_eq!(s.hardenability.label, "Very Poor");
    assert!(s.phase_stability.stable);
    assert!(!s.meets_target_yield());
    assert_eq!(s.ttt.points.len(), 29);
    assert_eq!(s.overlay.len(), 29);
    assert_eq!(s.narrative.len(), 2);
    assert!(s.density_g_cm3() > 7.0 && s.density_g_cm3() < 8.5);
}

#[test]
fn pure_iron_baseline_for_every_quench_medium() {
    let tables = ReferenceTables::standard();
    let fe = tables.element(ElementSymbol::Fe).expect("Fe row");
    for quench in QuenchMedium::ALL {
        let s = evaluate(
            &Composition::new(),
            &ProcessParameters::new(quench, 25.0, 0.0),
            &tables,
        )
        .expect("evaluate");
        assert_eq!(s.density_g_cm3(), fe.density_g_cm3, "{quench}");
        assert_eq!(s.cost_per_kg(), fe.cost_per_kg, "{quench}");
        assert_eq!(s.critical.ac1_c, 723.0);
        assert_eq!(s.critical.ac3_c, 910.0);
        assert_eq!(s.ms_c(), 539.0);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let tables = ReferenceTables::standard();
    let process = ProcessParameters::new(QuenchMedium::Water, 15.0, 600.0);
    let a = evaluate(&stainless_304(), &process, &tables).expect("first");
    let b = evaluate(&stainless_304(), &process, &tables).expect("second");
    assert_eq!(a, b);
}

#[test]
fn reference_alloy_values() {
    let (comp, process) = reference_design();
    let s = evaluate(&comp, &process, &ReferenceTables::standard()).expect("reference");
    assert_eq!(s.yield_strength_mpa(), 260.0);
    assert_eq!(s.uts_mpa(), 362.0);
    assert_eq!(s.hv(), 785.0);
}

#[test]
fn engine_compares_against_reference() {
    let mut engine = Engine::standard().expect("engine");
    let process = ProcessParameters::new(QuenchMedium::Oil, 25.0, 500.0);
    let s = engine.evaluate(&stainless_304(), &process).expect("evaluate");
    let cmp = engine.compare(&s);
    assert_eq!(cmp.reference_name, REFERENCE_NAME);
    assert_eq!(cmp.yield_strength_delta_mpa, 124.0);
    assert_eq!(cmp.uts_delta_mpa, 119.0);
    assert_eq!(cmp.hrc_delta, 0.0);
    assert_close(
        cmp.reference_specific_strength,
        engine.reference().specific_strength(),
        1e-12,
    );

    let self_cmp = snapshot::compare(engine.reference(), engine.reference());
    assert_eq!(self_cmp.yield_strength_delta_mpa, 0.0);
    assert_eq!(self_cmp.density_delta_g_cm3, 0.0);
}

#[test]
fn engine_reuses_last_result_but_reports_new_target() {
    let mut engine = Engine::standard().expect("engine");
    let comp = stainless_304();
    let first = engine
        .evaluate(&comp, &ProcessParameters::new(QuenchMedium::Oil, 25.0, 500.0))
        .expect("first");
    let second = engine
        .evaluate(&comp, &ProcessParameters::new(QuenchMedium::Oil, 25.0, 300.0))
        .expect("second");
    assert!(!first.meets_target_yield());
    assert!(second.meets_target_yield());
    assert_eq!(second.process.target_yield_mpa, 300.0);
    assert_eq!(first.mechanical, second.mechanical);

    let air = engine
        .evaluate(&comp, &ProcessParameters::new(QuenchMedium::Air, 25.0, 300.0))
        .expect("air");
    assert_eq!(air.martensite_fraction(), 0.0);
    assert_eq!(air.process.quench, QuenchMedium::Air);
}

static IRON_FREE: [ElementData; 1] = [ElementData::new(ElementSymbol::Ni, 16.0, 8.908, 1.2)];

#[test]
fn evaluation_fails_without_usable_table() {
    let tables = ReferenceTables::with_elements(&IRON_FREE);
    assert!(Engine::new(tables).is_err());
    let err = evaluate(&Composition::new(), &ProcessParameters::default(), &tables).unwrap_err();
    assert_eq!(err, DomainError::EmptyComposition);
    assert!(err.to_string().starts_with("empty-composition"));
}
