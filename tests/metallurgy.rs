use alloy_design_toolbox::alloy::{
    normalize, Composition, DomainError, ElementData, ElementSymbol, NormalizedComposition,
    ELEMENTS,
};
use alloy_design_toolbox::metallurgy::narrative::{self, NarrativeContext, FALLBACK_INSIGHT};
use alloy_design_toolbox::metallurgy::{
    carbon_equivalent, check_phase_stability, classify_hardenability, cost, critical_temperatures,
    density, evaluate_mechanical, hardness, martensite_fraction, martensite_start,
    sustainability_score, PhaseWarning, HARDENABILITY_BINS, PHASES_BASE, PHASES_WITH_SIGMA,
};
use alloy_design_toolbox::process::{ProcessParameters, QuenchMedium};
use alloy_design_toolbox::tables::ReferenceTables;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn pure_iron() -> NormalizedComposition {
    normalize(&Composition::new())
}

fn stainless_304() -> NormalizedComposition {
    normalize(&Composition::from_pairs([
        (ElementSymbol::C, 0.08),
        (ElementSymbol::Mn, 2.0),
        (ElementSymbol::Si, 1.0),
        (ElementSymbol::Cr, 18.0),
        (ElementSymbol::Ni, 8.0),
        (ElementSymbol::Mo, 0.5),
    ]))
}

fn aisi_4140() -> NormalizedComposition {
    normalize(&Composition::from_pairs([
        (ElementSymbol::C, 0.40),
        (ElementSymbol::Mn, 0.85),
        (ElementSymbol::Si, 0.25),
        (ElementSymbol::Cr, 0.95),
        (ElementSymbol::Mo, 0.20),
    ]))
}

#[test]
fn pure_iron_transformation_temperatures() {
    let fe = pure_iron();
    assert_close(martensite_start(&fe), 539.0, 1e-9);
    let crit = critical_temperatures(&fe);
    assert_eq!(crit.ac1_c, 723.0);
    assert_eq!(crit.ac3_c, 910.0);
    assert_eq!(carbon_equivalent(&fe), 0.0);
    assert_eq!(classify_hardenability(0.0).label, "Excellent");
}

#[test]
fn martensite_start_of_304_type() {
    assert_close(martensite_start(&stainless_304()), 81.21, 1e-9);
}

#[test]
fn faster_quench_gives_more_martensite() {
    let tables = ReferenceTables::standard();
    for comp in [pure_iron(), aisi_4140(), stainless_304()] {
        let water = martensite_fraction(&comp, QuenchMedium::Water, &tables).fraction;
        let oil = martensite_fraction(&comp, QuenchMedium::Oil, &tables).fraction;
        let air = martensite_fraction(&comp, QuenchMedium::Air, &tables).fraction;
        assert!(water >= oil && oil >= air, "water={water} oil={oil} air={air}");
        for f in [water, oil, air] {
            assert!((0.0..=1.0).contains(&f));
        }
    }
}

#[test]
fn no_martensite_when_ms_below_quench_temperature() {
    let tables = ReferenceTables::standard();
    let m = martensite_fraction(&stainless_304(), QuenchMedium::Air, &tables);
    assert_eq!(m.fraction, 0.0);
    assert_eq!(m.quench_temperature_c, 200.0);

    let oil = martensite_fraction(&stainless_304(), QuenchMedium::Oil, &tables);
    assert_close(oil.fraction, 0.01322, 1e-4);
}

#[test]
fn koistinen_marburger_for_4140_oil_quench() {
    let tables = ReferenceTables::standard();
    let m = martensite_fraction(&aisi_4140(), QuenchMedium::Oil, &tables);
    assert_close(m.ms_c, 330.965, 1e-9);
    assert_close(m.fraction, 0.93675, 1e-4);
}

#[test]
fn hardenability_bins_are_contiguous_and_decreasing() {
    let probs: Vec<f64> = [0.0, 0.25, 0.30, 0.35, 0.44, 0.45, 0.59, 0.60, 4.6]
        .iter()
        .map(|ce| classify_hardenability(*ce).success_probability)
        .collect();
    assert_eq!(probs, vec![0.95, 0.85, 0.85, 0.70, 0.70, 0.50, 0.50, 0.30, 0.30]);
    assert!(HARDENABILITY_BINS
        .windows(2)
        .all(|w| w[0].success_probability > w[1].success_probability));
    assert_eq!(classify_hardenability(f64::NAN).label, "Very Poor");
}

#[test]
fn stainless_carbon_equivalent_is_kept_out_of_range() {
    let ce = carbon_equivalent(&stainless_304());
    assert_close(ce, 4.64667, 1e-4);
    assert_eq!(classify_hardenability(ce).risk, "Very High");
}

#[test]
fn sigma_phase_needs_all_three_conditions() {
    let base = Composition::from_pairs([(ElementSymbol::Cr, 18.0), (ElementSymbol::Ni, 8.0)]);

    let sigma = check_phase_stability(&normalize(&base.with(ElementSymbol::Mo, 2.5)));
    assert!(sigma.has(PhaseWarning::SigmaPhaseRisk));
    assert_eq!(sigma.phases, PHASES_WITH_SIGMA);
    assert!(!sigma.stable);

    let at_limit = check_phase_stability(&normalize(&base.with(ElementSymbol::Mo, 2.0)));
    assert!(at_limit.stable);
    assert_eq!(at_limit.phases, PHASES_BASE);

    let high_ni = check_phase_stability(&normalize(
        &base.with(ElementSymbol::Mo, 2.5).with(ElementSymbol::Ni, 10.0),
    ));
    assert!(!high_ni.has(PhaseWarning::SigmaPhaseRisk));
}

#[test]
fn high_chromium_low_nickel_molybdenum_alloy_is_unstable() {
    let comp = normalize(&Composition::from_pairs([
        (ElementSymbol::Cr, 20.0),
        (ElementSymbol::Ni, 5.0),
        (ElementSymbol::Mo, 3.0),
    ]));
    assert_eq!(comp.fe(), 72.0);
    let s = check_phase_stability(&comp);
    assert!(!s.stable);
    assert_eq!(s.warnings, vec![PhaseWarning::SigmaPhaseRisk]);
    assert_eq!(s.phases, PHASES_WITH_SIGMA);
}

#[test]
fn austenitic_304_type_is_stable() {
    let s = check_phase_stability(&stainless_304());
    assert!(s.stable);
    assert!(s.warnings.is_empty());
    assert_eq!(s.phases, PHASES_BASE);
}

#[test]
fn loop_warnings_are_independent() {
    let comp = Composition::from_pairs([
        (ElementSymbol::Cr, 26.0),
        (ElementSymbol::Ni, 31.0),
        (ElementSymbol::Mo, 3.0),
    ]);
    let s = check_phase_stability(&normalize(&comp));
    assert_eq!(s.warnings, vec![PhaseWarning::FerriteLoop, PhaseWarning::GammaLoop]);
    assert_eq!(s.phases, PHASES_BASE);
}

#[test]
fn hall_petch_strength_of_4140() {
    let comp = aisi_4140();
    let process = ProcessParameters::new(QuenchMedium::Oil, 20.0, 655.0);
    let ce = carbon_equivalent(&comp);
    let mech = evaluate_mechanical(&comp, &process, ce, 0.93675);
    assert_close(mech.sigma0_mpa, 255.15, 1e-9);
    assert_eq!(mech.yield_strength_mpa, 260.0);
    assert_eq!(mech.uts_mpa, 362.0);
    assert_eq!(mech.hardness.hrc, 65.0);
    assert_eq!(mech.hardness.hv, 785.0);
}

#[test]
fn strength_and_hardness_are_integers_and_bounded() {
    let h = hardness(0.1, 0.5);
    assert_eq!(h.hrc, 36.0);
    assert_eq!(h.hv, 466.0);
    assert_eq!(hardness(10.0, 1.0).hrc, 65.0);
}

#[test]
fn vanadium_refines_grain_with_floor() {
    let process = ProcessParameters::new(QuenchMedium::Oil, 25.0, 0.0);
    let v = normalize(&Composition::new().with(ElementSymbol::V, 2.0));
    let mech = evaluate_mechanical(&v, &process, 0.4, 0.0);
    assert_close(mech.grain_refinement_factor, 0.9, 1e-12);
    assert_close(mech.effective_grain_size_um, 22.5, 1e-9);

    let heavy = normalize(
        &Composition::new()
            .with(ElementSymbol::V, 5.0)
            .with(ElementSymbol::Ti, 5.0)
            .with(ElementSymbol::Mo, 10.0),
    );
    let mech = evaluate_mechanical(&heavy, &process, 2.0, 0.0);
    assert!(mech.grain_refinement_factor >= 0.3);
}

#[test]
fn tiny_grain_size_is_clamped() {
    let process = ProcessParameters::new(QuenchMedium::Oil, 0.0, 0.0);
    assert_eq!(process.grain_size(), 0.1);
    let nan = ProcessParameters::new(QuenchMedium::Oil, f64::NAN, 0.0);
    assert_eq!(nan.grain_size(), 25.0);
    let mech = evaluate_mechanical(&pure_iron(), &process, 0.0, 0.0);
    assert!(mech.yield_strength_mpa.is_finite());
}

fn iron_data() -> &'static ElementData {
    ELEMENTS
        .iter()
        .find(|e| e.symbol == ElementSymbol::Fe)
        .expect("Fe row")
}

#[test]
fn pure_iron_physical_properties_match_reference_row_exactly() {
    let tables = ReferenceTables::standard();
    let fe = pure_iron();
    assert_eq!(density(&fe, &tables).expect("density"), iron_data().density_g_cm3);
    assert_eq!(cost(&fe, &tables).expect("cost"), iron_data().cost_per_kg);
    assert_eq!(sustainability_score(&fe, &tables), 100.0);
}

#[test]
fn single_element_density_is_not_perturbed_by_mixing_division() {
    let tables = ReferenceTables::with_elements(&NICKEL_ONLY);
    let comp = normalize(&Composition::new().with(ElementSymbol::Ni, 30.0));
    assert_eq!(density(&comp, &tables).expect("density"), 8.908);
}

#[test]
fn density_uses_harmonic_mixture() {
    let tables = ReferenceTables::standard();
    let comp = normalize(&Composition::new().with(ElementSymbol::Ni, 20.0));
    let expected = 100.0 / (80.0 / 7.874 + 20.0 / 8.908);
    assert_close(density(&comp, &tables).expect("density"), expected, 1e-9);
    let expected_cost = (80.0 * 0.45 + 20.0 * 16.0) / 100.0;
    assert_close(cost(&comp, &tables).expect("cost"), expected_cost, 1e-9);
}

#[test]
fn sustainability_penalizes_scarce_elements() {
    let tables = ReferenceTables::standard();
    let comp = normalize(&Composition::new().with(ElementSymbol::Ni, 10.0));
    assert_eq!(sustainability_score(&comp, &tables), 88.0);
    let heavy = normalize(&Composition::from_pairs([
        (ElementSymbol::Ni, 40.0),
        (ElementSymbol::Mo, 10.0),
        (ElementSymbol::V, 5.0),
    ]));
    assert_eq!(sustainability_score(&heavy, &tables), 12.0);
}

static NICKEL_ONLY: [ElementData; 1] = [ElementData::new(ElementSymbol::Ni, 16.0, 8.908, 1.2)];

#[test]
fn untabulated_composition_is_a_domain_error() {
    let tables = ReferenceTables::with_elements(&NICKEL_ONLY);
    let fe = pure_iron();
    assert_eq!(density(&fe, &tables), Err(DomainError::EmptyComposition));
    assert_eq!(cost(&fe, &tables), Err(DomainError::EmptyComposition));
}

#[test]
fn narrative_follows_rule_order() {
    let comp = stainless_304();
    let lines = narrative::generate(&NarrativeContext {
        composition: &comp,
        yield_strength_mpa: 384.0,
        martensite_fraction: 0.013,
    });
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Nickel (8.00%)"));
    assert!(lines[1].starts_with("Chromium (18.00%)"));
}

#[test]
fn narrative_falls_back_for_plain_iron() {
    let comp = pure_iron();
    let lines = narrative::generate(&NarrativeContext {
        composition: &comp,
        yield_strength_mpa: 4.0,
        martensite_fraction: 0.99,
    });
    assert_eq!(lines, vec![FALLBACK_INSIGHT.to_string()]);
}

#[test]
fn narrative_flags_brittle_martensite_and_weldable_strength() {
    let comp = aisi_4140();
    let lines = narrative::generate(&NarrativeContext {
        composition: &comp,
        yield_strength_mpa: 260.0,
        martensite_fraction: 0.937,
    });
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("High martensite fraction (94%) with 0.40% carbon"));

    let low_c = normalize(
        &Composition::new()
            .with(ElementSymbol::C, 0.05)
            .with(ElementSymbol::V, 0.2),
    );
    let lines = narrative::generate(&NarrativeContext {
        composition: &low_c,
        yield_strength_mpa: 450.0,
        martensite_fraction: 0.5,
    });
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Vanadium (0.20%)"));
    assert!(lines[1].starts_with("Low carbon (0.05%) combined with 450 MPa"));
}
