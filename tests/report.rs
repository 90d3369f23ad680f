use alloy_design_toolbox::alloy::{Composition, ElementSymbol};
use alloy_design_toolbox::process::{ProcessParameters, QuenchMedium};
use alloy_design_toolbox::report::{render_report, write_report};
use alloy_design_toolbox::snapshot::evaluate;
use alloy_design_toolbox::tables::ReferenceTables;
use chrono::NaiveDate;

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .expect("valid timestamp")
}

#[test]
fn pure_iron_report_is_byte_exact() {
    let s = evaluate(
        &Composition::new(),
        &ProcessParameters::default(),
        &ReferenceTables::standard(),
    )
    .expect("evaluate");
    let expected = "\
ALLOY DESIGN REPORT
Name: Pure iron
Generated: 2024-01-02 03:04:05

COMPOSITION (wt%)
  Fe: 100.000

CALCULATED PROPERTIES
  Yield Strength: 4 MPa
  Ultimate Tensile Strength: 6 MPa
  Hardness: 40 HRC / 510 HV
  Density: 7.874 g/cm³
  Cost: $0.45/kg

HEAT TREATMENT
  Ac1: 723 °C
  Ac3: 910 °C
  Ms: 539 °C
  Martensite Fraction: 99.4%

CARBON EQUIVALENT: 0.000 (Excellent)

PHASE STABILITY
  Phases: FCC + BCC
  No stability warnings

SUSTAINABILITY SCORE: 100/100

INSIGHTS
  • No dominant alloying effect detected; properties follow plain carbon steel behavior.
";
    assert_eq!(render_report("Pure iron", fixed_time(), &s), expected);
}

#[test]
fn report_lists_warnings_and_nonzero_elements_only() {
    let comp = Composition::from_pairs([
        (ElementSymbol::Cr, 18.0),
        (ElementSymbol::Ni, 8.0),
        (ElementSymbol::Mo, 2.5),
    ]);
    let process = ProcessParameters::new(QuenchMedium::Water, 30.0, 400.0);
    let s = evaluate(&comp, &process, &ReferenceTables::standard()).expect("evaluate");
    let text = render_report("Sigma test", fixed_time(), &s);

    assert!(text.contains("  Fe: 71.500\n  Ni: 8.000\n  Cr: 18.000\n  Mo: 2.500\n\n"));
    assert!(!text.contains("  C: "));
    assert!(text.contains("  Phases: FCC + BCC + Sigma\n  - Sigma phase risk"));
    assert!(!text.contains("No stability warnings"));
    assert!(text.contains("  • Molybdenum (2.50%)"));
}

#[test]
fn report_is_written_to_disk() {
    let s = evaluate(
        &Composition::new(),
        &ProcessParameters::default(),
        &ReferenceTables::standard(),
    )
    .expect("evaluate");
    let path = std::env::temp_dir().join(format!("alloy_report_{}.txt", std::process::id()));
    write_report(&path, "Pure iron", fixed_time(), &s).expect("write");
    let text = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);
    assert_eq!(text, render_report("Pure iron", fixed_time(), &s));
}
