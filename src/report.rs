//! 고정 형식 텍스트 보고서. 같은 스냅샷/이름/시각이면 바이트 단위로 같은 결과를 낸다.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::snapshot::PropertySnapshot;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BULLET: &str = "•";

/// 보고서 문자열을 만든다. 섹션 순서는 고정이다.
pub fn render_report(name: &str, generated_at: NaiveDateTime, snapshot: &PropertySnapshot) -> String {
    let mut out = String::new();
    // String에 대한 write!는 실패하지 않는다
    let _ = write_sections(&mut out, name, generated_at, snapshot);
    out
}

fn write_sections(
    out: &mut String,
    name: &str,
    generated_at: NaiveDateTime,
    s: &PropertySnapshot,
) -> std::fmt::Result {
    writeln!(out, "ALLOY DESIGN REPORT")?;
    writeln!(out, "Name: {name}")?;
    writeln!(out, "Generated: {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out)?;

    writeln!(out, "COMPOSITION (wt%)")?;
    for (el, wt) in s.composition.iter().filter(|(_, wt)| *wt > 0.0) {
        writeln!(out, "  {el}: {wt:.3}")?;
    }
    writeln!(out)?;

    writeln!(out, "CALCULATED PROPERTIES")?;
    writeln!(out, "  Yield Strength: {:.0} MPa", s.yield_strength_mpa())?;
    writeln!(out, "  Ultimate Tensile Strength: {:.0} MPa", s.uts_mpa())?;
    writeln!(out, "  Hardness: {:.0} HRC / {:.0} HV", s.hrc(), s.hv())?;
    writeln!(out, "  Density: {:.3} g/cm³", s.density_g_cm3())?;
    writeln!(out, "  Cost: ${:.2}/kg", s.cost_per_kg())?;
    writeln!(out)?;

    writeln!(out, "HEAT TREATMENT")?;
    writeln!(out, "  Ac1: {:.0} °C", s.critical.ac1_c)?;
    writeln!(out, "  Ac3: {:.0} °C", s.critical.ac3_c)?;
    writeln!(out, "  Ms: {:.0} °C", s.ms_c())?;
    writeln!(out, "  Martensite Fraction: {:.1}%", s.martensite_fraction() * 100.0)?;
    writeln!(out)?;

    writeln!(
        out,
        "CARBON EQUIVALENT: {:.3} ({})",
        s.carbon_equivalent, s.hardenability.label
    )?;
    writeln!(out)?;

    writeln!(out, "PHASE STABILITY")?;
    writeln!(out, "  Phases: {}", s.phase_stability.phases)?;
    if s.phase_stability.warnings.is_empty() {
        writeln!(out, "  No stability warnings")?;
    } else {
        for w in &s.phase_stability.warnings {
            writeln!(out, "  - {}", w.message())?;
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "SUSTAINABILITY SCORE: {:.0}/100",
        s.physical.sustainability_score
    )?;
    writeln!(out)?;

    writeln!(out, "INSIGHTS")?;
    for line in &s.narrative {
        writeln!(out, "  {BULLET} {line}")?;
    }
    Ok(())
}

/// 보고서를 파일로 저장한다.
pub fn write_report(
    path: &Path,
    name: &str,
    generated_at: NaiveDateTime,
    snapshot: &PropertySnapshot,
) -> std::io::Result<()> {
    fs::write(path, render_report(name, generated_at, snapshot))
}
