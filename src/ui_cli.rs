use std::io::{self, Write};
use std::path::Path;

use crate::alloy::{normalize, Composition};
use crate::app::AppError;
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::i18n::{keys, Translator};
use crate::metallurgy::first_nose_crossing;
use crate::process::{ProcessParameters, QuenchMedium};
use crate::report;
use crate::snapshot::{Engine, PropertySnapshot, ReferenceComparison};
use crate::units::{
    convert_density, convert_stress, convert_temperature, convert_temperature_diff, DensityUnit,
    StressUnit, TemperatureDiffUnit, TemperatureUnit,
};

pub const DEFAULT_REPORT_PATH: &str = "alloy_report.txt";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Evaluate,
    Composition,
    Process,
    Curves,
    Compare,
    Report,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_EVALUATE,
        keys::MAIN_MENU_COMPOSITION,
        keys::MAIN_MENU_PROCESS,
        keys::MAIN_MENU_CURVES,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력 한 줄을 메뉴 선택으로 해석한다. 0바이트 입력(stdin EOF)은 종료로 본다.
pub fn parse_menu_choice(raw: &str) -> Option<MenuChoice> {
    if raw.is_empty() {
        return Some(MenuChoice::Exit);
    }
    match raw.trim() {
        "1" => Some(MenuChoice::Evaluate),
        "2" => Some(MenuChoice::Composition),
        "3" => Some(MenuChoice::Process),
        "4" => Some(MenuChoice::Curves),
        "5" => Some(MenuChoice::Compare),
        "6" => Some(MenuChoice::Report),
        "7" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 설정에 저장된 작업 설계를 계산 입력으로 변환한다.
pub fn current_design(cfg: &Config) -> Result<(Composition, ProcessParameters), AppError> {
    Ok((cfg.design.composition()?, cfg.design.process()))
}

/// 물성 계산 메뉴를 처리한다.
pub fn handle_evaluate(tr: &Translator, cfg: &Config, engine: &mut Engine) -> Result<(), AppError> {
    let (comp, process) = current_design(cfg)?;
    let snapshot = engine.evaluate(&comp, &process)?;
    print_snapshot(tr, &cfg.default_units, &cfg.design.name, &snapshot);
    Ok(())
}

/// 조성 편집 메뉴를 처리한다. 빈 줄을 입력할 때까지 `원소=값`을 반복해서 받는다.
pub fn handle_composition(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPOSITION_HEADING));
    let mut comp = cfg.design.composition()?;
    print_composition(tr, &comp);
    loop {
        let line = read_line(tr.t(keys::COMPOSITION_PROMPT))?;
        if line.trim().is_empty() {
            break;
        }
        match Composition::parse_assignment(&line) {
            Ok((el, wt)) => {
                comp.set(el, wt);
                println!("  {el} = {:.3}", comp.get(el));
            }
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
    cfg.design.set_composition(&comp);
    print_composition(tr, &comp);
    Ok(())
}

fn print_composition(tr: &Translator, comp: &Composition) {
    let normalized = normalize(comp);
    println!("{}", tr.t(keys::COMPOSITION_CURRENT));
    let line = normalized
        .iter()
        .filter(|(_, wt)| *wt > 0.0)
        .map(|(el, wt)| format!("{el} {wt:.3}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {line}");
    if normalized.balance_clamped() {
        println!("{}", tr.t(keys::COMPOSITION_BALANCE_WARNING));
    }
}

/// 공정 조건 메뉴를 처리한다. 빈 입력은 현재 값을 유지한다.
pub fn handle_process(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROCESS_HEADING));
    let keep = tr.t(keys::PROMPT_KEEP_CURRENT);

    let name = read_line(&format!("{} [{}] ({keep}): ", tr.t(keys::PROMPT_NAME), cfg.design.name))?;
    if !name.trim().is_empty() {
        cfg.design.name = name.trim().to_string();
    }

    println!("{}", tr.t(keys::PROCESS_QUENCH_OPTIONS));
    let sel = read_line(&format!("{}[{}] ", tr.t(keys::PROMPT_SELECT), cfg.design.quench))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.design.quench = QuenchMedium::Water,
        "2" => cfg.design.quench = QuenchMedium::Oil,
        "3" => cfg.design.quench = QuenchMedium::Air,
        other => cfg.design.quench = QuenchMedium::from_name(other),
    }

    if let Some(v) = read_optional_f64(
        tr,
        &format!("{} [{}] ({keep}): ", tr.t(keys::PROMPT_GRAIN_SIZE), cfg.design.grain_size_um),
    )? {
        cfg.design.grain_size_um = v;
    }
    if let Some(v) = read_optional_f64(
        tr,
        &format!(
            "{} [{}] ({keep}): ",
            tr.t(keys::PROMPT_TARGET_YIELD),
            cfg.design.target_yield_mpa
        ),
    )? {
        cfg.design.target_yield_mpa = v;
    }
    Ok(())
}

/// TTT/냉각 곡선 메뉴를 처리한다.
pub fn handle_curves(tr: &Translator, cfg: &Config, engine: &mut Engine) -> Result<(), AppError> {
    let (comp, process) = current_design(cfg)?;
    let snapshot = engine.evaluate(&comp, &process)?;
    let rate = engine
        .tables()
        .quench_profile(process.quench)
        .cooling_rate_c_per_s;
    print_curves(tr, &cfg.default_units, &snapshot, rate);
    Ok(())
}

/// 기준 합금 비교 메뉴를 처리한다.
pub fn handle_compare(tr: &Translator, cfg: &Config, engine: &mut Engine) -> Result<(), AppError> {
    let (comp, process) = current_design(cfg)?;
    let snapshot = engine.evaluate(&comp, &process)?;
    let cmp = engine.compare(&snapshot);
    print_comparison(tr, &cfg.default_units, &cmp);
    Ok(())
}

/// 보고서 저장 메뉴를 처리한다.
pub fn handle_report(tr: &Translator, cfg: &Config, engine: &mut Engine) -> Result<(), AppError> {
    let (comp, process) = current_design(cfg)?;
    let snapshot = engine.evaluate(&comp, &process)?;
    let path = read_line(tr.t(keys::PROMPT_REPORT_PATH))?;
    let path = if path.trim().is_empty() {
        DEFAULT_REPORT_PATH.to_string()
    } else {
        path.trim().to_string()
    };
    let now = chrono::Local::now().naive_local();
    report::write_report(Path::new(&path), &cfg.design.name, now, &snapshot)?;
    println!("{} {path}", tr.t(keys::REPORT_SAVED));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let system = match sel.trim() {
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_unit_system(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn fmt_temperature(units: &DefaultUnits, celsius: f64) -> String {
    let v = convert_temperature(celsius, TemperatureUnit::Celsius, units.temperature);
    format!("{v:.0} {}", units.temperature.symbol())
}

fn fmt_stress(units: &DefaultUnits, mpa: f64) -> String {
    let v = convert_stress(mpa, StressUnit::MegaPascal, units.stress);
    match units.stress {
        StressUnit::MegaPascal => format!("{v:.0} {}", units.stress.symbol()),
        StressUnit::Ksi => format!("{v:.1} {}", units.stress.symbol()),
    }
}

fn fmt_density(units: &DefaultUnits, g_cm3: f64) -> String {
    let v = convert_density(g_cm3, DensityUnit::GramPerCm3, units.density);
    format!("{v:.3} {}", units.density.symbol())
}

/// 스냅샷 요약을 출력한다.
pub fn print_snapshot(
    tr: &Translator,
    units: &DefaultUnits,
    name: &str,
    s: &PropertySnapshot,
) {
    println!("{} {name}", tr.t(keys::RESULT_HEADING));
    if s.balance_clamped {
        println!("{}", tr.t(keys::COMPOSITION_BALANCE_WARNING));
    }
    println!("  {} {}", tr.t(keys::RESULT_MS), fmt_temperature(units, s.ms_c()));
    println!(
        "  {} {:.1}% ({}, {})",
        tr.t(keys::RESULT_MARTENSITE),
        s.martensite_fraction() * 100.0,
        s.process.quench,
        fmt_temperature(units, s.martensite.quench_temperature_c)
    );
    println!("  {} {:.3}", tr.t(keys::RESULT_CE), s.carbon_equivalent);
    println!(
        "  {} {} (p={:.2}, risk={})",
        tr.t(keys::RESULT_HARDENABILITY),
        s.hardenability.label,
        s.hardenability.success_probability,
        s.hardenability.risk
    );
    println!(
        "  {} {} / {}",
        tr.t(keys::RESULT_CRITICAL),
        fmt_temperature(units, s.critical.ac1_c),
        fmt_temperature(units, s.critical.ac3_c)
    );
    println!(
        "  {} {} (σ0={}, d_eff={:.2} µm)",
        tr.t(keys::RESULT_YIELD),
        fmt_stress(units, s.yield_strength_mpa()),
        fmt_stress(units, s.mechanical.sigma0_mpa),
        s.mechanical.effective_grain_size_um
    );
    println!("  {} {}", tr.t(keys::RESULT_UTS), fmt_stress(units, s.uts_mpa()));
    println!(
        "  {} {:.0} HRC / {:.0} HV",
        tr.t(keys::RESULT_HARDNESS),
        s.hrc(),
        s.hv()
    );
    println!("  {} {}", tr.t(keys::RESULT_DENSITY), fmt_density(units, s.density_g_cm3()));
    println!("  {} ${:.2}/kg", tr.t(keys::RESULT_COST), s.cost_per_kg());
    println!(
        "  {} {:.0}/100",
        tr.t(keys::RESULT_SUSTAINABILITY),
        s.physical.sustainability_score
    );
    println!("  {} {}", tr.t(keys::RESULT_PHASES), s.phase_stability.phases);
    if s.phase_stability.stable {
        println!("    {}", tr.t(keys::RESULT_STABLE));
    } else {
        for w in &s.phase_stability.warnings {
            println!("    - {}", w.message());
        }
    }
    if s.meets_target_yield() {
        println!("  {}", tr.t(keys::RESULT_TARGET_MET));
    } else {
        println!("  {}", tr.t(keys::RESULT_TARGET_MISSED));
    }
    println!("  {}", tr.t(keys::RESULT_INSIGHTS));
    for line in &s.narrative {
        println!("    • {line}");
    }
}

/// TTT 곡선과 냉각 경로 병합표를 출력한다.
pub fn print_curves(tr: &Translator, units: &DefaultUnits, s: &PropertySnapshot, rate_c_per_s: f64) {
    println!("{}", tr.t(keys::CURVES_HEADING));
    println!(
        "  {} {:.1} s / {}",
        tr.t(keys::CURVES_NOSE),
        s.ttt.nose_time_s,
        fmt_temperature(units, s.ttt.nose_temperature_c)
    );
    let diff_unit = units.temperature_diff;
    let rate = convert_temperature_diff(rate_c_per_s, TemperatureDiffUnit::Celsius, diff_unit);
    let rate_symbol = match diff_unit {
        TemperatureDiffUnit::Kelvin => "K/s",
        TemperatureDiffUnit::Celsius => "°C/s",
        TemperatureDiffUnit::Fahrenheit => "°F/s",
    };
    println!("  {} {rate:.0} {rate_symbol} ({})", tr.t(keys::CURVES_COOLING_RATE), s.process.quench);
    println!("{}", tr.t(keys::CURVES_TABLE_HEADER));
    for p in &s.overlay {
        let cooling = p
            .cooling_time_s
            .map(|t| format!("{t:>10.2}"))
            .unwrap_or_else(|| format!("{:>10}", "-"));
        println!(
            "  {:>10} | {:>12.1} | {cooling}",
            fmt_temperature(units, p.temperature_c),
            p.ttt_time_s
        );
    }
    match first_nose_crossing(&s.overlay) {
        Some(p) => println!(
            "  {} {}",
            tr.t(keys::CURVES_CROSSING),
            fmt_temperature(units, p.temperature_c)
        ),
        None => println!("  {}", tr.t(keys::CURVES_NO_CROSSING)),
    }
}

fn fmt_signed(value: f64, decimals: usize, unit: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{sign}{:.*} {unit}", decimals, value.abs())
}

/// 기준 합금 비교 결과를 출력한다.
pub fn print_comparison(tr: &Translator, units: &DefaultUnits, cmp: &ReferenceComparison) {
    println!("{} ({})", tr.t(keys::COMPARE_HEADING), cmp.reference_name);
    let stress_decimals = match units.stress {
        StressUnit::MegaPascal => 0,
        StressUnit::Ksi => 1,
    };
    let ys = convert_stress(cmp.yield_strength_delta_mpa, StressUnit::MegaPascal, units.stress);
    let uts = convert_stress(cmp.uts_delta_mpa, StressUnit::MegaPascal, units.stress);
    println!(
        "  {} {}",
        tr.t(keys::COMPARE_YIELD),
        fmt_signed(ys, stress_decimals, units.stress.symbol())
    );
    println!(
        "  {} {}",
        tr.t(keys::COMPARE_UTS),
        fmt_signed(uts, stress_decimals, units.stress.symbol())
    );
    println!(
        "  {} {} / {}",
        tr.t(keys::COMPARE_HARDNESS),
        fmt_signed(cmp.hrc_delta, 0, "HRC"),
        fmt_signed(cmp.hv_delta, 0, "HV")
    );
    let density = convert_density(cmp.density_delta_g_cm3, DensityUnit::GramPerCm3, units.density);
    println!(
        "  {} {}",
        tr.t(keys::COMPARE_DENSITY),
        fmt_signed(density, 3, units.density.symbol())
    );
    println!(
        "  {} {:.1} / {:.1}",
        tr.t(keys::COMPARE_SPECIFIC),
        cmp.specific_strength,
        cmp.reference_specific_strength
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 빈 입력이면 None, 숫자가 아니면 다시 묻는다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_exits_menu() {
        assert_eq!(parse_menu_choice(""), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("\n"), None);
        assert_eq!(parse_menu_choice(" 4 \n"), Some(MenuChoice::Curves));
        assert_eq!(parse_menu_choice("9\n"), None);
    }
}
