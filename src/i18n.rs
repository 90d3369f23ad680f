use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EVALUATE: &str = "main_menu.evaluate";
    pub const MAIN_MENU_COMPOSITION: &str = "main_menu.composition";
    pub const MAIN_MENU_PROCESS: &str = "main_menu.process";
    pub const MAIN_MENU_CURVES: &str = "main_menu.curves";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COMPOSITION_HEADING: &str = "composition.heading";
    pub const COMPOSITION_CURRENT: &str = "composition.current";
    pub const COMPOSITION_PROMPT: &str = "composition.prompt";
    pub const COMPOSITION_BALANCE_WARNING: &str = "composition.balance_warning";

    pub const PROCESS_HEADING: &str = "process.heading";
    pub const PROCESS_QUENCH_OPTIONS: &str = "process.quench_options";
    pub const PROMPT_NAME: &str = "prompt.name";
    pub const PROMPT_GRAIN_SIZE: &str = "prompt.grain_size";
    pub const PROMPT_TARGET_YIELD: &str = "prompt.target_yield";
    pub const PROMPT_KEEP_CURRENT: &str = "prompt.keep_current";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_MS: &str = "result.ms";
    pub const RESULT_MARTENSITE: &str = "result.martensite";
    pub const RESULT_CE: &str = "result.ce";
    pub const RESULT_HARDENABILITY: &str = "result.hardenability";
    pub const RESULT_CRITICAL: &str = "result.critical";
    pub const RESULT_YIELD: &str = "result.yield";
    pub const RESULT_UTS: &str = "result.uts";
    pub const RESULT_HARDNESS: &str = "result.hardness";
    pub const RESULT_DENSITY: &str = "result.density";
    pub const RESULT_COST: &str = "result.cost";
    pub const RESULT_SUSTAINABILITY: &str = "result.sustainability";
    pub const RESULT_PHASES: &str = "result.phases";
    pub const RESULT_STABLE: &str = "result.stable";
    pub const RESULT_TARGET_MET: &str = "result.target_met";
    pub const RESULT_TARGET_MISSED: &str = "result.target_missed";
    pub const RESULT_INSIGHTS: &str = "result.insights";

    pub const CURVES_HEADING: &str = "curves.heading";
    pub const CURVES_NOSE: &str = "curves.nose";
    pub const CURVES_COOLING_RATE: &str = "curves.cooling_rate";
    pub const CURVES_TABLE_HEADER: &str = "curves.table_header";
    pub const CURVES_CROSSING: &str = "curves.crossing";
    pub const CURVES_NO_CROSSING: &str = "curves.no_crossing";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_YIELD: &str = "compare.yield";
    pub const COMPARE_UTS: &str = "compare.uts";
    pub const COMPARE_HARDNESS: &str = "compare.hardness";
    pub const COMPARE_DENSITY: &str = "compare.density";
    pub const COMPARE_SPECIFIC: &str = "compare.specific";

    pub const PROMPT_REPORT_PATH: &str = "prompt.report_path";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩에 있으면 언어팩 문자열이 우선한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Alloy Design Toolbox ===",
        MAIN_MENU_EVALUATE => "1) 물성 계산",
        MAIN_MENU_COMPOSITION => "2) 조성 편집",
        MAIN_MENU_PROCESS => "3) 공정 조건",
        MAIN_MENU_CURVES => "4) TTT / 냉각 곡선",
        MAIN_MENU_COMPARE => "5) 기준 합금 비교",
        MAIN_MENU_REPORT => "6) 보고서 저장",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COMPOSITION_HEADING => "\n-- 조성 편집 --",
        COMPOSITION_CURRENT => "현재 조성 (wt%):",
        COMPOSITION_PROMPT => "원소=값 입력 (예: Cr=18, 엔터로 종료): ",
        COMPOSITION_BALANCE_WARNING => "경고: 비철 원소 합이 100%를 넘어 Fe가 0으로 제한됩니다.",
        PROCESS_HEADING => "\n-- 공정 조건 --",
        PROCESS_QUENCH_OPTIONS => "냉각 매체: 1=Water 2=Oil 3=Air (엔터: 유지)",
        PROMPT_NAME => "합금 이름",
        PROMPT_GRAIN_SIZE => "결정립 크기 [µm]",
        PROMPT_TARGET_YIELD => "목표 항복강도 [MPa]",
        PROMPT_KEEP_CURRENT => "엔터: 유지",
        RESULT_HEADING => "\n-- 계산 결과 --",
        RESULT_MS => "Ms:",
        RESULT_MARTENSITE => "마르텐사이트 분율:",
        RESULT_CE => "탄소당량(CE):",
        RESULT_HARDENABILITY => "경화능 등급:",
        RESULT_CRITICAL => "Ac1 / Ac3:",
        RESULT_YIELD => "항복강도:",
        RESULT_UTS => "인장강도:",
        RESULT_HARDNESS => "경도:",
        RESULT_DENSITY => "밀도:",
        RESULT_COST => "단가:",
        RESULT_SUSTAINABILITY => "지속가능성 점수:",
        RESULT_PHASES => "상 구성:",
        RESULT_STABLE => "상 안정성 경고 없음",
        RESULT_TARGET_MET => "목표 항복강도를 충족합니다.",
        RESULT_TARGET_MISSED => "목표 항복강도에 미달합니다.",
        RESULT_INSIGHTS => "해설:",
        CURVES_HEADING => "\n-- TTT / 냉각 곡선 --",
        CURVES_NOSE => "TTT 코 (시간/온도):",
        CURVES_COOLING_RATE => "냉각속도:",
        CURVES_TABLE_HEADER => "  온도 | TTT 시간 [s] | 냉각 시간 [s]",
        CURVES_CROSSING => "냉각 경로가 TTT 곡선과 교차하는 온도:",
        CURVES_NO_CROSSING => "냉각 경로가 TTT 곡선을 피합니다 (확산 변태 없음).",
        COMPARE_HEADING => "\n-- 기준 합금 비교 --",
        COMPARE_YIELD => "항복강도 차이:",
        COMPARE_UTS => "인장강도 차이:",
        COMPARE_HARDNESS => "경도 차이:",
        COMPARE_DENSITY => "밀도 차이:",
        COMPARE_SPECIFIC => "비강도 (현재 / 기준):",
        PROMPT_REPORT_PATH => "저장 경로 (엔터: alloy_report.txt): ",
        REPORT_SAVED => "보고서를 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Alloy Design Toolbox ===",
        MAIN_MENU_EVALUATE => "1) Evaluate properties",
        MAIN_MENU_COMPOSITION => "2) Edit composition",
        MAIN_MENU_PROCESS => "3) Process parameters",
        MAIN_MENU_CURVES => "4) TTT / cooling curves",
        MAIN_MENU_COMPARE => "5) Compare with reference alloy",
        MAIN_MENU_REPORT => "6) Save report",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COMPOSITION_HEADING => "\n-- Edit Composition --",
        COMPOSITION_CURRENT => "Current composition (wt%):",
        COMPOSITION_PROMPT => "Element=value (ex: Cr=18, enter to finish): ",
        COMPOSITION_BALANCE_WARNING => {
            "Warning: alloying elements exceed 100%, Fe is clamped to 0."
        }
        PROCESS_HEADING => "\n-- Process Parameters --",
        PROCESS_QUENCH_OPTIONS => "Quench medium: 1=Water 2=Oil 3=Air (enter: keep)",
        PROMPT_NAME => "Alloy name",
        PROMPT_GRAIN_SIZE => "Grain size [µm]",
        PROMPT_TARGET_YIELD => "Target yield strength [MPa]",
        PROMPT_KEEP_CURRENT => "enter: keep",
        RESULT_HEADING => "\n-- Results --",
        RESULT_MS => "Ms:",
        RESULT_MARTENSITE => "Martensite fraction:",
        RESULT_CE => "Carbon equivalent (CE):",
        RESULT_HARDENABILITY => "Hardenability:",
        RESULT_CRITICAL => "Ac1 / Ac3:",
        RESULT_YIELD => "Yield strength:",
        RESULT_UTS => "Tensile strength:",
        RESULT_HARDNESS => "Hardness:",
        RESULT_DENSITY => "Density:",
        RESULT_COST => "Cost:",
        RESULT_SUSTAINABILITY => "Sustainability score:",
        RESULT_PHASES => "Phases:",
        RESULT_STABLE => "No phase-stability warnings",
        RESULT_TARGET_MET => "Target yield strength is met.",
        RESULT_TARGET_MISSED => "Target yield strength is not met.",
        RESULT_INSIGHTS => "Insights:",
        CURVES_HEADING => "\n-- TTT / Cooling Curves --",
        CURVES_NOSE => "TTT nose (time/temperature):",
        CURVES_COOLING_RATE => "Cooling rate:",
        CURVES_TABLE_HEADER => "  Temp | TTT time [s] | Cooling time [s]",
        CURVES_CROSSING => "Cooling path crosses the TTT curve at:",
        CURVES_NO_CROSSING => "Cooling path avoids the TTT curve (no diffusional transformation).",
        COMPARE_HEADING => "\n-- Reference Comparison --",
        COMPARE_YIELD => "Yield strength delta:",
        COMPARE_UTS => "Tensile strength delta:",
        COMPARE_HARDNESS => "Hardness delta:",
        COMPARE_DENSITY => "Density delta:",
        COMPARE_SPECIFIC => "Specific strength (current / reference):",
        PROMPT_REPORT_PATH => "Output path (enter: alloy_report.txt): ",
        REPORT_SAVED => "Report saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        _ => "[missing translation]",
    }
}
