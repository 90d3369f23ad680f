//! 상변태 관련 경험식: Ms, 마르텐사이트 분율, 탄소당량, 경화능 등급, 상 안정성, Ac1/Ac3.

use serde::Serialize;

use crate::alloy::{ElementSymbol, NormalizedComposition};
use crate::process::QuenchMedium;
use crate::tables::ReferenceTables;

/// Koistinen–Marburger 속도 상수 [1/°C]
const KM_RATE: f64 = 0.011;

/// Ms(마르텐사이트 변태 개시 온도, °C)를 선형 회귀식으로 계산한다.
///
/// Ms = 539 − 423·C − 30.4·Mn − 17.7·Ni − 12.1·Cr − 7.5·Mo
pub fn martensite_start(comp: &NormalizedComposition) -> f64 {
    539.0 - 423.0 * comp.get(ElementSymbol::C)
        - 30.4 * comp.get(ElementSymbol::Mn)
        - 17.7 * comp.get(ElementSymbol::Ni)
        - 12.1 * comp.get(ElementSymbol::Cr)
        - 7.5 * comp.get(ElementSymbol::Mo)
}

/// 마르텐사이트 변태 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MartensiteTransformation {
    /// 마르텐사이트 체적분율 (0~1)
    pub fraction: f64,
    /// Ms [°C]
    pub ms_c: f64,
    /// 적용한 담금질 온도 [°C]
    pub quench_temperature_c: f64,
}

/// Koistinen–Marburger 식으로 마르텐사이트 분율을 계산한다.
pub fn martensite_fraction(
    comp: &NormalizedComposition,
    medium: QuenchMedium,
    tables: &ReferenceTables,
) -> MartensiteTransformation {
    let ms = martensite_start(comp);
    let quench_temperature_c = tables.quench_profile(medium).quench_temperature_c;
    let fraction = if ms <= quench_temperature_c {
        0.0
    } else {
        (1.0 - (-KM_RATE * (ms - quench_temperature_c)).exp()).clamp(0.0, 1.0)
    };
    MartensiteTransformation {
        fraction,
        ms_c: ms,
        quench_temperature_c,
    }
}

/// 탄소당량 CE = C + Mn/6 + (Cr+Mo+V)/5 + Ni/15.
///
/// 스테인리스 영역(고 Cr)에서는 원래 검증 범위를 크게 벗어난 값(CE ≫ 1)이 나오지만
/// 식을 그대로 유지한다.
pub fn carbon_equivalent(comp: &NormalizedComposition) -> f64 {
    comp.get(ElementSymbol::C)
        + comp.get(ElementSymbol::Mn) / 6.0
        + (comp.get(ElementSymbol::Cr) + comp.get(ElementSymbol::Mo) + comp.get(ElementSymbol::V))
            / 5.0
        + comp.get(ElementSymbol::Ni) / 15.0
}

/// 경화능(열처리 성공 가능성) 등급.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardenabilityClass {
    /// 이 등급의 CE 상한(미포함). 마지막 등급은 무한대.
    #[serde(skip)]
    pub ce_upper_bound: f64,
    pub success_probability: f64,
    pub risk: &'static str,
    pub label: &'static str,
}

/// CE 구간표. 순서대로 검사하며 성공 확률은 단조 감소한다.
pub const HARDENABILITY_BINS: &[HardenabilityClass] = &[
    HardenabilityClass {
        ce_upper_bound: 0.25,
        success_probability: 0.95,
        risk: "Low",
        label: "Excellent",
    },
    HardenabilityClass {
        ce_upper_bound: 0.35,
        success_probability: 0.85,
        risk: "Low-Medium",
        label: "Good",
    },
    HardenabilityClass {
        ce_upper_bound: 0.45,
        success_probability: 0.70,
        risk: "Medium",
        label: "Fair",
    },
    HardenabilityClass {
        ce_upper_bound: 0.60,
        success_probability: 0.50,
        risk: "High",
        label: "Poor",
    },
    HardenabilityClass {
        ce_upper_bound: f64::INFINITY,
        success_probability: 0.30,
        risk: "Very High",
        label: "Very Poor",
    },
];

/// CE를 등급표에 대응시킨다. NaN 등 어느 구간에도 속하지 않으면 마지막(최악) 등급.
pub fn classify_hardenability(ce: f64) -> &'static HardenabilityClass {
    HARDENABILITY_BINS
        .iter()
        .find(|bin| ce < bin.ce_upper_bound)
        .unwrap_or(&HARDENABILITY_BINS[HARDENABILITY_BINS.len() - 1])
}

/// 상 안정성 경고 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseWarning {
    SigmaPhaseRisk,
    FerriteLoop,
    GammaLoop,
}

impl PhaseWarning {
    pub fn message(self) -> &'static str {
        match self {
            PhaseWarning::SigmaPhaseRisk => {
                "Sigma phase risk: Cr > 17%, Ni < 10% and Mo > 2% promote brittle sigma precipitation"
            }
            PhaseWarning::FerriteLoop => {
                "Ferrite loop: Cr > 25% closes the gamma loop, the alloy stays ferritic"
            }
            PhaseWarning::GammaLoop => {
                "Gamma loop: Ni > 30% stabilizes austenite down to room temperature"
            }
        }
    }
}

struct PhaseRule {
    warning: PhaseWarning,
    fires: fn(&NormalizedComposition) -> bool,
}

fn sigma_phase_risk(c: &NormalizedComposition) -> bool {
    c.get(ElementSymbol::Cr) > 17.0
        && c.get(ElementSymbol::Ni) < 10.0
        && c.get(ElementSymbol::Mo) > 2.0
}

fn ferrite_loop(c: &NormalizedComposition) -> bool {
    c.get(ElementSymbol::Cr) > 25.0
}

fn gamma_loop(c: &NormalizedComposition) -> bool {
    c.get(ElementSymbol::Ni) > 30.0
}

const PHASE_RULES: &[PhaseRule] = &[
    PhaseRule {
        warning: PhaseWarning::SigmaPhaseRisk,
        fires: sigma_phase_risk,
    },
    PhaseRule {
        warning: PhaseWarning::FerriteLoop,
        fires: ferrite_loop,
    },
    PhaseRule {
        warning: PhaseWarning::GammaLoop,
        fires: gamma_loop,
    },
];

pub const PHASES_BASE: &str = "FCC + BCC";
pub const PHASES_WITH_SIGMA: &str = "FCC + BCC + Sigma";

/// 상 안정성 점검 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseStability {
    pub phases: &'static str,
    pub warnings: Vec<PhaseWarning>,
    pub stable: bool,
}

impl PhaseStability {
    pub fn has(&self, warning: PhaseWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

/// 규칙표의 모든 규칙을 독립적으로 평가한다.
pub fn check_phase_stability(comp: &NormalizedComposition) -> PhaseStability {
    let warnings: Vec<PhaseWarning> = PHASE_RULES
        .iter()
        .filter(|rule| (rule.fires)(comp))
        .map(|rule| rule.warning)
        .collect();
    let phases = if warnings.contains(&PhaseWarning::SigmaPhaseRisk) {
        PHASES_WITH_SIGMA
    } else {
        PHASES_BASE
    };
    PhaseStability {
        phases,
        stable: warnings.is_empty(),
        warnings,
    }
}

/// 가열 시 임계 변태 온도 [°C, 정수 반올림].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalTemperatures {
    pub ac1_c: f64,
    pub ac3_c: f64,
}

/// Andrews 계열 회귀식으로 Ac1/Ac3를 계산한다.
///
/// - Ac1 = 723 − 10.7·Mn − 16.9·Ni + 29.1·Si + 16.9·Cr
/// - Ac3 = 910 − 203·√C − 15.2·Ni + 44.7·Si + 104·V + 31.5·Mo
pub fn critical_temperatures(comp: &NormalizedComposition) -> CriticalTemperatures {
    let c = comp.get(ElementSymbol::C);
    let mn = comp.get(ElementSymbol::Mn);
    let ni = comp.get(ElementSymbol::Ni);
    let cr = comp.get(ElementSymbol::Cr);
    let mo = comp.get(ElementSymbol::Mo);
    let si = comp.get(ElementSymbol::Si);
    let v = comp.get(ElementSymbol::V);

    let ac1 = 723.0 - 10.7 * mn - 16.9 * ni + 29.1 * si + 16.9 * cr;
    let ac3 = 910.0 - 203.0 * c.sqrt() - 15.2 * ni + 44.7 * si + 104.0 * v + 31.5 * mo;
    CriticalTemperatures {
        ac1_c: ac1.round(),
        ac3_c: ac3.round(),
    }
}
