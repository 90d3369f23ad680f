use serde::Serialize;

use crate::alloy::{ElementSymbol, NormalizedComposition};
use crate::process::ProcessParameters;

/// Hall-Petch 계수 k [MPa·µm^0.5]
const HALL_PETCH_K: f64 = 21.0;
/// 결정립 미세화 계수 하한
const MIN_REFINEMENT_FACTOR: f64 = 0.3;
const MAX_HRC: f64 = 65.0;

/// 격자 마찰응력 σ₀ [MPa]. 고용강화 기여의 선형 합.
///
/// 결과는 MPa, Hall-Petch 항의 d는 µm 기준이다. 기저 절편(순철 마찰응력)은 의도적으로 두지 않으므로
/// 순철은 Hall-Petch 항만 남는다.
pub fn lattice_friction_stress(comp: &NormalizedComposition) -> f64 {
    32.0 * comp.get(ElementSymbol::Mn)
        + 84.0 * comp.get(ElementSymbol::Si)
        + 12.0 * comp.get(ElementSymbol::Ni)
        + 5.0 * comp.get(ElementSymbol::Cr)
        + 11.0 * comp.get(ElementSymbol::Mo)
        + 500.0 * comp.get(ElementSymbol::C)
}

/// V, Ti 탄화물에 의한 결정립 미세화 계수. 0.3 미만으로 내려가지 않는다.
pub fn grain_refinement_factor(comp: &NormalizedComposition) -> f64 {
    let factor = 1.0 - 0.05 * comp.get(ElementSymbol::V) - 0.03 * comp.get(ElementSymbol::Ti);
    factor.max(MIN_REFINEMENT_FACTOR)
}

/// 유효 결정립 크기 [µm] = 입력 결정립 × 미세화 계수.
pub fn effective_grain_size(comp: &NormalizedComposition, process: &ProcessParameters) -> f64 {
    process.grain_size() * grain_refinement_factor(comp)
}

/// Hall-Petch 항복강도 [MPa, 정수 반올림]: σ₀ + k·d^(−1/2)
pub fn yield_strength(sigma0: f64, effective_grain_size_um: f64) -> f64 {
    (sigma0 + HALL_PETCH_K * effective_grain_size_um.powf(-0.5)).round()
}

/// 경도 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hardness {
    pub hrc: f64,
    pub hv: f64,
}

/// HRC 환산 경도 = 20 + 60·CE + 20·f (상한 65, 반올림). HV는 HRC 선형 환산.
pub fn hardness(carbon_equivalent: f64, martensite_fraction: f64) -> Hardness {
    let hrc = (20.0 + 60.0 * carbon_equivalent + 20.0 * martensite_fraction)
        .min(MAX_HRC)
        .round();
    Hardness {
        hrc,
        hv: vickers_from_rockwell_c(hrc),
    }
}

/// HRC → HV 선형 근사 (HV = 11·HRC + 70).
pub fn vickers_from_rockwell_c(hrc: f64) -> f64 {
    (11.0 * hrc + 70.0).round()
}

/// 인장강도 [MPa] = YS × (1.25 + 0.15·f), 반올림.
pub fn ultimate_tensile_strength(yield_strength_mpa: f64, martensite_fraction: f64) -> f64 {
    (yield_strength_mpa * (1.25 + 0.15 * martensite_fraction)).round()
}

/// 기계적 성질 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MechanicalProperties {
    pub sigma0_mpa: f64,
    pub grain_refinement_factor: f64,
    pub effective_grain_size_um: f64,
    pub yield_strength_mpa: f64,
    pub hardness: Hardness,
    pub uts_mpa: f64,
}

pub fn evaluate_mechanical(
    comp: &NormalizedComposition,
    process: &ProcessParameters,
    carbon_equivalent: f64,
    martensite_fraction: f64,
) -> MechanicalProperties {
    let sigma0 = lattice_friction_stress(comp);
    let factor = grain_refinement_factor(comp);
    let d_eff = process.grain_size() * factor;
    let ys = yield_strength(sigma0, d_eff);
    MechanicalProperties {
        sigma0_mpa: sigma0,
        grain_refinement_factor: factor,
        effective_grain_size_um: d_eff,
        yield_strength_mpa: ys,
        hardness: hardness(carbon_equivalent, martensite_fraction),
        uts_mpa: ultimate_tensile_strength(ys, martensite_fraction),
    }
}
