//! 모든 모델을 하나의 불변 결과(PropertySnapshot)로 묶고, 기준 합금과 비교한다.

use serde::Serialize;

use crate::alloy::{normalize, Composition, DomainError, ElementSymbol, NormalizedComposition};
use crate::metallurgy::narrative::{self, NarrativeContext};
use crate::metallurgy::{
    carbon_equivalent, check_phase_stability, classify_hardenability, cooling_path,
    critical_temperatures, evaluate_mechanical, evaluate_physical, martensite_fraction,
    merge_for_overlay, ttt_curve, CriticalTemperatures, CurvePoint, HardenabilityClass,
    MartensiteTransformation, MechanicalProperties, OverlayPoint, PhaseStability,
    PhysicalProperties, TttCurve,
};
use crate::process::{ProcessParameters, QuenchMedium};
use crate::tables::ReferenceTables;

/// 한 번의 계산 결과. 입력(정규화 조성 + 공정 조건)만의 순수 함수다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySnapshot {
    pub composition: NormalizedComposition,
    pub process: ProcessParameters,
    /// 비철 원소 합이 100을 넘어 합계가 100% 미만인 상태
    pub balance_clamped: bool,
    pub martensite: MartensiteTransformation,
    pub carbon_equivalent: f64,
    pub hardenability: HardenabilityClass,
    pub phase_stability: PhaseStability,
    pub critical: CriticalTemperatures,
    pub mechanical: MechanicalProperties,
    pub physical: PhysicalProperties,
    pub ttt: TttCurve,
    pub cooling_path: Vec<CurvePoint>,
    pub overlay: Vec<OverlayPoint>,
    pub narrative: Vec<String>,
}

impl PropertySnapshot {
    pub fn ms_c(&self) -> f64 {
        self.martensite.ms_c
    }

    pub fn martensite_fraction(&self) -> f64 {
        self.martensite.fraction
    }

    pub fn yield_strength_mpa(&self) -> f64 {
        self.mechanical.yield_strength_mpa
    }

    pub fn uts_mpa(&self) -> f64 {
        self.mechanical.uts_mpa
    }

    pub fn hrc(&self) -> f64 {
        self.mechanical.hardness.hrc
    }

    pub fn hv(&self) -> f64 {
        self.mechanical.hardness.hv
    }

    pub fn density_g_cm3(&self) -> f64 {
        self.physical.density_g_cm3
    }

    pub fn cost_per_kg(&self) -> f64 {
        self.physical.cost_per_kg
    }

    /// 비강도 = UTS / 밀도 [MPa·cm³/g]
    pub fn specific_strength(&self) -> f64 {
        self.mechanical.uts_mpa / self.physical.density_g_cm3
    }

    /// 목표 항복강도 충족 여부 (참고용).
    pub fn meets_target_yield(&self) -> bool {
        self.mechanical.yield_strength_mpa >= self.process.target_yield_mpa
    }
}

/// 조성을 정규화한 뒤 전체 모델 파이프라인을 실행한다.
pub fn evaluate(
    composition: &Composition,
    process: &ProcessParameters,
    tables: &ReferenceTables,
) -> Result<PropertySnapshot, DomainError> {
    evaluate_normalized(&normalize(composition), process, tables)
}

/// 이미 정규화된 조성으로 파이프라인을 실행한다.
pub fn evaluate_normalized(
    comp: &NormalizedComposition,
    process: &ProcessParameters,
    tables: &ReferenceTables,
) -> Result<PropertySnapshot, DomainError> {
    let physical = evaluate_physical(comp, tables)?;

    let martensite = martensite_fraction(comp, process.quench, tables);
    let ce = carbon_equivalent(comp);
    let hardenability = *classify_hardenability(ce);
    let phase_stability = check_phase_stability(comp);
    let critical = critical_temperatures(comp);
    let mechanical = evaluate_mechanical(comp, process, ce, martensite.fraction);

    let ttt = ttt_curve(ce);
    let cooling = cooling_path(process.quench, tables);
    let overlay = merge_for_overlay(&ttt, &cooling);

    let narrative = narrative::generate(&NarrativeContext {
        composition: comp,
        yield_strength_mpa: mechanical.yield_strength_mpa,
        martensite_fraction: martensite.fraction,
    });

    log::debug!(
        "평가 완료: Ms={:.1}°C f={:.3} CE={:.3} YS={} MPa",
        martensite.ms_c,
        martensite.fraction,
        ce,
        mechanical.yield_strength_mpa
    );

    Ok(PropertySnapshot {
        composition: *comp,
        process: *process,
        balance_clamped: comp.balance_clamped(),
        martensite,
        carbon_equivalent: ce,
        hardenability,
        phase_stability,
        critical,
        mechanical,
        physical,
        ttt,
        cooling_path: cooling,
        overlay,
        narrative,
    })
}

pub const REFERENCE_NAME: &str = "AISI 4140";

/// 비교 기준 합금(AISI 4140, 유랭, 20 µm).
pub fn reference_design() -> (Composition, ProcessParameters) {
    let composition = Composition::from_pairs([
        (ElementSymbol::C, 0.40),
        (ElementSymbol::Mn, 0.85),
        (ElementSymbol::Si, 0.25),
        (ElementSymbol::Cr, 0.95),
        (ElementSymbol::Mo, 0.20),
    ]);
    let process = ProcessParameters::new(QuenchMedium::Oil, 20.0, 655.0);
    (composition, process)
}

/// 기준 합금 대비 차이 (현재 − 기준).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceComparison {
    pub reference_name: &'static str,
    pub yield_strength_delta_mpa: f64,
    pub uts_delta_mpa: f64,
    pub hrc_delta: f64,
    pub hv_delta: f64,
    pub density_delta_g_cm3: f64,
    pub specific_strength: f64,
    pub reference_specific_strength: f64,
}

pub fn compare(current: &PropertySnapshot, reference: &PropertySnapshot) -> ReferenceComparison {
    ReferenceComparison {
        reference_name: REFERENCE_NAME,
        yield_strength_delta_mpa: current.yield_strength_mpa() - reference.yield_strength_mpa(),
        uts_delta_mpa: current.uts_mpa() - reference.uts_mpa(),
        hrc_delta: current.hrc() - reference.hrc(),
        hv_delta: current.hv() - reference.hv(),
        density_delta_g_cm3: current.density_g_cm3() - reference.density_g_cm3(),
        specific_strength: current.specific_strength(),
        reference_specific_strength: reference.specific_strength(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EvaluationKey {
    composition: [u64; ElementSymbol::COUNT],
    quench: QuenchMedium,
    grain_size: u64,
}

impl EvaluationKey {
    fn new(comp: &NormalizedComposition, process: &ProcessParameters) -> Self {
        Self {
            composition: comp.key_bits(),
            quench: process.quench,
            grain_size: process.grain_size().to_bits(),
        }
    }
}

/// 참조표와 기준 스냅샷을 들고 있는 계산기.
///
/// 슬라이더 연속 입력처럼 같은 입력이 반복되는 경우를 위해 직전 결과 하나를 기억한다.
#[derive(Debug, Clone)]
pub struct Engine {
    tables: ReferenceTables,
    reference: PropertySnapshot,
    last: Option<(EvaluationKey, PropertySnapshot)>,
}

impl Engine {
    pub fn new(tables: ReferenceTables) -> Result<Self, DomainError> {
        let (composition, process) = reference_design();
        let reference = evaluate(&composition, &process, &tables)?;
        log::info!(
            "기준 합금 {REFERENCE_NAME}: YS={} MPa, UTS={} MPa",
            reference.yield_strength_mpa(),
            reference.uts_mpa()
        );
        Ok(Self {
            tables,
            reference,
            last: None,
        })
    }

    pub fn standard() -> Result<Self, DomainError> {
        Self::new(ReferenceTables::standard())
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn reference(&self) -> &PropertySnapshot {
        &self.reference
    }

    pub fn evaluate(
        &mut self,
        composition: &Composition,
        process: &ProcessParameters,
    ) -> Result<PropertySnapshot, DomainError> {
        let comp = normalize(composition);
        let key = EvaluationKey::new(&comp, process);
        if let Some((cached_key, cached)) = &self.last {
            if *cached_key == key {
                log::trace!("캐시된 스냅샷을 재사용합니다.");
                let mut snapshot = cached.clone();
                snapshot.process = *process;
                return Ok(snapshot);
            }
        }
        let snapshot = evaluate_normalized(&comp, process, &self.tables)?;
        self.last = Some((key, snapshot.clone()));
        Ok(snapshot)
    }

    pub fn compare(&self, snapshot: &PropertySnapshot) -> ReferenceComparison {
        compare(snapshot, &self.reference)
    }
}
