//! 혼합법칙 기반 물리적 성질(밀도, 단가)과 지속가능성 점수.

use serde::Serialize;

use crate::alloy::{DomainError, ElementData, NormalizedComposition};
use crate::tables::ReferenceTables;

/// 참조표에 있는 원소 중 함량이 양수인 (wt%, 참조값) 쌍.
fn tabulated<'a>(
    comp: &'a NormalizedComposition,
    tables: &'a ReferenceTables,
) -> impl Iterator<Item = (f64, &'static ElementData)> + 'a {
    comp.iter()
        .filter(|(_, wt)| *wt > 0.0)
        .filter_map(|(el, wt)| tables.element(el).map(|data| (wt, data)))
}

/// 조화평균 혼합법칙 밀도 [g/cm³]: Σwt / Σ(wt/ρ).
///
/// 기여 원소가 하나뿐이면 그 원소의 참조 밀도를 그대로 돌려준다(나눗셈 왕복 오차 없음).
pub fn density(
    comp: &NormalizedComposition,
    tables: &ReferenceTables,
) -> Result<f64, DomainError> {
    let mut mass = 0.0;
    let mut volume = 0.0;
    let mut contributors = 0usize;
    let mut single = 0.0;
    for (wt, data) in tabulated(comp, tables) {
        if data.density_g_cm3 <= 0.0 {
            continue;
        }
        mass += wt;
        volume += wt / data.density_g_cm3;
        contributors += 1;
        single = data.density_g_cm3;
    }
    if mass <= 0.0 || volume <= 0.0 {
        return Err(DomainError::EmptyComposition);
    }
    if contributors == 1 {
        return Ok(single);
    }
    Ok(mass / volume)
}

/// 산술평균 혼합법칙 단가 [USD/kg]: Σ(wt·cost) / Σwt.
pub fn cost(comp: &NormalizedComposition, tables: &ReferenceTables) -> Result<f64, DomainError> {
    let (weighted, mass) = tabulated(comp, tables)
        .fold((0.0, 0.0), |(acc, m), (wt, data)| (acc + wt * data.cost_per_kg, m + wt));
    if mass <= 0.0 {
        return Err(DomainError::EmptyComposition);
    }
    Ok(weighted / mass)
}

/// 100점에서 희소/고탄소발자국 원소(Ni, Mo, V, Ti) 함량만큼 감점한다. 0~100, 반올림.
pub fn sustainability_score(comp: &NormalizedComposition, tables: &ReferenceTables) -> f64 {
    let penalty: f64 = comp
        .iter()
        .filter_map(|(el, wt)| tables.element(el).map(|d| wt * d.sustainability_penalty))
        .sum();
    (100.0 - penalty).clamp(0.0, 100.0).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalProperties {
    pub density_g_cm3: f64,
    pub cost_per_kg: f64,
    pub sustainability_score: f64,
}

pub fn evaluate_physical(
    comp: &NormalizedComposition,
    tables: &ReferenceTables,
) -> Result<PhysicalProperties, DomainError> {
    Ok(PhysicalProperties {
        density_g_cm3: density(comp, tables)?,
        cost_per_kg: cost(comp, tables)?,
        sustainability_score: sustainability_score(comp, tables),
    })
}
