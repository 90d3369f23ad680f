//! 프로세스 전체에서 공유하는 불변 참조표 묶음.
//!
//! 한 번 만들어 각 모델 함수에 `&ReferenceTables`로 넘긴다.

use crate::alloy::{ElementData, ElementSymbol, ELEMENTS};
use crate::process::{QuenchMedium, QuenchProfile, QUENCH_PROFILES};

#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    elements: &'static [ElementData],
    quench_profiles: &'static [QuenchProfile],
}

impl ReferenceTables {
    /// 기본 원소표와 냉각 매체표.
    pub const fn standard() -> Self {
        Self {
            elements: ELEMENTS,
            quench_profiles: QUENCH_PROFILES,
        }
    }

    /// 원소표만 교체한 참조표. 표에 없는 원소는 물성 계산에서 제외된다.
    pub const fn with_elements(elements: &'static [ElementData]) -> Self {
        Self {
            elements,
            quench_profiles: QUENCH_PROFILES,
        }
    }

    pub fn elements(&self) -> &'static [ElementData] {
        self.elements
    }

    pub fn element(&self, symbol: ElementSymbol) -> Option<&'static ElementData> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }

    /// 매체의 담금질 조건. 표에 없으면 Oil 조건을 쓰고, 그것도 없으면 내장 Oil 값을 쓴다.
    pub fn quench_profile(&self, medium: QuenchMedium) -> QuenchProfile {
        self.find_profile(medium)
            .or_else(|| self.find_profile(QuenchMedium::DEFAULT))
            .unwrap_or(QuenchProfile {
                medium: QuenchMedium::Oil,
                quench_temperature_c: 80.0,
                cooling_rate_c_per_s: 80.0,
            })
    }

    fn find_profile(&self, medium: QuenchMedium) -> Option<QuenchProfile> {
        self.quench_profiles
            .iter()
            .find(|p| p.medium == medium)
            .copied()
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
