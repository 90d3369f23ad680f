use serde::ser::{Serialize, SerializeMap, Serializer};

use super::element::ElementSymbol;
use super::CompositionError;

/// 사용자가 입력한 원소 조성 [wt%].
///
/// Fe를 제외한 원소만 직접 설정할 수 있고 값은 원소별 상한으로 클램프된다.
/// Fe는 [`normalize`]에서 잔부로 계산된다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Composition {
    weights: [f64; ElementSymbol::COUNT],
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// (원소, wt%) 목록으로 조성을 만든다. 같은 원소가 반복되면 마지막 값이 남는다.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ElementSymbol, f64)>,
    {
        let mut comp = Self::new();
        for (el, wt) in pairs {
            comp.set(el, wt);
        }
        comp
    }

    /// 원소 함량을 설정한다. 음수/상한 초과는 클램프, 유한하지 않은 값은 0으로 본다.
    /// Fe는 잔부로만 결정되므로 무시한다.
    pub fn set(&mut self, element: ElementSymbol, weight_percent: f64) {
        if element == ElementSymbol::Fe {
            log::debug!("Fe는 잔부로 계산되므로 입력값 {weight_percent}을(를) 무시합니다.");
            return;
        }
        let wt = if weight_percent.is_finite() {
            weight_percent.clamp(0.0, element.max_weight_percent())
        } else {
            0.0
        };
        self.weights[element.index()] = wt;
    }

    pub fn with(mut self, element: ElementSymbol, weight_percent: f64) -> Self {
        self.set(element, weight_percent);
        self
    }

    pub fn get(&self, element: ElementSymbol) -> f64 {
        self.weights[element.index()]
    }

    /// Fe를 제외한 원소 함량 합.
    pub fn alloying_sum(&self) -> f64 {
        ElementSymbol::ALLOYING.iter().map(|el| self.get(*el)).sum()
    }

    /// `Cr=18.5` 형식의 문자열을 (원소, wt%) 쌍으로 해석한다.
    pub fn parse_assignment(s: &str) -> Result<(ElementSymbol, f64), CompositionError> {
        let (sym, value) = s
            .split_once('=')
            .ok_or_else(|| CompositionError::InvalidAssignment(s.to_string()))?;
        let element = ElementSymbol::parse(sym)
            .ok_or_else(|| CompositionError::UnknownElement(sym.trim().to_string()))?;
        let wt = value
            .trim()
            .parse::<f64>()
            .map_err(|_| CompositionError::InvalidAssignment(s.to_string()))?;
        Ok((element, wt))
    }

    pub fn normalize(&self) -> NormalizedComposition {
        normalize(self)
    }
}

/// Fe 잔부가 확정된 조성. 하위 모델은 모두 이 타입만 받는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedComposition {
    weights: [f64; ElementSymbol::COUNT],
    balance_clamped: bool,
}

impl NormalizedComposition {
    pub fn get(&self, element: ElementSymbol) -> f64 {
        self.weights[element.index()]
    }

    pub fn fe(&self) -> f64 {
        self.get(ElementSymbol::Fe)
    }

    /// 비철 원소 합이 100을 넘어 Fe가 0으로 잘린 경우 true (합계 100% 미만 상태).
    pub fn balance_clamped(&self) -> bool {
        self.balance_clamped
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// 표 순서대로 (원소, wt%)를 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (ElementSymbol, f64)> + '_ {
        ElementSymbol::ALL.iter().map(|el| (*el, self.get(*el)))
    }

    /// 메모이제이션 키로 쓰기 위한 비트 패턴.
    pub fn key_bits(&self) -> [u64; ElementSymbol::COUNT] {
        let mut bits = [0u64; ElementSymbol::COUNT];
        for (slot, wt) in bits.iter_mut().zip(self.weights.iter()) {
            *slot = wt.to_bits();
        }
        bits
    }

    pub fn to_composition(&self) -> Composition {
        Composition::from_pairs(self.iter())
    }
}

impl Serialize for NormalizedComposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ElementSymbol::COUNT))?;
        for (el, wt) in self.iter() {
            map.serialize_entry(el.symbol(), &wt)?;
        }
        map.end()
    }
}

/// Fe = max(0, 100 − Σ 비철 원소) 로 잔부를 계산한다.
pub fn normalize(composition: &Composition) -> NormalizedComposition {
    let alloying = composition.alloying_sum();
    let mut weights = composition.weights;
    let fe = 100.0 - alloying;
    let balance_clamped = fe < 0.0;
    weights[ElementSymbol::Fe.index()] = fe.max(0.0);
    if balance_clamped {
        log::warn!(
            "비철 원소 합계 {alloying:.3} wt%가 100을 넘어 Fe를 0으로 제한합니다."
        );
    }
    NormalizedComposition {
        weights,
        balance_clamped,
    }
}
