use serde::{Deserialize, Serialize};

/// 계산에서 다루는 합금 원소를 정의한다. 선언 순서가 곧 표/보고서 출력 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElementSymbol {
    Fe,
    Ni,
    Cr,
    Mo,
    C,
    Mn,
    Si,
    Ti,
    V,
}

impl ElementSymbol {
    pub const COUNT: usize = 9;

    pub const ALL: [ElementSymbol; ElementSymbol::COUNT] = [
        ElementSymbol::Fe,
        ElementSymbol::Ni,
        ElementSymbol::Cr,
        ElementSymbol::Mo,
        ElementSymbol::C,
        ElementSymbol::Mn,
        ElementSymbol::Si,
        ElementSymbol::Ti,
        ElementSymbol::V,
    ];

    /// Fe를 제외한 사용자 입력 원소들.
    pub const ALLOYING: [ElementSymbol; ElementSymbol::COUNT - 1] = [
        ElementSymbol::Ni,
        ElementSymbol::Cr,
        ElementSymbol::Mo,
        ElementSymbol::C,
        ElementSymbol::Mn,
        ElementSymbol::Si,
        ElementSymbol::Ti,
        ElementSymbol::V,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ElementSymbol::Fe => "Fe",
            ElementSymbol::Ni => "Ni",
            ElementSymbol::Cr => "Cr",
            ElementSymbol::Mo => "Mo",
            ElementSymbol::C => "C",
            ElementSymbol::Mn => "Mn",
            ElementSymbol::Si => "Si",
            ElementSymbol::Ti => "Ti",
            ElementSymbol::V => "V",
        }
    }

    /// 원소 기호 문자열을 enum으로 변환한다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|el| el.symbol().eq_ignore_ascii_case(s))
    }

    /// 사용자 입력 상한 [wt%]. Fe는 잔부로 계산되므로 100을 돌려준다.
    pub fn max_weight_percent(self) -> f64 {
        match self {
            ElementSymbol::Fe => 100.0,
            ElementSymbol::Ni => 40.0,
            ElementSymbol::Cr => 30.0,
            ElementSymbol::Mo => 10.0,
            ElementSymbol::C => 2.0,
            ElementSymbol::Mn => 15.0,
            ElementSymbol::Si => 5.0,
            ElementSymbol::Ti => 5.0,
            ElementSymbol::V => 5.0,
        }
    }
}

impl std::fmt::Display for ElementSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 원소별 참조 물성. 값은 참고용 시세/문헌치다.
#[derive(Debug, Clone, Copy)]
pub struct ElementData {
    pub symbol: ElementSymbol,
    /// 단가 [USD/kg]
    pub cost_per_kg: f64,
    /// 밀도 [g/cm³]
    pub density_g_cm3: f64,
    /// 지속가능성 점수 감점 [점/wt%]
    pub sustainability_penalty: f64,
}

impl ElementData {
    pub const fn new(
        symbol: ElementSymbol,
        cost_per_kg: f64,
        density_g_cm3: f64,
        sustainability_penalty: f64,
    ) -> Self {
        Self {
            symbol,
            cost_per_kg,
            density_g_cm3,
            sustainability_penalty,
        }
    }
}

const fn ed(symbol: ElementSymbol, cost: f64, density: f64, penalty: f64) -> ElementData {
    ElementData::new(symbol, cost, density, penalty)
}

/// 표준 원소 참조표.
pub const ELEMENTS: &[ElementData] = &[
    ed(ElementSymbol::Fe, 0.45, 7.874, 0.0),
    ed(ElementSymbol::Ni, 16.0, 8.908, 1.2),
    ed(ElementSymbol::Cr, 9.5, 7.19, 0.0),
    ed(ElementSymbol::Mo, 38.0, 10.28, 2.5),
    ed(ElementSymbol::C, 0.25, 2.267, 0.0),
    ed(ElementSymbol::Mn, 2.1, 7.21, 0.0),
    ed(ElementSymbol::Si, 2.4, 2.329, 0.0),
    ed(ElementSymbol::Ti, 11.0, 4.506, 1.5),
    ed(ElementSymbol::V, 32.0, 6.11, 3.0),
];
