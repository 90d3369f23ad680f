//! 규칙 기반 해설 문장 생성.
//!
//! 규칙은 선언 순서대로 모두 평가하며(조기 종료 없음) 출력 순서도 선언 순서를 따른다.
//! 이 순서는 보고서 줄 순서로 그대로 노출된다.

use crate::alloy::{ElementSymbol, NormalizedComposition};

/// 규칙 평가에 필요한 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub composition: &'a NormalizedComposition,
    pub yield_strength_mpa: f64,
    pub martensite_fraction: f64,
}

impl NarrativeContext<'_> {
    fn wt(&self, el: ElementSymbol) -> f64 {
        self.composition.get(el)
    }
}

struct NarrativeRule {
    applies: fn(&NarrativeContext) -> bool,
    render: fn(&NarrativeContext) -> String,
}

pub const FALLBACK_INSIGHT: &str =
    "No dominant alloying effect detected; properties follow plain carbon steel behavior.";

const RULES: &[NarrativeRule] = &[
    // 바나듐
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::V) > 0.1,
        render: |c| {
            format!(
                "Vanadium ({:.2}%) refines the grain through fine carbide precipitation, raising yield strength.",
                c.wt(ElementSymbol::V)
            )
        },
    },
    // 티타늄
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::Ti) > 0.1,
        render: |c| {
            format!(
                "Titanium ({:.2}%) binds carbon and nitrogen as stable carbides, limiting grain growth.",
                c.wt(ElementSymbol::Ti)
            )
        },
    },
    // 몰리브덴
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::Mo) > 1.0,
        render: |c| {
            format!(
                "Molybdenum ({:.2}%) improves hardenability and resistance to temper embrittlement.",
                c.wt(ElementSymbol::Mo)
            )
        },
    },
    // 니켈
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::Ni) > 5.0,
        render: |c| {
            format!(
                "Nickel ({:.2}%) stabilizes austenite and improves low-temperature toughness.",
                c.wt(ElementSymbol::Ni)
            )
        },
    },
    // 크롬
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::Cr) > 12.0,
        render: |c| {
            format!(
                "Chromium ({:.2}%) exceeds the passivation threshold, giving stainless corrosion resistance.",
                c.wt(ElementSymbol::Cr)
            )
        },
    },
    // 저탄소 + 고강도
    NarrativeRule {
        applies: |c| c.wt(ElementSymbol::C) < 0.1 && c.yield_strength_mpa > 400.0,
        render: |c| {
            format!(
                "Low carbon ({:.2}%) combined with {:.0} MPa yield strength keeps weldability at high strength.",
                c.wt(ElementSymbol::C),
                c.yield_strength_mpa
            )
        },
    },
    // 고마르텐사이트 + 고탄소
    NarrativeRule {
        applies: |c| c.martensite_fraction > 0.8 && c.wt(ElementSymbol::C) > 0.3,
        render: |c| {
            format!(
                "High martensite fraction ({:.0}%) with {:.2}% carbon risks brittleness; temper after quenching.",
                c.martensite_fraction * 100.0,
                c.wt(ElementSymbol::C)
            )
        },
    },
];

/// 적용되는 규칙의 문장을 순서대로 모은다. 하나도 없으면 기본 문장 하나.
pub fn generate(ctx: &NarrativeContext) -> Vec<String> {
    let lines: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.render)(ctx))
        .collect();
    if lines.is_empty() {
        vec![FALLBACK_INSIGHT.to_string()]
    } else {
        lines
    }
}
