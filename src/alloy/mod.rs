//! 합금 원소 참조표와 조성 정규화.

pub mod composition;
pub mod element;

pub use composition::{normalize, Composition, NormalizedComposition};
pub use element::{ElementData, ElementSymbol, ELEMENTS};

/// 계산 도메인 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 참조표와 일치하는 양의 함량 원소가 없어 혼합법칙을 계산할 수 없음
    EmptyComposition,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyComposition => {
                write!(f, "empty-composition: 참조표와 일치하는 원소 함량이 없습니다")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// 조성 입력(CLI/설정 파일) 해석 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// 알 수 없는 원소 기호
    UnknownElement(String),
    /// `원소=값` 형식이 아님
    InvalidAssignment(String),
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionError::UnknownElement(s) => write!(f, "알 수 없는 원소: {s}"),
            CompositionError::InvalidAssignment(s) => {
                write!(f, "잘못된 조성 입력 (예: Cr=18.0): {s}")
            }
        }
    }
}

impl std::error::Error for CompositionError {}
