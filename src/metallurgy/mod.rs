//! 금속학 경험 모델 모음.

pub mod curves;
pub mod mechanical;
pub mod narrative;
pub mod phase_transformation;
pub mod physical;

pub use curves::*;
pub use mechanical::*;
pub use phase_transformation::*;
pub use physical::*;
