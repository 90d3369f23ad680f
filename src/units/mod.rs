//! 표시용 단위 정의 및 변환 모듈 모음. 내부 계산은 항상 °C, MPa, g/cm³ 기준이다.

pub mod density;
pub mod stress;
pub mod temperature;

pub use density::{convert_density, DensityUnit};
pub use stress::{convert_stress, StressUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
