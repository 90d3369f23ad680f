use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 g/cm³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    GramPerCm3,
    PoundPerIn3,
}

impl DensityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::GramPerCm3 => "g/cm³",
            DensityUnit::PoundPerIn3 => "lb/in³",
        }
    }
}

fn to_g_cm3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::GramPerCm3 => value,
        DensityUnit::PoundPerIn3 => value * 27.679_905,
    }
}

fn from_g_cm3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::GramPerCm3 => value,
        DensityUnit::PoundPerIn3 => value / 27.679_905,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    from_g_cm3(to_g_cm3(value, from), to)
}
