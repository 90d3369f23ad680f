use serde::{Deserialize, Serialize};

/// 응력(강도) 단위. 내부 기준은 MPa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    MegaPascal,
    Ksi,
}

const MPA_PER_KSI: f64 = 6.894_757;

impl StressUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            StressUnit::MegaPascal => "MPa",
            StressUnit::Ksi => "ksi",
        }
    }
}

fn to_mpa(value: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::MegaPascal => value,
        StressUnit::Ksi => value * MPA_PER_KSI,
    }
}

fn from_mpa(value: f64, unit: StressUnit) -> f64 {
    match unit {
        StressUnit::MegaPascal => value,
        StressUnit::Ksi => value / MPA_PER_KSI,
    }
}

/// 응력을 변환한다.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    from_mpa(to_mpa(value, from), to)
}
