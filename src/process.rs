use serde::{Deserialize, Serialize};

/// 냉각(담금질) 매체를 정의한다.
///
/// 문자열에서 변환할 때 알 수 없는 이름은 [`QuenchMedium::DEFAULT`](Oil)로 폴백한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuenchMedium {
    Water,
    Oil,
    Air,
}

impl QuenchMedium {
    pub const DEFAULT: QuenchMedium = QuenchMedium::Oil;

    pub const ALL: [QuenchMedium; 3] = [QuenchMedium::Water, QuenchMedium::Oil, QuenchMedium::Air];

    /// 이름(대소문자 무시)으로 매체를 찾는다. 모르는 이름이면 Oil을 돌려준다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "water" | "w" => QuenchMedium::Water,
            "oil" | "o" => QuenchMedium::Oil,
            "air" | "a" => QuenchMedium::Air,
            other => {
                log::warn!("알 수 없는 냉각 매체 '{other}', Oil 조건으로 계산합니다.");
                QuenchMedium::DEFAULT
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuenchMedium::Water => "water",
            QuenchMedium::Oil => "oil",
            QuenchMedium::Air => "air",
        }
    }
}

impl Default for QuenchMedium {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<String> for QuenchMedium {
    fn from(value: String) -> Self {
        QuenchMedium::from_name(&value)
    }
}

impl From<QuenchMedium> for String {
    fn from(value: QuenchMedium) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for QuenchMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuenchMedium::Water => "Water",
            QuenchMedium::Oil => "Oil",
            QuenchMedium::Air => "Air",
        };
        f.write_str(name)
    }
}

/// 매체별 담금질 온도와 대표 냉각속도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuenchProfile {
    pub medium: QuenchMedium,
    /// 담금질 종료 온도 [°C]
    pub quench_temperature_c: f64,
    /// 냉각속도 [°C/s]
    pub cooling_rate_c_per_s: f64,
}

pub const QUENCH_PROFILES: &[QuenchProfile] = &[
    QuenchProfile {
        medium: QuenchMedium::Water,
        quench_temperature_c: 25.0,
        cooling_rate_c_per_s: 300.0,
    },
    QuenchProfile {
        medium: QuenchMedium::Oil,
        quench_temperature_c: 80.0,
        cooling_rate_c_per_s: 80.0,
    },
    QuenchProfile {
        medium: QuenchMedium::Air,
        quench_temperature_c: 200.0,
        cooling_rate_c_per_s: 15.0,
    },
];

/// 허용 최소 결정립 크기 [µm]. 0 이하 입력으로 Hall-Petch 항이 발산하지 않게 한다.
pub const MIN_GRAIN_SIZE_UM: f64 = 0.1;
pub const DEFAULT_GRAIN_SIZE_UM: f64 = 25.0;

/// 열처리 공정 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    pub quench: QuenchMedium,
    /// 결정립 크기 [µm]
    pub grain_size_um: f64,
    /// 목표 항복강도 [MPa]. 참고용이며 계산에는 쓰이지 않는다.
    pub target_yield_mpa: f64,
}

impl ProcessParameters {
    pub fn new(quench: QuenchMedium, grain_size_um: f64, target_yield_mpa: f64) -> Self {
        Self {
            quench,
            grain_size_um,
            target_yield_mpa,
        }
    }

    /// 계산에 사용할 결정립 크기. 유한하지 않으면 기본값, 최소값 미만이면 최소값.
    pub fn grain_size(&self) -> f64 {
        if self.grain_size_um.is_finite() {
            self.grain_size_um.max(MIN_GRAIN_SIZE_UM)
        } else {
            DEFAULT_GRAIN_SIZE_UM
        }
    }
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            quench: QuenchMedium::DEFAULT,
            grain_size_um: DEFAULT_GRAIN_SIZE_UM,
            target_yield_mpa: 500.0,
        }
    }
}
