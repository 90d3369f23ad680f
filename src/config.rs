use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::alloy::{Composition, CompositionError, ElementSymbol};
use crate::process::{ProcessParameters, QuenchMedium};
use crate::units::*;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// °C, MPa, g/cm³. 내부 계산 기본값.
    Metric,
    /// °F, ksi, lb/in³
    Imperial,
}

impl UnitSystem {
    /// 프리셋에 해당하는 기본 단위 세트.
    pub fn default_units(self) -> DefaultUnits {
        match self {
            UnitSystem::Metric => DefaultUnits::default(),
            UnitSystem::Imperial => DefaultUnits {
                temperature: TemperatureUnit::Fahrenheit,
                temperature_diff: TemperatureDiffUnit::Fahrenheit,
                stress: StressUnit::Ksi,
                density: DensityUnit::PoundPerIn3,
            },
        }
    }
}

/// 각 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub stress: StressUnit,
    pub density: DensityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            temperature_diff: TemperatureDiffUnit::Celsius,
            stress: StressUnit::MegaPascal,
            density: DensityUnit::GramPerCm3,
        }
    }
}

/// 기본으로 불러올 합금 설계(이름, 조성, 공정 조건).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub name: String,
    pub quench: QuenchMedium,
    pub grain_size_um: f64,
    pub target_yield_mpa: f64,
    /// 원소 기호 → wt%. Fe는 잔부로 계산되므로 적지 않는다.
    pub composition: BTreeMap<String, f64>,
}

impl DesignConfig {
    /// 설정 파일의 조성 표를 [`Composition`]으로 변환한다.
    pub fn composition(&self) -> Result<Composition, CompositionError> {
        let mut comp = Composition::new();
        for (sym, wt) in &self.composition {
            let el = ElementSymbol::parse(sym)
                .ok_or_else(|| CompositionError::UnknownElement(sym.clone()))?;
            comp.set(el, *wt);
        }
        Ok(comp)
    }

    /// 조성을 설정 표 형식으로 되돌려 저장한다. 0인 원소는 생략한다.
    pub fn set_composition(&mut self, comp: &Composition) {
        self.composition = ElementSymbol::ALLOYING
            .iter()
            .filter(|el| comp.get(**el) > 0.0)
            .map(|el| (el.symbol().to_string(), comp.get(*el)))
            .collect();
    }

    pub fn process(&self) -> ProcessParameters {
        ProcessParameters::new(self.quench, self.grain_size_um, self.target_yield_mpa)
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        let composition = [
            ("C", 0.08),
            ("Mn", 2.0),
            ("Si", 1.0),
            ("Cr", 18.0),
            ("Ni", 8.0),
            ("Mo", 0.5),
        ]
        .into_iter()
        .map(|(sym, wt)| (sym.to_string(), wt))
        .collect();
        Self {
            name: "304-type stainless".to_string(),
            quench: QuenchMedium::Oil,
            grain_size_um: 25.0,
            target_yield_mpa: 500.0,
            composition,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us ...)
    pub language: String,
    /// 로그 레벨 (error/warn/info/debug/trace)
    pub log_level: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub design: DesignConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_level: "warn".to_string(),
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            design: DesignConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 조성 표 해석 오류
    Composition(CompositionError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Composition(e) => write!(f, "설정 조성 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<CompositionError> for ConfigError {
    fn from(value: CompositionError) -> Self {
        ConfigError::Composition(value)
    }
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 저장하고 돌려준다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        log::debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("기본 설정 파일 생성: {}", path.display());
        Ok(cfg)
    }
}

/// TOML 문자열을 해석하고 조성 표의 원소 기호까지 검증한다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.design.composition()?;
    Ok(cfg)
}

impl Config {
    /// 설정을 지정 경로에 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 프리셋을 바꾸고 기본 단위 세트를 함께 갱신한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = system.default_units();
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
