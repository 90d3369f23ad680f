use std::path::Path;

use crate::alloy::{CompositionError, DomainError};
use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::snapshot::Engine;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 계산 도메인 오류
    Domain(DomainError),
    /// 조성 입력 오류
    Composition(CompositionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Domain(e) => write!(f, "계산 오류: {e}"),
            AppError::Composition(e) => write!(f, "조성 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DomainError> for AppError {
    fn from(value: DomainError) -> Self {
        AppError::Domain(value)
    }
}

impl From<CompositionError> for AppError {
    fn from(value: CompositionError) -> Self {
        AppError::Composition(value)
    }
}

/// 대화형 CLI의 메인 루프를 실행한다. 작업 중인 설계는 `config.design`에 유지된다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    engine: &mut Engine,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Evaluate => ui_cli::handle_evaluate(tr, config, engine)?,
            MenuChoice::Composition => ui_cli::handle_composition(tr, config)?,
            MenuChoice::Process => ui_cli::handle_process(tr, config)?,
            MenuChoice::Curves => ui_cli::handle_curves(tr, config, engine)?,
            MenuChoice::Compare => ui_cli::handle_compare(tr, config, engine)?,
            MenuChoice::Report => ui_cli::handle_report(tr, config, engine)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
