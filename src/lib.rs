//! 합금 설계 계산 로직을 라이브러리로 분리하여 CLI와 테스트에서 함께 쓴다.

pub mod alloy;
pub mod app;
pub mod config;
pub mod i18n;
pub mod logger;
pub mod metallurgy;
pub mod process;
pub mod report;
pub mod snapshot;
pub mod tables;
pub mod ui_cli;
pub mod units;
