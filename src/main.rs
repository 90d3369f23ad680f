use std::path::PathBuf;

use alloy_design_toolbox::alloy::Composition;
use alloy_design_toolbox::app::{self, AppError};
use alloy_design_toolbox::config::{self, Config};
use alloy_design_toolbox::i18n::{self, keys, Translator};
use alloy_design_toolbox::process::QuenchMedium;
use alloy_design_toolbox::snapshot::Engine;
use alloy_design_toolbox::{logger, report, ui_cli};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "alloy_design_toolbox")]
#[command(version)]
#[command(about = "Steel alloy design calculator (transformation, strength, cost, TTT curves)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 표시 언어 (auto/ko/en)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    /// 로그 상세도 (-v, -vv ...)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 현재 설계의 물성을 계산해 출력한다
    Evaluate {
        #[command(flatten)]
        design: DesignArgs,
        /// 전체 스냅샷을 TOML로 출력
        #[arg(long)]
        toml: bool,
    },
    /// TTT 곡선과 냉각 경로를 출력한다
    Curves {
        #[command(flatten)]
        design: DesignArgs,
    },
    /// 기준 합금(AISI 4140)과 비교한다
    Compare {
        #[command(flatten)]
        design: DesignArgs,
    },
    /// 텍스트 보고서를 저장한다
    Report {
        #[command(flatten)]
        design: DesignArgs,
        #[arg(short, long, default_value = ui_cli::DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// 대화형 메뉴 (기본값)
    Menu,
}

/// 설정 파일의 설계를 일회성으로 덮어쓰는 옵션.
#[derive(Args, Debug, Default)]
struct DesignArgs {
    #[arg(long)]
    name: Option<String>,
    /// Water / Oil / Air
    #[arg(long)]
    quench: Option<String>,
    /// 결정립 크기 [µm]
    #[arg(long)]
    grain: Option<f64>,
    /// 목표 항복강도 [MPa]
    #[arg(long)]
    target: Option<f64>,
    /// 원소 함량 지정 (예: --set Cr=18 --set Ni=8)
    #[arg(long = "set", value_name = "EL=WT")]
    set: Vec<String>,
}

impl DesignArgs {
    fn apply(&self, cfg: &mut Config) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            cfg.design.name = name.clone();
        }
        if let Some(q) = &self.quench {
            cfg.design.quench = QuenchMedium::from_name(q);
        }
        if let Some(g) = self.grain {
            cfg.design.grain_size_um = g;
        }
        if let Some(t) = self.target {
            cfg.design.target_yield_mpa = t;
        }
        if !self.set.is_empty() {
            let mut comp = cfg.design.composition()?;
            for assignment in &self.set {
                let (el, wt) = Composition::parse_assignment(assignment)?;
                comp.set(el, wt);
            }
            cfg.design.set_composition(&comp);
        }
        Ok(())
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령이나 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        let tr = Translator::new(&i18n::resolve_language("auto", None));
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_from(&cli.config)?;
    let level = logger::level_from_verbosity(cfg.log_level(), cli.verbose);
    logger::init(level)?;
    log::debug!("설정 파일: {}", cli.config.display());

    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    let mut engine = Engine::standard()?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Evaluate { design, toml } => {
            design.apply(&mut cfg)?;
            let (comp, process) = ui_cli::current_design(&cfg)?;
            let snapshot = engine.evaluate(&comp, &process)?;
            if toml {
                println!("{}", toml::to_string_pretty(&snapshot)?);
            } else {
                ui_cli::print_snapshot(&tr, &cfg.default_units, &cfg.design.name, &snapshot);
            }
        }
        Command::Curves { design } => {
            design.apply(&mut cfg)?;
            ui_cli::handle_curves(&tr, &cfg, &mut engine)?;
        }
        Command::Compare { design } => {
            design.apply(&mut cfg)?;
            ui_cli::handle_compare(&tr, &cfg, &mut engine)?;
        }
        Command::Report { design, output } => {
            design.apply(&mut cfg)?;
            let (comp, process) = ui_cli::current_design(&cfg)?;
            let snapshot = engine.evaluate(&comp, &process)?;
            let now = chrono::Local::now().naive_local();
            report::write_report(&output, &cfg.design.name, now, &snapshot)?;
            println!("{} {}", tr.t(keys::REPORT_SAVED), output.display());
        }
        Command::Menu => app::run(&mut cfg, &cli.config, &mut engine, &tr)?,
    }
    Ok(())
}
