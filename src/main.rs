mod aqi;
mod chart;
mod config;
mod error;
mod generator;
mod logging;
mod models;
mod terminal;
mod theme;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::{Config, data_dir, default_config_path};
use crate::terminal::Tui;
use crate::theme::Theme;
use crate::ui::{App, render};

/// 空气质量与天气终端仪表盘
#[derive(Debug, Parser)]
#[command(name = "aqdash", version, about)]
struct Cli {
    /// 配置文件路径 (默认 <config_dir>/aqdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 以暗色模式启动
    #[arg(long)]
    dark: bool,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.or_else(default_config_path) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    // 日志文件 (~/.local/share/aqdash/aqdash.log)
    let log_path = match &config.logging.file {
        Some(path) => path.clone(),
        None => data_dir()?.join("aqdash.log"),
    };
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init(level, &log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing::info!("aqdash v{} starting", env!("CARGO_PKG_VERSION"));

    // 创建应用状态
    let theme = Theme::from_dark_mode(cli.dark || config.ui.dark_mode);
    tracing::debug!(dark = theme.is_dark(), cities = config.cities.len(), "loaded config");
    let mut app = App::new(config.seed(), theme);
    app.min_bar_percent = config.ui.min_bar_percent;

    // 设置终端，guard 离开作用域时恢复
    let (mut terminal, guard) = terminal::init().context("failed to set up terminal")?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 先恢复终端再报告错误
    drop(guard);

    tracing::info!(readings = app.readings.len(), "aqdash exiting");
    result.context("terminal event loop failed")
}

fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
