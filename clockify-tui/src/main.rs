mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod stopwatch;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::{App, TimerSize};
use clap::Parser;
use cli::{Cli, Commands};
use config::ClockifyConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use stopwatch::SystemClock;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Resolve before the log writer thread exists
    let offset = time_utils::local_offset();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(cli.large, SystemClock::new(offset)).await,
        Commands::ConfigPath => print_config_path(),
    }
}

async fn run(large: bool, clock: SystemClock) -> Result<()> {
    let mut cfg = ClockifyConfig::load()?;
    if large {
        cfg.timer_size = TimerSize::Large;
    }

    let log_path = cfg.log_path()?;
    let _log_guard = logging::init_file_logging(&log_path, &cfg.log_filter)?;
    tracing::info!(config = ?cfg, "starting clockify-tui");

    let mut app = App::new(&cfg, Box::new(clock));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("event loop failed: {:?}", err);
    }
    tracing::info!("exiting");
    res
}

fn print_config_path() -> Result<()> {
    let path = ClockifyConfig::config_path()?;
    if !path.exists() {
        ClockifyConfig::default()
            .save()
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        println!("Created default config at {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
