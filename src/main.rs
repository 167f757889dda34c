//! Breathing exercise for the terminal.
//!
//! A progress bar fills while you breathe in, holds, empties while you
//! breathe out and holds again. Press any key to stop.
//!
//! Optional environment variables:
//! - `BREATHE_TICK_MS`: milliseconds between ticks (default 50)
//! - `BREATHE_PAUSE_TICKS`: ticks to hold at each end (default 80)
//! - `BREATHE_CYCLES`: stop after this many half-cycles (default: never)
//! - `BREATHE_LOG`: append logs to this file (filter with `RUST_LOG`)

mod animator;
mod app;
mod config;
mod constants;
mod event;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};

use crate::app::App;
use crate::config::Config;
use crate::ui::Theme;

/// Entry point for the application.
///
/// Any failure is printed and turns into exit status 1.
#[tokio::main]
async fn main() {
    if let Err(err) = start().await {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Sets everything up, runs the animation and restores the terminal.
async fn start() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_file.as_deref())?;

    // Initialize the terminal
    let terminal = ratatui::try_init().context("Failed to initialize terminal")?;

    // Run the application
    let result = runtime::run(terminal, App::new(config), Theme::default()).await;

    // Restore the terminal to its original state
    ratatui::restore();

    result
}
