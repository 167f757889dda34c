//! Runtime configuration.
//!
//! Everything has a default; a handful of environment variables can
//! override them since the program takes no command line arguments.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::constants::{animation, env, layout};

/// Settings for one run of the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Time between two ticks
    pub tick_interval: Duration,
    /// Fraction moved per running tick
    pub step: f64,
    /// Ticks held at each end of the bar
    pub pause_period: u32,
    /// Quit after this many half-cycles (None runs forever)
    pub breath_total: Option<u32>,
    /// Left padding of the bar and status line
    pub padding: u16,
    /// Upper bound on the bar width
    pub max_width: u16,
    /// Where to write logs, if anywhere
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: animation::TICK_INTERVAL,
            step: animation::STEP,
            pause_period: animation::PAUSE_PERIOD,
            breath_total: None,
            padding: layout::PADDING,
            max_width: layout::MAX_WIDTH,
            log_file: None,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(env::TICK_MS) {
            let millis = parse_number(env::TICK_MS, &value)?;
            if millis == 0 {
                bail!("{} must be greater than zero", env::TICK_MS);
            }
            config.tick_interval = Duration::from_millis(u64::from(millis));
        }

        if let Some(value) = lookup(env::PAUSE_TICKS) {
            config.pause_period = parse_number(env::PAUSE_TICKS, &value)?;
        }

        if let Some(value) = lookup(env::CYCLES) {
            let cycles = parse_number(env::CYCLES, &value)?;
            if cycles == 0 {
                bail!("{} must be greater than zero", env::CYCLES);
            }
            config.breath_total = Some(cycles);
        }

        config.log_file = lookup(env::LOG_FILE)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

/// Parses an unsigned integer setting, naming the variable on failure.
fn parse_number(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid value for {key}: '{value}'"))
}
