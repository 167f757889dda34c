//! Application-wide constants.
//!
//! Centralizes magic numbers and default configuration values.

use std::time::Duration;

/// Event polling timeout for the input reader.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Animation defaults.
pub mod animation {
    use std::time::Duration;

    /// Time between two ticks.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
    /// Fraction added or removed on every running tick.
    pub const STEP: f64 = 0.01;
    /// Ticks spent holding at each end of the bar.
    pub const PAUSE_PERIOD: u32 = 80;
}

/// Layout dimensions for the progress bar.
pub mod layout {
    /// Columns of padding left of the bar and the status line.
    pub const PADDING: u16 = 10;
    /// Extra columns reserved on resize besides the padding on both sides.
    pub const RESIZE_MARGIN: u16 = 4;
    /// Widest the bar may get, whatever the terminal size.
    pub const MAX_WIDTH: u16 = 90;
    /// Bar width used before the first resize event arrives.
    pub const DEFAULT_WIDTH: u16 = 40;
}

/// Status line texts.
pub mod status {
    pub const BREATH_IN: &str = "Breath in...";
    pub const BREATH_OUT: &str = "Breath out...";
    pub const HOLD: &str = "Hold...";
}

/// Environment variables read at startup.
pub mod env {
    pub const TICK_MS: &str = "BREATHE_TICK_MS";
    pub const PAUSE_TICKS: &str = "BREATHE_PAUSE_TICKS";
    pub const CYCLES: &str = "BREATHE_CYCLES";
    pub const LOG_FILE: &str = "BREATHE_LOG";
}
