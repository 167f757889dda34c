//! Breathing animation state machine.
//!
//! The bar fills while breathing in, holds at the top, empties while
//! breathing out and holds again at the bottom. One call to
//! [`AnimationState::advance`] is one timer tick.

use crate::constants::status;

/// Distance from a boundary below which the fraction snaps onto it.
///
/// Repeatedly adding a step such as 0.01 never lands exactly on 1.0.
const SNAP_EPSILON: f64 = 1e-9;

/// Which way the bar is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Filling (breathing in)
    Increasing,
    /// Emptying (breathing out)
    Decreasing,
}

/// Boundary touched during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Full,
    Empty,
}

/// The whole animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Current fill level, always within [0.0, 1.0]
    fraction: f64,
    /// Direction of the next running tick
    direction: Direction,
    /// Holding at a boundary?
    paused: bool,
    /// Ticks spent in the current hold
    pause_elapsed_ticks: u32,
    /// Completed half-cycles
    cycle_count: u32,
}

impl AnimationState {
    /// Creates an empty bar about to fill.
    pub fn new() -> Self {
        Self {
            fraction: 0.0,
            direction: Direction::Increasing,
            paused: false,
            pause_elapsed_ticks: 0,
            cycle_count: 0,
        }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause_elapsed_ticks(&self) -> u32 {
        self.pause_elapsed_ticks
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Text shown under the bar.
    pub fn status_text(&self) -> &'static str {
        if self.paused {
            return status::HOLD;
        }
        match self.direction {
            Direction::Increasing => status::BREATH_IN,
            Direction::Decreasing => status::BREATH_OUT,
        }
    }

    /// Advances the animation by one tick.
    ///
    /// Returns the boundary reached on this tick, if any. The fraction does
    /// not move on a paused tick, including the one that ends the hold.
    pub fn advance(&mut self, step: f64, pause_period: u32) -> Option<Boundary> {
        if self.paused {
            self.pause_elapsed_ticks += 1;
            if self.pause_elapsed_ticks >= pause_period {
                self.paused = false;
                self.pause_elapsed_ticks = 0;
            }
            return None;
        }

        let delta = match self.direction {
            Direction::Increasing => step,
            Direction::Decreasing => -step,
        };
        self.fraction = snap((self.fraction + delta).clamp(0.0, 1.0));

        let boundary = if self.fraction == 1.0 {
            self.direction = Direction::Decreasing;
            Boundary::Full
        } else if self.fraction == 0.0 {
            self.direction = Direction::Increasing;
            Boundary::Empty
        } else {
            return None;
        };

        self.cycle_count += 1;
        self.paused = pause_period > 0;
        Some(boundary)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls a fraction sitting within floating-point noise of 0 or 1 onto it.
fn snap(fraction: f64) -> f64 {
    if fraction > 1.0 - SNAP_EPSILON {
        1.0
    } else if fraction < SNAP_EPSILON {
        0.0
    } else {
        fraction
    }
}
