//! Application state and logic.
//!
//! All state changes go through [`App::update`], which takes a message and
//! returns the new state together with the commands the runtime must carry
//! out. Nothing here touches the terminal or the clock.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::animator::AnimationState;
use crate::config::Config;
use crate::constants::layout;
use crate::event::{Command, Message};

/// Main application state.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Settings the app was started with
    pub config: Config,
    /// The breathing animation
    pub animation: AnimationState,
    /// Width of the progress bar in columns
    pub bar_width: u16,
}

impl App {
    /// Creates the application with an empty bar.
    pub fn new(config: Config) -> Self {
        let bar_width = layout::DEFAULT_WIDTH.min(config.max_width);
        Self {
            config,
            animation: AnimationState::new(),
            bar_width,
        }
    }

    /// Commands to run once at startup.
    pub fn init(&self) -> Vec<Command> {
        vec![self.schedule_tick()]
    }

    /// Handles one message.
    pub fn update(mut self, message: Message) -> (Self, Vec<Command>) {
        let commands = match message {
            Message::Key(key) => {
                info!(code = ?key.code, "key pressed, quitting");
                vec![Command::Quit]
            }
            Message::Resize { width, height } => {
                self.bar_width = self.width_for(width);
                debug!(width, height, bar_width = self.bar_width, "terminal resized");
                Vec::new()
            }
            Message::Tick => self.on_tick(),
        };
        (self, commands)
    }

    fn on_tick(&mut self) -> Vec<Command> {
        let boundary = self
            .animation
            .advance(self.config.step, self.config.pause_period);

        trace!(
            fraction = self.animation.fraction(),
            paused = self.animation.is_paused(),
            pause_ticks = self.animation.pause_elapsed_ticks(),
            "tick"
        );

        if let Some(boundary) = boundary {
            debug!(
                ?boundary,
                cycles = self.animation.cycle_count(),
                "reached end of bar"
            );
        }

        if let Some(total) = self.config.breath_total {
            if self.animation.cycle_count() >= total {
                info!(cycles = total, "all breaths done, quitting");
                return vec![Command::Quit];
            }
        }

        vec![self.schedule_tick()]
    }

    /// Bar width for a terminal of the given width.
    fn width_for(&self, terminal_width: u16) -> u16 {
        terminal_width
            .saturating_sub(self.config.padding.saturating_mul(2))
            .saturating_sub(layout::RESIZE_MARGIN)
            .min(self.config.max_width)
    }

    fn schedule_tick(&self) -> Command {
        Command::ScheduleTick(self.tick_interval())
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn tick(app: App, times: u32) -> (App, Vec<Command>) {
        let mut app = app;
        let mut commands = Vec::new();
        for _ in 0..times {
            (app, commands) = app.update(Message::Tick);
        }
        (app, commands)
    }

    #[test]
    fn test_init_schedules_first_tick() {
        let app = App::new(Config::default());
        assert_eq!(
            app.init(),
            vec![Command::ScheduleTick(Duration::from_millis(50))]
        );
        assert_eq!(app.bar_width, 40);
    }

    #[test]
    fn test_tick_reschedules() {
        let app = App::new(Config::default());
        let (app, commands) = app.update(Message::Tick);
        assert_eq!(commands, vec![Command::ScheduleTick(app.tick_interval())]);
        assert!(app.animation.fraction() > 0.0);
    }

    #[test]
    fn test_ticks_keep_going_while_paused() {
        let (app, commands) = tick(App::new(Config::default()), 120);
        assert!(app.animation.is_paused());
        assert_eq!(commands, vec![Command::ScheduleTick(app.tick_interval())]);
    }

    #[test]
    fn test_full_breath_scenario() {
        let (app, _) = tick(App::new(Config::default()), 100);
        assert_eq!(app.animation.fraction(), 1.0);
        assert_eq!(app.animation.status_text(), "Hold...");
        assert!(app.animation.is_paused());

        let (app, _) = tick(app, 80);
        assert!(!app.animation.is_paused());
        assert_eq!(app.animation.direction(), Direction::Decreasing);
        assert_eq!(app.animation.fraction(), 1.0);

        let (app, _) = tick(app, 1);
        assert!(app.animation.fraction() < 1.0);
    }

    #[test]
    fn test_any_key_quits() {
        let codes = [
            KeyCode::Char('q'),
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Esc,
            KeyCode::F(5),
        ];
        for code in codes {
            let (_, commands) = App::new(Config::default()).update(key(code));
            assert_eq!(commands, vec![Command::Quit]);
        }
    }

    #[test]
    fn test_key_quits_while_paused() {
        let (app, _) = tick(App::new(Config::default()), 150);
        assert!(app.animation.is_paused());
        let (_, commands) = app.update(key(KeyCode::Char('x')));
        assert_eq!(commands, vec![Command::Quit]);
    }

    #[test]
    fn test_resize_leaves_animation_alone() {
        let (app, _) = tick(App::new(Config::default()), 42);
        let before = app.animation.clone();

        let (app, commands) = app.update(Message::Resize {
            width: 80,
            height: 24,
        });

        assert!(commands.is_empty());
        assert_eq!(app.animation, before);
        assert_eq!(app.bar_width, 80 - 10 * 2 - 4);
    }

    #[test]
    fn test_resize_caps_width() {
        let app = App::new(Config::default());
        let (app, _) = app.update(Message::Resize {
            width: 300,
            height: 50,
        });
        assert_eq!(app.bar_width, 90);
    }

    #[test]
    fn test_resize_on_tiny_terminal() {
        let app = App::new(Config::default());
        let (app, _) = app.update(Message::Resize {
            width: 12,
            height: 5,
        });
        assert_eq!(app.bar_width, 0);
    }

    #[test]
    fn test_finite_cycles_quit() {
        let config = Config {
            breath_total: Some(1),
            ..Config::default()
        };
        let (app, commands) = tick(App::new(config), 99);
        assert_eq!(commands, vec![Command::ScheduleTick(app.tick_interval())]);

        let (_, commands) = tick(app, 1);
        assert_eq!(commands, vec![Command::Quit]);
    }

    #[test]
    fn test_runs_forever_by_default() {
        let (app, commands) = tick(App::new(Config::default()), 5_000);
        assert!(app.animation.cycle_count() > 3);
        assert_eq!(commands, vec![Command::ScheduleTick(app.tick_interval())]);
    }
}
