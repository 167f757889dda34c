//! Event handling module.
//!
//! Terminal events are read with crossterm on a blocking task and turned
//! into [`Message`]s for the main loop. The loop answers with [`Command`]s.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::constants::POLL_TIMEOUT;

/// Everything the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The scheduled tick fired
    Tick,
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal changed size
    Resize { width: u16, height: u16 },
}

/// Work the application asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver a single [`Message::Tick`] after the given delay
    ScheduleTick(Duration),
    /// Stop the program
    Quit,
}

/// Polls terminal events and converts them to messages.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to a Message.
    ///
    /// Returns Ok(None) if nothing relevant arrived within the timeout.
    pub fn next(&self) -> io::Result<Option<Message>> {
        if event::poll(self.poll_timeout)? {
            return Ok(self.event_to_message(event::read()?));
        }
        Ok(None)
    }

    /// Converts a terminal event to a message.
    pub(crate) fn event_to_message(&self, event: Event) -> Option<Message> {
        match event {
            // Only key presses count (not releases or repeats)
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
            Event::Resize(width, height) => Some(Message::Resize { width, height }),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts the blocking input reader.
///
/// The reader stops once the receiving side of `tx` is gone. It only
/// finishes early when reading from the terminal fails.
pub fn spawn_input_reader(tx: UnboundedSender<Message>) -> JoinHandle<io::Result<()>> {
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let handler = EventHandler::new();
        while !tx.is_closed() {
            if let Some(message) = handler.next()? {
                if tx.send(message).is_err() {
                    break;
                }
            }
        }
        debug!("input reader stopped");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind};

    fn make_key_event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_press_becomes_message() {
        let handler = EventHandler::new();
        let key = make_key_event(KeyCode::Char('a'), KeyEventKind::Press);

        assert_eq!(
            handler.event_to_message(Event::Key(key)),
            Some(Message::Key(key))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.event_to_message(Event::Key(make_key_event(
                KeyCode::Char('a'),
                KeyEventKind::Release
            ))),
            None
        );
        assert_eq!(
            handler.event_to_message(Event::Key(make_key_event(
                KeyCode::Char('a'),
                KeyEventKind::Repeat
            ))),
            None
        );
    }

    #[test]
    fn test_resize_becomes_message() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.event_to_message(Event::Resize(120, 40)),
            Some(Message::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_other_events_ignored() {
        let handler = EventHandler::new();

        assert_eq!(handler.event_to_message(Event::FocusGained), None);
        assert_eq!(
            handler.event_to_message(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
            None
        );
    }
}
