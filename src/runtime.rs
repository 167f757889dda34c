//! Main event loop.
//!
//! Messages are handled one at a time, in arrival order. Ticks are not
//! produced by a repeating timer: each [`Command::ScheduleTick`] spawns a
//! one-shot sleep that posts exactly one [`Message::Tick`].

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::info;

use crate::app::App;
use crate::event::{spawn_input_reader, Command, Message};
use crate::ui::{self, Theme};

/// Runs the animation until a key is pressed.
///
/// This function runs the TUI event loop:
/// 1. Carry out the commands from the last update
/// 2. Draw the current state
/// 3. Wait for the next message
/// 4. Update the state
pub async fn run(
    mut terminal: ratatui::DefaultTerminal,
    mut app: App,
    theme: Theme,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut input = spawn_input_reader(tx.clone());

    // Lay out for the real terminal size before the first frame
    let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
    tx.send(Message::Resize { width, height })
        .context("Event channel closed")?;

    let mut pending = app.init();
    info!(interval = ?app.tick_interval(), "animation started");

    loop {
        for command in pending.drain(..) {
            match command {
                Command::ScheduleTick(after) => schedule_tick(tx.clone(), after),
                Command::Quit => {
                    info!(cycles = app.animation.cycle_count(), "quitting");
                    return Ok(());
                }
            }
        }

        terminal
            .draw(|frame| ui::draw(frame, &app, &theme))
            .context("Failed to draw UI")?;

        let message = tokio::select! {
            message = rx.recv() => message,
            joined = &mut input => {
                joined
                    .context("Input reader panicked")?
                    .context("Failed to read terminal events")?;
                bail!("Input reader stopped unexpectedly")
            }
        };

        let Some(message) = message else {
            bail!("Event channel closed");
        };

        let (next, commands) = app.update(message);
        app = next;
        pending = commands;
    }
}

/// Posts a single tick after `after`.
fn schedule_tick(tx: UnboundedSender<Message>, after: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        // The loop may already be gone
        let _ = tx.send(Message::Tick);
    });
}
