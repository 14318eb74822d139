//! TUI runtime for Colabino.
//!
//! A synchronous loop: advance timers, draw, poll for input with a
//! short timeout so the playback gauge animates, dispatch key events,
//! check for quit.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::app::input;
use crate::ui::{self, App};

/// Main event loop.
pub fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Timer-driven transitions: toast expiry, playback progress,
        // highlight expiry. Only the mounted view ticks.
        app.tick();

        terminal.draw(|f| ui::render(f, app))?;

        // Fast timeout keeps the playback gauge smooth.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                input::handle_key_event(app, key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
