//! Terminal User Interface for adpage

pub mod input;
pub mod layout;
mod render;

pub use render::render;

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        cursor::Show,
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use std::time::Instant;
use tracing::info;

/// Run the TUI application.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing or event polling fails
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = enter_and_loop(app);
    let restored = restore();
    result.and(restored)
}

fn enter_and_loop(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let event_handler = Handler::new(app.config.tick_rate_ms);
    run_loop(&mut terminal, app, &event_handler)
}

fn restore() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    let size = terminal.size()?;
    app.mount(Rect::new(0, 0, size.width, size.height), Instant::now());
    info!(page = ?app.page, "UI started");

    let mut needs_draw = true;
    loop {
        if needs_draw {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        let event = event_handler.next_within(app.poll_timeout(Instant::now()))?;
        let now = Instant::now();
        needs_draw = match event {
            Event::Tick => false,
            Event::Key(key) => {
                input::handle_key_event(app, key.code, key.modifiers, now);
                true
            }
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, now),
            Event::Resize(width, height) => {
                app.resize(Rect::new(0, 0, width, height));
                true
            }
        };
        needs_draw |= app.tick(now);

        if app.should_quit {
            break;
        }
    }

    // Scroll loop teardown
    app.marquee.stop();
    info!("UI stopped");
    Ok(())
}
