//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Poll timed out (drives animations)
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    /// Longest time a single poll may block
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, waiting at most `timeout` (capped at the
    /// tick rate)
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next_within(&self, timeout: Duration) -> Result<Event> {
        if event::poll(timeout.min(self.tick_rate))? {
            match event::read()? {
                // Key release/repeat events are reported on some platforms
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_new() {
        let handler = Handler::new(50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_event_is_copy() {
        let event = Event::Resize(80, 24);
        let copy = event;
        assert_eq!(event, copy);
    }

    #[test]
    fn test_event_debug() {
        let event = Event::Tick;
        assert!(!format!("{event:?}").is_empty());

        let resize = Event::Resize(80, 24);
        assert!(format!("{resize:?}").contains("80"));
    }
}
