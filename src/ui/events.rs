use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Unified TUI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

impl TuiEvent {
    /// Convert a raw terminal event; key releases and repeats are dropped
    pub fn from_terminal(event: Event) -> Option<TuiEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
            _ => None,
        }
    }
}

/// True for Ctrl+C, which quits from anywhere
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Blocking terminal event source with a tick timeout
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for input; yields `Tick` when nothing arrived
    pub fn next(&self) -> Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            if let Some(event) = TuiEvent::from_terminal(event::read()?) {
                return Ok(event);
            }
        }
        Ok(TuiEvent::Tick)
    }
}
