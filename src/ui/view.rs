use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::Rect, Frame};

/// Contract for every focusable dashboard panel
pub trait View {
    /// Card title shown in the panel border
    fn title(&self) -> &str;

    /// Render the panel; `focused` highlights the border and selection
    fn render(&self, f: &mut Frame, area: Rect, focused: bool);

    /// Handle a key while the panel has focus. Returns true if consumed.
    fn handle_key(&mut self, _key: KeyEvent) -> Result<bool> {
        Ok(false) // Default: not handled
    }

    /// Hint shown in the status bar while focused
    fn key_hints(&self) -> &'static str {
        ""
    }

    /// True while the panel wants all input (e.g. an open sheet)
    fn is_modal(&self) -> bool {
        false
    }
}
