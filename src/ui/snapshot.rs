//! Headless rendering: draw one frame into an in-memory buffer and read it
//! back as plain text.

use anyhow::Result;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use super::app::DashboardApp;
use crate::models::Viewport;

/// Text rows of a rendered buffer, trailing spaces trimmed
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    if width == 0 {
        return Vec::new();
    }
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Draw `app` once at `viewport` and return the screen as text
pub fn render_snapshot(app: &mut DashboardApp, viewport: Viewport) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(viewport.width, viewport.height))?;
    terminal.draw(|f| app.draw(f))?;
    Ok(buffer_lines(terminal.backend().buffer()).join("\n"))
}
