//! Slide-over panel anchored to the right edge of the screen.
//!
//! A [`Sheet`] owns its content only while open. Closing drops the content,
//! so the next open starts from whatever the trigger seeds it with.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use super::state::{Visibility, VisibilityAction};

/// Preferred sheet width in columns
pub const SHEET_WIDTH: u16 = 48;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet<C> {
    content: Option<C>,
}

impl<C> Default for Sheet<C> {
    fn default() -> Self {
        Self { content: None }
    }
}

impl<C> Sheet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        if self.content.is_some() {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    /// Open the sheet, mounting `content`. Already open: keep current content.
    pub fn open_with(&mut self, content: impl FnOnce() -> C) {
        if self.content.is_none() {
            debug!("sheet opened");
            self.content = Some(content());
        }
    }

    /// Close the sheet and drop its content
    pub fn close(&mut self) {
        if self.content.take().is_some() {
            debug!("sheet closed");
        }
    }

    /// Apply a visibility action; opening seeds content from `seed`
    pub fn dispatch(&mut self, action: VisibilityAction, seed: impl FnOnce() -> C) {
        match self.visibility().apply(action) {
            Visibility::Open => self.open_with(seed),
            Visibility::Closed => self.close(),
        }
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Draw the overlay and panel. Renders nothing while closed.
    pub fn render<F>(&self, f: &mut Frame, screen: Rect, header: SheetHeader<'_>, body: F)
    where
        F: FnOnce(&C, &mut Frame, Rect),
    {
        let Some(content) = &self.content else {
            return;
        };

        dim(f.buffer_mut(), screen);

        let panel = panel_area(screen);
        f.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Close control
                Constraint::Length(1), // Title
                Constraint::Length(1), // Description
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Body
            ])
            .split(inner);

        let close_style = if header.close_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("×", close_style)).right_aligned()),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                header.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(Span::styled(header.description, Style::default().fg(Color::Gray))),
            chunks[2],
        );

        body(content, f, chunks[4]);
    }
}

/// Title row data for a sheet
#[derive(Debug, Clone, Copy)]
pub struct SheetHeader<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub close_focused: bool,
}

/// Right-edge panel, full height, clamped to the screen width
pub fn panel_area(screen: Rect) -> Rect {
    let width = SHEET_WIDTH.min(screen.width);
    Rect::new(screen.x + screen.width - width, screen.y, width, screen.height)
}

fn dim(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_starts_closed_without_content() {
        let sheet: Sheet<String> = Sheet::new();
        assert_eq!(sheet.visibility(), Visibility::Closed);
        assert!(sheet.content().is_none());
    }

    #[test]
    fn test_open_and_close_drop_content() {
        let mut sheet = Sheet::new();
        sheet.open_with(|| "draft".to_string());
        assert!(sheet.is_open());

        if let Some(content) = sheet.content_mut() {
            content.push_str(" edited");
        }
        // Opening again keeps the mounted content
        sheet.open_with(|| "fresh".to_string());
        assert_eq!(sheet.content().map(String::as_str), Some("draft edited"));

        sheet.close();
        assert!(!sheet.is_open());
        assert!(sheet.content().is_none());

        sheet.open_with(|| "fresh".to_string());
        assert_eq!(sheet.content().map(String::as_str), Some("fresh"));
    }

    #[test]
    fn test_dispatch_actions() {
        let mut sheet = Sheet::new();
        sheet.dispatch(VisibilityAction::Open, || 1);
        assert_eq!(sheet.visibility(), Visibility::Open);
        sheet.dispatch(VisibilityAction::Close, || 2);
        assert_eq!(sheet.visibility(), Visibility::Closed);
        sheet.dispatch(VisibilityAction::Close, || 3);
        assert_eq!(sheet.visibility(), Visibility::Closed);
    }

    #[test]
    fn test_panel_area_clamps_to_screen() {
        assert_eq!(panel_area(Rect::new(0, 0, 100, 30)), Rect::new(52, 0, 48, 30));
        assert_eq!(panel_area(Rect::new(0, 0, 40, 30)), Rect::new(0, 0, 40, 30));
    }
}
