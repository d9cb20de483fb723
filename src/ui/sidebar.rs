use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use super::components::{button, ButtonVariant, FOCUS, MUTED};
use super::view::View;

pub const SIDEBAR_WIDTH: u16 = 28;
pub const BRAND: &str = "EzyMetrics";

/// Navigation entries, each with a one-column icon
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("▦", "Dashboard"),
    ("◉", "Leads"),
    ("▥", "Analytics"),
    ("▤", "Reports"),
];

/// Navigation panel. Its open/closed flag lives in the dashboard root.
pub struct SidebarNav {
    pub selected: usize,
    /// Pinned on wide terminals: always shown, no close button
    pub pinned: bool,
}

impl Default for SidebarNav {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarNav {
    pub fn new() -> Self {
        Self {
            selected: 0,
            pinned: false,
        }
    }
}

impl View for SidebarNav {
    fn title(&self) -> &str {
        BRAND
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        // Overlay mode draws over the page
        if !self.pinned {
            f.render_widget(Clear, area);
        }

        let border = if focused { FOCUS } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut heading = vec![Span::styled(
            BRAND,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if !self.pinned {
            heading.push(Span::raw("  "));
            heading.push(button("≡", ButtonVariant::Ghost, false));
        }

        let mut lines = vec![Line::from(heading), Line::from("")];
        for (i, (icon, name)) in NAV_ITEMS.iter().enumerate() {
            let active = focused && i == self.selected;
            let style = if active {
                Style::default().fg(Color::Black).bg(FOCUS)
            } else {
                Style::default().fg(MUTED)
            };
            lines.push(Line::from(Span::styled(format!(" {} {:<12}", icon, name), style)));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Ok(true)
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(NAV_ITEMS.len() - 1);
                Ok(true)
            }
            KeyCode::Enter => {
                // Navigation buttons are not wired to any route
                debug!(item = NAV_ITEMS[self.selected].1, "nav item activated");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn key_hints(&self) -> &'static str {
        if self.pinned {
            "↑/↓ navigate"
        } else {
            "↑/↓ navigate • Esc/m close menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_nav_selection_clamps_and_enter_is_inert() {
        let mut nav = SidebarNav::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        nav.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(nav.selected, 0);
        for _ in 0..10 {
            nav.handle_key(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(nav.selected, 3);

        assert!(nav.handle_key(key(KeyCode::Enter)).unwrap());
        assert_eq!(nav.selected, 3);
        assert!(!nav.handle_key(key(KeyCode::Esc)).unwrap());
    }
}
