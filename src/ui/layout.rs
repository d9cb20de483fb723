use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::sidebar::SIDEBAR_WIDTH;

/// Screen regions for one frame of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Sidebar area when visible
    pub sidebar: Option<Rect>,
    /// True when the sidebar draws over the page instead of beside it
    pub sidebar_overlay: bool,
    pub header: Rect,
    pub performance: Rect,
    pub lead_sources: Rect,
    pub leads: Rect,
    pub report: Rect,
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Lay out `area`. Wide terminals pin the sidebar in its own column and
    /// put both charts on one row; narrow ones stack the charts and overlay
    /// the sidebar only when it is open.
    pub fn new(area: Rect, wide: bool, sidebar_open: bool, lead_rows: u16) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Page
                Constraint::Length(3), // Status bar
            ])
            .split(area);
        let (body, status_bar) = (outer[0], outer[1]);

        let (sidebar, page, sidebar_overlay) = if wide {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(body);
            (Some(columns[0]), columns[1], false)
        } else if sidebar_open {
            let width = SIDEBAR_WIDTH.min(body.width);
            (Some(Rect::new(body.x, body.y, width, body.height)), body, true)
        } else {
            (None, body, false)
        };

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Min(8),                // Charts
                Constraint::Length(lead_rows + 3), // Leads: borders + column header
                Constraint::Length(5),             // Report form
            ])
            .split(page);

        let charts = if wide {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                .split(sections[1])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(sections[1])
        };

        Self {
            sidebar,
            sidebar_overlay,
            header: sections[0],
            performance: charts[0],
            lead_sources: charts[1],
            leads: sections[2],
            report: sections[3],
            status_bar,
        }
    }
}
