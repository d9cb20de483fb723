use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

use super::components::{button, card, label, ButtonVariant, Select};
use super::view::View;
use crate::models::{ReportDateRange, ReportFormat, ReportRequest, ReportType};

/// Controls of the reporting tool, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportControl {
    ReportType,
    DateRange,
    Format,
    Generate,
}

impl ReportControl {
    const ORDER: [ReportControl; 4] = [
        ReportControl::ReportType,
        ReportControl::DateRange,
        ReportControl::Format,
        ReportControl::Generate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }
}

pub struct ReportForm {
    pub report_type: Select<ReportType>,
    pub date_range: Select<ReportDateRange>,
    pub format: Select<ReportFormat>,
    pub focus: ReportControl,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportForm {
    pub fn new() -> Self {
        Self {
            report_type: Select::default(),
            date_range: Select::default(),
            format: Select::default(),
            focus: ReportControl::ReportType,
        }
    }

    pub fn request(&self) -> ReportRequest {
        ReportRequest {
            report_type: self.report_type.selected(),
            date_range: self.date_range.selected(),
            format: self.format.selected(),
        }
    }

    /// "Generate Report": no report backend exists, so this only logs
    pub fn generate(&self) {
        debug!(request = ?self.request(), "generate report requested; no action wired");
    }

    fn cycle(&mut self, forward: bool) -> bool {
        match (self.focus, forward) {
            (ReportControl::ReportType, true) => self.report_type.next(),
            (ReportControl::ReportType, false) => self.report_type.previous(),
            (ReportControl::DateRange, true) => self.date_range.next(),
            (ReportControl::DateRange, false) => self.date_range.previous(),
            (ReportControl::Format, true) => self.format.next(),
            (ReportControl::Format, false) => self.format.previous(),
            (ReportControl::Generate, _) => return false,
        }
        true
    }
}

impl View for ReportForm {
    fn title(&self) -> &str {
        "Reporting Tool"
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let block = card(self.title(), Some("Generate custom reports"), focused);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        let is = |control: ReportControl| focused && self.focus == control;
        let selects = [
            ("Report Type", self.report_type.line(is(ReportControl::ReportType))),
            ("Date Range", self.date_range.line(is(ReportControl::DateRange))),
            ("Format", self.format.line(is(ReportControl::Format))),
        ];

        for ((name, line), column) in selects.into_iter().zip(columns.iter()) {
            let text = vec![Line::from(label(name, 0)), line];
            f.render_widget(Paragraph::new(text), *column);
        }

        f.render_widget(
            Paragraph::new(Line::from(button(
                "Generate Report",
                ButtonVariant::Primary,
                is(ReportControl::Generate),
            ))),
            rows[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let index = self.focus.index();
        match key.code {
            KeyCode::Up => {
                self.focus = ReportControl::ORDER[index.saturating_sub(1)];
                Ok(true)
            }
            KeyCode::Down => {
                self.focus = ReportControl::ORDER[(index + 1).min(ReportControl::ORDER.len() - 1)];
                Ok(true)
            }
            KeyCode::Left => Ok(self.cycle(false)),
            KeyCode::Right => Ok(self.cycle(true)),
            KeyCode::Enter if self.focus == ReportControl::Generate => {
                self.generate();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ field • ←/→ change option"
    }
}
