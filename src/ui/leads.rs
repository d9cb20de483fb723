use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};
use tracing::debug;

use super::components::{button, card, label, ButtonVariant, InputField};
use super::sheet::{Sheet, SheetHeader};
use super::view::View;
use crate::models::Lead;

pub const COLUMNS: [&str; 5] = ["Name", "Email", "Source", "Status", "Action"];
pub const FIELD_LABELS: [&str; 4] = ["Name", "Email", "Source", "Status"];

/// Which control inside the detail sheet has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    Field(usize),
    Save,
    Close,
}

impl DetailFocus {
    fn next(self) -> Self {
        match self {
            DetailFocus::Field(i) if i + 1 < FIELD_LABELS.len() => DetailFocus::Field(i + 1),
            DetailFocus::Field(_) => DetailFocus::Save,
            DetailFocus::Save => DetailFocus::Close,
            DetailFocus::Close => DetailFocus::Field(0),
        }
    }

    fn previous(self) -> Self {
        match self {
            DetailFocus::Field(0) => DetailFocus::Close,
            DetailFocus::Field(i) => DetailFocus::Field(i - 1),
            DetailFocus::Save => DetailFocus::Field(FIELD_LABELS.len() - 1),
            DetailFocus::Close => DetailFocus::Save,
        }
    }
}

/// What the sheet owner should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Handled,
    Ignored,
    Close,
}

/// Editable copy of a lead, alive only while its sheet is open
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDetailForm {
    pub fields: [InputField; 4],
    pub focus: DetailFocus,
}

impl LeadDetailForm {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            fields: [
                InputField::new(&lead.name),
                InputField::new(&lead.email),
                InputField::new(&lead.source),
                InputField::new(&lead.status),
            ],
            focus: DetailFocus::Field(0),
        }
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(InputField::value)
    }

    fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.focus {
            DetailFocus::Field(i) => self.fields.get_mut(i),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DetailOutcome {
        match key.code {
            KeyCode::Esc => DetailOutcome::Close,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                DetailOutcome::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                DetailOutcome::Handled
            }
            // Save has no persistence path: it only dismisses the sheet
            KeyCode::Enter => match self.focus {
                DetailFocus::Save | DetailFocus::Close => DetailOutcome::Close,
                DetailFocus::Field(_) => {
                    self.focus = self.focus.next();
                    DetailOutcome::Handled
                }
            },
            code => {
                let Some(field) = self.focused_field() else {
                    return DetailOutcome::Ignored;
                };
                match code {
                    KeyCode::Char(c) => field.insert(c),
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Delete => field.delete(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Home => field.home(),
                    KeyCode::End => field.end(),
                    _ => return DetailOutcome::Ignored,
                }
                DetailOutcome::Handled
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect) {
        let label_width = FIELD_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut lines = Vec::new();

        for (i, (name, field)) in FIELD_LABELS.iter().zip(self.fields.iter()).enumerate() {
            let focused = self.focus == DetailFocus::Field(i);
            let mut spans = vec![label(name, label_width)];
            spans.extend(field.spans(focused));
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(button(
            "Save changes",
            ButtonVariant::Primary,
            self.focus == DetailFocus::Save,
        )));

        f.render_widget(ratatui::widgets::Paragraph::new(lines), area);
    }
}

/// A lead and the slide-over bound to it
#[derive(Debug, Clone)]
pub struct LeadRow {
    pub lead: Lead,
    pub sheet: Sheet<LeadDetailForm>,
}

/// Leads table; each row owns an independent detail sheet
pub struct LeadsTable {
    pub rows: Vec<LeadRow>,
    pub selected: usize,
}

impl LeadsTable {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            rows: leads
                .into_iter()
                .map(|lead| LeadRow { lead, sheet: Sheet::new() })
                .collect(),
            selected: 0,
        }
    }

    /// "View Details" for the row at `index`
    pub fn open_details(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            debug!(lead_id = row.lead.id, "opening lead details");
            let lead = &row.lead;
            row.sheet.open_with(|| LeadDetailForm::from_lead(lead));
        }
    }

    pub fn close_details(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            debug!(lead_id = row.lead.id, "closing lead details");
            row.sheet.close();
        }
    }

    /// Row whose sheet is currently open, if any
    pub fn open_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.sheet.is_open())
    }

    pub fn row_cells(lead: &Lead) -> [&str; 4] {
        [
            lead.name.as_str(),
            lead.email.as_str(),
            lead.source.as_str(),
            lead.status.as_str(),
        ]
    }

    /// Draw the open sheet, if any, over the whole screen
    pub fn render_overlay(&self, f: &mut Frame, screen: Rect) {
        for row in &self.rows {
            let close_focused = row
                .sheet
                .content()
                .map(|form| form.focus == DetailFocus::Close)
                .unwrap_or(false);
            let header = SheetHeader {
                title: "Lead Details",
                description: "View and edit lead information",
                close_focused,
            };
            row.sheet
                .render(f, screen, header, |form, f, area| form.render(f, area));
        }
    }
}

impl View for LeadsTable {
    fn title(&self) -> &str {
        "Lead Management"
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let block = card(self.title(), Some("View and manage your leads"), focused);

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

        let rows = self.rows.iter().enumerate().map(|(i, row)| {
            let mut cells: Vec<Cell> = Self::row_cells(&row.lead)
                .into_iter()
                .map(|text| Cell::from(text.to_string()))
                .collect();
            let action = button("View Details", ButtonVariant::Outline, focused && i == self.selected);
            cells.push(Cell::from(Line::from(action)));
            Row::new(cells)
        });

        let widths = [
            Constraint::Min(12),
            Constraint::Min(18),
            Constraint::Min(12),
            Constraint::Min(10),
            Constraint::Length(16),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = TableState::default();
        if focused {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(table, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if let Some(index) = self.open_row() {
            let outcome = match self.rows[index].sheet.content_mut() {
                Some(form) => form.handle_key(key),
                None => DetailOutcome::Ignored,
            };
            if outcome == DetailOutcome::Close {
                self.close_details(index);
            }
            // Modal: swallow everything while open
            return Ok(true);
        }

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Ok(true)
            }
            KeyCode::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                Ok(true)
            }
            KeyCode::Enter => {
                self.open_details(self.selected);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn key_hints(&self) -> &'static str {
        if self.is_modal() {
            "Tab/↑/↓ move • Enter save/close • Esc close"
        } else {
            "↑/↓ select lead • Enter view details"
        }
    }

    fn is_modal(&self) -> bool {
        self.open_row().is_some()
    }
}
