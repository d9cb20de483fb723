use std::f64::consts::TAU;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Paragraph, Wrap,
    },
    Frame,
};

use super::components::{card, MUTED};
use super::view::View;
use crate::data::{slice_color, BAR_COLOR};
use crate::models::{ChartPoint, LeadSourceSample};

const BAR_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 9;

/// Move a wrapping selection index one step left or right
fn step_selection(selected: usize, len: usize, key: KeyCode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        KeyCode::Left => Some(if selected == 0 { len - 1 } else { selected - 1 }),
        KeyCode::Right => Some((selected + 1) % len),
        _ => None,
    }
}

fn tooltip_line(name: &str, value: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(MUTED)),
        Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Monthly performance as a vertical bar chart
pub struct PerformanceChart {
    pub data: Vec<ChartPoint>,
    pub selected: usize,
}

impl PerformanceChart {
    pub fn new(data: Vec<ChartPoint>) -> Self {
        Self { data, selected: 0 }
    }

    /// One bar per data point, the selected one highlighted when focused
    pub fn bars(&self, focused: bool) -> Vec<Bar<'static>> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let style = if focused && i == self.selected {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(BAR_COLOR)
                };
                Bar::default()
                    .label(Line::from(point.name))
                    .value(point.value)
                    .style(style)
                    .value_style(Style::default().fg(Color::Black).bg(BAR_COLOR))
            })
            .collect()
    }

    /// Text of the hover-tooltip analog for the selected bar
    pub fn tooltip(&self) -> Option<String> {
        self.data
            .get(self.selected)
            .map(|p| format!("{}: {}", p.name, p.value))
    }

    fn bar_width(&self, available: u16) -> u16 {
        let n = self.data.len() as u16;
        if n == 0 {
            return 1;
        }
        let gaps = BAR_GAP * n.saturating_sub(1);
        (available.saturating_sub(gaps) / n).clamp(1, MAX_BAR_WIDTH)
    }
}

impl View for PerformanceChart {
    fn title(&self) -> &str {
        "Performance Overview"
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let block = card(self.title(), None, focused);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let bars = self.bars(focused);
        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(self.bar_width(chunks[0].width))
            .bar_gap(BAR_GAP)
            .label_style(Style::default().fg(MUTED));
        f.render_widget(chart, chunks[0]);

        let footer = match (focused, self.data.get(self.selected)) {
            (true, Some(point)) => tooltip_line(point.name, point.value),
            _ => Line::from(vec![
                Span::styled("■ ", Style::default().fg(BAR_COLOR)),
                Span::styled("value", Style::default().fg(MUTED)),
            ]),
        };
        f.render_widget(Paragraph::new(footer.centered()), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match step_selection(self.selected, self.data.len(), key.code) {
            Some(next) => {
                self.selected = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn key_hints(&self) -> &'static str {
        "←/→ inspect bar"
    }
}

/// Angular extent of one pie slice, as fractions of a full turn
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: u64,
    pub start: f64,
    pub sweep: f64,
    pub color: Color,
}

/// Slice geometry for `data`. Sweeps sum to 1; a zero total yields no slices.
pub fn pie_slices(data: &[LeadSourceSample]) -> Vec<PieSlice> {
    let total: u64 = data.iter().map(|d| d.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    data.iter()
        .enumerate()
        .map(|(i, sample)| {
            let sweep = sample.value as f64 / total as f64;
            let slice = PieSlice {
                label: sample.name,
                value: sample.value,
                start,
                sweep,
                color: slice_color(i),
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Points filling a slice of a circle of `radius`, counter-clockwise from 3 o'clock
pub fn slice_points(slice: &PieSlice, radius: f64, rings: usize) -> Vec<(f64, f64)> {
    if slice.sweep <= 0.0 || rings == 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    for ring in 1..=rings {
        let r = radius * ring as f64 / rings as f64;
        // Denser arcs on outer rings keep the fill even
        let arcs = ((slice.sweep * TAU * r) * 24.0).ceil().max(1.0) as usize;
        for step in 0..=arcs {
            let angle = TAU * (slice.start + slice.sweep * step as f64 / arcs as f64);
            points.push((r * angle.cos(), r * angle.sin()));
        }
    }
    points
}

/// Lead counts by source as a pie chart with legend
pub struct LeadSourceChart {
    pub data: Vec<LeadSourceSample>,
    pub selected: usize,
}

impl LeadSourceChart {
    pub fn new(data: Vec<LeadSourceSample>) -> Self {
        Self { data, selected: 0 }
    }

    pub fn slices(&self) -> Vec<PieSlice> {
        pie_slices(&self.data)
    }

    pub fn tooltip(&self) -> Option<String> {
        self.data
            .get(self.selected)
            .map(|s| format!("{}: {}", s.name, s.value))
    }

    fn legend(&self, focused: bool) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, sample) in self.data.iter().enumerate() {
            let text_style = if focused && i == self.selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(MUTED)
            };
            spans.push(Span::styled("■ ", Style::default().fg(slice_color(i))));
            spans.push(Span::styled(sample.name, text_style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl View for LeadSourceChart {
    fn title(&self) -> &str {
        "Lead Sources"
    }

    fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let block = card(self.title(), None, focused);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Pie
                Constraint::Length(2), // Legend
                Constraint::Length(1), // Tooltip
            ])
            .split(inner);

        let canvas_area = chunks[0];
        if canvas_area.width > 0 && canvas_area.height > 0 {
            let slices = self.slices();
            let selected = if focused { Some(self.selected) } else { None };
            let filled: Vec<(Vec<(f64, f64)>, Color)> = slices
                .iter()
                .enumerate()
                .map(|(i, slice)| {
                    // Selected slice pops out slightly
                    let radius = if selected == Some(i) { 1.0 } else { 0.9 };
                    (slice_points(slice, radius, 24), slice.color)
                })
                .collect();

            // Braille dots are roughly square: 2 per column, 4 per row
            let x_half = 1.1 * (canvas_area.width as f64 * 2.0) / (canvas_area.height as f64 * 4.0);
            let canvas = Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([-x_half, x_half])
                .y_bounds([-1.1, 1.1])
                .paint(|ctx| {
                    for (coords, color) in &filled {
                        ctx.draw(&Points { coords, color: *color });
                    }
                });
            f.render_widget(canvas, canvas_area);
        }

        f.render_widget(
            Paragraph::new(self.legend(focused).centered()).wrap(Wrap { trim: true }),
            chunks[1],
        );

        if focused {
            if let Some(sample) = self.data.get(self.selected) {
                f.render_widget(
                    Paragraph::new(tooltip_line(sample.name, sample.value).centered()),
                    chunks[2],
                );
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match step_selection(self.selected, self.data.len(), key.code) {
            Some(next) => {
                self.selected = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn key_hints(&self) -> &'static str {
        "←/→ inspect slice"
    }
}
