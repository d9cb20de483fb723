//! Built-in sample data backing the dashboard. Nothing here changes at runtime.

use ratatui::style::Color;

use crate::models::{ChartPoint, Lead, LeadSourceSample};

/// Bar fill for the performance chart (#8884d8)
pub const BAR_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

/// Pie slice palette, applied by index and cycled
pub const SLICE_COLORS: [Color; 4] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
];

/// Color for the pie slice at `index`
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

pub fn performance_data() -> Vec<ChartPoint> {
    vec![
        ChartPoint { name: "Jan", value: 400 },
        ChartPoint { name: "Feb", value: 300 },
        ChartPoint { name: "Mar", value: 500 },
        ChartPoint { name: "Apr", value: 280 },
        ChartPoint { name: "May", value: 590 },
    ]
}

pub fn lead_source_data() -> Vec<LeadSourceSample> {
    vec![
        LeadSourceSample { name: "Website", value: 400 },
        LeadSourceSample { name: "Social Media", value: 300 },
        LeadSourceSample { name: "Referral", value: 300 },
        LeadSourceSample { name: "Direct", value: 200 },
    ]
}

pub fn leads_data() -> Vec<Lead> {
    vec![
        Lead::new(1, "John Doe", "john@example.com", "Website", "New"),
        Lead::new(2, "Jane Smith", "jane@example.com", "Social Media", "Contacted"),
        Lead::new(3, "Bob Johnson", "bob@example.com", "Referral", "Qualified"),
    ]
}
