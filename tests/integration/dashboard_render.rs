//! Full-frame rendering of the dashboard through the headless backend

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::{app_for, press, rows_with, screen, NARROW, WIDE};

#[test]
fn test_wide_frame_shows_every_section() {
    let mut app = app_for(WIDE);
    let frame = screen(&mut app, WIDE);

    for text in [
        "EzyMetrics",
        "Dashboard",
        "Leads",
        "Analytics",
        "Reports",
        "Performance Overview",
        "Lead Sources",
        "Lead Management",
        "View and manage your leads",
        "Reporting Tool",
        "Generate custom reports",
        "Report Type",
        "Lead Summary",
        "Last 7 days",
        "PDF",
        "Generate Report",
    ] {
        assert!(frame.contains(text), "missing {:?} in:\n{}", text, frame);
    }
}

#[test]
fn test_one_table_row_per_lead_in_order() {
    let mut app = app_for(WIDE);
    let frame = screen(&mut app, WIDE);

    assert_eq!(rows_with(&frame, "View Details").len(), 3);

    let order: Vec<usize> = ["New", "Contacted", "Qualified"]
        .iter()
        .map(|status| {
            frame
                .lines()
                .position(|l| l.contains("View Details") && l.contains(status))
                .unwrap_or_else(|| panic!("no row with status {}", status))
        })
        .collect();
    assert!(order[0] < order[1] && order[1] < order[2], "rows out of order: {:?}", order);

    let john = rows_with(&frame, "John Doe");
    assert_eq!(john.len(), 1);
    assert!(john[0].contains("john@example.com") && john[0].contains("Website"));
}

#[test]
fn test_one_bar_label_per_month() {
    let mut app = app_for(WIDE);
    let frame = screen(&mut app, WIDE);

    let months = ["Jan", "Feb", "Mar", "Apr", "May"];
    let axis = frame
        .lines()
        .find(|l| months.iter().all(|m| l.contains(m)))
        .expect("a row with every month label");
    for month in months {
        assert_eq!(axis.matches(month).count(), 1, "label {} should appear once", month);
    }
}

#[test]
fn test_chart_tooltip_follows_selection() {
    let mut app = app_for(WIDE);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);

    let frame = screen(&mut app, WIDE);
    assert!(frame.contains("Mar: 500"));
}

#[test]
fn test_narrow_sidebar_hidden_until_opened() {
    let mut app = app_for(NARROW);
    assert!(!screen(&mut app, NARROW).contains("EzyMetrics"));

    press(&mut app, KeyCode::Char('m'));
    assert!(screen(&mut app, NARROW).contains("EzyMetrics"));

    press(&mut app, KeyCode::Esc);
    assert!(!screen(&mut app, NARROW).contains("EzyMetrics"));
}
