//! Opening, editing and dismissing the lead detail sheet

use crossterm::event::KeyCode;
use ezymetrics::ui::Region;
use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::{app_for, press, rows_with, screen, type_text, WIDE};

#[test]
fn test_closed_sheet_renders_nothing() {
    let mut app = app_for(WIDE);
    let frame = screen(&mut app, WIDE);
    assert!(!frame.contains("Lead Details"));
    assert!(!frame.contains("Save changes"));
}

#[test]
fn test_view_details_opens_sheet_for_selected_lead() {
    let mut app = app_for(WIDE);
    // Performance -> Lead Sources -> Leads
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Region::Leads);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let frame = screen(&mut app, WIDE);
    assert!(frame.contains("Lead Details"));
    assert!(frame.contains("View and edit lead information"));
    assert!(frame.contains("jane@example.com"));
    assert!(frame.contains("Save changes"));
    assert_eq!(app.leads.open_row(), Some(1));
}

#[test]
fn test_save_changes_discards_edits() {
    let mut app = app_for(WIDE);
    app.focus = Region::Leads;
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "XYZ");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, ".org");
    assert!(screen(&mut app, WIDE).contains("John DoeXYZ"));

    // Email -> Source -> Status -> Save
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.leads.open_row(), None);
    let frame = screen(&mut app, WIDE);
    assert!(!frame.contains("Lead Details"));
    assert!(!frame.contains("XYZ"));
    assert!(!frame.contains(".org"));
    assert_eq!(rows_with(&frame, "John Doe").len(), 1);
    assert!(rows_with(&frame, "John Doe")[0].contains("john@example.com"));
}

#[test]
fn test_close_control_and_tab_stay_inside_sheet() {
    let mut app = app_for(WIDE);
    app.focus = Region::Leads;
    press(&mut app, KeyCode::Enter);

    // Tab moves within the sheet, not across panels
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus, Region::Leads);
    assert!(app.leads.open_row().is_some());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.leads.open_row(), None);
}
