//! Sidebar and sheet open/close state machines driven through the root

use assert_matches::assert_matches;
use crossterm::event::KeyCode;
use ezymetrics::ui::{Region, Visibility};
use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::{app_for, press, NARROW, WIDE};

#[test]
fn test_sidebar_open_close_cycle() {
    let mut app = app_for(NARROW);
    assert_eq!(app.sidebar, Visibility::Closed);
    assert!(!app.sidebar_visible());

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.sidebar, Visibility::Open);
    assert_eq!(app.focus, Region::Sidebar);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.sidebar, Visibility::Closed);
    assert_matches!(app.focus, Region::Notifications);

    // Repeated actions never leave the two states
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.sidebar, Visibility::Closed);
}

#[test]
fn test_wide_viewport_overrides_flag() {
    let mut app = app_for(WIDE);
    assert_eq!(app.sidebar, Visibility::Closed);
    assert!(app.sidebar_visible());

    // No menu button on wide terminals
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.sidebar, Visibility::Closed);

    // Shrinking hides it again and moves focus off it
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Region::Sidebar);
    app.resize(NARROW.width);
    assert!(!app.sidebar_visible());
    assert_eq!(app.focus, Region::Notifications);
}

#[test]
fn test_sheet_for_one_lead_leaves_others_closed() {
    let mut app = app_for(WIDE);
    app.focus = Region::Leads;
    press(&mut app, KeyCode::Enter);

    let open: Vec<bool> = app.leads.rows.iter().map(|r| r.sheet.is_open()).collect();
    assert_eq!(open, vec![true, false, false]);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let open: Vec<bool> = app.leads.rows.iter().map(|r| r.sheet.is_open()).collect();
    assert_eq!(open, vec![false, false, true]);
}

#[test]
fn test_quit_keys() {
    let mut app = app_for(WIDE);
    app.focus = Region::Leads;
    press(&mut app, KeyCode::Enter);

    // Inside the sheet `q` is text
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.leads.rows[0].sheet.content().and_then(|f| f.value(0)), Some("John Doeq"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
