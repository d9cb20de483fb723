//! Main test entry point for ezymetrics

mod common;
mod integration;
mod unit;

use test_log::test;

/// Test that common utilities are available
#[test]
fn test_common_utilities() {
    use common::{app_for, logging, screen, WIDE};

    logging::log_test_step("Testing common utilities");

    let mut app = app_for(WIDE);
    assert!(app.is_wide());
    assert!(!screen(&mut app, WIDE).is_empty());

    logging::log_test_step("Common utilities test completed");
}
