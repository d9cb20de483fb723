//! Common test utilities and helpers

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ezymetrics::models::{Config, Viewport};
use ezymetrics::ui::{snapshot::render_snapshot, DashboardApp};

pub const WIDE: Viewport = Viewport { width: 140, height: 45 };
pub const NARROW: Viewport = Viewport { width: 100, height: 45 };

/// Fresh dashboard with the default config, sized for `viewport`
pub fn app_for(viewport: Viewport) -> DashboardApp {
    let mut app = DashboardApp::new(Config::default());
    app.resize(viewport.width);
    app
}

pub fn press(app: &mut DashboardApp, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handling never fails");
}

pub fn type_text(app: &mut DashboardApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render one frame and return it as text
pub fn screen(app: &mut DashboardApp, viewport: Viewport) -> String {
    render_snapshot(app, viewport).expect("headless render")
}

/// Screen rows containing `needle`
pub fn rows_with<'a>(screen: &'a str, needle: &str) -> Vec<&'a str> {
    screen.lines().filter(|l| l.contains(needle)).collect()
}

/// Logging utilities for tests
pub mod logging {
    use tracing::info;

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }
}
