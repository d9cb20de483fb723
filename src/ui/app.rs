use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::charts::{LeadSourceChart, PerformanceChart};
use super::components::{button, ButtonVariant};
use super::events::{is_interrupt, EventSource, TuiEvent};
use super::layout::DashboardLayout;
use super::leads::LeadsTable;
use super::report::ReportForm;
use super::sidebar::SidebarNav;
use super::state::{Region, Visibility, VisibilityAction};
use super::view::View;
use crate::data;
use crate::models::Config;

/// Dashboard root: owns the sidebar flag, focus and every panel
pub struct DashboardApp {
    pub config: Config,
    pub sidebar: Visibility,
    pub nav: SidebarNav,
    pub performance: PerformanceChart,
    pub lead_sources: LeadSourceChart,
    pub leads: LeadsTable,
    pub report: ReportForm,
    pub focus: Region,
    pub viewport_width: u16,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sidebar: Visibility::Closed,
            nav: SidebarNav::new(),
            performance: PerformanceChart::new(data::performance_data()),
            lead_sources: LeadSourceChart::new(data::lead_source_data()),
            leads: LeadsTable::new(data::leads_data()),
            report: ReportForm::new(),
            focus: Region::Performance,
            viewport_width: 0,
            should_quit: false,
        }
    }

    pub fn is_wide(&self) -> bool {
        self.viewport_width >= self.config.wide_breakpoint
    }

    /// Wide terminals always show the sidebar, whatever the flag says
    pub fn sidebar_visible(&self) -> bool {
        self.is_wide() || self.sidebar.is_open()
    }

    pub fn resize(&mut self, width: u16) {
        self.viewport_width = width;
        self.nav.pinned = self.is_wide();
        self.ensure_focus_visible();
    }

    pub fn set_sidebar(&mut self, action: VisibilityAction) {
        let next = self.sidebar.apply(action);
        if next != self.sidebar {
            debug!(?next, "sidebar visibility changed");
        }
        self.sidebar = next;

        if action == VisibilityAction::Open {
            self.focus = Region::Sidebar;
        }
        self.ensure_focus_visible();
    }

    fn ensure_focus_visible(&mut self) {
        if self.focus == Region::Sidebar && !self.sidebar_visible() {
            self.focus = Region::Notifications;
        }
    }

    fn focused_view(&self) -> Option<&dyn View> {
        match self.focus {
            Region::Sidebar => Some(&self.nav as &dyn View),
            Region::Notifications => None,
            Region::Performance => Some(&self.performance as &dyn View),
            Region::LeadSources => Some(&self.lead_sources as &dyn View),
            Region::Leads => Some(&self.leads as &dyn View),
            Region::Report => Some(&self.report as &dyn View),
        }
    }

    fn focused_view_mut(&mut self) -> Option<&mut dyn View> {
        match self.focus {
            Region::Sidebar => Some(&mut self.nav as &mut dyn View),
            Region::Notifications => None,
            Region::Performance => Some(&mut self.performance as &mut dyn View),
            Region::LeadSources => Some(&mut self.lead_sources as &mut dyn View),
            Region::Leads => Some(&mut self.leads as &mut dyn View),
            Region::Report => Some(&mut self.report as &mut dyn View),
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let screen = f.area();
        self.resize(screen.width);

        let layout = DashboardLayout::new(
            screen,
            self.is_wide(),
            self.sidebar.is_open(),
            self.leads.rows.len() as u16,
        );
        let modal = self.leads.is_modal();
        let focused = |region: Region| !modal && self.focus == region;

        self.render_header(f, layout.header, focused(Region::Notifications));
        self.performance.render(f, layout.performance, focused(Region::Performance));
        self.lead_sources.render(f, layout.lead_sources, focused(Region::LeadSources));
        self.leads.render(f, layout.leads, focused(Region::Leads));
        self.report.render(f, layout.report, focused(Region::Report));
        self.render_status_bar(f, layout.status_bar);

        // Sidebar after the page so the narrow overlay sits on top
        if let Some(area) = layout.sidebar {
            self.nav.render(f, area, focused(Region::Sidebar));
        }

        self.leads.render_overlay(f, screen);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, bell_focused: bool) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(8), Constraint::Min(0), Constraint::Length(8)])
            .split(inner);

        if !self.is_wide() {
            f.render_widget(
                Paragraph::new(Line::from(button("≡", ButtonVariant::Ghost, false))),
                columns[0],
            );
        }

        f.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    "Dashboard",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))
                .centered(),
            ),
            columns[1],
        );

        f.render_widget(
            Paragraph::new(Line::from(button("🔔", ButtonVariant::Ghost, bell_focused)).right_aligned()),
            columns[2],
        );
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::Gray));

        let mut spans = if self.leads.is_modal() {
            vec![text(self.leads.key_hints())]
        } else {
            let mut spans = vec![
                text("Press "),
                key("Tab", Color::Yellow),
                text(" to switch panels • "),
            ];
            if !self.is_wide() {
                spans.push(key("M", Color::Green));
                spans.push(text(" for menu • "));
            }
            spans.push(key("Q", Color::Red));
            spans.push(text(" to quit"));
            spans
        };

        if !self.leads.is_modal() {
            if let Some(hints) = self.focused_view().map(|v| v.key_hints()).filter(|h| !h.is_empty()) {
                spans.push(text(" • "));
                spans.push(Span::styled(hints, Style::default().fg(Color::Cyan)));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, area);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            self.should_quit = true;
            return Ok(());
        }

        // An open sheet is modal
        if self.leads.is_modal() {
            self.leads.handle_key(key)?;
            return Ok(());
        }

        if let Some(view) = self.focused_view_mut() {
            if view.handle_key(key)? {
                return Ok(());
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next(self.sidebar_visible());
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous(self.sidebar_visible());
            }
            KeyCode::Char('m') | KeyCode::Char('M') if !self.is_wide() => {
                if self.sidebar.is_open() && self.focus == Region::Sidebar {
                    self.set_sidebar(VisibilityAction::Close);
                } else {
                    self.set_sidebar(VisibilityAction::Open);
                }
            }
            KeyCode::Esc if self.sidebar.is_open() => {
                self.set_sidebar(VisibilityAction::Close);
            }
            KeyCode::Enter if self.focus == Region::Notifications => {
                debug!("notifications button pressed; no action wired");
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply one event; returns true when the app should exit
    pub fn handle_event(&mut self, event: TuiEvent) -> Result<bool> {
        match event {
            TuiEvent::Key(key) => self.handle_key_event(key)?,
            TuiEvent::Resize(width, _) => self.resize(width),
            TuiEvent::Tick => {}
        }
        Ok(self.should_quit)
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut DashboardApp) -> Result<()> {
    let events = EventSource::new(Duration::from_millis(app.config.tick_rate_ms));
    loop {
        terminal.draw(|f| app.draw(f))?;
        if app.handle_event(events.next()?)? {
            return Ok(());
        }
    }
}

/// Run the main TUI application
pub fn run_app(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = DashboardApp::new(config);
    app.resize(terminal.size()?.width);
    info!(width = app.viewport_width, wide = app.is_wide(), "dashboard started");

    let result = event_loop(&mut terminal, &mut app);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("dashboard closed");
    result
}
