use std::path::PathBuf;

use thiserror::Error;

/// One labelled value on the performance bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: u64,
}

/// Lead count for one acquisition channel
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSourceSample {
    pub name: &'static str,
    pub value: u64,
}

/// Lead record shown in the leads table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub source: String,
    pub status: String,
}

impl Lead {
    pub fn new(id: u32, name: &str, email: &str, source: &str, status: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            source: source.to_string(),
            status: status.to_string(),
        }
    }
}

/// A fixed set of options a select control cycles through
pub trait Choice: Copy + PartialEq + std::fmt::Debug + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    LeadSummary,
    PerformanceAnalysis,
    SourceBreakdown,
}

impl Choice for ReportType {
    const ALL: &'static [Self] = &[
        ReportType::LeadSummary,
        ReportType::PerformanceAnalysis,
        ReportType::SourceBreakdown,
    ];

    fn label(&self) -> &'static str {
        match self {
            ReportType::LeadSummary => "Lead Summary",
            ReportType::PerformanceAnalysis => "Performance Analysis",
            ReportType::SourceBreakdown => "Source Breakdown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDateRange {
    Last7Days,
    Last30Days,
    Last90Days,
    Custom,
}

impl Choice for ReportDateRange {
    const ALL: &'static [Self] = &[
        ReportDateRange::Last7Days,
        ReportDateRange::Last30Days,
        ReportDateRange::Last90Days,
        ReportDateRange::Custom,
    ];

    fn label(&self) -> &'static str {
        match self {
            ReportDateRange::Last7Days => "Last 7 days",
            ReportDateRange::Last30Days => "Last 30 days",
            ReportDateRange::Last90Days => "Last 90 days",
            ReportDateRange::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Csv,
}

impl Choice for ReportFormat {
    const ALL: &'static [Self] = &[ReportFormat::Pdf, ReportFormat::Csv];

    fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Csv => "CSV",
        }
    }
}

/// Current selection of the reporting tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub date_range: ReportDateRange,
    pub format: ReportFormat,
}

/// Terminal size used for headless rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl std::str::FromStr for Viewport {
    type Err = ConfigError;

    /// Parse `WIDTHxHEIGHT`, e.g. `120x40`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidViewport(s.to_string());
        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u16 = width.trim().parse().map_err(|_| invalid())?;
        let height: u16 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Viewport { width, height })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("viewport must look like WIDTHxHEIGHT, got {0:?}")]
    InvalidViewport(String),
}

pub const DEFAULT_WIDE_BREAKPOINT: u16 = 120;
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const DEFAULT_LOG_FILTER: &str = "ezymetrics=error";

/// Configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Terminal width (columns) from which the sidebar is pinned open
    pub wide_breakpoint: u16,
    pub tick_rate_ms: u64,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            wide_breakpoint: parse_positive(
                "EZYMETRICS_WIDE_BREAKPOINT",
                lookup("EZYMETRICS_WIDE_BREAKPOINT"),
                defaults.wide_breakpoint,
            )?,
            tick_rate_ms: parse_positive(
                "EZYMETRICS_TICK_RATE_MS",
                lookup("EZYMETRICS_TICK_RATE_MS"),
                defaults.tick_rate_ms,
            )?,
            log_filter: lookup("EZYMETRICS_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            log_file: lookup("EZYMETRICS_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_positive<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}
