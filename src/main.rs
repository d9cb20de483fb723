use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use ezymetrics::logging::init_logging;
use ezymetrics::models::{Config, Viewport};
use ezymetrics::ui::{self, snapshot::render_snapshot, DashboardApp};

/// EzyMetrics marketing dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "ezymetrics", version, about)]
struct Cli {
    /// Columns from which the sidebar stays pinned open
    #[arg(long)]
    wide_breakpoint: Option<u16>,

    /// Input poll interval in milliseconds
    #[arg(long)]
    tick_rate_ms: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a single frame at WIDTHxHEIGHT and exit
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    snapshot: Option<Viewport>,
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(breakpoint) = self.wide_breakpoint {
            config.wide_breakpoint = breakpoint;
        }
        if let Some(tick) = self.tick_rate_ms {
            config.tick_rate_ms = tick.max(1);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.apply(Config::from_env()?);
    init_logging(&config)?;

    if let Some(viewport) = cli.snapshot {
        let mut app = DashboardApp::new(config);
        println!("{}", render_snapshot(&mut app, viewport)?);
        return Ok(());
    }

    ui::run_app(config)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "ezymetrics",
            "--wide-breakpoint",
            "100",
            "--snapshot",
            "100x30",
        ]);
        assert_eq!(cli.snapshot, Some(Viewport { width: 100, height: 30 }));

        let config = cli.apply(Config::default());
        assert_eq!(config.wide_breakpoint, 100);
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);
    }

    #[test]
    fn test_cli_rejects_bad_snapshot() {
        assert!(Cli::try_parse_from(["ezymetrics", "--snapshot", "wide"]).is_err());
    }
}
