use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use monthview::config::AppConfig;
use monthview::render::{Columns, MonthGrid, RenderOptions};

/// Print a calendar month as a week-aligned grid.
#[derive(Parser)]
#[command(name = "mv", version, about)]
struct Cli {
    /// Year to show (defaults to the current year).
    #[arg(allow_negative_numbers = true)]
    year: Option<i32>,

    /// Month to show, 1-12 (defaults to the current month).
    month: Option<i32>,

    /// First day of the week, 0 = Sunday .. 6 = Saturday (overrides the config file).
    #[arg(short, long)]
    first_week_day: Option<u32>,

    /// Path to a TOML config file instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave days of the neighbouring months blank.
    #[arg(long)]
    hide_overflow: bool,

    /// Align days in fixed-width columns instead of tabs.
    #[arg(long)]
    fixed: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None           => AppConfig::load()?,
    };
    let calendar = cfg.calendar(cli.first_week_day).context("invalid calendar settings")?;
    let labels   = cfg.labels().context("invalid labels")?;

    let month   = calendar.month(cli.year, cli.month);
    let options = RenderOptions {
        show_overflow:   !cli.hide_overflow,
        highlight_today: true,
        columns:         if cli.fixed { Columns::Fixed } else { Columns::Tabs },
    };
    tracing::info!("showing {month}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    MonthGrid::new(&month, &labels, options).write_to(&mut out)?;
    out.flush()?;
    Ok(())
}

// Logging goes to stderr so it never mixes with the grid. RUST_LOG wins over -v.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("monthview={level},mv={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
