use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod error;
mod input;
mod output;

use error::CliResult;
use gantt_calendar::{
    CalendarProps, DEFAULT_COLUMN_WIDTH, DEFAULT_HEADER_HEIGHT, DEFAULT_LOCALE_TAG, DateFormatter,
    DateSetup, ViewMode, compute_header,
};
use input::{parse_axis_date, require_positive};
use output::{HeaderReport, format_header_json, format_header_table, preview_text, render_preview};

/// How the computed header is printed
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Aligned tables of both bands
    Table,
    /// Pretty-printed JSON report
    Json,
    /// Text rendering of the header band
    Preview,
}

/// ghdr - Render the date header of a Gantt chart
#[derive(Parser)]
#[command(name = "ghdr")]
#[command(version = "0.1.0")]
#[command(about = "Render the date header of a Gantt chart", long_about = None)]
struct Args {
    /// Start of the task span (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_axis_date)]
    from: NaiveDateTime,

    /// End of the task span (defaults to --from)
    #[arg(long, value_parser = parse_axis_date)]
    to: Option<NaiveDateTime>,

    /// View mode: hour, quarter-day, half-day, day, week, month, quarter-year, year
    #[arg(long, env = "GHDR_VIEW", default_value = "day")]
    view: ViewMode,

    /// Locale tag for month and weekday names (e.g. en-US, de, fr-FR)
    #[arg(long, env = "GHDR_LOCALE", default_value = DEFAULT_LOCALE_TAG)]
    locale: String,

    /// Width of one axis column in pixels
    #[arg(long, env = "GHDR_COLUMN_WIDTH", default_value_t = DEFAULT_COLUMN_WIDTH)]
    column_width: f64,

    /// Height of the header band in pixels
    #[arg(long, env = "GHDR_HEADER_HEIGHT", default_value_t = DEFAULT_HEADER_HEIGHT)]
    header_height: f64,

    /// Lay the header out right-to-left
    #[arg(long, env = "GHDR_RTL")]
    rtl: bool,

    /// Number of view-mode steps of padding before the span
    #[arg(long, default_value_t = 1)]
    pre_steps: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Width of the preview in terminal cells
    #[arg(long, default_value_t = 120)]
    preview_width: u16,
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=debug` - show seeding and header computation details
/// - `RUST_LOG=warn` - show locale fallbacks only (default)
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> CliResult<()> {
    let args = Args::parse();
    let output = run_with_args(&args)?;
    println!("{}", output);
    Ok(())
}

/// Seed the axis, compute the header, and format it as requested
fn run_with_args(args: &Args) -> CliResult<String> {
    let column_width = require_positive("column-width", args.column_width)?;
    let header_height = require_positive("header-height", args.header_height)?;
    let formatter = DateFormatter::new(&args.locale)?;

    let to = args.to.unwrap_or(args.from);
    let setup = DateSetup::for_range(args.from, to, args.view, args.pre_steps)?;

    let props = CalendarProps {
        column_width,
        header_height,
        rtl: args.rtl,
        ..CalendarProps::default()
    };
    let header = compute_header(&setup, &formatter, &props);
    debug!(
        locale = formatter.tag(),
        format = ?args.format,
        width = header.width,
        "rendering header"
    );

    match args.format {
        OutputFormat::Table => Ok(format_header_table(&header)),
        OutputFormat::Json => format_header_json(&HeaderReport {
            locale: formatter.tag(),
            view_mode: setup.view_mode,
            dates: &setup.dates,
            header: &header,
        }),
        OutputFormat::Preview => Ok(preview_text(&render_preview(&header, args.preview_width))),
    }
}
