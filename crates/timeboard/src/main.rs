//! timeboard - Personal activity time-tracking dashboard

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::ExportFormat;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use timeboard_core::preferences::default_config_dir;
use timeboard_core::{card_views, CoreError, Dataset, Preferences, Timeframe};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "timeboard",
    version,
    about = "Personal activity time-tracking dashboard",
    long_about = "Shows how many hours went into each activity (Work, Play, Study, ...)\n\
                  for the current day, week or month, next to the previous period.\n\
                  \n\
                  Examples:\n\
                    timeboard                              # Run TUI (default)\n\
                    timeboard --timeframe weekly           # Start on the weekly report\n\
                    timeboard --data hours.yaml show       # Print a table and exit\n\
                    timeboard show --json                  # Print cards as JSON\n\
                    timeboard export --format html --output report.html\n\
                  \n\
                  Environment Variables:\n\
                    TIMEBOARD_DATA                         # Dataset file (JSON or YAML)\n\
                    TIMEBOARD_CONFIG_DIR                   # Preferences directory\n\
                    TIMEBOARD_NO_COLOR                     # Disable ANSI colors\n\
                    TIMEBOARD_LOG                          # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Dataset file (.json, .yaml, .yml); built-in sample data if omitted
    #[arg(long, env = "TIMEBOARD_DATA")]
    data: Option<PathBuf>,

    /// Initial timeframe (daily|weekly|monthly)
    #[arg(long, short = 't', default_value = "daily")]
    timeframe: Timeframe,

    /// Preferences directory (default: <config dir>/timeboard)
    #[arg(long, env = "TIMEBOARD_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(
        long,
        env = "TIMEBOARD_NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print the cards for the selected timeframe and exit
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the dashboard to a file
    Export {
        /// Output format
        #[arg(long, short = 'f', value_enum)]
        format: ExportFormat,
        /// Destination file
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Tui);

    init_logging(matches!(mode, Mode::Tui), cli.no_color)?;

    let dataset = match load_dataset(cli.data.as_deref()) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {}", hint);
            }
            std::process::exit(1);
        }
    };

    match mode {
        Mode::Tui => run_tui(dataset, cli.timeframe, cli.config_dir)?,
        Mode::Show { json } => {
            let cards = card_views(&dataset, cli.timeframe);
            println!(
                "{}",
                cli::format_card_table(&cards, cli.timeframe, json, cli.no_color)
            );
        }
        Mode::Export { format, output } => {
            cli::export(&dataset, cli.timeframe, format, &output)
                .with_context(|| format!("Failed to export to {}", output.display()))?;
            eprintln!("✓ Exported {} report to {}", cli.timeframe, output.display());
        }
    }

    Ok(())
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset, CoreError> {
    match path {
        Some(path) => Dataset::load(path),
        None => {
            debug!("No dataset file given, using built-in sample data");
            Ok(Dataset::builtin())
        }
    }
}

fn run_tui(dataset: Dataset, timeframe: Timeframe, config_dir: Option<PathBuf>) -> Result<()> {
    let config_dir = config_dir.or_else(default_config_dir);
    let preferences = config_dir
        .as_deref()
        .map(Preferences::load)
        .unwrap_or_default();

    let app = timeboard_tui::App::new(Arc::new(dataset))
        .with_timeframe(timeframe)
        .with_preferences(preferences, config_dir);

    timeboard_tui::run(app)?;

    info!("Dashboard closed");
    Ok(())
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in that mode logs go to
/// `<cache dir>/timeboard/timeboard.log` instead of stderr.
fn init_logging(tui: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("TIMEBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(!no_color),
            )
            .init();
        return Ok(());
    }

    // No cache dir: stay silent rather than draw over the TUI
    let Some(log_dir) = dirs::cache_dir().map(|d| d.join("timeboard")) else {
        return Ok(());
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join("timeboard.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["timeboard"]).unwrap();
        assert_eq!(cli.timeframe, Timeframe::Daily);
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_cli_timeframe_flag() {
        let cli = Cli::try_parse_from(["timeboard", "--timeframe", "Weekly", "show", "--json"])
            .unwrap();
        assert_eq!(cli.timeframe, Timeframe::Weekly);
        assert!(matches!(cli.mode, Some(Mode::Show { json: true })));
    }

    #[test]
    fn test_no_color_accepts_conventional_env_values() {
        // Only test in this binary that touches TIMEBOARD_NO_COLOR
        std::env::set_var("TIMEBOARD_NO_COLOR", "1");
        let enabled = Cli::try_parse_from(["timeboard"]).map(|cli| cli.no_color);
        std::env::set_var("TIMEBOARD_NO_COLOR", "0");
        let disabled = Cli::try_parse_from(["timeboard"]).map(|cli| cli.no_color);
        std::env::remove_var("TIMEBOARD_NO_COLOR");

        assert!(enabled.unwrap());
        assert!(!disabled.unwrap());
        assert!(Cli::try_parse_from(["timeboard", "--no-color"]).unwrap().no_color);
    }

    #[test]
    fn test_cli_rejects_unknown_timeframe() {
        assert!(Cli::try_parse_from(["timeboard", "--timeframe", "yearly"]).is_err());
    }

    #[test]
    fn test_cli_export_args() {
        let cli = Cli::try_parse_from([
            "timeboard",
            "export",
            "--format",
            "markdown",
            "--output",
            "report.md",
        ])
        .unwrap();
        match cli.mode {
            Some(Mode::Export { format, output }) => {
                assert_eq!(format, ExportFormat::Markdown);
                assert_eq!(output, PathBuf::from("report.md"));
            }
            _ => panic!("expected export mode"),
        }
    }

    #[test]
    fn test_load_dataset_missing_file_has_hint() {
        let err = load_dataset(Some(Path::new("/nonexistent/hours.json"))).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_load_dataset_defaults_to_builtin() {
        let dataset = load_dataset(None).unwrap();
        assert_eq!(dataset.len(), 6);
    }
}
