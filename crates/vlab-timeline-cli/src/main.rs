//! vlab-timeline CLI - Project timeline report generator
//!
//! Writes the Virtual Lab LMS rollout timeline as a formatted spreadsheet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vlab_timeline_core::{timeline, ReportConfig, TimelineReport};
use vlab_timeline_render::ExcelRenderer;

#[derive(Parser)]
#[command(name = "vlab-timeline")]
#[command(author, version, about = "Project timeline spreadsheet generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report settings file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Spreadsheet output path
    #[arg(short, long, env = "VLAB_TIMELINE_OUTPUT", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the timeline spreadsheet (default)
    Export {
        /// Keep the title block and header visible while scrolling
        #[arg(long)]
        freeze_header: bool,
    },

    /// Print the aggregate statistics without writing a file
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    activities: usize,
    total_person_days: u32,
    average_engineers: String,
    period: String,
    sheet_name: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let report = TimelineReport::new(config, timeline::virtual_lab_timeline())
        .context("Failed to build timeline report")?;

    match cli.command {
        None => export(&report, false)?,
        Some(Commands::Export { freeze_header }) => export(&report, freeze_header)?,
        Some(Commands::Summary { format }) => print!("{}", summary(&report, format)?),
    }

    Ok(())
}

/// Log to stderr so stdout carries only the report lines
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Defaults, then the config file, then `--output` / `VLAB_TIMELINE_OUTPUT`
fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            ReportConfig::from_file(path)?
        }
        None => ReportConfig::default(),
    };

    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }

    Ok(config)
}

fn export(report: &TimelineReport, freeze_header: bool) -> Result<()> {
    let mut renderer = ExcelRenderer::new();
    if freeze_header {
        renderer = renderer.freeze_header();
    }

    let output = &report.config.output;
    renderer
        .save(report, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print!("{}", status_lines(report));
    Ok(())
}

fn status_lines(report: &TimelineReport) -> String {
    format!(
        "Excel file created successfully: {}\nTotal Person-Days: {}\nAverage Number of Engineers: {}\n",
        report.config.output.display(),
        report.summary.total_person_days,
        report.summary.average_label(),
    )
}

fn summary(report: &TimelineReport, format: SummaryFormat) -> Result<String> {
    let summary = &report.summary;
    match format {
        SummaryFormat::Text => Ok(format!(
            "Activities: {}\nPeriod: {}\nTotal Person-Days: {}\nAverage Number of Engineers: {}\n",
            summary.record_count,
            summary.period_label(),
            summary.total_person_days,
            summary.average_label(),
        )),
        SummaryFormat::Json => {
            let json = SummaryJson {
                activities: summary.record_count,
                total_person_days: summary.total_person_days,
                average_engineers: summary.average_label(),
                period: summary.period_label(),
                sheet_name: &report.config.sheet_name,
            };
            Ok(serde_json::to_string_pretty(&json)? + "\n")
        }
    }
}
