//! Anomaly chart view state tool.
//!
//! Reads an input document (`{ anomaly, current, predicted }`), projects it
//! and writes the view state a chart widget binds to.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use anomaly_chart::view::axis::TimeTick;
use anomaly_chart::{ChartConfig, Message, TimeZoneSetting, ViewStateProjector, mock};
use anomaly_chart_common::{Format, ProjectionInput, decode_auto, encode, init_tracing};

/// Project anomaly data into chart view state.
#[derive(Parser, Debug)]
#[command(name = "anomaly-chart")]
#[command(about = "Project anomaly data into chart view state")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Override the configured time zone (utc, local, +HH:MM, America/New_York).
    #[arg(long, global = true)]
    timezone: Option<TimeZoneSetting>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project an input document into view state.
    Project {
        /// Input document (JSON or CBOR). Sample data is used when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (json, cbor).
        #[arg(short, long, default_value = "json")]
        format: Format,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Print x-axis tick labels for timestamps (epoch milliseconds).
    Tick {
        #[arg(required = true, allow_negative_numbers = true)]
        timestamps: Vec<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(timezone) = args.timezone {
        config.timezone = timezone;
    }

    init_tracing(&config.logging)?;

    match args.command {
        Command::Project {
            input,
            format,
            output,
            pretty,
        } => project(&config, input.as_deref(), format, output.as_deref(), pretty),
        Command::Tick { timestamps } => {
            let tick = TimeTick::new(config.timezone);
            for ts in timestamps {
                println!("{}\t{}", ts, tick.format(ts));
            }
            Ok(())
        }
    }
}

fn project(
    config: &ChartConfig,
    input: Option<&Path>,
    format: Format,
    output: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let document = match input {
        Some(path) => read_input(path)?,
        None => {
            info!("No input given, projecting sample data");
            mock::sample_input()
        }
    };

    let mut projector = ViewStateProjector::from_config(config);
    projector.update(Message::InputLoaded(document));
    let state = projector.snapshot();

    info!(
        anomaly = state.anomaly,
        series = state.series.len(),
        timezone = %config.timezone,
        "Projected view state"
    );

    let bytes = match format {
        Format::Json if pretty => serde_json::to_vec_pretty(&state)?,
        _ => encode(&state, format)?,
    };

    match output {
        Some(path) => std::fs::write(path, &bytes)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            if format == Format::Json {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<ProjectionInput> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    decode_auto(&data).with_context(|| format!("Failed to decode '{}'", path.display()))
}
