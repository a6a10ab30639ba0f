//! Reframe CLI — Command-line interface for recording and examining
//! crop sessions.
//!
//! Usage:
//!   reframe record [OPTIONS]     Record a scripted synthetic session
//!   reframe inspect <PATH>       Summarize an exported session
//!   reframe validate <PATH>      Check an exported session document
//!   reframe replay <PATH>        Print replay transform instructions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod synthetic;

#[derive(Parser)]
#[command(
    name = "reframe",
    about = "Crop-region recording for video reframing",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a scripted synthetic session and export it
    Record {
        /// Output file path
        #[arg(short, long, default_value = "video-crop-data.json")]
        output: PathBuf,

        /// Aspect ratio as W:H
        #[arg(long, default_value = "9:16")]
        ratio: String,

        /// Displayed video width in pixels
        #[arg(long, default_value = "960")]
        width: f64,

        /// Displayed video height in pixels
        #[arg(long, default_value = "540")]
        height: f64,

        /// Recording length in seconds
        #[arg(long, default_value = "5.0")]
        duration: f64,

        /// Sampling interval in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,

        /// Playback rate for the scripted media
        #[arg(long, default_value = "1.0")]
        rate: f64,
    },

    /// Show summary information for an exported session
    Inspect {
        /// Path to the exported JSON document
        path: PathBuf,
    },

    /// Validate an exported session document
    Validate {
        /// Path to the exported JSON document
        path: PathBuf,
    },

    /// Print replay transform instructions for an exported session
    Replay {
        /// Path to the exported JSON document
        path: PathBuf,

        /// Replay frame rate
        #[arg(long, default_value = "30.0")]
        fps: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    reframe_common::logging::init_logging(&reframe_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    match cli.command {
        Commands::Record {
            output,
            ratio,
            width,
            height,
            duration,
            interval_ms,
            rate,
        } => {
            commands::record::run(output, ratio, width, height, duration, interval_ms, rate).await
        }
        Commands::Inspect { path } => commands::inspect::run(path),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Replay { path, fps } => commands::replay::run(path, fps),
    }
}
