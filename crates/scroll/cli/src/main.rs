//! Scroll CLI - parse and certify scroll certificates
//!
//! - `parse`: show what the lenient parser recovers from a scroll
//! - `certify`: run the certification rules and print the findings
//! - `check-request`: certify a JSON request body as the service would
//! - `logs`: print the ceremony log

#![deny(unsafe_code)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use crate::commands::SinkSettings;
use crate::config::ScrollConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Scroll CLI application
#[derive(Parser)]
#[command(name = "scroll")]
#[command(about = "Scroll certification - parse and certify ceremony scrolls", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SCROLL_CONFIG")]
    config: Option<String>,

    /// Ceremony log file (overrides configuration)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Do not write the ceremony log
    #[arg(long, conflicts_with = "log_file")]
    no_log: bool,

    /// Output format (text, json); `parse` defaults to json, `certify` to text
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Parse a scroll and print the recovered document
    Parse {
        /// Scroll file
        file: PathBuf,
    },

    /// Parse and certify a scroll
    Certify {
        /// Scroll file
        file: PathBuf,
    },

    /// Certify a JSON certification request
    #[command(alias = "request")]
    CheckRequest {
        /// Request body file
        file: PathBuf,
    },

    /// Print the ceremony log
    Logs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = ScrollConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let format = cli.output.or(config.output.format);
    let sinks = SinkSettings {
        log_file: if cli.no_log {
            None
        } else {
            cli.log_file.or(config.log.file)
        },
        timestamps: config.log.timestamps,
    };

    match cli.command {
        Commands::Parse { file } => {
            commands::parse(&file, &sinks, format.unwrap_or(OutputFormat::Json))
        }
        Commands::Certify { file } => {
            commands::certify(&file, &sinks, format.unwrap_or_default())
        }
        Commands::CheckRequest { file } => commands::check_request(&file, &sinks),
        Commands::Logs => commands::logs(&sinks),
    }
}
