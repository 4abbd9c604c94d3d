//! Command implementations

use crate::error::{CliError, CliResult};
use crate::output::{render_document, render_report, OutputFormat};
use scroll_audit::{read_log, AuditSink, FileSink, TeeSink, TracingSink};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Where audit events go for one invocation.
pub struct SinkSettings {
    pub log_file: Option<PathBuf>,
    pub timestamps: bool,
}

impl SinkSettings {
    fn open(&self) -> CliResult<Box<dyn AuditSink>> {
        match &self.log_file {
            Some(path) => {
                let file = FileSink::open(path)?.with_timestamps(self.timestamps);
                Ok(Box::new(TeeSink::new(TracingSink, file)))
            }
            None => Ok(Box::new(TracingSink)),
        }
    }
}

fn verdict_code(certified: bool) -> ExitCode {
    if certified {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Parse a scroll and print the recovered document.
pub fn parse(file: &Path, sinks: &SinkSettings, format: OutputFormat) -> CliResult<ExitCode> {
    let mut sink = sinks.open()?;
    let doc = scroll_parser::parse_file(file, sink.as_mut());
    print!("{}", render_document(&doc, format)?);
    Ok(ExitCode::SUCCESS)
}

/// Parse and certify a scroll.
pub fn certify(file: &Path, sinks: &SinkSettings, format: OutputFormat) -> CliResult<ExitCode> {
    let mut sink = sinks.open()?;
    info!(file = %file.display(), "Certifying scroll");

    let doc = scroll_parser::parse_file(file, sink.as_mut());
    let report = scroll_certify::certify(&doc, sink.as_mut());

    print!("{}", render_report(&report, format)?);
    Ok(verdict_code(report.certified))
}

/// Certify a JSON certification request and print the JSON response.
pub fn check_request(file: &Path, sinks: &SinkSettings) -> CliResult<ExitCode> {
    let text = std::fs::read_to_string(file).map_err(|e| {
        CliError::InvalidInput(format!("cannot read request {}: {}", file.display(), e))
    })?;
    let body: serde_json::Value = serde_json::from_str(&text)?;

    let mut sink = sinks.open()?;
    let response = scroll_certify::certify_request(&body, sink.as_mut());

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(verdict_code(response.certification_status))
}

/// Print the ceremony log.
pub fn logs(sinks: &SinkSettings) -> CliResult<ExitCode> {
    let path = sinks
        .log_file
        .as_deref()
        .ok_or_else(|| CliError::InvalidInput("ceremony log is disabled".to_string()))?;
    print!("{}", read_log(path)?);
    Ok(ExitCode::SUCCESS)
}
