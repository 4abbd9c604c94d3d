//! Output formatting

use crate::error::CliResult;
use scroll_types::{CertificationReport, CertificationResponse, ScrollDocument};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a certification report.
pub fn render_report(report: &CertificationReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &CertificationResponse::from(report),
        )?),
        OutputFormat::Text => {
            let mut out = String::new();
            for line in report.lines() {
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(&format!("Certified: {}\n", report.certified));
            Ok(out)
        }
    }
}

/// Render a parsed document.
pub fn render_document(doc: &ScrollDocument, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
        OutputFormat::Text => {
            let mut out = String::from("Metadata:\n");
            for (key, value) in doc.metadata.iter() {
                out.push_str(&format!("  {}: {}\n", key, value));
            }
            out.push_str(&format!("Ceremony steps: {}\n", doc.ceremony_steps.len()));
            for (i, step) in doc.ceremony_steps.iter().enumerate() {
                out.push_str(&format!("  {}\n", step.label(i)));
                if !step.detail.is_empty() {
                    out.push_str(&format!("    Detail: {}\n", step.detail));
                }
                if let Some(blessing) = step.blessing_text() {
                    out.push_str(&format!("    Covenantal Blessing: {}\n", blessing));
                }
                if step.has_ethical_note() {
                    out.push_str(&format!("    Ethical Alignment Note: {}\n", step.ethical_note));
                }
            }
            Ok(out)
        }
    }
}
