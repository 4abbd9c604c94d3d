//! Certification of untyped request bodies.
//!
//! The transport layer hands over JSON. Before any rule runs, the body must
//! look like a scroll: an object whose `metadata` is a flat mapping and whose
//! `ceremony_steps` is a list of step objects. If it does not, certification
//! stops with a single structural finding.

use crate::error::StructuralError;
use crate::validator::{evaluate, summary_event, START_EVENT};
use scroll_audit::AuditSink;
use scroll_types::{
    CeremonyStep, CertificationReport, CertificationResponse, Finding, Metadata, ScrollDocument,
};
use serde_json::{Map, Value};
use tracing::warn;

const BLESSING_KEYS: [&str; 2] = ["blessing", "Covenantal Blessing"];
const ETHICAL_NOTE_KEYS: [&str; 3] = ["ethicalNote", "ethical_note", "Ethical Alignment Note"];

/// Build a typed document from a request body, checking its shape.
pub fn document_from_value(value: &Value) -> Result<ScrollDocument, StructuralError> {
    let root = value.as_object().ok_or(StructuralError::NotAMapping)?;

    let metadata = match root.get("metadata") {
        None | Some(Value::Null) => Metadata::new(),
        Some(Value::Object(map)) => metadata_from_map(map)?,
        Some(_) => return Err(StructuralError::MetadataNotAMapping),
    };

    let steps = match root.get("ceremony_steps").or_else(|| root.get("steps")) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| step_from_value(i + 1, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(StructuralError::StepsNotASequence),
    };

    Ok(ScrollDocument::new(metadata, steps))
}

fn metadata_from_map(map: &Map<String, Value>) -> Result<Metadata, StructuralError> {
    let mut metadata = Metadata::new();
    for (key, value) in map {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(StructuralError::MetadataValueNotScalar(key.clone()))
            }
        };
        metadata.insert(key, text);
    }
    Ok(metadata)
}

fn step_from_value(index: usize, value: &Value) -> Result<CeremonyStep, StructuralError> {
    let map = value
        .as_object()
        .ok_or(StructuralError::StepNotAMapping(index))?;

    let text = |keys: &[&str]| -> Result<Option<String>, StructuralError> {
        for key in keys {
            match map.get(*key) {
                None | Some(Value::Null) => continue,
                Some(Value::String(s)) => return Ok(Some(s.clone())),
                Some(_) => {
                    return Err(StructuralError::StepFieldNotText {
                        index,
                        field: key.to_string(),
                    })
                }
            }
        }
        Ok(None)
    };

    Ok(CeremonyStep {
        step: text(&["step"])?.unwrap_or_default(),
        title: text(&["title"])?.unwrap_or_default(),
        detail: text(&["detail"])?.unwrap_or_default(),
        blessing: text(&BLESSING_KEYS)?,
        ethical_note: text(&ETHICAL_NOTE_KEYS)?.unwrap_or_default(),
    })
}

/// Certify an untyped request body.
///
/// A body that is not shaped like a scroll fails with exactly one
/// structural finding; no other rule runs. Either way the sink sees the
/// start event first and the summary event last.
pub fn certify_value(value: &Value, sink: &mut dyn AuditSink) -> CertificationReport {
    sink.record(START_EVENT);
    match document_from_value(value) {
        Ok(doc) => evaluate(&doc, sink),
        Err(e) => {
            warn!(error = %e, "Rejecting malformed certification request");
            let finding = Finding::structural(e.to_string());
            sink.record(&finding.to_string());
            let report = CertificationReport::from_findings(vec![finding]);
            sink.record(summary_event(report.certified));
            report
        }
    }
}

/// Certify a request body and shape the transport response.
pub fn certify_request(value: &Value, sink: &mut dyn AuditSink) -> CertificationResponse {
    CertificationResponse::from(&certify_value(value, sink))
}
