//! Document parser: a small state machine fed by the line classifier.

use crate::classify::{classify, FieldKind, LineClass, Section};
use crate::error::{ParseResult, ScrollParseError};
use scroll_audit::AuditSink;
use scroll_types::{CeremonyStep, Metadata, ScrollDocument};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, trace, warn};

/// A step whose header has been seen and whose fields are still arriving.
#[derive(Debug)]
struct OpenStep {
    step: CeremonyStep,
    /// Field that continuation lines extend.
    active: FieldKind,
}

impl OpenStep {
    fn new(step: String, title: &str) -> Self {
        Self {
            step: CeremonyStep::new(step, title),
            active: FieldKind::Detail,
        }
    }

    fn append(&mut self, kind: FieldKind, fragment: &str) {
        self.active = kind;
        if fragment.is_empty() {
            return;
        }
        let target = match kind {
            FieldKind::Detail => &mut self.step.detail,
            FieldKind::Blessing => self.step.blessing.get_or_insert_with(String::new),
            FieldKind::EthicalNote => &mut self.step.ethical_note,
        };
        if !target.is_empty() {
            target.push(' ');
        }
        target.push_str(fragment);
    }
}

/// Incremental scroll parser.
///
/// Feed lines in document order with [`feed_line`](Self::feed_line), then
/// call [`finish`](Self::finish). Malformed lines never fail the parse.
#[derive(Debug, Default)]
pub struct ScrollParser {
    section: Section,
    metadata: Metadata,
    steps: Vec<CeremonyStep>,
    open: Option<OpenStep>,
    line_no: usize,
}

impl ScrollParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn has_open_step(&self) -> bool {
        self.open.is_some()
    }

    /// Number of steps already flushed.
    pub fn completed_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn feed_line(&mut self, line: &str) {
        self.line_no += 1;
        let class = classify(line, self.section, self.open.is_some());
        trace!(line = self.line_no, section = ?self.section, class = ?class, "Classified line");

        match class {
            LineClass::Skip => {}
            LineClass::SectionStart(section) => {
                self.flush();
                self.section = section;
            }
            LineClass::KeyValue { key, value } => {
                if let Some(previous) = self.metadata.insert(key, value) {
                    debug!(line = self.line_no, key, previous = %previous, "Metadata key repeated, last value wins");
                }
            }
            LineClass::StepHeader { step, title } => {
                self.flush();
                self.open = Some(OpenStep::new(step, title));
            }
            LineClass::FieldLine { kind, value } => {
                if let Some(open) = self.open.as_mut() {
                    open.append(kind, value);
                }
            }
            LineClass::Continuation(text) => {
                if let Some(open) = self.open.as_mut() {
                    let kind = open.active;
                    open.append(kind, text);
                }
            }
            LineClass::Unrecognized(text) => {
                debug!(line = self.line_no, text, "Ignoring unrecognized line");
            }
        }
    }

    /// Flush any open step and return the finished document.
    pub fn finish(mut self) -> ScrollDocument {
        self.flush();
        debug!(
            metadata = self.metadata.len(),
            steps = self.steps.len(),
            "Parsed scroll"
        );
        ScrollDocument::new(self.metadata, self.steps)
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            if open.step.title.trim().is_empty() {
                debug!(step = %open.step.step, "Dropping step without a title");
            } else {
                self.steps.push(open.step);
            }
        }
    }
}

/// Parse scroll text held in memory.
pub fn parse_str(input: &str) -> ScrollDocument {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut parser = ScrollParser::new();
    for line in input.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Read and parse a scroll file, surfacing I/O failures to the caller.
///
/// Bytes that are not valid UTF-8 become U+FFFD; the rest of the file is
/// still parsed.
pub fn try_parse_file(path: impl AsRef<Path>) -> ParseResult<ScrollDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ScrollParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        debug!(path = %path.display(), "Scroll contains invalid UTF-8, decoding lossily");
    }
    Ok(parse_str(&text))
}

/// Read and parse a scroll file.
///
/// An unreadable source yields an empty document; the failure is recorded
/// on `sink` instead of being returned.
pub fn parse_file(path: impl AsRef<Path>, sink: &mut dyn AuditSink) -> ScrollDocument {
    match try_parse_file(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "Scroll source unreadable, continuing with empty document");
            sink.record(&format!("ERROR: {}", e));
            ScrollDocument::default()
        }
    }
}
