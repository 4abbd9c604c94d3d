//! Line classifier: decides what a single line of a scroll is.
//!
//! Classification depends on two bits of parser state, the current section
//! and whether a step is open, and nothing else. Every line maps to exactly
//! one [`LineClass`].

use lazy_static::lazy_static;
use regex::Regex;

/// Section of the document the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Metadata,
    CeremonySteps,
}

/// Named fields a step can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Detail,
    Blessing,
    EthicalNote,
}

impl FieldKind {
    fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "detail" => Some(FieldKind::Detail),
            "covenantal blessing" => Some(FieldKind::Blessing),
            "ethical alignment note" => Some(FieldKind::EthicalNote),
            _ => None,
        }
    }
}

/// What a line is, given where the parser stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Blank, banner, divider or comment.
    Skip,
    /// A section heading. `Section::None` for any other `## ` heading.
    SectionStart(Section),
    KeyValue { key: &'a str, value: &'a str },
    StepHeader { step: String, title: &'a str },
    FieldLine { kind: FieldKind, value: &'a str },
    Continuation(&'a str),
    /// Text outside any section or step. Ignored by the parser.
    Unrecognized(&'a str),
}

lazy_static! {
    static ref STEP_HEADER: Regex =
        Regex::new(r"(?i)^#{1,3}\s*step\s*(\d+)\s*:\s*(.*)$").expect("step header pattern");
    static ref FIELD_LINE: Regex = Regex::new(
        r"(?i)^(?:[-*+]\s+)?(?:\*\*)?(detail|covenantal blessing|ethical alignment note)\s*(?:\*\*)?\s*:(?:\*\*)?\s*(.*)$"
    )
    .expect("field line pattern");
    static ref KEY_VALUE: Regex = Regex::new(
        r"^(?:[-*+]\s+)?(?:\*\*)?([A-Za-z0-9][A-Za-z0-9 \-]*?)\s*(?:\*\*)?\s*:(?:\*\*)?\s*(.*)$"
    )
    .expect("key value pattern");
    static ref DIVIDER: Regex =
        Regex::new(r"^(?:-{3,}|\*{3,}|_{3,}|={3,})$").expect("divider pattern");
}

/// Classify one line. Surrounding whitespace is ignored.
pub fn classify(line: &str, section: Section, step_open: bool) -> LineClass<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineClass::Skip;
    }

    if let Some(section) = section_header(line) {
        return LineClass::SectionStart(section);
    }

    if section == Section::CeremonySteps {
        if let Some(caps) = STEP_HEADER.captures(line) {
            let number = caps.get(1).map_or("", |m| m.as_str());
            let title = caps.get(2).map_or("", |m| m.as_str().trim());
            return LineClass::StepHeader {
                step: format!("Step {}", number),
                title,
            };
        }
    }

    if step_open {
        if let Some(caps) = FIELD_LINE.captures(line) {
            let kind = caps
                .get(1)
                .and_then(|m| FieldKind::from_label(m.as_str()))
                .unwrap_or_default();
            let value = caps.get(2).map_or("", |m| m.as_str().trim());
            return LineClass::FieldLine { kind, value };
        }
    }

    if line.starts_with('#') {
        return if is_level_two_heading(line) {
            LineClass::SectionStart(Section::None)
        } else {
            LineClass::Skip
        };
    }

    if DIVIDER.is_match(line) || line.starts_with("<!--") {
        return LineClass::Skip;
    }

    if section == Section::Metadata {
        if let Some(caps) = KEY_VALUE.captures(line) {
            let key = caps.get(1).map_or("", |m| m.as_str().trim());
            let value = caps.get(2).map_or("", |m| m.as_str().trim());
            return LineClass::KeyValue { key, value };
        }
    }

    if step_open {
        return LineClass::Continuation(line);
    }

    LineClass::Unrecognized(line)
}

fn section_header(line: &str) -> Option<Section> {
    if !line.starts_with("##") {
        return None;
    }
    let normalized = line
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase();
    match normalized.as_str() {
        "## metadata" => Some(Section::Metadata),
        "## ceremony steps" => Some(Section::CeremonySteps),
        _ => None,
    }
}

fn is_level_two_heading(line: &str) -> bool {
    line.starts_with("##") && !line.starts_with("###")
}
