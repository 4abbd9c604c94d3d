use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata keys every certifiable scroll must carry, in evaluation order.
pub const REQUIRED_METADATA_KEYS: [&str; 4] = [
    "Scroll ID",
    "Version",
    "Date of Sanctification",
    "Ethical Covenant",
];

/// Free-form `Key: value` pairs from the metadata section.
///
/// Keys are case-sensitive and whitespace-trimmed. Inserting a key that is
/// already present replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the value it replaced.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.as_ref().trim().to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

/// One ordered record of the ceremony being certified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyStep {
    /// Step identifier, e.g. `Step 1`.
    #[serde(default)]
    pub step: String,
    #[serde(default)]
    pub title: String,
    /// Step body; continuation lines are joined with single spaces.
    #[serde(default)]
    pub detail: String,
    /// Covenantal blessing, if the step declares one.
    #[serde(
        default,
        alias = "Covenantal Blessing",
        skip_serializing_if = "Option::is_none"
    )]
    pub blessing: Option<String>,
    /// Ethical alignment note. Required for a passing certification.
    #[serde(default, alias = "Ethical Alignment Note")]
    pub ethical_note: String,
}

impl CeremonyStep {
    pub fn new(step: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_blessing(mut self, blessing: impl Into<String>) -> Self {
        self.blessing = Some(blessing.into());
        self
    }

    pub fn with_ethical_note(mut self, note: impl Into<String>) -> Self {
        self.ethical_note = note.into();
        self
    }

    /// Blessing text, treating a blank blessing as absent.
    pub fn blessing_text(&self) -> Option<&str> {
        self.blessing
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }

    pub fn has_ethical_note(&self) -> bool {
        !self.ethical_note.trim().is_empty()
    }

    /// Human-readable name used in findings. `index` is zero-based.
    pub fn label(&self, index: usize) -> String {
        let step = self.step.trim();
        let title = self.title.trim();
        match (step.is_empty(), title.is_empty()) {
            (false, false) => format!("{}: {}", step, title),
            (false, true) => step.to_string(),
            (true, false) => title.to_string(),
            (true, true) => format!("Unnamed Step {}", index + 1),
        }
    }
}

/// A parsed scroll: one metadata block and the ceremony steps in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollDocument {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, alias = "steps")]
    pub ceremony_steps: Vec<CeremonyStep>,
}

impl ScrollDocument {
    pub fn new(metadata: Metadata, ceremony_steps: Vec<CeremonyStep>) -> Self {
        Self {
            metadata,
            ceremony_steps,
        }
    }

    /// True when neither metadata nor steps were recovered.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.ceremony_steps.is_empty()
    }
}
