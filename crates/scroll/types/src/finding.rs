use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCategory {
    MetadataOk,
    MissingMetadata,
    BlessingLogged,
    EthicsOk,
    MissingEthics,
    /// Noted but does not affect the verdict.
    Warning,
    /// The input is malformed at the structural level.
    #[serde(rename = "ERROR")]
    StructuralError,
    CertificationPassed,
    CertificationFailed,
}

impl FindingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCategory::MetadataOk => "METADATA_OK",
            FindingCategory::MissingMetadata => "MISSING_METADATA",
            FindingCategory::BlessingLogged => "BLESSING_LOGGED",
            FindingCategory::EthicsOk => "ETHICS_OK",
            FindingCategory::MissingEthics => "MISSING_ETHICS",
            FindingCategory::Warning => "WARNING",
            FindingCategory::StructuralError => "ERROR",
            FindingCategory::CertificationPassed => "CERTIFICATION_PASSED",
            FindingCategory::CertificationFailed => "CERTIFICATION_FAILED",
        }
    }

    /// Whether a finding of this category forces a failing verdict.
    pub fn is_failing(&self) -> bool {
        matches!(
            self,
            FindingCategory::MissingMetadata
                | FindingCategory::MissingEthics
                | FindingCategory::StructuralError
        )
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the certification audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub message: String,
}

impl Finding {
    pub fn new(category: FindingCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn metadata_ok(key: &str, value: &str) -> Self {
        Self::new(
            FindingCategory::MetadataOk,
            format!("Required field '{}' present: {}", key, value),
        )
    }

    pub fn missing_metadata(key: &str) -> Self {
        Self::new(
            FindingCategory::MissingMetadata,
            format!("Required field '{}' is missing or empty.", key),
        )
    }

    pub fn blessing_logged(label: &str, blessing: &str) -> Self {
        Self::new(
            FindingCategory::BlessingLogged,
            format!("For '{}': {}", label, blessing),
        )
    }

    pub fn ethics_ok(label: &str) -> Self {
        Self::new(
            FindingCategory::EthicsOk,
            format!("Ethical Alignment Note present for '{}'.", label),
        )
    }

    pub fn missing_ethics(label: &str) -> Self {
        Self::new(
            FindingCategory::MissingEthics,
            format!("Ethical Alignment Note missing for '{}'.", label),
        )
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FindingCategory::Warning, message)
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(FindingCategory::StructuralError, message)
    }

    pub fn passed() -> Self {
        Self::new(
            FindingCategory::CertificationPassed,
            "Scroll meets all ethical and structural requirements.",
        )
    }

    pub fn failed() -> Self {
        Self::new(
            FindingCategory::CertificationFailed,
            "Scroll has issues. See findings.",
        )
    }

    pub fn is_failing(&self) -> bool {
        self.category.is_failing()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}
