use crate::finding::{Finding, FindingCategory};
use serde::{Deserialize, Serialize};

/// Verdict plus the full ordered audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationReport {
    pub certified: bool,
    pub findings: Vec<Finding>,
}

impl CertificationReport {
    /// Derive the verdict from the findings: any failing category fails.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let certified = !findings.iter().any(Finding::is_failing);
        Self {
            certified,
            findings,
        }
    }

    pub fn count(&self, category: FindingCategory) -> usize {
        self.findings
            .iter()
            .filter(|f| f.category == category)
            .count()
    }

    pub fn contains(&self, category: FindingCategory) -> bool {
        self.count(category) > 0
    }

    pub fn last(&self) -> Option<&Finding> {
        self.findings.last()
    }

    /// Findings rendered as audit lines.
    pub fn lines(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }
}

/// Response body handed back to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationResponse {
    pub certification_status: bool,
    pub findings: Vec<String>,
}

impl From<&CertificationReport> for CertificationResponse {
    fn from(report: &CertificationReport) -> Self {
        Self {
            certification_status: report.certified,
            findings: report.lines(),
        }
    }
}
