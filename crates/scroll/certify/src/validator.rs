//! Rule evaluation over a typed scroll.

use scroll_audit::AuditSink;
use scroll_types::{
    CertificationReport, Finding, FindingCategory, ScrollDocument, REQUIRED_METADATA_KEYS,
};
use tracing::{debug, info};

pub(crate) const START_EVENT: &str = "Starting scroll certification...";
pub(crate) const PASSED_EVENT: &str = "Scroll certification successful.";
pub(crate) const FAILED_EVENT: &str = "Scroll certification failed. See findings for details.";

/// Closing sink event for a verdict.
pub(crate) fn summary_event(certified: bool) -> &'static str {
    if certified {
        PASSED_EVENT
    } else {
        FAILED_EVENT
    }
}

/// Ordered findings, mirrored to the sink as they are produced.
struct Trail<'s> {
    findings: Vec<Finding>,
    sink: &'s mut dyn AuditSink,
}

impl<'s> Trail<'s> {
    fn new(sink: &'s mut dyn AuditSink) -> Self {
        Self {
            findings: Vec::new(),
            sink,
        }
    }

    fn push(&mut self, finding: Finding) {
        let line = finding.to_string();
        debug!(category = %finding.category, "{}", line);
        self.sink.record(&line);
        self.findings.push(finding);
    }

    fn event(&mut self, message: &str) {
        self.sink.record(message);
    }

    fn failing(&self) -> bool {
        self.findings.iter().any(Finding::is_failing)
    }

    fn conclude(mut self) -> CertificationReport {
        let verdict = if self.failing() {
            Finding::failed()
        } else {
            Finding::passed()
        };
        self.push(verdict);
        let report = CertificationReport::from_findings(self.findings);
        self.sink.record(summary_event(report.certified));
        report
    }
}

/// Certify a parsed scroll.
///
/// Never fails: a scroll that breaks the rules produces a report with
/// `certified == false` and findings saying why. The sink sees a start
/// event, every finding line, and a closing summary event.
pub fn certify(doc: &ScrollDocument, sink: &mut dyn AuditSink) -> CertificationReport {
    sink.record(START_EVENT);
    evaluate(doc, sink)
}

/// Rules 2-6 without the start event.
pub(crate) fn evaluate(doc: &ScrollDocument, sink: &mut dyn AuditSink) -> CertificationReport {
    let mut trail = Trail::new(sink);

    for key in REQUIRED_METADATA_KEYS {
        match doc.metadata.get(key).map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => trail.push(Finding::metadata_ok(key, value)),
            None => trail.push(Finding::missing_metadata(key)),
        }
    }

    if doc.metadata.is_empty() {
        trail.push(Finding::structural("Metadata is empty."));
    }

    if doc.ceremony_steps.is_empty() {
        trail.push(Finding::warning("Ceremony steps are empty."));
    }

    for (i, step) in doc.ceremony_steps.iter().enumerate() {
        let label = step.label(i);

        if let Some(blessing) = step.blessing_text() {
            trail.push(Finding::blessing_logged(&label, blessing));
            trail.event(&format!("Covenantal Blessing for '{}': {}", label, blessing));
        }

        if step.has_ethical_note() {
            trail.push(Finding::ethics_ok(&label));
        } else {
            trail.push(Finding::missing_ethics(&label));
        }
    }

    let report = trail.conclude();
    info!(
        certified = report.certified,
        findings = report.findings.len(),
        missing_metadata = report.count(FindingCategory::MissingMetadata),
        missing_ethics = report.count(FindingCategory::MissingEthics),
        "Scroll certification complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use scroll_audit::MemorySink;
    use scroll_types::{CeremonyStep, Metadata};

    fn full_metadata() -> Metadata {
        [
            ("Scroll ID", "GEM-001"),
            ("Version", "1.0"),
            ("Date of Sanctification", "Cycle 1"),
            ("Ethical Covenant", "peace"),
        ]
        .into_iter()
        .collect()
    }

    fn categories(report: &CertificationReport) -> Vec<FindingCategory> {
        report.findings.iter().map(|f| f.category).collect()
    }

    #[test]
    fn passing_scroll() {
        let doc = ScrollDocument::new(
            full_metadata(),
            vec![CeremonyStep::new("Step 1", "Intro").with_ethical_note("fine")],
        );
        let mut sink = MemorySink::new();
        let report = certify(&doc, &mut sink);

        assert!(report.certified);
        assert_eq!(
            categories(&report),
            vec![
                FindingCategory::MetadataOk,
                FindingCategory::MetadataOk,
                FindingCategory::MetadataOk,
                FindingCategory::MetadataOk,
                FindingCategory::EthicsOk,
                FindingCategory::CertificationPassed,
            ]
        );
        let mut expected = vec![START_EVENT.to_string()];
        expected.extend(report.lines());
        expected.push(PASSED_EVENT.to_string());
        assert_eq!(sink.events(), expected.as_slice());
    }

    #[test]
    fn failing_scroll_ends_with_failure_summary() {
        let mut sink = MemorySink::new();
        let report = certify(&ScrollDocument::default(), &mut sink);

        assert!(!report.certified);
        assert_eq!(sink.len(), report.findings.len() + 2);
        assert_eq!(sink.events()[0], START_EVENT);
        assert_eq!(
            sink.events()[sink.len() - 2],
            "CERTIFICATION_FAILED: Scroll has issues. See findings."
        );
        assert_eq!(
            sink.events().last().map(String::as_str),
            Some("Scroll certification failed. See findings for details.")
        );
    }

    #[test]
    fn metadata_value_is_echoed() {
        let doc = ScrollDocument::new(full_metadata(), Vec::new());
        let report = certify(&doc, &mut MemorySink::new());
        assert_eq!(
            report.findings[0].to_string(),
            "METADATA_OK: Required field 'Scroll ID' present: GEM-001"
        );
    }

    #[test]
    fn missing_key_reported_in_rule_order() {
        let mut metadata = full_metadata();
        metadata.insert("Date of Sanctification", "   ");
        let doc = ScrollDocument::new(
            metadata,
            vec![CeremonyStep::new("Step 1", "Intro").with_ethical_note("fine")],
        );
        let report = certify(&doc, &mut MemorySink::new());

        assert!(!report.certified);
        assert_eq!(report.findings[2].category, FindingCategory::MissingMetadata);
        assert!(report.findings[2].message.contains("'Date of Sanctification'"));
        assert_eq!(report.findings[3].category, FindingCategory::MetadataOk);
        assert_eq!(report.findings[4].category, FindingCategory::EthicsOk);
        assert_eq!(
            report.last().map(|f| f.category),
            Some(FindingCategory::CertificationFailed)
        );
    }

    #[test]
    fn empty_scroll() {
        let report = certify(&ScrollDocument::default(), &mut MemorySink::new());

        assert!(!report.certified);
        assert_eq!(
            categories(&report),
            vec![
                FindingCategory::MissingMetadata,
                FindingCategory::MissingMetadata,
                FindingCategory::MissingMetadata,
                FindingCategory::MissingMetadata,
                FindingCategory::StructuralError,
                FindingCategory::Warning,
                FindingCategory::CertificationFailed,
            ]
        );
        assert_eq!(report.findings[4].message, "Metadata is empty.");
    }

    #[test]
    fn empty_steps_only_warn() {
        let report = certify(
            &ScrollDocument::new(full_metadata(), Vec::new()),
            &mut MemorySink::new(),
        );
        assert!(report.certified);
        assert_eq!(report.count(FindingCategory::Warning), 1);
    }

    #[test]
    fn blessing_is_logged_after_its_finding() {
        let doc = ScrollDocument::new(
            full_metadata(),
            vec![CeremonyStep::new("Step 1", "Intro")
                .with_blessing("May it flourish")
                .with_ethical_note("fine")],
        );
        let mut sink = MemorySink::new();
        let report = certify(&doc, &mut sink);

        assert!(report.certified);
        assert_eq!(report.findings[4].category, FindingCategory::BlessingLogged);
        assert_eq!(
            report.findings[4].to_string(),
            "BLESSING_LOGGED: For 'Step 1: Intro': May it flourish"
        );
        assert_eq!(sink.len(), report.findings.len() + 3);
        assert_eq!(
            sink.events()[6],
            "Covenantal Blessing for 'Step 1: Intro': May it flourish"
        );
    }

    #[test]
    fn step_without_ethics_fails_once() {
        let doc = ScrollDocument::new(
            full_metadata(),
            vec![
                CeremonyStep::new("Step 1", "Intro").with_ethical_note("fine"),
                CeremonyStep::new("Step 2", "Trial").with_blessing("hope"),
                CeremonyStep::new("Step 3", "Close").with_ethical_note("ok"),
            ],
        );
        let report = certify(&doc, &mut MemorySink::new());

        assert!(!report.certified);
        assert_eq!(report.count(FindingCategory::MissingEthics), 1);
        let missing = report
            .findings
            .iter()
            .find(|f| f.category == FindingCategory::MissingEthics)
            .unwrap();
        assert_eq!(
            missing.message,
            "Ethical Alignment Note missing for 'Step 2: Trial'."
        );
        assert_eq!(report.count(FindingCategory::EthicsOk), 2);
    }

    #[test]
    fn closures_can_observe_findings() {
        let mut seen = 0usize;
        let report = {
            let mut sink = |_: &str| seen += 1;
            certify(&ScrollDocument::default(), &mut sink)
        };
        assert_eq!(seen, report.findings.len() + 2);
    }
}
