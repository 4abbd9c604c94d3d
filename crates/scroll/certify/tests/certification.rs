//! End-to-end: scroll text through the parser and the validator.

use proptest::prelude::*;
use scroll_audit::MemorySink;
use scroll_certify::certify;
use scroll_parser::parse_str;
use scroll_types::{FindingCategory, REQUIRED_METADATA_KEYS};

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn minimal_passing_scroll() {
    let text = "\
## Metadata
Scroll ID: GEM-001
Version: 1.0
Date of Sanctification: Cycle 1
Ethical Covenant: peace

## Ceremony Steps
### Step 1: Intro
Ethical Alignment Note: fine
";
    let report = certify(&parse_str(text), &mut MemorySink::new());

    assert!(report.certified);
    assert_eq!(report.count(FindingCategory::MetadataOk), 4);
    assert_eq!(report.count(FindingCategory::EthicsOk), 1);
    assert_eq!(report.count(FindingCategory::CertificationPassed), 1);
    assert!(!report.contains(FindingCategory::BlessingLogged));
    assert_eq!(report.findings.len(), 6);
}

#[test]
fn empty_sections_fail_with_full_explanation() {
    let text = "## Metadata\n\n## Ceremony Steps\n";
    let report = certify(&parse_str(text), &mut MemorySink::new());

    assert!(!report.certified);
    assert_eq!(report.count(FindingCategory::MissingMetadata), 4);
    assert_eq!(report.count(FindingCategory::StructuralError), 1);
    assert_eq!(report.count(FindingCategory::Warning), 1);
    assert_eq!(
        report.last().map(|f| f.category),
        Some(FindingCategory::CertificationFailed)
    );
}

#[test]
fn unreadable_source_still_gets_a_report() {
    let mut sink = MemorySink::new();
    let doc = scroll_parser::parse_file("/definitely/not/here/scroll.md", &mut sink);
    let report = certify(&doc, &mut sink);

    assert!(!report.certified);
    assert!(sink.events()[0].starts_with("ERROR: Unable to read scroll"));
    assert_eq!(sink.events()[1], "Starting scroll certification...");
    assert_eq!(sink.len(), report.findings.len() + 3);
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,-]{0,20}[A-Za-z0-9]"
}

fn arb_title() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

fn render(metadata: &[(&str, String)], steps: &[(String, Option<String>)]) -> String {
    let mut text = String::from("## Metadata\n");
    for (key, value) in metadata {
        text.push_str(&format!("{}: {}\n", key, value));
    }
    text.push_str("## Ceremony Steps\n");
    for (i, (title, note)) in steps.iter().enumerate() {
        text.push_str(&format!("### Step {}: {}\nDetail: something\n", i + 1, title));
        if let Some(note) = note {
            text.push_str(&format!("Ethical Alignment Note: {}\n", note));
        }
    }
    text
}

fn full_metadata(values: &[String]) -> Vec<(&'static str, String)> {
    REQUIRED_METADATA_KEYS
        .iter()
        .copied()
        .zip(values.iter().cloned())
        .collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Complete metadata and an ethical note on every step always passes.
    #[test]
    fn complete_scrolls_pass(
        values in prop::collection::vec(arb_value(), 4),
        steps in prop::collection::vec((arb_title(), arb_value()), 0..5),
    ) {
        let steps: Vec<_> = steps.into_iter().map(|(t, n)| (t, Some(n))).collect();
        let text = render(&full_metadata(&values), &steps);
        let report = certify(&parse_str(&text), &mut MemorySink::new());

        prop_assert!(report.certified);
        prop_assert_eq!(
            report.last().map(|f| f.category),
            Some(FindingCategory::CertificationPassed)
        );
    }

    /// Dropping one required key fails, and the finding names the key
    /// before any step-level finding.
    #[test]
    fn missing_key_fails_before_step_findings(
        values in prop::collection::vec(arb_value(), 4),
        missing in 0usize..4,
        titles in prop::collection::vec(arb_title(), 1..4),
    ) {
        let mut metadata = full_metadata(&values);
        let key = metadata.remove(missing).0;
        let steps: Vec<_> = titles.into_iter().map(|t| (t, Some("ok".to_string()))).collect();
        let report = certify(&parse_str(&render(&metadata, &steps)), &mut MemorySink::new());

        prop_assert!(!report.certified);
        let position = report
            .findings
            .iter()
            .position(|f| f.category == FindingCategory::MissingMetadata)
            .unwrap();
        prop_assert_eq!(position, missing);
        let quoted_key = format!("'{}'", key);
        prop_assert!(report.findings[position].message.contains(&quoted_key));
        let first_step_finding = report
            .findings
            .iter()
            .position(|f| f.category == FindingCategory::EthicsOk)
            .unwrap();
        prop_assert!(position < first_step_finding);
    }

    /// Exactly one step without an ethical note gives exactly one
    /// MISSING_ETHICS finding naming that step.
    #[test]
    fn single_missing_note_is_reported_once(
        values in prop::collection::vec(arb_value(), 4),
        titles in prop::collection::vec(arb_title(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let culprit = pick.index(titles.len());
        let steps: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), (i != culprit).then(|| "aligned".to_string())))
            .collect();
        let report = certify(
            &parse_str(&render(&full_metadata(&values), &steps)),
            &mut MemorySink::new(),
        );

        prop_assert!(!report.certified);
        prop_assert_eq!(report.count(FindingCategory::MissingEthics), 1);
        let finding = report
            .findings
            .iter()
            .find(|f| f.category == FindingCategory::MissingEthics)
            .unwrap();
        let expected_label = format!("'Step {}: {}'", culprit + 1, titles[culprit]);
        prop_assert!(finding.message.contains(&expected_label));
    }
}
