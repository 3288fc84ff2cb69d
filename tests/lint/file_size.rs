use ownerlint::policy::{Policy, RiskLevel};
use ownerlint::types::Severity;
use ownerlint::Ownerlint;

use crate::common::{TestAudit, TestEmitter};

/// Ten distinct rules, 140 bytes.
fn oversized() -> String {
    (0..10).map(|i| format!("/mod{i}.py @jb3\n")).collect()
}

fn small_limit(level: RiskLevel) -> Policy {
    let mut policy = Policy::default();
    policy.max_file_bytes = 16;
    policy.checks.file_too_large = level;
    policy
}

#[test]
fn oversized_file_warns_when_tolerated() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, small_limit(RiskLevel::Warn));
    let file = api.load_str(&oversized());
    assert_eq!(file.source_bytes, 140);

    let parsed = facts.of("parse");
    assert_eq!(parsed[0].0, "warn");
    assert_eq!(parsed[0].1["error_id"], serde_json::json!("E_TOO_LARGE"));
    assert_eq!(parsed[0].1["file_bytes"], serde_json::json!(140));

    let report = api.lint(&file);
    assert!(report.ok);
    assert_eq!(report.warnings.len(), 1);
    let row = report.rows.iter().find(|r| r.check == "E_TOO_LARGE").unwrap();
    assert_eq!(row.severity, Severity::Warn);
    assert_eq!(row.line, 0);
    assert!(row.rule_id.is_none());
}

#[test]
fn oversized_text_stops_lint_even_without_load_gate() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, small_limit(RiskLevel::Stop));
    let report = api.lint(&api.load_str(&oversized()));

    assert!(!report.ok);
    assert_eq!(report.checks(), vec!["E_TOO_LARGE"]);
    assert_eq!(facts.of("parse")[0].0, "failure");
    let summary = facts.of("lint.summary");
    assert_eq!(summary[0].1["exit_code"], serde_json::json!(60));
    assert_eq!(
        summary[0].1["summary_error_ids"],
        serde_json::json!(["E_TOO_LARGE", "E_POLICY"])
    );
}

#[test]
fn allowed_size_produces_no_row() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, small_limit(RiskLevel::Allow));
    let report = api.lint(&api.load_str(&oversized()));
    assert!(report.rows.is_empty());
    assert_eq!(facts.of("parse")[0].0, "success");
}
