use ownerlint::policy::{Policy, RiskLevel};
use ownerlint::types::Severity;
use ownerlint::Ownerlint;

use crate::common::{TestAudit, TestEmitter};

const BROKEN: &str = "\
# duplicated section
**/bot/exts/fun/**   @ks129
!**/bot/exts/fun/secret.py @ks129
**/bot/exts/fun/**   @ks129
/vendor/
Dockerfile MarkKoz @jb3 @jb3
";

#[test]
fn every_check_reports_with_its_line() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::default());
    let report = api.lint(&api.load_str(BROKEN));

    assert!(!report.ok);
    let got: Vec<(&str, usize)> = report.rows.iter().map(|r| (r.check.as_str(), r.line)).collect();
    assert_eq!(
        got,
        vec![
            ("E_PATTERN", 3),
            ("E_DUPLICATE", 4),
            ("E_NO_OWNERS", 5),
            ("E_OWNER", 6),
            ("E_DUPLICATE_OWNER", 6),
        ]
    );
    assert_eq!(report.stops.len(), 3);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.rows.iter().all(|r| r.rule_id.is_some()));

    let summary = facts.of("lint.summary");
    assert_eq!(summary[0].0, "failure");
    let ids = summary[0].1["summary_error_ids"].as_array().unwrap().clone();
    assert_eq!(ids, vec!["E_PATTERN", "E_DUPLICATE", "E_OWNER", "E_POLICY"]);
    assert_eq!(summary[0].1["exit_code"], serde_json::json!(20));

    let per_row = facts.of("lint");
    assert_eq!(per_row.len(), report.rows.len());
}

#[test]
fn allow_level_drops_findings() {
    let mut policy = Policy::default();
    policy.checks.duplicate_pattern = RiskLevel::Allow;
    policy.checks.invalid_pattern = RiskLevel::Warn;
    policy.checks.malformed_owner = RiskLevel::Warn;
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, policy);
    let report = api.lint(&api.load_str(BROKEN));

    assert!(report.ok);
    assert!(!report.checks().contains(&"E_DUPLICATE"));
    assert!(report.rows.iter().all(|r| r.severity == Severity::Warn));
}

#[test]
fn github_preset_accepts_duplicates_and_empty_owner_lists() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::github_preset());
    let report = api.lint(&api.load_str("*.md @jb3\n*.md @MarkKoz\n/vendor/\n"));
    assert!(report.ok);
    assert_eq!(report.checks(), vec!["E_DUPLICATE"]);
}

#[test]
fn summary_ids_come_from_stop_rows_not_message_text() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::default());
    let report = api.lint(&api.load_str("**/unowned/** @jb3\n**/unowned/** @jb3\n"));

    assert_eq!(report.checks(), vec!["E_DUPLICATE"]);
    let summary = facts.of("lint.summary");
    assert_eq!(
        summary[0].1["summary_error_ids"],
        serde_json::json!(["E_DUPLICATE", "E_POLICY"])
    );
    assert_eq!(summary[0].1["exit_code"], serde_json::json!(40));
}
