use ownerlint::api::errors::ApiError;
use ownerlint::policy::{Policy, RiskLevel};
use ownerlint::Ownerlint;

use crate::common::{temp_repo, TestAudit, TestEmitter};

fn oversized_repo() -> tempfile::TempDir {
    let td = temp_repo(&[]);
    std::fs::write(td.path().join("CODEOWNERS"), "*.py @jb3\n".repeat(10)).unwrap();
    td
}

#[test]
fn oversized_file_is_rejected() {
    let td = oversized_repo();
    let mut policy = Policy::default();
    policy.max_file_bytes = 16;
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, policy);

    let err = api.load(td.path()).unwrap_err();
    assert!(matches!(err, ApiError::TooLarge { size: 100, limit: 16 }));
    let parsed = facts.of("parse");
    assert_eq!(parsed[0].0, "failure");
    assert_eq!(parsed[0].1["error_id"], serde_json::json!("E_TOO_LARGE"));
}

#[test]
fn size_limit_can_be_downgraded_to_warning() {
    let td = oversized_repo();
    let mut policy = Policy::default();
    policy.max_file_bytes = 16;
    policy.checks.file_too_large = RiskLevel::Warn;
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, policy);

    let file = api.load(td.path()).unwrap();
    assert_eq!(file.rule_count(), 10);
    let report = api.lint(&file);
    assert!(report.rows.iter().any(|r| r.check == "E_TOO_LARGE" && r.line == 0));
}
