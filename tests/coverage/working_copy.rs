use ownerlint::adapters::FsRepoTree;
use ownerlint::api::errors::ApiError;
use ownerlint::policy::Policy;
use ownerlint::Ownerlint;

use crate::common::{temp_repo, TestAudit, TestEmitter};

const RULES: &str = "/bot/** @jb3\n*.md @MarkKoz\n/vendor/ @Akarys42\n/poetry.lock\n";

fn repo() -> tempfile::TempDir {
    temp_repo(&[
        "bot/bot.py",
        "bot/exts/fun/duck_pond.py",
        "README.md",
        "poetry.lock",
        "Dockerfile",
        ".git/HEAD",
    ])
}

#[test]
fn reports_unowned_files_and_unused_rules() {
    let td = repo();
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::default())
        .with_repo_tree(Box::new(FsRepoTree::new(td.path())));
    let file = api.load_str(RULES);

    let report = api.coverage(&file).unwrap();
    assert!(report.ok);
    assert_eq!(report.total_files, 5);
    assert_eq!(report.owned_files, 3);
    let unowned: Vec<&str> = report.unowned.iter().map(|p| p.as_str()).collect();
    assert_eq!(unowned, vec!["Dockerfile", "poetry.lock"]);
    assert_eq!(report.unused_rule_lines, vec![3]);

    let events = facts.of("coverage");
    assert_eq!(events[0].0, "warn");
    assert_eq!(events[0].1["unowned"], serde_json::json!(2));
}

#[test]
fn require_full_fails_with_coverage_id() {
    let td = repo();
    let facts = TestEmitter::default();
    let mut policy = Policy::default();
    policy.coverage.require_full = true;
    let api = Ownerlint::new(facts.clone(), TestAudit, policy)
        .with_repo_tree(Box::new(FsRepoTree::new(td.path())));
    let file = api.load_str(RULES);

    let report = api.coverage(&file).unwrap();
    assert!(!report.ok);
    let events = facts.of("coverage");
    assert_eq!(events[0].0, "failure");
    assert_eq!(events[0].1["error_id"], serde_json::json!("E_COVERAGE"));
    assert_eq!(events[0].1["exit_code"], serde_json::json!(70));
}

#[test]
fn ignored_files_are_not_counted() {
    let td = repo();
    let facts = TestEmitter::default();
    let mut policy = Policy::default();
    policy.coverage.require_full = true;
    policy.coverage.ignore = vec!["Dockerfile".into(), "/poetry.lock".into()];
    let api = Ownerlint::new(facts.clone(), TestAudit, policy)
        .with_repo_tree(Box::new(FsRepoTree::new(td.path())));
    let file = api.load_str(RULES);

    let report = api.coverage(&file).unwrap();
    assert!(report.ok);
    assert_eq!(report.total_files, 3);
    assert!((report.ratio() - 1.0).abs() < f64::EPSILON);
    assert_eq!(facts.of("coverage")[0].0, "success");
}

#[test]
fn bad_ignore_glob_is_a_policy_error() {
    let td = repo();
    let mut policy = Policy::default();
    policy.coverage.ignore = vec!["!*.md".into()];
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, policy)
        .with_repo_tree(Box::new(FsRepoTree::new(td.path())));
    let file = api.load_str(RULES);
    assert!(matches!(api.coverage(&file), Err(ApiError::PolicyViolation(_))));
}
