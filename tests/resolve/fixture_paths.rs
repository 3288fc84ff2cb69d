use ownerlint::policy::Policy;
use ownerlint::Ownerlint;

use crate::common::{fixture, TestAudit, TestEmitter};

fn api() -> Ownerlint<TestEmitter, TestAudit> {
    Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default())
}

#[test]
fn snekbox_is_owned_by_two_maintainers() {
    let api = api();
    let file = api.load_str(&fixture());
    let res = api.resolve(&file, "bot/exts/utils/snekbox.py").unwrap();
    assert_eq!(res.owners(), vec!["MarkKoz", "jb3"]);
    assert_eq!(res.rule.as_ref().map(|r| r.line), Some(7));
}

#[test]
fn later_file_rule_overrides_directory_rule() {
    let api = api();
    let file = api.load_str(&fixture());
    let res = api.resolve(&file, "bot/exts/info/information.py").unwrap();
    assert_eq!(res.matched_lines, vec![9, 10]);
    assert_eq!(res.owners(), vec!["mbaruh", "jb3"]);

    let stats = api.resolve(&file, "bot/exts/info/stats.py").unwrap();
    assert_eq!(stats.matched_lines, vec![9, 40]);
    assert_eq!(stats.owners(), vec!["jb3"]);
}

#[test]
fn unanchored_name_matches_nested_copies() {
    let api = api();
    let file = api.load_str(&fixture());
    let res = api.resolve(&file, "deploy/Dockerfile").unwrap();
    assert_eq!(res.owners(), vec!["MarkKoz", "Akarys42", "Den4200", "jb3"]);
}

#[test]
fn unmatched_path_is_unowned_and_warns() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::default());
    let file = api.load_str(&fixture());
    let res = api.resolve(&file, "bot/__main__.py").unwrap();
    assert!(res.is_unowned());
    assert!(res.matched_lines.is_empty());
    let events = facts.of("resolve");
    assert_eq!(events[0].0, "warn");
    assert_eq!(events[0].1["path"], serde_json::json!("bot/__main__.py"));
}

#[test]
fn paths_are_normalized_and_dotdot_rejected() {
    let api = api();
    let file = api.load_str(&fixture());
    let res = api.resolve(&file, "./bot/rules/burst.py").unwrap();
    assert_eq!(res.owners(), vec!["mbaruh"]);
    assert!(api.resolve(&file, "bot/../../etc/passwd").is_err());
}
