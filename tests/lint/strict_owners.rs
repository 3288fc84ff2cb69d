use ownerlint::adapters::StaticDirectory;
use ownerlint::policy::Policy;
use ownerlint::Ownerlint;

use crate::common::{fixture, TestAudit, TestEmitter};

const MAINTAINERS: &[&str] = &[
    "MarkKoz", "mbaruh", "ks129", "jb3", "Den4200", "wookie184", "Akarys42", "SebastiaanZ",
];

#[test]
fn strict_without_directory_stops() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::strict_preset());
    let report = api.lint(&api.load_str("*.py @jb3\n"));
    assert!(!report.ok);
    assert_eq!(report.rows[0].check, "E_UNKNOWN_OWNER");
    assert_eq!(report.rows[0].line, 0);
}

#[test]
fn strict_with_directory_accepts_fixture() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::strict_preset())
        .with_handle_directory(Box::new(StaticDirectory::new(MAINTAINERS.iter().copied())));
    let report = api.lint(&api.load_str(&fixture()));
    assert!(report.ok, "stops: {:?}", report.stops);
}

#[test]
fn unknown_owner_is_reported_per_token() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default())
        .with_handle_directory(Box::new(StaticDirectory::new(["jb3"])));
    let report = api.lint(&api.load_str("Dockerfile @jb3 @lemonsaurus\n"));
    assert!(!report.ok);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].owner.as_deref(), Some("@lemonsaurus"));
}

#[test]
fn strict_rejects_email_owners_and_masks_them_in_facts() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::strict_preset())
        .with_handle_directory(Box::new(StaticDirectory::new(["jb3"])));
    let report = api.lint(&api.load_str("*.py @jb3 ops@pythondiscord.com\n"));
    assert!(!report.ok);
    assert_eq!(report.rows[0].check, "E_OWNER");
    assert_eq!(report.rows[0].owner.as_deref(), Some("ops@pythondiscord.com"));

    let rows = facts.of("lint");
    assert_eq!(rows[0].1["owner"], serde_json::json!("***"));
    assert!(!rows[0].1["message"].as_str().unwrap().contains("pythondiscord.com"));
}
