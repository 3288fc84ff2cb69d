use ownerlint::policy::Policy;
use ownerlint::Ownerlint;

use crate::common::{fixture, TestAudit, TestEmitter};

#[test]
fn reviewers_are_unioned_in_first_seen_order() {
    let facts = TestEmitter::default();
    let api = Ownerlint::new(facts.clone(), TestAudit, Policy::default());
    let file = api.load_str(&fixture());

    let req = api
        .review_request(
            &file,
            [
                "bot/utils/regex.py",
                "bot/exts/utils/snekbox.py",
                "bot/rules/mentions.py",
                "bot/exts/utils/snekbox.py",
            ],
        )
        .unwrap();
    assert_eq!(req.reviewers, vec!["Akarys42", "MarkKoz", "jb3", "mbaruh"]);
    let resolved: Vec<&str> = req.resolutions.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        resolved,
        vec!["bot/utils/regex.py", "bot/exts/utils/snekbox.py", "bot/rules/mentions.py"]
    );
    assert!(req.unowned.is_empty());
    assert_eq!(facts.of("review")[0].0, "success");
}

#[test]
fn unowned_changes_are_listed() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default());
    let file = api.load_str(&fixture());
    let req = api
        .review_request(&file, vec!["bot/__main__.py".to_string(), "poetry.lock".to_string()])
        .unwrap();
    assert_eq!(req.reviewers, vec!["Akarys42"]);
    let unowned: Vec<&str> = req.unowned.iter().map(|p| p.as_str()).collect();
    assert_eq!(unowned, vec!["bot/__main__.py"]);
}

#[test]
fn empty_change_needs_no_reviewers() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default());
    let file = api.load_str(&fixture());
    let req = api.review_request(&file, Vec::<String>::new()).unwrap();
    assert!(req.reviewers.is_empty());
    assert!(req.unowned.is_empty());
}

#[test]
fn reviewer_order_follows_change_order_not_path_order() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default());
    let file = api.load_str("/zeta/** @first\n/alpha/** @second\n");
    let req = api.review_request(&file, ["zeta/a.py", "alpha/b.py", "./zeta/a.py"]).unwrap();
    assert_eq!(req.reviewers, vec!["first", "second"]);
    let resolved: Vec<&str> = req.resolutions.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(resolved, vec!["zeta/a.py", "alpha/b.py"]);
}
