use ownerlint::adapters::ListedTree;
use ownerlint::api::errors::ApiError;
use ownerlint::policy::Policy;
use ownerlint::ApiBuilder;

use crate::common::{fixture, TestAudit, TestEmitter};

#[test]
fn fixture_against_listed_paths() {
    let tree = ListedTree::from_strs([
        "bot/exts/utils/snekbox.py",
        "bot/__main__.py",
        "tests/bot/test_api.py",
    ])
    .unwrap();
    let api = ApiBuilder::new(TestEmitter::default(), TestAudit, Policy::default())
        .repo_tree(Some(Box::new(tree)))
        .build();
    let file = api.load_str(&fixture());

    let report = api.coverage(&file).unwrap();
    assert_eq!(report.total_files, 3);
    assert_eq!(report.owned_files, 2);
    assert_eq!(report.unowned.len(), 1);
    assert_eq!(report.unowned[0].as_str(), "bot/__main__.py");
    assert!((report.ratio() - 2.0 / 3.0).abs() < 1e-9);
    // only lines 7 and 27 matched anything
    assert_eq!(report.unused_rule_lines.len(), file.rule_count() - 2);
    assert!(!report.unused_rule_lines.contains(&7));
    assert!(!report.unused_rule_lines.contains(&27));
}

#[test]
fn coverage_needs_a_tree() {
    let api = ApiBuilder::new(TestEmitter::default(), TestAudit, Policy::default()).build();
    let file = api.load_str(&fixture());
    assert!(matches!(api.coverage(&file), Err(ApiError::TreeUnavailable(_))));
}
