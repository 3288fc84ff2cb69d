use ownerlint::policy::Policy;
use ownerlint::report::to_yaml;
use ownerlint::Ownerlint;

use crate::common::{TestAudit, TestEmitter};

#[test]
fn yaml_export_lists_rows_with_rule_ids() {
    let api = Ownerlint::new(TestEmitter::default(), TestAudit, Policy::default());
    let report = api.lint(&api.load_str("*.md @jb3\n*.md @jb3\n"));
    let out = to_yaml(&report);
    assert!(out.contains("check: E_DUPLICATE"), "{out}");
    assert!(out.contains("rule_id:"), "{out}");
    assert!(out.contains("line: 2"), "{out}");
}
