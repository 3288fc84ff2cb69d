//! Deterministic UUIDv5 identifiers for rulesets and rules.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `ruleset_id` and `rule_id` are reproducible across runs for the same
//! sequence of rules.
use std::fmt::Write;
use uuid::Uuid;

use super::rule::{CodeOwners, OwnershipRule};
use crate::constants::NS_TAG;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Serialize a rule into a stable, human-readable string used for UUIDv5 input.
/// Line numbers are left out so that inserting comments does not change IDs.
fn serialize_rule(r: &OwnershipRule) -> String {
    let mut s = r.pattern.clone();
    for o in &r.owners {
        s.push(' ');
        s.push_str(&o.raw);
    }
    s
}

/// Compute a deterministic UUIDv5 for a CODEOWNERS file by serializing its rules in order.
#[must_use]
pub fn ruleset_id(file: &CodeOwners) -> Uuid {
    let mut s = String::new();
    for r in file.rules() {
        s.push_str(&serialize_rule(r));
        s.push('\n');
    }
    Uuid::new_v5(&namespace(), s.as_bytes())
}

/// Compute a deterministic UUIDv5 for a rule as a function of the ruleset ID,
/// the rule's serialized form, and its position among the rules.
#[must_use]
pub fn rule_id(ruleset_id: &Uuid, rule: &OwnershipRule, idx: usize) -> Uuid {
    let mut s = serialize_rule(rule);
    let _ = write!(s, "#{idx}");
    Uuid::new_v5(ruleset_id, s.as_bytes())
}
