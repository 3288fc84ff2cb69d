//! Individual lint checks.
//!
//! Each check is pure: it inspects rules (and optionally a handle directory) and returns
//! findings. Severity is applied later by the lint stage from the active policy.

use std::collections::HashMap;

use crate::adapters::HandleDirectory;
use crate::api::errors::ErrorId;
use crate::pattern::Pattern;
use crate::types::{CodeOwners, OwnerKind, OwnershipRule};

use super::types::{Checks, RiskLevel};

/// A single problem found by a check, before severity is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub id: ErrorId,
    pub line: usize,
    pub pattern: Option<String>,
    pub owner: Option<String>,
    pub message: String,
}

impl Finding {
    fn for_rule(id: ErrorId, rule: &OwnershipRule, message: String) -> Self {
        Finding { id, line: rule.line, pattern: Some(rule.pattern.clone()), owner: None, message }
    }

    fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }
}

impl Checks {
    /// Policy risk level for a check id. Ids that are not lint checks always stop.
    pub fn level_for(&self, id: ErrorId) -> RiskLevel {
        match id {
            ErrorId::E_PATTERN => self.invalid_pattern,
            ErrorId::E_OWNER => self.malformed_owner,
            ErrorId::E_DUPLICATE => self.duplicate_pattern,
            ErrorId::E_NO_OWNERS => self.missing_owners,
            ErrorId::E_DUPLICATE_OWNER => self.duplicate_owner,
            ErrorId::E_UNKNOWN_OWNER => self.unknown_owner,
            ErrorId::E_TOO_LARGE => self.file_too_large,
            _ => RiskLevel::Stop,
        }
    }
}

/// The pattern must be glob syntax the platform understands.
pub fn check_pattern(rule: &OwnershipRule) -> Option<Finding> {
    Pattern::new(&rule.pattern).err().map(|e| {
        Finding::for_rule(ErrorId::E_PATTERN, rule, format!("invalid pattern on line {}: {e}", rule.line))
    })
}

/// Every owner must be a well-formed user, team, or (when allowed) email.
pub fn check_owner_syntax(rule: &OwnershipRule, allow_email: bool) -> Vec<Finding> {
    let mut out = Vec::new();
    for o in &rule.owners {
        let reason = match o.kind {
            OwnerKind::Invalid => Some("expected `@user`, `@org/team`, or an email address"),
            OwnerKind::Email if !allow_email => Some("email owners are not allowed"),
            _ => None,
        };
        if let Some(reason) = reason {
            out.push(
                Finding::for_rule(
                    ErrorId::E_OWNER,
                    rule,
                    format!("malformed owner `{}` on line {}: {reason}", o.raw, rule.line),
                )
                .with_owner(&o.raw),
            );
        }
    }
    out
}

pub fn check_missing_owners(rule: &OwnershipRule) -> Option<Finding> {
    if rule.owners.is_empty() {
        Some(Finding::for_rule(
            ErrorId::E_NO_OWNERS,
            rule,
            format!("rule `{}` on line {} has no owners", rule.pattern, rule.line),
        ))
    } else {
        None
    }
}

pub fn check_duplicate_owners(rule: &OwnershipRule) -> Vec<Finding> {
    let mut out = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for o in &rule.owners {
        if seen.contains(&o.raw.as_str()) {
            out.push(
                Finding::for_rule(
                    ErrorId::E_DUPLICATE_OWNER,
                    rule,
                    format!("owner `{}` listed twice on line {}", o.raw, rule.line),
                )
                .with_owner(&o.raw),
            );
        } else {
            seen.push(&o.raw);
        }
    }
    out
}

/// Identical pattern text on more than one rule line. One finding per repeat.
pub fn check_duplicate_patterns(file: &CodeOwners) -> Vec<Finding> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::new();
    for rule in file.rules() {
        match first_seen.get(rule.pattern.as_str()) {
            Some(first) => out.push(Finding::for_rule(
                ErrorId::E_DUPLICATE,
                rule,
                format!("duplicate pattern `{}` on line {} (first on line {first})", rule.pattern, rule.line),
            )),
            None => {
                first_seen.insert(&rule.pattern, rule.line);
            }
        }
    }
    out
}

/// Well-formed owners must exist in the directory. Malformed owners are left to
/// `check_owner_syntax`.
pub fn check_known_owners(rule: &OwnershipRule, dir: &dyn HandleDirectory) -> Vec<Finding> {
    rule.owners
        .iter()
        .filter(|o| o.is_valid() && !dir.contains(o.name()))
        .map(|o| {
            Finding::for_rule(
                ErrorId::E_UNKNOWN_OWNER,
                rule,
                format!("unknown owner `{}` on line {}", o.raw, rule.line),
            )
            .with_owner(&o.raw)
        })
        .collect()
}

/// The platform ignores oversized files entirely.
pub fn check_file_size(size: u64, limit: u64) -> Option<Finding> {
    (size > limit).then(|| Finding {
        id: ErrorId::E_TOO_LARGE,
        line: 0,
        pattern: None,
        owner: None,
        message: format!("file too large: {size} bytes (limit {limit})"),
    })
}
