//! Data-only types for a parsed CODEOWNERS file.
//! Centralized under `crate::types` for cross-layer reuse.

use serde::Serialize;

use crate::constants::HANDLE_PREFIX;

/// Classification of a single owner token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// `@user`
    User,
    /// `@org/team`
    Team,
    /// `someone@example.com`
    Email,
    /// Anything the hosting platform would not recognize.
    Invalid,
}

/// An owner token as written in the file, plus its classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Owner {
    pub raw: String,
    pub kind: OwnerKind,
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

fn is_handle(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_handle_char)
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Owner {
    /// Classifies a raw owner token. Never fails; unrecognized tokens become `OwnerKind::Invalid`.
    pub fn parse(raw: &str) -> Self {
        let kind = match raw.strip_prefix(HANDLE_PREFIX) {
            Some(handle) => match handle.split_once('/') {
                Some((org, team)) if is_handle(org) && is_handle(team) => OwnerKind::Team,
                Some(_) => OwnerKind::Invalid,
                None if is_handle(handle) => OwnerKind::User,
                None => OwnerKind::Invalid,
            },
            None if is_email(raw) => OwnerKind::Email,
            None => OwnerKind::Invalid,
        };
        Owner { raw: raw.to_string(), kind }
    }

    /// Handle without the `@` prefix for users and teams; the raw token otherwise.
    pub fn name(&self) -> &str {
        match self.kind {
            OwnerKind::User | OwnerKind::Team => {
                self.raw.strip_prefix(HANDLE_PREFIX).unwrap_or(&self.raw)
            }
            OwnerKind::Email | OwnerKind::Invalid => &self.raw,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != OwnerKind::Invalid
    }
}

/// A single `<pattern> <owner>...` line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OwnershipRule {
    /// 1-based line number in the source file.
    pub line: usize,
    pub pattern: String,
    pub owners: Vec<Owner>,
}

impl OwnershipRule {
    /// Owner names in declaration order, `@` stripped.
    pub fn owner_names(&self) -> Vec<&str> {
        self.owners.iter().map(Owner::name).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Blank,
    /// Comment text without the leading `#`.
    Comment(String),
    Rule(OwnershipRule),
}

/// A parsed CODEOWNERS file. Keeps comments and blank lines so it can be rendered back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeOwners {
    pub lines: Vec<Line>,
    /// Size of the source text in bytes, as the platform measures it.
    pub source_bytes: u64,
}

impl CodeOwners {
    /// Rules in file order.
    pub fn rules(&self) -> impl Iterator<Item = &OwnershipRule> + '_ {
        self.lines.iter().filter_map(|l| match l {
            Line::Rule(r) => Some(r),
            _ => None,
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules().count()
    }

    /// Ordered `(pattern, owner names)` pairs.
    pub fn pairs(&self) -> Vec<(&str, Vec<&str>)> {
        self.rules().map(|r| (r.pattern.as_str(), r.owner_names())).collect()
    }
}
