//! Pattern compilation and owner resolution.
//!
//! A [`Pattern`] is a single CODEOWNERS glob compiled to a regex. A [`RuleSet`] is every valid rule
//! of a file compiled once, resolving repository paths to their owning rule under a [`Precedence`].

mod glob;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CodeOwners, OwnershipRule, RepoPath, Resolution};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("unsupported {what} in pattern `{pattern}`")]
    Unsupported { pattern: String, what: &'static str },
    #[error("invalid pattern `{pattern}`: {reason}")]
    Invalid { pattern: String, reason: &'static str },
    #[error("pattern `{pattern}` failed to compile: {msg}")]
    Compile { pattern: String, msg: String },
}

/// A compiled CODEOWNERS glob.
#[derive(Clone, Debug)]
pub struct Pattern {
    text: String,
    regex: Regex,
    anchored: bool,
    specificity: usize,
}

impl Pattern {
    pub fn new(text: &str) -> Result<Self, PatternError> {
        let t = glob::translate(text)?;
        let regex = Regex::new(&t.regex).map_err(|e| PatternError::Compile {
            pattern: text.to_string(),
            msg: e.to_string(),
        })?;
        let specificity = text.chars().filter(|c| !matches!(c, '*' | '?' | '/')).count();
        Ok(Pattern {
            text: text.to_string(),
            regex,
            anchored: t.anchored,
            specificity,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the pattern only matches relative to the repository root.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Count of literal characters; used by `Precedence::MostSpecific`.
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    /// Match a repository-relative path (`/` separators, no leading slash).
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path.trim_start_matches('/'))
    }
}

/// Which rule wins when several patterns match the same path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// Last matching rule in file order (hosting platform behaviour).
    #[default]
    LastMatch,
    /// Matching rule with the most literal characters; ties go to the later rule.
    MostSpecific,
}

#[derive(Clone, Debug)]
struct CompiledRule {
    rule: OwnershipRule,
    pattern: Pattern,
}

/// All valid rules of a file, compiled for resolution.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    skipped: Vec<(usize, PatternError)>,
    precedence: Precedence,
}

impl RuleSet {
    /// Compile every rule. Rules with invalid patterns are skipped, as the platform skips them,
    /// and recorded with their line in [`RuleSet::skipped`].
    pub fn compile(file: &CodeOwners, precedence: Precedence) -> Self {
        let mut rules = Vec::new();
        let mut skipped = Vec::new();
        for r in file.rules() {
            match Pattern::new(&r.pattern) {
                Ok(pattern) => rules.push(CompiledRule { rule: r.clone(), pattern }),
                Err(e) => skipped.push((r.line, e)),
            }
        }
        RuleSet { rules, skipped, precedence }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn skipped(&self) -> &[(usize, PatternError)] {
        &self.skipped
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Compiled rules in file order.
    pub fn rules(&self) -> impl Iterator<Item = (&OwnershipRule, &Pattern)> + '_ {
        self.rules.iter().map(|c| (&c.rule, &c.pattern))
    }

    fn matching(&self, path: &str) -> impl Iterator<Item = &CompiledRule> + '_ {
        let path = path.to_string();
        self.rules.iter().filter(move |c| c.pattern.matches(&path))
    }

    /// The rule owning `path`, if any rule matches.
    pub fn owners_of(&self, path: &str) -> Option<&OwnershipRule> {
        let winner = match self.precedence {
            Precedence::LastMatch => self.matching(path).last(),
            // max_by_key returns the last maximum, so ties resolve to the later rule.
            Precedence::MostSpecific => self.matching(path).max_by_key(|c| c.pattern.specificity()),
        };
        winner.map(|c| &c.rule)
    }

    pub fn resolve(&self, path: &RepoPath) -> Resolution {
        Resolution {
            path: path.clone(),
            rule: self.owners_of(path.as_str()).cloned(),
            matched_lines: self.matching(path.as_str()).map(|c| c.rule.line).collect(),
        }
    }
}
