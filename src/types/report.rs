use serde::Serialize;

use super::repo_path::RepoPath;
use super::rule::OwnershipRule;

/// How a lint finding affects the report outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Stop,
    Warn,
}

/// Typed representation of a lint finding.
/// Serialized to JSON for emission and report rows.
#[derive(Clone, Debug, Serialize)]
pub struct LintRow {
    /// Stable check identifier, e.g. `E_PATTERN`.
    pub check: String,
    pub severity: Severity,
    /// 1-based line in the CODEOWNERS file; 0 for file-level findings.
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct LintReport {
    pub ok: bool,
    pub ruleset_id: String,
    pub rule_count: usize,
    pub warnings: Vec<String>,
    pub stops: Vec<String>,
    pub rows: Vec<LintRow>,
}

impl LintReport {
    /// Distinct check ids that produced a finding, in first-seen order.
    pub fn checks(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.rows {
            if !out.contains(&r.check.as_str()) {
                out.push(r.check.as_str());
            }
        }
        out
    }
}

/// Outcome of resolving a single path against the rules.
#[derive(Clone, Debug, Serialize)]
pub struct Resolution {
    pub path: RepoPath,
    /// Winning rule under the active precedence, if any rule matched.
    pub rule: Option<OwnershipRule>,
    /// Lines of every rule whose pattern matched, in file order.
    pub matched_lines: Vec<usize>,
}

impl Resolution {
    /// Owner names of the winning rule. Empty when unowned.
    pub fn owners(&self) -> Vec<&str> {
        self.rule.as_ref().map(OwnershipRule::owner_names).unwrap_or_default()
    }

    /// True when no rule matched, or the winning rule lists no owners.
    pub fn is_unowned(&self) -> bool {
        self.rule.as_ref().map_or(true, |r| r.owners.is_empty())
    }
}

/// Reviewers a change proposal needs, derived from its changed paths.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReviewRequest {
    /// Owner names in first-seen order across the changed paths.
    pub reviewers: Vec<String>,
    pub unowned: Vec<RepoPath>,
    pub resolutions: Vec<Resolution>,
}

/// How well the rules cover the files currently in the repository.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CoverageReport {
    pub ok: bool,
    pub total_files: usize,
    pub owned_files: usize,
    pub unowned: Vec<RepoPath>,
    /// Lines of rules whose pattern matched no file.
    pub unused_rule_lines: Vec<usize>,
}

impl CoverageReport {
    /// Fraction of files with an owner; 1.0 for an empty tree.
    pub fn ratio(&self) -> f64 {
        if self.total_files == 0 {
            1.0
        } else {
            self.owned_files as f64 / self.total_files as f64
        }
    }
}
