//! api/resolve.rs: single-path resolution and review requests for change proposals.

use std::collections::HashSet;

use log::Level;
use serde_json::json;

use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::pattern::RuleSet;
use crate::types::{CodeOwners, RepoPath, Resolution, ReviewRequest};

use super::errors::ApiError;

fn parse_path(path: &str) -> Result<RepoPath, ApiError> {
    RepoPath::parse(path).map_err(|e| ApiError::InvalidPath(format!("{path}: {}", e.msg)))
}

pub(super) fn one<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
    path: &str,
) -> Result<Resolution, ApiError> {
    let path = parse_path(path)?;
    let rules = RuleSet::compile(file, api.policy.precedence);
    let res = rules.resolve(&path);

    let ctx = api.audit_ctx(file);
    let slog = StageLogger::new(&ctx);
    let evt = slog.resolve().path(path.as_str()).merge(json!({
        "line": res.rule.as_ref().map(|r| r.line),
        "owners": res.rule.as_ref().map(|r| r.owners.iter().map(|o| o.raw.clone()).collect::<Vec<_>>()),
        "matched_lines": res.matched_lines,
    }));
    if res.is_unowned() {
        evt.emit_warn();
    } else {
        evt.emit_success();
    }
    Ok(res)
}

pub(super) fn review<E, A, I, S>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
    changed: I,
) -> Result<ReviewRequest, ApiError>
where
    E: FactsEmitter,
    A: AuditSink,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rules = RuleSet::compile(file, api.policy.precedence);
    // deduped, caller order kept
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for p in changed {
        let path = parse_path(p.as_ref())?;
        if seen.insert(path.clone()) {
            paths.push(path);
        }
    }

    let mut out = ReviewRequest::default();
    for path in paths {
        let res = rules.resolve(&path);
        if res.is_unowned() {
            out.unowned.push(path.clone());
        }
        for name in res.owners() {
            if !out.reviewers.iter().any(|r| r == name) {
                out.reviewers.push(name.to_string());
            }
        }
        out.resolutions.push(res);
    }

    let ctx = api.audit_ctx(file);
    let slog = StageLogger::new(&ctx);
    let evt = slog.review().merge(json!({
        "changed": out.resolutions.len(),
        "owners": out.reviewers,
        "unowned": out.unowned.iter().map(RepoPath::as_str).collect::<Vec<_>>(),
    }));
    if out.unowned.is_empty() {
        evt.emit_success();
    } else {
        evt.emit_warn();
        api.audit.log(
            Level::Warn,
            &format!("review: {} changed path(s) have no owner", out.unowned.len()),
        );
    }
    Ok(out)
}
