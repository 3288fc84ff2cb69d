//! api/coverage.rs: how much of the repository tree the rules cover.

use log::Level;
use serde_json::json;

use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::pattern::{Pattern, RuleSet};
use crate::types::{CodeOwners, CoverageReport, RepoPath};

use super::errors::{exit_code_for, id_str, ApiError, ErrorId};

pub(super) fn run<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
) -> Result<CoverageReport, ApiError> {
    let tree = api
        .tree
        .as_deref()
        .ok_or_else(|| ApiError::TreeUnavailable("coverage requires a RepoTree".to_string()))?;
    let ignore = api
        .policy
        .coverage
        .ignore
        .iter()
        .map(|g| Pattern::new(g).map_err(|e| ApiError::PolicyViolation(format!("coverage.ignore: {e}"))))
        .collect::<Result<Vec<_>, _>>()?;

    let files: Vec<RepoPath> = tree
        .files()?
        .into_iter()
        .filter(|p| !ignore.iter().any(|g| g.matches(p.as_str())))
        .collect();

    let rules = RuleSet::compile(file, api.policy.precedence);
    let mut used = vec![false; rules.len()];
    let mut report = CoverageReport { total_files: files.len(), ..CoverageReport::default() };
    for path in files {
        for (i, (_, pattern)) in rules.rules().enumerate() {
            if !used[i] && pattern.matches(path.as_str()) {
                used[i] = true;
            }
        }
        if rules.owners_of(path.as_str()).map_or(true, |r| r.owners.is_empty()) {
            report.unowned.push(path);
        } else {
            report.owned_files += 1;
        }
    }
    report.unused_rule_lines = rules
        .rules()
        .zip(used)
        .filter(|(_, u)| !u)
        .map(|((r, _), _)| r.line)
        .collect();
    report.ok = !api.policy.coverage.require_full || report.unowned.is_empty();

    let ctx = api.audit_ctx(file);
    let slog = StageLogger::new(&ctx);
    let mut evt = slog.coverage().merge(json!({
        "total_files": report.total_files,
        "owned_files": report.owned_files,
        "unowned": report.unowned.len(),
        "unused_rule_lines": report.unused_rule_lines,
    }));
    if report.ok {
        if report.unowned.is_empty() {
            evt.emit_success();
        } else {
            evt.emit_warn();
        }
    } else {
        evt = evt.merge(json!({
            "error_id": id_str(ErrorId::E_COVERAGE),
            "exit_code": exit_code_for(ErrorId::E_COVERAGE),
        }));
        evt.emit_failure();
        api.audit.log(
            Level::Warn,
            &format!("coverage: {} unowned file(s) (E_COVERAGE)", report.unowned.len()),
        );
    }
    Ok(report)
}
