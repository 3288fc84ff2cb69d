//! Lint stage: runs every check, applies policy severities, and emits per-finding rows.
//!
//! Side-effects:
//! - Emits one `lint` fact per reported finding (decision `failure` for stops, `warn` for warnings).
//! - Emits a `lint.summary` fact with counts and, on failure, summary error ids and exit code.
//! - Returns a `LintReport` whose rows are ordered by line, suitable for YAML export via
//!   `report::to_yaml()`.

use log::Level;
use serde_json::json;

use crate::api::errors::{error_id_from_str, exit_code_for, id_str, ErrorId};
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::policy::checks::{self, Finding};
use crate::policy::RiskLevel;
use crate::types::ids::{rule_id, ruleset_id};
use crate::types::report::Severity;
use crate::types::{CodeOwners, LintReport};

mod rows;

use rows::RowEmitter;

fn collect_findings<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();

    findings.extend(checks::check_file_size(file.source_bytes, api.policy.max_file_bytes));

    if api.policy.owners.strict && api.directory.is_none() {
        findings.push(Finding {
            id: ErrorId::E_UNKNOWN_OWNER,
            line: 0,
            pattern: None,
            owner: None,
            message: "unknown owner check impossible: strict owner policy requires a HandleDirectory"
                .to_string(),
        });
    }

    for rule in file.rules() {
        findings.extend(checks::check_pattern(rule));
        findings.extend(checks::check_owner_syntax(rule, api.policy.owners.allow_email));
        findings.extend(checks::check_missing_owners(rule));
        findings.extend(checks::check_duplicate_owners(rule));
        if let Some(dir) = api.directory.as_deref() {
            findings.extend(checks::check_known_owners(rule, dir));
        }
    }
    findings.extend(checks::check_duplicate_patterns(file));

    // Stable: per-line order of checks is kept.
    findings.sort_by_key(|f| f.line);
    findings
}

pub(crate) fn run<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
) -> LintReport {
    let rs_id = ruleset_id(file);
    let ctx = api.audit_ctx(file);
    let emitter = RowEmitter { ctx: &ctx };

    let mut report = LintReport {
        ok: true,
        ruleset_id: rs_id.to_string(),
        rule_count: file.rule_count(),
        ..LintReport::default()
    };

    // line -> rule id, for attaching ids to findings
    let ids: Vec<(usize, String)> = file
        .rules()
        .enumerate()
        .map(|(idx, r)| (r.line, rule_id(&rs_id, r, idx).to_string()))
        .collect();

    for finding in collect_findings(api, file) {
        let strict_gate = finding.line == 0 && finding.id == ErrorId::E_UNKNOWN_OWNER;
        let level = if strict_gate { RiskLevel::Stop } else { api.policy.checks.level_for(finding.id) };
        let severity = match level {
            RiskLevel::Stop => Severity::Stop,
            RiskLevel::Warn => Severity::Warn,
            RiskLevel::Allow => continue,
        };
        match severity {
            Severity::Stop => report.stops.push(finding.message.clone()),
            Severity::Warn => report.warnings.push(finding.message.clone()),
        }
        let rid = ids.iter().find(|(line, _)| *line == finding.line).map(|(_, id)| id.clone());
        emitter.emit_row(&mut report.rows, finding, severity, rid);
    }
    report.ok = report.stops.is_empty();

    let slog = StageLogger::new(&ctx);
    let mut evt = slog.lint_summary().merge(json!({
        "rule_count": report.rule_count,
        "stops": report.stops.len(),
        "warnings": report.warnings.len(),
        "checks": report.checks(),
    }));
    if report.ok {
        evt.emit_success();
        api.audit.log(Level::Info, "lint: passed");
    } else {
        let chain = summary_error_ids(&report);
        evt = evt.field("summary_error_ids", json!(chain)).field(
            "exit_code",
            json!(exit_code_for(first_error_id(&report))),
        );
        evt.emit_failure();
        api.audit.log(Level::Warn, "lint: policy rejected CODEOWNERS (E_POLICY)");
    }
    report
}

/// Distinct check ids of stop rows in row order, followed by `E_POLICY`.
fn summary_error_ids(report: &LintReport) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for r in report.rows.iter().filter(|r| r.severity == Severity::Stop) {
        if !out.contains(&r.check.as_str()) {
            out.push(r.check.as_str());
        }
    }
    out.push(id_str(ErrorId::E_POLICY));
    out
}

/// Error id of the first stop row, used for the summary exit code.
fn first_error_id(report: &LintReport) -> ErrorId {
    report
        .rows
        .iter()
        .find(|r| r.severity == Severity::Stop)
        .and_then(|r| error_id_from_str(&r.check))
        .unwrap_or(ErrorId::E_POLICY)
}
