use serde_json::json;

use crate::api::errors::id_str;
use crate::logging::audit::AuditCtx;
use crate::logging::StageLogger;
use crate::policy::checks::Finding;
use crate::types::report::{LintRow, Severity};

pub(super) struct RowEmitter<'a> {
    pub ctx: &'a AuditCtx<'a>,
}

impl RowEmitter<'_> {
    /// Push a typed row for the finding and emit the matching `lint` fact.
    pub(super) fn emit_row(
        &self,
        rows: &mut Vec<LintRow>,
        finding: Finding,
        severity: Severity,
        rule_id: Option<String>,
    ) {
        let row = LintRow {
            check: id_str(finding.id).to_string(),
            severity,
            line: finding.line,
            rule_id,
            pattern: finding.pattern,
            owner: finding.owner,
            message: finding.message,
        };

        let slog = StageLogger::new(self.ctx);
        let mut evt = slog
            .lint()
            .field("check", json!(row.check))
            .field("line", json!(row.line))
            .field("message", json!(row.message));
        if let Some(id) = &row.rule_id {
            evt = evt.rule(id.clone());
        }
        if let Some(p) = &row.pattern {
            evt = evt.field("pattern", json!(p));
        }
        if let Some(o) = &row.owner {
            evt = evt.field("owner", json!(o));
        }
        match severity {
            Severity::Stop => evt.emit_failure(),
            Severity::Warn => evt.emit_warn(),
        }

        rows.push(row);
    }
}
