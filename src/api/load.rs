//! api/load.rs: locating, size-gating, and parsing CODEOWNERS files.

use std::path::{Path, PathBuf};

use log::Level;
use serde_json::json;

use crate::constants::CODEOWNERS_LOCATIONS;
use crate::logging::{AuditSink, FactsEmitter, StageLogger};
use crate::parse::parse_codeowners;
use crate::policy::checks::check_file_size;
use crate::policy::RiskLevel;
use crate::types::CodeOwners;

use super::errors::{exit_code_for, id_str, ApiError, ErrorId};

/// First existing CODEOWNERS location under `root`, in the platform's search order.
pub fn locate(root: &Path) -> Result<PathBuf, ApiError> {
    CODEOWNERS_LOCATIONS
        .iter()
        .map(|rel| root.join(rel))
        .find(|p| p.is_file())
        .ok_or_else(|| ApiError::NotFound(root.display().to_string()))
}

pub(super) fn from_root<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    root: &Path,
) -> Result<CodeOwners, ApiError> {
    let path = locate(root).map_err(|e| {
        api.audit.log(Level::Error, "load: no CODEOWNERS file (E_NOT_FOUND)");
        e
    })?;
    from_file(api, &path)
}

pub(super) fn from_file<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    path: &Path,
) -> Result<CodeOwners, ApiError> {
    let md = std::fs::metadata(path)
        .map_err(|e| ApiError::FilesystemError(format!("{}: {e}", path.display())))?;
    if let Some(finding) = check_file_size(md.len(), api.policy.max_file_bytes) {
        match api.policy.checks.level_for(finding.id) {
            RiskLevel::Stop => {
                let empty = CodeOwners::default();
                let ctx = api.audit_ctx(&empty);
                StageLogger::new(&ctx)
                    .parse()
                    .path(path.display().to_string())
                    .merge(json!({
                        "error": finding.message,
                        "error_id": id_str(ErrorId::E_TOO_LARGE),
                        "exit_code": exit_code_for(ErrorId::E_TOO_LARGE),
                    }))
                    .emit_failure();
                api.audit.log(Level::Error, "load: CODEOWNERS file too large (E_TOO_LARGE)");
                return Err(ApiError::TooLarge { size: md.len(), limit: api.policy.max_file_bytes });
            }
            RiskLevel::Warn | RiskLevel::Allow => {}
        }
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ApiError::FilesystemError(format!("{}: {e}", path.display())))?;
    let file = parse_codeowners(&text);
    emit_parsed(api, &file, Some(path));
    Ok(file)
}

pub(super) fn from_str<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    text: &str,
) -> CodeOwners {
    let file = parse_codeowners(text);
    emit_parsed(api, &file, None);
    file
}

/// Emit the `parse` fact. An oversized file that got this far is flagged with `E_TOO_LARGE`:
/// `warn` when policy tolerates it, `failure` when it stops (only reachable from `load_str`).
fn emit_parsed<E: FactsEmitter, A: AuditSink>(
    api: &super::Ownerlint<E, A>,
    file: &CodeOwners,
    path: Option<&Path>,
) {
    let ctx = api.audit_ctx(file);
    let slog = StageLogger::new(&ctx);
    let mut evt = slog.parse().merge(json!({
        "rule_count": file.rule_count(),
        "line_count": file.lines.len(),
        "file_bytes": file.source_bytes,
    }));
    if let Some(p) = path {
        evt = evt.path(p.display().to_string());
    }
    let oversized = check_file_size(file.source_bytes, api.policy.max_file_bytes)
        .map(|f| (api.policy.checks.level_for(f.id), f));
    match oversized {
        Some((level @ (RiskLevel::Warn | RiskLevel::Stop), finding)) => {
            let evt = evt.merge(json!({
                "error": finding.message,
                "error_id": id_str(ErrorId::E_TOO_LARGE),
                "exit_code": exit_code_for(ErrorId::E_TOO_LARGE),
            }));
            api.audit.log(Level::Warn, &finding.message);
            if level == RiskLevel::Stop {
                evt.emit_failure();
            } else {
                evt.emit_warn();
            }
        }
        _ => evt.emit_success(),
    }
    api.audit.log(Level::Debug, &format!("load: parsed {} rules", file.rule_count()));
}
