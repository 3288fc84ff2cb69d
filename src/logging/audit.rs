// Audit helpers that emit facts across Ownerlint stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the `parse`, `lint`, `lint.summary`, `resolve`,
//   `review`, and `coverage` stages.
// - Ensures a minimal envelope is present on every fact: `schema_version`, `ts`, `ruleset_id`, `path`.
// - Applies redaction (zeroed timestamps, dropped timings) and email masking per mode.
use crate::constants::{FACTS_SCHEMA_VERSION, SUBSYSTEM};
use crate::logging::redact::{mask_emails, redact_event};
use crate::logging::FactsEmitter;
use serde_json::{json, Value};

#[derive(Clone, Debug, Default)]
pub(crate) struct AuditMode {
    pub redact: bool,
    pub mask_emails: bool,
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub ruleset_id: String,
    pub ts: String,
    pub mode: AuditMode,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(
        facts: &'a dyn FactsEmitter,
        ruleset_id: String,
        ts: String,
        mode: AuditMode,
    ) -> Self {
        Self {
            facts,
            ruleset_id,
            ts,
            mode,
        }
    }
}

/// Stage for typed audit emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Lint,
    LintSummary,
    Resolve,
    Review,
    Coverage,
}

impl Stage {
    pub fn as_event(&self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::Lint => "lint",
            Stage::LintSummary => "lint.summary",
            Stage::Resolve => "resolve",
            Stage::Review => "review",
            Stage::Coverage => "coverage",
        }
    }
}

/// Decision severity for audit events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over audit emission with centralized envelope+redaction.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self { Self { ctx } }

    pub fn parse(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Parse) }
    pub fn lint(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Lint) }
    pub fn lint_summary(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::LintSummary) }
    pub fn resolve(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Resolve) }
    pub fn review(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Review) }
    pub fn coverage(&'a self) -> EventBuilder<'a> { EventBuilder::new(self.ctx, Stage::Coverage) }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn rule(mut self, rule_id: impl Into<String>) -> Self {
        self.fields.insert("rule_id".into(), json!(rule_id.into()));
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = Value::Object(self.fields);
        if let Some(obj) = fields.as_object_mut() {
            obj.entry("decision").or_insert(json!(decision.as_str()));
        }
        redact_and_emit(self.ctx, self.stage.as_event(), decision.as_str(), fields);
    }

    pub fn emit_success(self) { self.emit(Decision::Success) }
    pub fn emit_failure(self) { self.emit(Decision::Failure) }
    pub fn emit_warn(self) { self.emit(Decision::Warn) }
}

fn redact_and_emit(ctx: &AuditCtx, event: &str, decision: &str, mut fields: Value) {
    if let Some(obj) = fields.as_object_mut() {
        obj.entry("schema_version").or_insert(json!(FACTS_SCHEMA_VERSION));
        obj.entry("ts").or_insert(json!(ctx.ts));
        obj.entry("ruleset_id").or_insert(json!(ctx.ruleset_id));
        obj.entry("path").or_insert(json!(""));
    }
    let out = if ctx.mode.redact { redact_event(fields) } else { fields };
    let out = if ctx.mode.mask_emails { mask_emails(out) } else { out };
    ctx.facts.emit(SUBSYSTEM, event, decision, out);
}
