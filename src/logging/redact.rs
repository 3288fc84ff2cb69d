use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::types::OwnerKind;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

const MASK: &str = "***";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| TS_ZERO.to_string())
}

/// Timestamp for facts emission: constant zero when redacting, current RFC3339 otherwise.
pub fn ts_for_mode(redact: bool) -> String {
    if redact {
        TS_ZERO.to_string()
    } else {
        now_iso()
    }
}

/// Mask a single owner token if it is an email address.
pub fn mask_owner(raw: &str) -> String {
    if crate::types::Owner::parse(raw).kind == OwnerKind::Email {
        MASK.to_string()
    } else {
        raw.to_string()
    }
}

/// Mask email addresses in `owner` and `owners` fields, and the masked owner inside `message`.
pub fn mask_emails(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        let mut masked: Option<String> = None;
        if let Some(Value::String(o)) = obj.get_mut("owner") {
            let m = mask_owner(o);
            if m != *o {
                masked = Some(std::mem::replace(o, m));
            }
        }
        if let (Some(raw), Some(Value::String(msg))) = (masked, obj.get_mut("message")) {
            *msg = msg.replace(&raw, MASK);
        }
        if let Some(Value::Array(os)) = obj.get_mut("owners") {
            for o in os.iter_mut() {
                if let Value::String(s) = o {
                    *s = mask_owner(s);
                }
            }
        }
    }
    v
}

/// Apply redactions to a fact event for comparison and safe logging.
/// Zeroes timestamps and removes volatile timing fields.
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::String(TS_ZERO.to_string()));
        obj.remove("duration_ms");
    }
    v
}
