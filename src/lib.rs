#![forbid(unsafe_code)]
//! Ownerlint: parse, lint, and evaluate CODEOWNERS review-assignment rules.
//!
//! Model highlights:
//! - A CODEOWNERS file is parsed losslessly into lines (blank, comment, rule); parsing never fails,
//!   malformed content is surfaced by the lint stage instead.
//! - Patterns follow the hosting platform's matching rules (anchoring, `*`, `**`, `?`, directory suffixes)
//!   and are compiled once into a `RuleSet` that resolves owners for repository-relative paths.
//! - Every stage emits structured facts through a `FactsEmitter`, with deterministic ids and redaction.

pub mod adapters;
pub mod api;
pub mod constants;
pub mod logging;
pub mod parse;
pub mod pattern;
pub mod policy;
pub mod report;
pub mod types;

pub use api::*;
pub use parse::parse_codeowners;
pub use pattern::{Pattern, Precedence, RuleSet};
