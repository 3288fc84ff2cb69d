//! Shared crate-wide constants for Ownerlint.
//!
//! Centralizes magic values and default labels used across modules.

/// Locations searched for a CODEOWNERS file, in the order the hosting platform checks them.
pub const CODEOWNERS_LOCATIONS: &[&str] = &[".github/CODEOWNERS", "CODEOWNERS", "docs/CODEOWNERS"];

/// The hosting platform ignores CODEOWNERS files larger than this.
pub const MAX_CODEOWNERS_BYTES: u64 = 3 * 1024 * 1024;

/// Prefix that introduces a user or team handle.
pub const HANDLE_PREFIX: char = '@';

/// Character that starts a comment, either a whole line or the tail of a rule.
pub const COMMENT_PREFIX: char = '#';

/// Directory names never listed by the filesystem repo tree.
pub const SKIPPED_DIRS: &[&str] = &[".git"];

/// Column at which rendered owners start when the longest pattern is shorter than this.
pub const RENDER_MIN_OWNER_COLUMN: usize = 24;

/// UUIDv5 namespace tag for deterministic ruleset/rule IDs.
pub const NS_TAG: &str = "https://ownerlint/codeowners";

/// Schema version stamped on every emitted fact.
pub const FACTS_SCHEMA_VERSION: i64 = 1;

/// Subsystem label carried by every emitted fact.
pub const SUBSYSTEM: &str = "ownerlint";
