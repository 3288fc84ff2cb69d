use serde::Deserialize;

use crate::constants::MAX_CODEOWNERS_BYTES;
use crate::pattern::Precedence;
use crate::types::errors::{Error, ErrorKind, Result};

use super::types::{Checks, Coverage, FactsMode, OwnerRules, RiskLevel};

/// Policy governs lint severities, owner validation, resolution precedence, and coverage gates.
///
/// Grouped fields provide clearer ownership and ergonomics. Every field has a default, so a
/// YAML policy only needs to name what it changes.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub checks: Checks,
    pub owners: OwnerRules,
    pub coverage: Coverage,
    pub facts: FactsMode,
    pub precedence: Precedence,
    pub max_file_bytes: u64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            checks: Checks::default(),
            owners: OwnerRules::default(),
            coverage: Coverage::default(),
            facts: FactsMode::default(),
            precedence: Precedence::LastMatch,
            max_file_bytes: MAX_CODEOWNERS_BYTES,
        }
    }
}

impl Policy {
    /// Mirror what the hosting platform itself tolerates.
    ///
    /// Duplicate patterns only warn (the later rule wins) and rules without owners are allowed,
    /// since an empty owner list is how a path is deliberately left unowned.
    #[must_use]
    pub fn github_preset() -> Self {
        let mut p = Self::default();
        p.checks.duplicate_pattern = RiskLevel::Warn;
        p.checks.missing_owners = RiskLevel::Allow;
        p
    }

    /// Every check stops, owners must be known to a directory, and every file needs an owner.
    ///
    /// # Example
    /// ```rust
    /// use ownerlint::policy::Policy;
    /// use ownerlint::adapters::StaticDirectory;
    /// use ownerlint::{Ownerlint, logging::JsonlSink};
    ///
    /// let api = Ownerlint::new(JsonlSink::default(), JsonlSink::default(), Policy::strict_preset())
    ///     .with_handle_directory(Box::new(StaticDirectory::new(["MarkKoz", "jb3"])));
    /// let file = api.load_str("bot/exts/utils/snekbox.py @MarkKoz @jb3\n");
    /// assert!(api.lint(&file).ok);
    /// ```
    #[must_use]
    pub fn strict_preset() -> Self {
        let mut p = Self::default();
        p.checks.missing_owners = RiskLevel::Stop;
        p.checks.duplicate_owner = RiskLevel::Stop;
        p.owners.strict = true;
        p.owners.allow_email = false;
        p.coverage.require_full = true;
        p
    }

    /// Read a policy from YAML. Omitted fields keep their defaults.
    ///
    /// # Errors
    /// Returns a `Parse` error when the YAML does not describe a policy.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::new(ErrorKind::Parse, format!("policy: {e}")))
    }
}
