use serde::Deserialize;

/// How a lint finding is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Stop,
    Warn,
    Allow,
}

/// Per-check risk levels.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Checks {
    pub invalid_pattern: RiskLevel,
    pub malformed_owner: RiskLevel,
    pub duplicate_pattern: RiskLevel,
    pub missing_owners: RiskLevel,
    pub duplicate_owner: RiskLevel,
    pub unknown_owner: RiskLevel,
    pub file_too_large: RiskLevel,
}

impl Default for Checks {
    fn default() -> Self {
        Self {
            invalid_pattern: RiskLevel::Stop,
            malformed_owner: RiskLevel::Stop,
            duplicate_pattern: RiskLevel::Stop,
            missing_owners: RiskLevel::Warn,
            duplicate_owner: RiskLevel::Warn,
            unknown_owner: RiskLevel::Stop,
            file_too_large: RiskLevel::Stop,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OwnerRules {
    /// Every owner must be known to a `HandleDirectory`; without one, lint stops.
    pub strict: bool,
    pub allow_email: bool,
}

impl Default for OwnerRules {
    fn default() -> Self {
        Self { strict: false, allow_email: true }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Coverage {
    /// Any unowned file makes the coverage report fail.
    pub require_full: bool,
    /// Globs excluded from coverage accounting.
    pub ignore: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FactsMode {
    /// Zero timestamps and drop volatile fields.
    pub redact: bool,
    /// Mask email owners in emitted facts.
    pub mask_emails: bool,
}

impl Default for FactsMode {
    fn default() -> Self {
        Self { redact: true, mask_emails: true }
    }
}
