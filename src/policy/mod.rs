//! Policy configuration and lint checks.
//!
//! Consumers typically construct a [`Policy`](crate::policy::Policy) via presets
//! (`github_preset`, `strict_preset`) or from YAML and then customize fields before creating an
//! [`Ownerlint`](crate::Ownerlint) instance.
//!
//! Submodules:
//! - `config`: policy struct and presets
//! - `types`: grouped knobs
//! - `checks`: the individual lint checks

pub mod checks;
pub mod config;
pub mod types;

pub use config::Policy;
pub use types::RiskLevel;
