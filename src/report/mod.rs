//! Report exporters.
//!
//! Renders lint reports into a YAML sequence for CI artifacts and fixtures.

pub mod yaml;

pub use yaml::to_yaml;
