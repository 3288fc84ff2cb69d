pub mod fixed;

/// Source of truth for which owner handles exist on the hosting platform.
pub trait HandleDirectory: Send + Sync {
    /// Whether `name` (handle without `@`, `org/team`, or email) is a known owner.
    fn contains(&self, name: &str) -> bool;
}
