pub mod errors;
pub mod ids;
pub mod report;
pub mod repo_path;
pub mod rule;

pub use errors::*;
pub use ids::*;
pub use report::*;
pub use repo_path::*;
pub use rule::*;
