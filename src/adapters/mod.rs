pub mod directory;
pub mod tree;

pub use directory::fixed::StaticDirectory;
pub use directory::HandleDirectory;
pub use tree::fs::FsRepoTree;
pub use tree::{ListedTree, RepoTree};
