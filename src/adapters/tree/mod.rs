pub mod fs;

use crate::types::{errors::Result, RepoPath};

pub trait RepoTree: Send + Sync {
    /// List every tracked file, sorted.
    /// # Errors
    /// Returns an error if the tree cannot be read.
    fn files(&self) -> Result<Vec<RepoPath>>;
}

/// A fixed list of paths, for callers that already know the file set (e.g. `git ls-files`).
#[derive(Clone, Debug, Default)]
pub struct ListedTree {
    paths: Vec<RepoPath>,
}

impl ListedTree {
    /// Build from path strings.
    /// # Errors
    /// Returns an error for the first path that does not normalize.
    pub fn from_strs<'a>(paths: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut out = paths.into_iter().map(RepoPath::parse).collect::<Result<Vec<_>>>()?;
        out.sort();
        out.dedup();
        Ok(Self { paths: out })
    }
}

impl RepoTree for ListedTree {
    fn files(&self) -> Result<Vec<RepoPath>> {
        Ok(self.paths.clone())
    }
}
