// Default RepoTree implementation walking the working copy on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::adapters::RepoTree;
use crate::constants::SKIPPED_DIRS;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::RepoPath;

#[derive(Clone, Debug)]
pub struct FsRepoTree {
    root: PathBuf,
}

impl FsRepoTree {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl RepoTree for FsRepoTree {
    fn files(&self) -> Result<Vec<RepoPath>> {
        let mut out = Vec::new();
        let walker = WalkDir::new(&self.root).follow_links(false).into_iter().filter_entry(|e| {
            e.depth() == 0
                || !(e.file_type().is_dir()
                    && SKIPPED_DIRS.iter().any(|d| e.file_name() == std::ffi::OsStr::new(d)))
        });
        for entry in walker {
            let entry = entry.map_err(|e| Error::new(ErrorKind::Io, format!("walk: {e}")))?;
            if entry.file_type().is_dir() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|_| Error::new(ErrorKind::InvalidPath, "walk escaped root"))?;
            out.push(RepoPath::from_rooted(&self.root, rel)?);
        }
        out.sort();
        Ok(out)
    }
}
