use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::errors::{Error, ErrorKind, Result};

/// Repository-relative path with `/` separators, as CODEOWNERS patterns see it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RepoPath {
    rel: String,
}

impl RepoPath {
    /// Normalizes a path string as reported by a change proposal.
    ///
    /// Leading `/` and `./` segments are dropped and `\` is treated as a separator.
    /// `..` segments are rejected since they would escape the repository root.
    pub fn parse(candidate: &str) -> Result<Self> {
        let mut segs: Vec<&str> = Vec::new();
        for seg in candidate.split(|c: char| c == '/' || c == '\\') {
            match seg {
                "" | "." => {}
                ".." => return Err(Error::new(ErrorKind::Policy, "dotdot")),
                s => segs.push(s),
            }
        }
        if segs.is_empty() {
            return Err(Error::new(ErrorKind::InvalidPath, "empty path"));
        }
        Ok(RepoPath { rel: segs.join("/") })
    }

    /// Creates a RepoPath from a root and candidate filesystem path.
    ///
    /// Absolute candidates must live under `root`; relative candidates are taken as-is.
    pub fn from_rooted(root: &Path, candidate: &Path) -> Result<Self> {
        let effective = if candidate.is_absolute() {
            candidate
                .strip_prefix(root)
                .map_err(|_| Error::new(ErrorKind::Policy, "path escapes root"))?
                .to_path_buf()
        } else {
            candidate.to_path_buf()
        };

        let mut segs: Vec<String> = Vec::new();
        for seg in effective.components() {
            match seg {
                Component::CurDir => {}
                Component::Normal(p) => match p.to_str() {
                    Some(s) => segs.push(s.to_string()),
                    None => return Err(Error::new(ErrorKind::InvalidPath, "non-utf8 component")),
                },
                Component::ParentDir => return Err(Error::new(ErrorKind::Policy, "dotdot")),
                _ => return Err(Error::new(ErrorKind::InvalidPath, "unsupported component")),
            }
        }
        if segs.is_empty() {
            return Err(Error::new(ErrorKind::InvalidPath, "empty path"));
        }
        Ok(RepoPath { rel: segs.join("/") })
    }

    pub fn as_str(&self) -> &str {
        &self.rel
    }

    /// Joins the relative path onto a filesystem root.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        let mut out = root.to_path_buf();
        for seg in self.rel.split('/') {
            out.push(seg);
        }
        out
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rel)
    }
}
