// HandleDirectory backed by a fixed list, e.g. an org's member export.

use std::collections::HashSet;

use crate::adapters::HandleDirectory;

#[derive(Clone, Debug, Default)]
pub struct StaticDirectory {
    names: HashSet<String>,
}

impl StaticDirectory {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| {
                    let n: String = n.into();
                    n.strip_prefix('@').map(str::to_string).unwrap_or(n)
                })
                .collect(),
        }
    }

    /// One name per line; blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }
}

impl HandleDirectory for StaticDirectory {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
