//! Render a parsed file back to CODEOWNERS text with owners aligned in one column.

use crate::constants::{COMMENT_PREFIX, RENDER_MIN_OWNER_COLUMN};
use crate::types::{CodeOwners, Line};

use super::lexer::escape_token;

impl CodeOwners {
    /// Render to text. Comments and blank lines are preserved; rule whitespace is normalized.
    #[must_use]
    pub fn render(&self) -> String {
        let width = self
            .rules()
            .map(|r| escape_token(&r.pattern).chars().count() + 1)
            .max()
            .unwrap_or(0)
            .max(RENDER_MIN_OWNER_COLUMN);
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Blank => {}
                Line::Comment(c) => {
                    out.push(COMMENT_PREFIX);
                    out.push_str(c);
                }
                Line::Rule(r) => {
                    let pattern = escape_token(&r.pattern);
                    if r.owners.is_empty() {
                        out.push_str(&pattern);
                    } else {
                        let owners: Vec<String> =
                            r.owners.iter().map(|o| escape_token(&o.raw)).collect();
                        out.push_str(&format!("{:<width$}{}", pattern, owners.join(" ")));
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
