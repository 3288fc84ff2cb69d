//! Parser for CODEOWNERS files.
//!
//! Parsing is total: every input line becomes a [`Line`](crate::types::Line). Content the hosting
//! platform would reject (bad globs, malformed owners) is kept verbatim so that the lint stage can
//! point at it instead of the parser silently dropping it.

mod lexer;
mod render;

use crate::constants::COMMENT_PREFIX;
use crate::types::{CodeOwners, Line, Owner, OwnershipRule};

pub use lexer::{escape_token, tokenize};

/// Parse CODEOWNERS text into lines. Handles `\n` and `\r\n` endings and a leading BOM.
#[must_use]
pub fn parse_codeowners(text: &str) -> CodeOwners {
    let source_bytes = text.len() as u64;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines = text
        .lines()
        .enumerate()
        .map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect();
    CodeOwners { lines, source_bytes }
}

fn parse_line(line: usize, raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(comment) = trimmed.strip_prefix(COMMENT_PREFIX) {
        return Line::Comment(comment.to_string());
    }
    let mut tokens = tokenize(trimmed).into_iter();
    // Non-empty after trim and not a comment, so there is at least one token.
    let pattern = tokens.next().unwrap_or_default();
    let owners = tokens
        .take_while(|t| !t.starts_with(COMMENT_PREFIX))
        .map(|t| Owner::parse(&t))
        .collect();
    Line::Rule(OwnershipRule { line, pattern, owners })
}
