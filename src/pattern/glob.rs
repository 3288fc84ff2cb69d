//! Glob to regex translation following the hosting platform's CODEOWNERS rules.

use super::PatternError;

/// Translated form of a glob, ready to hand to `regex`.
pub(crate) struct Translated {
    pub regex: String,
    pub anchored: bool,
}

fn unsupported(pattern: &str, what: &'static str) -> PatternError {
    PatternError::Unsupported { pattern: pattern.to_string(), what }
}

fn invalid(pattern: &str, reason: &'static str) -> PatternError {
    PatternError::Invalid { pattern: pattern.to_string(), reason }
}

/// Reject syntax the platform does not support before translating.
fn validate(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if pattern.starts_with('!') {
        return Err(unsupported(pattern, "negation"));
    }
    if pattern.contains('[') || pattern.contains(']') {
        return Err(unsupported(pattern, "character class"));
    }
    if pattern.contains('\\') {
        return Err(unsupported(pattern, "escape sequence"));
    }
    if pattern.contains("***") {
        return Err(invalid(pattern, "more than two consecutive `*`"));
    }
    Ok(())
}

fn translate_segment(seg: &str, out: &mut String) {
    let mut prev_star = false;
    for c in seg.chars() {
        match c {
            '*' => {
                if !prev_star {
                    out.push_str("[^/]*");
                }
                prev_star = true;
                continue;
            }
            '?' => out.push_str("[^/]"),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
        prev_star = false;
    }
}

pub(crate) fn translate(pattern: &str) -> Result<Translated, PatternError> {
    validate(pattern)?;

    let dir_only = pattern.ends_with('/');
    let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
    let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let anchored = trimmed.starts_with('/') || body.contains('/');
    if body.is_empty() {
        return Err(invalid(pattern, "pattern names the repository root"));
    }

    let segs: Vec<&str> = body.split('/').collect();
    if segs.iter().any(|s| s.is_empty()) {
        return Err(invalid(pattern, "empty path segment"));
    }

    let mut re = String::from("^");
    if !anchored {
        re.push_str("(?:.*/)?");
    }
    let n = segs.len();
    for (i, seg) in segs.iter().enumerate() {
        let last = i + 1 == n;
        if *seg == "**" {
            if last {
                re.push_str(".*");
            } else {
                re.push_str("(?:[^/]+/)*");
            }
            continue;
        }
        translate_segment(seg, &mut re);
        if !last {
            re.push('/');
        }
    }

    let tail = segs[n - 1];
    if tail == "**" {
        // already open-ended
    } else if dir_only {
        re.push_str("/.*");
    } else if tail == "*" && n > 1 {
        // `dir/*` covers direct children only
    } else {
        re.push_str("(?:/.*)?");
    }
    re.push('$');

    Ok(Translated { regex: re, anchored })
}
