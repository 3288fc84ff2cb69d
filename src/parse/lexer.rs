//! Line tokenizer. Splits on unescaped whitespace; `\ ` keeps a literal space inside a token.

/// Split a trimmed line into whitespace-separated tokens, unescaping `\ `.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek().is_some_and(|n| *n == ' ' || *n == '\t') => {
                if let Some(n) = chars.next() {
                    cur.push(n);
                }
            }
            c if c.is_whitespace() => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

/// Inverse of the unescaping done by [`tokenize`], for patterns and owners alike.
pub fn escape_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        if c == ' ' || c == '\t' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
