// src/core/sanitize.rs

/// Collapse whitespace runs (incl. non-breaking spaces) to single spaces.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop anything between `<` and `>`. Good enough for residual markup in
/// already-flattened text; not a general HTML parser.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Free-text cleanup applied by the tabular sink: strip residual tags, then
/// collapse whitespace.
pub fn clean_text<S: AsRef<str>>(s: S) -> String {
    normalize_ws(&strip_tags(s))
}
