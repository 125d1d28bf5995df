//! Caption text to URL token.

use super::BLANK_TOKEN;

/// Encodes caption text as a URL-path-safe token.
///
/// Substitutions, in order:
/// - `-` → `--` and `_` → `__` (escapes the space and blank markers)
/// - `?` → `~q`, `%` → `~p`, `#` → `~h`, `/` → `~s`
/// - each run of whitespace → a single `-`
/// - empty result → `_` (blank caption)
///
/// The token never contains raw `?`, `%`, `#`, `/`, or whitespace, so it is
/// safe as a single path segment. Total over any input.
pub fn encode_caption(caption: &str) -> String {
    let mut out = String::with_capacity(caption.len() + 2);
    let mut in_whitespace = false;

    for c in caption.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        match c {
            '-' => out.push_str("--"),
            '_' => out.push_str("__"),
            '?' => out.push_str("~q"),
            '%' => out.push_str("~p"),
            '#' => out.push_str("~h"),
            '/' => out.push_str("~s"),
            _ => out.push(c),
        }
    }

    if out.is_empty() {
        return BLANK_TOKEN.to_string();
    }
    out
}
