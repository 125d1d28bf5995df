//! URL token back to caption text.

/// Decodes a caption token back into display text.
///
/// Substitutions, in order:
/// - `-` → space, `_` → removed
/// - `~q` → `?`, then `~p` → `%`, then `~h` → `#`, then `~s` → `/`
///
/// Best-effort inverse of `encode_caption`. Two legacy mappings are kept
/// exactly because existing share links depend on them: literal underscores
/// are dropped (`a_b` encodes to `a__b`, which decodes to `ab`), and tokens
/// whose text happens to contain an escape sequence decode ambiguously.
pub fn decode_caption(token: &str) -> String {
    let mut text = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '-' => text.push(' '),
            '_' => {}
            _ => text.push(c),
        }
    }

    // Escape sequences resolve after the marker pass, so `~_q` decodes to `?`.
    text.replace("~q", "?")
        .replace("~p", "%")
        .replace("~h", "#")
        .replace("~s", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_spaces() {
        assert_eq!(decode_caption("a-b"), "a b");
        assert_eq!(decode_caption("one-does-not-simply"), "one does not simply");
    }

    #[test]
    fn underscores_are_removed() {
        assert_eq!(decode_caption("a__b"), "ab");
        assert_eq!(decode_caption("_"), "");
    }

    #[test]
    fn escape_sequences_are_restored() {
        assert_eq!(decode_caption("50~p"), "50%");
        assert_eq!(decode_caption("a~sb"), "a/b");
        assert_eq!(decode_caption("why~q"), "why?");
        assert_eq!(decode_caption("~h1"), "#1");
    }

    #[test]
    fn each_dash_is_one_space() {
        // Doubled markers do not fold back: `a--b` was a literal dash.
        assert_eq!(decode_caption("a--b"), "a  b");
    }

    #[test]
    fn marker_pass_runs_before_escapes() {
        assert_eq!(decode_caption("~_q"), "?");
        assert_eq!(decode_caption("~-s"), "~ s");
    }

    #[test]
    fn empty_token_decodes_to_empty() {
        assert_eq!(decode_caption(""), "");
    }
}
