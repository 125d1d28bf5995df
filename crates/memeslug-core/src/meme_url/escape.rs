//! URL escaping for assembled meme links.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters percent-encoded by standard URI escaping: controls plus the
/// printable ASCII a URI cannot carry anywhere. Alphanumerics and
/// `;/?:@&=+$,-_.!~*'()#` pass through untouched.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']')
    .add(b'%');

/// Escapes an assembled link for use as a URL.
///
/// Standard URI escaping, then `,` and `'` are additionally converted to
/// `%2C` and `%27` — the service mishandles both in the clear even though
/// URI escaping leaves them alone.
pub fn escape_url(url: &str) -> String {
    utf8_percent_encode(url, URI_ESCAPE)
        .to_string()
        .replace(',', "%2C")
        .replace('\'', "%27")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_apostrophe_are_escaped() {
        assert_eq!(escape_url(","), "%2C");
        assert_eq!(escape_url("'"), "%27");
    }

    #[test]
    fn url_structure_is_preserved() {
        assert_eq!(
            escape_url("https://example.com/a/b.jpg?x=1#frag"),
            "https://example.com/a/b.jpg?x=1#frag"
        );
    }

    #[test]
    fn spaces_and_percent_are_escaped() {
        assert_eq!(escape_url("a b"), "a%20b");
        assert_eq!(escape_url("50%"), "50%25");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        assert_eq!(escape_url("café"), "caf%C3%A9");
    }
}
