//! Legacy address-template rewriting.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\w+\]").expect("token pattern is valid"))
}

/// Rewrite the first bracket-delimited token of a URL template to its
/// first interior character: `http://x/[level]/[row]` becomes
/// `http://x/l/[row]`. Only the first match is rewritten; templates with
/// no bracket tokens pass through unchanged.
///
/// Legacy sidecar consumers expect single-letter placeholders, so this
/// applies only when the legacy output mode is selected.
pub fn rewrite_first_token(url: &str) -> Cow<'_, str> {
    let m = match token_re().find(url) {
        Some(m) => m,
        None => return Cow::Borrowed(url),
    };

    // m is "[" + word chars + "]", so a second char always exists.
    let mut out = String::with_capacity(url.len());
    out.push_str(&url[..m.start()]);
    if let Some(c) = m.as_str().chars().nth(1) {
        out.push(c);
    }
    out.push_str(&url[m.end()..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_is_shortened() {
        assert_eq!(
            rewrite_first_token("http://x/[level]/[row]/[col]"),
            "http://x/l/[row]/[col]"
        );
    }

    #[test]
    fn test_later_occurrences_of_same_token_are_kept() {
        assert_eq!(rewrite_first_token("[z]/a/[z]"), "z/a/[z]");
    }

    #[test]
    fn test_no_token_passes_through_borrowed() {
        let url = "http://tiles.example.com/static.png";
        assert!(matches!(rewrite_first_token(url), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unmatched_bracket_is_not_a_token() {
        assert_eq!(rewrite_first_token("http://x/[zoom"), "http://x/[zoom");
    }
}
