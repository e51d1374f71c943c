//! Normalization rules for submitted identifiers and labels.
//!
//! Both functions are pure and idempotent. Labels are treated as opaque
//! display text: markup is removed, nothing is escaped. Escaping belongs to
//! whoever renders the text.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>`/`<style>` blocks, removed together with their content.
static RAW_TEXT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("raw text block pattern is valid")
});

/// A tag opens with `<` directly followed by a letter, `/`, `!` or `?`.
/// A `<` followed by anything else is plain text and survives.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^<>]*>").expect("tag pattern is valid"));

static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("octet pattern is valid"));

/// Returns `true` for the characters a type key may contain.
#[must_use]
pub const fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// Normalizes a raw identifier: trim, ASCII-lowercase, keep only `[a-z0-9_-]`.
///
/// The result may be empty, which callers must treat as an invalid identifier.
#[must_use]
pub fn sanitize_key(raw: &str) -> String {
    raw.trim().chars().map(|c| c.to_ascii_lowercase()).filter(|&c| is_key_char(c)).collect()
}

/// Normalizes a raw display label.
///
/// Removes script/style blocks, tags, percent-encoded octets and control
/// characters, collapses whitespace runs to a single space, and trims.
/// Passes repeat until the text is stable, so removing one construct can
/// never leave another one behind.
#[must_use]
pub fn sanitize_text_field(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(input: &str) -> String {
    let text = RAW_TEXT_BLOCK.replace_all(input, "");
    let text = TAG.replace_all(&text, "");
    let text = PERCENT_OCTET.replace_all(&text, "");
    collapse_whitespace(&text)
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if !c.is_control() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed_lowercased_and_restricted() {
        assert_eq!(sanitize_key("  Movie "), "movie");
        assert_eq!(sanitize_key("Book_Review-2"), "book_review-2");
        assert_eq!(sanitize_key("my movie"), "mymovie");
        assert_eq!(sanitize_key("Çafé"), "af");
    }

    #[test]
    fn punctuation_only_key_is_empty() {
        assert_eq!(sanitize_key("!!! ..."), "");
        assert_eq!(sanitize_key(""), "");
    }

    #[test]
    fn tags_are_stripped() {
        assert_eq!(sanitize_text_field("<em>Movies</em>"), "Movies");
        assert_eq!(sanitize_text_field("Film<br/>Noir"), "FilmNoir");
        assert_eq!(sanitize_text_field("<!-- note -->Books"), "Books");
    }

    #[test]
    fn script_and_style_content_is_dropped() {
        assert_eq!(sanitize_text_field("Movies<script>alert(1)</script>"), "Movies");
        assert_eq!(sanitize_text_field("<STYLE type=x>p{}</style >Films"), "Films");
    }

    #[test]
    fn lone_less_than_survives() {
        assert_eq!(sanitize_text_field("a < b"), "a < b");
        assert_eq!(sanitize_text_field("1 < 2 > 0"), "1 < 2 > 0");
        assert_eq!(sanitize_text_field("x <y"), "x <y");
    }

    #[test]
    fn whitespace_and_controls_collapse() {
        assert_eq!(sanitize_text_field("  Movie\t\r\n  Reviews  "), "Movie Reviews");
        assert_eq!(sanitize_text_field("Mo\u{0}vie\u{7f}s"), "Movies");
    }

    #[test]
    fn percent_octets_are_removed() {
        assert_eq!(sanitize_text_field("Movie%20Reviews"), "MovieReviews");
        assert_eq!(sanitize_text_field("100% real"), "100% real");
        assert_eq!(sanitize_text_field("%%4141"), "");
    }

    #[test]
    fn removal_never_reveals_a_tag() {
        assert_eq!(sanitize_text_field("<<b>b>Sneaky"), "Sneaky");
        assert_eq!(sanitize_text_field("<%41b>Sneaky"), "Sneaky");
    }

    #[test]
    fn unicode_text_is_kept() {
        assert_eq!(sanitize_text_field("Фільми"), "Фільми");
        assert_eq!(sanitize_text_field("Café"), "Café");
    }
}
