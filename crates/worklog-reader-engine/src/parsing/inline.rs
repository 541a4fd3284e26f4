//! # Inline Formatting
//!
//! An ordered chain of global substitutions over text that is already
//! HTML-escaped. The chain injects literal markup, so escaping has to happen
//! first; [`escape_and_format`] does both in the right order.
//!
//! Order is fixed: bold, italic, code, strikethrough, link. Bold runs before
//! italic so `**` pairs are taken before single `*`. Each substitution is
//! non-overlapping and never re-scans its own output.

use std::sync::LazyLock;

use regex::Regex;

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

static CHAIN: LazyLock<[Substitution; 5]> = LazyLock::new(|| {
    let rule = |pattern: &str, replacement| Substitution {
        pattern: Regex::new(pattern).expect("inline pattern is valid"),
        replacement,
    };
    [
        rule(r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        rule(r"\*(.+?)\*", "<em>${1}</em>"),
        rule(r"`(.+?)`", "<code>${1}</code>"),
        rule(r"~~(.+?)~~", "<del>${1}</del>"),
        rule(r"\[(.+?)\]\((.+?)\)", r#"<a href="${2}">${1}</a>"#),
    ]
});

/// Applies the substitution chain to already-escaped text.
pub fn format_inline(escaped: &str) -> String {
    CHAIN.iter().fold(escaped.to_string(), |text, sub| {
        sub.pattern
            .replace_all(&text, sub.replacement)
            .into_owned()
    })
}

/// HTML-escapes raw text, quotes included.
pub fn escape(raw: &str) -> String {
    html_escape::encode_quoted_attribute(raw).into_owned()
}

/// Escapes raw text and then formats it.
pub fn escape_and_format(raw: &str) -> String {
    format_inline(&escape(raw))
}
