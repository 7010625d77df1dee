use regex::Regex;
use std::sync::OnceLock;

fn spaces_and_tabs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("static pattern"))
}

fn line_break_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*[\r\n]+\s*").expect("static pattern"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Replaces runs of spaces and tabs with a single space and runs of
/// whitespace containing a CR or LF with a single line feed, then trims.
///
/// Paragraph breaks survive as single newlines; everything else collapses.
pub fn normalize_whitespace(s: &str) -> String {
    let s = spaces_and_tabs().replace_all(s, " ");
    let s = line_break_runs().replace_all(&s, "\n");
    s.trim().to_string()
}

/// Replaces every whitespace run (newlines included) with a single space and
/// trims, producing a one-line string.
pub fn squash_whitespace(s: &str) -> String {
    whitespace_runs().replace_all(s, " ").trim().to_string()
}
