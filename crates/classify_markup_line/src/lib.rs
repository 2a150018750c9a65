// crates/classify_markup_line/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;

static HIGHLIGHT_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"highlight +gap").unwrap());

static HIGHLIGHT_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"endhighlight").unwrap());

static CODE_INCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{% +include +code-link\.html.*file="(.*)".*%\}"#).unwrap());

/// The category a single markup line falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a highlighted region. Nothing is emitted for the line itself.
    HighlightStart,
    /// Closes a highlighted region.
    HighlightEnd,
    /// References an external code file to be inlined; carries the captured
    /// relative path.
    CodeInclude(String),
    /// Any other line.
    Plain,
}

/// Classifies one markup line.
///
/// All three recognized patterns match anywhere within the line, not just a
/// whole-line match. The checks run in a fixed priority order (highlight
/// start, highlight end, code include) and the first match wins.
pub fn classify_line(line: &str) -> LineKind {
    if HIGHLIGHT_START_RE.is_match(line) {
        return LineKind::HighlightStart;
    }
    if HIGHLIGHT_END_RE.is_match(line) {
        return LineKind::HighlightEnd;
    }
    if let Some(caps) = CODE_INCLUDE_RE.captures(line) {
        return LineKind::CodeInclude(caps[1].to_string());
    }
    LineKind::Plain
}
