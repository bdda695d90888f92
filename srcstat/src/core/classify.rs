// src/core/classify.rs
use crate::core::registry::LanguageConfig;

/// Verdict for one line of a code file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// The whole line is a comment.
    Comment,
    /// Code followed by a same-line comment; counts as code AND comment.
    TrailingComment,
    /// Everything else.
    Code,
}

/// Classifies a single line (no trailing newline) against a language's
/// single-line comment token.
///
/// The trailing-comment check is a same-line heuristic: the comment token
/// found at index `i > 0` of the raw line is trusted only when the language's
/// quote characters occur an even number of times before `i`, i.e. every
/// string opened on the line before the token also closed. An odd count
/// means the token sits inside an unterminated-looking string and the whole
/// line is reported as code. Escaped quotes, raw strings and cross-line
/// state are deliberately not modeled.
#[must_use]
pub fn classify_line(line: &str, lang: &LanguageConfig) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    let token = lang.comment.as_str();
    if token.is_empty() {
        return LineKind::Code;
    }

    if trimmed.starts_with(token) {
        return LineKind::Comment;
    }

    if let Some(idx) = line.find(token) {
        if idx > 0 && quotes_balanced_before(line, idx, lang) {
            return LineKind::TrailingComment;
        }
    }

    LineKind::Code
}

fn quotes_balanced_before(line: &str, idx: usize, lang: &LanguageConfig) -> bool {
    let mut count: usize = 0;
    for ch in line[..idx].chars() {
        if lang.double_quote == Some(ch) || lang.single_quote == Some(ch) {
            count = count.saturating_add(1);
        }
    }
    count % 2 == 0
}
