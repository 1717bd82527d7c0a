use std::sync::LazyLock;

use regex::Regex;

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^\{\\rtf1.*?\n").unwrap());
static UNICODE_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\u-?\d+\??").unwrap());
static CONTROL_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\d* ?").unwrap());
static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Reduce flat RTF to its readable text.
///
/// Only handles the simple RTF that word processors write for plain
/// documents: the header line, control words, unicode escapes and group
/// braces are dropped. Embedded objects and tables are not interpreted.
pub fn strip_rtf(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = HEADER.replace(&text, "");
    let text = UNICODE_ESCAPE.replace_all(&text, "");
    let text = CONTROL_WORD.replace_all(&text, "");
    let text = text.replace(['{', '}'], "");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
#[path = "tests/rtf_tests.rs"]
mod tests;
