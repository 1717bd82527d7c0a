//! Best-effort text recovery from legacy `.doc` uploads.
//!
//! Two shapes show up in practice: RTF saved with a `.doc` extension, and
//! real binary Word documents. RTF is stripped directly. For binary documents
//! the whole buffer is decoded twice (UTF-16LE and Windows-1252), the control
//! bytes are thrown away, and the candidate that looks most like a standings
//! document wins. Below [`MIN_CONFIDENCE`] the upload is rejected rather than
//! passing garbage downstream.

use std::sync::LazyLock;

use encoding_rs::{UTF_16LE, WINDOWS_1252};
use regex::Regex;
use topscore_core::ConversionError;

use crate::plain::decode_text_best_effort;
use crate::rtf::strip_rtf;

/// Minimum keyword score a decoded candidate needs to be accepted.
///
/// A heuristic boundary: one line break per line plus weighted keyword hits.
pub const MIN_CONFIDENCE: usize = 5;

const RTF_SIGNATURE: &[u8] = b"{\\rtf";

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Recover plain text from a legacy `.doc` buffer.
pub fn extract_legacy_doc_text(raw: &[u8]) -> Result<String, ConversionError> {
    if raw.starts_with(RTF_SIGNATURE) {
        log::debug!("Legacy document carries an RTF signature");
        return Ok(strip_rtf(&decode_text_best_effort(raw)));
    }

    let mut best: Option<(String, usize)> = None;
    for (label, candidate) in decode_candidates(raw) {
        let cleaned = clean_candidate(&candidate);
        let score = keyword_score(&cleaned);
        log::debug!("Legacy document candidate {label}: score {score}");
        if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
            best = Some((cleaned, score));
        }
    }

    let (text, score) = best.unwrap_or_default();
    let text = BLANK_RUN.replace_all(&text, "\n\n").trim().to_string();
    if text.is_empty() || score < MIN_CONFIDENCE {
        log::warn!("Rejecting legacy document: best candidate scored {score}");
        return Err(ConversionError::unreadable_legacy_document(
            "Kon .doc niet betrouwbaar uitlezen. Sla het bestand op als .docx en upload opnieuw.",
        ));
    }
    Ok(text)
}

/// Score how much a decoded candidate resembles a standings document.
pub fn keyword_score(text: &str) -> usize {
    let lower = text.to_lowercase();
    lower.matches("klasse").count() * 10
        + lower.matches("divisie").count() * 10
        + lower.matches("doelpunt").count() * 4
        + lower.matches('\n').count()
}

fn decode_candidates(raw: &[u8]) -> [(&'static str, String); 2] {
    let (utf16, _) = UTF_16LE.decode_without_bom_handling(raw);
    let (western, _) = WINDOWS_1252.decode_without_bom_handling(raw);
    [
        ("utf-16le", utf16.into_owned()),
        ("windows-1252", western.into_owned()),
    ]
}

/// Keep printable ASCII, tabs and line breaks, and the Latin letter blocks;
/// drop everything else. Line endings are normalized to `\n`.
fn clean_candidate(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_document_char(c)).collect();
    kept.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_document_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | ' '..='~' | '\u{A0}'..='\u{2FF}' | '\u{1E00}'..='\u{1EFF}'
    )
}

#[cfg(test)]
#[path = "tests/legacy_tests.rs"]
mod tests;
