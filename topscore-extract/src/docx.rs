//! Text of a `.docx` package.
//!
//! Lines come out in the order a reader sees them in the body: every
//! top-level paragraph first, then the content of every top-level table,
//! row by row and cell by cell. Each line is trimmed and blank lines are
//! dropped.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use topscore_core::ConversionError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the plain text of a `.docx` package held in memory.
pub fn extract_docx_text(raw: &[u8]) -> Result<String, ConversionError> {
    let mut archive = ZipArchive::new(Cursor::new(raw))
        .map_err(|e| ConversionError::unexpected(format!("Kon .docx niet openen: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ConversionError::unexpected(format!("{DOCUMENT_PART} ontbreekt: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ConversionError::unexpected(format!("Kon {DOCUMENT_PART} niet lezen: {e}")))?;

    let body = parse_document_xml(&xml)?;
    Ok(body.lines().join("\n"))
}

/// Body text split into top-level paragraphs and table-cell lines.
#[derive(Debug, Default)]
struct BodyText {
    paragraphs: Vec<String>,
    table_lines: Vec<String>,
}

impl BodyText {
    fn lines(self) -> Vec<String> {
        let mut lines = self.paragraphs;
        lines.extend(self.table_lines);
        lines
    }
}

fn parse_document_xml(xml: &str) -> Result<BodyText, ConversionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut body = BodyText::default();
    let mut table_depth = 0usize;
    let mut in_text = false;
    let mut paragraph = String::new();
    let mut cell = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ConversionError::unexpected(format!("Ongeldige document-XML: {e}")))?;
        match event {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"p" => paragraph.clear(),
                b"t" => in_text = true,
                b"tbl" => table_depth += 1,
                b"tc" if table_depth == 1 => cell.clear(),
                b"tab" => paragraph.push('\t'),
                b"br" | b"cr" => paragraph.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"tab" => paragraph.push('\t'),
                b"br" | b"cr" => paragraph.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ConversionError::unexpected(format!("Ongeldige tekst: {e}")))?;
                paragraph.push_str(&text);
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if table_depth == 0 => {
                    push_trimmed(&mut body.paragraphs, &paragraph);
                }
                b"p" => {
                    if !cell.is_empty() {
                        cell.push('\n');
                    }
                    cell.push_str(&paragraph);
                }
                b"tc" if table_depth == 1 => {
                    for line in cell.lines() {
                        push_trimmed(&mut body.table_lines, line);
                    }
                    cell.clear();
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(body)
}

fn push_trimmed(lines: &mut Vec<String>, text: &str) {
    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
}

#[cfg(test)]
#[path = "tests/docx_tests.rs"]
mod tests;
