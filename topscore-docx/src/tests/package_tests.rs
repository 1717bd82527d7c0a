use std::io::Read;

use zip::ZipArchive;

use super::*;

fn part(docx: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

const RANKING: &str = "Eerste klasse\n\n1. A & B (Born) - 2 doelpunten\nC (Heer)\n\nTweede klasse\n\n1. D (Heer) - 1 doelpunt\n";

#[test]
fn test_package_has_required_parts() {
    let docx = render_docx(RANKING).unwrap();
    let archive = ZipArchive::new(Cursor::new(docx.as_slice())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/_rels/document.xml.rels",
        "word/document.xml",
        "word/styles.xml",
        "word/numbering.xml",
    ] {
        assert!(names.contains(&required), "missing {required}");
    }
}

#[test]
fn test_each_section_restarts_numbering() {
    let docx = render_docx(RANKING).unwrap();
    let numbering = part(&docx, "word/numbering.xml");
    assert_eq!(numbering.matches("<w:abstractNum ").count(), 2);
    assert_eq!(numbering.matches(r#"<w:start w:val="1"/>"#).count(), 2);
    assert!(numbering.contains(r#"<w:b w:val="1"/>"#));

    let document = part(&docx, "word/document.xml");
    assert!(document.contains(r#"<w:numId w:val="1"/>"#));
    assert!(document.contains(r#"<w:numId w:val="2"/>"#));
    assert_eq!(document.matches(r#"<w:pStyle w:val="Heading3"/>"#).count(), 2);
}

#[test]
fn test_tied_lines_use_soft_breaks_and_text_is_escaped() {
    let docx = render_docx(RANKING).unwrap();
    let document = part(&docx, "word/document.xml");
    assert_eq!(document.matches("<w:br/>").count(), 1);
    assert!(document.contains("A &amp; B (Born) - 2 doelpunten"));
    assert!(!document.contains("1. A"));
}

#[test]
fn test_empty_text_renders_empty_body() {
    let docx = render_docx("").unwrap();
    let document = part(&docx, "word/document.xml");
    assert!(document.contains("<w:body></w:body>"));
}
