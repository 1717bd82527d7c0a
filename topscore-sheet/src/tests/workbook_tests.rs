use rust_xlsxwriter::Workbook;

use super::*;
use crate::grid::Worksheet;

fn results_workbook(sheet_name: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();
    // Rows and columns are 0-indexed in the writer
    sheet.write_string(2, 1, "Eerste klasse D").unwrap();
    sheet.write_string(2, 5, "EINDSTAND").unwrap();
    sheet.write_string(3, 1, "Sittard").unwrap();
    sheet.write_string(3, 3, "Born").unwrap();
    sheet.write_number(3, 4, 2.0).unwrap();
    sheet.write_number(3, 6, 1.5).unwrap();
    sheet.write_string(3, 11, "J. Jansen 1-0").unwrap();
    workbook.save_to_buffer().unwrap()
}

#[test]
fn test_detect_prefers_signature() {
    assert_eq!(WorkbookFormat::detect(b"PK\x03\x04rest", "uitslagen.xls"), WorkbookFormat::Xlsx);
    assert_eq!(WorkbookFormat::detect(OLE_SIGNATURE, "uitslagen.xlsx"), WorkbookFormat::Xls);
    assert_eq!(WorkbookFormat::detect(b"", "UITSLAGEN.XLS"), WorkbookFormat::Xls);
    assert_eq!(WorkbookFormat::detect(b"", "uitslagen"), WorkbookFormat::Xlsx);
}

#[test]
fn test_open_xlsx_keeps_absolute_positions() {
    let raw = results_workbook("INVOER");
    let grid = open_results_sheet(&raw, "uitslagen.xlsx", "INVOER").unwrap();
    assert_eq!(grid.cell(3, 2), Some("Eerste klasse D"));
    assert_eq!(grid.cell(3, 6), Some("EINDSTAND"));
    assert_eq!(grid.cell(4, 2), Some("Sittard"));
    assert_eq!(grid.cell(4, 4), Some("Born"));
    assert_eq!(grid.cell(4, 12), Some("J. Jansen 1-0"));
    assert_eq!(grid.cell(1, 1), None);
    assert_eq!(grid.max_row(), 4);
}

#[test]
fn test_numbers_render_as_written() {
    let raw = results_workbook("INVOER");
    let grid = open_results_sheet(&raw, "uitslagen.xlsx", "INVOER").unwrap();
    assert_eq!(grid.cell(4, 5), Some("2"));
    assert_eq!(grid.cell(4, 7), Some("1.5"));
}

#[test]
fn test_missing_worksheet() {
    let raw = results_workbook("Blad1");
    let err = open_results_sheet(&raw, "uitslagen.xlsx", "INVOER").unwrap_err();
    assert!(matches!(err, ConversionError::MissingWorksheet(_)));
    assert_eq!(err.code(), "TS-CUM-004");
}

#[test]
fn test_garbage_xlsx_is_unreadable() {
    let err = open_results_sheet(b"PK\x03\x04 not really a zip", "u.xlsx", "INVOER").unwrap_err();
    assert!(matches!(err, ConversionError::UnreadableSpreadsheet(_)));
}

#[cfg(feature = "xls")]
#[test]
fn test_garbage_xls_is_unreadable() {
    let err = open_results_sheet(b"not an ole file", "u.xls", "INVOER").unwrap_err();
    assert!(matches!(err, ConversionError::UnreadableSpreadsheet(_)));
}

#[cfg(not(feature = "xls"))]
#[test]
fn test_xls_without_reader_is_unsupported() {
    let err = open_results_sheet(OLE_SIGNATURE, "u.xls", "INVOER").unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedLegacySpreadsheet(_)));
}
