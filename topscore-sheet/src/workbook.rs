use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};
use topscore_core::ConversionError;

use crate::grid::Grid;

const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";
const OLE_SIGNATURE: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

/// Container format of a results workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Office Open XML spreadsheet (`.xlsx`)
    Xlsx,
    /// Legacy binary spreadsheet (`.xls`)
    Xls,
}

impl WorkbookFormat {
    /// Decide the container from its leading bytes, then its filename.
    ///
    /// A ZIP signature always means `.xlsx`, whatever the upload was called.
    pub fn detect(raw: &[u8], filename: &str) -> Self {
        if raw.starts_with(ZIP_SIGNATURE) {
            return Self::Xlsx;
        }
        if raw.starts_with(OLE_SIGNATURE) || filename.trim().to_lowercase().ends_with(".xls") {
            return Self::Xls;
        }
        Self::Xlsx
    }
}

/// Open the named worksheet of a results workbook held in memory.
pub fn open_results_sheet(
    raw: &[u8],
    filename: &str,
    sheet_name: &str,
) -> Result<Grid, ConversionError> {
    let format = WorkbookFormat::detect(raw, filename);
    log::debug!("Opening results workbook '{filename}' as {format:?}");

    match format {
        WorkbookFormat::Xlsx => {
            let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(raw)).map_err(|e| {
                ConversionError::unreadable_spreadsheet(format!("Kon Excelbestand niet openen: {e}"))
            })?;
            read_sheet(workbook, sheet_name)
        }
        WorkbookFormat::Xls => open_legacy(raw, sheet_name),
    }
}

#[cfg(feature = "xls")]
fn open_legacy(raw: &[u8], sheet_name: &str) -> Result<Grid, ConversionError> {
    let workbook: calamine::Xls<_> = open_workbook_from_rs(Cursor::new(raw)).map_err(|e| {
        ConversionError::unreadable_spreadsheet(format!("Kon Excelbestand niet openen: {e}"))
    })?;
    read_sheet(workbook, sheet_name)
}

#[cfg(not(feature = "xls"))]
fn open_legacy(_raw: &[u8], _sheet_name: &str) -> Result<Grid, ConversionError> {
    Err(ConversionError::unsupported_legacy_spreadsheet(
        "Lezen van .xls is niet beschikbaar. Upload een .xlsx-bestand.",
    ))
}

fn read_sheet<R, RS>(mut workbook: R, sheet_name: &str) -> Result<Grid, ConversionError>
where
    R: Reader<RS>,
    RS: std::io::Read + std::io::Seek,
    R::Error: std::fmt::Display,
{
    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(ConversionError::missing_worksheet(format!(
            "Tabblad '{sheet_name}' ontbreekt in het Excelbestand."
        )));
    }

    let range = workbook.worksheet_range(sheet_name).map_err(|e| {
        ConversionError::unreadable_spreadsheet(format!("Kon tabblad '{sheet_name}' niet lezen: {e}"))
    })?;
    Ok(range_to_grid(&range))
}

/// Copy a calamine range into a 1-indexed grid, keeping absolute positions.
fn range_to_grid(range: &Range<Data>) -> Grid {
    let mut grid = Grid::new();
    let Some((start_row, start_col)) = range.start() else {
        return grid;
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    for (r, c, value) in range.used_cells() {
        if let Some(text) = cell_text(value) {
            grid.set(start_row + r + 1, start_col + c + 1, text);
        }
    }
    if let Some((end_row, _)) = range.end() {
        grid.extend_rows(end_row as usize + 1);
    }
    grid
}

/// Render a cell the way it reads in the sheet. Whole numbers lose their
/// fractional part so a score of `3` does not come out as `3.0`.
fn cell_text(value: &Data) -> Option<String> {
    let text = match value {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
#[path = "tests/workbook_tests.rs"]
mod tests;
