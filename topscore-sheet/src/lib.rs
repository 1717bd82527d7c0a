//! Worksheet access for results workbooks.
//!
//! Both `.xlsx` and legacy `.xls` workbooks are read into the same
//! 1-indexed [`Grid`], so the round aggregation never needs to know which
//! container a sheet came from.

pub mod grid;
pub mod workbook;

pub use grid::{Grid, Worksheet};
pub use workbook::{WorkbookFormat, open_results_sheet};
