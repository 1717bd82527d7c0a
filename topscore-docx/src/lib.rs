//! Word rendering of canonical ranking text.
//!
//! Each group becomes a `Heading 3` paragraph followed by a numbered list
//! that restarts at 1. Players sharing a rank sit in one list item, one per
//! line, and only the list number is bold.

pub mod error;
pub mod package;
pub mod sections;

pub use error::DocxError;
pub use package::render_docx;
pub use sections::{Section, is_section_heading, parse_sections};
