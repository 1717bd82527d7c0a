use thiserror::Error;

/// Errors that can occur while writing a `.docx` package.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
