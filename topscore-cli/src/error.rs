use std::path::PathBuf;

use thiserror::Error;
use topscore_core::ConversionError;
use topscore_docx::DocxError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// An input file is larger than the configured upload ceiling
    #[error("{} is {size} bytes; the limit is {limit} bytes", path.display())]
    UploadTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Conversion failed; the message carries its code
    #[error("{0}")]
    Conversion(#[from] ConversionError),

    /// Word rendering failed
    #[error("Render error: {0}")]
    Render(#[from] DocxError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
