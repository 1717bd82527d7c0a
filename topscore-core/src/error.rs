use thiserror::Error;

/// Fatal conditions of a topscorer conversion.
///
/// Every variant carries a human-readable message; [`ConversionError::code`]
/// gives the short code the calling layer reports alongside it.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A legacy `.doc` buffer did not yield enough recognizable content
    #[error("TS-CUM-003: {0}")]
    UnreadableLegacyDocument(String),

    /// The results workbook has no data tab with the expected name
    #[error("TS-CUM-004: {0}")]
    MissingWorksheet(String),

    /// A legacy `.xls` workbook was supplied but the legacy reader is not built in
    #[error("TS-CUM-004: {0}")]
    UnsupportedLegacySpreadsheet(String),

    /// The results workbook container could not be opened at all
    #[error("TS-CUM-004: {0}")]
    UnreadableSpreadsheet(String),

    /// Two prior-standing lines resolve to the same player identity
    #[error("TS-CUM-005: {0}")]
    DuplicateIdentity(String),

    /// Any other failure while parsing or merging
    #[error("TS-CUM-007: {0}")]
    Unexpected(String),
}

impl ConversionError {
    pub fn unreadable_legacy_document(msg: impl Into<String>) -> Self {
        Self::UnreadableLegacyDocument(msg.into())
    }

    pub fn missing_worksheet(msg: impl Into<String>) -> Self {
        Self::MissingWorksheet(msg.into())
    }

    pub fn unsupported_legacy_spreadsheet(msg: impl Into<String>) -> Self {
        Self::UnsupportedLegacySpreadsheet(msg.into())
    }

    pub fn unreadable_spreadsheet(msg: impl Into<String>) -> Self {
        Self::UnreadableSpreadsheet(msg.into())
    }

    pub fn duplicate_identity(msg: impl Into<String>) -> Self {
        Self::DuplicateIdentity(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Short code identifying the error kind (e.g. `TS-CUM-005`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnreadableLegacyDocument(_) => "TS-CUM-003",
            Self::MissingWorksheet(_)
            | Self::UnsupportedLegacySpreadsheet(_)
            | Self::UnreadableSpreadsheet(_) => "TS-CUM-004",
            Self::DuplicateIdentity(_) => "TS-CUM-005",
            Self::Unexpected(_) => "TS-CUM-007",
        }
    }

    /// The message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::UnreadableLegacyDocument(m)
            | Self::MissingWorksheet(m)
            | Self::UnsupportedLegacySpreadsheet(m)
            | Self::UnreadableSpreadsheet(m)
            | Self::DuplicateIdentity(m)
            | Self::Unexpected(m) => m,
        }
    }
}
