//! Shared data model for the cumulative topscorer converters.
//!
//! Holds the player identity rules, competition-group labels, the
//! recognized-club registry, the error taxonomy reported to callers, and the
//! request-scoped diagnostics collector.

pub mod clubs;
pub mod diagnostics;
pub mod error;
pub mod group;
pub mod identity;
pub mod types;

pub use clubs::{ClubRegistry, RECOGNIZED_CLUBS};
pub use diagnostics::Diagnostics;
pub use error::ConversionError;
pub use group::{
    COMBINED_DIVISION, FALLBACK_GROUP, PREFERRED_ORDER, canonical_group, normalize_division_name,
};
pub use identity::{Identity, PlayerKey, UNKNOWN_SCORER, is_unknown_scorer, normalize_name};
pub use types::{DivisionTable, MatchRow, MergedEntry, MergedTotals, ScoreEvent, StandingEntry};

/// Name of the results-sheet tab holding the round's fixtures.
pub const DEFAULT_SHEET_NAME: &str = "INVOER";

/// Options that control a cumulation run.
#[derive(Debug, Clone)]
pub struct CumulateOptions {
    /// Worksheet to read from the results workbook.
    pub sheet_name: String,

    /// Clubs whose scorers count towards the standings.
    pub clubs: ClubRegistry,
}

impl Default for CumulateOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            clubs: ClubRegistry::default(),
        }
    }
}

impl CumulateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn clubs(mut self, clubs: ClubRegistry) -> Self {
        self.clubs = clubs;
        self
    }
}
