use indexmap::IndexMap;
use serde::Serialize;

use crate::group::canonical_group;
use crate::identity::PlayerKey;

/// One player line of a prior-standings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
    pub key: PlayerKey,
    pub goals: u32,
    /// Canonical competition group of the heading the line appeared under
    pub group: Option<String>,
    /// Free text noted after the club inside the parentheses
    pub extra: Option<String>,
}

/// A single attributed goal inferred from a narration cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEvent {
    pub scorer: String,
    pub club: String,
}

impl ScoreEvent {
    pub fn new(scorer: impl Into<String>, club: impl Into<String>) -> Self {
        Self {
            scorer: scorer.into(),
            club: club.into(),
        }
    }
}

/// One fixture row beneath a division header in a results sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub home_team: String,
    pub away_team: String,
    pub scorers_text: String,
}

/// The fixtures listed under one division header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionTable {
    /// Division label after collapsing the third/fourth division pair
    pub division: String,
    pub rows: Vec<MatchRow>,
}

impl DivisionTable {
    /// Canonical competition group for this division.
    pub fn group(&self) -> String {
        canonical_group(&self.division)
    }
}

/// Merged total for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedEntry {
    pub goals: u32,
    pub group: Option<String>,
    pub extra: Option<String>,
}

/// Output of the merge: players in insertion order (prior standings first,
/// then newly seen round scorers).
pub type MergedTotals = IndexMap<PlayerKey, MergedEntry>;
