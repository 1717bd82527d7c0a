//! Round aggregation over the results worksheet.
//!
//! The `INVOER` tab lists one table per division. A table starts at a header
//! row (division name in column B, `EINDSTAND` in column F) and runs until a
//! blank row or the next header. Everything from the `BEKER` marker row down
//! is cup football and is ignored.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use topscore_core::{
    ClubRegistry, Diagnostics, DivisionTable, Identity, MatchRow, PlayerKey,
    normalize_division_name,
};
use topscore_sheet::Worksheet;

use crate::narration::extract_score_events;

pub const HEADER_MARKER: &str = "EINDSTAND";
pub const CUP_MARKER: &str = "beker";

pub const HOME_COLUMN: usize = 2;
pub const AWAY_COLUMN: usize = 4;
pub const MARKER_COLUMN: usize = 6;
pub const SCORERS_COLUMN: usize = 12;

/// Goals scored by one player in the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundEntry {
    /// First spelling seen in the sheet
    pub key: PlayerKey,
    pub goals: u32,
    /// Canonical group of the first division the player appeared in
    pub group: String,
}

/// Per-player totals of one round, keyed by normalized identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTotals {
    entries: IndexMap<Identity, RoundEntry>,
    filtered_out: usize,
}

impl RoundTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add goals for a player. The first call for an identity fixes its
    /// spelling and group.
    pub fn add(&mut self, key: PlayerKey, goals: u32, group: &str) {
        self.entries
            .entry(key.identity())
            .and_modify(|entry| entry.goals = entry.goals.saturating_add(goals))
            .or_insert_with(|| RoundEntry {
                key,
                goals,
                group: group.to_string(),
            });
    }

    pub fn get(&self, key: &PlayerKey) -> Option<&RoundEntry> {
        self.entries.get(&key.identity())
    }

    pub fn entries(&self) -> impl Iterator<Item = &RoundEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct scorers dropped because their club is not
    /// recognized.
    pub fn filtered_out(&self) -> usize {
        self.filtered_out
    }

    pub fn goals_this_round(&self) -> IndexMap<PlayerKey, u32> {
        self.entries()
            .map(|e| (e.key.clone(), e.goals))
            .collect()
    }

    pub fn group_of(&self) -> IndexMap<PlayerKey, String> {
        self.entries()
            .map(|e| (e.key.clone(), e.group.clone()))
            .collect()
    }
}

fn cell_text<S: Worksheet + ?Sized>(sheet: &S, row: usize, col: usize) -> &str {
    sheet.cell(row, col).map(str::trim).unwrap_or_default()
}

fn is_cup_marker<S: Worksheet + ?Sized>(sheet: &S, row: usize) -> bool {
    cell_text(sheet, row, HOME_COLUMN).to_lowercase() == CUP_MARKER
}

fn is_header<S: Worksheet + ?Sized>(sheet: &S, row: usize) -> bool {
    !cell_text(sheet, row, HOME_COLUMN).is_empty()
        && cell_text(sheet, row, MARKER_COLUMN) == HEADER_MARKER
}

/// Read the division tables above the cup section.
///
/// Tables whose headers name the same division are folded into one, in the
/// position of the first.
pub fn division_tables<S: Worksheet + ?Sized>(sheet: &S) -> Vec<DivisionTable> {
    let max_row = sheet.max_row();
    let mut tables: IndexMap<String, Vec<MatchRow>> = IndexMap::new();

    let mut row = 1;
    while row <= max_row {
        if is_cup_marker(sheet, row) {
            log::debug!("Cup section starts at row {row}; ignoring the rest of the sheet");
            break;
        }
        if !is_header(sheet, row) {
            row += 1;
            continue;
        }

        let division = normalize_division_name(cell_text(sheet, row, HOME_COLUMN));
        log::debug!("Division header '{division}' at row {row}");
        let rows = tables.entry(division).or_default();

        row += 1;
        while row <= max_row && !is_cup_marker(sheet, row) && !is_header(sheet, row) {
            let home_team = cell_text(sheet, row, HOME_COLUMN);
            let away_team = cell_text(sheet, row, AWAY_COLUMN);
            if home_team.is_empty() && away_team.is_empty() {
                break;
            }
            rows.push(MatchRow {
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
                scorers_text: cell_text(sheet, row, SCORERS_COLUMN).to_string(),
            });
            row += 1;
        }
    }

    tables
        .into_iter()
        .map(|(division, rows)| DivisionTable { division, rows })
        .collect()
}

/// Count each recognized club's scorers across all division tables.
pub fn aggregate_round<S: Worksheet + ?Sized>(
    sheet: &S,
    clubs: &ClubRegistry,
    diagnostics: &mut Diagnostics,
) -> RoundTotals {
    let mut totals = RoundTotals::new();
    let mut filtered: HashSet<Identity> = HashSet::new();

    for table in division_tables(sheet) {
        let group = table.group();
        let mut counts: IndexMap<PlayerKey, u32> = IndexMap::new();

        for row in table.rows.iter().filter(|r| !r.scorers_text.is_empty()) {
            for event in
                extract_score_events(&row.scorers_text, &row.home_team, &row.away_team, diagnostics)
            {
                *counts
                    .entry(PlayerKey::with_club(event.scorer, event.club))
                    .or_default() += 1;
            }
        }

        for (key, goals) in counts {
            let club = key.club.as_deref().unwrap_or_default();
            if club.is_empty() || !clubs.contains(club) {
                log::debug!("Skipping {} ({club}): club not recognized", key.name);
                filtered.insert(key.identity());
                continue;
            }
            let key = PlayerKey::with_club(key.name.trim(), club.trim());
            totals.add(key, goals, &group);
        }
    }

    totals.filtered_out = filtered.len();
    log::debug!(
        "Round totals: {} scorers, {} filtered out",
        totals.len(),
        totals.filtered_out
    );
    totals
}

#[cfg(test)]
#[path = "tests/round_tests.rs"]
mod tests;
