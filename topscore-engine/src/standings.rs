//! Parser for the "current standings" text.
//!
//! The document is a sequence of blocks:
//! ```text
//! Eerste klasse
//!
//! 1. Jan Jansen (Sittard) - 9 doelpunten
//! Piet Peters (Born, ex-Heer)
//! 2. Karel Smits (Haelen) - 7 doelpunten
//! ```
//! A line without `(` is a group heading. A player line without its own
//! `- N doelpunt(en)` suffix shares the count of the line above it, which is
//! how tied players are written. Lines that cannot be read are skipped.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use topscore_core::{PlayerKey, StandingEntry, canonical_group};

static PLAYER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(\d+)\.\s*)?(.+?)(?:\s*-\s*(\d+)\s+doelpunt(?:en)?)?\s*$").unwrap()
});

/// Group and free-text annotation of a prior-standings player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub group: Option<String>,
    pub extra: Option<String>,
}

/// Every player line read from a standings document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub entries: Vec<StandingEntry>,
}

impl Standings {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingEntry> {
        self.entries.iter()
    }

    /// Goal totals per player. A later line for the exact same key
    /// overwrites an earlier one.
    pub fn totals(&self) -> IndexMap<PlayerKey, u32> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.goals))
            .collect()
    }

    /// Group and annotation per player, with the same overwrite rule as
    /// [`Standings::totals`].
    pub fn meta(&self) -> IndexMap<PlayerKey, EntryMeta> {
        self.entries
            .iter()
            .map(|e| {
                (
                    e.key.clone(),
                    EntryMeta {
                        group: e.group.clone(),
                        extra: e.extra.clone(),
                    },
                )
            })
            .collect()
    }
}

/// Parse a standings document into player entries.
pub fn parse_standings(text: &str) -> Standings {
    let mut standings = Standings::default();
    let mut current_group: Option<String> = None;
    let mut last_goals_in_block: Option<u32> = None;

    for raw in text.split(['\r', '\n']) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !line.contains('(') {
            current_group = Some(canonical_group(line));
            last_goals_in_block = None;
            continue;
        }

        let Some(caps) = PLAYER_LINE.captures(line) else {
            continue;
        };
        let Some(name_and_annotation) = caps.get(2) else {
            continue;
        };
        let (name, club, extra) = split_name_annotation(name_and_annotation.as_str());

        if let Some(goals) = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok()) {
            last_goals_in_block = Some(goals);
        }

        let Some(goals) = last_goals_in_block else {
            log::debug!("Skipping '{line}': no goal count seen yet in this group");
            continue;
        };

        standings.entries.push(StandingEntry {
            key: PlayerKey::new(name, club),
            goals,
            group: current_group.clone(),
            extra,
        });
    }

    log::debug!("Parsed {} prior-standing entries", standings.len());
    standings
}

/// Split `Name (Club, extra, ...)` on its last parenthesis pair.
///
/// Returns the name, the first comma-separated segment as club, and the
/// remaining segments joined by `", "` as extra. Without a well-formed pair
/// the whole text is the name.
pub fn split_name_annotation(raw: &str) -> (String, Option<String>, Option<String>) {
    let raw = raw.trim();
    let (Some(open), Some(close)) = (raw.rfind('('), raw.rfind(')')) else {
        return (raw.to_string(), None, None);
    };
    if close < open {
        return (raw.to_string(), None, None);
    }

    let name = raw[..open].trim().to_string();
    let inside = raw[open + 1..close].trim();
    let mut parts = inside.split(',').map(str::trim);

    let club = parts
        .next()
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    let extra = parts.collect::<Vec<_>>().join(", ");
    let extra = if extra.is_empty() { None } else { Some(extra) };

    (name, club, extra)
}

#[cfg(test)]
#[path = "tests/standings_tests.rs"]
mod tests;
