//! Ranking and canonical text output.
//!
//! Output format, one block per group:
//! ```text
//! Eerste klasse
//!
//! 1. Jan Jansen (Sittard) - 9 doelpunten
//! Piet Peters (Born, ex-Heer)
//! 2. Karel Smits (Haelen) - 1 doelpunt
//! ```
//! The second line shares rank 1 and therefore carries neither rank nor
//! count. The standings parser reads this format back.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;
use topscore_core::group::display_rank;
use topscore_core::{FALLBACK_GROUP, MergedTotals};

/// One ranked player within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    /// True when the player shares the rank of the line above.
    pub shares_rank: bool,
    pub name: String,
    pub club: Option<String>,
    pub extra: Option<String>,
    pub goals: u32,
}

impl RankedPlayer {
    /// The `(club, extra)` annotation, or an empty string without a club.
    fn annotation(&self) -> String {
        match (self.club.as_deref(), self.extra.as_deref()) {
            (Some(club), Some(extra)) if !club.is_empty() => format!(" ({club}, {extra})"),
            (Some(club), _) if !club.is_empty() => format!(" ({club})"),
            _ => String::new(),
        }
    }

    /// The player's line in canonical text.
    pub fn line(&self) -> String {
        if self.shares_rank {
            return format!("{}{}", self.name, self.annotation());
        }
        let noun = if self.goals == 1 { "doelpunt" } else { "doelpunten" };
        format!(
            "{}. {}{} - {} {noun}",
            self.rank,
            self.name,
            self.annotation(),
            self.goals
        )
    }
}

/// Players of one competition group in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedGroup {
    pub group: String,
    pub players: Vec<RankedPlayer>,
}

/// Bucket merged totals by group and rank each bucket.
///
/// Canonical groups come first in their fixed order, then any other groups
/// alphabetically.
pub fn ranked_groups(merged: &MergedTotals) -> Vec<RankedGroup> {
    let mut buckets: IndexMap<String, Vec<RankedPlayer>> = IndexMap::new();
    for (key, entry) in merged {
        let group = entry
            .group
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(FALLBACK_GROUP);
        buckets.entry(group.to_string()).or_default().push(RankedPlayer {
            rank: 0,
            shares_rank: false,
            name: key.name.clone(),
            club: key.club.clone(),
            extra: entry.extra.clone(),
            goals: entry.goals,
        });
    }

    let mut groups: Vec<RankedGroup> = buckets
        .into_iter()
        .map(|(group, mut players)| {
            players.sort_by(compare_players);
            assign_ranks(&mut players);
            RankedGroup { group, players }
        })
        .collect();
    groups.sort_by(|a, b| {
        display_rank(&a.group)
            .cmp(&display_rank(&b.group))
            .then_with(|| a.group.cmp(&b.group))
    });
    groups
}

/// Goals descending, then club ascending with clubless players last, then
/// name.
fn compare_players(a: &RankedPlayer, b: &RankedPlayer) -> Ordering {
    b.goals
        .cmp(&a.goals)
        .then_with(|| match (sort_club(a), sort_club(b)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.name.cmp(&b.name))
}

fn sort_club(player: &RankedPlayer) -> Option<&str> {
    player.club.as_deref().filter(|c| !c.is_empty())
}

fn assign_ranks(players: &mut [RankedPlayer]) {
    let mut rank = 0;
    let mut last_goals = None;
    for player in players {
        if last_goals == Some(player.goals) {
            player.shares_rank = true;
        } else {
            rank += 1;
            last_goals = Some(player.goals);
        }
        player.rank = rank;
    }
}

/// Render merged totals as canonical ranking text.
pub fn serialize(merged: &MergedTotals) -> String {
    let mut lines = Vec::new();
    for group in ranked_groups(merged) {
        lines.push(group.group.clone());
        lines.push(String::new());
        lines.extend(group.players.iter().map(RankedPlayer::line));
        lines.push(String::new());
    }
    format!("{}\n", lines.join("\n").trim())
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;
