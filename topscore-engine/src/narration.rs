//! Score-event extraction from a narration cell.
//!
//! A narration such as `"Jansen 1-0, Pietersen 1-1 en 2-1, eigen doelpunt 2-2"`
//! only records how the score progressed. Each `<name> <home>-<away>` mention
//! is compared with the running score to decide which side scored and how
//! many goals the mention stands for.
//!
//! Fragments that cannot be attributed are recorded in [`Diagnostics`] and
//! skipped; they never fail the conversion.

use std::sync::LazyLock;

use regex::Regex;
use topscore_core::{Diagnostics, ScoreEvent, is_unknown_scorer};

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^,.]+?)\s+(\d+-\d+)").unwrap());

static DANGLING_CONNECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+\s+en$").unwrap());

/// Phrases marking an own goal, matched case-insensitively.
const OWN_GOAL_MARKERS: &[&str] = &["eigen doelpunt", "ed."];

/// Word joining consecutive goals by the same player ("Jansen 1-0 en 2-0").
const CONNECTIVE: &str = "en";

/// Largest jump a single mention may stand for. Bigger jumps are treated as
/// typos in the score.
pub const MAX_GOALS_PER_MENTION: u32 = 20;

/// Which team a goal counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A running score, home goals first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Parse `"H-A"` into a score.
pub fn parse_score(text: &str) -> Option<Score> {
    let (home, away) = text.split_once('-')?;
    Some(Score::new(home.trim().parse().ok()?, away.trim().parse().ok()?))
}

/// Decide which side scored between `prev` and `next`, and how many goals.
///
/// Only one side may have scored. A jump of several goals is a single
/// mention summarizing that player's consecutive goals. Both sides changing,
/// or a score going down, cannot be attributed.
pub fn infer_side(prev: Score, next: Score) -> Option<(Side, u32)> {
    let home_delta = next.home.checked_sub(prev.home)?;
    let away_delta = next.away.checked_sub(prev.away)?;
    match (home_delta, away_delta) {
        (n, 0) if n > 0 => Some((Side::Home, n)),
        (0, n) if n > 0 => Some((Side::Away, n)),
        _ => None,
    }
}

/// Extract one [`ScoreEvent`] per attributed goal, in narration order.
pub fn extract_score_events(
    narration: &str,
    home_team: &str,
    away_team: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<ScoreEvent> {
    let mut events = Vec::new();
    let mut last_scorer: Option<String> = None;
    let mut last_end = 0;
    let mut prev = Score::default();

    for caps in MENTION.captures_iter(narration) {
        let (Some(name_match), Some(score_match)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let raw_name = name_match.as_str().trim();
        let score_text = score_match.as_str();

        let context = narration[last_end..score_match.end()].to_lowercase();
        let segment = narration[name_match.start()..score_match.end()].to_lowercase();
        last_end = score_match.end();

        if is_own_goal(&context) || is_own_goal(&segment) {
            match parse_score(score_text) {
                Some(score) => prev = score,
                None => diagnostics.record(format!("bad-score-eo:{score_text}")),
            }
            continue;
        }

        if !home_team.is_empty()
            && !away_team.is_empty()
            && raw_name.contains(home_team)
            && raw_name.contains(away_team)
        {
            continue;
        }

        let mut name = strip_leading_parentheticals(raw_name).to_string();
        let lower = name.to_lowercase();
        if lower == CONNECTIVE || DANGLING_CONNECTIVE.is_match(&lower) {
            let Some(previous) = &last_scorer else {
                log::debug!("Connective '{name}' without a previous scorer");
                diagnostics.record(format!("en-without-previous:{name}"));
                continue;
            };
            name = previous.clone();
        } else {
            if lower.starts_with("en ") {
                name = name.get(3..).unwrap_or_default().trim().to_string();
            }
            last_scorer = Some(name.clone());
        }

        if !name.chars().any(char::is_alphabetic) || name.chars().count() <= 1 {
            log::debug!("Suspicious scorer name '{name}'");
            diagnostics.record(name.clone());
        }

        let Some(score) = parse_score(score_text) else {
            diagnostics.record(format!("bad-score:{score_text}"));
            continue;
        };

        if is_unknown_scorer(&name) {
            prev = score;
            continue;
        }

        let Some((side, steps)) = infer_side(prev, score) else {
            log::debug!("Unrecognized score sequence {prev} -> {score} in '{narration}'");
            diagnostics.record(format!("weird-score-seq:{prev}->{score}"));
            prev = score;
            continue;
        };
        if steps > MAX_GOALS_PER_MENTION {
            log::debug!("Implausible jump {prev} -> {score} for '{name}'");
            diagnostics.record(format!("implausible-jump:{prev}->{score}"));
            prev = score;
            continue;
        }

        let club = match side {
            Side::Home => home_team,
            Side::Away => away_team,
        };
        for _ in 0..steps {
            events.push(ScoreEvent::new(name.as_str(), club));
        }
        prev = score;
    }

    events
}

fn is_own_goal(text: &str) -> bool {
    OWN_GOAL_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Drop `(...)` fragments from the front of a name, e.g. a minute or a
/// penalty note.
fn strip_leading_parentheticals(name: &str) -> &str {
    let mut name = name;
    while name.starts_with('(') {
        let Some(close) = name.find(')') else {
            break;
        };
        name = name[close + 1..].trim();
    }
    name
}

#[cfg(test)]
#[path = "tests/narration_tests.rs"]
mod tests;
