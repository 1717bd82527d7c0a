//! Splitting ranking text into headed sections of list items.

use std::sync::LazyLock;

use regex::Regex;
use topscore_core::FALLBACK_GROUP;

static RANK_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());

static GOALS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*-\s*(\d+)\s+doelpunt(?:en)?\s*$").unwrap());

static STANDALONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

/// A heading with its list items. Each item holds the lines of the players
/// sharing one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<Vec<String>>,
}

fn looks_like_player_line(line: &str) -> bool {
    if line.contains('(') && line.contains(')') {
        return true;
    }
    if GOALS_SUFFIX.is_match(line) {
        return true;
    }
    line.contains('-') && STANDALONE_NUMBER.is_match(line) && line.to_lowercase().contains("doelpunt")
}

/// True for lines that open a new section: an unnumbered line naming a class
/// or division (or the fallback group) that does not read as a player line.
pub fn is_section_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || RANK_PREFIX.is_match(line) {
        return false;
    }
    let upper = line.to_uppercase();
    let names_group = upper.contains("KLASSE")
        || upper.contains("DIVISIE")
        || line.eq_ignore_ascii_case(FALLBACK_GROUP);
    names_group && !looks_like_player_line(line)
}

/// Parse ranking text into sections, keeping the source order.
///
/// A new item starts on every `N.` line and whenever the goal count of a
/// line differs from the item above. Lines without a count join the current
/// item. Lines before the first heading are dropped.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title: Option<String> = None;
    let mut items: Vec<Vec<String>> = Vec::new();
    let mut item: Vec<String> = Vec::new();
    let mut item_goals: Option<u32> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_section_heading(line) {
            flush_item(&mut items, &mut item);
            push_section(&mut sections, title.take(), std::mem::take(&mut items));
            item_goals = None;
            title = Some(line.to_string());
            continue;
        }

        let goals = GOALS_SUFFIX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        if RANK_PREFIX.is_match(line) {
            flush_item(&mut items, &mut item);
            item.push(RANK_PREFIX.replace(line, "").into_owned());
            item_goals = goals;
            continue;
        }

        match goals {
            Some(goals) if item_goals != Some(goals) => {
                flush_item(&mut items, &mut item);
                item.push(line.to_string());
                item_goals = Some(goals);
            }
            _ => item.push(line.to_string()),
        }
    }

    flush_item(&mut items, &mut item);
    push_section(&mut sections, title, items);
    sections
}

fn flush_item(items: &mut Vec<Vec<String>>, item: &mut Vec<String>) {
    if !item.is_empty() {
        items.push(std::mem::take(item));
    }
}

/// Keep a section only when it has a title and at least one item.
fn push_section(sections: &mut Vec<Section>, title: Option<String>, items: Vec<Vec<String>>) {
    if let Some(title) = title.filter(|_| !items.is_empty()) {
        sections.push(Section { title, items });
    }
}

#[cfg(test)]
#[path = "tests/sections_tests.rs"]
mod tests;
