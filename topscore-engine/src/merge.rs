//! Merge of prior standings with the current round.
//!
//! Players are matched on their normalized identity. The prior document's
//! spelling always wins; players new this round keep the spelling of the
//! results sheet.

use std::collections::HashMap;

use topscore_core::{
    ConversionError, FALLBACK_GROUP, Identity, MergedEntry, MergedTotals, PlayerKey,
};

use crate::round::RoundTotals;
use crate::standings::Standings;

const DUPLICATE_MESSAGE: &str = "De bron-stand bevat dezelfde speler meerdere keren bij dezelfde club. \
     Pas dit aan en probeer opnieuw.";

/// Add the round's goals to the prior standings.
///
/// Fails when two prior lines share an identity; summing them silently would
/// hide an error in the source document.
pub fn merge(prior: &Standings, round: &RoundTotals) -> Result<MergedTotals, ConversionError> {
    let mut merged = MergedTotals::new();
    let mut by_identity: HashMap<Identity, PlayerKey> = HashMap::new();

    for entry in prior.iter().filter(|e| !e.key.is_unknown_scorer()) {
        if let Some(existing) = by_identity.insert(entry.key.identity(), entry.key.clone()) {
            log::warn!(
                "Duplicate prior entry: '{}' and '{}' ({})",
                existing.name,
                entry.key.name,
                entry.key.club.as_deref().unwrap_or_default()
            );
            return Err(ConversionError::duplicate_identity(DUPLICATE_MESSAGE));
        }
        merged.insert(
            entry.key.clone(),
            MergedEntry {
                goals: entry.goals,
                group: entry.group.clone(),
                extra: entry.extra.clone(),
            },
        );
    }

    let mut matched = 0usize;
    let mut added = 0usize;
    for entry in round.entries().filter(|e| !e.key.is_unknown_scorer()) {
        let target = by_identity.get(&entry.key.identity());
        if let Some(existing) = target.and_then(|key| merged.get_mut(key)) {
            existing.goals = existing.goals.saturating_add(entry.goals);
            matched += 1;
            continue;
        }

        let group = if entry.group.is_empty() {
            FALLBACK_GROUP.to_string()
        } else {
            entry.group.clone()
        };
        merged.insert(
            entry.key.clone(),
            MergedEntry {
                goals: entry.goals,
                group: Some(group),
                extra: None,
            },
        );
        added += 1;
    }

    log::debug!("Merge: {matched} existing players scored, {added} new players");
    Ok(merged)
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
