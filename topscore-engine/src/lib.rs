//! Cumulative topscorer engine.
//!
//! Reads the prior standings document and the current round's results
//! workbook, adds the round's goals to the standings and renders the result
//! as canonical ranking text.
//!
//! ```no_run
//! # fn demo(doc: &[u8], xlsx: &[u8]) -> Result<(), topscore_core::ConversionError> {
//! let text = topscore_engine::cumulated_topscorers(doc, "stand.docx", xlsx, "ronde.xlsx")?;
//! print!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod merge;
pub mod narration;
pub mod ranking;
pub mod round;
pub mod standings;

use serde::Serialize;
use topscore_core::{ConversionError, CumulateOptions, Diagnostics, MergedTotals};
use topscore_extract::extract_text;
use topscore_sheet::{Worksheet, open_results_sheet};

pub use merge::merge;
pub use narration::{Side, extract_score_events};
pub use ranking::{RankedGroup, RankedPlayer, ranked_groups, serialize};
pub use round::{RoundEntry, RoundTotals, aggregate_round, division_tables};
pub use standings::{Standings, parse_standings};

/// Counters describing one cumulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CumulationStats {
    /// Players read from the prior standings
    pub prior_players: usize,
    /// Distinct recognized scorers in this round
    pub round_scorers: usize,
    /// Round scorers that were already in the standings
    pub matched: usize,
    /// Round scorers added as new entries
    pub new: usize,
    /// Round scorers dropped because their club is not recognized
    pub filtered: usize,
}

/// Everything a cumulation run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CumulationReport {
    /// Canonical ranking text
    pub text: String,
    #[serde(skip)]
    pub merged: MergedTotals,
    /// Ranked view of `merged`, as written in `text`
    pub groups: Vec<RankedGroup>,
    pub diagnostics: Diagnostics,
    pub stats: CumulationStats,
}

/// Cumulate already-extracted standings text with an opened results sheet.
pub fn cumulate_sources<S: Worksheet + ?Sized>(
    standings_text: &str,
    sheet: &S,
    options: &CumulateOptions,
) -> Result<CumulationReport, ConversionError> {
    let prior = parse_standings(standings_text);
    let mut diagnostics = Diagnostics::new();
    let round = aggregate_round(sheet, &options.clubs, &mut diagnostics);
    let merged = merge(&prior, &round)?;

    let prior_players = prior.iter().filter(|e| !e.key.is_unknown_scorer()).count();
    let new = merged.len().saturating_sub(prior_players);
    let stats = CumulationStats {
        prior_players,
        round_scorers: round.len(),
        matched: round.len().saturating_sub(new),
        new,
        filtered: round.filtered_out(),
    };
    log::debug!(
        "Cumulated {} players ({} matched, {} new, {} filtered out)",
        merged.len(),
        stats.matched,
        stats.new,
        stats.filtered
    );
    if !diagnostics.is_empty() {
        log::debug!("{} suspicious narration fragments", diagnostics.len());
    }

    Ok(CumulationReport {
        text: serialize(&merged),
        groups: ranked_groups(&merged),
        merged,
        diagnostics,
        stats,
    })
}

/// Cumulate two uploads held in memory.
pub fn cumulate(
    source_bytes: &[u8],
    source_filename: &str,
    results_bytes: &[u8],
    results_filename: &str,
    options: &CumulateOptions,
) -> Result<CumulationReport, ConversionError> {
    let standings_text = extract_text(source_bytes, source_filename)?;
    let sheet = open_results_sheet(results_bytes, results_filename, &options.sheet_name)?;
    cumulate_sources(&standings_text, &sheet, options)
}

/// Aggregate only the round in a results upload.
pub fn round_totals(
    results_bytes: &[u8],
    results_filename: &str,
    options: &CumulateOptions,
) -> Result<(RoundTotals, Diagnostics), ConversionError> {
    let sheet = open_results_sheet(results_bytes, results_filename, &options.sheet_name)?;
    let mut diagnostics = Diagnostics::new();
    let totals = aggregate_round(&sheet, &options.clubs, &mut diagnostics);
    Ok((totals, diagnostics))
}

/// Produce the cumulated canonical ranking text for two uploads, using the
/// default worksheet and club list.
pub fn cumulated_topscorers(
    source_bytes: &[u8],
    source_filename: &str,
    results_bytes: &[u8],
    results_filename: &str,
) -> Result<String, ConversionError> {
    cumulate(
        source_bytes,
        source_filename,
        results_bytes,
        results_filename,
        &CumulateOptions::default(),
    )
    .map(|report| report.text)
}
