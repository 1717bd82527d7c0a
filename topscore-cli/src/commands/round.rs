use std::collections::BTreeMap;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use topscore_core::Diagnostics;
use topscore_core::group::display_rank;
use topscore_engine::RoundEntry;

use super::read_upload;
use crate::CliError;
use crate::cli_types::ReportFormat;
use crate::settings::Settings;

#[derive(Serialize)]
struct RoundReport<'a> {
    scorers: Vec<&'a RoundEntry>,
    filtered_out: usize,
    diagnostics: &'a Diagnostics,
}

/// Round entries bucketed per group, groups in display order and players by
/// goals, then name.
pub(crate) fn group_entries<'a>(
    entries: impl IntoIterator<Item = &'a RoundEntry>,
) -> Vec<(&'a str, Vec<&'a RoundEntry>)> {
    let mut buckets: BTreeMap<&str, Vec<&RoundEntry>> = BTreeMap::new();
    for entry in entries {
        buckets.entry(entry.group.as_str()).or_default().push(entry);
    }
    let mut groups: Vec<_> = buckets.into_iter().collect();
    groups.sort_by_key(|(group, _)| display_rank(group));
    for (_, players) in &mut groups {
        players.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.key.name.cmp(&b.key.name)));
    }
    groups
}

/// Show the goals of the current round, per group.
pub(crate) fn run_round(
    settings: &Settings,
    results: &Path,
    format: ReportFormat,
    sheet: Option<&str>,
) -> Result<(), CliError> {
    let upload = read_upload(results, settings.max_upload_bytes)?;
    let options = settings.cumulate_options(sheet);
    let (totals, diagnostics) =
        topscore_engine::round_totals(&upload.bytes, &upload.filename, &options)?;

    if format == ReportFormat::Json {
        let report = RoundReport {
            scorers: totals.entries().collect(),
            filtered_out: totals.filtered_out(),
            diagnostics: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if totals.is_empty() {
        log::info!(
            "{}",
            "No recognized scorers this round.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for (group, players) in group_entries(totals.entries()) {
        log::info!("{}", group.if_supports_color(Stdout, |t| t.bold()));
        for entry in players {
            log::info!(
                "  {:>3}  {} ({})",
                entry.goals,
                entry.key.name,
                entry
                    .key
                    .club
                    .as_deref()
                    .unwrap_or_default()
                    .if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        crate::log_blank();
    }
    log::info!(
        "{} scorers, {} filtered out, {} suspicious fragments",
        totals.len(),
        totals.filtered_out(),
        diagnostics.len()
    );
    Ok(())
}
