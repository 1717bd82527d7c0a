use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use topscore_engine::CumulationReport;

use super::{read_upload, resolve_output, write_output};
use crate::CliError;
use crate::cli_types::OutputFormat;
use crate::settings::Settings;

/// File name used when no output path is given, dated with the local date.
pub(crate) fn default_file_name(format: OutputFormat) -> String {
    format!(
        "{}_topscorers_cumulatief.{}",
        chrono::Local::now().format("%Y%m%d"),
        format.extension()
    )
}

/// Encode a report in the requested output format.
pub(crate) fn encode_report(
    report: &CumulationReport,
    format: OutputFormat,
) -> Result<Vec<u8>, CliError> {
    Ok(match format {
        OutputFormat::Text => report.text.clone().into_bytes(),
        OutputFormat::Docx => topscore_docx::render_docx(&report.text)?,
        OutputFormat::Json => serde_json::to_vec_pretty(report)?,
    })
}

pub(crate) fn run_cumulate(
    settings: &Settings,
    standings: &Path,
    results: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
    sheet: Option<&str>,
    show_suspicious: bool,
) -> Result<(), CliError> {
    let source = read_upload(standings, settings.max_upload_bytes)?;
    let round = read_upload(results, settings.max_upload_bytes)?;
    let options = settings.cumulate_options(sheet);

    let report = topscore_engine::cumulate(
        &source.bytes,
        &source.filename,
        &round.bytes,
        &round.filename,
        &options,
    )?;

    let path = resolve_output(
        output,
        settings.output_dir.as_deref(),
        &default_file_name(format),
    );
    write_output(&path, &encode_report(&report, format)?)?;

    let stats = &report.stats;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Prior players: {}, round scorers: {} ({} matched, {} new), filtered out: {}",
        stats.prior_players,
        stats.round_scorers,
        stats.matched,
        stats.new,
        stats.filtered,
    );

    if !report.diagnostics.is_empty() {
        log::info!(
            "  {} narration fragments could not be attributed",
            report
                .diagnostics
                .len()
                .if_supports_color(Stdout, |t| t.yellow()),
        );
        if show_suspicious {
            for fragment in report.diagnostics.suspicious() {
                log::info!("    {}", fragment.if_supports_color(Stdout, |t| t.dimmed()));
            }
        }
    }
    Ok(())
}
