use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{read_upload, write_output};
use crate::CliError;
use crate::settings::Settings;

/// Render a canonical ranking text file as a Word document.
pub(crate) fn run_render(
    settings: &Settings,
    text_file: &Path,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let upload = read_upload(text_file, settings.max_upload_bytes)?;
    let text = topscore_extract::decode_text_best_effort(&upload.bytes);
    let docx = topscore_docx::render_docx(&text)?;

    let path = output.unwrap_or_else(|| text_file.with_extension("docx"));
    write_output(&path, &docx)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
