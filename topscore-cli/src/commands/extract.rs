use std::path::Path;

use super::read_upload;
use crate::CliError;
use crate::settings::Settings;

/// Print the plain text of a standings document.
pub(crate) fn run_extract(settings: &Settings, file: &Path) -> Result<(), CliError> {
    let upload = read_upload(file, settings.max_upload_bytes)?;
    let text = topscore_extract::extract_text(&upload.bytes, &upload.filename)?;
    println!("{text}");
    Ok(())
}
