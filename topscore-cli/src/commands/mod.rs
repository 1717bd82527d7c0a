pub(crate) mod clubs;
pub(crate) mod config;
pub(crate) mod cumulate;
pub(crate) mod extract;
pub(crate) mod render;
pub(crate) mod round;

use std::path::{Path, PathBuf};

use crate::CliError;

/// An input file read into memory, with the name the engine sniffs formats by.
pub(crate) struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Read an input file, refusing anything above the upload ceiling.
pub(crate) fn read_upload(path: &Path, limit: u64) -> Result<Upload, CliError> {
    let size = std::fs::metadata(path)?.len();
    if size > limit {
        return Err(CliError::UploadTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(Upload { filename, bytes })
}

/// Resolve where an output file goes: an explicit path wins, otherwise
/// `file_name` inside the configured output directory (or the current one).
pub(crate) fn resolve_output(
    explicit: Option<PathBuf>,
    output_dir: Option<&Path>,
    file_name: &str,
) -> PathBuf {
    match explicit {
        Some(path) => path,
        None => output_dir.unwrap_or(Path::new(".")).join(file_name),
    }
}

/// Write an output file, creating its directory if needed.
pub(crate) fn write_output(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
