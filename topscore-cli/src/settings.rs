//! User settings: `~/.config/topscore/settings.toml`.
//!
//! ```toml
//! [input]
//! max_upload_bytes = 15728640
//! sheet_name = "INVOER"
//!
//! [clubs]
//! extra = ["SV Nieuwe Club"]
//!
//! [output]
//! dir = "/path/to/output"
//! ```
//! Every key is optional. A missing file means all defaults.

use std::path::{Path, PathBuf};

use topscore_core::{ClubRegistry, CumulateOptions, DEFAULT_SHEET_NAME};

use crate::error::CliError;

/// Default upload ceiling: 15 MiB.
pub(crate) const DEFAULT_MAX_UPLOAD_BYTES: u64 = 15 * 1024 * 1024;

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("topscore").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub max_upload_bytes: u64,
    pub sheet_name: String,
    pub extra_clubs: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            extra_clubs: Vec::new(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults; a file
    /// that is not valid TOML, or has keys of the wrong type, is an error.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, String> {
        let doc: toml::Value = contents.parse().map_err(|e: toml::de::Error| e.to_string())?;
        let mut settings = Self::default();

        if let Some(input) = doc.get("input") {
            if let Some(value) = input.get("max_upload_bytes") {
                let bytes = value
                    .as_integer()
                    .filter(|b| *b > 0)
                    .ok_or("input.max_upload_bytes must be a positive integer")?;
                settings.max_upload_bytes = bytes as u64;
            }
            if let Some(value) = input.get("sheet_name") {
                let name = value.as_str().ok_or("input.sheet_name must be a string")?;
                if !name.trim().is_empty() {
                    settings.sheet_name = name.trim().to_string();
                }
            }
        }

        if let Some(extra) = doc.get("clubs").and_then(|c| c.get("extra")) {
            let list = extra.as_array().ok_or("clubs.extra must be a list of names")?;
            for club in list {
                let club = club.as_str().ok_or("clubs.extra must be a list of names")?;
                settings.extra_clubs.push(club.to_string());
            }
        }

        if let Some(dir) = doc.get("output").and_then(|o| o.get("dir")) {
            let dir = dir.as_str().ok_or("output.dir must be a string")?;
            if !dir.is_empty() {
                settings.output_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(settings)
    }

    pub(crate) fn clubs(&self) -> ClubRegistry {
        ClubRegistry::default().with_extra(&self.extra_clubs)
    }

    /// Engine options, with an optional worksheet override from the command line.
    pub(crate) fn cumulate_options(&self, sheet_override: Option<&str>) -> CumulateOptions {
        CumulateOptions::new()
            .sheet_name(sheet_override.unwrap_or(&self.sheet_name))
            .clubs(self.clubs())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
