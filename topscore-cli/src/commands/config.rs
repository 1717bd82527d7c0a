use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::Settings;

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(path: &Path, settings: &Settings) {
    log::info!(
        "{}",
        "topscore settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log::info!("  Upload limit:   {} bytes", settings.max_upload_bytes);
    log::info!("  Worksheet:      {}", settings.sheet_name);
    if settings.extra_clubs.is_empty() {
        log::info!("  Extra clubs:    {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("  Extra clubs:    {}", settings.extra_clubs.join(", "));
    }
    match &settings.output_dir {
        Some(dir) => log::info!("  Output dir:     {}", dir.display()),
        None => log::info!(
            "  Output dir:     {}",
            "current directory".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}
