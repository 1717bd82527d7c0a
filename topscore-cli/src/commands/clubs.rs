use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::Settings;

/// List the recognized clubs, including extras from the settings file.
pub(crate) fn run_clubs(settings: &Settings) {
    let clubs = settings.clubs();
    log::info!(
        "{}",
        "Recognized clubs:".if_supports_color(Stdout, |t| t.bold()),
    );
    for club in clubs.iter() {
        if settings.extra_clubs.iter().any(|extra| extra.trim() == club) {
            log::info!("  {} {}", club, "(settings)".if_supports_color(Stdout, |t| t.dimmed()));
        } else {
            log::info!("  {club}");
        }
    }
    crate::log_blank();
    log::info!("Total: {} clubs", clubs.len());
}
