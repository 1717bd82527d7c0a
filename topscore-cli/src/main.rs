//! topscore CLI
//!
//! Command-line interface for cumulating amateur football topscorer standings.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
use settings::{Settings, settings_path};

/// Log an empty line (visual spacing in command output).
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    let _ = builder.try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.clone().unwrap_or_else(settings_path);
    let settings = Settings::load(&config_path)?;

    match cli.command {
        Commands::Cumulate {
            standings,
            results,
            output,
            format,
            sheet,
            show_suspicious,
        } => commands::cumulate::run_cumulate(
            &settings,
            &standings,
            &results,
            output,
            format,
            sheet.as_deref(),
            show_suspicious,
        ),
        Commands::Extract { file } => commands::extract::run_extract(&settings, &file),
        Commands::Round {
            results,
            format,
            sheet,
        } => commands::round::run_round(&settings, &results, format, sheet.as_deref()),
        Commands::Render { text_file, output } => {
            commands::render::run_render(&settings, &text_file, output)
        }
        Commands::Clubs => {
            commands::clubs::run_clubs(&settings);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path(&config_path);
                Ok(())
            }
            ConfigAction::Show => {
                commands::config::run_config_show(&config_path, &settings);
                Ok(())
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
