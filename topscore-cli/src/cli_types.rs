//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "topscore")]
#[command(about = "Cumulate amateur football topscorer standings", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add the current round's goals to the prior standings
    Cumulate {
        /// Prior standings document (.docx, .doc or .txt)
        standings: PathBuf,

        /// Results workbook of the current round (.xlsx or .xls)
        results: PathBuf,

        /// Output file (default: <YYYYMMDD>_topscorers_cumulatief.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Docx)]
        format: OutputFormat,

        /// Worksheet holding the fixtures (overrides the settings file)
        #[arg(long)]
        sheet: Option<String>,

        /// List narration fragments that could not be attributed
        #[arg(long)]
        show_suspicious: bool,
    },

    /// Print the text extracted from a standings document
    Extract {
        /// Standings document (.docx, .doc or .txt)
        file: PathBuf,
    },

    /// Show the current round's goals per group, without merging
    Round {
        /// Results workbook of the current round (.xlsx or .xls)
        results: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Worksheet holding the fixtures (overrides the settings file)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Render canonical ranking text as a Word document
    Render {
        /// Text file in canonical ranking format
        text_file: PathBuf,

        /// Output file (default: the input name with a .docx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the recognized clubs
    Clubs,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}

/// Output format of `cumulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Canonical ranking text
    Text,
    /// Word document
    Docx,
    /// Full report as JSON
    Json,
}

impl OutputFormat {
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Docx => "docx",
            Self::Json => "json",
        }
    }
}

/// Output format of read-only reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
}
