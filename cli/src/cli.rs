use clap::{Parser, Subcommand, ValueEnum};
use crossnorm_external::DocumentFormat;
use crossnorm_providers::NytVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Turn NYT crossword payloads into cross-referenced puzzle documents.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Normalize a payload saved on disk
    Normalize {
        /// Payload JSON file
        input: PathBuf,

        /// Output document (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the output file's extension)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Also write the clues as CSV to this path
        #[arg(long)]
        clues_csv: Option<PathBuf>,
    },
    /// Download a puzzle and normalize it
    Fetch {
        /// Puzzle date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Puzzle variant (defaults to the configured variant)
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Output file (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the response as received instead of normalizing it
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Show the configuration file location and effective settings
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Binary,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Binary => DocumentFormat::Binary,
        }
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariantArg {
    #[default]
    Daily,
    Mini,
}

impl From<VariantArg> for NytVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Daily => NytVariant::Daily,
            VariantArg::Mini => NytVariant::Mini,
        }
    }
}
