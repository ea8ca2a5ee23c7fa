//! Command line argument parsing for the plurales CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// plurales - reduce Spanish plurals to their singular stem
#[derive(Parser, Debug, Clone)]
#[command(name = "plurales")]
#[command(about = "Run text through a Spanish plural stem filter chain")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PluralesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PluralesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text on whitespace and run it through a filter chain
    Stem(StemArgs),

    /// List the registered token filters
    Filters,
}

/// Arguments for the stem command
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Text to analyze; each line of stdin is analyzed when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Filter to apply, in order (default: SpanishPluralStem)
    #[arg(long = "filter", value_name = "NAME", conflicts_with = "config")]
    pub filters: Vec<String>,

    /// Filter parameter, as FILTER:KEY=VALUE
    #[arg(long = "param", value_name = "FILTER:KEY=VALUE")]
    pub params: Vec<String>,

    /// JSON file describing the filter chain
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
