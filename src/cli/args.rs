//! Command line argument parsing for the Falx CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Falx - text analysis for search indexing
#[derive(Parser, Debug, Clone)]
#[command(name = "falx")]
#[command(about = "Tokenize, filter and stem text the way a search index sees it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FalxArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FalxArgs {
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
    /// Analyze text and print the resulting tokens
    Analyze(AnalyzeArgs),

    /// List the registered tokenizers and filters
    Components,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze; read from --file or stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Preset analyzer (standard, romanian, english, cjk)
    #[arg(short, long, default_value = "standard", conflicts_with = "config")]
    pub analyzer: String,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Read the text from this file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Term that is neither removed as a stop word nor stemmed (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "TERM")]
    pub exclusions: Vec<String>,

    /// Stop word list file replacing the preset's packaged list
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Disable stop word removal
    #[arg(long, conflicts_with = "stop_words")]
    pub no_stop_words: bool,
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
