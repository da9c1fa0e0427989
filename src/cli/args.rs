//! Command line argument parsing for the tokenflow CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::version::Version;

/// Tokenflow - streaming text analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenflow")]
#[command(about = "Tokenize and analyze text from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TokenflowArgs {
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

impl TokenflowArgs {
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
    /// Analyze text from a file or stdin and print its tokens
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Analyzer config file (JSON); flags below override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compatibility version, e.g. 2.9, 3.1 or latest
    #[arg(long = "version", value_name = "VERSION")]
    pub compat_version: Option<Version>,

    /// Maximum token length in characters
    #[arg(long, value_name = "N")]
    pub max_token_length: Option<usize>,

    /// Reverse each term
    #[arg(long)]
    pub reverse: bool,

    /// Marker prepended to reversed terms, as a hex code point (e.g. 0001)
    #[arg(long, value_name = "HEX", requires = "reverse")]
    pub marker: Option<String>,

    /// Keep the original case
    #[arg(long)]
    pub no_lowercase: bool,

    /// Keep stop words
    #[arg(long)]
    pub no_stop_words: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable table of tokens
    Human,
    /// JSON format
    Json,
}
