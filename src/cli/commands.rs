//! Command implementations for the tokenflow CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::config::AnalyzerConfig;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TokenflowError};

/// Execute a CLI command.
pub fn execute_command(args: TokenflowArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
    }
}

/// Analyze a file or stdin and print the tokens.
fn analyze(args: &AnalyzeArgs, cli_args: &TokenflowArgs) -> Result<()> {
    let config = build_config(args)?;

    let text = match &args.input {
        Some(path) => {
            info!("Reading input from: {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let start = Instant::now();
    let result = analyze_text(config, &text)?;
    let message = format!(
        "Analyzed {} bytes in {:?}",
        text.len(),
        start.elapsed()
    );
    debug!("{message}");

    let mut out = io::stdout().lock();
    output_result(&mut out, &message, &result, cli_args)
}

/// Run the standard analyzer over `text`.
pub fn analyze_text(config: AnalyzerConfig, text: &str) -> Result<AnalysisResult> {
    let version = config.version.to_string();
    let analyzer = StandardAnalyzer::from_config(config)?;

    let mut pipeline = analyzer.token_stream(text)?;
    let tokens = pipeline.tokens()?;

    Ok(AnalysisResult {
        version,
        tokens,
        final_offset: pipeline.final_offset(),
    })
}

/// Build an analyzer config from the config file (or defaults) plus flags.
pub fn build_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            AnalyzerConfig::from_file(path)?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(version) = args.compat_version {
        config.version = version;
    }
    if let Some(length) = args.max_token_length {
        config.max_token_length = length;
    }
    if args.reverse {
        config.reverse = true;
    }
    if let Some(marker) = &args.marker {
        config.marker = Some(parse_marker(marker)?);
    }
    if args.no_lowercase {
        config.lowercase = false;
    }
    if args.no_stop_words {
        config.remove_stop_words = false;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a hex code point such as `0001`, `0x1F` or `U+EC00`.
pub fn parse_marker(hex: &str) -> Result<char> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("U+"))
        .unwrap_or(hex);

    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| TokenflowError::invalid_argument(format!("invalid marker code point: {hex}")))
}
