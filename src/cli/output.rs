//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, TokenflowArgs};
use crate::error::Result;

/// Result structure for the analyze command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub tokens: Vec<Token>,
    pub final_offset: usize,
}

/// Output a result in the specified format.
pub fn output_result<W: Write>(
    out: &mut W,
    message: &str,
    result: &AnalysisResult,
    args: &TokenflowArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(
    out: &mut W,
    message: &str,
    result: &AnalysisResult,
    args: &TokenflowArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }

    for token in &result.tokens {
        let token_type = token.token_type.map(|t| t.label()).unwrap_or("-");
        writeln!(
            out,
            "{:>4}  {:<16} [{}..{}]  {}",
            token.position,
            token_type,
            token.start_offset,
            token.end_offset,
            token.text.escape_debug()
        )?;
    }

    if args.verbosity() > 0 {
        writeln!(
            out,
            "{} tokens, final offset {}",
            result.tokens.len(),
            result.final_offset
        )?;
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(out: &mut W, result: &AnalysisResult, args: &TokenflowArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
