//! Analyzers: ready-made pipelines.
//!
//! An analyzer knows how to build a fresh pipeline for a piece of text:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → … → Filter N → Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::analyzer::Analyzer;
//! use tokenflow::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens = analyzer.analyze("Hello the World").unwrap();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[1].position, 2);
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_stream::{Pipeline, TokenStream};
use crate::error::Result;

/// A boxed chain of stages.
pub type BoxTokenStream = Box<dyn TokenStream>;

/// Trait for analyzers that turn text into a pipeline.
pub trait Analyzer: Send + Sync {
    /// Build a pipeline over `text`.
    fn token_stream(&self, text: &str) -> Result<Pipeline<BoxTokenStream>>;

    /// Run a pipeline over `text` and collect its tokens.
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        self.token_stream(text)?.tokens()
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod config;
pub mod standard;
