//! # Tokenflow
//!
//! A streaming text-analysis library: a grammar-based tokenizer that
//! classifies tokens, composable token filters, and an attribute-record
//! pull protocol that connects them.
//!
//! ## Features
//!
//! - Pull-based pipelines with reusable, caller-owned token state
//! - Two tokenizer grammars selected by compatibility version
//! - Character offsets mapped back through char filters
//! - Lowercase, stop word and reversal filters
//! - JSON-configurable analyzers and a command-line front end

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::config::AnalyzerConfig;
    pub use crate::analysis::analyzer::standard::StandardAnalyzer;
    pub use crate::analysis::attribute::AttributeRecord;
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::token_stream::{Pipeline, TokenStream};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::standard::StandardTokenizer;
    pub use crate::analysis::version::Version;
    pub use crate::error::{Result, TokenflowError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
