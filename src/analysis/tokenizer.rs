//! Tokenizers: the source stage of a pipeline.
//!
//! A tokenizer reads characters from a [`Reader`] and fills the attribute
//! record with one token per `increment_token` call. Offsets it reports can
//! be remapped through an [`OffsetCorrection`] hook when the input was
//! rewritten by char filters first.
//!
//! # Available Tokenizers
//!
//! - [`standard::StandardTokenizer`] - Grammar-based tokenizer with token classification
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::LATEST, "Hello world");
//! let tokens = Pipeline::new(tokenizer).tokens().unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```
//!
//! [`OffsetCorrection`]: crate::analysis::char_filter::OffsetCorrection

use std::io::Read;

use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

/// Sequential character input for a tokenizer.
pub type Reader = Box<dyn Read + Send>;

/// A token stream whose input is a [`Reader`].
pub trait Tokenizer: TokenStream {
    /// Bind new input and reset all per-stream state, so the tokenizer can be
    /// reused without being rebuilt.
    fn set_reader(&mut self, input: Reader) -> Result<()>;

    /// Map an offset in the tokenizer's input back onto the original text.
    fn correct_offset(&self, offset: usize) -> usize;
}

pub mod scanner;
pub mod standard;
