//! Token filters: stages that wrap another stage.
//!
//! A filter pulls a token from the stage it wraps and rewrites the shared
//! attribute record in place before handing control back to its consumer.
//! Filters may also swallow tokens by pulling again.
//!
//! # Available Filters
//!
//! - [`reverse::ReverseStringFilter`] - Reverses terms, optionally marking them
//! - [`lowercase::LowercaseFilter`] - Converts terms to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! StandardTokenizer → Lowercase → Stop Words → Reverse → Index
//! ```
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token_filter::lowercase::LowercaseFilter;
//! use tokenflow::analysis::token_filter::stop::StopFilter;
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::LATEST, "The Quick Fox");
//! let chain = StopFilter::new(LowercaseFilter::new(tokenizer));
//! let tokens = Pipeline::new(chain).tokens().unwrap();
//!
//! assert_eq!(tokens[0].text, "quick");
//! assert_eq!(tokens[0].position_increment, 2);
//! assert_eq!(tokens[1].text, "fox");
//! ```

use crate::analysis::token_stream::TokenStream;

/// A token stream that wraps another one.
pub trait TokenFilter: TokenStream {
    type Input: TokenStream;

    /// The wrapped stage.
    fn input(&self) -> &Self::Input;

    /// The wrapped stage, e.g. to bind new input to a tokenizer at the
    /// bottom of the chain.
    fn input_mut(&mut self) -> &mut Self::Input;

    /// Unwrap the filter, returning the wrapped stage.
    fn into_input(self) -> Self::Input;
}

pub mod lowercase;
pub mod reverse;
pub mod stop;
