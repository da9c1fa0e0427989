//! Lowercase filter implementation.
//!
//! Converts every term to lowercase for case-insensitive matching. ASCII
//! terms are lowercased in place; other terms go through Unicode lowercasing
//! into a scratch buffer that is swapped with the term.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token_filter::lowercase::LowercaseFilter;
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::LATEST, "Hello WORLD Ærø");
//! let tokens = Pipeline::new(LowercaseFilter::new(tokenizer)).tokens().unwrap();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "ærø");
//! ```

use std::mem;

use crate::analysis::attribute::AttributeRecord;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

/// A filter that converts terms to lowercase.
///
/// Offsets, types and position increments are left untouched.
#[derive(Debug)]
pub struct LowercaseFilter<S> {
    input: S,
    scratch: String,
}

impl<S: TokenStream> LowercaseFilter<S> {
    /// Create a new lowercase filter.
    pub fn new(input: S) -> Self {
        LowercaseFilter {
            input,
            scratch: String::new(),
        }
    }
}

impl<S: TokenStream> TokenStream for LowercaseFilter<S> {
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool> {
        if !self.input.increment_token(attributes)? {
            return Ok(false);
        }

        let term = attributes.term_mut().buffer_mut();
        if term.is_ascii() {
            term.make_ascii_lowercase();
        } else {
            self.scratch.clear();
            self.scratch
                .extend(term.chars().flat_map(char::to_lowercase));
            mem::swap(term, &mut self.scratch);
        }

        Ok(true)
    }

    fn end(&mut self, attributes: &mut AttributeRecord) -> Result<()> {
        self.input.end(attributes)
    }

    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

impl<S: TokenStream> TokenFilter for LowercaseFilter<S> {
    type Input = S;

    fn input(&self) -> &S {
        &self.input
    }

    fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    fn into_input(self) -> S {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_stream::Pipeline;
    use crate::analysis::tokenizer::standard::StandardTokenizer;
    use crate::analysis::version::Version;

    #[test]
    fn test_lowercase_filter() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "The QUICK Brown ΟΔΥΣΣΕΎΣ");
        let tokens = Pipeline::new(LowercaseFilter::new(tokenizer)).tokens().unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "quick", "brown", "οδυσσεύσ"]);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_filter_name() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "");
        assert_eq!(LowercaseFilter::new(tokenizer).name(), "lowercase");
    }
}
