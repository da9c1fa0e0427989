//! Stop filter implementation.
//!
//! Removes common words (stop words) that typically don't contribute to
//! search relevance. With position increments enabled (the default), the
//! positions of removed words are preserved as a gap on the next kept token,
//! so `"the quick"` keeps `quick` at position 1.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token_filter::stop::StopFilter;
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::LATEST, "the quick brown");
//! let tokens = Pipeline::new(StopFilter::new(tokenizer)).tokens().unwrap();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "quick");
//! assert_eq!(tokens[0].position, 1);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::attribute::AttributeRecord;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact; put a [`LowercaseFilter`] in front of it for
/// case-insensitive removal.
///
/// [`LowercaseFilter`]: crate::analysis::token_filter::lowercase::LowercaseFilter
#[derive(Debug)]
pub struct StopFilter<S> {
    input: S,
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether removed tokens leave a position gap
    enable_position_increments: bool,
}

impl<S: TokenStream> StopFilter<S> {
    /// Create a new stop filter with the default English stop words.
    pub fn new(input: S) -> Self {
        Self::with_stop_words(input, Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET))
    }

    /// Create a new stop filter with a shared stop word set.
    pub fn with_stop_words(input: S, stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            input,
            stop_words,
            enable_position_increments: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, W>(input: S, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(input, Arc::new(stop_words))
    }

    /// Set whether removed tokens leave a position gap.
    pub fn enable_position_increments(mut self, enable: bool) -> Self {
        self.enable_position_increments = enable;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl<S: TokenStream> TokenStream for StopFilter<S> {
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool> {
        let mut skipped = 0;

        while self.input.increment_token(attributes)? {
            if !self.is_stop_word(attributes.term().as_str()) {
                if self.enable_position_increments && skipped > 0 {
                    let increment = attributes.position_increment().get() + skipped;
                    attributes.position_increment_mut().set(increment);
                }
                return Ok(true);
            }
            skipped += attributes.position_increment().get();
        }

        Ok(false)
    }

    fn end(&mut self, attributes: &mut AttributeRecord) -> Result<()> {
        self.input.end(attributes)
    }

    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

impl<S: TokenStream> TokenFilter for StopFilter<S> {
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
    use crate::analysis::token::Token;
    use crate::analysis::token_stream::Pipeline;
    use crate::analysis::tokenizer::standard::StandardTokenizer;
    use crate::analysis::version::Version;

    fn run<S: TokenStream>(filter: S) -> Vec<Token> {
        Pipeline::new(filter).tokens().unwrap()
    }

    #[test]
    fn test_stop_filter() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "hello or world and test");
        let result = run(StopFilter::from_words(tokenizer, vec!["the", "and", "or"]));

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "world", "test"]);
        assert_eq!(result[1].position_increment, 2);
        assert_eq!(result[2].position, 4);
    }

    #[test]
    fn test_without_position_increments() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "a cat in a hat");
        let result = run(StopFilter::new(tokenizer).enable_position_increments(false));

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["cat", "hat"]);
        assert!(result.iter().all(|t| t.position_increment == 1));
    }

    #[test]
    fn test_gap_accumulates_with_tokenizer_gap() {
        let mut tokenizer =
            StandardTokenizer::from_text(Version::LATEST, "alpha the enormously beta");
        tokenizer.set_max_token_length(5).unwrap();
        let result = run(StopFilter::new(tokenizer));

        assert_eq!(result[1].text, "beta");
        // "the" removed (1) + "enormously" skipped by the tokenizer (1) + itself (1).
        assert_eq!(result[1].position_increment, 3);
    }

    #[test]
    fn test_all_stop_words() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "the and of");
        let mut pipeline = Pipeline::new(StopFilter::new(tokenizer));
        assert!(pipeline.tokens().unwrap().is_empty());
        assert_eq!(pipeline.final_offset(), 10);
    }

    #[test]
    fn test_default_set() {
        let tokenizer = StandardTokenizer::from_text(Version::LATEST, "");
        let filter = StopFilter::new(tokenizer);
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("hello"));
        assert_eq!(filter.len(), 33);
        assert_eq!(filter.name(), "stop");
    }
}
