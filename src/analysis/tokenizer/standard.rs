//! Grammar-based tokenizer with token classification.
//!
//! [`StandardTokenizer`] drives a [`Scanner`] and classifies each token into
//! the [`TokenType`] catalog. The [`Version`] it is built with selects the
//! grammar and the default acronym handling:
//!
//! | version   | grammar                        | `word.word.` spans            |
//! |-----------|--------------------------------|-------------------------------|
//! | < 2.4     | classic                        | `<ACRONYM>`, text unchanged   |
//! | 2.4 – 3.0 | classic                        | `<HOST>`, trailing `.` dropped |
//! | ≥ 3.1     | Unicode word breaks (UAX #29)  | not produced by the grammar   |
//!
//! Tokens longer than [`StandardTokenizer::max_token_length`] characters are
//! skipped rather than truncated. Each skipped token still occupies a
//! position: the next emitted token carries the gap in its position
//! increment, so phrase queries never see the neighbours of a dropped token
//! as adjacent.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token::TokenType;
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::V3_0, "visit www.apache.org. today");
//! let tokens = Pipeline::new(tokenizer).tokens().unwrap();
//!
//! assert_eq!(tokens[1].text, "www.apache.org");
//! assert_eq!(tokens[1].token_type, Some(TokenType::Host));
//! assert_eq!(tokens[1].end_offset, 21);
//! ```

use std::io::{Cursor, Read};

use log::{debug, trace};

use crate::analysis::attribute::AttributeRecord;
use crate::analysis::char_filter::OffsetCorrection;
use crate::analysis::token::TokenType;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::scanner::{Grammar, Scanner};
use crate::analysis::tokenizer::{Reader, Tokenizer};
use crate::analysis::version::Version;
use crate::error::{Result, TokenflowError};

/// Default maximum token length, in characters.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// A tokenizer for general text that classifies tokens by kind.
pub struct StandardTokenizer {
    version: Version,
    scanner: Scanner,
    replace_invalid_acronym: bool,
    max_token_length: usize,
    /// Increment for the next emitted token: 1 plus the tokens skipped since the last one.
    pending_increment: u32,
    offset_correction: Option<Box<dyn OffsetCorrection>>,
}

impl StandardTokenizer {
    /// Create a tokenizer over `input` with the behavior of `version`.
    pub fn new<R: Read + Send + 'static>(version: Version, input: R) -> Self {
        let grammar = Grammar::for_version(version);
        debug!("standard tokenizer: version {version}, grammar {grammar:?}");

        StandardTokenizer {
            version,
            scanner: Scanner::new(grammar, Box::new(input)),
            replace_invalid_acronym: version.on_or_after(Version::V2_4),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            pending_increment: 1,
            offset_correction: None,
        }
    }

    /// Create a tokenizer over an in-memory string.
    pub fn from_text(version: Version, text: &str) -> Self {
        Self::new(version, Cursor::new(text.to_string()))
    }

    /// Install an offset-correction hook.
    pub fn with_offset_correction<C: OffsetCorrection + 'static>(mut self, correction: C) -> Self {
        self.offset_correction = Some(Box::new(correction));
        self
    }

    /// Install or remove the offset-correction hook.
    pub fn set_offset_correction(&mut self, correction: Option<Box<dyn OffsetCorrection>>) {
        self.offset_correction = correction;
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn grammar(&self) -> Grammar {
        self.scanner.grammar()
    }

    /// Maximum token length in characters; longer tokens are skipped.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Set the maximum token length. Zero is rejected.
    pub fn set_max_token_length(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(TokenflowError::invalid_argument(
                "max_token_length must be at least 1",
            ));
        }
        self.max_token_length = length;
        Ok(())
    }

    /// Whether `word.word.` spans become hosts (true) or acronyms (false).
    pub fn replace_invalid_acronym(&self) -> bool {
        self.replace_invalid_acronym
    }

    pub fn set_replace_invalid_acronym(&mut self, replace: bool) {
        self.replace_invalid_acronym = replace;
    }

    fn classify(&self, raw: TokenType, attributes: &mut AttributeRecord) -> TokenType {
        match raw {
            TokenType::AcronymDep if self.replace_invalid_acronym => {
                // Drop the trailing '.'.
                attributes.term_mut().pop();
                TokenType::Host
            }
            TokenType::AcronymDep => TokenType::Acronym,
            other => other,
        }
    }
}

impl TokenStream for StandardTokenizer {
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool> {
        attributes.clear();

        loop {
            let Some(raw) = self.scanner.next_token()? else {
                return Ok(false);
            };

            if self.scanner.token_char_count() > self.max_token_length {
                trace!(
                    "skipping {}-character token at {} (max {})",
                    self.scanner.token_char_count(),
                    self.scanner.token_start(),
                    self.max_token_length
                );
                self.pending_increment += 1;
                continue;
            }

            attributes.position_increment_mut().set(self.pending_increment);
            self.pending_increment = 1;

            self.scanner.copy_text_into(attributes.term_mut());
            let start = self.scanner.token_start();
            let end = start + self.scanner.token_length();
            let (start, end) = (self.correct_offset(start), self.correct_offset(end));
            if start > end {
                return Err(TokenflowError::analysis(format!(
                    "offset correction reversed span {}..{} to {start}..{end}",
                    self.scanner.token_start(),
                    self.scanner.token_start() + self.scanner.token_length()
                )));
            }
            attributes.offset_mut().set_offset(start, end);

            let token_type = self.classify(raw, attributes);
            attributes.token_type_mut().set(token_type);

            return Ok(true);
        }
    }

    fn end(&mut self, attributes: &mut AttributeRecord) -> Result<()> {
        let final_offset =
            self.correct_offset(self.scanner.token_start() + self.scanner.token_length());
        attributes.offset_mut().set_offset(final_offset, final_offset);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.pending_increment = 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl Tokenizer for StandardTokenizer {
    fn set_reader(&mut self, input: Reader) -> Result<()> {
        debug!("standard tokenizer: new input");
        self.scanner.reset(input);
        self.reset()
    }

    fn correct_offset(&self, offset: usize) -> usize {
        match &self.offset_correction {
            Some(correction) => correction.correct_offset(offset),
            None => offset,
        }
    }
}

impl std::fmt::Debug for StandardTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardTokenizer")
            .field("version", &self.version)
            .field("scanner", &self.scanner)
            .field("replace_invalid_acronym", &self.replace_invalid_acronym)
            .field("max_token_length", &self.max_token_length)
            .field("offset_correction", &self.offset_correction.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::{Transformation, OffsetMap};
    use crate::analysis::token::Token;
    use crate::analysis::token_stream::Pipeline;

    fn tokens(tokenizer: StandardTokenizer) -> Vec<Token> {
        Pipeline::new(tokenizer).tokens().unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_basic_offsets_and_increments() {
        let result = tokens(StandardTokenizer::from_text(Version::LATEST, "the country"));

        assert_eq!(texts(&result), vec!["the", "country"]);
        assert_eq!((result[0].start_offset, result[0].end_offset), (0, 3));
        assert_eq!((result[1].start_offset, result[1].end_offset), (4, 11));
        assert!(result.iter().all(|t| t.position_increment == 1));
        assert!(result.iter().all(|t| t.token_type == Some(TokenType::Alphanum)));
    }

    #[test]
    fn test_max_token_length_skips_to_exhaustion() {
        let mut tokenizer = StandardTokenizer::from_text(Version::LATEST, "the country");
        tokenizer.set_max_token_length(3).unwrap();

        let mut attributes = AttributeRecord::new();
        assert!(tokenizer.increment_token(&mut attributes).unwrap());
        assert_eq!(attributes.term().as_str(), "the");
        assert_eq!(attributes.position_increment().get(), 1);

        assert!(!tokenizer.increment_token(&mut attributes).unwrap());
    }

    #[test]
    fn test_skipped_tokens_carry_position_gap() {
        let mut tokenizer =
            StandardTokenizer::from_text(Version::LATEST, "a bbbbbb cccccc d eeeeee f");
        tokenizer.set_max_token_length(3).unwrap();
        let result = tokens(tokenizer);

        assert_eq!(texts(&result), vec!["a", "d", "f"]);
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].position_increment, 3);
        assert_eq!(result[2].position_increment, 2);
        assert_eq!(result[2].position, 5);
    }

    #[test]
    fn test_max_token_length_counts_characters() {
        let mut tokenizer = StandardTokenizer::from_text(Version::LATEST, "ñoño");
        tokenizer.set_max_token_length(4).unwrap();
        assert_eq!(texts(&tokens(tokenizer)), vec!["ñoño"]);
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        let mut tokenizer = StandardTokenizer::from_text(Version::LATEST, "");
        assert!(tokenizer.set_max_token_length(0).is_err());
        assert_eq!(tokenizer.max_token_length(), DEFAULT_MAX_TOKEN_LENGTH);
    }

    #[test]
    fn test_acronym_fixup() {
        let tokenizer = StandardTokenizer::from_text(Version::V2_4, "www.apache.org.");
        assert!(tokenizer.replace_invalid_acronym());
        let result = tokens(tokenizer);

        assert_eq!(result[0].text, "www.apache.org");
        assert_eq!(result[0].token_type, Some(TokenType::Host));
        // Offsets still cover the raw span.
        assert_eq!((result[0].start_offset, result[0].end_offset), (0, 15));
    }

    #[test]
    fn test_acronym_without_fixup() {
        let tokenizer = StandardTokenizer::from_text(Version::V2_3, "www.apache.org.");
        assert!(!tokenizer.replace_invalid_acronym());
        let result = tokens(tokenizer);

        assert_eq!(result[0].text, "www.apache.org.");
        assert_eq!(result[0].token_type, Some(TokenType::Acronym));
    }

    #[test]
    fn test_fixup_toggle_after_construction() {
        let mut tokenizer = StandardTokenizer::from_text(Version::V3_0, "www.apache.org.");
        tokenizer.set_replace_invalid_acronym(false);
        let result = tokens(tokenizer);
        assert_eq!(result[0].token_type, Some(TokenType::Acronym));
        assert_eq!(result[0].text.len(), 15);
    }

    #[test]
    fn test_end_sets_final_offset() {
        let mut pipeline = Pipeline::new(StandardTokenizer::from_text(Version::LATEST, "end here  "));
        pipeline.tokens().unwrap();
        let offset = pipeline.attributes().offset();
        assert_eq!(offset.start_offset(), 10);
        assert_eq!(offset.end_offset(), 10);
    }

    #[test]
    fn test_offset_correction() {
        // Original "foo-bar baz", filtered "foobar baz".
        let mut map = OffsetMap::new();
        map.push_layer(vec![Transformation::new(3, 4, 3, 3)]);
        let tokenizer =
            StandardTokenizer::from_text(Version::LATEST, "foobar baz").with_offset_correction(map);

        let mut pipeline = Pipeline::new(tokenizer);
        let result = pipeline.tokens().unwrap();
        assert_eq!((result[0].start_offset, result[0].end_offset), (0, 7));
        assert_eq!((result[1].start_offset, result[1].end_offset), (8, 11));
        assert_eq!(pipeline.final_offset(), 11);
    }

    struct Mirror(usize);

    impl OffsetCorrection for Mirror {
        fn correct_offset(&self, offset: usize) -> usize {
            self.0 - offset
        }
    }

    #[test]
    fn test_reversed_offset_correction_is_an_analysis_error() {
        let mut tokenizer =
            StandardTokenizer::from_text(Version::LATEST, "abc def").with_offset_correction(Mirror(7));
        let mut attributes = AttributeRecord::new();

        let err = tokenizer.increment_token(&mut attributes).unwrap_err();
        assert!(matches!(err, TokenflowError::Analysis(_)));
        assert_eq!(
            err.to_string(),
            "Analysis error: offset correction reversed span 0..3 to 7..4"
        );
    }

    #[test]
    fn test_set_reader_reuses_tokenizer() {
        let mut tokenizer = StandardTokenizer::from_text(Version::LATEST, "first pass");
        tokenizer.set_max_token_length(4).unwrap();
        let mut attributes = AttributeRecord::new();
        while tokenizer.increment_token(&mut attributes).unwrap() {}

        tokenizer
            .set_reader(Box::new(Cursor::new("second go".to_string())))
            .unwrap();
        assert!(tokenizer.increment_token(&mut attributes).unwrap());
        assert_eq!(attributes.term().as_str(), "go");
        // The skipped "second" only counts once.
        assert_eq!(attributes.position_increment().get(), 2);
        assert_eq!(tokenizer.max_token_length(), 4);
    }

    #[test]
    fn test_classic_grammar_selected_before_3_1() {
        let tokenizer = StandardTokenizer::from_text(Version::V3_0, "AT&T");
        assert_eq!(tokenizer.grammar(), Grammar::Classic);
        let result = tokens(tokenizer);
        assert_eq!(result[0].token_type, Some(TokenType::Company));

        let tokenizer = StandardTokenizer::from_text(Version::V3_1, "AT&T");
        assert_eq!(tokenizer.grammar(), Grammar::Standard);
    }
}
