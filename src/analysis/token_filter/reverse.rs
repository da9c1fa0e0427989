//! Term reversal filter.
//!
//! Reverses each term, e.g. `"country"` → `"yrtnuoc"`. With a marker, the
//! reversed term is also prefixed by that character: with `U+0001`,
//! `"country"` → `"\u{1}yrtnuoc"`.
//!
//! Indexing reversed terms makes leading-wildcard queries cheap: `*try`
//! becomes the prefix query `\u{1}yrt*` against the reversed terms. The
//! marker keeps reversed terms apart from ordinary terms stored in the same
//! field.
//!
//! Reversal works on characters, so a supplementary character is moved as a
//! whole and never split.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token_filter::reverse::{ReverseStringFilter, START_OF_HEADING_MARKER};
//! use tokenflow::analysis::token_stream::Pipeline;
//! use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
//! use tokenflow::analysis::version::Version;
//!
//! let tokenizer = StandardTokenizer::from_text(Version::LATEST, "the country");
//! let filter = ReverseStringFilter::with_marker(Version::LATEST, tokenizer, START_OF_HEADING_MARKER);
//! let tokens = Pipeline::new(filter).tokens().unwrap();
//!
//! assert_eq!(tokens[1].text, "\u{1}yrtnuoc");
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 11));
//! ```

use std::mem;

use crate::analysis::attribute::AttributeRecord;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::version::Version;
use crate::error::Result;

/// Example marker: U+0001 (START OF HEADING).
pub const START_OF_HEADING_MARKER: char = '\u{0001}';

/// Example marker: U+001F (INFORMATION SEPARATOR ONE).
pub const INFORMATION_SEPARATOR_MARKER: char = '\u{001F}';

/// Example marker: U+EC00 (PRIVATE USE AREA: EC00).
pub const PUA_EC00_MARKER: char = '\u{EC00}';

/// Example marker: U+200F (RIGHT-TO-LEFT MARK).
pub const RTL_DIRECTION_MARKER: char = '\u{200F}';

/// Reverse `text` into `out`, optionally prefixed by `marker`.
fn reverse_into(text: &str, marker: Option<char>, out: &mut String) {
    out.clear();
    out.reserve(text.len() + marker.map_or(0, char::len_utf8));
    if let Some(marker) = marker {
        out.push(marker);
    }
    out.extend(text.chars().rev());
}

/// Reverse a string by characters.
pub fn reverse_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    reverse_into(text, None, &mut out);
    out
}

/// Replace `term` with its reversal by characters.
///
/// The reversal is built in a new buffer, which then replaces `term`. The
/// filter itself reuses a scratch buffer instead.
pub fn reverse_term(term: &mut String) {
    let mut out = String::with_capacity(term.len());
    reverse_into(term, None, &mut out);
    *term = out;
}

/// Reverses each term of the wrapped stream.
#[derive(Debug)]
pub struct ReverseStringFilter<S> {
    input: S,
    marker: Option<char>,
    version: Version,
    /// Swapped with the term buffer on every token.
    scratch: String,
}

impl<S: TokenStream> ReverseStringFilter<S> {
    /// Reverse terms without marking them.
    pub fn new(version: Version, input: S) -> Self {
        ReverseStringFilter {
            input,
            marker: None,
            version,
            scratch: String::new(),
        }
    }

    /// Reverse terms and prefix them with `marker`.
    pub fn with_marker(version: Version, input: S, marker: char) -> Self {
        ReverseStringFilter {
            marker: Some(marker),
            ..Self::new(version, input)
        }
    }

    pub fn marker(&self) -> Option<char> {
        self.marker
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl<S: TokenStream> TokenStream for ReverseStringFilter<S> {
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool> {
        if !self.input.increment_token(attributes)? {
            return Ok(false);
        }

        let term = attributes.term_mut().buffer_mut();
        reverse_into(term, self.marker, &mut self.scratch);
        mem::swap(term, &mut self.scratch);

        Ok(true)
    }

    fn end(&mut self, attributes: &mut AttributeRecord) -> Result<()> {
        self.input.end(attributes)
    }

    fn reset(&mut self) -> Result<()> {
        self.input.reset()
    }

    fn name(&self) -> &'static str {
        "reverse"
    }
}

impl<S: TokenStream> TokenFilter for ReverseStringFilter<S> {
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
