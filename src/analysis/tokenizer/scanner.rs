//! Lexical scanners driving the standard tokenizer.
//!
//! A [`Scanner`] reads its whole input on the first request, then hands out
//! raw spans one at a time together with a raw [`TokenType`]. Two grammars
//! exist and the choice is fixed when the scanner is built:
//!
//! - [`Grammar::Classic`] - The legacy grammar (acronyms, companies, e-mail
//!   addresses, hosts, serial numbers). It only knows characters of the Basic
//!   Multilingual Plane; supplementary characters act as separators.
//! - [`Grammar::Standard`] - Unicode word boundaries (UAX #29) with script
//!   classification. Supplementary characters are ordinary characters.
//!
//! Span starts never decrease across calls. Offsets and lengths are in bytes.

use std::io::Read;

use crate::analysis::attribute::CharTermAttribute;
use crate::analysis::token::TokenType;
use crate::analysis::tokenizer::Reader;
use crate::analysis::version::Version;
use crate::error::Result;

pub mod classic;
pub mod standard;

/// A raw span found by a grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMatch {
    pub start: usize,
    pub end: usize,
    pub token_type: TokenType,
}

/// The grammar a scanner runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    Classic,
    Standard,
}

impl Grammar {
    /// The grammar a given version expects.
    pub fn for_version(version: Version) -> Self {
        if version.on_or_after(Version::V3_1) {
            Grammar::Standard
        } else {
            Grammar::Classic
        }
    }

    fn next_match(self, text: &str, from: usize) -> Option<RawMatch> {
        match self {
            Grammar::Classic => classic::next_match(text, from),
            Grammar::Standard => standard::next_match(text, from),
        }
    }
}

/// Scanner over one input at a time.
pub struct Scanner {
    grammar: Grammar,
    input: Option<Reader>,
    text: String,
    loaded: bool,
    cursor: usize,
    start: usize,
    len: usize,
}

impl Scanner {
    pub fn new(grammar: Grammar, input: Reader) -> Self {
        Scanner {
            grammar,
            input: Some(input),
            text: String::new(),
            loaded: false,
            cursor: 0,
            start: 0,
            len: 0,
        }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Find the next raw token. `None` means end of input.
    ///
    /// The first call reads the input; read failures and invalid UTF-8 are
    /// returned as errors.
    pub fn next_token(&mut self) -> Result<Option<TokenType>> {
        self.fill()?;

        match self.grammar.next_match(&self.text, self.cursor) {
            Some(m) => {
                self.start = m.start;
                self.len = m.end - m.start;
                self.cursor = m.end;
                Ok(Some(m.token_type))
            }
            None => {
                // At end of input the span is empty and sits after everything consumed.
                self.start = self.text.len();
                self.len = 0;
                self.cursor = self.text.len();
                Ok(None)
            }
        }
    }

    /// Byte offset of the current span.
    pub fn token_start(&self) -> usize {
        self.start
    }

    /// Byte length of the current span.
    pub fn token_length(&self) -> usize {
        self.len
    }

    /// Number of characters in the current span.
    pub fn token_char_count(&self) -> usize {
        self.current().chars().count()
    }

    /// Replace the term with the current span's text.
    pub fn copy_text_into(&self, term: &mut CharTermAttribute) {
        term.set_empty().append(self.current());
    }

    /// Bind new input, keeping the text buffer's capacity.
    pub fn reset(&mut self, input: Reader) {
        self.input = Some(input);
        self.text.clear();
        self.loaded = false;
        self.cursor = 0;
        self.start = 0;
        self.len = 0;
    }

    fn current(&self) -> &str {
        &self.text[self.start..self.start + self.len]
    }

    fn fill(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;
        if let Some(mut input) = self.input.take() {
            input.read_to_string(&mut self.text)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("grammar", &self.grammar)
            .field("loaded", &self.loaded)
            .field("cursor", &self.cursor)
            .field("start", &self.start)
            .field("len", &self.len)
            .finish()
    }
}
