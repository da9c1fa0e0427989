//! Token types and snapshots.
//!
//! Tokens do not exist as independent objects inside a pipeline: a token is
//! whatever the shared [`AttributeRecord`] holds right after a successful
//! `increment_token` call. This module defines the fixed [`TokenType`]
//! catalog the tokenizer classifies into, and [`Token`], an owned copy of
//! the record for consumers that need to keep a token around.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::token::{TOKEN_TYPES, TokenType};
//!
//! assert_eq!(TOKEN_TYPES[TokenType::Host.code()], TokenType::Host);
//! assert_eq!(TokenType::Host.label(), "<HOST>");
//! assert_eq!(TokenType::from_code(7), Some(TokenType::Cj));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::attribute::AttributeRecord;

/// Classification assigned to a token by the standard tokenizer.
///
/// The discriminants are the raw type codes produced by the scanners and
/// index [`TOKEN_TYPES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Letters and digits.
    Alphanum = 0,
    /// Words with embedded apostrophes, e.g. `O'Reilly`.
    Apostrophe = 1,
    /// Dotted acronyms, e.g. `U.S.A.`.
    Acronym = 2,
    /// Company names, e.g. `AT&T`.
    Company = 3,
    /// E-mail addresses.
    Email = 4,
    /// Host names, e.g. `www.example.com`.
    Host = 5,
    /// Numbers, including mixed forms like `1-800` or `3.14`.
    Num = 6,
    /// Chinese and Japanese characters (classic grammar).
    Cj = 7,
    /// Ambiguous `word.word.` spans. Never emitted by the tokenizer: it is
    /// reclassified as [`TokenType::Host`] or [`TokenType::Acronym`].
    AcronymDep = 8,
    /// Thai, Lao, Myanmar and Khmer runs.
    SoutheastAsian = 9,
    /// Han ideographs.
    Ideographic = 10,
    /// Hiragana.
    Hiragana = 11,
    /// Katakana.
    Katakana = 12,
    /// Hangul.
    Hangul = 13,
}

/// The token type catalog, ordered by raw type code.
pub static TOKEN_TYPES: [TokenType; 14] = [
    TokenType::Alphanum,
    TokenType::Apostrophe,
    TokenType::Acronym,
    TokenType::Company,
    TokenType::Email,
    TokenType::Host,
    TokenType::Num,
    TokenType::Cj,
    TokenType::AcronymDep,
    TokenType::SoutheastAsian,
    TokenType::Ideographic,
    TokenType::Hiragana,
    TokenType::Katakana,
    TokenType::Hangul,
];

impl TokenType {
    /// The raw type code, i.e. the position of this type in [`TOKEN_TYPES`].
    pub fn code(self) -> usize {
        self as usize
    }

    /// Look up a token type by raw type code.
    pub fn from_code(code: usize) -> Option<TokenType> {
        TOKEN_TYPES.get(code).copied()
    }

    /// The display label, e.g. `<ALPHANUM>`.
    pub fn label(self) -> &'static str {
        match self {
            TokenType::Alphanum => "<ALPHANUM>",
            TokenType::Apostrophe => "<APOSTROPHE>",
            TokenType::Acronym => "<ACRONYM>",
            TokenType::Company => "<COMPANY>",
            TokenType::Email => "<EMAIL>",
            TokenType::Host => "<HOST>",
            TokenType::Num => "<NUM>",
            TokenType::Cj => "<CJ>",
            TokenType::AcronymDep => "<ACRONYM_DEP>",
            TokenType::SoutheastAsian => "<SOUTHEAST_ASIAN>",
            TokenType::Ideographic => "<IDEOGRAPHIC>",
            TokenType::Hiragana => "<HIRAGANA>",
            TokenType::Katakana => "<KATAKANA>",
            TokenType::Hangul => "<HANGUL>",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An owned copy of one token's attributes.
///
/// # Fields
///
/// - `text` - The term text
/// - `position` - Absolute position (0-based), the running sum of increments minus one
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `position_increment` - Positions advanced past the previous token
/// - `token_type` - Classification, if the producing stage set one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The absolute position of the token in the stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token.
    ///
    /// - 1: next position
    /// - 0: same position as the previous token
    /// - >1: positions were skipped (oversized tokens, removed stop words)
    pub position_increment: u32,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            token_type: None,
        }
    }

    /// Copy the current contents of an attribute record.
    pub fn from_attributes(attributes: &AttributeRecord, position: usize) -> Self {
        Token {
            text: attributes.term().as_str().to_string(),
            position,
            start_offset: attributes.offset().start_offset(),
            end_offset: attributes.offset().end_offset(),
            position_increment: attributes.position_increment().get(),
            token_type: attributes.token_type().get(),
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: u32) -> Self {
        self.position_increment = increment;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
