//! The attribute record shared by every stage of one pipeline.
//!
//! A pipeline owns exactly one [`AttributeRecord`] and lends it by `&mut` to
//! each stage on every `increment_token` call. Stages mutate the record in
//! place: the term buffer keeps its capacity across tokens, so steady-state
//! analysis does not allocate per token.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::attribute::AttributeRecord;
//! use tokenflow::analysis::token::TokenType;
//!
//! let mut attributes = AttributeRecord::new();
//! attributes.term_mut().append("search");
//! attributes.offset_mut().set_offset(0, 6);
//! attributes.token_type_mut().set(TokenType::Alphanum);
//!
//! assert_eq!(attributes.term().as_str(), "search");
//!
//! attributes.clear();
//! assert!(attributes.term().is_empty());
//! assert_eq!(attributes.position_increment().get(), 1);
//! assert_eq!(attributes.token_type().get(), None);
//! ```

use crate::analysis::token::TokenType;

/// The term text of the current token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharTermAttribute {
    buffer: String,
}

impl CharTermAttribute {
    /// The term text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Length of the term in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empty the term, keeping the buffer's capacity.
    pub fn set_empty(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Append text to the term.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a single character to the term.
    pub fn push(&mut self, c: char) -> &mut Self {
        self.buffer.push(c);
        self
    }

    /// Shorten the term to `len` bytes.
    ///
    /// `len` must fall on a character boundary.
    pub fn set_length(&mut self, len: usize) -> &mut Self {
        self.buffer.truncate(len);
        self
    }

    /// Drop the last character of the term, returning it.
    pub fn pop(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    /// Direct access to the underlying buffer, for stages that rewrite the
    /// term wholesale.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}

/// Start and end byte offsets of the current token in the original text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffsetAttribute {
    start: usize,
    end: usize,
}

impl OffsetAttribute {
    pub fn start_offset(&self) -> usize {
        self.start
    }

    pub fn end_offset(&self) -> usize {
        self.end
    }

    /// Set both offsets. `start` must not exceed `end`.
    pub fn set_offset(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end, "start offset {start} exceeds end offset {end}");
        self.start = start;
        self.end = end;
    }
}

/// Number of positions the current token advances past the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionIncrementAttribute {
    increment: u32,
}

impl Default for PositionIncrementAttribute {
    fn default() -> Self {
        PositionIncrementAttribute { increment: 1 }
    }
}

impl PositionIncrementAttribute {
    pub fn get(&self) -> u32 {
        self.increment
    }

    pub fn set(&mut self, increment: u32) {
        self.increment = increment;
    }
}

/// Classification of the current token. Unset until a stage assigns one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeAttribute {
    token_type: Option<TokenType>,
}

impl TypeAttribute {
    pub fn get(&self) -> Option<TokenType> {
        self.token_type
    }

    pub fn set(&mut self, token_type: TokenType) {
        self.token_type = Some(token_type);
    }
}

/// The mutable record carrying one token's attributes between stages.
///
/// Each attribute lives for the whole life of the record; accessors hand out
/// references to the same objects on every call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    term: CharTermAttribute,
    offset: OffsetAttribute,
    position_increment: PositionIncrementAttribute,
    token_type: TypeAttribute,
}

impl AttributeRecord {
    /// Create a record with every attribute in its cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every attribute before producing the next token.
    ///
    /// The term buffer keeps its capacity.
    pub fn clear(&mut self) {
        self.term.set_empty();
        self.offset = OffsetAttribute::default();
        self.position_increment = PositionIncrementAttribute::default();
        self.token_type = TypeAttribute::default();
    }

    pub fn term(&self) -> &CharTermAttribute {
        &self.term
    }

    pub fn term_mut(&mut self) -> &mut CharTermAttribute {
        &mut self.term
    }

    pub fn offset(&self) -> &OffsetAttribute {
        &self.offset
    }

    pub fn offset_mut(&mut self) -> &mut OffsetAttribute {
        &mut self.offset
    }

    pub fn position_increment(&self) -> &PositionIncrementAttribute {
        &self.position_increment
    }

    pub fn position_increment_mut(&mut self) -> &mut PositionIncrementAttribute {
        &mut self.position_increment
    }

    pub fn token_type(&self) -> &TypeAttribute {
        &self.token_type
    }

    pub fn token_type_mut(&mut self) -> &mut TypeAttribute {
        &mut self.token_type
    }
}
