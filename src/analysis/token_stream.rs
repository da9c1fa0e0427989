//! The pull protocol shared by every pipeline stage.
//!
//! A pipeline is a chain of [`TokenStream`]s: one tokenizer at the source,
//! wrapped by any number of token filters. The consumer repeatedly calls
//! [`TokenStream::increment_token`] on the outermost stage, which pulls from
//! the stage it wraps, and so on down to the tokenizer. All stages read and
//! write the same [`AttributeRecord`], which the consumer owns and lends to
//! the chain on every call.
//!
//! ```text
//! consumer ──increment_token(&mut attrs)──▶ filter ──▶ filter ──▶ tokenizer
//!                                              ▲          ▲           │
//!                                              └──────────┴── attrs ◀─┘
//! ```
//!
//! The protocol for one stream is:
//!
//! 1. call `increment_token` until it returns `false`,
//! 2. call `end` once, which leaves the final offset in the record,
//! 3. optionally `reset` (and, for tokenizers, bind new input) to reuse it.
//!
//! [`Pipeline`] bundles a chain with its record and implements that protocol.

use crate::analysis::attribute::AttributeRecord;
use crate::analysis::token::Token;
use crate::error::Result;

/// A stage of an analysis pipeline.
pub trait TokenStream: Send {
    /// Advance to the next token, writing it into `attributes`.
    ///
    /// Returns `Ok(false)` once the stream is exhausted. Errors are fatal for
    /// this stream instance.
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool>;

    /// Called once after `increment_token` returned `false`, to publish
    /// end-of-stream state such as the final offset.
    fn end(&mut self, _attributes: &mut AttributeRecord) -> Result<()> {
        Ok(())
    }

    /// Reset per-stream state so the stage can be reused.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Get the name of this stage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn increment_token(&mut self, attributes: &mut AttributeRecord) -> Result<bool> {
        (**self).increment_token(attributes)
    }

    fn end(&mut self, attributes: &mut AttributeRecord) -> Result<()> {
        (**self).end(attributes)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A token stream together with the attribute record it writes into.
///
/// # Examples
///
/// ```
/// use tokenflow::analysis::token_filter::reverse::ReverseStringFilter;
/// use tokenflow::analysis::token_stream::Pipeline;
/// use tokenflow::analysis::tokenizer::standard::StandardTokenizer;
/// use tokenflow::analysis::version::Version;
///
/// let tokenizer = StandardTokenizer::from_text(Version::LATEST, "the country");
/// let filter = ReverseStringFilter::new(Version::LATEST, tokenizer);
/// let tokens = Pipeline::new(filter).tokens().unwrap();
///
/// assert_eq!(tokens[0].text, "eht");
/// assert_eq!(tokens[1].text, "yrtnuoc");
/// ```
#[derive(Debug)]
pub struct Pipeline<S> {
    stream: S,
    attributes: AttributeRecord,
}

impl<S: TokenStream> Pipeline<S> {
    /// Wrap a chain with a fresh attribute record.
    pub fn new(stream: S) -> Self {
        Pipeline {
            stream,
            attributes: AttributeRecord::new(),
        }
    }

    /// Advance the chain by one token.
    pub fn increment_token(&mut self) -> Result<bool> {
        self.stream.increment_token(&mut self.attributes)
    }

    /// Finish the chain; the record then holds the final offset.
    pub fn end(&mut self) -> Result<()> {
        self.stream.end(&mut self.attributes)
    }

    /// Reset every stage of the chain.
    pub fn reset(&mut self) -> Result<()> {
        self.attributes.clear();
        self.stream.reset()
    }

    /// The attributes of the current token.
    pub fn attributes(&self) -> &AttributeRecord {
        &self.attributes
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Drain the chain, copying every token, then call `end`.
    ///
    /// Positions are the running sum of position increments, starting at 0.
    pub fn tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut position: Option<usize> = None;

        while self.increment_token()? {
            let increment = self.attributes.position_increment().get() as usize;
            let next = match position {
                Some(p) => p + increment,
                None => increment.saturating_sub(1),
            };
            position = Some(next);
            tokens.push(Token::from_attributes(&self.attributes, next));
        }
        self.end()?;

        Ok(tokens)
    }

    /// Corrected end offset published by `end`.
    pub fn final_offset(&self) -> usize {
        self.attributes.offset().end_offset()
    }
}
