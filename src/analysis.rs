//! Text analysis for tokenflow.
//!
//! This module provides tokenization, token filtering and the analyzers that
//! chain them together. Stages share one [`attribute::AttributeRecord`] per
//! pipeline and are pulled one token at a time.

pub mod analyzer;
pub mod attribute;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod token_stream;
pub mod tokenizer;
pub mod version;
