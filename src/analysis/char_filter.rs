//! Char filters and offset correction.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. Every
//! rewrite is recorded as a [`Transformation`], so offsets the tokenizer
//! computes against the filtered text can be mapped back onto the original
//! text through an [`OffsetMap`], the tokenizer's offset-correction hook.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Literal string mapping
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//! use tokenflow::analysis::char_filter::{CharFilter, OffsetCorrection, OffsetMap};
//!
//! let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
//! let filters: Vec<Box<dyn CharFilter>> = vec![Box::new(filter)];
//! let (text, offsets) = OffsetMap::apply(&filters, "foo-bar baz");
//!
//! assert_eq!(text, "foobar baz");
//! // "baz" starts at 7 in the filtered text and at 8 in the original.
//! assert_eq!(offsets.correct_offset(7), 8);
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Implementations return the filtered text along with the transformations,
/// ordered by position, that produced it.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Maps an offset in tokenizer input back to an offset in the original text.
pub trait OffsetCorrection: Send {
    fn correct_offset(&self, offset: usize) -> usize;
}

/// Offset correction built from the transformations of a char filter chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetMap {
    /// One entry per applied char filter, in application order.
    layers: Vec<Vec<Transformation>>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the transformations of the next char filter in the chain.
    pub fn push_layer(&mut self, transformations: Vec<Transformation>) {
        self.layers.push(transformations);
    }

    /// Run `text` through `filters` in order, returning the filtered text and
    /// the map back to the original.
    pub fn apply(filters: &[Box<dyn CharFilter>], text: &str) -> (String, OffsetMap) {
        let mut filtered = text.to_string();
        let mut map = OffsetMap::new();

        for filter in filters {
            let (next, transformations) = filter.filter(&filtered);
            filtered = next;
            map.push_layer(transformations);
        }

        (filtered, map)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }

    fn correct_layer(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset as isize;
        for t in transformations {
            if offset >= t.new_end {
                // Past this rewrite: shift by the length difference.
                let original_len = (t.original_end - t.original_start) as isize;
                let new_len = (t.new_end - t.new_start) as isize;
                corrected += original_len - new_len;
            } else if offset >= t.new_start {
                // Inside the rewritten range: interpolate.
                let new_len = t.new_end - t.new_start;
                let original_len = t.original_end - t.original_start;
                return t.original_start + (offset - t.new_start) * original_len / new_len;
            } else {
                break;
            }
        }
        corrected.max(0) as usize
    }
}

impl OffsetCorrection for OffsetMap {
    fn correct_offset(&self, offset: usize) -> usize {
        // Final text -> filter N -> ... -> filter 1 -> original
        self.layers
            .iter()
            .rev()
            .fold(offset, |offset, layer| Self::correct_layer(offset, layer))
    }
}

pub mod mapping;
pub mod pattern_replace;
