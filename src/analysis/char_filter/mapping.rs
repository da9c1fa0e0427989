//! Literal string mapping char filter.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::{CharFilter, Transformation};
use crate::error::{Result, TokenflowError};

/// Replaces every occurrence of a mapping key with its value, preferring
/// the longest key at each position.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        let (keys, replacements): (Vec<String>, Vec<String>) = mapping.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| TokenflowError::config(format!("Invalid mapping: {e}")))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            let replacement = &self.replacements[m.pattern().as_usize()];

            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            output.push_str(replacement);
            let new_end = output.len();

            transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
