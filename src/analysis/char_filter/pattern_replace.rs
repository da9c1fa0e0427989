//! Regex-based char filter.

use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{Result, TokenflowError};

/// A char filter that replaces text matching a regex pattern.
///
/// The replacement may reference capture groups (`$1`, `${name}`).
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TokenflowError::config(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for caps in self.pattern.captures_iter(input) {
            let Some(m) = caps.get(0) else { continue };

            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            caps.expand(&self.replacement, &mut output);
            let new_end = output.len();

            // Equal-length rewrites leave offsets unchanged.
            if m.len() != new_end - new_start {
                transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            }

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
