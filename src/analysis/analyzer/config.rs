//! Configuration for the standard analyzer.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::standard::DEFAULT_MAX_TOKEN_LENGTH;
use crate::analysis::version::Version;
use crate::error::{Result, TokenflowError};

/// A regex replacement applied to the text before tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReplacement {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

/// Settings for building a [`StandardAnalyzer`] pipeline.
///
/// Every field has a default, so a config file only needs the fields it
/// changes:
///
/// ```json
/// { "version": "2.9", "reverse": true, "marker": "\u0001" }
/// ```
///
/// [`StandardAnalyzer`]: crate::analysis::analyzer::standard::StandardAnalyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Compatibility version for the tokenizer.
    pub version: Version,
    /// Tokens longer than this many characters are skipped.
    pub max_token_length: usize,
    /// Overrides the version's default acronym handling when set.
    pub replace_invalid_acronym: Option<bool>,
    /// Lowercase terms.
    pub lowercase: bool,
    /// Remove stop words.
    pub remove_stop_words: bool,
    /// Custom stop words; the default English list when unset.
    pub stop_words: Option<Vec<String>>,
    /// Whether removed stop words leave a position gap.
    pub enable_position_increments: bool,
    /// Reverse terms.
    pub reverse: bool,
    /// Marker prepended to reversed terms.
    pub marker: Option<char>,
    /// Literal string mappings, applied before the pattern replacements.
    pub char_mappings: BTreeMap<String, String>,
    /// Char filter replacements, applied in order.
    pub pattern_replacements: Vec<PatternReplacement>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            version: Version::LATEST,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            replace_invalid_acronym: None,
            lowercase: true,
            remove_stop_words: true,
            stop_words: None,
            enable_position_increments: true,
            reverse: false,
            marker: None,
            char_mappings: BTreeMap::new(),
            pattern_replacements: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check settings that cannot be expressed in the types.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_length == 0 {
            return Err(TokenflowError::config("max_token_length must be at least 1"));
        }
        if self.marker.is_some() && !self.reverse {
            return Err(TokenflowError::config("marker requires reverse to be enabled"));
        }
        if self.char_mappings.keys().any(|key| key.is_empty()) {
            return Err(TokenflowError::config("char_mappings keys must not be empty"));
        }
        Ok(())
    }
}
