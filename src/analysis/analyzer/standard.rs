//! Standard analyzer that provides good defaults for most use cases.
//!
//! # Pipeline
//!
//! 1. Char filters from `char_mappings` then `pattern_replacements` (offsets
//!    mapped back to the raw text)
//! 2. StandardTokenizer
//! 3. LowercaseFilter (optional, on by default)
//! 4. StopFilter (optional, on by default, English list unless configured)
//! 5. ReverseStringFilter (optional, off by default)
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::analyzer::Analyzer;
//! use tokenflow::analysis::analyzer::config::AnalyzerConfig;
//! use tokenflow::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let config = AnalyzerConfig {
//!     reverse: true,
//!     marker: Some('\u{1}'),
//!     ..AnalyzerConfig::default()
//! };
//! let analyzer = StandardAnalyzer::from_config(config).unwrap();
//! let tokens = analyzer.analyze("The Country").unwrap();
//!
//! assert_eq!(tokens[0].text, "\u{1}yrtnuoc");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::config::AnalyzerConfig;
use crate::analysis::analyzer::{Analyzer, BoxTokenStream};
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::{CharFilter, OffsetMap};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::reverse::ReverseStringFilter;
use crate::analysis::token_filter::stop::{DEFAULT_ENGLISH_STOP_WORDS_SET, StopFilter};
use crate::analysis::token_stream::Pipeline;
use crate::analysis::tokenizer::standard::StandardTokenizer;
use crate::error::Result;

/// A standard analyzer built from an [`AnalyzerConfig`].
pub struct StandardAnalyzer {
    config: AnalyzerConfig,
    char_filters: Vec<Box<dyn CharFilter>>,
    stop_words: Arc<HashSet<String>>,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Self {
        StandardAnalyzer {
            config: AnalyzerConfig::default(),
            char_filters: Vec::new(),
            stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create an analyzer from a config, validating it first.
    pub fn from_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let mut char_filters: Vec<Box<dyn CharFilter>> = Vec::new();
        if !config.char_mappings.is_empty() {
            let mapping = config.char_mappings.clone().into_iter().collect();
            char_filters.push(Box::new(MappingCharFilter::new(mapping)?));
        }
        for r in &config.pattern_replacements {
            char_filters.push(Box::new(PatternReplaceCharFilter::new(
                &r.pattern,
                &r.replacement,
            )?));
        }

        let stop_words = match &config.stop_words {
            Some(words) => Arc::new(words.iter().cloned().collect()),
            None => Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        };

        debug!(
            "standard analyzer: version {}, {} char filters, {} stop words",
            config.version,
            char_filters.len(),
            stop_words.len()
        );

        Ok(StandardAnalyzer {
            config,
            char_filters,
            stop_words,
        })
    }

    /// Get the config this analyzer was built from.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn tokenizer(&self, text: &str) -> Result<StandardTokenizer> {
        let config = &self.config;

        let mut tokenizer = if self.char_filters.is_empty() {
            StandardTokenizer::from_text(config.version, text)
        } else {
            let (filtered, offsets) = OffsetMap::apply(&self.char_filters, text);
            StandardTokenizer::from_text(config.version, &filtered).with_offset_correction(offsets)
        };

        tokenizer.set_max_token_length(config.max_token_length)?;
        if let Some(replace) = config.replace_invalid_acronym {
            tokenizer.set_replace_invalid_acronym(replace);
        }
        Ok(tokenizer)
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn token_stream(&self, text: &str) -> Result<Pipeline<BoxTokenStream>> {
        let config = &self.config;
        let mut stream: BoxTokenStream = Box::new(self.tokenizer(text)?);

        if config.lowercase {
            stream = Box::new(LowercaseFilter::new(stream));
        }
        if config.remove_stop_words {
            stream = Box::new(
                StopFilter::with_stop_words(stream, Arc::clone(&self.stop_words))
                    .enable_position_increments(config.enable_position_increments),
            );
        }
        if config.reverse {
            stream = match config.marker {
                Some(marker) => Box::new(ReverseStringFilter::with_marker(config.version, stream, marker)),
                None => Box::new(ReverseStringFilter::new(config.version, stream)),
            };
        }

        Ok(Pipeline::new(stream))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("config", &self.config)
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
