//! Integration tests for config-driven analyzers.

use std::io::Write;

use tempfile::NamedTempFile;
use tokenflow::prelude::*;

#[test]
fn test_analyzer_from_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "version": "LUCENE_29",
            "max_token_length": 6,
            "stop_words": ["and"],
            "reverse": true,
            "marker": "\u001f",
            "pattern_replacements": [{{"pattern": "_", "replacement": " "}}]
        }}"#
    )?;

    let config = AnalyzerConfig::from_file(file.path())?;
    assert_eq!(config.version, Version::V2_9);

    let analyzer = StandardAnalyzer::from_config(config)?;
    let mut pipeline = analyzer.token_stream("Salt_and PEPPER grinders")?;
    let tokens = pipeline.tokens()?;

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["\u{1f}tlas", "\u{1f}reppep"]);
    // "and" removed by the stop filter.
    assert_eq!(tokens[1].position_increment, 2);
    assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (9, 15));
    assert_eq!(pipeline.final_offset(), 24);
    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"version": "1.9"}}"#)?;
    assert!(matches!(
        AnalyzerConfig::from_file(file.path()),
        Err(TokenflowError::Json(_))
    ));

    let missing = AnalyzerConfig::from_file("/nonexistent/tokenflow.json");
    assert!(matches!(missing, Err(TokenflowError::Io(_))));
    Ok(())
}

#[test]
fn test_default_analyzer_matches_tokenizer_offsets() -> Result<()> {
    let text = "The Quick brown fox";
    let analyzed = StandardAnalyzer::default().analyze(text)?;
    let raw = Pipeline::new(StandardTokenizer::from_text(Version::LATEST, text)).tokens()?;

    assert_eq!(analyzed.len(), 3);
    for token in &analyzed {
        let source = raw
            .iter()
            .find(|r| r.start_offset == token.start_offset)
            .expect("token with same start");
        assert_eq!(source.end_offset, token.end_offset);
        assert_eq!(source.text.to_lowercase(), token.text);
    }
    Ok(())
}
