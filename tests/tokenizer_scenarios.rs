//! Integration tests for the tokenizer and reversal filter pull protocol.

use std::io::{self, Cursor, Read};

use tokenflow::analysis::token_filter::TokenFilter;
use tokenflow::analysis::token_filter::reverse::{
    ReverseStringFilter, START_OF_HEADING_MARKER, reverse_str,
};
use tokenflow::analysis::tokenizer::scanner::{Grammar, Scanner};
use tokenflow::prelude::*;

/// A reader that fails after handing out its prefix.
struct FailingReader {
    prefix: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.prefix.read(buf)? {
            0 => Err(io::Error::other("disk on fire")),
            n => Ok(n),
        }
    }
}

#[test]
fn test_reverse_with_marker() -> Result<()> {
    let tokenizer = StandardTokenizer::from_text(Version::LATEST, "the country");
    let filter = ReverseStringFilter::with_marker(Version::LATEST, tokenizer, START_OF_HEADING_MARKER);
    let mut pipeline = Pipeline::new(filter);

    assert!(pipeline.increment_token()?);
    let attributes = pipeline.attributes();
    assert_eq!(attributes.term().as_str(), "\u{1}eht");
    assert_eq!(attributes.offset().start_offset(), 0);
    assert_eq!(attributes.offset().end_offset(), 3);
    assert_eq!(attributes.position_increment().get(), 1);

    assert!(pipeline.increment_token()?);
    let attributes = pipeline.attributes();
    assert_eq!(attributes.term().as_str(), "\u{1}yrtnuoc");
    assert_eq!(attributes.offset().start_offset(), 4);
    assert_eq!(attributes.offset().end_offset(), 11);
    assert_eq!(attributes.position_increment().get(), 1);

    assert!(!pipeline.increment_token()?);
    pipeline.end()?;
    assert_eq!(pipeline.final_offset(), 11);
    Ok(())
}

#[test]
fn test_oversized_token_skipped_to_exhaustion() -> Result<()> {
    let mut tokenizer = StandardTokenizer::from_text(Version::LATEST, "the country");
    tokenizer.set_max_token_length(3)?;
    let mut attributes = AttributeRecord::new();

    assert!(tokenizer.increment_token(&mut attributes)?);
    assert_eq!(attributes.term().as_str(), "the");
    assert_eq!(attributes.position_increment().get(), 1);

    assert!(!tokenizer.increment_token(&mut attributes)?);
    Ok(())
}

#[test]
fn test_offsets_are_ordered_and_within_input() -> Result<()> {
    let text = "Visit AT&T, mail bob@example.com, or see 21.35 and I.B.M. at www.apache.org. 東京";

    for version in [Version::V2_3, Version::V2_9, Version::V3_1] {
        let tokens = Pipeline::new(StandardTokenizer::from_text(version, text)).tokens()?;
        assert!(!tokens.is_empty());

        let mut last_start = 0;
        for token in &tokens {
            assert!(token.start_offset <= token.end_offset, "{version}: {token:?}");
            assert!(token.end_offset <= text.len(), "{version}: {token:?}");
            assert!(token.start_offset >= last_start, "{version}: {token:?}");
            assert!(token.position_increment >= 1);
            assert!(token.token_type.is_some());
            last_start = token.start_offset;
        }
    }
    Ok(())
}

#[test]
fn test_reversal_keeps_supplementary_characters_whole() {
    assert_eq!(reverse_str("a𝄞b"), "b𝄞a");
    assert_eq!(reverse_str("𝄞𝄢"), "𝄢𝄞");
    assert_eq!(reverse_str(""), "");
}

#[test]
fn test_reversal_passes_other_attributes_through() -> Result<()> {
    let plain = Pipeline::new(StandardTokenizer::from_text(Version::V2_9, "I.B.M. rocks")).tokens()?;
    let reversed = Pipeline::new(ReverseStringFilter::new(
        Version::V2_9,
        StandardTokenizer::from_text(Version::V2_9, "I.B.M. rocks"),
    ))
    .tokens()?;

    assert_eq!(plain.len(), reversed.len());
    for (p, r) in plain.iter().zip(&reversed) {
        assert_eq!(r.text, reverse_str(&p.text));
        assert_eq!(
            (p.start_offset, p.end_offset, p.position_increment, p.token_type),
            (r.start_offset, r.end_offset, r.position_increment, r.token_type)
        );
    }
    Ok(())
}

#[test]
fn test_empty_input_ends_at_zero() -> Result<()> {
    let mut pipeline = Pipeline::new(StandardTokenizer::from_text(Version::LATEST, ""));
    assert!(pipeline.tokens()?.is_empty());
    assert_eq!(pipeline.final_offset(), 0);
    Ok(())
}

#[test]
fn test_reader_failure_surfaces_as_io_error() {
    let reader = FailingReader {
        prefix: Cursor::new(b"partial ".to_vec()),
    };
    let mut tokenizer = StandardTokenizer::new(Version::LATEST, reader);
    let mut attributes = AttributeRecord::new();

    let err = tokenizer.increment_token(&mut attributes).unwrap_err();
    assert!(matches!(err, TokenflowError::Io(_)));
}

#[test]
fn test_invalid_utf8_surfaces_as_io_error() {
    let mut tokenizer = StandardTokenizer::new(Version::LATEST, Cursor::new(vec![b'a', 0xFF, b'b']));
    let mut attributes = AttributeRecord::new();

    assert!(matches!(
        tokenizer.increment_token(&mut attributes),
        Err(TokenflowError::Io(_))
    ));
}

#[test]
fn test_reinitialize_through_filter() -> Result<()> {
    let tokenizer = StandardTokenizer::from_text(Version::LATEST, "one");
    let mut pipeline = Pipeline::new(ReverseStringFilter::new(Version::LATEST, tokenizer));
    assert_eq!(pipeline.tokens()?[0].text, "eno");

    pipeline
        .stream_mut()
        .input_mut()
        .set_reader(Box::new(Cursor::new("two three".to_string())))?;
    pipeline.reset()?;

    let tokens = pipeline.tokens()?;
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["owt", "eerht"]);
    assert_eq!(pipeline.final_offset(), 9);
    Ok(())
}

#[test]
fn test_increments_account_for_every_raw_token() -> Result<()> {
    // Ends with a short token so no skipped token trails the last emitted one.
    let text = "a bbbbbb AT&T www.apache.org 東京 ffff ggggg h";

    for version in [Version::V2_9, Version::V3_1] {
        let mut scanner = Scanner::new(
            Grammar::for_version(version),
            Box::new(Cursor::new(text.to_string())),
        );
        let mut raw_count = 0u32;
        while scanner.next_token()?.is_some() {
            raw_count += 1;
        }

        let mut tokenizer = StandardTokenizer::from_text(version, text);
        tokenizer.set_max_token_length(4)?;
        let tokens = Pipeline::new(tokenizer).tokens()?;

        let increments: u32 = tokens.iter().map(|t| t.position_increment).sum();
        assert!(tokens.len() < raw_count as usize, "{version}: nothing was skipped");
        assert_eq!(increments, raw_count, "{version}");
        assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("h"));
    }
    Ok(())
}
