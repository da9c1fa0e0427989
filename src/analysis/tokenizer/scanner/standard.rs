//! The Unicode word-break grammar (UAX #29).
//!
//! Word segments are classified by script:
//!
//! - Han ideographs, Hiragana → one token per character
//! - Katakana, Hangul → runs
//! - Thai, Lao, Myanmar, Khmer → runs, merged across segment boundaries
//! - other segments with a letter → ALPHANUM, with only digits → NUM
//!
//! Segments without letters or digits (whitespace, punctuation, symbols)
//! are skipped.

use unicode_segmentation::UnicodeSegmentation;

use super::RawMatch;
use crate::analysis::token::TokenType;

fn is_ideographic(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'     // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        | '\u{3005}' | '\u{3007}'   // 々 〇
        | '\u{20000}'..='\u{2FA1F}' // Extensions B-F and compatibility supplement
        | '\u{30000}'..='\u{3134F}' // Extension G
    )
}

fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{1B001}'..='\u{1B11F}')
}

fn is_katakana(c: char) -> bool {
    matches!(c,
        '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}'
        | '\u{1B000}'
    )
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}'
        | '\u{3130}'..='\u{318F}'
        | '\u{A960}'..='\u{A97F}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{D7B0}'..='\u{D7FF}'
    )
}

fn is_southeast_asian(c: char) -> bool {
    matches!(c,
        '\u{0E00}'..='\u{0E7F}'   // Thai
        | '\u{0E80}'..='\u{0EFF}' // Lao
        | '\u{1000}'..='\u{109F}' // Myanmar
        | '\u{1780}'..='\u{17FF}' // Khmer
    )
}

/// Whether every letter and digit of `segment` belongs to `script`.
fn only_script(segment: &str, script: fn(char) -> bool) -> bool {
    segment.chars().filter(|c| c.is_alphanumeric()).all(script)
}

/// Classify one word segment, or `None` if it is not a token.
///
/// Katakana, Hangul and Southeast Asian types need the whole segment in
/// that script; a segment mixing in Latin letters or digits is ALPHANUM.
fn classify(segment: &str) -> Option<TokenType> {
    let first = segment.chars().next()?;

    if is_ideographic(first) {
        Some(TokenType::Ideographic)
    } else if is_hiragana(first) {
        Some(TokenType::Hiragana)
    } else if is_katakana(first) && only_script(segment, is_katakana) {
        Some(TokenType::Katakana)
    } else if is_hangul(first) && only_script(segment, is_hangul) {
        Some(TokenType::Hangul)
    } else if is_southeast_asian(first) && only_script(segment, is_southeast_asian) {
        Some(TokenType::SoutheastAsian)
    } else if segment.chars().any(char::is_alphabetic) {
        Some(TokenType::Alphanum)
    } else if segment.chars().any(char::is_numeric) {
        Some(TokenType::Num)
    } else {
        None
    }
}

fn first_segment(text: &str) -> Option<&str> {
    text.split_word_bounds().next()
}

/// Find the first token at or after byte offset `from`.
pub fn next_match(text: &str, from: usize) -> Option<RawMatch> {
    let mut pos = from;
    while let Some(segment) = first_segment(&text[pos..]) {
        let end = pos + segment.len();

        if let Some(token_type) = classify(segment) {
            let mut end = end;
            if token_type == TokenType::SoutheastAsian {
                while let Some(next) = first_segment(&text[end..]) {
                    if classify(next) != Some(TokenType::SoutheastAsian) {
                        break;
                    }
                    end += next.len();
                }
            }
            return Some(RawMatch {
                start: pos,
                end,
                token_type,
            });
        }

        pos = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<(&str, TokenType)> {
        let mut out = Vec::new();
        let mut pos = 0;
        while let Some(m) = next_match(text, pos) {
            out.push((&text[m.start..m.end], m.token_type));
            pos = m.end;
        }
        out
    }

    #[test]
    fn test_words_and_numbers() {
        assert_eq!(
            scan("Hello, world! It's 3.14 today."),
            vec![
                ("Hello", TokenType::Alphanum),
                ("world", TokenType::Alphanum),
                ("It's", TokenType::Alphanum),
                ("3.14", TokenType::Num),
                ("today", TokenType::Alphanum),
            ]
        );
    }

    #[test]
    fn test_japanese_scripts() {
        assert_eq!(
            scan("東京でカタカナ"),
            vec![
                ("東", TokenType::Ideographic),
                ("京", TokenType::Ideographic),
                ("で", TokenType::Hiragana),
                ("カタカナ", TokenType::Katakana),
            ]
        );
    }

    #[test]
    fn test_hangul_run() {
        assert_eq!(scan("안녕하세요"), vec![("안녕하세요", TokenType::Hangul)]);
    }

    #[test]
    fn test_mixed_script_segment_is_alphanum() {
        assert_eq!(
            scan("한국abc 안녕 한국123"),
            vec![
                ("한국abc", TokenType::Alphanum),
                ("안녕", TokenType::Hangul),
                ("한국123", TokenType::Alphanum),
            ]
        );
    }

    #[test]
    fn test_thai_run() {
        assert_eq!(
            scan("สวัสดี ok"),
            vec![("สวัสดี", TokenType::SoutheastAsian), ("ok", TokenType::Alphanum)]
        );
    }

    #[test]
    fn test_supplementary_ideograph_is_atomic() {
        // U+20000 is a CJK Extension B ideograph outside the BMP.
        let text = "a \u{20000} b";
        let tokens = scan(text);
        assert_eq!(tokens[1], ("\u{20000}", TokenType::Ideographic));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_symbols_skipped() {
        assert!(scan("  -- ... !!! \u{1F600} ").is_empty());
    }
}
