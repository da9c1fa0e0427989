//! The classic grammar.
//!
//! Each rule is an anchored regex. At a given position every rule is tried
//! and the longest match wins; ties go to the rule listed first. Positions
//! where no rule matches are skipped one character at a time.
//!
//! ```text
//! ALPHANUM    = (LETTER|DIGIT)+
//! APOSTROPHE  = ALPHA ("'" ALPHA)+
//! ACRONYM     = LETTER "." (LETTER ".")+
//! COMPANY     = ALPHA ("&"|"@") ALPHA
//! EMAIL       = ALPHANUM (("."|"-"|"_") ALPHANUM)* "@" ALPHANUM (("."|"-") ALPHANUM)+
//! HOST        = ALPHANUM ("." ALPHANUM)+
//! NUM         = serial/model numbers: segments joined by P, every other one with a digit
//! CJ          = one Chinese or Japanese character
//! ACRONYM_DEP = ALPHANUM "." (ALPHANUM ".")+
//! P           = "_" | "-" | "/" | "." | ","
//! ```
//!
//! LETTER excludes the CJ ranges. Neither LETTER nor DIGIT includes
//! supplementary characters.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::RawMatch;
use crate::analysis::token::TokenType;

const CJ_RANGES: &str = r"\x{3100}-\x{312F}\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{31F0}-\x{31FF}\x{3300}-\x{337F}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}\x{FF65}-\x{FF9F}";

const SUPPLEMENTARY: &str = r"\x{10000}-\x{10FFFF}";

static RULES: LazyLock<Vec<(Regex, TokenType)>> = LazyLock::new(|| {
    let letter = format!(r"[\p{{L}}--[{CJ_RANGES}{SUPPLEMENTARY}]]");
    let digit = format!(r"[\p{{Nd}}--[{SUPPLEMENTARY}]]");
    let alnum = format!(r"[[\p{{L}}\p{{Nd}}]--[{CJ_RANGES}{SUPPLEMENTARY}]]");

    let alphanum = format!("{alnum}+");
    let alpha = format!("{letter}+");
    let has_digit = format!("{alnum}*{digit}{alnum}*");
    let p = r"[_\-/.,]";

    let rules = [
        (alphanum.clone(), TokenType::Alphanum),
        (format!("{alpha}(?:'{alpha})+"), TokenType::Apostrophe),
        (format!(r"{letter}\.(?:{letter}\.)+"), TokenType::Acronym),
        (format!("{alpha}[&@]{alpha}"), TokenType::Company),
        (
            format!(r"{alphanum}(?:[._\-]{alphanum})*@{alphanum}(?:[.\-]{alphanum})+"),
            TokenType::Email,
        ),
        (format!(r"{alphanum}(?:\.{alphanum})+"), TokenType::Host),
        (format!("{alphanum}{p}{has_digit}"), TokenType::Num),
        (format!("{has_digit}{p}{alphanum}"), TokenType::Num),
        (
            format!("{alphanum}(?:{p}{has_digit}{p}{alphanum})+"),
            TokenType::Num,
        ),
        (
            format!("{has_digit}(?:{p}{alphanum}{p}{has_digit})+"),
            TokenType::Num,
        ),
        (
            format!("{alphanum}{p}{has_digit}(?:{p}{alphanum}{p}{has_digit})+"),
            TokenType::Num,
        ),
        (
            format!("{has_digit}{p}{alphanum}(?:{p}{has_digit}{p}{alphanum})+"),
            TokenType::Num,
        ),
        (format!("[{CJ_RANGES}]"), TokenType::Cj),
        (format!(r"{alphanum}\.(?:{alphanum}\.)+"), TokenType::AcronymDep),
    ];

    debug!("compiling {} classic grammar rules", rules.len());

    rules
        .into_iter()
        .map(|(pattern, token_type)| {
            let regex = Regex::new(&format!("^(?:{pattern})"))
                .unwrap_or_else(|e| panic!("classic grammar rule {token_type} is invalid: {e}"));
            (regex, token_type)
        })
        .collect()
});

/// Longest rule match at the start of `text`.
fn longest_match(text: &str) -> Option<(usize, TokenType)> {
    let mut best: Option<(usize, TokenType)> = None;
    for (regex, token_type) in RULES.iter() {
        if let Some(m) = regex.find(text) {
            let len = m.end();
            if len > 0 && best.is_none_or(|(best_len, _)| len > best_len) {
                best = Some((len, *token_type));
            }
        }
    }
    best
}

/// Find the first token at or after byte offset `from`.
pub fn next_match(text: &str, from: usize) -> Option<RawMatch> {
    let mut pos = from;
    while let Some(c) = text[pos..].chars().next() {
        // Every rule starts with a letter or digit.
        if c.is_alphanumeric() {
            if let Some((len, token_type)) = longest_match(&text[pos..]) {
                return Some(RawMatch {
                    start: pos,
                    end: pos + len,
                    token_type,
                });
            }
        }
        pos += c.len_utf8();
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
    fn test_alphanum() {
        assert_eq!(
            scan("B2B R2D2 c3po"),
            vec![
                ("B2B", TokenType::Alphanum),
                ("R2D2", TokenType::Alphanum),
                ("c3po", TokenType::Alphanum),
            ]
        );
    }

    #[test]
    fn test_apostrophe_and_company() {
        assert_eq!(
            scan("O'Reilly's AT&T Excite@Home"),
            vec![
                ("O'Reilly's", TokenType::Apostrophe),
                ("AT&T", TokenType::Company),
                ("Excite@Home", TokenType::Company),
            ]
        );
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(scan("U.S.A."), vec![("U.S.A.", TokenType::Acronym)]);
        // Same length as ACRONYM_DEP; the earlier rule wins.
        assert_eq!(scan("I.B.M."), vec![("I.B.M.", TokenType::Acronym)]);
        assert_eq!(
            scan("www.apache.org."),
            vec![("www.apache.org.", TokenType::AcronymDep)]
        );
    }

    #[test]
    fn test_email_and_host() {
        assert_eq!(
            scan("mail test.user@example.co.uk or visit www.example.com"),
            vec![
                ("mail", TokenType::Alphanum),
                ("test.user@example.co.uk", TokenType::Email),
                ("or", TokenType::Alphanum),
                ("visit", TokenType::Alphanum),
                ("www.example.com", TokenType::Host),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            scan("1-800-555 a1/b2 x-1"),
            vec![
                ("1-800-555", TokenType::Num),
                ("a1/b2", TokenType::Num),
                ("x-1", TokenType::Num),
            ]
        );
    }

    #[test]
    fn test_cj_characters_are_single_tokens() {
        assert_eq!(
            scan("中文"),
            vec![("中", TokenType::Cj), ("文", TokenType::Cj)]
        );
    }

    #[test]
    fn test_supplementary_characters_separate() {
        // U+1D400 MATHEMATICAL BOLD CAPITAL A is a letter outside the BMP.
        assert_eq!(
            scan("ab\u{1D400}cd"),
            vec![("ab", TokenType::Alphanum), ("cd", TokenType::Alphanum)]
        );
    }

    #[test]
    fn test_punctuation_only() {
        assert!(scan(" ,.;!? -- ").is_empty());
    }
}
