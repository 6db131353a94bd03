//! Text normalization
//!
//! Strips noise (URLs, mentions, stray symbols, stretched characters) and
//! expands teencode abbreviations so both estimators see the same clean,
//! whitespace-tokenizable text. Sentence-final `?` survives because the
//! rule engine's question veto and neutral-register heuristics are
//! substring checks on it; `!` is stripped like any other symbol — left
//! in place it glues onto the preceding token and hides it from the
//! whole-token lexicon lookup.

use regex::Regex;
use std::collections::HashMap;

/// Character-run length at which stretching collapses ("ngonnn" -> "ngon")
const MAX_CHAR_RUN: usize = 2;

/// Teencode/slang expansions. Expansions never map onto another key, so
/// normalization stays idempotent.
const SLANG: &[(&str, &str)] = &[
    ("ko", "không"),
    ("k", "không"),
    ("hok", "không"),
    ("dc", "được"),
    ("đc", "được"),
    ("r", "rồi"),
    ("vs", "với"),
    ("bt", "bình thường"),
    ("mng", "mọi người"),
    ("mn", "mọi người"),
    ("tk", "tớ"),
    ("ad", "admin"),
    ("pro", "chuyên nghiệp"),
    ("ok", "được"),
    ("oke", "được"),
    ("okê", "được"),
    ("hihi", "cười"),
    ("haha", "cười"),
    ("hehe", "cười"),
];

/// Normalizer for raw Vietnamese text. Construct once, reuse freely.
pub struct TextNormalizer {
    url_re: Regex,
    mention_re: Regex,
    slang: HashMap<String, String>,
}

impl TextNormalizer {
    /// Create a normalizer with the built-in teencode table
    pub fn new() -> Self {
        Self::with_slang(SLANG.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    /// Create a normalizer with a custom teencode table
    pub fn with_slang(slang: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            // the patterns are literals known to compile
            url_re: Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").unwrap(),
            mention_re: Regex::new(r"@\w+").unwrap(),
            slang: slang.into_iter().collect(),
        }
    }

    /// Normalize raw text. Idempotent, never fails; the result may be
    /// empty when the input is all noise.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.url_re.replace_all(text, " ");
        let text = self.mention_re.replace_all(&text, " ");
        let text = collapse_runs(&text);
        let text = strip_symbols(&text);

        let mut out = Vec::new();
        for token in text.split_whitespace() {
            let lower = token.to_lowercase();
            match self.slang.get(&lower) {
                Some(expanded) => out.push(expanded.clone()),
                None => out.push(token.to_string()),
            }
        }
        out.join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of 3+ identical characters to a single character; runs
/// of two are legitimate spelling and survive
fn collapse_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let emit = if run > MAX_CHAR_RUN { 1 } else { run };
        for _ in 0..emit {
            out.push(c);
        }
    }
    out
}

/// Replace everything that is not a letter, digit, whitespace, or a
/// question mark with a space
fn strip_symbols(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '?' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls_and_mentions() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("xem https://example.com/sp @shop123 tốt"),
            "xem tốt"
        );
    }

    #[test]
    fn test_collapses_stretched_characters() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("ngonnnn quáááá"), "ngon quá");
        // double characters are legitimate and survive
        assert_eq!(normalizer.normalize("xoong"), "xoong");
    }

    #[test]
    fn test_expands_teencode() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("ko ngon"), "không ngon");
        assert_eq!(normalizer.normalize("dc đấy"), "được đấy");
    }

    #[test]
    fn test_keeps_question_mark() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("tốt không?"), "tốt không?");
    }

    #[test]
    fn test_strips_exclamation_from_tokens() {
        let normalizer = TextNormalizer::new();
        // a trailing "!" must not stay glued to the token ahead of it
        assert_eq!(normalizer.normalize("dịch vụ quá tệ!"), "dịch vụ quá tệ");
        assert_eq!(normalizer.normalize("không! đừng mua"), "không đừng mua");
    }

    #[test]
    fn test_strips_symbols_and_whitespace() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("  tốt ###   lắm  "),
            "tốt lắm"
        );
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::new();
        let samples = [
            "ko ngon @shop https://x.vn/a đâuuuu!!!",
            "sản phẩm ok, giao hàng nhanh",
            "",
        ];
        for raw in samples {
            let once = normalizer.normalize(raw);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_and_noise_only() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("### $$$ %%%"), "");
    }
}
