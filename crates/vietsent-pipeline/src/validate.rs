//! Input quality gate
//!
//! Heuristic checks that reject malformed or spam input before it reaches
//! the estimators: length bounds, meaningful-character ratio, keyboard
//! mashing, and a Vietnamese-content check that degrades to a non-blocking
//! warning so diacritic-free Vietnamese still gets classified.

use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Minimum input length in characters
const MIN_CHARS: usize = 3;

/// Maximum input length in characters
const MAX_CHARS: usize = 500;

/// Minimum fraction of meaningful (word/punctuation) characters
const MIN_MEANINGFUL_RATIO: f32 = 0.3;

/// Identical-character run length that marks keyboard mashing
const MASH_RUN: usize = 5;

/// Longest consonant streak plausible in Vietnamese
const MAX_CONSONANT_STREAK: usize = 8;

/// Distinct keyboard-pattern hits that mark spam
const MAX_KEYBOARD_HITS: usize = 3;

/// Minimum fraction of recognizably Vietnamese words
const MIN_VIETNAMESE_RATIO: f32 = 0.2;

/// Texts longer than this get the Vietnamese-content check
const VIETNAMESE_CHECK_MIN_CHARS: usize = 10;

/// Rows of adjacent keys that show up in keyboard mashing
const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdfgh", "zxcvbnm", "qwer", "asdf", "zxcv", "1234", "qaz", "wsx", "edc", "rfv",
    "tgb", "yhn", "ujm",
];

/// Common Vietnamese words, accented and unaccented, used for the
/// language-content ratio
const VIETNAMESE_WORDS: &[&str] = &[
    // function words
    "va", "ma", "la", "duoc", "khong", "co", "nguoi", "di", "den", "tu", "trong", "tren", "duoi",
    "sang", "phai", "trai", "len", "xuong", "nhu", "neu", "thi", "hay", "hoac", "luc", "khi",
    "sau", "truoc", "và", "mà", "là", "được", "không", "có", "người", "đi", "đến", "từ", "như",
    "nếu", "thì", "lúc", "phải", "trái", "lên", "xuống", "trên", "dưới",
    // common verbs and adjectives
    "lam", "an", "uong", "ve", "noi", "nghe", "thay", "biet", "muon", "can", "nen", "tot", "xau",
    "dep", "hai", "vui", "buon", "lon", "nho", "cao", "thap", "nhanh", "cham", "dung", "sai",
    "làm", "ăn", "uống", "về", "nói", "nghe", "thấy", "biết", "muốn", "cần", "nên", "tốt", "xấu",
    "đẹp", "vui", "buồn", "lớn", "nhỏ", "cao", "thấp",
    // common nouns
    "nha", "truong", "cong", "xe", "duong", "con", "me", "bo", "anh", "chi", "em", "ban", "hang",
    "tien", "gia", "mua", "nhà", "trường", "đường", "mẹ", "bố", "chị", "bạn", "hàng", "tiền",
    "giá", "sản", "phẩm", "dịch", "vụ",
    // pronouns and deixis
    "rat", "rất", "cung", "cũng", "day", "đây", "do", "đó", "nay", "này", "kia", "no", "nó", "ta",
    "minh", "mình", "toi", "tôi", "ho", "họ", "ong", "ông",
    // question words
    "gi", "gì", "ai", "sao", "đâu", "dau", "nào", "nao",
];

/// Outcome of input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Input is acceptable
    Valid,

    /// Input is processable but suspect; the warning should reach the user
    ValidWithWarning(String),

    /// Input is rejected outright
    Invalid(String),
}

impl Validity {
    /// True unless the input was rejected
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Validity::Invalid(_))
    }
}

/// Heuristic input quality gate. Construct once, reuse freely.
pub struct InputValidator {
    keyboard: AhoCorasick,
    vietnamese_words: HashSet<&'static str>,
}

impl InputValidator {
    /// Create a validator with the built-in heuristics
    pub fn new() -> Self {
        Self {
            // literal patterns known to compile
            keyboard: AhoCorasick::new(KEYBOARD_PATTERNS).unwrap(),
            vietnamese_words: VIETNAMESE_WORDS.iter().copied().collect(),
        }
    }

    /// Validate raw input text
    pub fn validate(&self, text: &str) -> Validity {
        let text = text.trim();
        if text.is_empty() {
            return Validity::Invalid("vui lòng nhập văn bản".to_string());
        }

        let char_count = text.chars().count();
        if char_count < MIN_CHARS {
            return Validity::Invalid(format!(
                "văn bản quá ngắn, cần ít nhất {MIN_CHARS} ký tự"
            ));
        }
        if char_count > MAX_CHARS {
            return Validity::Invalid(format!(
                "văn bản quá dài, tối đa {MAX_CHARS} ký tự"
            ));
        }

        let meaningful = text
            .chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | ',' | ';' | '!' | '?' | '\''))
            .count();
        if (meaningful as f32) / (char_count as f32) < MIN_MEANINGFUL_RATIO {
            return Validity::Invalid("văn bản chứa quá nhiều ký tự đặc biệt".to_string());
        }

        if longest_char_run(text) >= MASH_RUN {
            return Validity::Invalid("phát hiện ký tự lặp lại bất thường".to_string());
        }

        let lower = text.to_lowercase();
        if longest_consonant_streak(&lower) > MAX_CONSONANT_STREAK {
            return Validity::Invalid("văn bản có vẻ là spam".to_string());
        }

        let keyboard_hits: HashSet<usize> = self
            .keyboard
            .find_iter(&lower)
            .map(|m| m.pattern().as_usize())
            .collect();
        if keyboard_hits.len() >= MAX_KEYBOARD_HITS {
            return Validity::Invalid("phát hiện chuỗi phím spam".to_string());
        }

        if char_count > VIETNAMESE_CHECK_MIN_CHARS && !self.looks_vietnamese(&lower) {
            return Validity::ValidWithWarning(
                "không chắc chắn đây là tiếng Việt, kết quả có thể không chính xác".to_string(),
            );
        }

        Validity::Valid
    }

    /// Ratio of recognizably Vietnamese words over all words
    fn looks_vietnamese(&self, lower: &str) -> bool {
        let words: Vec<&str> = lower.split_whitespace().collect();
        if words.is_empty() {
            return false;
        }
        let hits = words
            .iter()
            .filter(|w| {
                let clean: String = w.chars().filter(|c| c.is_alphanumeric()).collect();
                self.vietnamese_words.contains(clean.as_str())
            })
            .count();
        (hits as f32) / (words.len() as f32) >= MIN_VIETNAMESE_RATIO
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn longest_char_run(text: &str) -> usize {
    let mut longest = 0usize;
    let mut run = 0usize;
    let mut last: Option<char> = None;
    for c in text.chars() {
        if Some(c) == last {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        longest = longest.max(run);
    }
    longest
}

fn longest_consonant_streak(lower: &str) -> usize {
    let mut longest = 0usize;
    let mut run = 0usize;
    for c in lower.chars() {
        if c.is_alphabetic() && !is_vowel_or_modified(c) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Vowels including all Vietnamese diacritic forms
fn is_vowel_or_modified(c: char) -> bool {
    // đ is the only Vietnamese consonant with a diacritic; every other
    // non-ASCII letter in Vietnamese orthography is a vowel form
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y') || (!c.is_ascii() && c != 'đ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_vietnamese() {
        let validator = InputValidator::new();
        assert_eq!(
            validator.validate("sản phẩm này rất tốt, tôi hài lòng"),
            Validity::Valid
        );
    }

    #[test]
    fn test_rejects_empty_and_short() {
        let validator = InputValidator::new();
        assert!(!validator.validate("").is_acceptable());
        assert!(!validator.validate("   ").is_acceptable());
        assert!(!validator.validate("ab").is_acceptable());
    }

    #[test]
    fn test_rejects_too_long() {
        let validator = InputValidator::new();
        let long = "tốt ".repeat(200);
        assert!(!validator.validate(&long).is_acceptable());
    }

    #[test]
    fn test_rejects_symbol_soup() {
        let validator = InputValidator::new();
        assert!(!validator.validate("@#$%^&*()_+@#$%^&*() ab").is_acceptable());
    }

    #[test]
    fn test_rejects_keyboard_mash() {
        let validator = InputValidator::new();
        assert!(!validator.validate("aaaaaaa tốt").is_acceptable());
        assert!(!validator.validate("qwer asdf zxcv").is_acceptable());
        assert!(!validator.validate("xyzxkcbnsdfghjkl").is_acceptable());
    }

    #[test]
    fn test_warns_on_non_vietnamese() {
        let validator = InputValidator::new();
        let result = validator.validate("the weather is nice today");
        assert!(matches!(result, Validity::ValidWithWarning(_)));
        assert!(result.is_acceptable());
    }

    #[test]
    fn test_unaccented_vietnamese_passes_without_warning() {
        let validator = InputValidator::new();
        assert_eq!(
            validator.validate("san pham nay rat tot toi rat hai long"),
            Validity::Valid
        );
    }
}
