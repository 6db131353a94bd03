//! Keyword-count fallback model
//!
//! A lightweight statistical stand-in used when no external model (e.g. a
//! PhoBERT service) is wired in, so the pipeline still produces a
//! (label, confidence) verdict end-to-end. Real models implement
//! [`SentimentModel`] and replace it transparently.

use aho_corasick::AhoCorasick;

use vietsent_core::{Error, Result, Sentiment, SentimentModel, Verdict};

const POSITIVE_KEYWORDS: &[&str] = &[
    "tốt",
    "tuyệt vời",
    "tuyệt",
    "hay",
    "vui",
    "thích",
    "yêu",
    "hài lòng",
    "hoàn hảo",
    "xuất sắc",
    "đẹp",
    "hạnh phúc",
    "tot",
    "tuyet voi",
    "hai long",
    "hoan hao",
    "xuat sac",
    "dep",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "tệ",
    "tồi tệ",
    "xấu",
    "ghét",
    "buồn",
    "thất vọng",
    "chán",
    "khó chịu",
    "khủng khiếp",
    "kinh hoàng",
    "bực",
    "toi te",
    "that vong",
    "kho chiu",
    "khung khiep",
    "kinh hoang",
    "xau",
    "ghet",
];

/// Keyword-count sentiment model
pub struct KeywordSentimentModel {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl KeywordSentimentModel {
    /// Create a model with the built-in keyword lists
    pub fn new() -> Result<Self> {
        Self::with_name("keyword-fallback")
    }

    /// Create a named model with the built-in keyword lists
    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = AhoCorasick::new(POSITIVE_KEYWORDS)
            .map_err(|e| Error::model(format!("failed to build positive matcher: {e}")))?;
        let negative = AhoCorasick::new(NEGATIVE_KEYWORDS)
            .map_err(|e| Error::model(format!("failed to build negative matcher: {e}")))?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl SentimentModel for KeywordSentimentModel {
    async fn classify(&self, text: &str) -> Result<Verdict> {
        let lower = text.to_lowercase();
        let positive_hits = self.positive.find_iter(&lower).count() as f32;
        let negative_hits = self.negative.find_iter(&lower).count() as f32;
        let total = positive_hits + negative_hits;

        if total == 0.0 {
            return Ok(Verdict::new(Sentiment::Neutral, 0.5));
        }

        let positive_ratio = positive_hits / total;
        let verdict = if positive_ratio > 0.5 {
            Verdict::new(Sentiment::Positive, positive_ratio)
        } else if positive_ratio < 0.5 {
            Verdict::new(Sentiment::Negative, 1.0 - positive_ratio)
        } else {
            Verdict::new(Sentiment::Neutral, 0.5)
        };
        Ok(verdict)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_positive_keywords() {
        let model = KeywordSentimentModel::new().unwrap();
        let verdict = model.classify("món này rất tốt và tuyệt vời").await.unwrap();
        assert_eq!(verdict.sentiment, Sentiment::Positive);
        assert!(verdict.confidence > 0.5);
    }

    #[tokio::test]
    async fn test_negative_keywords() {
        let model = KeywordSentimentModel::new().unwrap();
        let verdict = model.classify("dịch vụ tệ, rất thất vọng").await.unwrap();
        assert_eq!(verdict.sentiment, Sentiment::Negative);
        assert!(verdict.confidence > 0.5);
    }

    #[tokio::test]
    async fn test_no_keywords_is_neutral() {
        let model = KeywordSentimentModel::new().unwrap();
        let verdict = model.classify("hôm nay trời nhiều mây").await.unwrap();
        assert_eq!(verdict.sentiment, Sentiment::Neutral);
        assert_eq!(verdict.confidence, 0.5);
    }
}
