//! Core types for Vietsent

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sentiment label produced by both estimators and the fused verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Canonical enumeration order. The weighted-blend tie-break in the
    /// fusion arbiter depends on this order, so it is part of the contract.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Map a signed rule score to a label: positive scores are POSITIVE,
    /// negative scores NEGATIVE, and exactly zero is NEUTRAL.
    pub fn from_score(score: f32) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Uppercase wire form of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POSITIVE" | "POS" => Ok(Sentiment::Positive),
            "NEGATIVE" | "NEG" => Ok(Sentiment::Negative),
            "NEUTRAL" | "NEU" => Ok(Sentiment::Neutral),
            other => Err(Error::invalid_argument(format!(
                "unknown sentiment label: {other}"
            ))),
        }
    }
}

/// A (label, confidence) pair — the output of the statistical model and of
/// the fusion arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Sentiment label
    pub sentiment: Sentiment,

    /// Confidence in [0.0, 1.0]
    pub confidence: f32,
}

impl Verdict {
    /// Create a new verdict
    pub fn new(sentiment: Sentiment, confidence: f32) -> Self {
        Self {
            sentiment,
            confidence,
        }
    }
}

/// The lexicon engine's contribution to fusion: a signed score plus the two
/// boolean context flags.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleSignal {
    /// Signed rule score, practically bounded by lexicon extremes
    pub score: f32,

    /// Both positive and negative lexicon evidence co-occur
    pub mixed: bool,

    /// Text reads as a neutral/descriptive register
    pub neutral_context: bool,
}

impl RuleSignal {
    /// Create a rule signal carrying only a score
    pub fn with_score(score: f32) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }
}
