//! Lexicon engine configuration
//!
//! All lexicon content is configuration data, not algorithmic logic: the
//! engine is constructed from an immutable [`LexiconConfig`] value, so
//! multiple independently configured engines can coexist in one process
//! and tests can use scoped-down lexicons.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use vietsent_core::{Error, Result};

use crate::lexicon;

/// Maximum phrase length in the lexicon, in whitespace-separated tokens
pub const MAX_PHRASE_TOKENS: usize = 5;

/// Valid score range for lexicon entries
pub const SCORE_MIN: f32 = -5.0;
pub const SCORE_MAX: f32 = 5.0;

/// Immutable configuration for a [`crate::LexiconEngine`].
///
/// Every field defaults to the built-in Vietnamese tables, so a YAML
/// override only needs to name the parts it replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Phrase table: normalized phrase (1-5 tokens, lower-cased,
    /// diacritic-sensitive) to signed score in [-5, 5]
    #[serde(default = "lexicon::entries")]
    pub entries: HashMap<String, f32>,

    /// Negation tokens; each opens a 3-token sign-flipping scope
    #[serde(default = "lexicon::negations")]
    pub negations: HashSet<String>,

    /// Intensifier/diminisher tokens and their multipliers
    #[serde(default = "lexicon::intensifiers")]
    pub intensifiers: HashMap<String, f32>,

    /// Single-token neutral indicators, counted per token
    #[serde(default = "lexicon::neutral_tokens")]
    pub neutral_tokens: HashSet<String>,

    /// Multi-word neutral phrases, substring-checked
    #[serde(default = "lexicon::neutral_phrases")]
    pub neutral_phrases: Vec<String>,

    /// Contrastive connectors splitting pre/post clauses
    #[serde(default = "lexicon::connectors")]
    pub connectors: Vec<String>,

    /// Sarcasm indicator phrases
    #[serde(default = "lexicon::sarcasm_indicators")]
    pub sarcasm_indicators: Vec<String>,

    /// Interrogative patterns triggering the question veto
    #[serde(default = "lexicon::interrogatives")]
    pub interrogatives: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            entries: lexicon::entries(),
            negations: lexicon::negations(),
            intensifiers: lexicon::intensifiers(),
            neutral_tokens: lexicon::neutral_tokens(),
            neutral_phrases: lexicon::neutral_phrases(),
            connectors: lexicon::connectors(),
            sarcasm_indicators: lexicon::sarcasm_indicators(),
            interrogatives: lexicon::interrogatives(),
        }
    }
}

impl LexiconConfig {
    /// An empty configuration, useful as a base for test lexicons
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            negations: HashSet::new(),
            intensifiers: HashMap::new(),
            neutral_tokens: HashSet::new(),
            neutral_phrases: Vec::new(),
            connectors: Vec::new(),
            sarcasm_indicators: Vec::new(),
            interrogatives: Vec::new(),
        }
    }

    /// Load a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Validate the configuration. Malformed entries fail here, at
    /// construction, never at scoring time.
    pub fn validate(&self) -> Result<()> {
        for (phrase, score) in &self.entries {
            if phrase.trim().is_empty() {
                return Err(Error::config("empty lexicon phrase"));
            }
            let token_count = phrase.split_whitespace().count();
            if token_count > MAX_PHRASE_TOKENS {
                return Err(Error::config(format!(
                    "lexicon phrase '{phrase}' has {token_count} tokens (max {MAX_PHRASE_TOKENS})"
                )));
            }
            if !score.is_finite() || *score < SCORE_MIN || *score > SCORE_MAX {
                return Err(Error::config(format!(
                    "lexicon phrase '{phrase}' has out-of-range score {score}"
                )));
            }
        }

        for (token, multiplier) in &self.intensifiers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(Error::config(format!(
                    "intensifier '{token}' has non-positive multiplier {multiplier}"
                )));
            }
        }

        for negation in &self.negations {
            if negation.split_whitespace().count() != 1 {
                return Err(Error::config(format!(
                    "negation '{negation}' must be a single token"
                )));
            }
        }

        Ok(())
    }
}
