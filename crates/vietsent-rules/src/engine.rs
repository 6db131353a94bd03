//! Lexicon-based sentiment scoring engine
//!
//! A single left-to-right pass over whitespace tokens with greedy
//! longest-match phrase lookup, negation scope tracking, and intensifier
//! multipliers, followed by mixed-sentiment neutralization, neutral-context
//! dampening, and sarcasm reversal. All state lives in the immutable
//! configuration; scoring is a pure function of the input text.

use aho_corasick::AhoCorasick;
use std::collections::HashMap;
use tracing::debug;

use vietsent_core::{Error, Result, RuleSignal, Sentiment};

use crate::config::{LexiconConfig, MAX_PHRASE_TOKENS};

/// Polarity threshold for hit counting: entries with |score| below this are
/// mild/neutral-leaning and neither count toward mixed detection nor veto
/// the neutral-context classification. The mixed-detection symmetry
/// heuristic assumes hits at this threshold are genuinely polar; lowering
/// it makes hedges like "ổn" (0.5) read as sentiment and turns hedged
/// text mixed.
const POLAR_HIT_MIN: f32 = 1.0;

/// Tokens covered by a freshly opened negation scope
const NEGATION_SCOPE: i32 = 3;

/// Neutral-indicator token count that marks a neutral register
const NEUTRAL_TOKEN_MIN: usize = 2;

/// Token count above which a sentence reads as long/descriptive
const LONG_SENTENCE_TOKENS: usize = 12;

/// The rule-based sentiment scorer.
///
/// Construct once, share read-only across threads; every operation is a
/// pure function over the input text.
pub struct LexiconEngine {
    config: LexiconConfig,
    /// First token of a phrase -> longest phrase token count starting with
    /// it. Caps the match window so the scan never joins keys that cannot
    /// exist in the table.
    max_window: HashMap<String, usize>,
    /// Connectors ordered by descending length so a short connector never
    /// matches inside a longer one
    connectors_desc: Vec<String>,
    sarcasm: AhoCorasick,
    interrogative: AhoCorasick,
    neutral_phrase: AhoCorasick,
}

impl LexiconEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: LexiconConfig) -> Result<Self> {
        config.validate()?;

        let mut max_window: HashMap<String, usize> = HashMap::new();
        for phrase in config.entries.keys() {
            let mut tokens = phrase.split_whitespace();
            let first = match tokens.next() {
                Some(t) => t.to_string(),
                None => continue,
            };
            let len = 1 + tokens.count();
            let entry = max_window.entry(first).or_insert(0);
            *entry = (*entry).max(len);
        }

        let mut connectors_desc = config.connectors.clone();
        connectors_desc.sort_by_key(|c| std::cmp::Reverse(c.len()));

        let sarcasm = build_matcher(&config.sarcasm_indicators)?;
        let interrogative = build_matcher(&config.interrogatives)?;
        let neutral_phrase = build_matcher(&config.neutral_phrases)?;

        Ok(Self {
            config,
            max_window,
            connectors_desc,
            sarcasm,
            interrogative,
            neutral_phrase,
        })
    }

    /// Create an engine with the built-in Vietnamese lexicon
    pub fn with_defaults() -> Result<Self> {
        Self::new(LexiconConfig::default())
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Compute the rule-based sentiment score for normalized text.
    ///
    /// Questions score 0.0 unconditionally. Mixed-sentiment texts collapse
    /// to the post-contrastive clause score when one dominates, else to
    /// 0.0. Neutral-register texts have their score dampened. A sarcasm
    /// flag reverses the sign of a non-zero result.
    pub fn score(&self, text: &str) -> f32 {
        let lower = text.to_lowercase();
        if lower.contains('?') || self.interrogative.is_match(&lower) {
            return 0.0;
        }

        let tokens: Vec<&str> = lower.split_whitespace().collect();
        if tokens.is_empty() {
            return 0.0;
        }

        let sarcasm = self.sarcasm.is_match(&lower)
            && tokens.iter().any(|t| self.config.negations.contains(*t));

        let mut total = self.scan(&tokens);

        if self.mixed_from_tokens(&tokens) {
            let post = self.post_contrast_clause_score(text);
            if post.abs() >= 1.0 {
                debug!(post, "mixed sentiment, contrastive clause dominates");
                return post;
            }
            debug!("mixed sentiment without dominant clause, neutralized");
            return 0.0;
        }

        if self.neutral_from_tokens(&lower, &tokens) {
            let factor = if total.abs() <= 2.0 {
                0.1
            } else if total.abs() <= 4.0 {
                0.3
            } else {
                0.5
            };
            total *= factor;
        }

        if sarcasm && total != 0.0 {
            total = -total;
        }

        total
    }

    /// True when both positive and negative lexicon evidence co-occur.
    ///
    /// Conservative symmetry heuristic: both polarities must have at least
    /// one hit, and either the counts differ by at most one or one side
    /// has two or more hits.
    pub fn detect_mixed(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        self.mixed_from_tokens(&tokens)
    }

    /// True when the text reads as a neutral/factual register: enough
    /// neutral indicators, a neutral phrase, a question mark, or sheer
    /// length — and no real sentiment words to veto the classification.
    pub fn is_neutral_context(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        self.neutral_from_tokens(&lower, &tokens)
    }

    /// Score of the clause after the longest contrastive connector present,
    /// or 0.0 when no connector is found.
    pub fn post_contrast_clause_score(&self, text: &str) -> f32 {
        let lower = text.to_lowercase();
        for connector in &self.connectors_desc {
            if let Some(at) = lower.find(connector.as_str()) {
                let clause = &lower[at + connector.len()..];
                let tokens: Vec<&str> = clause.split_whitespace().collect();
                return self.scan(&tokens);
            }
        }
        0.0
    }

    /// Map a score to its label
    pub fn label_of(&self, score: f32) -> Sentiment {
        Sentiment::from_score(score)
    }

    /// Full rule signal for fusion: score plus the two context flags
    pub fn signal(&self, text: &str) -> RuleSignal {
        RuleSignal {
            score: self.score(text),
            mixed: self.detect_mixed(text),
            neutral_context: self.is_neutral_context(text),
        }
    }

    /// Single left-to-right scoring pass: intensifier capture, greedy
    /// longest-match lookup, negation scope tracking.
    fn scan(&self, tokens: &[&str]) -> f32 {
        let mut total = 0.0f32;
        let mut negation_scope: i32 = 0;
        let mut i = 0usize;

        while i < tokens.len() {
            let mut multiplier = 1.0f32;

            // Intensifier lookup, longest window first so "cực kỳ" wins
            // over any single-token entry. The intensifier is consumed
            // only when a token remains for it to act on.
            let max_len = 2.min(tokens.len() - i);
            for len in (1..=max_len).rev() {
                if i + len >= tokens.len() {
                    continue;
                }
                let key = tokens[i..i + len].join(" ");
                if let Some(&m) = self.config.intensifiers.get(&key) {
                    multiplier = m;
                    i += len;
                    break;
                }
            }

            match self.longest_match(tokens, i) {
                Some((score, len)) => {
                    let mut score = score;
                    let negated = negation_scope > 0 && !self.negation_prefixed(&tokens[i..i + len]);
                    if negated {
                        score = -score;
                        negation_scope -= len as i32;
                    } else {
                        negation_scope = (negation_scope - len as i32).max(0);
                    }
                    total += score * multiplier;
                    i += len;
                }
                None => {
                    if self.config.negations.contains(tokens[i]) {
                        // A new negation overwrites any open scope
                        negation_scope = NEGATION_SCOPE;
                    }
                    i += 1;
                }
            }
        }

        total
    }

    /// Greedy longest-match phrase lookup at token position `i`
    fn longest_match(&self, tokens: &[&str], i: usize) -> Option<(f32, usize)> {
        let cap = self
            .max_window
            .get(tokens[i])
            .copied()
            .unwrap_or(0)
            .min(tokens.len() - i)
            .min(MAX_PHRASE_TOKENS);
        for len in (1..=cap).rev() {
            let key = tokens[i..i + len].join(" ");
            if let Some(&score) = self.config.entries.get(&key) {
                return Some((score, len));
            }
        }
        None
    }

    /// A matched phrase that itself starts with a negation token already
    /// encodes its own polarity and must not be flipped again
    fn negation_prefixed(&self, phrase: &[&str]) -> bool {
        phrase.len() > 1 && self.config.negations.contains(phrase[0])
    }

    /// Count polar lexicon hits with the same greedy longest-match order
    /// as the scoring pass, ignoring negation and intensifier state
    fn polarity_hits(&self, tokens: &[&str]) -> (usize, usize) {
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut i = 0usize;
        while i < tokens.len() {
            match self.longest_match(tokens, i) {
                Some((score, len)) => {
                    if score >= POLAR_HIT_MIN {
                        positive += 1;
                    } else if score <= -POLAR_HIT_MIN {
                        negative += 1;
                    }
                    i += len;
                }
                None => i += 1,
            }
        }
        (positive, negative)
    }

    fn mixed_from_tokens(&self, tokens: &[&str]) -> bool {
        let (positive, negative) = self.polarity_hits(tokens);
        if positive == 0 || negative == 0 {
            return false;
        }
        positive.abs_diff(negative) <= 1
            || (positive >= 2 && negative >= 1)
            || (negative >= 2 && positive >= 1)
    }

    fn neutral_from_tokens(&self, lower: &str, tokens: &[&str]) -> bool {
        let (positive, negative) = self.polarity_hits(tokens);
        if positive > 0 || negative > 0 {
            // Real sentiment words veto the neutral register
            return false;
        }

        let neutral_count = tokens
            .iter()
            .filter(|t| self.config.neutral_tokens.contains(**t))
            .count();

        neutral_count >= NEUTRAL_TOKEN_MIN
            || self.neutral_phrase.is_match(lower)
            || lower.contains('?')
            || tokens.len() > LONG_SENTENCE_TOKENS
    }
}

fn build_matcher(needles: &[String]) -> Result<AhoCorasick> {
    let lowered: Vec<String> = needles.iter().map(|n| n.to_lowercase()).collect();
    AhoCorasick::new(&lowered)
        .map_err(|e| Error::config(format!("failed to build phrase matcher: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_engine() -> LexiconEngine {
        LexiconEngine::with_defaults().unwrap()
    }

    /// Tiny lexicon for isolating single mechanisms
    fn small_engine() -> LexiconEngine {
        let mut config = LexiconConfig::empty();
        config.entries.insert("đẹp".to_string(), 3.0);
        config.entries.insert("tệ".to_string(), -4.0);
        config.entries.insert("không tốt".to_string(), -2.0);
        config.negations.insert("không".to_string());
        config.negations.insert("chẳng".to_string());
        config.intensifiers.insert("rất".to_string(), 1.5);
        config.intensifiers.insert("cực kỳ".to_string(), 2.0);
        LexiconEngine::new(config).unwrap()
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let engine = default_engine();
        assert_eq!(engine.score(""), 0.0);
        assert_eq!(engine.score("   \t  "), 0.0);
    }

    #[test]
    fn test_question_veto() {
        let engine = default_engine();
        assert_eq!(engine.score("Sản phẩm này tốt không?"), 0.0);
        assert_eq!(engine.score("có phải dịch vụ này tệ"), 0.0);
        assert_eq!(engine.score("bạn nghĩ thế nào về món này"), 0.0);
    }

    #[test]
    fn test_longest_match_priority() {
        let engine = default_engine();
        // "tuyệt vời" must match as one 5-point phrase, not as "tuyệt"
        // followed by an unmatched token
        assert_eq!(engine.score("tuyệt vời"), 5.0);
        // the longer negated variant out-ranks its positive prefix
        assert_eq!(engine.score("cơ hội phát triển ít"), -3.0);
        assert_eq!(engine.score("cơ hội phát triển"), 3.0);
    }

    #[test]
    fn test_negation_flip() {
        let engine = small_engine();
        let plain = engine.score("đẹp");
        let negated = engine.score("không đẹp");
        assert_eq!(plain, 3.0);
        assert_eq!(negated, -3.0);
    }

    #[test]
    fn test_negation_scope_survives_unmatched_tokens() {
        let engine = small_engine();
        // scope only shrinks as matches consume it
        assert_eq!(engine.score("không cái này đẹp"), -3.0);
    }

    #[test]
    fn test_negation_prefixed_phrase_not_reflipped() {
        let engine = small_engine();
        // "không tốt" already carries its negation; an open scope from
        // "chẳng" must not flip it back to positive
        assert_eq!(engine.score("chẳng không tốt"), -2.0);
    }

    #[test]
    fn test_intensifier_multiplier() {
        let engine = small_engine();
        assert_eq!(engine.score("rất đẹp"), 4.5);
        assert_eq!(engine.score("cực kỳ đẹp"), 6.0);
        // trailing intensifier has nothing to act on
        assert_eq!(engine.score("đẹp rất"), 3.0);
    }

    #[test]
    fn test_intensifier_with_negation() {
        let engine = small_engine();
        // intensifier applies to the flipped score
        assert_eq!(engine.score("không rất đẹp"), -4.5);
    }

    #[test]
    fn test_mixed_sentiment_neutralization() {
        let engine = default_engine();
        assert!(engine.detect_mixed("Rất hài lòng và bất mãn"));
        assert_eq!(engine.score("Rất hài lòng và bất mãn"), 0.0);
    }

    #[test]
    fn test_single_polarity_is_not_mixed() {
        let engine = default_engine();
        assert!(!engine.detect_mixed("hôm nay rất vui"));
        assert!(!engine.detect_mixed("dịch vụ bình thường"));
    }

    #[test]
    fn test_contrastive_clause_dominates() {
        let engine = default_engine();
        let text = "Sản phẩm rất tốt nhưng tồi tệ";
        assert!(engine.post_contrast_clause_score(text) < 0.0);
        assert!(engine.score(text) < 0.0);
    }

    #[test]
    fn test_post_contrast_without_connector() {
        let engine = default_engine();
        assert_eq!(engine.post_contrast_clause_score("hài lòng"), 0.0);
    }

    #[test]
    fn test_neutral_context_dampening() {
        let engine = default_engine();
        // mild fractional entries do not veto the neutral register, so
        // the descriptive-noun phrase check dampens the weak score
        let text = "dịch vụ được";
        assert!(engine.is_neutral_context(text));
        let score = engine.score(text);
        assert!(score.abs() < 0.1, "expected dampened score, got {score}");
    }

    #[test]
    fn test_neutral_context_vetoed_by_sentiment() {
        let engine = default_engine();
        // "tuyệt vời" is a real sentiment hit: no neutral dampening even
        // though "sản phẩm" is a neutral phrase
        assert!(!engine.is_neutral_context("sản phẩm tuyệt vời"));
        assert_eq!(engine.score("sản phẩm tuyệt vời"), 5.0);
    }

    #[test]
    fn test_sarcasm_reversal() {
        let mut config = LexiconConfig::empty();
        config.entries.insert("tuyệt vời".to_string(), 5.0);
        config.negations.insert("chẳng".to_string());
        config.sarcasm_indicators.push("tuyệt vời".to_string());
        let engine = LexiconEngine::new(config).unwrap();

        // exaggerated praise plus a negation elsewhere reads ironic
        assert_eq!(engine.score("tuyệt vời mà chẳng ai mua"), -5.0);
        // without the negation, no reversal
        assert_eq!(engine.score("tuyệt vời"), 5.0);
    }

    #[test]
    fn test_label_of() {
        let engine = default_engine();
        assert_eq!(engine.label_of(2.5), Sentiment::Positive);
        assert_eq!(engine.label_of(-0.5), Sentiment::Negative);
        assert_eq!(engine.label_of(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_signal_consistency() {
        let engine = default_engine();
        let text = "Rất hài lòng và bất mãn";
        let signal = engine.signal(text);
        assert_eq!(signal.score, engine.score(text));
        assert_eq!(signal.mixed, engine.detect_mixed(text));
        assert_eq!(signal.neutral_context, engine.is_neutral_context(text));
    }

    #[test]
    fn test_unaccented_variants_match() {
        let engine = default_engine();
        assert!(engine.score("tuyet voi") > 0.0);
        assert!(engine.score("toi te") < 0.0);
    }

    proptest! {
        #[test]
        fn prop_score_is_deterministic(text in "\\PC{0,60}") {
            let engine = default_engine();
            prop_assert_eq!(engine.score(&text), engine.score(&text));
        }

        #[test]
        fn prop_question_always_neutral(text in "\\PC{0,40}") {
            let engine = default_engine();
            let with_question = format!("{text}?");
            prop_assert_eq!(engine.score(&with_question), 0.0);
        }

        #[test]
        fn prop_label_partitions_scores(score in -10.0f32..10.0) {
            let engine = default_engine();
            let label = engine.label_of(score);
            let expected = if score > 0.0 {
                Sentiment::Positive
            } else if score < 0.0 {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            prop_assert_eq!(label, expected);
        }
    }
}
