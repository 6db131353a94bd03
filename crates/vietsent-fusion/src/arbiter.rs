//! Conditional fusion arbiter
//!
//! Reconciles the statistical model's (label, confidence) with the lexicon
//! engine's (score, mixed, neutral_context) through a fixed-precedence
//! decision table: special-case vetoes first, then confidence-banded
//! handling of the model, then a weighted blend, then ambiguity fallbacks.
//!
//! The branch order is the crux of the design. It is expressed as an
//! explicit ordered list ([`FusionBranch::ORDER`]) rather than implicit
//! code order, so the precedence itself is a testable artifact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vietsent_core::{Error, Result, RuleSignal, Sentiment, Verdict};

use crate::params::FusionParams;

/// Confidence attached to a mixed-sentiment override
const MIXED_CONFIDENCE: f32 = 0.90;

/// Confidence attached to a weak-signal neutral-context override
const NEUTRAL_CONTEXT_CONFIDENCE: f32 = 0.85;

/// Rule score at or below which the toxicity veto fires
const TOXICITY_VETO_SCORE: f32 = -4.0;

/// Rule-score magnitude under which rule evidence counts as weak
const WEAK_RULE_SCORE: f32 = 1.0;

/// Lower bound of the model's medium-confidence band
const MEDIUM_CONFIDENCE_MIN: f32 = 0.60;

/// Divisor normalizing rule-score magnitude into a confidence
const SCORE_NORMALIZER: f32 = 5.0;

/// One branch of the fusion decision table, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionBranch {
    /// Explicit mixed/contrastive detection overrides everything
    MixedOverride,

    /// Neutral register with weak rule evidence forces NEUTRAL
    WeakNeutralContext,

    /// Very strong negative lexicon evidence (toxicity/profanity) is
    /// trusted unconditionally
    ToxicityVeto,

    /// Any strongly polarized rule score vetoes the model
    RuleVeto,

    /// Medium model confidence with weak rule evidence is unreliable
    MediumConfidenceWeakRule,

    /// A highly confident model verdict passes through
    HighConfidence,

    /// Medium-band conflict resolved by weighted label scoring
    WeightedBlend,

    /// Both signals weak: declared ambiguity
    LowSignal,

    /// Unreachable in practice; returns the model verdict as-is
    Passthrough,
}

impl FusionBranch {
    /// The fixed evaluation order of the decision table
    pub const ORDER: [FusionBranch; 9] = [
        FusionBranch::MixedOverride,
        FusionBranch::WeakNeutralContext,
        FusionBranch::ToxicityVeto,
        FusionBranch::RuleVeto,
        FusionBranch::MediumConfidenceWeakRule,
        FusionBranch::HighConfidence,
        FusionBranch::WeightedBlend,
        FusionBranch::LowSignal,
        FusionBranch::Passthrough,
    ];

    /// Evaluate this branch; `Some` when the guard matches
    fn apply(&self, params: &FusionParams, model: Verdict, rule: RuleSignal) -> Option<Verdict> {
        let magnitude = rule.score.abs();
        match self {
            FusionBranch::MixedOverride => rule
                .mixed
                .then(|| Verdict::new(Sentiment::Neutral, MIXED_CONFIDENCE)),

            FusionBranch::WeakNeutralContext => (rule.neutral_context
                && magnitude < WEAK_RULE_SCORE)
                .then(|| Verdict::new(Sentiment::Neutral, NEUTRAL_CONTEXT_CONFIDENCE)),

            FusionBranch::ToxicityVeto => (rule.score <= TOXICITY_VETO_SCORE).then(|| {
                Verdict::new(
                    Sentiment::Negative,
                    (magnitude / SCORE_NORMALIZER).min(1.0),
                )
            }),

            FusionBranch::RuleVeto => (magnitude >= params.theta_rule).then(|| {
                Verdict::new(
                    Sentiment::from_score(rule.score),
                    (magnitude / SCORE_NORMALIZER).min(1.0),
                )
            }),

            FusionBranch::MediumConfidenceWeakRule => (magnitude < WEAK_RULE_SCORE
                && (MEDIUM_CONFIDENCE_MIN..params.t_high).contains(&model.confidence))
                .then(|| Verdict::new(Sentiment::Neutral, 0.7)),

            FusionBranch::HighConfidence => (model.confidence >= params.t_high).then_some(model),

            FusionBranch::WeightedBlend => ((params.t_low..params.t_high)
                .contains(&model.confidence))
            .then(|| blend(params, model, rule)),

            FusionBranch::LowSignal => (model.confidence < params.t_low
                && magnitude < params.theta_rule)
                .then(|| Verdict::new(Sentiment::Neutral, 0.5)),

            FusionBranch::Passthrough => Some(model),
        }
    }
}

/// Weighted blend over candidate labels.
///
/// The model's confidence mass for non-predicted labels is approximated as
/// `(1 - confidence) / 2`. This is a tuning heuristic, not a probability
/// split: the thresholds were calibrated against this exact formula, so it
/// must not be "fixed" to sum to 1. Ties break toward the first maximum in
/// [`Sentiment::ALL`] order.
fn blend(params: &FusionParams, model: Verdict, rule: RuleSignal) -> Verdict {
    let mut best = Sentiment::ALL[0];
    let mut best_score = f32::MIN;

    for candidate in Sentiment::ALL {
        let c_model = if candidate == model.sentiment {
            model.confidence
        } else {
            (1.0 - model.confidence) / 2.0
        };
        let rule_mass = match candidate {
            Sentiment::Positive if rule.score > 0.0 => rule.score.abs(),
            Sentiment::Negative if rule.score < 0.0 => rule.score.abs(),
            _ => 0.0,
        };
        let score = params.w_model * c_model + params.w_rule * rule_mass;
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }

    Verdict::new(best, best_score)
}

/// The fusion arbiter: a pure decision function over both estimators'
/// outputs, parameterized by five immutable scalars.
pub struct FusionArbiter {
    params: FusionParams,
}

impl FusionArbiter {
    /// Create an arbiter from validated parameters
    pub fn new(params: FusionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Create an arbiter with the default parameters
    pub fn with_defaults() -> Result<Self> {
        Self::new(FusionParams::default())
    }

    /// Access the configured parameters
    pub fn params(&self) -> &FusionParams {
        &self.params
    }

    /// Fuse the model verdict with the rule signal into a final verdict
    pub fn fuse(&self, model: Verdict, rule: RuleSignal) -> Result<Verdict> {
        self.decide(model, rule).map(|(verdict, _)| verdict)
    }

    /// Like [`Self::fuse`], additionally reporting which branch decided —
    /// the explainability hook for callers and tests
    pub fn decide(&self, model: Verdict, rule: RuleSignal) -> Result<(Verdict, FusionBranch)> {
        if !(0.0..=1.0).contains(&model.confidence) || !model.confidence.is_finite() {
            return Err(Error::invalid_argument(format!(
                "model confidence {} outside [0, 1]",
                model.confidence
            )));
        }
        if !rule.score.is_finite() {
            return Err(Error::invalid_argument("rule score is not finite"));
        }

        for branch in FusionBranch::ORDER {
            if let Some(verdict) = branch.apply(&self.params, model, rule) {
                debug!(?branch, sentiment = %verdict.sentiment, confidence = verdict.confidence, "fusion decided");
                return Ok((verdict, branch));
            }
        }

        // ORDER ends in Passthrough, which always matches
        unreachable!("fusion decision table is total")
    }
}
