//! End-to-end sentiment analysis pipeline
//!
//! validate -> normalize -> {lexicon engine, statistical model} -> fuse.
//!
//! The two estimators are independent: the model future and the rule scan
//! run side by side and the arbiter joins on both results. The analyzer
//! itself holds no mutable state and can be shared across concurrent
//! requests.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use vietsent_core::{Error, Result, RuleSignal, SentimentModel, Verdict};
use vietsent_fusion::{FusionArbiter, FusionBranch};
use vietsent_rules::LexiconEngine;

use crate::normalize::TextNormalizer;
use crate::validate::{InputValidator, Validity};

/// Full analysis outcome: the fused verdict plus both raw signals, for
/// explainability
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Final fused verdict
    pub verdict: Verdict,

    /// Which fusion branch decided
    pub branch: FusionBranch,

    /// The statistical model's raw verdict
    pub model: Verdict,

    /// The lexicon engine's raw signal
    pub rules: RuleSignal,

    /// Normalized text both estimators saw
    pub normalized: String,

    /// Non-blocking warning from the input gate, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// End-to-end latency in microseconds
    pub latency_us: u64,
}

/// The analysis pipeline
pub struct SentimentAnalyzer {
    normalizer: TextNormalizer,
    validator: InputValidator,
    engine: LexiconEngine,
    arbiter: FusionArbiter,
    model: Arc<dyn SentimentModel>,
}

impl SentimentAnalyzer {
    /// Create an analyzer from its parts
    pub fn new(engine: LexiconEngine, arbiter: FusionArbiter, model: Arc<dyn SentimentModel>) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            validator: InputValidator::new(),
            engine,
            arbiter,
            model,
        }
    }

    /// Create an analyzer with default lexicon, default fusion parameters,
    /// and the keyword fallback model
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            LexiconEngine::with_defaults()?,
            FusionArbiter::with_defaults()?,
            Arc::new(crate::model::KeywordSentimentModel::new()?),
        ))
    }

    /// Analyze raw text: gate, normalize, run both estimators, fuse.
    ///
    /// Rejected input returns [`Error::RejectedInput`]; a model failure
    /// surfaces as [`Error::Model`] since fusion requires both signals.
    pub async fn analyze(&self, raw: &str) -> Result<Analysis> {
        let start = Instant::now();

        let warning = match self.validator.validate(raw) {
            Validity::Invalid(reason) => return Err(Error::rejected_input(reason)),
            Validity::ValidWithWarning(warning) => Some(warning),
            Validity::Valid => None,
        };

        let normalized = self.normalizer.normalize(raw);
        debug!(%normalized, "normalized input");

        let (model_verdict, rules) = futures::join!(self.model.classify(&normalized), async {
            self.engine.signal(&normalized)
        });
        let model_verdict = model_verdict?;
        debug!(
            model = %model_verdict.sentiment,
            model_confidence = model_verdict.confidence,
            rule_score = rules.score,
            mixed = rules.mixed,
            neutral_context = rules.neutral_context,
            "estimators finished"
        );

        let (verdict, branch) = self.arbiter.decide(model_verdict, rules)?;

        Ok(Analysis {
            verdict,
            branch,
            model: model_verdict,
            rules,
            normalized,
            warning,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    /// Access the lexicon engine (e.g. for standalone rule scoring)
    pub fn engine(&self) -> &LexiconEngine {
        &self.engine
    }

    /// Access the fusion arbiter
    pub fn arbiter(&self) -> &FusionArbiter {
        &self.arbiter
    }
}
