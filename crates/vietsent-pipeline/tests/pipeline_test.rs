//! End-to-end pipeline tests with a scripted model, exercising the
//! validate -> normalize -> estimate -> fuse flow against real lexicon
//! and fusion defaults.

use std::sync::Arc;

use vietsent_core::{Error, Result, Sentiment, SentimentModel, Verdict};
use vietsent_fusion::{FusionArbiter, FusionBranch};
use vietsent_pipeline::SentimentAnalyzer;
use vietsent_rules::LexiconEngine;

/// Model returning one fixed verdict for every input
struct FixedModel {
    verdict: Verdict,
}

impl FixedModel {
    fn new(sentiment: Sentiment, confidence: f32) -> Self {
        Self {
            verdict: Verdict::new(sentiment, confidence),
        }
    }
}

#[async_trait::async_trait]
impl SentimentModel for FixedModel {
    async fn classify(&self, _text: &str) -> Result<Verdict> {
        Ok(self.verdict)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Model that always fails
struct FailingModel;

#[async_trait::async_trait]
impl SentimentModel for FailingModel {
    async fn classify(&self, _text: &str) -> Result<Verdict> {
        Err(Error::model("inference backend unavailable"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn analyzer_with(model: Arc<dyn SentimentModel>) -> SentimentAnalyzer {
    SentimentAnalyzer::new(
        LexiconEngine::with_defaults().unwrap(),
        FusionArbiter::with_defaults().unwrap(),
        model,
    )
}

#[tokio::test]
async fn test_rejects_empty_input() {
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Neutral, 0.5)));
    let err = analyzer.analyze("   ").await.unwrap_err();
    assert!(matches!(err, Error::RejectedInput(_)));
}

#[tokio::test]
async fn test_strong_lexicon_evidence_vetoes_model() {
    // "rất tốt" scores 4.0 * 1.5 = 6.0, far past the veto threshold, so
    // even a confident contradicting model loses
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Negative, 0.7)));
    let analysis = analyzer.analyze("sản phẩm rất tốt").await.unwrap();
    assert_eq!(analysis.branch, FusionBranch::RuleVeto);
    assert_eq!(analysis.verdict.sentiment, Sentiment::Positive);
    assert_eq!(analysis.verdict.confidence, 1.0);
}

#[tokio::test]
async fn test_question_is_forced_neutral() {
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Positive, 0.95)));
    let analysis = analyzer.analyze("sản phẩm này thế nào?").await.unwrap();
    assert_eq!(analysis.branch, FusionBranch::WeakNeutralContext);
    assert_eq!(analysis.verdict.sentiment, Sentiment::Neutral);
    assert_eq!(analysis.rules.score, 0.0);
}

#[tokio::test]
async fn test_confident_model_passes_through_on_silent_lexicon() {
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Positive, 0.9)));
    let analysis = analyzer.analyze("trời nắng nhẹ buổi sáng").await.unwrap();
    assert_eq!(analysis.branch, FusionBranch::HighConfidence);
    assert_eq!(analysis.verdict.sentiment, Sentiment::Positive);
    assert_eq!(analysis.rules.score, 0.0);
}

#[tokio::test]
async fn test_teencode_negation_reaches_the_lexicon() {
    // "ko" expands to "không" before scoring, so the negated phrase
    // "không tốt" lands as a negative lexicon hit
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Positive, 0.9)));
    let analysis = analyzer.analyze("ko tốt đâu").await.unwrap();
    assert_eq!(analysis.normalized, "không tốt đâu");
    assert_eq!(analysis.branch, FusionBranch::RuleVeto);
    assert_eq!(analysis.verdict.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn test_exclamatory_text_keeps_its_lexicon_hits() {
    // "tệ!" must normalize to a bare "tệ" token; the intensified hit
    // (-4.0 * 1.2) then trips the toxicity veto despite the model
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Positive, 0.9)));
    let analysis = analyzer.analyze("dịch vụ quá tệ!").await.unwrap();
    assert_eq!(analysis.normalized, "dịch vụ quá tệ");
    assert!((analysis.rules.score - -4.8).abs() < 1e-6);
    assert_eq!(analysis.branch, FusionBranch::ToxicityVeto);
    assert_eq!(analysis.verdict.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn test_non_vietnamese_input_carries_warning() {
    let analyzer = analyzer_with(Arc::new(FixedModel::new(Sentiment::Neutral, 0.5)));
    let analysis = analyzer.analyze("the weather is nice today").await.unwrap();
    assert!(analysis.warning.is_some());
    assert_eq!(analysis.verdict.sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_model_failure_propagates() {
    let analyzer = analyzer_with(Arc::new(FailingModel));
    let err = analyzer.analyze("sản phẩm rất tốt").await.unwrap_err();
    assert!(matches!(err, Error::Model(_)));
}

#[tokio::test]
async fn test_defaults_run_end_to_end() {
    let analyzer = SentimentAnalyzer::with_defaults().unwrap();
    let analysis = analyzer.analyze("dịch vụ quá tệ, rất thất vọng").await.unwrap();
    assert_eq!(analysis.verdict.sentiment, Sentiment::Negative);
}
