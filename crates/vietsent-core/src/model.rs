//! Statistical sentiment model interface
//!
//! The statistical classifier is an external collaborator: the core only
//! sees its (label, confidence) output. Implementations wrap whatever
//! backend is available (a PhoBERT service, a keyword fallback, a mock).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Verdict;

/// Trait for statistical sentiment models
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Classify normalized text into a (label, confidence) verdict.
    ///
    /// Confidence must lie in [0.0, 1.0]. A model that cannot produce a
    /// verdict returns [`crate::Error::Model`]; the caller decides how to
    /// handle the failure before fusion runs.
    async fn classify(&self, text: &str) -> Result<Verdict>;

    /// Get the model name
    fn name(&self) -> &str;
}
