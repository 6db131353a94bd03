//! Vietsent Pipeline
//!
//! Wires the full analysis flow together: input gating, text
//! normalization, the lexicon engine and a pluggable statistical model
//! running side by side, and the fusion arbiter joining their signals
//! into one verdict.
//!
//! ```no_run
//! use vietsent_pipeline::SentimentAnalyzer;
//!
//! # async fn run() -> vietsent_core::Result<()> {
//! let analyzer = SentimentAnalyzer::with_defaults()?;
//! let analysis = analyzer.analyze("sản phẩm rất tốt, tôi hài lòng").await?;
//! println!("{} ({:.2})", analysis.verdict.sentiment, analysis.verdict.confidence);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod model;
pub mod normalize;
pub mod validate;

pub use analyzer::{Analysis, SentimentAnalyzer};
pub use model::KeywordSentimentModel;
pub use normalize::TextNormalizer;
pub use validate::{InputValidator, Validity};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::{Analysis, SentimentAnalyzer};
    pub use crate::model::KeywordSentimentModel;
    pub use crate::normalize::TextNormalizer;
    pub use crate::validate::{InputValidator, Validity};
}
