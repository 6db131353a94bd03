//! Vietsent Core
//!
//! Core types, traits, and error handling shared across Vietsent components.
//!
//! This crate provides:
//! - The `Sentiment` label type and the (label, confidence) `Verdict`
//! - The `RuleSignal` carried from the lexicon engine into fusion
//! - Error types and result handling
//! - The `SentimentModel` trait abstracting the statistical classifier

pub mod error;
pub mod model;
pub mod types;

pub use error::{Error, Result};
pub use model::SentimentModel;
pub use types::{RuleSignal, Sentiment, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::model::SentimentModel;
    pub use crate::types::{RuleSignal, Sentiment, Verdict};
}
