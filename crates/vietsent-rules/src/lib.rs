//! Vietsent Rules
//!
//! Lexicon-and-heuristics sentiment scorer for short Vietnamese text.
//!
//! The engine scans normalized text against a curated phrase lexicon with
//! greedy longest-match semantics, tracks negation scopes and intensifier
//! multipliers, detects mixed/contrastive sentiment and neutral registers,
//! and reverses sarcastic praise. Output is a single signed score plus the
//! `mixed` and `neutral_context` flags consumed by the fusion arbiter.

pub mod config;
pub mod engine;
mod lexicon;

pub use config::{LexiconConfig, MAX_PHRASE_TOKENS, SCORE_MAX, SCORE_MIN};
pub use engine::LexiconEngine;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::LexiconConfig;
    pub use crate::engine::LexiconEngine;
}
