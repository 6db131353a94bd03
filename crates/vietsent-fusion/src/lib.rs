//! Vietsent Fusion
//!
//! Conditional fusion arbiter combining the statistical model's
//! (label, confidence) with the lexicon engine's (score, flags) into one
//! final verdict through a fixed-precedence decision table.

pub mod arbiter;
pub mod params;

pub use arbiter::{FusionArbiter, FusionBranch};
pub use params::FusionParams;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::arbiter::{FusionArbiter, FusionBranch};
    pub use crate::params::FusionParams;
}
