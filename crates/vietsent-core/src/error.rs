//! Error types for Vietsent

/// Result type alias using Vietsent's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Vietsent operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors (malformed lexicon entries, bad thresholds)
    #[error("configuration error: {0}")]
    Config(String),

    /// Statistical model errors (model unavailable, inference failure)
    #[error("model error: {0}")]
    Model(String),

    /// Caller contract violations (e.g. confidence outside [0, 1])
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input rejected by the quality gate
    #[error("rejected input: {0}")]
    RejectedInput(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new rejected-input error
    pub fn rejected_input(msg: impl Into<String>) -> Self {
        Self::RejectedInput(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
