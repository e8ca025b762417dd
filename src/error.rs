//! Unified error types for item-unify.
//!
//! Only configuration-shape problems are errors in this crate: bad patterns,
//! malformed alias groups, malformed identifiers, unreadable config files.
//! Per-item resolution failures never surface here — the engine's contract is
//! to degrade to "no substitution" instead of failing the caller.

use thiserror::Error;

/// Main error type for item-unify operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnifyError {
    /// Aggregate configuration validation failure
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A category pattern failed to compile
    #[error("Invalid category pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// An alias group fragment is malformed
    #[error("Invalid alias fragment '{fragment}': {message}")]
    Alias { fragment: String, message: String },

    /// A namespace-qualified identifier is malformed
    #[error("Invalid identifier '{value}': {message}")]
    Identifier { value: String, message: String },

    /// IO error reading a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error in a config file
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Convenient Result type for item-unify operations
pub type Result<T> = std::result::Result<T, UnifyError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl UnifyError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a pattern compilation error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an alias fragment error
    pub fn alias(fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alias {
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// Create an identifier error
    pub fn identifier(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Identifier {
            value: value.into(),
            message: message.into(),
        }
    }
}
