//! Error types for document analysis.
//!
//! Empty or unstructured text is never an error: every operation returns an
//! empty collection instead. Errors are reserved for parameters that would
//! make an operation meaningless (a chunk window that never advances) and for
//! configuration or export failures at the edges.

use thiserror::Error;

/// Errors that can occur while configuring or running an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A parameter is out of range, e.g. a chunk overlap that is not smaller
    /// than the chunk size.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// A chunking method name that is not one of `words`, `sentences`, `paragraphs`.
    #[error("unknown chunking method: {0:?}")]
    UnknownMethod(String),

    /// A summary length name that is not one of `short`, `medium`, `long`.
    #[error("unknown summary length: {0:?}")]
    UnknownLength(String),

    /// Error reading or parsing a configuration file.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },

    /// Error serializing an analysis for export.
    #[error("failed to serialize analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AnalysisError {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
