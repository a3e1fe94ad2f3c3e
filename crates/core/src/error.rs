//! Error types for the iron-filings core.

use thiserror::Error;

/// Errors produced while constructing a simulation or its collaborators.
///
/// Once a [`Simulation`](crate::Simulation) exists, stepping it cannot fail.
#[derive(Debug, Error)]
pub enum SimError {
    /// Width or height was zero, negative, or not finite.
    #[error("invalid dimensions: width and height must be finite and positive")]
    InvalidDimensions,

    /// A magnet or particle count was zero.
    #[error("invalid count for '{name}': must be at least 1")]
    InvalidCount { name: String },

    /// A parameter was outside its allowed range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A tint string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A file could not be written or read.
    #[error("i/o error: {0}")]
    Io(String),
}

impl SimError {
    pub(crate) fn param(name: &str, reason: impl Into<String>) -> Self {
        SimError::InvalidParam {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
