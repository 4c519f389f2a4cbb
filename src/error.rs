//! Error types for hull rock generation

use thiserror::Error;

/// Errors that can occur while configuring or generating a hull rock
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Generation produced no usable geometry
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type alias for hull operations
pub type Result<T> = std::result::Result<T, HullError>;
