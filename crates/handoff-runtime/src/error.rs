//! Runtime error types.

use handoff_core::ChainError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while setting up a chain from configuration.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The route table could not be linked into a chain.
    #[error("Failed to build chain: {0}")]
    Chain(#[from] ChainError),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
