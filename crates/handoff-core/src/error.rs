//! Error types for chain construction.
//!
//! Only structural misuse is an error. A request that no handler claims is a
//! normal outcome and is reported as `None` by dispatch, never through
//! [`ChainError`].

use thiserror::Error;

/// Errors raised while assembling a [`HandlerChain`](crate::HandlerChain).
///
/// Every variant is detected by `append` and leaves the chain untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The chain was sealed and no longer accepts links.
    #[error("chain is sealed, no further handlers can be appended")]
    Sealed,

    /// A link with the same name is already part of the chain.
    #[error("a handler named '{0}' is already linked")]
    DuplicateName(String),
}

/// Result type for chain construction.
pub type ChainResult<T> = Result<T, ChainError>;
