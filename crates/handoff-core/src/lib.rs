//! # Handoff Core
//!
//! Ordered, first-match-wins handler chains.
//!
//! A [`HandlerChain`] holds a sequence of [`Link`]s. Dispatching a request
//! asks each link's [`Handler`] in turn; the first one that returns `Some`
//! wins and the remaining links are never consulted. A request no link
//! claims is *unhandled*, reported as `None` rather than as an error.
//!
//! ```rust
//! use handoff_core::{HandlerChain, on_eq};
//!
//! let sell = |car: &str| format!("{car} store will sell the {car}.");
//!
//! let chain = HandlerChain::<str, String>::new()
//!     .with(on_eq("Mercedes", sell).name("mercedes"))?
//!     .with(on_eq("RollsRoyce", sell).name("rolls-royce"))?
//!     .with(on_eq("Ferrari", sell).name("ferrari"))?;
//!
//! assert_eq!(
//!     chain.dispatch("Ferrari").as_deref(),
//!     Some("Ferrari store will sell the Ferrari."),
//! );
//! assert_eq!(chain.dispatch("Lamborghini"), None);
//! # Ok::<(), handoff_core::ChainError>(())
//! ```
//!
//! ## Features
//!
//! - `tower`: implements `tower::Service` for [`HandlerChain`] and
//!   [`SharedChain`]

pub mod chain;
pub mod error;
pub mod handler;
pub mod link;
pub mod shared;

#[cfg(feature = "tower")]
pub mod service;

pub use chain::{Handled, HandlerChain, Routed};
pub use error::{ChainError, ChainResult};
pub use handler::{BoxedHandler, Handler, into_handler};
pub use link::{Link, catch_all, on_any, on_eq, when};
pub use shared::SharedChain;
