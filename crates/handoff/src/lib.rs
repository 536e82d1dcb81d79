//! # Handoff
//!
//! Ordered, first-match-wins handler chains.
//!
//! ## Overview
//!
//! A request is offered to each handler of a chain in turn. The first handler
//! that claims it produces the result; if none does, the request is
//! unhandled and the caller decides what happens next.
//!
//! ```text
//! request ──▶ [ mercedes ] ──▶ [ rolls-royce ] ──▶ [ ferrari ] ──▶ unhandled
//!                  │                  │                  │
//!                  ▼                  ▼                  ▼
//!                reply              reply              reply
//! ```
//!
//! - **Core**: `HandlerChain`, `Link`, link builders, `SharedChain`
//! - **Runtime**: configuration, logging, route tables from config
//!
//! ## Quick Start
//!
//! ```rust
//! use handoff::prelude::*;
//!
//! let chain = HandlerChain::<str, String>::new()
//!     .with(on_eq("Mercedes", |car: &str| format!("{car} sold")).name("mercedes"))?
//!     .with(catch_all(|car: &str| format!("no {car} here")).name("fallback"))?;
//!
//! assert_eq!(chain.dispatch("Mercedes").as_deref(), Some("Mercedes sold"));
//! assert_eq!(chain.dispatch("Ferrari").as_deref(), Some("no Ferrari here"));
//! # Ok::<(), ChainError>(())
//! ```
//!
//! ## Features
//!
//! - `toml-config` *(default)*: TOML configuration files
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output
//! - `tower`: `tower::Service` implementations for chains

pub use handoff_core as core;
pub use handoff_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use handoff::prelude::*;
/// ```
pub mod prelude {
    // Chain building and dispatch
    pub use handoff_core::{
        ChainError, Handled, Handler, HandlerChain, Link, Routed, SharedChain, catch_all, on_any,
        on_eq, when,
    };

    // Configuration-driven setup
    pub use handoff_runtime::{
        ConfigLoader, HandoffConfig, LoggingBuilder, RuntimeError, chain_from_config,
    };
}
