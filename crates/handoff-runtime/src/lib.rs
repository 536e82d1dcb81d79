//! Handoff Runtime - configuration and logging around handler chains.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`, `HandoffConfig`)
//! - Logging setup on `tracing-subscriber` (`LoggingBuilder`, `SpanEvents`)
//! - Route tables that turn configuration into a `HandlerChain<str, String>`
//!
//! ```ignore
//! use handoff_runtime::{ConfigLoader, logging, routes};
//!
//! let config = ConfigLoader::new().file("handoff.toml").load()?;
//! logging::init_from_config(&config.logging);
//!
//! let chain = routes::chain_from_config(&config)?;
//! match chain.dispatch("Ferrari") {
//!     Some(reply) => println!("{reply}"),
//!     None => println!("nobody sells that"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

// Re-exports
pub use config::{
    ConfigError, ConfigLoader, ConfigResult, HandoffConfig, LogLevel, LoggingConfig, RouteConfig,
};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LoggingBuilder, SpanEvents};
pub use routes::{build_chain, chain_from_config};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// Provides the commonly used logging macros and `Level`.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
