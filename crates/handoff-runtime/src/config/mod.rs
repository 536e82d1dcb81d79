//! Configuration module for the handoff runtime.
//!
//! Layered loading (defaults, files, environment, overrides) through figment,
//! followed by validation of logging settings and the route table.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    HandoffConfig, LogFormat, LogLevel, LogOutput, LoggingConfig, RouteConfig, SpanEventConfig,
};
pub use validation::validate_config;
