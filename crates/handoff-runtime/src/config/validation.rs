//! Configuration validation utilities.

use std::collections::HashSet;

use super::error::{ConfigError, ConfigResult};
use super::schema::{HandoffConfig, LogFormat, LogOutput, LoggingConfig, RouteConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &HandoffConfig) -> ConfigResult<()> {
    validate_logging_config(&config.logging)?;
    validate_routes_config(&config.routes)?;
    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }

    if logging.format == LogFormat::Json && !cfg!(feature = "json-log") {
        return Err(ConfigError::validation(
            "JSON log format requires the 'json-log' feature",
        ));
    }

    if let Some(module) = logging.filters.keys().find(|m| m.trim().is_empty()) {
        return Err(ConfigError::validation(format!(
            "Log filter module name cannot be blank: {module:?}"
        )));
    }

    Ok(())
}

/// Validates all routes.
fn validate_routes_config(routes: &[RouteConfig]) -> ConfigResult<()> {
    let mut seen_names = HashSet::new();

    for route in routes {
        validate_route_config(route)?;

        if !seen_names.insert(route.name.as_str()) {
            return Err(ConfigError::DuplicateRoute(route.name.clone()));
        }
    }

    Ok(())
}

/// Validates a single route.
fn validate_route_config(route: &RouteConfig) -> ConfigResult<()> {
    if route.name.is_empty() {
        return Err(ConfigError::missing_field("routes.name"));
    }

    if route.name.chars().any(char::is_whitespace) {
        return Err(ConfigError::validation(format!(
            "Route name cannot contain whitespace: {:?}",
            route.name
        )));
    }

    if route.accepts.is_empty() {
        return Err(ConfigError::validation(format!(
            "Route '{}' must accept at least one request",
            route.name
        )));
    }

    if route.accepts.iter().any(String::is_empty) {
        return Err(ConfigError::validation(format!(
            "Route '{}' accepts an empty request",
            route.name
        )));
    }

    if route.reply.is_empty() {
        return Err(ConfigError::missing_field(format!(
            "routes.{}.reply",
            route.name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn route(name: &str) -> RouteConfig {
        RouteConfig {
            name: name.to_string(),
            accepts: vec!["Ferrari".to_string()],
            reply: "{request} sold".to_string(),
            ignore_case: false,
        }
    }

    #[test]
    fn test_validate_empty_config() {
        let config = HandoffConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_duplicate_route_name() {
        let config = HandoffConfig {
            routes: vec![route("ferrari"), route("ferrari")],
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::DuplicateRoute(name)) if name == "ferrari"));
    }

    #[test]
    fn test_validate_route_fields() {
        let mut spaced = route("rolls royce");
        assert!(matches!(
            validate_route_config(&spaced),
            Err(ConfigError::ValidationError { .. })
        ));

        spaced.name = "rolls-royce".to_string();
        spaced.accepts.clear();
        assert!(validate_route_config(&spaced).is_err());

        let mut blank_reply = route("ferrari");
        blank_reply.reply.clear();
        assert!(matches!(
            validate_route_config(&blank_reply),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_validate_file_output_needs_path() {
        let mut config = HandoffConfig::default();
        config.logging.output = LogOutput::File;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { field }) if field == "logging.file_path"
        ));

        config.logging.file_path = Some(PathBuf::from("handoff.log"));
        assert!(validate_config(&config).is_ok());
    }
}
