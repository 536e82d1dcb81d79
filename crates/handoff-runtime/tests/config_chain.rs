//! Loading a route table from files and environment, then dispatching.

use figment::Jail;
use handoff_runtime::{ConfigError, ConfigLoader, LogLevel, chain_from_config};

const DEALERSHIP: &str = r#"
seal = true

[logging]
level = "debug"

[logging.filters]
handoff_core = "trace"

[[routes]]
name = "mercedes"
accepts = ["Mercedes"]
reply = "{request} store will sell the {request}."

[[routes]]
name = "rolls-royce"
accepts = ["RollsRoyce", "Rolls-Royce"]
reply = "RollsRoyce store will sell the {request}."

[[routes]]
name = "ferrari"
accepts = ["Ferrari"]
reply = "{request} store will sell the {request}."
ignore_case = true
"#;

#[test]
fn test_dealership_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file("handoff.toml", DEALERSHIP)?;

        let config = ConfigLoader::new()
            .search_path(jail.directory())
            .without_env()
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.filters.get("handoff_core"), Some(&LogLevel::Trace));
        assert_eq!(config.routes.len(), 3);

        let chain = chain_from_config(&config).map_err(|e| e.to_string())?;
        assert!(chain.is_sealed());

        assert_eq!(
            chain.dispatch("Ferrari").as_deref(),
            Some("Ferrari store will sell the Ferrari.")
        );
        assert_eq!(
            chain.dispatch("ferrari").as_deref(),
            Some("ferrari store will sell the ferrari.")
        );
        assert_eq!(
            chain.dispatch("Rolls-Royce").as_deref(),
            Some("RollsRoyce store will sell the Rolls-Royce.")
        );
        assert_eq!(chain.dispatch("Lamborghini"), None);

        let handled = chain.route("Mercedes").unwrap();
        assert_eq!((handled.position, handled.name), (0, Some("mercedes")));
        Ok(())
    });
}

#[test]
fn test_profile_file_is_layered_under_main_file() {
    Jail::expect_with(|jail| {
        jail.create_file("handoff.toml", DEALERSHIP)?;
        jail.create_file(
            "handoff.production.toml",
            "seal = false\n[logging]\nlevel = \"error\"\n",
        )?;

        let config = ConfigLoader::new()
            .profile("production")
            .search_path(jail.directory())
            .without_env()
            .load()
            .map_err(|e| e.to_string())?;

        // Main file wins over the profile file.
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.seal);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("handoff.toml", DEALERSHIP)?;
        jail.set_env("HANDOFF_SEAL", "false");
        jail.set_env("HANDOFF_LOGGING__LEVEL", "warn");

        let config = ConfigLoader::new()
            .search_path(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;

        assert!(!config.seal);
        assert_eq!(config.logging.level, LogLevel::Warn);

        let chain = chain_from_config(&config).map_err(|e| e.to_string())?;
        assert!(!chain.is_sealed());
        Ok(())
    });
}

#[test]
fn test_duplicate_routes_rejected_at_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "handoff.toml",
            r#"
[[routes]]
name = "store"
accepts = ["a"]
reply = "a"

[[routes]]
name = "store"
accepts = ["b"]
reply = "b"
"#,
        )?;

        let result = ConfigLoader::new()
            .search_path(jail.directory())
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::DuplicateRoute(name)) if name == "store"));
        Ok(())
    });
}

#[test]
fn test_unknown_log_level_is_parse_error() {
    Jail::expect_with(|jail| {
        jail.create_file("handoff.toml", "[logging]\nlevel = \"loud\"\n")?;

        let result = ConfigLoader::new()
            .search_path(jail.directory())
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        Ok(())
    });
}
