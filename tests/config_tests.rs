//! Integration tests for configuration management

use acadtrack::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        !config.advisor.endpoint.is_empty(),
        "Default advisor endpoint should not be empty"
    );
    assert!(
        !config.advisor.models.is_empty(),
        "Default model list should not be empty"
    );
    assert_eq!(config.academic.required_credits, 120);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[advisor]
api_key = "test_key"
endpoint = "https://example.com"
models = ["model-a", "model-b"]

[paths]
data_dir = "./data"
reports_dir = "./reports"

[academic]
required_credits = 90
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.advisor.api_key, "test_key");
    assert_eq!(config.advisor.endpoint, "https://example.com");
    assert_eq!(config.advisor.models, vec!["model-a", "model-b"]);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.academic.required_credits, 90);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections fall back to type defaults
    let toml_str = r#"
[logging]
level = "error"

[advisor]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.advisor.api_key, "");
    assert!(config.advisor.models.is_empty());
    assert_eq!(config.academic.required_credits, 0);
}

#[test]
fn test_config_from_toml_invalid() {
    assert!(Config::from_toml("not [valid toml").is_err());
}

#[test]
fn test_config_get_known_keys() {
    let mut config = Config::from_defaults();
    config.advisor.api_key = "secret".to_string();

    assert_eq!(config.get("api_key"), Some("secret".to_string()));
    assert_eq!(config.get("required_credits"), Some("120".to_string()));
    assert!(config.get("models").is_some());
    assert_eq!(config.get("no_such_key"), None);
}

#[test]
fn test_config_set_and_unset() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("level", "info").expect("set level");
    assert_eq!(config.logging.level, "info");

    config.set("required_credits", "96").expect("set credits");
    assert_eq!(config.academic.required_credits, 96);

    config
        .set("models", "model-a, model-b,model-c")
        .expect("set models");
    assert_eq!(config.advisor.models, vec!["model-a", "model-b", "model-c"]);

    config.unset("level", &defaults).expect("unset level");
    assert_eq!(config.logging.level, defaults.logging.level);

    config
        .unset("required_credits", &defaults)
        .expect("unset credits");
    assert_eq!(config.academic.required_credits, 120);
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "not-a-bool").is_err());
    assert!(config.set("required_credits", "many").is_err());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset_rejects_unknown_key() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: None,
        verbose: Some(true),
        api_key: Some("override-key".to_string()),
        endpoint: None,
        data_dir: Some("/override/data".to_string()),
        reports_dir: None,
        required_credits: Some(60),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.advisor.api_key, "override-key");
    assert_eq!(config.paths.data_dir, "/override/data");
    assert_eq!(config.academic.required_credits, 60);
    // Untouched fields keep their defaults
    assert!(!config.advisor.endpoint.is_empty());
}

#[test]
fn test_display_includes_all_sections() {
    let config = Config::from_defaults();
    let rendered = config.to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[advisor]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("[academic]"));
}
