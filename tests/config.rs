use cloudtasks::config::{Config, FilterMode};
use cloudtasks::constants::{DEFAULT_SCRIPT_TEMPLATE, SIZE_COLUMN_DEFAULT_WIDTH};
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.quick_view);
    assert_eq!(config.ui.size_column_width, SIZE_COLUMN_DEFAULT_WIDTH);
    assert_eq!(config.panel.filter_mode, FilterMode::Regex);
    assert_eq!(config.panel.script_template, DEFAULT_SCRIPT_TEMPLATE);
    assert!(!config.logging.enabled);
    assert!(config.core.seed_file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Size column too narrow
    config.ui.size_column_width = 2;
    assert!(config.validate().is_err());

    // Reset and test a template without the link placeholder
    config.ui.size_column_width = SIZE_COLUMN_DEFAULT_WIDTH;
    config.panel.script_template = "wget '{name}'".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("filter_mode = \"regex\""));
    assert!(toml_str.contains("quick_view = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
quick_view = false

[panel]
filter_mode = "wildcard"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(!config.ui.quick_view);
    assert_eq!(config.panel.filter_mode, FilterMode::Wildcard);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.size_column_width, SIZE_COLUMN_DEFAULT_WIDTH);
    assert_eq!(config.panel.script_template, DEFAULT_SCRIPT_TEMPLATE);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[panel]
filter_mode = "fixed_string"

[core]
seed_file = "/tmp/tasks.json"
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.panel.filter_mode, FilterMode::FixedString);
    assert_eq!(config.core.seed_file.as_deref(), Some(std::path::Path::new("/tmp/tasks.json")));
}

#[test]
fn test_load_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ui]\nsize_column_width = 200").unwrap();

    assert!(Config::load_from_file(file.path()).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# cloudtasks Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.size_column_width, SIZE_COLUMN_DEFAULT_WIDTH);
    assert_eq!(config.panel.script_template, DEFAULT_SCRIPT_TEMPLATE);
}
