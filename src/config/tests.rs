use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();

    assert_eq!(config.category, Category::Technology);
    assert!(config.topic.is_none());
    assert!(!config.quick_draft);
    assert!(!config.auto_publish);
    assert!(!config.verbose);

    assert!(!config.autopilot.enabled);
    assert_eq!(config.autopilot.interval_seconds, 60);

    assert!(!config.llm.api_base_url.is_empty());
    assert!(!config.llm.model_efficient.is_empty());
    assert!(!config.llm.model_powerful.is_empty());
    assert_eq!(config.llm.max_tokens, 8192);
    assert_eq!(config.llm.temperature, 0.7);
    assert_eq!(config.llm.retry_attempts, 3);
    assert_eq!(config.llm.timeout_seconds, 120);
}

#[test]
fn from_file_loads_partial_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("trendgenius.toml");
    std::fs::write(
        &config_path,
        r#"
category = "Health"
quick_draft = true

[autopilot]
enabled = true
interval_seconds = 30

[llm]
model_efficient = "custom-flash"
"#,
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.category, Category::Health);
    assert!(config.quick_draft);
    assert!(config.autopilot.enabled);
    assert_eq!(config.autopilot.interval_seconds, 30);
    assert_eq!(config.llm.model_efficient, "custom-flash");
    // 未指定的字段保持默认值
    assert_eq!(config.llm.max_tokens, 8192);
    assert!(!config.auto_publish);
}

#[test]
fn from_file_rejects_missing_file() {
    let path = PathBuf::from("/nonexistent/trendgenius.toml");
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn from_file_rejects_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "category = [not valid").unwrap();
    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn category_parses_aliases() {
    assert_eq!("tech".parse::<Category>().unwrap(), Category::Technology);
    assert_eq!(
        "ai".parse::<Category>().unwrap(),
        Category::ArtificialIntelligence
    );
    assert_eq!("Business".parse::<Category>().unwrap(), Category::Business);
    assert!("cooking".parse::<Category>().is_err());
}

#[test]
fn category_display_matches_ui_labels() {
    assert_eq!(Category::Technology.to_string(), "Technology");
    assert_eq!(
        Category::ArtificialIntelligence.to_string(),
        "Artificial Intelligence"
    );
    assert_eq!(Category::all().len(), 5);
}
