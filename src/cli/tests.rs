use clap::Parser;

use super::*;

#[test]
fn minimal_args_produce_default_config() {
    let args = Args::try_parse_from(["trendgenius-rs"]).unwrap();
    let config = args.into_config();

    assert_eq!(config.category, Category::Technology);
    assert!(config.topic.is_none());
    assert!(!config.quick_draft);
    assert!(!config.autopilot.enabled);
}

#[test]
fn category_and_topic_flags_override_config() {
    let args = Args::try_parse_from([
        "trendgenius-rs",
        "--category",
        "ai",
        "--topic",
        "Quantum Leap",
        "--quick",
        "--auto-publish",
    ])
    .unwrap();
    let config = args.into_config();

    assert_eq!(config.category, Category::ArtificialIntelligence);
    assert_eq!(config.topic.as_deref(), Some("Quantum Leap"));
    assert!(config.quick_draft);
    assert!(config.auto_publish);
}

#[test]
fn unknown_category_falls_back_to_default() {
    let args = Args::try_parse_from(["trendgenius-rs", "--category", "cooking"]).unwrap();
    let config = args.into_config();
    assert_eq!(config.category, Category::Technology);
}

#[test]
fn autopilot_flags_configure_poll_interval() {
    let args = Args::try_parse_from([
        "trendgenius-rs",
        "--autopilot",
        "--interval-seconds",
        "30",
    ])
    .unwrap();
    let config = args.into_config();

    assert!(config.autopilot.enabled);
    assert_eq!(config.autopilot.interval_seconds, 30);
}

#[test]
fn llm_flags_override_model_settings() {
    let args = Args::try_parse_from([
        "trendgenius-rs",
        "--llm-api-key",
        "test-key",
        "--llm-api-base-url",
        "http://localhost:8080",
        "--model-efficient",
        "eff-model",
        "--model-powerful",
        "pow-model",
        "--max-tokens",
        "1024",
        "--temperature",
        "0.2",
    ])
    .unwrap();
    let config = args.into_config();

    assert_eq!(config.llm.api_key, "test-key");
    assert_eq!(config.llm.api_base_url, "http://localhost:8080");
    assert_eq!(config.llm.model_efficient, "eff-model");
    assert_eq!(config.llm.model_powerful, "pow-model");
    assert_eq!(config.llm.max_tokens, 1024);
    assert_eq!(config.llm.temperature, 0.2);
}

#[test]
fn verbose_flag_is_parsed() {
    let args = Args::try_parse_from(["trendgenius-rs", "--verbose"]).unwrap();
    assert!(args.verbose);
    let config = args.into_config();
    assert!(config.verbose);
}
