//! Loader Integration Tests
//!
//! File + environment layering through `KafkaConfigLoader`.

use kafka_config::{ConfigurationError, KafkaClientConfiguration, KafkaConfigLoader};
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

const APPLICATION_YAML: &str = r#"
kafka:
  bootstrap:
    servers: "broker-1:9092"
  client:
    id: billing
  request:
    timeout:
      ms: 30000
  health-timeout: 15s
  consumers:
    orders:
      group:
        id: orders
  producers:
    default:
      acks: all
  embedded:
    enabled: false
other:
  setting: ignored
"#;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn loads_and_filters_yaml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", APPLICATION_YAML);

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .load()
        .expect("load configuration");

    assert_eq!(config.bootstrap_servers(), Some("broker-1:9092"));
    assert_eq!(config.property("client.id"), Some("billing"));
    assert_eq!(config.property("request.timeout.ms"), Some("30000"));
    assert_eq!(config.health_timeout(), Duration::from_secs(15));

    assert!(config
        .config()
        .keys()
        .all(|key| !key.starts_with("consumers")
            && !key.starts_with("producers")
            && !key.starts_with("embedded")));
    assert_eq!(config.property("setting"), None);
}

#[test]
fn environment_overrides_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", APPLICATION_YAML);

    let mut env = HashMap::new();
    env.insert("KAFKA_CLIENT_ID".to_string(), "payments".to_string());

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .with_environment_source(env)
        .load()
        .expect("load configuration");

    assert_eq!(config.property("client.id"), Some("payments"));
    assert_eq!(config.bootstrap_servers(), Some("broker-1:9092"));
}

#[test]
fn toml_file_without_servers_gets_default() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "kafka.toml",
        r#"
[kafka]
"linger.ms" = 5
"#,
    );

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .load()
        .expect("load configuration");

    assert_eq!(config.property("linger.ms"), Some("5"));
    assert_eq!(config.bootstrap_servers(), Some("localhost:9092"));
}

#[test]
fn load_if_present_returns_configuration_when_prefix_exists() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", APPLICATION_YAML);

    let loaded = KafkaConfigLoader::new()
        .with_file(path)
        .load_if_present()
        .expect("load configuration");

    assert!(loaded.is_some());
}

#[test]
fn load_if_present_returns_none_without_prefix() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", "other:\n  setting: 1\n");

    let loaded = KafkaConfigLoader::new()
        .with_file(path)
        .load_if_present()
        .expect("load configuration");

    assert!(loaded.is_none());
}

#[test]
fn malformed_file_is_a_source_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "broken.yaml", "kafka: [unclosed\n");

    let err = KafkaConfigLoader::new()
        .with_file(path)
        .load()
        .expect_err("malformed YAML must fail");

    assert!(matches!(err, ConfigurationError::ConfigSourceError { .. }));
}

#[test]
fn invalid_health_timeout_in_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", "kafka:\n  health-timeout: whenever\n");

    let err = KafkaConfigLoader::new()
        .with_file(path)
        .load()
        .expect_err("invalid duration must fail");

    assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
}

#[test]
fn environment_overrides_flat_dotted_keys_in_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "application.yaml",
        "kafka:\n  bootstrap.servers: file:9092\n  client.id: from-file\n",
    );

    let mut env = HashMap::new();
    env.insert("KAFKA_BOOTSTRAP_SERVERS".to_string(), "env:9092".to_string());

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .with_environment_source(env)
        .load()
        .expect("load configuration");

    assert_eq!(config.bootstrap_servers(), Some("env:9092"));
    assert_eq!(config.property("client.id"), Some("from-file"));
}

#[test]
fn later_file_overrides_earlier_file_across_key_shapes() {
    let dir = TempDir::new().expect("temp dir");
    let base = write_config(
        &dir,
        "base.yaml",
        "kafka:\n  bootstrap:\n    servers: base:9092\n",
    );
    let overlay = write_config(
        &dir,
        "overlay.yaml",
        "kafka:\n  bootstrap.servers: overlay:9092\n",
    );

    let config = KafkaConfigLoader::new()
        .with_file(base)
        .with_file(overlay)
        .load()
        .expect("load configuration");

    assert_eq!(config.bootstrap_servers(), Some("overlay:9092"));
}

#[test]
fn numeric_looking_environment_values_are_kept_verbatim() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "application.yaml", APPLICATION_YAML);

    let mut env = HashMap::new();
    env.insert("KAFKA_CLIENT_ID".to_string(), "007".to_string());
    env.insert("KAFKA_SASL_PASSWORD".to_string(), "1e3".to_string());
    env.insert("KAFKA_LINGER_MS".to_string(), "5".to_string());

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .with_environment_source(env)
        .load()
        .expect("load configuration");

    assert_eq!(config.property("client.id"), Some("007"));
    assert_eq!(config.property("sasl.password"), Some("1e3"));
    assert_eq!(config.property("linger.ms"), Some("5"));
}

#[test]
fn file_keys_are_lowercased_before_filtering() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "application.yaml",
        "kafka:\n  Embedded.x: 1\n  ssl.Key: y\n",
    );

    let config = KafkaConfigLoader::new()
        .with_file(path)
        .load()
        .expect("load configuration");

    let keys: Vec<&str> = config.config().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["bootstrap.servers", "ssl.key"]);
    assert_eq!(config.property("ssl.key"), Some("y"));
}
