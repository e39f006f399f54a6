//! # Default Kafka Configuration
//!
//! The configuration shared by every consumer and producer unless they
//! override it: the resolved client properties plus the health check timeout.

use super::resolver::{apply_bootstrap_default, resolve_default_configuration, Properties};
use super::source::PropertySource;
use crate::constants::{BOOTSTRAP_SERVERS_CONFIG, DEFAULT_HEALTH_TIMEOUT_SECS};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Key fragments whose values are masked in [`KafkaDefaultConfiguration::debug_config`]
const SENSITIVE_PATTERNS: [&str; 5] = ["password", "secret", "jaas", "token", "credential"];

/// Common surface of every Kafka configuration object
pub trait KafkaClientConfiguration {
    /// Properties passed to the Kafka client
    fn config(&self) -> &Properties;

    /// Mutable access for layering overrides on top of the resolved set
    fn config_mut(&mut self) -> &mut Properties;

    /// Single property lookup
    fn property(&self, key: &str) -> Option<&str> {
        self.config().get(key).map(String::as_str)
    }

    /// The configured broker list
    fn bootstrap_servers(&self) -> Option<&str> {
        self.property(BOOTSTRAP_SERVERS_CONFIG)
    }
}

/// Default Kafka configuration applied to both consumers and producers
///
/// # Examples
///
/// ```rust
/// use kafka_config::config::{KafkaClientConfiguration, KafkaDefaultConfiguration, MapPropertySource};
/// use std::time::Duration;
///
/// let source = MapPropertySource::new("kafka").with_property("foo", "bar");
/// let mut config = KafkaDefaultConfiguration::new(&source);
///
/// assert_eq!(config.bootstrap_servers(), Some("localhost:9092"));
/// assert_eq!(config.health_timeout(), Duration::from_secs(10));
///
/// config.set_health_timeout(None);
/// assert_eq!(config.health_timeout(), Duration::from_secs(10));
///
/// config.set_health_timeout(Some(Duration::from_secs(5)));
/// assert_eq!(config.health_timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaDefaultConfiguration {
    config: Properties,
    health_timeout: Duration,
}

impl KafkaDefaultConfiguration {
    /// Resolve the default configuration from a property source
    pub fn new<S: PropertySource + ?Sized>(source: &S) -> Self {
        Self::from_properties(resolve_default_configuration(source))
    }

    /// Wrap already-resolved properties, adding the broker default if missing
    pub fn from_properties(mut config: Properties) -> Self {
        apply_bootstrap_default(&mut config);
        Self {
            config,
            health_timeout: Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS),
        }
    }

    /// The health check timeout
    pub fn health_timeout(&self) -> Duration {
        self.health_timeout
    }

    /// Set the health check timeout; `None` leaves the current value in place.
    ///
    /// Defaults to 10 seconds. No bounds are enforced.
    pub fn set_health_timeout(&mut self, health_timeout: Option<Duration>) {
        if let Some(timeout) = health_timeout {
            debug!(
                previous = ?self.health_timeout,
                health_timeout = ?timeout,
                "Updating Kafka health timeout"
            );
            self.health_timeout = timeout;
        }
    }

    /// Builder-style variant of [`set_health_timeout`](Self::set_health_timeout)
    pub fn with_health_timeout(mut self, health_timeout: Option<Duration>) -> Self {
        self.set_health_timeout(health_timeout);
        self
    }

    /// Sanitized view for logging with credential-like values masked
    pub fn debug_config(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for (key, value) in &self.config {
            properties.insert(key.clone(), json!(mask_if_sensitive(key, value)));
        }

        json!({
            "config": properties,
            "health_timeout_ms": saturating_millis(self.health_timeout),
        })
    }
}

impl KafkaClientConfiguration for KafkaDefaultConfiguration {
    fn config(&self) -> &Properties {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Properties {
        &mut self.config
    }
}

/// Milliseconds in a `u64`, clamped for durations beyond ~584 million years
fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn mask_if_sensitive(key: &str, value: &str) -> String {
    let key_lower = key.to_lowercase();
    let is_sensitive = SENSITIVE_PATTERNS
        .iter()
        .any(|pattern| key_lower.contains(pattern));

    if !is_sensitive {
        return value.to_string();
    }
    if value.is_empty() {
        return "[EMPTY]".to_string();
    }

    // Show only the first and last 2 characters
    let chars: Vec<char> = value.chars().collect();
    let masked = if chars.len() > 4 {
        let head: String = chars.iter().take(2).collect();
        let tail: String = chars.iter().skip(chars.len() - 2).collect();
        format!("{head}***{tail}")
    } else {
        "***".to_string()
    };
    format!("[MASKED: {masked}]")
}
