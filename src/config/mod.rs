//! # Kafka Configuration System
//!
//! Explicit construction of the default Kafka client configuration. A
//! property source supplies values under the `kafka` prefix; the resolver
//! filters out sections owned by consumer, producer, streams and embedded
//! broker configurations, turns every value into text and makes sure a
//! broker list is always present.
//!
//! ## Usage
//!
//! ```rust
//! use kafka_config::config::{KafkaClientConfiguration, KafkaDefaultConfiguration, MapPropertySource};
//!
//! let source = MapPropertySource::new("kafka")
//!     .with_property("bootstrap.servers", "broker-1:9092")
//!     .with_property("consumers.orders.group.id", "orders")
//!     .with_property("request.timeout.ms", 30_000);
//!
//! let config = KafkaDefaultConfiguration::new(&source);
//! assert_eq!(config.bootstrap_servers(), Some("broker-1:9092"));
//! assert_eq!(config.property("request.timeout.ms"), Some("30000"));
//! assert_eq!(config.property("consumers.orders.group.id"), None);
//! ```

pub mod duration;
pub mod error;
pub mod kafka_default;
pub mod loader;
pub mod resolver;
pub mod source;
pub mod value;

pub use duration::{duration_from_value, parse_duration};
pub use error::{ConfigResult, ConfigurationError};
pub use kafka_default::{KafkaClientConfiguration, KafkaDefaultConfiguration};
pub use loader::KafkaConfigLoader;
pub use resolver::{
    apply_bootstrap_default, is_reserved_key, resolve_default_configuration, resolve_with_prefix,
    Properties,
};
pub use source::{LayeredPropertySource, MapPropertySource, PropertySource};
pub use value::PropertyValue;
