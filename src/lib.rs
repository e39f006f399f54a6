#![allow(clippy::doc_markdown)] // Allow technical terms like librdkafka in docs
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Kafka Config
//!
//! Default Kafka client configuration resolved from layered property sources.
//!
//! ## Overview
//!
//! Every Kafka consumer and producer in an application starts from the same
//! default client properties. This crate reads those properties from
//! configuration files and `KAFKA_*` environment variables (or any other
//! [`PropertySource`](config::PropertySource)), drops the sections that
//! belong to per-consumer, per-producer, streams and embedded-broker
//! configurations, converts every value to the string form Kafka clients
//! expect, and guarantees a `bootstrap.servers` entry.
//!
//! Alongside the client properties, the default configuration carries the
//! health check timeout (10 seconds unless configured).
//!
//! ## Module Organization
//!
//! - [`config`] - property sources, resolution, loader and the configuration object
//! - [`constants`] - key names and defaults
//! - [`logging`] - structured logging setup
//! - `client` - `rdkafka::ClientConfig` bridge (feature `rdkafka`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kafka_config::config::{KafkaClientConfiguration, KafkaConfigLoader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! kafka_config::logging::init_structured_logging();
//!
//! let config = KafkaConfigLoader::new()
//!     .with_optional_file("config/application.yaml")
//!     .with_environment()
//!     .load()?;
//!
//! for (key, value) in config.config() {
//!     println!("{key} = {value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod logging;

#[cfg(feature = "rdkafka")]
pub mod client;

pub use config::{
    ConfigResult, ConfigurationError, KafkaClientConfiguration, KafkaConfigLoader,
    KafkaDefaultConfiguration, LayeredPropertySource, MapPropertySource, Properties,
    PropertySource, PropertyValue,
};
pub use constants::{
    BOOTSTRAP_SERVERS_CONFIG, DEFAULT_BOOTSTRAP_SERVERS, DEFAULT_HEALTH_TIMEOUT_SECS, PREFIX,
};
