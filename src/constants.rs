//! # Kafka Configuration Constants
//!
//! Key names and defaults shared by the resolver, the loader and the
//! configuration object.

/// Prefix under which all default Kafka properties live
pub const PREFIX: &str = "kafka";

/// Kafka client key for the initial broker list
pub const BOOTSTRAP_SERVERS_CONFIG: &str = "bootstrap.servers";

/// Broker list used when no source provides one
pub const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";

/// Default health check timeout, in seconds
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 10;

/// Child sections owned by sibling configurations (embedded broker,
/// per-consumer, per-producer and streams settings).
///
/// Matching is a literal string prefix on the raw key, so `embeddedFoo`
/// is reserved as well as `embedded.enabled`.
pub const RESERVED_SECTIONS: [&str; 4] = ["embedded", "consumers", "producers", "streams"];

/// Keys (relative to [`PREFIX`]) that bind the health timeout.
///
/// `health.timeout` is what `KAFKA_HEALTH_TIMEOUT` becomes after
/// environment variable mapping.
pub const HEALTH_TIMEOUT_KEYS: [&str; 2] = ["health-timeout", "health.timeout"];

/// Environment selection for logging, checked in order.
///
/// None of these start with `KAFKA_`, so they never leak into the
/// environment property source.
pub const ENVIRONMENT_VARIABLES: [&str; 2] = ["APP_ENV", "RUST_ENV"];

/// Set to `json` to emit structured JSON logs
pub const LOG_FORMAT_VARIABLE: &str = "APP_LOG_FORMAT";
