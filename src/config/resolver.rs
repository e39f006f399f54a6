//! # Default Configuration Resolution
//!
//! Turns a prefix-scoped property snapshot into the string properties handed
//! to a Kafka client:
//!
//! 1. entries whose key starts with a reserved section name are dropped
//! 2. values are converted to text
//! 3. entries are stored in order, later duplicates overwriting earlier ones
//! 4. `bootstrap.servers` is added when nothing provided it
//!
//! Resolution never fails and never mutates the source.

use super::source::PropertySource;
use crate::constants::{
    BOOTSTRAP_SERVERS_CONFIG, DEFAULT_BOOTSTRAP_SERVERS, PREFIX, RESERVED_SECTIONS,
};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Resolved Kafka client properties, ordered by key
pub type Properties = BTreeMap<String, String>;

/// Whether `key` belongs to a sibling configuration section.
///
/// This is a literal string prefix test: `embeddedFoo` is reserved just like
/// `embedded.enabled`.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_SECTIONS
        .iter()
        .any(|section| key.starts_with(section))
}

/// Resolve the default Kafka properties under [`PREFIX`]
///
/// # Examples
///
/// ```rust
/// use kafka_config::config::{resolve_default_configuration, MapPropertySource};
///
/// let source = MapPropertySource::new("kafka")
///     .with_property("producers.acks", "1")
///     .with_property("bootstrap.servers", "host:9092")
///     .with_property("foo", 42);
///
/// let resolved = resolve_default_configuration(&source);
/// assert_eq!(resolved.len(), 2);
/// assert_eq!(resolved["bootstrap.servers"], "host:9092");
/// assert_eq!(resolved["foo"], "42");
/// ```
pub fn resolve_default_configuration<S: PropertySource + ?Sized>(source: &S) -> Properties {
    resolve_with_prefix(source, PREFIX)
}

/// Resolve properties under an arbitrary prefix
pub fn resolve_with_prefix<S: PropertySource + ?Sized>(source: &S, prefix: &str) -> Properties {
    let mut properties = Properties::new();
    let mut reserved = 0usize;

    for (key, value) in source.properties(prefix) {
        if is_reserved_key(&key) {
            reserved += 1;
            trace!(key = %key, "Skipping key owned by a sibling section");
            continue;
        }
        if value.is_null() {
            trace!(key = %key, "Skipping null value");
            continue;
        }

        properties.insert(key, value.to_property_string());
    }

    apply_bootstrap_default(&mut properties);

    debug!(
        prefix = %prefix,
        resolved = properties.len(),
        reserved_skipped = reserved,
        "Resolved default Kafka properties"
    );

    properties
}

/// Insert the default broker list unless one is already present
pub fn apply_bootstrap_default(properties: &mut Properties) {
    properties
        .entry(BOOTSTRAP_SERVERS_CONFIG.to_string())
        .or_insert_with(|| DEFAULT_BOOTSTRAP_SERVERS.to_string());
}
