//! # Property Sources
//!
//! A property source hands out every key/value pair stored under a prefix,
//! with keys relative to that prefix (`kafka.bootstrap.servers` is returned
//! as `bootstrap.servers` for prefix `kafka`). Nested tables are flattened
//! into dotted keys.
//!
//! Three implementations ship with the crate:
//!
//! - [`MapPropertySource`] - an ordered in-memory list, mostly for callers
//!   that already hold resolved values and for tests
//! - [`config::Config`] - a single source built from files or environment
//!   variables
//! - [`LayeredPropertySource`] - several `config::Config` layers read in
//!   precedence order, usually produced by
//!   [`KafkaConfigLoader`](super::loader::KafkaConfigLoader)
//!
//! Sources backed by the `config` crate hand out lowercased keys (the crate
//! normalises keys when it reads files and environment variables), so
//! `Embedded.x` in a YAML file reaches the resolver as `embedded.x`.
//! [`MapPropertySource`] keeps keys exactly as inserted.

use super::value::PropertyValue;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Supplier of configuration key/value pairs scoped by prefix
pub trait PropertySource {
    /// All entries under `prefix`, in source order.
    ///
    /// The same key may be yielded more than once; consumers treat the last
    /// occurrence as authoritative.
    fn properties(&self, prefix: &str) -> Vec<(String, PropertyValue)>;

    /// Whether anything at all is configured under `prefix`
    fn contains_prefix(&self, prefix: &str) -> bool {
        !self.properties(prefix).is_empty()
    }
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn properties(&self, prefix: &str) -> Vec<(String, PropertyValue)> {
        (**self).properties(prefix)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        (**self).contains_prefix(prefix)
    }
}

/// In-memory property source with a fixed prefix
///
/// # Examples
///
/// ```rust
/// use kafka_config::config::{MapPropertySource, PropertySource};
///
/// let source = MapPropertySource::new("kafka")
///     .with_property("bootstrap.servers", "broker:9092")
///     .with_property("max.poll.records", 500);
///
/// assert_eq!(source.properties("kafka").len(), 2);
/// assert!(source.properties("other").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    prefix: String,
    entries: Vec<(String, PropertyValue)>,
}

impl MapPropertySource {
    /// Create an empty source bound to `prefix`
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Vec::new(),
        }
    }

    /// Create a source from prefix-relative key/value pairs
    pub fn from_pairs<P, I, K, V>(prefix: P, pairs: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        let mut source = Self::new(prefix);
        for (key, value) in pairs {
            source.insert(key, value);
        }
        source
    }

    /// Create a source from a JSON object, flattening nested objects
    ///
    /// Anything other than an object yields an empty source.
    pub fn from_json<P: Into<String>>(prefix: P, json: serde_json::Value) -> Self {
        let mut source = Self::new(prefix);
        match PropertyValue::from(json) {
            PropertyValue::Table(entries) => {
                flatten_into(None, entries, &mut source.entries);
            }
            other => {
                warn!(
                    kind = other.kind(),
                    "Ignoring non-object JSON property source"
                );
            }
        }
        source
    }

    /// Add a property, builder style
    pub fn with_property<K: Into<String>, V: Into<PropertyValue>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Append a property; an existing key is shadowed, not removed
    pub fn insert<K: Into<String>, V: Into<PropertyValue>>(&mut self, key: K, value: V) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PropertySource for MapPropertySource {
    fn properties(&self, prefix: &str) -> Vec<(String, PropertyValue)> {
        if prefix != self.prefix {
            return Vec::new();
        }
        self.entries.clone()
    }
}

impl PropertySource for config::Config {
    fn properties(&self, prefix: &str) -> Vec<(String, PropertyValue)> {
        let table = match self.get_table(prefix) {
            Ok(table) => table,
            Err(config::ConfigError::NotFound(_)) => {
                debug!(prefix = %prefix, "No configuration found under prefix");
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    prefix = %prefix,
                    error = %e,
                    "Configuration under prefix is not a table, ignoring it"
                );
                return Vec::new();
            }
        };

        let entries: BTreeMap<String, PropertyValue> = table
            .into_iter()
            .map(|(key, value)| (key, PropertyValue::from(value)))
            .collect();

        let mut flattened = Vec::new();
        flatten_into(None, entries, &mut flattened);
        flattened
    }
}

/// Ordered stack of `config::Config` layers, lowest precedence first
///
/// Each layer is flattened on its own and the results are concatenated, so
/// every entry of a later layer comes after every entry of an earlier one.
/// A file that spells a key as `bootstrap.servers` and an environment
/// variable that produces a nested `bootstrap.servers` therefore still
/// resolve with the environment winning.
#[derive(Debug, Clone, Default)]
pub struct LayeredPropertySource {
    layers: Vec<config::Config>,
}

impl LayeredPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer that takes precedence over all previous ones, builder style
    pub fn with_layer(mut self, layer: config::Config) -> Self {
        self.push_layer(layer);
        self
    }

    /// Add a layer that takes precedence over all previous ones
    pub fn push_layer(&mut self, layer: config::Config) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[config::Config] {
        &self.layers
    }
}

impl PropertySource for LayeredPropertySource {
    fn properties(&self, prefix: &str) -> Vec<(String, PropertyValue)> {
        self.layers
            .iter()
            .flat_map(|layer| layer.properties(prefix))
            .collect()
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains_prefix(prefix))
    }
}

/// Flatten nested tables into dotted keys, keys sorted within each table
fn flatten_into(
    parent: Option<&str>,
    entries: BTreeMap<String, PropertyValue>,
    out: &mut Vec<(String, PropertyValue)>,
) {
    for (key, value) in entries {
        let full_key = match parent {
            Some(parent) => format!("{parent}.{key}"),
            None => key,
        };

        match value {
            PropertyValue::Table(nested) if !nested.is_empty() => {
                flatten_into(Some(&full_key), nested, out);
            }
            other => out.push((full_key, other)),
        }
    }
}
