mod common;

use common::strategies::*;
use kafka_config::config::resolve_default_configuration;
use kafka_config::{
    KafkaClientConfiguration, KafkaDefaultConfiguration, MapPropertySource,
    BOOTSTRAP_SERVERS_CONFIG, DEFAULT_BOOTSTRAP_SERVERS,
};
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

proptest! {
    /// Property: keys of sibling sections never survive resolution
    #[test]
    fn reserved_keys_are_always_filtered(
        keys in prop::collection::vec(reserved_key_strategy(), 0..16),
        value in scalar_value_strategy(),
    ) {
        let mut source = MapPropertySource::new("kafka");
        for key in &keys {
            source.insert(key.clone(), value.clone());
        }

        let resolved = resolve_default_configuration(&source);

        for key in &keys {
            prop_assert!(!resolved.contains_key(key), "reserved key {} leaked", key);
        }
        prop_assert_eq!(resolved.len(), 1);
    }

    /// Property: every other key maps to the textual form of its last value
    #[test]
    fn unreserved_keys_carry_their_last_value(
        entries in prop::collection::vec((property_key_strategy(), scalar_value_strategy()), 0..24),
    ) {
        let mut source = MapPropertySource::new("kafka");
        let mut expected = HashMap::new();
        for (key, value) in &entries {
            source.insert(key.clone(), value.clone());
            expected.insert(key.clone(), value.to_property_string());
        }

        let resolved = resolve_default_configuration(&source);

        for (key, value) in &expected {
            prop_assert_eq!(resolved.get(key), Some(value));
        }
    }

    /// Property: the broker list is always present and never overwritten
    #[test]
    fn bootstrap_servers_always_present(
        servers in prop::option::of("[a-z0-9.-]{1,16}:[0-9]{2,5}"),
    ) {
        let mut source = MapPropertySource::new("kafka");
        if let Some(servers) = &servers {
            source.insert(BOOTSTRAP_SERVERS_CONFIG, servers.as_str());
        }

        let config = KafkaDefaultConfiguration::new(&source);

        let expected = servers.as_deref().unwrap_or(DEFAULT_BOOTSTRAP_SERVERS);
        prop_assert_eq!(config.bootstrap_servers(), Some(expected));
    }

    /// Property: setting `None` never changes the stored timeout
    #[test]
    fn none_never_changes_health_timeout(millis in 0u64..10_000_000) {
        let mut config = KafkaDefaultConfiguration::new(&MapPropertySource::new("kafka"));

        config.set_health_timeout(Some(Duration::from_millis(millis)));
        config.set_health_timeout(None);

        prop_assert_eq!(config.health_timeout(), Duration::from_millis(millis));
    }
}
