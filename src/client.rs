//! Bridge from resolved properties to an `rdkafka` client configuration.

use crate::config::{KafkaClientConfiguration, KafkaDefaultConfiguration};
use rdkafka::config::ClientConfig;
use tracing::debug;

impl KafkaDefaultConfiguration {
    /// Build an `rdkafka` client configuration carrying every resolved property
    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        for (key, value) in self.config() {
            client_config.set(key, value);
        }

        debug!(
            property_count = self.config().len(),
            "Built rdkafka client configuration"
        );
        client_config
    }
}
