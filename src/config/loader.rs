//! Configuration Loader
//!
//! Builds a [`LayeredPropertySource`] from configuration files and
//! `KAFKA_*` environment variables, then resolves the default Kafka
//! configuration from it and binds the health timeout.
//!
//! Layers are applied in the order they were added; environment variables
//! are always applied last.
//!
//! Environment variables map onto dotted keys: `KAFKA_BOOTSTRAP_SERVERS`
//! becomes `kafka.bootstrap.servers` and `KAFKA_HEALTH_TIMEOUT` becomes
//! `kafka.health.timeout`. Values are kept as strings, so `007` stays `007`.

use super::duration::duration_from_value;
use super::error::{ConfigResult, ConfigurationError};
use super::kafka_default::{KafkaClientConfiguration, KafkaDefaultConfiguration};
use super::resolver::resolve_with_prefix;
use super::source::{LayeredPropertySource, PropertySource};
use crate::constants::{HEALTH_TIMEOUT_KEYS, PREFIX};
use crate::logging::log_config_operation;
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct FileLayer {
    path: PathBuf,
    required: bool,
}

#[derive(Debug, Clone)]
enum EnvironmentLayer {
    Process,
    Injected(HashMap<String, String>),
}

/// Loader for the default Kafka configuration
///
/// # Examples
///
/// ```rust,no_run
/// use kafka_config::config::{KafkaClientConfiguration, KafkaConfigLoader};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = KafkaConfigLoader::new()
///     .with_optional_file("config/application.yaml")
///     .with_environment()
///     .load()?;
///
/// println!("brokers: {:?}", config.bootstrap_servers());
/// println!("health timeout: {:?}", config.health_timeout());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KafkaConfigLoader {
    prefix: String,
    files: Vec<FileLayer>,
    environment: Option<EnvironmentLayer>,
}

impl Default for KafkaConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl KafkaConfigLoader {
    /// Loader for [`PREFIX`] with no layers
    pub fn new() -> Self {
        Self {
            prefix: PREFIX.to_string(),
            files: Vec::new(),
            environment: None,
        }
    }

    /// Read properties under another prefix
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add a configuration file that must exist
    ///
    /// The format is picked from the extension (yaml, toml, json, ...).
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.files.push(FileLayer {
            path: path.into(),
            required: true,
        });
        self
    }

    /// Add a configuration file that is skipped when missing
    pub fn with_optional_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.files.push(FileLayer {
            path: path.into(),
            required: false,
        });
        self
    }

    /// Layer the process environment on top of the files
    pub fn with_environment(mut self) -> Self {
        self.environment = Some(EnvironmentLayer::Process);
        self
    }

    /// Layer an explicit variable map instead of the process environment
    pub fn with_environment_source(mut self, variables: HashMap<String, String>) -> Self {
        self.environment = Some(EnvironmentLayer::Injected(variables));
        self
    }

    /// Build the layered source without resolving it
    ///
    /// Every file and the environment become separate layers so precedence
    /// holds no matter how a key is spelled inside each layer.
    pub fn build_source(&self) -> ConfigResult<LayeredPropertySource> {
        if self.prefix.trim().is_empty() {
            return Err(ConfigurationError::validation_error(
                "configuration prefix must not be empty",
            ));
        }

        let mut source = LayeredPropertySource::new();

        for layer in &self.files {
            if layer.required && !layer.path.is_file() {
                return Err(ConfigurationError::config_file_not_found(vec![layer
                    .path
                    .clone()]));
            }
            debug!(
                path = %layer.path.display(),
                required = layer.required,
                "Adding configuration file layer"
            );
            let file_layer = Config::builder()
                .add_source(File::from(layer.path.as_path()).required(layer.required))
                .build()
                .map_err(ConfigurationError::config_source_error)?;
            source.push_layer(file_layer);
        }

        if let Some(environment) = &self.environment {
            // No type parsing, values stay verbatim strings
            let mut env = Environment::with_prefix(&self.prefix)
                .prefix_separator("_")
                .separator("_")
                .keep_prefix(true);
            if let EnvironmentLayer::Injected(variables) = environment {
                env = env.source(Some(variables.clone()));
            }
            let env_layer = Config::builder()
                .add_source(env)
                .build()
                .map_err(ConfigurationError::config_source_error)?;
            source.push_layer(env_layer);
        }

        Ok(source)
    }

    /// Load the default configuration, falling back to defaults for anything
    /// not configured
    pub fn load(&self) -> ConfigResult<KafkaDefaultConfiguration> {
        let source = self.build_source()?;
        self.resolve(&source)
    }

    /// Load the default configuration only when something is configured
    /// under the prefix
    pub fn load_if_present(&self) -> ConfigResult<Option<KafkaDefaultConfiguration>> {
        let source = self.build_source()?;
        if !source.contains_prefix(&self.prefix) {
            info!(
                prefix = %self.prefix,
                "No Kafka configuration present, skipping default configuration"
            );
            return Ok(None);
        }
        self.resolve(&source).map(Some)
    }

    /// Resolve and bind against any property source
    pub fn resolve<S: PropertySource + ?Sized>(
        &self,
        source: &S,
    ) -> ConfigResult<KafkaDefaultConfiguration> {
        let mut config =
            KafkaDefaultConfiguration::from_properties(resolve_with_prefix(source, &self.prefix));
        config.set_health_timeout(self.bind_health_timeout(source)?);

        log_config_operation(
            "load_default_configuration",
            &self.prefix,
            config.config().len(),
            config.bootstrap_servers(),
            config.health_timeout(),
        );

        Ok(config)
    }

    fn bind_health_timeout<S: PropertySource + ?Sized>(
        &self,
        source: &S,
    ) -> ConfigResult<Option<Duration>> {
        // Last occurrence wins, matching property resolution
        let value = source
            .properties(&self.prefix)
            .into_iter()
            .rev()
            .find(|(key, value)| HEALTH_TIMEOUT_KEYS.contains(&key.as_str()) && !value.is_null());

        match value {
            Some((key, value)) => {
                let duration = duration_from_value(&value).map_err(|_| {
                    ConfigurationError::invalid_value(
                        format!("{}.{}", self.prefix, key),
                        value.to_property_string(),
                        "expected a duration such as 250ms, 10s, 5m, 2h, 1d or PT10S",
                    )
                })?;
                Ok(Some(duration))
            }
            None => Ok(None),
        }
    }
}
