//! # Structured Logging Module
//!
//! Environment-aware structured logging for configuration loading. Console
//! output by default, JSON lines when `APP_LOG_FORMAT=json`.
//! `RUST_LOG` overrides the environment-derived level.

use crate::constants::{ENVIRONMENT_VARIABLES, LOG_FORMAT_VARIABLE};
use chrono::Utc;
use std::sync::OnceLock;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let json = use_json_format();

        let filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level))
        };

        let console_layer = (!json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter())
        });
        let json_layer = json.then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter())
        });

        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(json_layer);

        // Embedding applications may already own the global subscriber
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            json = json,
            "Structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    ENVIRONMENT_VARIABLES
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .unwrap_or_else(|| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn use_json_format() -> bool {
    std::env::var(LOG_FORMAT_VARIABLE)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log structured data for a configuration load
pub fn log_config_operation(
    operation: &str,
    prefix: &str,
    property_count: usize,
    bootstrap_servers: Option<&str>,
    health_timeout: Duration,
) {
    tracing::info!(
        operation = %operation,
        prefix = %prefix,
        property_count = property_count,
        bootstrap_servers = bootstrap_servers,
        health_timeout = ?health_timeout,
        timestamp = %Utc::now().to_rfc3339(),
        "KAFKA_CONFIG_OPERATION"
    );
}
