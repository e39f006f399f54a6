//! Duration parsing for time-valued settings such as `health-timeout`.
//!
//! Accepted forms:
//!
//! - `250ms`, `10s`, `5m`, `2h`, `1d`
//! - a bare integer, read as seconds
//! - ISO-8601 time durations with integer components: `PT10S`, `PT1M30S`, `PT2H`

use super::error::{ConfigResult, ConfigurationError};
use super::value::PropertyValue;
use std::time::Duration;

const EXPECTED_FORMAT: &str = "expected a duration such as 250ms, 10s, 5m, 2h, 1d or PT10S";

/// Parse a textual duration
pub fn parse_duration(input: &str) -> ConfigResult<Duration> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input));
    }

    if let Some(iso) = trimmed
        .strip_prefix("PT")
        .or_else(|| trimmed.strip_prefix("pt"))
    {
        return parse_iso8601(iso).ok_or_else(|| invalid(input));
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    let amount: u64 = digits.parse().map_err(|_| invalid(input))?;

    let duration = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" => Some(Duration::from_secs(amount)),
        "ms" => Some(Duration::from_millis(amount)),
        "m" => amount.checked_mul(60).map(Duration::from_secs),
        "h" => amount.checked_mul(3_600).map(Duration::from_secs),
        "d" => amount.checked_mul(86_400).map(Duration::from_secs),
        _ => None,
    };

    duration.ok_or_else(|| invalid(input))
}

/// Read a duration from a typed property value: integers are seconds,
/// strings go through [`parse_duration`].
pub fn duration_from_value(value: &PropertyValue) -> ConfigResult<Duration> {
    match value {
        PropertyValue::Integer(secs) => u64::try_from(*secs)
            .map(Duration::from_secs)
            .map_err(|_| invalid(&secs.to_string())),
        PropertyValue::String(s) => parse_duration(s),
        other => Err(invalid(&other.to_property_string())),
    }
}

/// `1H30M10S` style remainder after the `PT` designator
fn parse_iso8601(rest: &str) -> Option<Duration> {
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut last_rank = 0u8;

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let (rank, multiplier) = match c.to_ascii_uppercase() {
            'H' => (1, 3_600),
            'M' => (2, 60),
            'S' => (3, 1),
            _ => return None,
        };
        // Components must appear once each, in H, M, S order
        if digits.is_empty() || rank <= last_rank {
            return None;
        }
        last_rank = rank;

        let amount: u64 = digits.parse().ok()?;
        total = total.checked_add(amount.checked_mul(multiplier)?)?;
        digits.clear();
    }

    if !digits.is_empty() {
        return None;
    }
    Some(Duration::from_secs(total))
}

fn invalid(value: &str) -> ConfigurationError {
    ConfigurationError::invalid_value("health-timeout", value, EXPECTED_FORMAT)
}
