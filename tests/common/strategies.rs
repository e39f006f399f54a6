use kafka_config::config::is_reserved_key;
use kafka_config::PropertyValue;
use proptest::prelude::*;

/// Strategy for dotted Kafka property keys
pub fn property_key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}(\\.[a-z][a-z0-9]{0,8}){0,3}"
        .prop_filter("key must not be reserved", |key| !is_reserved_key(key))
}

/// Strategy for keys inside a sibling section, including keys that only
/// share the leading letters (`embeddedFoo`)
pub fn reserved_key_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("embedded"),
            Just("consumers"),
            Just("producers"),
            Just("streams"),
        ],
        "[a-zA-Z0-9.]{0,16}",
    )
        .prop_map(|(section, rest)| format!("{section}{rest}"))
}

/// Strategy for non-null scalar property values
pub fn scalar_value_strategy() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        any::<bool>().prop_map(PropertyValue::Boolean),
        any::<i64>().prop_map(PropertyValue::Integer),
        "[a-zA-Z0-9:,._-]{0,24}".prop_map(PropertyValue::String),
    ]
}
