//! Small helpers for reading typed values out of a layout's open-shaped
//! config dictionary (spec §9 "dynamic configuration dictionaries").

use std::collections::HashMap;

use serde_json::Value;

pub fn f64_or(config: &HashMap<String, Value>, key: &str, default: f64) -> f64 {
    config.get(key).and_then(Value::as_f64).unwrap_or(default)
}

pub fn u64_or(config: &HashMap<String, Value>, key: &str, default: u64) -> u64 {
    config.get(key).and_then(Value::as_u64).unwrap_or(default)
}

pub fn str_or<'a>(config: &'a HashMap<String, Value>, key: &str, default: &'a str) -> &'a str {
    config
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
}
