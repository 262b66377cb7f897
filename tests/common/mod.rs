pub mod fixtures;

use loadplan::{TransformError, transform};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs the built-in transformation and parses the emitted text back into JSON.
pub fn transform_to_json(xml: &str) -> Result<Value, TransformError> {
    let text = transform(xml)?;
    Ok(serde_json::from_str(&text)?)
}

/// Top-level keys of an output object, in emitted order.
pub fn keys_of(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
