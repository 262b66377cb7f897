//! Dotted output paths and the writer that places values into a JSON record.
use crate::error::TransformError;
use serde_json::{Map, Value};
use std::fmt;

/// Largest array index an output path may address. Arrays are padded up to the index,
/// so this bounds the allocation a mapping table can ask for.
pub const MAX_ARRAY_INDEX: usize = 4096;

/// One step of an output path. All-digit segments address array elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKey {
    Field(String),
    Index(usize),
}

/// A validated output location such as `stops.0.loadorderdetails.shipmentorderid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    source: String,
    keys: Vec<OutputKey>,
}

impl OutputPath {
    pub fn parse(input: &str) -> Result<Self, TransformError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(TransformError::mapping(input, "output path is empty"));
        }

        let keys = source
            .split('.')
            .map(|key| {
                if key.is_empty() {
                    Err(TransformError::mapping(source, "output path has an empty segment"))
                } else if key.bytes().all(|b| b.is_ascii_digit()) {
                    match key.parse::<usize>() {
                        Ok(index) if index <= MAX_ARRAY_INDEX => Ok(OutputKey::Index(index)),
                        _ => Err(TransformError::mapping(
                            source,
                            format!("index '{}' exceeds the limit of {}", key, MAX_ARRAY_INDEX),
                        )),
                    }
                } else {
                    Ok(OutputKey::Field(key.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if matches!(keys.first(), Some(OutputKey::Index(_))) {
            return Err(TransformError::mapping(
                source,
                "output path must start with a field name",
            ));
        }

        Ok(Self {
            source: source.to_string(),
            keys,
        })
    }

    pub fn keys(&self) -> &[OutputKey] {
        &self.keys
    }
}

impl fmt::Display for OutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Writes `value` at `path` inside `target`, creating objects and arrays on the way.
///
/// Arrays are padded with empty objects up to the addressed index. An existing value
/// of the wrong shape is replaced by the container the path needs.
pub fn set_nested_value(target: &mut Value, path: &OutputPath, value: Value) {
    let mut slot = target;
    for key in path.keys() {
        slot = child_slot(slot, key, path);
    }
    *slot = value;
}

fn child_slot<'v>(slot: &'v mut Value, key: &OutputKey, path: &OutputPath) -> &'v mut Value {
    match key {
        OutputKey::Field(name) => {
            if !slot.is_object() {
                replace_with_container(slot, Value::Object(Map::new()), path);
            }
            &mut slot[name.as_str()]
        }
        OutputKey::Index(index) => {
            if !slot.is_array() {
                replace_with_container(slot, Value::Array(Vec::new()), path);
            }
            if let Value::Array(items) = slot
                && items.len() <= *index
            {
                items.resize_with(index + 1, || Value::Object(Map::new()));
            }
            &mut slot[*index]
        }
    }
}

fn replace_with_container(slot: &mut Value, container: Value, path: &OutputPath) {
    if !slot.is_null() {
        log::warn!(
            "Output path '{}' replaces existing value {} with a container",
            path,
            slot
        );
    }
    *slot = container;
}
