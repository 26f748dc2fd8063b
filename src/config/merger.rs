//! Layering of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences are replaced entirely, so an overlay `packages:` list is the
//!   complete list
//! - A `null` in the overlay removes the key, restoring the built-in default
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base`, consuming both.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Mapping(base_map)
        }
        // An empty file parses to null and contributes nothing.
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Merge layers in order; later layers take precedence.
pub fn merge_configs<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers
        .into_iter()
        .fold(Value::Mapping(Mapping::new()), deep_merge)
}
