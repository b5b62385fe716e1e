//! Recursive extraction over decoded JSON-LD blocks.
//!
//! Each check decodes the raw blocks itself via [`decode_blocks`]; a block
//! that fails to decode is counted, not silently swallowed, so "absent" and
//! "malformed" stay distinguishable downstream.

use std::collections::BTreeSet;

use serde_json::Value;

/// Depth bound for the tree walk. JSON-LD is not expected to nest anywhere
/// near this deep; the guard bounds the cost of pathological input.
const MAX_DEPTH: usize = 32;

/// Decoded JSON-LD blocks plus the number of blocks that failed to decode.
#[derive(Debug, Default)]
pub struct DecodedBlocks {
    pub values: Vec<Value>,
    pub malformed: usize,
}

impl DecodedBlocks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Try-decode every raw block; decode failures are tallied and skipped.
#[must_use]
pub fn decode_blocks(blocks: &[String]) -> DecodedBlocks {
    let mut decoded = DecodedBlocks::default();
    for block in blocks {
        match serde_json::from_str::<Value>(block) {
            Ok(value) => decoded.values.push(value),
            Err(_) => decoded.malformed += 1,
        }
    }
    decoded
}

/// Every `@type` found anywhere in the given values, lowercased and
/// deduplicated.
#[must_use]
pub fn collect_types(values: &[Value]) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    for value in values {
        walk_types(value, 0, &mut types);
    }
    types
}

fn walk_types(value: &Value, depth: usize, out: &mut BTreeSet<String>) {
    if depth > MAX_DEPTH {
        return;
    }
    match value {
        Value::Object(map) => {
            if let Some(type_value) = map.get("@type") {
                push_type_names(type_value, out);
            }
            for nested in map.values() {
                walk_types(nested, depth + 1, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_types(item, depth + 1, out);
            }
        }
        _ => {}
    }
}

fn push_type_names(type_value: &Value, out: &mut BTreeSet<String>) {
    match type_value {
        Value::String(name) => {
            out.insert(name.to_lowercase());
        }
        Value::Array(names) => {
            for name in names {
                if let Value::String(name) = name {
                    out.insert(name.to_lowercase());
                }
            }
        }
        _ => {}
    }
}

/// Whether any value carries the given `@type` (case-insensitive).
#[must_use]
pub fn has_type(values: &[Value], type_name: &str) -> bool {
    collect_types(values).contains(&type_name.to_lowercase())
}

/// Count nested entities under containers of a given type.
///
/// Finds every object whose `@type` matches `container_type`, then counts the
/// entries of its `list_key` member (array or single object) whose `@type`
/// matches `entity_type` or is absent. Returns `None` when no container of
/// that type exists at all, so callers can tell "schema absent" apart from
/// "schema present but empty".
#[must_use]
pub fn entity_count(
    values: &[Value],
    container_type: &str,
    list_key: &str,
    entity_type: &str,
) -> Option<usize> {
    let mut found_container = false;
    let mut count = 0;
    for value in values {
        walk_containers(
            value,
            0,
            &container_type.to_lowercase(),
            list_key,
            &entity_type.to_lowercase(),
            &mut found_container,
            &mut count,
        );
    }
    found_container.then_some(count)
}

fn walk_containers(
    value: &Value,
    depth: usize,
    container_type: &str,
    list_key: &str,
    entity_type: &str,
    found: &mut bool,
    count: &mut usize,
) {
    if depth > MAX_DEPTH {
        return;
    }
    match value {
        Value::Object(map) => {
            if object_has_type(map, container_type) {
                *found = true;
                if let Some(list) = map.get(list_key) {
                    *count += count_matching_entities(list, entity_type);
                }
            }
            for nested in map.values() {
                walk_containers(
                    nested,
                    depth + 1,
                    container_type,
                    list_key,
                    entity_type,
                    found,
                    count,
                );
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_containers(
                    item,
                    depth + 1,
                    container_type,
                    list_key,
                    entity_type,
                    found,
                    count,
                );
            }
        }
        _ => {}
    }
}

fn object_has_type(map: &serde_json::Map<String, Value>, type_name: &str) -> bool {
    let mut names = BTreeSet::new();
    if let Some(type_value) = map.get("@type") {
        push_type_names(type_value, &mut names);
    }
    names.contains(type_name)
}

fn count_matching_entities(list: &Value, entity_type: &str) -> usize {
    let items: Vec<&Value> = match list {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![list],
        _ => return 0,
    };
    items
        .into_iter()
        .filter(|item| {
            let Value::Object(map) = item else {
                return false;
            };
            // Lenient on missing @type: authors commonly omit it on entries.
            map.get("@type").is_none() || object_has_type(map, entity_type)
        })
        .count()
}

#[cfg(test)]
#[path = "jsonld_tests.rs"]
mod tests;
