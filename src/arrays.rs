//! Operations over nested, array-like values
//!
//! Nested structures are represented as [`serde_json::Value`]. Objects keep their
//! insertion order, so flattening visits keys in the order they were inserted.

use crate::utils::validation::ensure_not_empty;
use serde_json::{Map, Value};

/// Flatten a nested value into a single-level map of joined key paths.
///
/// Keys are built by joining the parent key (or the position, for arrays) and the
/// child key with `separator`. A non-empty `prefix` is prepended to every key.
/// Empty arrays and objects contribute no entries.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use toolbelt::arrays::flatten;
///
/// let flat = flatten(&json!({"a": {"b": 1, "c": [2, 3]}}), ".", "");
/// assert_eq!(flat["a.b"], json!(1));
/// assert_eq!(flat["a.c.1"], json!(3));
/// ```
pub fn flatten(value: &Value, separator: &str, prefix: &str) -> Map<String, Value> {
    let mut result = Map::new();
    flatten_into(value, separator, prefix, &mut result);
    result
}

fn flatten_into(value: &Value, separator: &str, prefix: &str, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join_key(prefix, separator, key);
                flatten_into(child, separator, &path, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let path = join_key(prefix, separator, &index.to_string());
                flatten_into(child, separator, &path, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), leaf.clone());
        }
    }
}

fn join_key(prefix: &str, separator: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}

/// Rebuild a nested value from a map produced by [`flatten`].
///
/// Objects whose keys are exactly `0..n` are turned back into arrays.
pub fn unflatten(flat: &Map<String, Value>, separator: &str) -> Value {
    let mut root = Value::Object(Map::new());
    for (key, value) in flat {
        let segments = split_path(key, separator);
        insert_path(&mut root, &segments, value.clone());
    }
    into_arrays(root)
}

/// An empty separator keeps the whole path as one segment
fn split_path<'a>(path: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        vec![path]
    } else {
        path.split(separator).collect()
    }
}

fn insert_path(target: &mut Value, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *target = value;
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let child = map
            .entry(first.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if rest.is_empty() {
            *child = value;
        } else {
            insert_path(child, rest, value);
        }
    }
}

fn into_arrays(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sequential = !map.is_empty()
                && map
                    .keys()
                    .enumerate()
                    .all(|(index, key)| is_index_key(key, index));
            if sequential {
                Value::Array(map.into_iter().map(|(_, v)| into_arrays(v)).collect())
            } else {
                Value::Object(map.into_iter().map(|(k, v)| (k, into_arrays(v))).collect())
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(into_arrays).collect()),
        leaf => leaf,
    }
}

/// Only the canonical spelling counts; `"00"` or `"+0"` stay object keys
fn is_index_key(key: &str, index: usize) -> bool {
    key == index.to_string()
}

fn parse_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| is_index_key(segment, *index))
}

/// Apply `transform` to every leaf of a nested value, preserving its structure.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use toolbelt::arrays::deep_map;
///
/// let doubled = deep_map(&json!({"a": [1, 2]}), |v| json!(v.as_i64().unwrap_or(0) * 2));
/// assert_eq!(doubled, json!({"a": [2, 4]}));
/// ```
pub fn deep_map<F>(value: &Value, mut transform: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    deep_map_with(value, &mut transform)
}

fn deep_map_with<F>(value: &Value, transform: &mut F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), deep_map_with(child, transform)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|child| deep_map_with(child, transform))
                .collect(),
        ),
        leaf => transform(leaf),
    }
}

/// Look up a value by a `separator`-joined path
pub fn get<'a>(value: &'a Value, path: &str, separator: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    split_path(path, separator)
        .into_iter()
        .try_fold(value, |current, segment| child(current, segment))
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

pub fn has(value: &Value, path: &str, separator: &str) -> bool {
    get(value, path, separator).is_some()
}

/// Set a value at a `separator`-joined path, creating intermediate objects.
///
/// Existing array positions are updated in place; any other non-object on the way
/// is replaced by an object.
pub fn set(value: &mut Value, path: &str, separator: &str, new_value: Value) -> crate::Result<()> {
    ensure_not_empty("path", path)?;

    let mut current = value;
    for segment in split_path(path, separator) {
        let slot = current;
        let position = match (&*slot, parse_index(segment)) {
            (Value::Array(items), Some(i)) if i < items.len() => Some(i),
            _ => None,
        };
        current = match position {
            Some(i) => &mut slot[i],
            None => {
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                &mut slot[segment]
            }
        };
    }
    *current = new_value;
    Ok(())
}

/// Objects are associative, arrays and scalars are not
pub fn is_assoc(value: &Value) -> bool {
    value.is_object()
}

/// Collect the value stored under `key` in each object of `values`
pub fn pluck(values: &[Value], key: &str) -> Vec<Value> {
    values
        .iter()
        .filter_map(|item| item.get(key).cloned())
        .collect()
}

/// Keep only the listed keys of an object
pub fn only(object: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Drop the listed keys of an object
pub fn except(object: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Recursively remove nulls, empty strings and containers left empty
pub fn remove_empty(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), remove_empty(child)))
                .filter(|(_, child)| !is_empty_value(child))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(remove_empty)
                .filter(|child| !is_empty_value(child))
                .collect(),
        ),
        leaf => leaf.clone(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
