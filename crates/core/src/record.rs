//! Structural comparisons over JSON-style records.
//!
//! Values compare recursively and by value. Numbers compare as numbers, so
//! `2` and `2.0` are equal. Objects compare by their entries, whatever order
//! their keys were inserted in.

use serde_json::{Map, Number, Value};

/// A flat key/value mapping.
pub type Record = Map<String, Value>;

#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => records_equal(x, y),
        _ => a == b,
    }
}

fn records_equal(a: &Record, b: &Record) -> bool {
    a.len() == b.len() && is_subset(a, b)
}

/// Whether every entry of `a` appears in `b` with an equal value.
///
/// Extra keys in `b` are ignored, and an empty `a` is a subset of anything.
#[must_use]
pub fn is_subset(a: &Record, b: &Record) -> bool {
    a.iter().all(|(key, value)| b.get(key).is_some_and(|other| values_equal(value, other)))
}

/// Records of `seq_a` that equal at least one record of `seq_b`.
///
/// Order and duplicates of `seq_a` are kept. Nothing from `seq_b` is returned.
///
/// ```
/// use fnkit_core::Record;
/// use serde_json::json;
///
/// let record = |value: serde_json::Value| -> Record {
///     value.as_object().cloned().unwrap_or_default()
/// };
/// let a = vec![record(json!({"id": 1})), record(json!({"id": 2})), record(json!({"id": 2}))];
/// let b = vec![record(json!({"id": 2.0})), record(json!({"id": 3}))];
/// assert_eq!(
///     fnkit_core::common_objects(&a, &b),
///     vec![record(json!({"id": 2})), record(json!({"id": 2}))]
/// );
/// ```
#[must_use]
pub fn common_objects(seq_a: &[Record], seq_b: &[Record]) -> Vec<Record> {
    seq_a
        .iter()
        .filter(|&item| seq_b.iter().any(|other| records_equal(item, other)))
        .cloned()
        .collect()
}
