//! Response envelope traversal.
//!
//! Every provider response wraps its data as `tasks[*].result[*].items[*]`.
//! Any level may be missing, null or of the wrong type; all of those read as empty.

use serde_json::{Map, Value};

/// Returns the array under `key`, or an empty slice.
pub(crate) fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Iterates over the `result` entries of every task.
pub fn task_results(response: &Value) -> impl Iterator<Item = &Value> {
    array(response, "tasks")
        .iter()
        .flat_map(|task| array(task, "result").iter())
}

/// Iterates over the `items` of every result of every task.
pub fn result_items(response: &Value) -> impl Iterator<Item = &Value> {
    task_results(response).flat_map(|result| array(result, "items").iter())
}

/// First result object of the first task that has one.
pub fn first_result(response: &Value) -> Option<&Map<String, Value>> {
    array(response, "tasks")
        .iter()
        .find_map(|task| array(task, "result").first())
        .and_then(Value::as_object)
}
