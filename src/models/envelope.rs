// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response normalization.
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope `{ "count": .., "next": .., "results": [..] }`. Both collapse to
//! one ordered record sequence here.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the record sequence from a list response body.
///
/// Array → itself; object → its `results` array (empty if absent or not an
/// array); any other JSON value → empty.
pub fn into_records(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Decode records into a typed view model, one output per input.
///
/// A record that isn't an object still occupies its row and renders with
/// every field missing.
pub fn decode_records<T>(records: Vec<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            serde_json::from_value(record).unwrap_or_else(|err| {
                tracing::debug!(position, error = %err, "Record is not an object, rendering empty row");
                T::default()
            })
        })
        .collect()
}
