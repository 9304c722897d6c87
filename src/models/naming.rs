//! The field-name mapping between Rust and wire names.
//!
//! `wire_name` and `local_name` are inverses for every field of every model
//! in this crate: lowercase `snake_case` words on one side, `camelCase` on
//! the other.

use serde_json::{Map, Value};

/// `outstanding_balance_amount` → `outstandingBalanceAmount`.
///
/// Names already in `camelCase` come back unchanged.
#[must_use]
pub fn wire_name(local: &str) -> String {
    let mut wire = String::with_capacity(local.len());
    let mut upper_next = false;

    for c in local.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            wire.extend(c.to_uppercase());
            upper_next = false;
        } else {
            wire.push(c);
        }
    }

    wire
}

/// `outstandingBalanceAmount` → `outstanding_balance_amount`.
#[must_use]
pub fn local_name(wire: &str) -> String {
    let mut local = String::with_capacity(wire.len() + 4);

    for c in wire.chars() {
        if c.is_uppercase() {
            local.push('_');
            local.extend(c.to_lowercase());
        } else {
            local.push(c);
        }
    }

    local
}

/// Renames every object key in `value` with [`wire_name`], recursing into
/// nested objects and arrays. Values are left untouched.
#[must_use]
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (wire_name(&key), camelize_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}
