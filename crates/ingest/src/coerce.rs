//! Coercion of JSON scalars to declared field kinds.
//!
//! Integral kinds take JSON integers within the declared width. `String` takes
//! JSON strings and JSON integers, the latter rendered in decimal. Nothing else
//! converts; there is no fallback.

use serde_json::{Number, Value as JsonValue};
use tessera_core::{ScalarKind, Value};

/// Longest rendering of an offending value kept in error messages.
const MAX_RENDERED_LEN: usize = 64;

/// Converts a non-null JSON value to `kind`, or None if it does not convert.
pub fn coerce(kind: ScalarKind, raw: &JsonValue) -> Option<Value> {
    match kind {
        ScalarKind::String => match raw {
            JsonValue::String(s) => Some(Value::String(s.clone())),
            JsonValue::Number(n) => integer_text(n).map(Value::String),
            _ => None,
        },
        _ => match raw {
            JsonValue::Number(n) => n.as_i64().and_then(|v| Value::integral(kind, v)),
            _ => None,
        },
    }
}

fn integer_text(n: &Number) -> Option<String> {
    if n.is_i64() || n.is_u64() {
        Some(n.to_string())
    } else {
        None
    }
}

/// Renders a JSON value for an error message, truncated on a char boundary.
pub fn render(raw: &JsonValue) -> String {
    let mut text = raw.to_string();
    if text.len() > MAX_RENDERED_LEN {
        let mut end = MAX_RENDERED_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        text.push_str("...");
    }
    text
}
