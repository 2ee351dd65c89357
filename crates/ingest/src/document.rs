//! Read-only view of a decoded JSON document.
//!
//! A field named by the schema is in exactly one of three states: present with a
//! non-null value, explicitly null, or absent. The view derives that state once
//! and never coerces.

use crate::error::{IngestError, Result};
use serde_json::{Map, Value as JsonValue};

/// State of one field in a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldState<'a> {
    /// The field carries a non-null value.
    Present(&'a JsonValue),
    /// The field is present with the value `null`.
    ExplicitNull,
    /// The field does not appear in the document.
    Absent,
}

/// A JSON object viewed field by field.
#[derive(Clone, Copy, Debug)]
pub struct DocumentView<'a> {
    fields: &'a Map<String, JsonValue>,
}

impl<'a> DocumentView<'a> {
    /// Wraps a decoded document. Fails unless the top level is an object.
    pub fn new(document: &'a JsonValue) -> Result<Self> {
        match document {
            JsonValue::Object(fields) => Ok(Self { fields }),
            other => Err(IngestError::malformed(format!(
                "expected a JSON object, found {}",
                json_type_name(other)
            ))),
        }
    }

    /// Returns the state of the named field.
    pub fn field_state(&self, name: &str) -> FieldState<'a> {
        match self.fields.get(name) {
            None => FieldState::Absent,
            Some(JsonValue::Null) => FieldState::ExplicitNull,
            Some(value) => FieldState::Present(value),
        }
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_states() {
        let doc = json!({ "id": null, "name": "OhThisIsNullKey?!", "age": 3 });
        let view = DocumentView::new(&doc).unwrap();

        assert_eq!(view.field_state("id"), FieldState::ExplicitNull);
        assert_eq!(
            view.field_state("name"),
            FieldState::Present(&json!("OhThisIsNullKey?!"))
        );
        assert_eq!(view.field_state("age"), FieldState::Present(&json!(3)));
        assert_eq!(view.field_state("missing"), FieldState::Absent);
    }

    #[test]
    fn test_field_names_are_exact() {
        let doc = json!({ "Id": 1, "id ": 2 });
        let view = DocumentView::new(&doc).unwrap();
        assert_eq!(view.field_state("id"), FieldState::Absent);
    }

    #[test]
    fn test_rejects_non_objects() {
        for doc in [json!([1, 2]), json!("x"), json!(42), json!(null), json!(true)] {
            let err = DocumentView::new(&doc).unwrap_err();
            assert!(matches!(err, IngestError::MalformedDocument { .. }));
        }
    }

    #[test]
    fn test_empty_object() {
        let doc = json!({});
        let view = DocumentView::new(&doc).unwrap();
        assert_eq!(view.field_state("id"), FieldState::Absent);
        assert_eq!(view.field_state(""), FieldState::Absent);
    }
}
