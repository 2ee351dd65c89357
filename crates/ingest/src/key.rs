//! Primary key resolution.

use crate::coerce::{coerce, render};
use crate::document::{DocumentView, FieldState};
use crate::error::{IngestError, Result};
use tessera_core::schema::ObjectSchema;
use tessera_core::{ScalarKind, Value};

/// The primary key a document addresses.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyDecision {
    /// The type declares no primary key.
    NoKeyField,
    /// The key value; `Value::Null` addresses the null-key slot.
    Key { kind: ScalarKind, value: Value },
}

impl KeyDecision {
    /// Returns the key value, if the type has a key.
    pub fn value(&self) -> Option<&Value> {
        match self {
            KeyDecision::NoKeyField => None,
            KeyDecision::Key { value, .. } => Some(value),
        }
    }
}

/// Determines and coerces the primary key a document addresses.
///
/// Absent and explicit null are the same for nullable key kinds. A non-nullable
/// key never falls back to its default.
pub fn resolve_key(schema: &ObjectSchema, document: &DocumentView<'_>) -> Result<KeyDecision> {
    let Some(pk) = schema.primary_key() else {
        return Ok(KeyDecision::NoKeyField);
    };
    let kind = pk.kind();

    match document.field_state(pk.name()) {
        FieldState::Absent | FieldState::ExplicitNull => {
            if !pk.is_nullable() {
                return Err(IngestError::NonNullablePrimaryKeyMissing {
                    type_name: schema.name().into(),
                    field: pk.name().into(),
                });
            }
            Ok(KeyDecision::Key {
                kind,
                value: Value::Null,
            })
        }
        FieldState::Present(raw) => match coerce(kind, raw) {
            Some(value) => Ok(KeyDecision::Key { kind, value }),
            None => Err(IngestError::KeyCoercionError {
                field: pk.name().into(),
                kind,
                value: render(raw),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_core::schema::SchemaBuilder;

    fn keyed(kind: ScalarKind) -> ObjectSchema {
        SchemaBuilder::new("Keyed")
            .unwrap()
            .add_field("id", kind)
            .unwrap()
            .add_field("name", ScalarKind::String)
            .unwrap()
            .add_primary_key("id")
            .unwrap()
            .build()
            .unwrap()
    }

    fn resolve(schema: &ObjectSchema, doc: serde_json::Value) -> Result<KeyDecision> {
        resolve_key(schema, &DocumentView::new(&doc)?)
    }

    #[test]
    fn test_no_key_field() {
        let schema = SchemaBuilder::new("Plain")
            .unwrap()
            .add_field("name", ScalarKind::String)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(resolve(&schema, json!({ "id": 1 })).unwrap(), KeyDecision::NoKeyField);
    }

    #[test]
    fn test_null_and_absent_agree() {
        let schema = keyed(ScalarKind::BoxedShort);
        let null = resolve(&schema, json!({ "id": null, "name": "a" })).unwrap();
        let absent = resolve(&schema, json!({ "name": "a" })).unwrap();

        assert_eq!(null, absent);
        assert_eq!(null.value(), Some(&Value::Null));
    }

    #[test]
    fn test_value_key() {
        let schema = keyed(ScalarKind::BoxedByte);
        let key = resolve(&schema, json!({ "id": 12 })).unwrap();
        assert_eq!(
            key,
            KeyDecision::Key {
                kind: ScalarKind::BoxedByte,
                value: Value::Byte(12)
            }
        );
        assert_ne!(key.value(), Some(&Value::Null));
    }

    #[test]
    fn test_primitive_key_required() {
        let schema = keyed(ScalarKind::PrimitiveLong);
        for doc in [json!({ "id": null }), json!({ "name": "x" })] {
            assert!(matches!(
                resolve(&schema, doc),
                Err(IngestError::NonNullablePrimaryKeyMissing { ref field, .. }) if field == "id"
            ));
        }
        assert_eq!(
            resolve(&schema, json!({ "id": 0 })).unwrap().value(),
            Some(&Value::Long(0))
        );
    }

    #[test]
    fn test_key_coercion_errors() {
        let schema = keyed(ScalarKind::BoxedByte);
        let err = resolve(&schema, json!({ "id": 1000 })).unwrap_err();
        assert!(matches!(
            err,
            IngestError::KeyCoercionError {
                ref value,
                kind: ScalarKind::BoxedByte,
                ..
            } if value == "1000"
        ));
        assert!(resolve(&schema, json!({ "id": "12" })).is_err());
    }

    #[test]
    fn test_string_key_from_integer() {
        let schema = keyed(ScalarKind::String);
        let key = resolve(&schema, json!({ "name": null, "id": 4299121 })).unwrap();
        assert_eq!(key.value(), Some(&Value::from("4299121")));
    }
}
