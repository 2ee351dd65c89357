//! Error types for the Tessera object store.

use crate::object::ObjectId;
use crate::types::ScalarKind;
use crate::value::Value;
use alloc::string::String;
use thiserror::Error;

/// Result type alias for Tessera store operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for schema and store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A value does not fit the field's declared kind.
    #[error("Type mismatch on field {field}: expected {expected}, got {got:?}")]
    TypeMismatch {
        field: String,
        expected: ScalarKind,
        got: Value,
    },
    /// Null written to a non-nullable field.
    #[error("Null constraint violation on field: {field}")]
    NullConstraint { field: String },
    /// Unique constraint violation (primary key or unique index).
    #[error("Unique constraint violation on field {field}: {value:?}")]
    UniqueConstraint { field: String, value: Value },
    /// Object not found.
    #[error("Object {id} not found in type {type_name}")]
    NotFound { type_name: String, id: ObjectId },
    /// Invalid schema definition.
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },
    /// Field not declared on the type.
    #[error("Field {field} not found in type {type_name}")]
    FieldNotFound { type_name: String, field: String },
    /// Type not registered.
    #[error("Type not found: {name}")]
    TypeNotFound { name: String },
    /// Invalid operation.
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: ScalarKind, got: Value) -> Self {
        Error::TypeMismatch {
            field: field.into(),
            expected,
            got,
        }
    }

    /// Creates a null constraint error.
    pub fn null_constraint(field: impl Into<String>) -> Self {
        Error::NullConstraint { field: field.into() }
    }

    /// Creates a unique constraint error.
    pub fn unique_constraint(field: impl Into<String>, value: Value) -> Self {
        Error::UniqueConstraint {
            field: field.into(),
            value,
        }
    }

    /// Creates a not found error.
    pub fn not_found(type_name: impl Into<String>, id: ObjectId) -> Self {
        Error::NotFound {
            type_name: type_name.into(),
            id,
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a field not found error.
    pub fn field_not_found(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Error::FieldNotFound {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Creates a type not found error.
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Error::TypeNotFound { name: name.into() }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }
}
