//! Error types for JSON ingestion.

use tessera_core::{ScalarKind, Value};
use thiserror::Error;

/// Result type alias for ingestion operations.
pub type Result<T> = core::result::Result<T, IngestError>;

/// Reasons a document is rejected.
///
/// Every variant is raised before the store is touched, except `Store`, which
/// wraps faults reported by the store itself.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input is not a JSON object.
    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },
    /// A non-nullable primary key is absent or null.
    #[error("Primary key {field} of {type_name} is required but missing or null")]
    NonNullablePrimaryKeyMissing { type_name: String, field: String },
    /// The primary key value cannot be coerced to its declared kind.
    #[error("Primary key {field} cannot hold {value} as {kind}")]
    KeyCoercionError {
        field: String,
        kind: ScalarKind,
        value: String,
    },
    /// A field value cannot be coerced to its declared kind.
    #[error("Field {field} cannot hold {value} as {kind}")]
    FieldCoercionError {
        field: String,
        kind: ScalarKind,
        value: String,
    },
    /// Explicit null for a field that does not accept null.
    #[error("Field {field} is not nullable")]
    NonNullableFieldSetToNull { field: String },
    /// Create mode found the key (or the null slot) already taken.
    #[error("Duplicate primary key in {type_name}: {key:?}")]
    DuplicatePrimaryKey { type_name: String, key: Value },
    /// The type is not registered in the store.
    #[error("Type not found: {name}")]
    UnknownType { name: String },
    #[error(transparent)]
    Store(#[from] tessera_core::Error),
}

impl IngestError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        IngestError::MalformedDocument {
            reason: reason.into(),
        }
    }
}
