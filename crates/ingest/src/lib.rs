//! Tessera Ingest - JSON document ingestion for the Tessera object store.
//!
//! Documents are materialized into typed objects of a registered type. The
//! type's primary key decides whether a document creates a new object or updates
//! the one already holding that key; a nullable key may be null, and at most one
//! object per type holds the null key.
//!
//! - `DocumentView`: tri-state (present / explicit null / absent) field access
//! - `resolve_key`: primary key extraction and coercion
//! - `UpsertEngine`: target selection and validated writes
//! - `FieldWriter`: per-field coercion and slot writes
//! - `Importer`: entry points bound to a store and a caller-held transaction
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tessera_core::schema::SchemaBuilder;
//! use tessera_core::{ScalarKind, Value};
//! use tessera_ingest::Importer;
//! use tessera_storage::{Store, Transaction};
//!
//! let mut store = Store::new();
//! store
//!     .create_type(
//!         SchemaBuilder::new("PrimaryKeyAsBoxedLong")
//!             .unwrap()
//!             .add_field("id", ScalarKind::BoxedLong)
//!             .unwrap()
//!             .add_field("name", ScalarKind::String)
//!             .unwrap()
//!             .add_primary_key("id")
//!             .unwrap()
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mut tx = Transaction::begin();
//! let mut importer = Importer::new(&mut store, &mut tx);
//! let first = importer
//!     .import_upsert("PrimaryKeyAsBoxedLong", &json!({ "id": null, "name": "a" }))
//!     .unwrap();
//! let second = importer
//!     .import_upsert_str("PrimaryKeyAsBoxedLong", r#"{ "name": "b" }"#)
//!     .unwrap();
//! assert_eq!(first, second);
//! tx.commit().unwrap();
//!
//! let objects = store.get_type("PrimaryKeyAsBoxedLong").unwrap();
//! assert_eq!(objects.len(), 1);
//! assert_eq!(objects.get_field(first, "name").unwrap(), Value::from("b"));
//! ```

pub mod coerce;
pub mod document;
mod error;
pub mod key;
pub mod upsert;
pub mod writer;

pub use document::{DocumentView, FieldState};
pub use error::{IngestError, Result};
pub use key::{resolve_key, KeyDecision};
pub use upsert::{ImportMode, Target, UpsertEngine};
pub use writer::{FieldWrite, FieldWriter};

use serde_json::Value as JsonValue;
use tessera_core::ObjectId;
use tessera_storage::{Store, Transaction};

/// Imports documents into a store within a caller-held write transaction.
///
/// Documents apply in call order and see the writes of earlier documents. A
/// rejected document changes nothing; the transaction stays open and its owner
/// decides whether to commit or roll back.
pub struct Importer<'a> {
    store: &'a mut Store,
    tx: &'a mut Transaction,
}

impl<'a> Importer<'a> {
    pub fn new(store: &'a mut Store, tx: &'a mut Transaction) -> Self {
        Self { store, tx }
    }

    /// Imports one decoded document in the given mode.
    pub fn import(
        &mut self,
        type_name: &str,
        document: &JsonValue,
        mode: ImportMode,
    ) -> Result<ObjectId> {
        UpsertEngine::import(self.store, self.tx, type_name, document, mode)
    }

    /// Creates a new object from a document.
    pub fn import_create(&mut self, type_name: &str, document: &JsonValue) -> Result<ObjectId> {
        self.import(type_name, document, ImportMode::Create)
    }

    /// Updates the object holding the document's key, or creates one.
    pub fn import_upsert(&mut self, type_name: &str, document: &JsonValue) -> Result<ObjectId> {
        self.import(type_name, document, ImportMode::CreateOrUpdate)
    }

    /// Parses JSON text, then behaves like `import_create`.
    pub fn import_create_str(&mut self, type_name: &str, json: &str) -> Result<ObjectId> {
        let document = parse(json)?;
        self.import_create(type_name, &document)
    }

    /// Parses JSON text, then behaves like `import_upsert`.
    pub fn import_upsert_str(&mut self, type_name: &str, json: &str) -> Result<ObjectId> {
        let document = parse(json)?;
        self.import_upsert(type_name, &document)
    }

    /// Imports each document in order, stopping at the first rejection.
    ///
    /// Documents before the rejected one stay applied.
    pub fn import_all<'d>(
        &mut self,
        type_name: &str,
        documents: impl IntoIterator<Item = &'d JsonValue>,
        mode: ImportMode,
    ) -> Result<Vec<ObjectId>> {
        documents
            .into_iter()
            .map(|document| self.import(type_name, document, mode))
            .collect()
    }

    pub fn store(&self) -> &Store {
        self.store
    }
}

fn parse(json: &str) -> Result<JsonValue> {
    serde_json::from_str(json).map_err(|e| IngestError::malformed(e.to_string()))
}
