//! Primary-key driven create and create-or-update.
//!
//! A document first resolves to a key, then to a target object, and only then
//! touches the store. Every check that can reject the document runs before the
//! first mutation, so a rejected document leaves the store as it was.

use crate::document::DocumentView;
use crate::error::{IngestError, Result};
use crate::key::{resolve_key, KeyDecision};
use crate::writer::FieldWriter;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tessera_core::ObjectId;
use tessera_storage::{ObjectStore, Store, Transaction};
use tracing::debug;

/// How a document relates to existing objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Always create; an occupied key is an error.
    #[default]
    Create,
    /// Update the object holding the key, or create one.
    CreateOrUpdate,
}

/// The object a document is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Existing(ObjectId),
    New,
}

/// Chooses the target object for a resolved key.
pub fn locate(mode: ImportMode, objects: &ObjectStore, key: &KeyDecision) -> Result<Target> {
    let value = match key {
        KeyDecision::NoKeyField => return Ok(Target::New),
        KeyDecision::Key { value, .. } => value,
    };
    let holder = objects.find_by_key(value);

    match (mode, holder) {
        (ImportMode::Create, Some(_)) => Err(IngestError::DuplicatePrimaryKey {
            type_name: objects.type_name().into(),
            key: value.clone(),
        }),
        (ImportMode::CreateOrUpdate, Some(id)) => Ok(Target::Existing(id)),
        (_, None) => Ok(Target::New),
    }
}

/// Runs documents against the store inside a caller-held transaction.
pub struct UpsertEngine;

impl UpsertEngine {
    /// Applies one document to `type_name`. Returns the created or updated object.
    pub fn import(
        store: &mut Store,
        tx: &mut Transaction,
        type_name: &str,
        document: &JsonValue,
        mode: ImportMode,
    ) -> Result<ObjectId> {
        tx.check_active()?;

        let objects = store
            .get_type(type_name)
            .ok_or_else(|| IngestError::UnknownType {
                name: type_name.into(),
            })?;
        let schema = Arc::clone(objects.schema());

        let view = DocumentView::new(document)?;
        let key = resolve_key(&schema, &view)?;
        let writes = FieldWriter::prepare_all(&schema, &view)?;
        let target = locate(mode, objects, &key)?;

        let id = match (target, &key) {
            (Target::Existing(id), _) => {
                debug!(type_name, id, ?mode, key = ?key.value(), "matched existing object");
                id
            }
            (Target::New, KeyDecision::NoKeyField) => {
                let id = tx.create_object(store, type_name)?;
                debug!(type_name, id, ?mode, "created object without key");
                id
            }
            (Target::New, KeyDecision::Key { value, .. }) => {
                let id = tx.create_object_with_key(store, type_name, value.clone())?;
                debug!(type_name, id, ?mode, key = ?value, "created object");
                id
            }
        };

        let changed = FieldWriter::apply(tx, store, type_name, id, writes)?;
        debug!(type_name, id, changed, "document applied");
        Ok(id)
    }
}
