//! Journal for tracking changes in Tessera.
//!
//! This module provides the `Journal` struct for recording the changes made
//! within a transaction so they can be reported on commit or undone on rollback.

use crate::store::Store;
use alloc::string::String;
use alloc::vec::Vec;
use tessera_core::{Object, ObjectId, Result, Value};

/// A single journal entry representing a change.
#[derive(Clone, Debug, PartialEq)]
pub enum JournalEntry {
    /// An object was created.
    Create { type_name: String, id: ObjectId },
    /// One field of an object was written.
    Update {
        type_name: String,
        id: ObjectId,
        field: String,
        old: Value,
        new: Value,
    },
    /// An object was deleted.
    Delete { type_name: String, object: Object },
}

impl JournalEntry {
    /// Returns the type name for this entry.
    pub fn type_name(&self) -> &str {
        match self {
            JournalEntry::Create { type_name, .. } => type_name,
            JournalEntry::Update { type_name, .. } => type_name,
            JournalEntry::Delete { type_name, .. } => type_name,
        }
    }

    /// Returns the object ID for this entry.
    pub fn object_id(&self) -> ObjectId {
        match self {
            JournalEntry::Create { id, .. } => *id,
            JournalEntry::Update { id, .. } => *id,
            JournalEntry::Delete { object, .. } => object.id(),
        }
    }
}

/// Journal recording the changes of one transaction, in order.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Creates a new empty journal.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records an object creation.
    pub fn record_create(&mut self, type_name: &str, id: ObjectId) {
        self.entries.push(JournalEntry::Create {
            type_name: type_name.into(),
            id,
        });
    }

    /// Records a field write.
    pub fn record_update(
        &mut self,
        type_name: &str,
        id: ObjectId,
        field: &str,
        old: Value,
        new: Value,
    ) {
        self.entries.push(JournalEntry::Update {
            type_name: type_name.into(),
            id,
            field: field.into(),
            old,
            new,
        });
    }

    /// Records an object deletion.
    pub fn record_delete(&mut self, type_name: &str, object: Object) {
        self.entries.push(JournalEntry::Delete {
            type_name: type_name.into(),
            object,
        });
    }

    /// Returns all journal entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commits the journal, handing back the recorded changes.
    pub fn commit(&mut self) -> Vec<JournalEntry> {
        core::mem::take(&mut self.entries)
    }

    /// Undoes every recorded change against the store, newest first.
    pub fn rollback(&mut self, store: &mut Store) -> Result<()> {
        while let Some(entry) = self.entries.pop() {
            match entry {
                JournalEntry::Create { type_name, id } => {
                    store.type_mut(&type_name)?.delete(id)?;
                }
                JournalEntry::Update {
                    type_name,
                    id,
                    field,
                    old,
                    ..
                } => {
                    store.type_mut(&type_name)?.set_field(id, &field, old)?;
                }
                JournalEntry::Delete { type_name, object } => {
                    store.type_mut(&type_name)?.insert(object)?;
                }
            }
        }
        Ok(())
    }
}
