//! Transaction management for Tessera.
//!
//! Every mutation made through a `Transaction` is journaled, so the whole
//! transaction can be undone with `rollback`.

use crate::journal::{Journal, JournalEntry};
use crate::store::Store;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};
use tessera_core::{Error, Object, ObjectId, Result, Value};
use tracing::debug;

/// Global transaction ID counter.
static NEXT_TX_ID: AtomicU64 = AtomicU64::new(1);

/// Transaction ID type.
pub type TransactionId = u64;

/// Transaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionState {
    /// Transaction is active and can perform operations.
    Active,
    /// Transaction has been committed.
    Committed,
    /// Transaction has been rolled back.
    RolledBack,
}

/// A write transaction over a `Store`.
pub struct Transaction {
    id: TransactionId,
    journal: Journal,
    state: TransactionState,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn begin() -> Self {
        let id = NEXT_TX_ID.fetch_add(1, Ordering::SeqCst);
        debug!(tx = id, "transaction started");
        Self {
            id,
            journal: Journal::new(),
            state: TransactionState::Active,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Returns true if the transaction is active.
    pub fn is_active(&self) -> bool {
        self.state == TransactionState::Active
    }

    /// Checks if the transaction is active, returns error if not.
    pub fn check_active(&self) -> Result<()> {
        if self.state != TransactionState::Active {
            return Err(Error::invalid_operation("Transaction is not active"));
        }
        Ok(())
    }

    /// Creates an object holding default values.
    pub fn create_object(&mut self, store: &mut Store, type_name: &str) -> Result<ObjectId> {
        self.check_active()?;

        let id = store.type_mut(type_name)?.create_object()?;
        self.journal.record_create(type_name, id);
        Ok(id)
    }

    /// Creates an object with the given primary key, which may be null.
    pub fn create_object_with_key(
        &mut self,
        store: &mut Store,
        type_name: &str,
        key: Value,
    ) -> Result<ObjectId> {
        self.check_active()?;

        let id = store.type_mut(type_name)?.create_object_with_key(key)?;
        self.journal.record_create(type_name, id);
        Ok(id)
    }

    /// Writes one field. Returns whether the stored value changed.
    pub fn set_field(
        &mut self,
        store: &mut Store,
        type_name: &str,
        id: ObjectId,
        field: &str,
        value: Value,
    ) -> Result<bool> {
        self.check_active()?;

        let objects = store.type_mut(type_name)?;
        let old = objects.get_field(id, field)?;
        let changed = objects.set_field(id, field, value.clone())?;
        if changed {
            self.journal.record_update(type_name, id, field, old, value);
        }
        Ok(changed)
    }

    /// Deletes an object.
    pub fn delete(&mut self, store: &mut Store, type_name: &str, id: ObjectId) -> Result<Object> {
        self.check_active()?;

        let object = store.type_mut(type_name)?.delete(id)?;
        self.journal.record_delete(type_name, object.clone());
        Ok(object)
    }

    /// Commits the transaction.
    pub fn commit(mut self) -> Result<Vec<JournalEntry>> {
        self.check_active()?;
        self.state = TransactionState::Committed;
        let entries = self.journal.commit();
        debug!(tx = self.id, changes = entries.len(), "transaction committed");
        Ok(entries)
    }

    /// Rolls back the transaction.
    pub fn rollback(mut self, store: &mut Store) -> Result<()> {
        self.check_active()?;
        self.state = TransactionState::RolledBack;
        debug!(tx = self.id, changes = self.journal.len(), "transaction rolled back");
        self.journal.rollback(store)
    }

    /// Returns the journal entries.
    pub fn changes(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}
