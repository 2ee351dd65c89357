//! Index trait definitions for Tessera.
//!
//! This module defines the core `Index` trait that point indexes implement.

use alloc::vec::Vec;
use tessera_core::ObjectId;
use thiserror::Error;

/// Core trait for point indexes.
pub trait Index<K> {
    /// Adds a key-object pair to the index.
    /// For unique indexes, this will fail if the key already exists.
    fn add(&mut self, key: K, value: ObjectId) -> Result<(), IndexError>;

    /// Gets all object IDs associated with a key.
    fn get(&self, key: &K) -> Vec<ObjectId>;

    /// Removes a key (and optionally a specific value) from the index.
    /// If value is None, removes all values for the key.
    fn remove(&mut self, key: &K, value: Option<ObjectId>);

    /// Checks if the index contains the given key.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns the number of entries in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entries from the index.
    fn clear(&mut self);
}

/// Error type for index operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Attempted to insert a duplicate key in a unique index.
    #[error("Duplicate key in unique index")]
    DuplicateKey,
    /// Attempted to occupy the null-key slot while another object holds it.
    #[error("Null key slot already occupied by object {0}")]
    DuplicateNullKey(ObjectId),
}
