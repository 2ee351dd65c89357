//! Unique key index with a reserved null slot.
//!
//! Primary keys of nullable kinds may be null, and all null keys compare equal for
//! uniqueness. Rather than hashing null into the key space, the index keeps one
//! dedicated slot for the single object whose key is null.

use crate::hash::HashIndex;
use crate::traits::{Index, IndexError};
use tessera_core::ObjectId;

/// A unique index over non-null keys plus one optional null-key occupant.
///
/// A key of `None` addresses the null slot.
#[derive(Debug)]
pub struct UniqueKeyIndex<K> {
    /// Non-null keys, each mapped to exactly one object.
    inner: HashIndex<K>,
    /// The object whose key is null, if any.
    null_slot: Option<ObjectId>,
}

impl<K: Eq + core::hash::Hash + Clone> UniqueKeyIndex<K> {
    pub fn new() -> Self {
        Self {
            inner: HashIndex::new(true),
            null_slot: None,
        }
    }

    /// Registers `id` under `key`. Fails if the key, or the null slot, is taken.
    pub fn insert(&mut self, key: Option<K>, id: ObjectId) -> Result<(), IndexError> {
        match key {
            Some(key) => self.inner.add(key, id),
            None => match self.null_slot {
                Some(occupant) => Err(IndexError::DuplicateNullKey(occupant)),
                None => {
                    self.null_slot = Some(id);
                    Ok(())
                }
            },
        }
    }

    /// Finds the object holding `key`.
    pub fn find(&self, key: Option<&K>) -> Option<ObjectId> {
        match key {
            Some(key) => self.inner.get(key).first().copied(),
            None => self.null_slot,
        }
    }

    /// Returns whether `key` is held by some object.
    pub fn contains(&self, key: Option<&K>) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` if it is held by `id`.
    pub fn remove(&mut self, key: Option<&K>, id: ObjectId) {
        match key {
            Some(key) => self.inner.remove(key, Some(id)),
            None => {
                if self.null_slot == Some(id) {
                    self.null_slot = None;
                }
            }
        }
    }

    /// Returns the object occupying the null slot.
    pub fn null_occupant(&self) -> Option<ObjectId> {
        self.null_slot
    }

    /// Returns the number of keyed objects, the null occupant included.
    pub fn len(&self) -> usize {
        self.inner.len() + usize::from(self.null_slot.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.null_slot = None;
    }
}

impl<K: Eq + core::hash::Hash + Clone> Default for UniqueKeyIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
