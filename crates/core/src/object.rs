//! Object structure for Tessera.
//!
//! This module defines the `Object` struct which represents a single live object of
//! a registered type.

use crate::value::Value;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

/// Store-assigned identifier for an object.
pub type ObjectId = u64;

/// Global object ID counter for generating unique object IDs.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(0);

/// Gets the next unique object ID.
pub fn next_object_id() -> ObjectId {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::SeqCst)
}

/// A live object: one value slot per schema field, in declaration order.
#[derive(Clone, Debug)]
pub struct Object {
    id: ObjectId,
    /// Incremented on each update.
    version: u64,
    values: Vec<Value>,
}

impl Object {
    /// Creates a new object with the given ID and slot values.
    /// Version defaults to 1 for new objects.
    pub fn new(id: ObjectId, values: Vec<Value>) -> Self {
        Self { id, version: 1, values }
    }

    /// Creates a new object with an automatically assigned ID.
    pub fn create(values: Vec<Value>) -> Self {
        Self::new(next_object_id(), values)
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Increments the version number and returns the new value.
    #[inline]
    pub fn increment_version(&mut self) -> u64 {
        self.version = self.version.wrapping_add(1);
        self.version
    }

    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Gets the value in the given slot.
    pub fn get(&self, slot: usize) -> Option<&Value> {
        self.values.get(slot)
    }

    /// Sets the value in the given slot. Returns false if the slot does not exist.
    pub fn set(&mut self, slot: usize, value: Value) -> bool {
        if slot < self.values.len() {
            self.values[slot] = value;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.values == other.values
    }
}
