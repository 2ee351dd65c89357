//! Field definition for Tessera object schemas.

use crate::types::ScalarKind;
use crate::value::Value;
use alloc::string::String;

/// A field declared on an object type.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// Field name.
    name: String,
    /// Declared scalar kind.
    kind: ScalarKind,
    /// Whether this field accepts null.
    nullable: bool,
    /// Whether this field is the type's primary key.
    primary_key: bool,
    /// Whether this field has a secondary index.
    indexed: bool,
    /// Whether ingestion skips this field.
    ignored: bool,
    /// Slot position in the object (0-based).
    slot: usize,
}

impl FieldDescriptor {
    /// Creates a new field; nullability follows the kind.
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: kind.is_nullable(),
            primary_key: false,
            indexed: false,
            ignored: false,
            slot: 0,
        }
    }

    /// Sets whether this field is nullable.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Marks this field as the primary key. A primary key is always indexed.
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Sets whether this field has a secondary index.
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    /// Sets whether ingestion skips this field.
    pub fn ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    pub(crate) fn with_slot(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Returns whether lookups by this field go through an index.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indexed || self.primary_key
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Returns the slot position of this field.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Returns the value a freshly created object holds in this slot.
    pub fn default_value(&self) -> Value {
        if self.nullable {
            Value::Null
        } else {
            Value::zero(self.kind)
        }
    }
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}
