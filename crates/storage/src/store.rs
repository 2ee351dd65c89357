//! Store management for Tessera.
//!
//! This module provides the `Store` struct which manages one object store per type.

use crate::object_store::ObjectStore;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use tessera_core::schema::{ObjectSchema, SchemaRegistry};
use tessera_core::{Error, Object, ObjectId, Result};

/// Object store collection keyed by type name.
#[derive(Default)]
pub struct Store {
    types: BTreeMap<String, ObjectStore>,
}

impl Store {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Creates a store with an empty object store for every registered type.
    pub fn from_registry(registry: &SchemaRegistry) -> Self {
        let types = registry
            .iter()
            .map(|schema| (schema.name().to_string(), ObjectStore::new(Arc::clone(schema))))
            .collect();
        Self { types }
    }

    /// Registers a type with the store.
    pub fn create_type(&mut self, schema: impl Into<Arc<ObjectSchema>>) -> Result<()> {
        let schema = schema.into();
        let name = schema.name().to_string();
        if self.types.contains_key(&name) {
            return Err(Error::invalid_schema(format!("Type already exists: {}", name)));
        }
        self.types.insert(name, ObjectStore::new(schema));
        Ok(())
    }

    /// Drops a type and all of its objects.
    pub fn drop_type(&mut self, name: &str) -> Result<()> {
        if self.types.remove(name).is_none() {
            return Err(Error::type_not_found(name));
        }
        Ok(())
    }

    /// Gets a reference to a type's object store.
    pub fn get_type(&self, name: &str) -> Option<&ObjectStore> {
        self.types.get(name)
    }

    /// Gets a mutable reference to a type's object store, or `TypeNotFound`.
    pub fn type_mut(&mut self, name: &str) -> Result<&mut ObjectStore> {
        self.types
            .get_mut(name)
            .ok_or_else(|| Error::type_not_found(name))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the total object count across all types.
    pub fn total_object_count(&self) -> usize {
        self.types.values().map(|t| t.len()).sum()
    }

    /// Gets an object by type name and object ID.
    pub fn get_object(&self, type_name: &str, id: ObjectId) -> Option<&Object> {
        self.types.get(type_name).and_then(|t| t.get(id))
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Clears all objects, keeping the registered types.
    pub fn clear(&mut self) {
        for store in self.types.values_mut() {
            store.clear();
        }
    }
}
