//! Schema registry for Tessera.
//!
//! Holds one `ObjectSchema` per registered type name. Registration happens before
//! any ingestion; the registry is read-only afterwards.

use super::object_schema::ObjectSchema;
use crate::error::{Error, Result};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Registered object schemas by type name.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    types: BTreeMap<String, Arc<ObjectSchema>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Registers a schema. Type names are unique.
    pub fn register(&mut self, schema: ObjectSchema) -> Result<()> {
        let name = schema.name().to_string();
        if self.types.contains_key(&name) {
            return Err(Error::invalid_schema(format!("Type already registered: {}", name)));
        }
        self.types.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Gets a schema by type name.
    pub fn get(&self, name: &str) -> Option<&Arc<ObjectSchema>> {
        self.types.get(name)
    }

    /// Returns whether a type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns all registered type names in sorted order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|s| s.as_str()).collect()
    }

    /// Iterates over all registered schemas.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ObjectSchema>> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use crate::ScalarKind;

    fn schema(name: &str) -> ObjectSchema {
        SchemaBuilder::new(name)
            .unwrap()
            .add_field("id", ScalarKind::BoxedLong)
            .unwrap()
            .add_primary_key("id")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        registry.register(schema("Dog")).unwrap();
        registry.register(schema("Cat")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Dog"));
        assert_eq!(registry.get("Cat").map(|s| s.name()), Some("Cat"));
        assert!(registry.get("Bird").is_none());
        assert_eq!(registry.type_names(), ["Cat", "Dog"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = SchemaRegistry::new();
        registry.register(schema("Dog")).unwrap();
        assert!(matches!(
            registry.register(schema("Dog")),
            Err(Error::InvalidSchema { .. })
        ));
    }
}
