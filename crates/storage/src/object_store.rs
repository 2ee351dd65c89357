//! Object storage for Tessera.
//!
//! This module provides the `ObjectStore` struct which manages the live objects of
//! a single type, including primary key and secondary index maintenance.

use crate::constraint::ConstraintChecker;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use tessera_core::schema::{FieldDescriptor, ObjectSchema};
use tessera_core::{Error, Object, ObjectId, Result, Value};
use tessera_index::{HashIndex, Index, IndexError, UniqueKeyIndex};
use tracing::trace;

/// Object storage backend: HashMap (O(1) lookup) or BTreeMap (ordered by id).
#[cfg(feature = "hash-store")]
type ObjectMap = hashbrown::HashMap<ObjectId, Object>;
#[cfg(not(feature = "hash-store"))]
type ObjectMap = BTreeMap<ObjectId, Object>;

/// Maps a slot value to its primary index key; null addresses the null slot.
fn index_key(value: &Value) -> Option<&Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Storage for the objects of one type.
pub struct ObjectStore {
    schema: Arc<ObjectSchema>,
    objects: ObjectMap,
    primary_index: Option<UniqueKeyIndex<Value>>,
    pk_slot: Option<usize>,
    /// Secondary indexes keyed by field slot.
    secondary_indices: BTreeMap<usize, HashIndex<Value>>,
}

impl ObjectStore {
    /// Creates a new object store for the given type schema.
    pub fn new(schema: Arc<ObjectSchema>) -> Self {
        let pk_slot = schema.primary_key().map(|f| f.slot());
        let secondary_indices = schema
            .secondary_indexed()
            .map(|f| (f.slot(), HashIndex::new(false)))
            .collect();

        Self {
            primary_index: pk_slot.map(|_| UniqueKeyIndex::new()),
            pk_slot,
            secondary_indices,
            objects: ObjectMap::default(),
            schema,
        }
    }

    /// Returns the type schema.
    pub fn schema(&self) -> &Arc<ObjectSchema> {
        &self.schema
    }

    /// Returns the type name.
    pub fn type_name(&self) -> &str {
        self.schema.name()
    }

    /// Returns the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn field(&self, name: &str) -> Result<&FieldDescriptor> {
        self.schema
            .field(name)
            .ok_or_else(|| Error::field_not_found(self.schema.name(), name))
    }

    fn pk_field(&self) -> Option<&FieldDescriptor> {
        self.pk_slot.map(|slot| &self.schema.fields()[slot])
    }

    fn unique_violation(&self, value: Value) -> Error {
        let field = self.pk_field().map(|f| f.name()).unwrap_or("primary_key");
        Error::unique_constraint(field, value)
    }

    /// Creates an object holding every field's default value.
    ///
    /// The default key (null for nullable kinds, 0 for a primitive key) is
    /// registered like any other key and may collide.
    pub fn create_object(&mut self) -> Result<ObjectId> {
        self.insert(Object::create(self.schema.default_values()))
    }

    /// Creates an object whose primary key is `key`, which may be null.
    pub fn create_object_with_key(&mut self, key: Value) -> Result<ObjectId> {
        let pk = self.pk_field().ok_or_else(|| {
            Error::invalid_operation(format!("Type {} has no primary key", self.schema.name()))
        })?;
        ConstraintChecker::check_value(pk, &key)?;

        let mut values = self.schema.default_values();
        values[pk.slot()] = key;
        self.insert(Object::create(values))
    }

    /// Inserts a fully formed object into the store.
    pub fn insert(&mut self, object: Object) -> Result<ObjectId> {
        let id = object.id();

        if self.objects.contains_key(&id) {
            return Err(Error::invalid_operation("Object ID already exists"));
        }
        ConstraintChecker::check_object(&self.schema, &object)?;

        if let (Some(slot), Some(pk_index)) = (self.pk_slot, self.primary_index.as_mut()) {
            let key = object.values()[slot].clone();
            if let Err(err) = pk_index.insert(index_key(&key).cloned(), id) {
                trace!(type_name = self.schema.name(), ?key, %err, "primary key rejected");
                return Err(self.unique_violation(key));
            }
        }

        for (&slot, idx) in self.secondary_indices.iter_mut() {
            // Non-unique indexes accept every key
            let _ = idx.add(object.values()[slot].clone(), id);
        }

        trace!(type_name = self.schema.name(), id, "object inserted");
        self.objects.insert(id, object);
        Ok(id)
    }

    /// Gets an object by ID.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Reads one field of an object.
    pub fn get_field(&self, id: ObjectId, field: &str) -> Result<Value> {
        let slot = self.field(field)?.slot();
        let object = self
            .objects
            .get(&id)
            .ok_or_else(|| Error::not_found(self.schema.name(), id))?;
        Ok(object.values()[slot].clone())
    }

    /// Writes one field of an object. Returns whether the stored value changed.
    ///
    /// Writing the primary key re-registers the object under the new key and fails
    /// if another object already holds it.
    pub fn set_field(&mut self, id: ObjectId, field: &str, value: Value) -> Result<bool> {
        let descriptor = self.field(field)?;
        let slot = descriptor.slot();
        ConstraintChecker::check_value(descriptor, &value)?;

        let old = self
            .objects
            .get(&id)
            .ok_or_else(|| Error::not_found(self.schema.name(), id))?
            .values()[slot]
            .clone();
        if old == value {
            return Ok(false);
        }

        if self.pk_slot == Some(slot) {
            if let Some(pk_index) = self.primary_index.as_mut() {
                match pk_index.insert(index_key(&value).cloned(), id) {
                    Ok(()) => pk_index.remove(index_key(&old), id),
                    Err(IndexError::DuplicateKey | IndexError::DuplicateNullKey(_)) => {
                        return Err(self.unique_violation(value));
                    }
                }
            }
        }
        if let Some(idx) = self.secondary_indices.get_mut(&slot) {
            idx.remove(&old, Some(id));
            let _ = idx.add(value.clone(), id);
        }

        trace!(type_name = self.schema.name(), id, field, ?value, "field written");
        if let Some(object) = self.objects.get_mut(&id) {
            object.set(slot, value);
            object.increment_version();
        }
        Ok(true)
    }

    /// Deletes an object from the store.
    pub fn delete(&mut self, id: ObjectId) -> Result<Object> {
        let object = self
            .objects
            .remove(&id)
            .ok_or_else(|| Error::not_found(self.schema.name(), id))?;

        if let (Some(slot), Some(pk_index)) = (self.pk_slot, self.primary_index.as_mut()) {
            pk_index.remove(index_key(&object.values()[slot]), id);
        }
        for (&slot, idx) in self.secondary_indices.iter_mut() {
            idx.remove(&object.values()[slot], Some(id));
        }

        trace!(type_name = self.schema.name(), id, "object deleted");
        Ok(object)
    }

    /// Finds the object holding the given primary key; null addresses the null slot.
    pub fn find_by_key(&self, key: &Value) -> Option<ObjectId> {
        self.primary_index
            .as_ref()
            .and_then(|pk_index| pk_index.find(index_key(key)))
    }

    /// Checks if a primary key value is held by some object.
    pub fn key_exists(&self, key: &Value) -> bool {
        self.find_by_key(key).is_some()
    }

    /// Finds objects through an indexed field.
    pub fn find_by_index(&self, field: &str, value: &Value) -> Result<Vec<ObjectId>> {
        let descriptor = self.field(field)?;
        if descriptor.is_primary_key() {
            return Ok(self.find_by_key(value).into_iter().collect());
        }
        self.secondary_indices
            .get(&descriptor.slot())
            .map(|idx| idx.get(value))
            .ok_or_else(|| Error::invalid_operation(format!("Field is not indexed: {}", field)))
    }

    /// Returns an iterator over all objects.
    pub fn scan(&self) -> impl Iterator<Item = &Object> + '_ {
        self.objects.values()
    }

    /// Clears all objects and indices.
    pub fn clear(&mut self) {
        self.objects.clear();
        if let Some(pk_index) = self.primary_index.as_mut() {
            pk_index.clear();
        }
        for idx in self.secondary_indices.values_mut() {
            idx.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use tessera_core::schema::SchemaBuilder;
    use tessera_core::ScalarKind;

    fn boxed_key_schema() -> Arc<ObjectSchema> {
        Arc::new(
            SchemaBuilder::new("PrimaryKeyAsBoxedLong")
                .unwrap()
                .add_field("id", ScalarKind::BoxedLong)
                .unwrap()
                .add_field("name", ScalarKind::String)
                .unwrap()
                .add_primary_key("id")
                .unwrap()
                .build()
                .unwrap(),
        )
    }

    fn annotation_schema() -> Arc<ObjectSchema> {
        Arc::new(
            SchemaBuilder::new("AnnotationTypes")
                .unwrap()
                .add_field("id", ScalarKind::PrimitiveLong)
                .unwrap()
                .add_field("indexString", ScalarKind::String)
                .unwrap()
                .add_field("notIndexString", ScalarKind::String)
                .unwrap()
                .add_primary_key("id")
                .unwrap()
                .add_index("indexString")
                .unwrap()
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_create_object_defaults() {
        let mut store = ObjectStore::new(boxed_key_schema());
        let id = store.create_object().unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_field(id, "id").unwrap(), Value::Null);
        assert_eq!(store.get_field(id, "name").unwrap(), Value::Null);
        assert_eq!(store.find_by_key(&Value::Null), Some(id));
    }

    #[test]
    fn test_only_one_null_key() {
        let mut store = ObjectStore::new(boxed_key_schema());
        store.create_object().unwrap();

        let result = store.create_object_with_key(Value::Null);
        assert!(matches!(
            result,
            Err(Error::UniqueConstraint { ref field, .. }) if field == "id"
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_primitive_key_defaults_to_zero() {
        let mut store = ObjectStore::new(annotation_schema());
        let id = store.create_object().unwrap();

        assert_eq!(store.find_by_key(&Value::Long(0)), Some(id));
        assert!(store.create_object().is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_with_key_validates() {
        let mut store = ObjectStore::new(annotation_schema());

        assert!(matches!(
            store.create_object_with_key(Value::Null),
            Err(Error::NullConstraint { .. })
        ));
        assert!(matches!(
            store.create_object_with_key(Value::Integer(1)),
            Err(Error::TypeMismatch { .. })
        ));
        let id = store.create_object_with_key(Value::Long(7)).unwrap();
        assert_eq!(store.find_by_key(&Value::Long(7)), Some(id));
    }

    #[test]
    fn test_set_field_reindexes_primary_key() {
        let mut store = ObjectStore::new(boxed_key_schema());
        let a = store.create_object_with_key(Value::Null).unwrap();
        let b = store.create_object_with_key(Value::Long(2)).unwrap();

        assert!(store.set_field(a, "id", Value::Long(1)).unwrap());
        assert_eq!(store.find_by_key(&Value::Long(1)), Some(a));
        assert_eq!(store.find_by_key(&Value::Null), None);

        // Colliding with another object's key leaves both untouched
        assert!(store.set_field(a, "id", Value::Long(2)).is_err());
        assert_eq!(store.find_by_key(&Value::Long(2)), Some(b));
        assert_eq!(store.get_field(a, "id").unwrap(), Value::Long(1));
    }

    #[test]
    fn test_set_field_unchanged() {
        let mut store = ObjectStore::new(boxed_key_schema());
        let id = store.create_object().unwrap();

        assert!(store.set_field(id, "name", Value::from("Fido")).unwrap());
        assert!(!store.set_field(id, "name", Value::from("Fido")).unwrap());
        assert_eq!(store.get(id).map(|o| o.version()), Some(2));
    }

    #[test]
    fn test_set_field_errors() {
        let mut store = ObjectStore::new(annotation_schema());
        let id = store.create_object().unwrap();

        assert!(matches!(
            store.set_field(id, "missing", Value::Null),
            Err(Error::FieldNotFound { .. })
        ));
        assert!(matches!(
            store.set_field(id, "id", Value::Null),
            Err(Error::NullConstraint { .. })
        ));
        assert!(matches!(
            store.set_field(999_999, "indexString", Value::Null),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_secondary_index() {
        let mut store = ObjectStore::new(annotation_schema());
        let a = store.create_object_with_key(Value::Long(1)).unwrap();
        let b = store.create_object_with_key(Value::Long(2)).unwrap();
        store.set_field(a, "indexString", Value::from("x")).unwrap();
        store.set_field(b, "indexString", Value::from("x")).unwrap();

        let mut found = store.find_by_index("indexString", &Value::from("x")).unwrap();
        found.sort_unstable();
        assert_eq!(found, vec![a, b]);

        store.set_field(b, "indexString", Value::from("y")).unwrap();
        assert_eq!(
            store.find_by_index("indexString", &Value::from("x")).unwrap(),
            vec![a]
        );
        assert_eq!(store.find_by_index("id", &Value::Long(2)).unwrap(), vec![b]);
        assert!(store.find_by_index("notIndexString", &Value::Null).is_err());
    }

    #[test]
    fn test_delete_releases_keys() {
        let mut store = ObjectStore::new(boxed_key_schema());
        let id = store.create_object().unwrap();
        store.delete(id).unwrap();

        assert!(store.is_empty());
        assert!(!store.key_exists(&Value::Null));
        store.create_object().unwrap();
        assert!(store.delete(id).is_err());
    }

    #[test]
    fn test_insert_rejects_taken_key() {
        let mut store = ObjectStore::new(boxed_key_schema());
        let a = store.create_object_with_key(Value::Long(1)).unwrap();

        let clash = Object::create(vec![Value::Long(1), Value::from("Rex")]);
        assert!(matches!(store.insert(clash), Err(Error::UniqueConstraint { .. })));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_key(&Value::Long(1)), Some(a));
    }

    #[test]
    fn test_clear() {
        let mut store = ObjectStore::new(annotation_schema());
        store.create_object().unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.scan().count(), 0);
        // The primitive zero key is free again
        store.create_object().unwrap();
    }
}
