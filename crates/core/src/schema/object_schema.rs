//! Object type definition for Tessera schemas.

use super::field::FieldDescriptor;
use crate::error::{Error, Result};
use crate::types::ScalarKind;
use crate::value::Value;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// The schema of one object type: its fields in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSchema {
    /// Type name.
    name: String,
    /// Field definitions; a field's position is its slot.
    fields: Vec<FieldDescriptor>,
}

impl ObjectSchema {
    /// Returns the type name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Gets a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Gets a field's slot by name.
    pub fn field_slot(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Returns the primary key field if one is declared.
    pub fn primary_key(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_primary_key())
    }

    /// Returns the fields that carry a secondary index (primary key excluded).
    pub fn secondary_indexed(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| f.is_indexed() && !f.is_primary_key())
    }

    /// Returns the fields ingestion writes: neither primary key nor ignored.
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| !f.is_primary_key() && !f.is_ignored())
    }

    /// Returns the slot values of a freshly created object.
    pub fn default_values(&self) -> Vec<Value> {
        self.fields.iter().map(|f| f.default_value()).collect()
    }
}

/// Builder for object schemas.
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::check_naming_rules(&name)?;
        Ok(Self {
            name,
            fields: Vec::new(),
        })
    }

    /// Validates a name follows naming rules.
    fn check_naming_rules(name: &str) -> Result<()> {
        let Some(first) = name.chars().next() else {
            return Err(Error::invalid_schema("Name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(Error::invalid_schema(format!(
                "Name must start with letter or underscore: {}",
                name
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::invalid_schema(format!(
                "Name contains invalid characters: {}",
                name
            )));
        }
        Ok(())
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FieldDescriptor> {
        let type_name = &self.name;
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::field_not_found(type_name.as_str(), name))
    }

    /// Adds a field to the type.
    pub fn add_field(mut self, name: impl Into<String>, kind: ScalarKind) -> Result<Self> {
        let name = name.into();
        Self::check_naming_rules(&name)?;
        if self.fields.iter().any(|f| f.name() == name) {
            return Err(Error::invalid_schema(format!("Field already exists: {}", name)));
        }
        self.fields.push(FieldDescriptor::new(name, kind));
        Ok(self)
    }

    /// Marks fields as required (not nullable).
    pub fn add_required(mut self, fields: &[&str]) -> Result<Self> {
        for name in fields {
            let field = self.field_mut(name)?;
            *field = field.clone().nullable(false);
        }
        Ok(self)
    }

    /// Declares the primary key. A type has at most one.
    pub fn add_primary_key(mut self, name: &str) -> Result<Self> {
        if let Some(existing) = self.fields.iter().find(|f| f.is_primary_key()) {
            return Err(Error::invalid_schema(format!(
                "Primary key already declared on {}: {}",
                self.name,
                existing.name()
            )));
        }
        let field = self.field_mut(name)?;
        *field = field.clone().primary_key(true);
        Ok(self)
    }

    /// Adds a secondary index on a field.
    pub fn add_index(mut self, name: &str) -> Result<Self> {
        let field = self.field_mut(name)?;
        *field = field.clone().indexed(true);
        Ok(self)
    }

    /// Marks a field as ignored by ingestion.
    pub fn add_ignored(mut self, name: &str) -> Result<Self> {
        let field = self.field_mut(name)?;
        *field = field.clone().ignored(true);
        Ok(self)
    }

    /// Builds the schema.
    pub fn build(self) -> Result<ObjectSchema> {
        for field in &self.fields {
            if field.is_nullable() && !field.kind().is_nullable() {
                return Err(Error::invalid_schema(format!(
                    "Field {} of kind {} cannot be nullable",
                    field.name(),
                    field.kind()
                )));
            }
            if field.is_primary_key() && field.is_ignored() {
                return Err(Error::invalid_schema(format!(
                    "Primary key cannot be ignored: {}",
                    field.name()
                )));
            }
        }

        let fields = self
            .fields
            .into_iter()
            .enumerate()
            .map(|(i, f)| f.with_slot(i))
            .collect();

        Ok(ObjectSchema {
            name: self.name,
            fields,
        })
    }
}
