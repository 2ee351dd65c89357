//! Constraint checking for Tessera.
//!
//! This module validates slot values against their field descriptors: the value
//! must fit the declared kind, and null is rejected for non-nullable fields.

use alloc::format;
use tessera_core::schema::{FieldDescriptor, ObjectSchema};
use tessera_core::{Error, Object, Result, Value};

/// Constraint checker for validating object values.
pub struct ConstraintChecker;

impl ConstraintChecker {
    /// Checks a single value against its field.
    pub fn check_value(field: &FieldDescriptor, value: &Value) -> Result<()> {
        if value.is_null() {
            if !field.is_nullable() {
                return Err(Error::null_constraint(field.name()));
            }
            return Ok(());
        }
        if !value.fits(field.kind()) {
            return Err(Error::type_mismatch(field.name(), field.kind(), value.clone()));
        }
        Ok(())
    }

    /// Checks every slot of an object against the type schema.
    pub fn check_object(schema: &ObjectSchema, object: &Object) -> Result<()> {
        if object.len() != schema.fields().len() {
            return Err(Error::invalid_operation(format!(
                "Object has {} slots but {} declares {} fields",
                object.len(),
                schema.name(),
                schema.fields().len()
            )));
        }

        for (field, value) in schema.fields().iter().zip(object.values()) {
            Self::check_value(field, value)?;
        }
        Ok(())
    }
}
