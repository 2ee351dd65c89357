//! Field writes derived from a document.
//!
//! Writing is split in two: `prepare` validates and coerces a field without
//! touching the store, `apply` performs writes that are already known to be valid.

use crate::coerce::{coerce, render};
use crate::document::{DocumentView, FieldState};
use crate::error::{IngestError, Result};
use tessera_core::schema::{FieldDescriptor, ObjectSchema};
use tessera_core::{ObjectId, Value};
use tessera_storage::{Store, Transaction};
use tracing::trace;

/// A validated write of one field slot.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldWrite<'s> {
    pub field: &'s FieldDescriptor,
    pub value: Value,
}

/// Applies document fields to object slots.
pub struct FieldWriter;

impl FieldWriter {
    /// Validates one field. Absent fields produce no write.
    pub fn prepare<'s>(
        field: &'s FieldDescriptor,
        state: FieldState<'_>,
    ) -> Result<Option<FieldWrite<'s>>> {
        let value = match state {
            FieldState::Absent => return Ok(None),
            FieldState::ExplicitNull => {
                if !field.is_nullable() {
                    return Err(IngestError::NonNullableFieldSetToNull {
                        field: field.name().into(),
                    });
                }
                Value::Null
            }
            FieldState::Present(raw) => {
                coerce(field.kind(), raw).ok_or_else(|| IngestError::FieldCoercionError {
                    field: field.name().into(),
                    kind: field.kind(),
                    value: render(raw),
                })?
            }
        };
        Ok(Some(FieldWrite { field, value }))
    }

    /// Validates every writable field of the document, in declaration order.
    ///
    /// The primary key and ignored fields are skipped, as are document members
    /// the schema does not declare.
    pub fn prepare_all<'s>(
        schema: &'s ObjectSchema,
        document: &DocumentView<'_>,
    ) -> Result<Vec<FieldWrite<'s>>> {
        let mut writes = Vec::new();
        for field in schema.writable_fields() {
            if let Some(write) = Self::prepare(field, document.field_state(field.name()))? {
                writes.push(write);
            }
        }
        Ok(writes)
    }

    /// Performs prepared writes on one object. Returns how many slots changed.
    pub fn apply(
        tx: &mut Transaction,
        store: &mut Store,
        type_name: &str,
        id: ObjectId,
        writes: Vec<FieldWrite<'_>>,
    ) -> Result<usize> {
        let mut changed = 0;
        for FieldWrite { field, value } in writes {
            if tx.set_field(store, type_name, id, field.name(), value)? {
                changed += 1;
            } else {
                trace!(type_name, id, field = field.name(), "field unchanged");
            }
        }
        Ok(changed)
    }

    /// Validates and writes a single field. Returns whether the slot changed.
    pub fn write(
        tx: &mut Transaction,
        store: &mut Store,
        type_name: &str,
        id: ObjectId,
        field: &FieldDescriptor,
        state: FieldState<'_>,
    ) -> Result<bool> {
        match Self::prepare(field, state)? {
            Some(write) => Ok(Self::apply(tx, store, type_name, id, vec![write])? == 1),
            None => Ok(false),
        }
    }
}
