//! Schema module for Tessera.
//!
//! This module contains the schema definitions: field descriptors, object types,
//! and the registry that holds them.

mod field;
mod object_schema;
mod registry;

pub use field::FieldDescriptor;
pub use object_schema::{ObjectSchema, SchemaBuilder};
pub use registry::SchemaRegistry;
