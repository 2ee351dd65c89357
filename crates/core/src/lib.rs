//! Tessera Core - Core types and schema definitions for the Tessera object store.
//!
//! This crate provides the foundational types shared by the index, storage, and
//! ingestion layers:
//!
//! - `ScalarKind`: Declared field kinds (boxed integers, primitive long, string)
//! - `Value`: Runtime values held in an object's field slots
//! - `Object`: A live object with a store-assigned identifier
//! - `schema`: Schema definitions (FieldDescriptor, ObjectSchema, SchemaRegistry)
//! - `Error`: Error types for schema and store operations
//!
//! # Example
//!
//! ```rust
//! use tessera_core::{ScalarKind, Value, Object};
//! use tessera_core::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new("Dog")
//!     .unwrap()
//!     .add_field("id", ScalarKind::BoxedLong)
//!     .unwrap()
//!     .add_field("name", ScalarKind::String)
//!     .unwrap()
//!     .add_primary_key("id")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let obj = Object::new(1, schema.default_values());
//! assert_eq!(obj.get(0), Some(&Value::Null));
//! assert_eq!(schema.primary_key().map(|f| f.name()), Some("id"));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod object;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use object::{next_object_id, Object, ObjectId};
pub use types::ScalarKind;
pub use value::Value;
