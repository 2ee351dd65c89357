//! Tessera Storage - Object storage layer for the Tessera object store.
//!
//! This crate provides the storage layer including:
//!
//! - `ObjectStore`: Per-type object storage with primary key and index maintenance
//! - `Store`: Multi-type store management
//! - `Journal`: Change tracking for transactions
//! - `Transaction`: Write transactions with rollback support
//! - `ConstraintChecker`: Kind and nullability validation
//!
//! # Example
//!
//! ```rust
//! use tessera_storage::{Store, Transaction};
//! use tessera_core::schema::SchemaBuilder;
//! use tessera_core::{ScalarKind, Value};
//!
//! let mut store = Store::new();
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
//! store.create_type(schema).unwrap();
//!
//! let mut tx = Transaction::begin();
//! let id = tx.create_object_with_key(&mut store, "Dog", Value::Null).unwrap();
//! tx.set_field(&mut store, "Dog", id, "name", Value::from("Fido")).unwrap();
//! tx.commit().unwrap();
//!
//! assert_eq!(store.get_type("Dog").unwrap().find_by_key(&Value::Null), Some(id));
//! ```

#![no_std]

extern crate alloc;

pub mod constraint;
pub mod journal;
pub mod object_store;
pub mod store;
pub mod transaction;

pub use constraint::ConstraintChecker;
pub use journal::{Journal, JournalEntry};
pub use object_store::ObjectStore;
pub use store::Store;
pub use transaction::{Transaction, TransactionId, TransactionState};
