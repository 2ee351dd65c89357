//! Tessera Index - Key indexes for the Tessera object store.
//!
//! This crate provides:
//!
//! - `HashIndex`: O(1) point queries using a hash map, unique or non-unique
//! - `UniqueKeyIndex`: Primary key index with a single reserved null-key slot
//!
//! # Example
//!
//! ```rust
//! use tessera_index::{HashIndex, Index, UniqueKeyIndex};
//!
//! let mut hash: HashIndex<i64> = HashIndex::new(true);
//! hash.add(10, 100).unwrap();
//! assert_eq!(hash.get(&10), vec![100]);
//!
//! let mut pk: UniqueKeyIndex<i64> = UniqueKeyIndex::new();
//! pk.insert(None, 1).unwrap();
//! assert!(pk.insert(None, 2).is_err());
//! assert_eq!(pk.find(None), Some(1));
//! ```

#![no_std]

extern crate alloc;

pub mod hash;
pub mod traits;
pub mod unique_key;

pub use hash::HashIndex;
pub use traits::{Index, IndexError};
pub use unique_key::UniqueKeyIndex;
