//! Hash index over field values.
//!
//! Each key owns a bucket of object ids. Unique indexes hold one id per bucket;
//! non-unique indexes (secondary field indexes) may collect several.

use crate::traits::{Index, IndexError};
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;
use tessera_core::ObjectId;

/// Object ids sharing one key, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Bucket {
    Single(ObjectId),
    Shared(Vec<ObjectId>),
}

impl Bucket {
    fn ids(&self) -> &[ObjectId] {
        match self {
            Bucket::Single(id) => core::slice::from_ref(id),
            Bucket::Shared(ids) => ids,
        }
    }

    fn push(&mut self, id: ObjectId) {
        match self {
            Bucket::Single(first) => *self = Bucket::Shared(alloc::vec![*first, id]),
            Bucket::Shared(ids) => ids.push(id),
        }
    }

    /// Drops `id` from the bucket. Returns `None` if it was not held, otherwise
    /// whether the bucket is now empty.
    fn take(&mut self, id: ObjectId) -> Option<bool> {
        match self {
            Bucket::Single(held) => (*held == id).then_some(true),
            Bucket::Shared(ids) => {
                let pos = ids.iter().position(|&held| held == id)?;
                ids.remove(pos);
                if let [last] = ids.as_slice() {
                    *self = Bucket::Single(*last);
                }
                Some(false)
            }
        }
    }
}

/// Point index from field values to the objects holding them.
#[derive(Debug)]
pub struct HashIndex<K> {
    buckets: HashMap<K, Bucket>,
    unique: bool,
    /// Number of (key, object) pairs across all buckets.
    entries: usize,
}

impl<K: Eq + Hash> HashIndex<K> {
    pub fn new(unique: bool) -> Self {
        Self {
            buckets: HashMap::new(),
            unique,
            entries: 0,
        }
    }
}

impl<K: Eq + Hash> Index<K> for HashIndex<K> {
    fn add(&mut self, key: K, value: ObjectId) -> Result<(), IndexError> {
        match self.buckets.get_mut(&key) {
            Some(_) if self.unique => return Err(IndexError::DuplicateKey),
            Some(bucket) => bucket.push(value),
            None => {
                self.buckets.insert(key, Bucket::Single(value));
            }
        }
        self.entries += 1;
        Ok(())
    }

    fn get(&self, key: &K) -> Vec<ObjectId> {
        self.buckets
            .get(key)
            .map(|bucket| bucket.ids().to_vec())
            .unwrap_or_default()
    }

    fn remove(&mut self, key: &K, value: Option<ObjectId>) {
        let Some(bucket) = self.buckets.get_mut(key) else {
            return;
        };
        match value {
            Some(id) => {
                if let Some(emptied) = bucket.take(id) {
                    self.entries -= 1;
                    if emptied {
                        self.buckets.remove(key);
                    }
                }
            }
            None => {
                self.entries -= bucket.ids().len();
                self.buckets.remove(key);
            }
        }
    }

    fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries
    }

    fn clear(&mut self) {
        self.buckets.clear();
        self.entries = 0;
    }
}
