//! # Separate Chaining Hash Table
//!
//! A fixed-capacity table from string keys to `i64` values that resolves
//! collisions with **separate chaining**: every bucket owns a singly linked
//! list of entries, and each entry owns its successor.
//!
//! - The bucket count is chosen at construction and never changes; chains
//!   simply grow, so a single overloaded bucket degrades to O(n) lookups.
//! - New keys are appended at the tail of their chain, so a chain lists its
//!   keys in insertion order.
//! - Inserting an existing key overwrites its value in place.
//! - Keys are copied into the table and compared by content.

use std::fmt;

use log::{debug, trace};

use super::hash_function::HashFunction;
use crate::error::{Error, Result};

/// A link in a chain: either the next entry or the end of the list.
type Link = Option<Box<Entry>>;

/// A single key-value pair in a chain.
#[derive(Debug)]
struct Entry {
    key: Box<str>,
    value: i64,
    next: Link,
}

impl Entry {
    fn new(key: &str, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
            next: None,
        }
    }
}

/// A separate-chaining hash table with a fixed number of buckets.
pub struct ChainedTable {
    buckets: Vec<Link>,
    /// The number of stored key-value pairs.
    len: usize,
    hash_fn: HashFunction,
}

impl ChainedTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize, hash_fn: HashFunction) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        debug!("created chained table with {capacity} buckets using {hash_fn}");
        Ok(Self {
            buckets,
            len: 0,
            hash_fn,
        })
    }

    /// Returns the number of key-value pairs in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The hash function used for home indices.
    pub fn hash_function(&self) -> HashFunction {
        self.hash_fn
    }

    /// The bucket `key` belongs to.
    pub fn home_index(&self, key: &str) -> usize {
        self.hash_fn.home_index(key.as_bytes(), self.buckets.len())
    }

    /// Inserts a key-value pair. If the key already exists its value is
    /// replaced and the old value returned; otherwise the entry is appended to
    /// the tail of its bucket's chain.
    pub fn insert(&mut self, key: &str, value: i64) -> Option<i64> {
        let idx = self.home_index(key);
        let mut link = &mut self.buckets[idx];
        let mut depth = 0usize;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(Entry::new(key, value)));
                    self.len += 1;
                    if depth > 0 {
                        trace!("chained {key:?} at bucket {idx}, depth {depth}");
                    }
                    return None;
                }
                Some(entry) if &*entry.key == key => {
                    return Some(std::mem::replace(&mut entry.value, value));
                }
                Some(entry) => {
                    link = &mut entry.next;
                    depth += 1;
                }
            }
        }
    }

    /// Returns the value stored for `key`, if present.
    pub fn get(&self, key: &str) -> Option<i64> {
        let idx = self.home_index(key);
        self.chain(idx)
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if `key` is stored in the table.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` from its chain and returns its value.
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let idx = self.home_index(key);
        let mut link = &mut self.buckets[idx];
        loop {
            match link {
                None => return None,
                Some(entry) if &*entry.key == key => {
                    let value = entry.value;
                    let next = entry.next.take();
                    *link = next;
                    self.len -= 1;
                    return Some(value);
                }
                Some(entry) => link = &mut entry.next,
            }
        }
    }

    /// Removes every entry. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            // Unlink one node at a time so long chains don't recurse in `Drop`.
            let mut cur = bucket.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
        self.len = 0;
    }

    /// The entries of bucket `index` in chain order. Out-of-range indices
    /// yield an empty list.
    pub fn bucket(&self, index: usize) -> Vec<(&str, i64)> {
        if index >= self.buckets.len() {
            return Vec::new();
        }
        self.chain(index).collect()
    }

    /// Iterates over all `(key, value)` pairs, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        (0..self.buckets.len()).flat_map(move |idx| self.chain(idx))
    }

    /// Like [`iter`](Self::iter), but also yields each entry's bucket index
    /// and depth within the chain.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, usize, &str, i64)> + '_ {
        (0..self.buckets.len()).flat_map(move |idx| {
            self.chain(idx)
                .enumerate()
                .map(move |(depth, (k, v))| (idx, depth, k, v))
        })
    }

    fn chain(&self, index: usize) -> Chain<'_> {
        Chain {
            cur: self.buckets[index].as_deref(),
        }
    }
}

impl Drop for ChainedTable {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("hash_fn", &self.hash_fn)
            .finish()
    }
}

/// Walks one chain from head to tail.
struct Chain<'a> {
    cur: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cur?;
        self.cur = entry.next.as_deref();
        Some((&*entry.key, entry.value))
    }
}
