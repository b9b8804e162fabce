//! # Linear Probing Hash Table
//!
//! A fixed-capacity table from string keys to `i64` values using **open
//! addressing with linear probing**: every slot holds at most one entry, and a
//! key that finds its home slot taken moves forward one slot at a time
//! (`i, i+1, i+2, ...` mod capacity) until it finds room.
//!
//! ## Key Points
//! - **No growth**: once every slot is occupied, inserting a new key fails with
//!   [`Error::TableFull`]. Updating a key that is already present still works.
//! - **Bounded probing**: every operation inspects at most `capacity` slots, so
//!   a full table can never make a probe loop forever.
//! - **Tombstones**: removal leaves a `Tombstone` marker. Lookups step over
//!   tombstones and only stop at a truly empty slot, so keys placed further
//!   along the probe path stay reachable. Inserts reuse the first tombstone they
//!   pass, but only after confirming the key is not stored later on the path.

use std::fmt;

use log::{debug, trace, warn};

use super::hash_function::HashFunction;
use crate::error::{Error, Result};

/// A live key-value pair.
#[derive(Debug, Clone)]
struct Entry {
    key: Box<str>,
    value: i64,
}

/// A slot is `Empty`, a `Tombstone` (used to be occupied but removed), or `Occupied`.
#[derive(Debug, Clone, Default)]
enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Entry),
}

/// Outcome of walking a key's probe path.
enum Probe {
    /// The key lives at this index.
    Found(usize),
    /// The key is absent; this is where it would be placed.
    Vacant(usize),
    /// The key is absent and every slot on the path is occupied.
    Exhausted,
}

/// An open-addressing table with linear probing and a fixed slot count.
#[derive(Clone)]
pub struct LinearProbingTable {
    slots: Vec<Slot>,
    len: usize,
    tombstones: usize,
    hash_fn: HashFunction,
}

impl LinearProbingTable {
    /// Creates an empty table with `capacity` slots.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize, hash_fn: HashFunction) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);
        debug!("created linear probing table with {capacity} slots using {hash_fn}");
        Ok(Self {
            slots,
            len: 0,
            tombstones: 0,
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

    /// Returns the fixed slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently marked as tombstones.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// The hash function used for home indices.
    pub fn hash_function(&self) -> HashFunction {
        self.hash_fn
    }

    /// The slot `key` probes first.
    pub fn home_index(&self, key: &str) -> usize {
        self.hash_fn.home_index(key.as_bytes(), self.slots.len())
    }

    /// Inserts a key-value pair, returning the old value if the key existed.
    ///
    /// Fails with [`Error::TableFull`] when the key is new and no empty slot or
    /// tombstone remains. A failed insert leaves the table untouched.
    pub fn insert(&mut self, key: &str, value: i64) -> Result<Option<i64>> {
        match self.probe(key) {
            Probe::Found(idx) => match &mut self.slots[idx] {
                Slot::Occupied(entry) => Ok(Some(std::mem::replace(&mut entry.value, value))),
                _ => unreachable!("probe reported a match on a vacant slot"),
            },
            Probe::Vacant(idx) => {
                if let Slot::Tombstone = self.slots[idx] {
                    self.tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied(Entry {
                    key: key.into(),
                    value,
                });
                self.len += 1;
                let home = self.home_index(key);
                if idx != home {
                    trace!("placed {key:?} at slot {idx}, home {home}");
                }
                Ok(None)
            }
            Probe::Exhausted => {
                warn!(
                    "rejected {key:?}: all {} slots are occupied",
                    self.slots.len()
                );
                Err(Error::TableFull {
                    capacity: self.slots.len(),
                })
            }
        }
    }

    /// Returns the value stored for `key`, if present.
    pub fn get(&self, key: &str) -> Option<i64> {
        match self.probe(key) {
            Probe::Found(idx) => match &self.slots[idx] {
                Slot::Occupied(entry) => Some(entry.value),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true if `key` is stored in the table.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Removes `key`, leaving a tombstone in its slot. Removing an absent key
    /// is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let Probe::Found(idx) = self.probe(key) else {
            return None;
        };
        match std::mem::replace(&mut self.slots[idx], Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.len -= 1;
                self.tombstones += 1;
                Some(entry.value)
            }
            _ => unreachable!("probe reported a match on a vacant slot"),
        }
    }

    /// Resets every slot, tombstones included, to empty.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
        self.tombstones = 0;
    }

    /// The occupant of slot `index` as a zero- or one-element list.
    pub fn bucket(&self, index: usize) -> Vec<(&str, i64)> {
        match self.slots.get(index) {
            Some(Slot::Occupied(entry)) => vec![(&*entry.key, entry.value)],
            _ => Vec::new(),
        }
    }

    /// Iterates over all `(key, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.positions().map(|(_, k, v)| (k, v))
    }

    /// Like [`iter`](Self::iter), but also yields each entry's slot index.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, &str, i64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(entry) => Some((idx, &*entry.key, entry.value)),
                _ => None,
            })
    }

    /// Walks the probe path of `key` starting at its home slot, visiting each
    /// slot at most once.
    ///
    /// Stops at the matching entry or at the first empty slot. Tombstones do not
    /// stop the walk, but the first one seen is remembered as the placement
    /// candidate for an absent key.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.slots.len();
        let mut idx = self.home_index(key);
        let mut first_tombstone = None;

        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(idx)),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
                Slot::Occupied(entry) => {
                    if &*entry.key == key {
                        return Probe::Found(idx);
                    }
                }
            }
            idx = (idx + 1) % capacity;
        }

        match first_tombstone {
            Some(idx) => Probe::Vacant(idx),
            None => Probe::Exhausted,
        }
    }
}

impl fmt::Debug for LinearProbingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearProbingTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("hash_fn", &self.hash_fn)
            .finish()
    }
}
