//! # Fixed-Capacity Hash Table
//!
//! [`HashTable`] maps string keys to `i64` values over a slot array whose size
//! is fixed at construction. The collision strategy and the hash function are
//! chosen through [`HashTableBuilder`]:
//!
//! - [`Strategy::Chaining`] never runs out of room; colliding keys share a
//!   bucket's linked list.
//! - [`Strategy::LinearProbing`] stores at most one key per slot and rejects
//!   new keys with [`Error::TableFull`] once every slot is taken.
//!
//! ## Example
//! ```rust
//! use strtab::cs::hashing::{HashFunction, HashTableBuilder, Strategy};
//!
//! let mut table = HashTableBuilder::new()
//!     .with_capacity(40)
//!     .with_strategy(Strategy::LinearProbing)
//!     .with_hash_function(HashFunction::Fnv1a)
//!     .build()
//!     .unwrap();
//! table.insert("puppy", 5).unwrap();
//! table.insert("puppy", 7).unwrap();
//! assert_eq!(table.get("puppy"), Some(7));
//! assert_eq!(table.get("wolfie"), None);
//! ```

use std::fmt;

use super::hash_function::HashFunction;
use super::open_addressing::LinearProbingTable;
use super::separate::ChainedTable;
use crate::error::{Error, Result};

/// Default slot count if none specified.
pub const DEFAULT_CAPACITY: usize = 16;

/// Collision-resolution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Separate chaining: each slot owns a linked list of entries.
    #[default]
    Chaining,
    /// Open addressing with step-1 linear probing and tombstone deletion.
    LinearProbing,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Chaining => f.write_str("chaining"),
            Strategy::LinearProbing => f.write_str("linear probing"),
        }
    }
}

/// Running totals of the mutating operations a table has served.
///
/// Counters survive [`HashTable::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    /// Inserts that created a new entry.
    pub inserts: u64,
    /// Inserts that overwrote the value of an existing key.
    pub updates: u64,
    /// Successful removals.
    pub removals: u64,
    /// Inserts refused because the table was full.
    pub rejected: u64,
}

/// A builder for [`HashTable`]. Start with `new()`, chain `with_*` calls, then `build()`.
#[derive(Debug, Clone)]
pub struct HashTableBuilder {
    capacity: usize,
    strategy: Strategy,
    hash_fn: HashFunction,
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
            hash_fn: HashFunction::default(),
        }
    }
}

impl HashTableBuilder {
    /// Creates a builder with capacity 16, chaining, and djb2.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed number of slots. Must be non-zero.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the collision-resolution strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the hash function used to compute home indices.
    pub fn with_hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_fn = hash_fn;
        self
    }

    /// Builds the table, failing with [`Error::ZeroCapacity`] for a zero capacity.
    pub fn build(self) -> Result<HashTable> {
        let store = match self.strategy {
            Strategy::Chaining => Store::Chained(ChainedTable::new(self.capacity, self.hash_fn)?),
            Strategy::LinearProbing => {
                Store::Probing(LinearProbingTable::new(self.capacity, self.hash_fn)?)
            }
        };
        Ok(HashTable {
            store,
            stats: TableStats::default(),
        })
    }
}

#[derive(Debug)]
enum Store {
    Chained(ChainedTable),
    Probing(LinearProbingTable),
}

/// A fixed-capacity string-to-integer table with a configurable collision strategy.
#[derive(Debug)]
pub struct HashTable {
    store: Store,
    stats: TableStats,
}

impl HashTable {
    /// Creates a chaining table with djb2 and `capacity` buckets.
    pub fn new(capacity: usize) -> Result<Self> {
        HashTableBuilder::new().with_capacity(capacity).build()
    }

    /// Inserts `key` with `value`, or overwrites the value of an existing key.
    ///
    /// Returns the previous value on update. Under linear probing a new key
    /// fails with [`Error::TableFull`] when no slot is available; the table is
    /// unchanged in that case.
    pub fn insert(&mut self, key: &str, value: i64) -> Result<Option<i64>> {
        let outcome = match &mut self.store {
            Store::Chained(t) => Ok(t.insert(key, value)),
            Store::Probing(t) => t.insert(key, value),
        };
        match &outcome {
            Ok(None) => self.stats.inserts += 1,
            Ok(Some(_)) => self.stats.updates += 1,
            Err(Error::TableFull { .. }) => self.stats.rejected += 1,
            Err(_) => {}
        }
        outcome
    }

    /// Returns the value stored for `key`, or `None` if it is absent.
    pub fn get(&self, key: &str) -> Option<i64> {
        match &self.store {
            Store::Chained(t) => t.get(key),
            Store::Probing(t) => t.get(key),
        }
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        match &self.store {
            Store::Chained(t) => t.contains(key),
            Store::Probing(t) => t.contains(key),
        }
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let removed = match &mut self.store {
            Store::Chained(t) => t.remove(key),
            Store::Probing(t) => t.remove(key),
        };
        if removed.is_some() {
            self.stats.removals += 1;
        }
        removed
    }

    /// Removes every entry; capacity and counters are kept.
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Chained(t) => t.clear(),
            Store::Probing(t) => t.clear(),
        }
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        match &self.store {
            Store::Chained(t) => t.len(),
            Store::Probing(t) => t.len(),
        }
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// The fixed slot count.
    pub fn capacity(&self) -> usize {
        match &self.store {
            Store::Chained(t) => t.capacity(),
            Store::Probing(t) => t.capacity(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Live entries per slot. May exceed 1.0 under chaining.
    pub fn load_factor(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    pub fn strategy(&self) -> Strategy {
        match self.store {
            Store::Chained(_) => Strategy::Chaining,
            Store::Probing(_) => Strategy::LinearProbing,
        }
    }

    pub fn hash_function(&self) -> HashFunction {
        match &self.store {
            Store::Chained(t) => t.hash_function(),
            Store::Probing(t) => t.hash_function(),
        }
    }

    /// The slot index `key` hashes to before collision resolution.
    pub fn home_index(&self, key: &str) -> usize {
        match &self.store {
            Store::Chained(t) => t.home_index(key),
            Store::Probing(t) => t.home_index(key),
        }
    }

    /// Entries physically stored at slot `index`: the whole chain in order
    /// under chaining, the single occupant under linear probing.
    pub fn bucket(&self, index: usize) -> Vec<(&str, i64)> {
        match &self.store {
            Store::Chained(t) => t.bucket(index),
            Store::Probing(t) => t.bucket(index),
        }
    }

    /// Iterates over all `(key, value)` pairs. No particular order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, i64)> + '_> {
        match &self.store {
            Store::Chained(t) => Box::new(t.iter()),
            Store::Probing(t) => Box::new(t.iter()),
        }
    }

    pub fn stats(&self) -> &TableStats {
        &self.stats
    }
}

impl fmt::Display for HashTable {
    /// One summary line, then `index->depth: key: value` per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "HashTable({}, {}) size: {}, capacity: {}, is_empty: {}",
            self.strategy(),
            self.hash_function(),
            self.size(),
            self.capacity(),
            self.is_empty()
        )?;
        match &self.store {
            Store::Chained(t) => {
                for (idx, depth, key, value) in t.positions() {
                    writeln!(f, "  {idx}->{depth}: {key}: {value}")?;
                }
            }
            Store::Probing(t) => {
                for (idx, key, value) in t.positions() {
                    writeln!(f, "  {idx}->0: {key}: {value}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    const ALL_HASHES: [HashFunction; 4] = [
        HashFunction::Djb2,
        HashFunction::Fnv1a,
        HashFunction::Jenkins,
        HashFunction::Additive,
    ];
    const ALL_STRATEGIES: [Strategy; 2] = [Strategy::Chaining, Strategy::LinearProbing];

    fn build(capacity: usize, strategy: Strategy, hash_fn: HashFunction) -> HashTable {
        HashTableBuilder::new()
            .with_capacity(capacity)
            .with_strategy(strategy)
            .with_hash_function(hash_fn)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_defaults() {
        let table = HashTableBuilder::new().build().unwrap();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.strategy(), Strategy::Chaining);
        assert_eq!(table.hash_function(), HashFunction::Djb2);
        assert!(table.is_empty());
    }

    #[test]
    fn zero_capacity_is_an_error() {
        for strategy in ALL_STRATEGIES {
            let err = HashTableBuilder::new()
                .with_capacity(0)
                .with_strategy(strategy)
                .build()
                .unwrap_err();
            assert_eq!(err, Error::ZeroCapacity);
        }
        assert!(HashTable::new(0).is_err());
    }

    #[test]
    fn animal_counts_scenario() {
        for strategy in ALL_STRATEGIES {
            for hash_fn in ALL_HASHES {
                let mut table = build(40, strategy, hash_fn);
                table.insert("puppy", 5).unwrap();
                table.insert("kitty", 8).unwrap();
                table.insert("horsie", 12).unwrap();
                assert_eq!(table.insert("puppy", 7), Ok(Some(5)));

                assert_eq!(table.size(), 3);
                assert_eq!(table.get("puppy"), Some(7));
                assert_eq!(table.get("kitty"), Some(8));
                assert_eq!(table.get("horsie"), Some(12));
                assert_eq!(table.get("wolfie"), None);
                assert!(!table.contains("wolfie"));

                table.clear();
                assert_eq!(table.size(), 0);
                assert!(table.is_empty());
                assert_eq!(table.get("puppy"), None);
                assert_eq!(table.capacity(), 40);
            }
        }
    }

    #[test]
    fn capacity_one_collision() {
        let mut chained = build(1, Strategy::Chaining, HashFunction::Djb2);
        chained.insert("a", 1).unwrap();
        chained.insert("b", 2).unwrap();
        assert_eq!(chained.get("a"), Some(1));
        assert_eq!(chained.get("b"), Some(2));
        assert_eq!(chained.load_factor(), 2.0);

        let mut probing = build(1, Strategy::LinearProbing, HashFunction::Djb2);
        probing.insert("a", 1).unwrap();
        assert_eq!(
            probing.insert("b", 2),
            Err(Error::TableFull { capacity: 1 })
        );
        assert_eq!(probing.get("a"), Some(1));
        assert_eq!(probing.size(), 1);
        assert_eq!(probing.stats().rejected, 1);
    }

    #[test]
    fn probing_accepts_exactly_capacity_keys() {
        for hash_fn in ALL_HASHES {
            let mut table = build(16, Strategy::LinearProbing, hash_fn);
            for i in 0..16 {
                assert_eq!(table.insert(&format!("key-{i}"), i), Ok(None));
            }
            assert!(table.insert("one-too-many", 16).is_err());
            assert_eq!(table.size(), 16);
            for i in 0..16 {
                assert_eq!(table.get(&format!("key-{i}")), Some(i));
            }
        }
    }

    #[test]
    fn chaining_survives_forced_collisions() {
        // Every permutation of the same letters collides under the additive hash.
        let keys = ["abc", "acb", "bac", "bca", "cab", "cba"];
        let mut table = build(8, Strategy::Chaining, HashFunction::Additive);
        for (i, k) in keys.iter().enumerate() {
            table.insert(k, i as i64).unwrap();
        }
        let home = table.home_index("abc");
        assert_eq!(table.bucket(home).len(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(table.get(k), Some(i as i64));
        }
    }

    #[test]
    fn remove_then_reinsert() {
        for strategy in ALL_STRATEGIES {
            let mut table = build(8, strategy, HashFunction::Fnv1a);
            table.insert("kitty", 8).unwrap();
            assert_eq!(table.remove("kitty"), Some(8));
            assert_eq!(table.remove("kitty"), None);
            assert!(!table.contains("kitty"));
            assert_eq!(table.insert("kitty", 9), Ok(None));
            assert_eq!(table.get("kitty"), Some(9));
            assert_eq!(table.size(), 1);
        }
    }

    #[test]
    fn stats_track_operations() {
        let mut table = build(4, Strategy::LinearProbing, HashFunction::Djb2);
        for k in ["a", "b", "c", "d"] {
            table.insert(k, 1).unwrap();
        }
        table.insert("a", 2).unwrap();
        let _ = table.insert("e", 3);
        table.remove("b");
        table.remove("missing");
        table.clear();
        assert_eq!(
            *table.stats(),
            TableStats {
                inserts: 4,
                updates: 1,
                removals: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn iter_visits_every_entry() {
        for strategy in ALL_STRATEGIES {
            let mut table = build(10, strategy, HashFunction::Jenkins);
            for (k, v) in [("puppy", 5), ("kitty", 8), ("horsie", 12)] {
                table.insert(k, v).unwrap();
            }
            let mut items: Vec<_> = table.iter().collect();
            items.sort();
            assert_eq!(items, vec![("horsie", 12), ("kitty", 8), ("puppy", 5)]);
        }
    }

    #[test]
    fn display_lists_entries() {
        let mut table = build(1, Strategy::Chaining, HashFunction::Djb2);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        let text = table.to_string();
        assert_eq!(
            text,
            "HashTable(chaining, djb2) size: 2, capacity: 1, is_empty: false\n  0->0: a: 1\n  0->1: b: 2\n"
        );

        let empty = build(3, Strategy::LinearProbing, HashFunction::Fnv1a);
        assert_eq!(
            empty.to_string(),
            "HashTable(linear probing, fnv1a) size: 0, capacity: 3, is_empty: true\n"
        );
    }

    /// Replays a random workload against `std::collections::HashMap`.
    #[test]
    fn matches_std_hashmap_under_random_ops() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for strategy in ALL_STRATEGIES {
            for hash_fn in ALL_HASHES {
                let capacity = 64;
                let mut table = build(capacity, strategy, hash_fn);
                let mut model: HashMap<String, i64> = HashMap::new();

                for _ in 0..2_000 {
                    let key = format!("k{}", rng.gen_range(0..48));
                    match rng.gen_range(0..4) {
                        0 | 1 => {
                            let value: i64 = rng.gen();
                            let expected = model.insert(key.clone(), value);
                            assert_eq!(table.insert(&key, value), Ok(expected));
                        }
                        2 => assert_eq!(table.remove(&key), model.remove(&key)),
                        _ => assert_eq!(table.get(&key), model.get(&key).copied()),
                    }
                    assert_eq!(table.size(), model.len());
                }

                for (k, v) in &model {
                    assert_eq!(table.get(k), Some(*v));
                }
                assert_eq!(table.iter().count(), model.len());
            }
        }
    }
}
