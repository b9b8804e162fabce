//! String-keyed hash tables and the hash functions that drive them.
//!
//! - [`HashTable`]: fixed-capacity table with a selectable [`Strategy`]
//! - [`ChainedTable`]: separate chaining with owned linked lists
//! - [`LinearProbingTable`]: open addressing with linear probing and tombstones
//! - Hash functions: djb2, FNV-1a, Jenkins one-at-a-time, additive

pub mod additive;
pub mod djb2;
pub mod fnv;
pub mod hash_function;
pub mod jenkins;
pub mod open_addressing;
pub mod separate;
pub mod table;

pub use additive::additive_hash;
pub use djb2::{djb2_hash, Djb2BuildHasher, Djb2Hasher};
pub use fnv::{fnv64a_hash, FnvBuildHasher, FnvHasher};
pub use hash_function::HashFunction;
pub use jenkins::{jenkins_hash, JenkinsBuildHasher, JenkinsHasher};
pub use open_addressing::LinearProbingTable;
pub use separate::ChainedTable;
pub use table::{HashTable, HashTableBuilder, Strategy, TableStats, DEFAULT_CAPACITY};
