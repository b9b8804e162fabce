//! Selectable string hash used to derive a key's home index.

use std::fmt;

use super::additive::additive_hash;
use super::djb2::djb2_hash;
use super::fnv::fnv64a_hash;
use super::jenkins::jenkins_hash;

/// The hash a table applies to its keys. The home index of a key is
/// `hash(key) % capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashFunction {
    /// djb2 (`hash * 33 + c`, seed 5381).
    #[default]
    Djb2,
    /// 64-bit FNV-1a.
    Fnv1a,
    /// Jenkins one-at-a-time, zero-extended from 32 bits.
    Jenkins,
    /// Wrapping byte sum.
    Additive,
}

impl HashFunction {
    /// Hashes `key` to a 64-bit value.
    pub fn hash(&self, key: &[u8]) -> u64 {
        match self {
            HashFunction::Djb2 => djb2_hash(key),
            HashFunction::Fnv1a => fnv64a_hash(key),
            HashFunction::Jenkins => jenkins_hash(key) as u64,
            HashFunction::Additive => additive_hash(key),
        }
    }

    /// Reduces the hash of `key` to a slot index in `0..capacity`.
    ///
    /// `capacity` must be non-zero; the tables guarantee this at construction.
    pub fn home_index(&self, key: &[u8], capacity: usize) -> usize {
        (self.hash(key) % capacity as u64) as usize
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashFunction::Djb2 => "djb2",
            HashFunction::Fnv1a => "fnv1a",
            HashFunction::Jenkins => "jenkins",
            HashFunction::Additive => "additive",
        };
        f.write_str(name)
    }
}
