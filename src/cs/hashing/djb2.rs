//! # djb2 Hash
//!
//! Dan Bernstein's string hash: start from 5381 and, for every byte `c`,
//! compute `hash * 33 + c` as `(hash << 5) + hash + c`. All arithmetic wraps at
//! 64 bits. It is the default home-index function of [`HashTable`].
//!
//! [`HashTable`]: crate::cs::hashing::table::HashTable

use std::hash::{BuildHasher, Hasher};

/// Initial djb2 state.
pub const DJB2_SEED: u64 = 5381;

/// Returns the 64-bit djb2 hash of `data`.
pub fn djb2_hash(data: &[u8]) -> u64 {
    let mut hasher = Djb2Hasher::new();
    hasher.write(data);
    hasher.finish()
}

/// A `BuildHasher` producing fresh [`Djb2Hasher`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Djb2BuildHasher;

impl BuildHasher for Djb2BuildHasher {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djb2Hasher::new()
    }
}

/// Streaming djb2 hasher implementing `std::hash::Hasher`.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Djb2Hasher {
    pub fn new() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &c in bytes {
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(c as u64);
        }
    }
}
