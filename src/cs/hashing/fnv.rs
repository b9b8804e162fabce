//! # FNV-1a Hash
//!
//! 64-bit FNV-1a (Fowler–Noll–Vo). Each input byte is XORed into the state and
//! the state is then multiplied by the FNV prime, with wrapping arithmetic.
//! It spreads short string keys noticeably better than djb2, which is why the
//! table offers it as an alternative home-index function.
//!
//! **Note**: FNV is not cryptographically secure.
//!
//! Besides the one-shot [`fnv64a_hash`], the module implements the standard
//! `std::hash::Hasher` trait so it can be used with `BuildHasher` for `HashMap`.

use std::hash::{BuildHasher, Hasher};

/// 64-bit FNV offset basis (14695981039346656037).
pub const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
/// 64-bit FNV prime (1099511628211).
pub const FNV64_PRIME: u64 = 0x100000001b3;

/// Returns the 64-bit FNV-1a hash of `data`.
pub fn fnv64a_hash(data: &[u8]) -> u64 {
    let mut hasher = FnvHasher::new();
    hasher.write(data);
    hasher.finish()
}

/// A `BuildHasher` producing fresh [`FnvHasher`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}

/// Streaming FNV-1a hasher implementing `std::hash::Hasher`.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates a hasher seeded with the offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV64_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
    }
}
