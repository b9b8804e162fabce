//! # Jenkins "One-At-A-Time" Hash
//!
//! Bob Jenkins's one-at-a-time hash over a **32-bit** state. Each byte is added
//! and mixed in; three final avalanche steps run once after the last byte.
//! When used as a table hash the 32-bit result is zero-extended to 64 bits.
//!
//! **Note**: This hash is not cryptographically secure.

use std::hash::{BuildHasher, Hasher};

/// Returns Jenkins's one-at-a-time hash of `data`.
pub fn jenkins_hash(data: &[u8]) -> u32 {
    let mut hasher = JenkinsHasher::new();
    hasher.write(data);
    hasher.finish() as u32
}

/// A `BuildHasher` producing [`JenkinsHasher`]s that start from `seed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsBuildHasher {
    seed: u32,
}

impl JenkinsBuildHasher {
    /// Hashers built from this start at `seed` instead of 0.
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

impl BuildHasher for JenkinsBuildHasher {
    type Hasher = JenkinsHasher;

    fn build_hasher(&self) -> Self::Hasher {
        JenkinsHasher { state: self.seed }
    }
}

/// Streaming one-at-a-time hasher. `write` performs the per-byte mixing only;
/// the avalanche is applied in `finish`, so the hasher can keep accepting bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsHasher {
    state: u32,
}

impl JenkinsHasher {
    pub fn new() -> Self {
        Self { state: 0 }
    }
}

impl Hasher for JenkinsHasher {
    fn finish(&self) -> u64 {
        let mut h = self.state;
        h = h.wrapping_add(h << 3);
        h ^= h >> 11;
        h = h.wrapping_add(h << 15);
        h as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self.state.wrapping_add(b as u32);
            self.state = self.state.wrapping_add(self.state << 10);
            self.state ^= self.state >> 6;
        }
    }
}
