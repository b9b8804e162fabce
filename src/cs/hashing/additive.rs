//! Additive hash: the wrapping sum of the key's bytes.
//!
//! Poor distribution (every anagram collides), which makes it handy for
//! building deliberately crowded buckets in tests and benchmarks.

/// Returns the wrapping byte sum of `data`.
pub fn additive_hash(data: &[u8]) -> u64 {
    data.iter().fold(0u64, |acc, &b| acc.wrapping_add(b as u64))
}
