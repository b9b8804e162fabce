//! Error types shared by the hash tables in this crate.
//!
//! Looking up an absent key is not an error: `get`, `contains` and `remove`
//! report that through `Option`/`bool`. Only construction and inserting into a
//! saturated open-addressing table can fail.

use thiserror::Error;

/// Errors produced by the table constructors and insert paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A table was requested with zero slots.
    #[error("hash table capacity must be greater than zero")]
    ZeroCapacity,

    /// Every slot on the probe path holds a different key, so the new key has
    /// nowhere to go. The table never grows.
    #[error("hash table is full: all {capacity} slots are occupied")]
    TableFull {
        /// The fixed slot count of the rejecting table.
        capacity: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
