pub mod cs;
pub mod error;

pub use cs::hashing;
pub use cs::hashing::{HashFunction, HashTable, HashTableBuilder, Strategy};
pub use error::{Error, Result};
