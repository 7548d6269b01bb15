//! Error type shared by the hash strategies, the chained table and the analyzer

use thiserror::Error;

/// Failures reported by table construction, hashing and lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The requested number of buckets is not positive
    #[error("table size must be positive, got {0}")]
    InvalidTableSize(usize),
    /// No entry with this key lives in the key's bucket
    #[error("key '{key}' not found")]
    KeyNotFound {
        /// The key that was looked up
        key: String,
    },
}
