//! # Chained Hash Table
//!
//! A minimal key-value table using separate chaining, parameterized by a
//! pluggable string hashing strategy.
//!
//! This crate provides:
//!
//! - [`HashStrategy`] with three implementations, [`Simple`], [`Horner`] and
//!   [`Djb2`], mapping a string key onto a bucket index
//! - [`ChainedHashTable`]: a fixed-size table that delegates bucket selection to
//!   its strategy
//! - [`compute_distribution`]: groups a batch of keys by bucket to evaluate how
//!   evenly a strategy spreads them
//!
//! Hashes work on Unicode code points and reduce modulo the table size after
//! every character, so results are identical for long and non-ASCII keys on
//! every platform.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainhash::{ChainedHashTable, Djb2, TableError};
//!
//! # fn main() -> Result<(), TableError> {
//! // Create a table with 10 buckets
//! let mut table = ChainedHashTable::new(Djb2, 10)?;
//!
//! // Insert values
//! table.put("apple", 1);
//! table.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//!
//! // Update values
//! table.put("apple", 10);
//! assert_eq!(table["apple"], 10);
//! assert_eq!(table.len(), 2);
//!
//! // Missing keys are reported, never defaulted
//! assert!(table.get("cherry").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Distribution Analysis
//!
//! ```rust
//! use chainhash::{Horner, Simple, compute_distribution};
//!
//! let keys: Vec<String> = (1..=25).map(|i| format!("klucz{i}")).collect();
//!
//! let simple = compute_distribution(&Simple, &keys, 10).unwrap();
//! let horner = compute_distribution(&Horner, &keys, 10).unwrap();
//!
//! assert_eq!(simple.table_size(), 10);
//! assert_eq!(horner.total_keys(), 25);
//! println!("{simple}");
//! ```

/// Module implementing the separate-chaining table
mod chained_table;
/// Module implementing bucket distribution analysis
mod distribution;
/// Error type shared across the crate
mod error;
/// Logger setup for binaries and tests
pub mod logger;
/// Terminal report formatting
mod report;
/// String hash strategies
mod strategy;
/// Utility functions and traits for the table
mod utils;

pub use chained_table::ChainedHashTable;
pub use distribution::{Distribution, compute_distribution};
pub use error::TableError;
pub use report::ComparisonTable;
pub use strategy::{Djb2, HashStrategy, Horner, Simple, TableSize, djb2_hash, horner_hash, simple_hash};
pub use utils::{TableExtensions, from_pairs};
