//! Utility functions and traits for `ChainedHashTable`

use crate::{ChainedHashTable, HashStrategy, TableError};

/// Extension trait for tables that provides additional utility methods
pub trait TableExtensions<V> {
    /// Returns the keys of the table as a Vec, in bucket order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec, in bucket order
    fn values(&self) -> Vec<V>;

    /// Returns true if the table contains the given key
    fn contains_key(&self, key: &str) -> bool;
}

impl<V, S> TableExtensions<V> for ChainedHashTable<V, S>
where
    V: Clone,
    S: HashStrategy,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_string()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}

/// Creates a `ChainedHashTable` bound to `strategy` from an iterator of
/// key-value pairs. Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
pub fn from_pairs<K, V, S, I>(
    strategy: S,
    table_size: usize,
    pairs: I,
) -> Result<ChainedHashTable<V, S>, TableError>
where
    K: Into<String>,
    S: HashStrategy,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = ChainedHashTable::new(strategy, table_size)?;
    table.extend(pairs);
    Ok(table)
}
