use std::{fmt, mem, ops::Index};

use log::{debug, trace};

use crate::{HashStrategy, Simple, TableError, TableSize, strategy::bucket_of};

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// Entries whose keys hash to the same index, in insertion order
type Bucket<V> = Vec<Entry<V>>;

/// A fixed-size hash table resolving collisions by separate chaining.
///
/// The bucket index of every key is computed by the bound [`HashStrategy`].
/// The number of buckets never changes: chains simply grow as keys are added.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<V, S = Simple> {
    /// One chain per bucket index
    buckets: Vec<Bucket<V>>,
    /// Number of buckets
    table_size: TableSize,
    /// Number of distinct keys stored
    len: usize,
    /// Computes bucket indices
    strategy: S,
}

impl<V, S: HashStrategy> ChainedHashTable<V, S> {
    /// Creates a table with `table_size` empty buckets bound to `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
    pub fn new(strategy: S, table_size: usize) -> Result<Self, TableError> {
        Ok(Self::with_table_size(strategy, TableSize::new(table_size)?))
    }

    /// Creates a table from an already validated size
    #[must_use]
    pub fn with_table_size(strategy: S, table_size: TableSize) -> Self {
        debug!(
            "creating chained hash table with {} buckets using {}",
            table_size.get(),
            strategy.name()
        );
        let mut buckets = Vec::with_capacity(table_size.get());
        buckets.resize_with(table_size.get(), Vec::new);

        Self { buckets, table_size, len: 0, strategy }
    }

    /// Returns the bucket index `key` maps to.
    ///
    /// An index the strategy reports past the last bucket is reduced modulo the
    /// table size.
    #[must_use]
    pub fn bucket_index(&self, key: &str) -> usize {
        bucket_of(&self.strategy, key, self.table_size)
    }

    /// Inserts a key-value pair.
    ///
    /// An existing entry with the same key keeps its position in the chain and
    /// has its value replaced; the old value is returned. New keys are appended
    /// to the end of their bucket.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.bucket_index(&key);
        trace!("put '{key}' into bucket {index}");

        let bucket = self.buckets.get_mut(index)?;
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.len = self.len.saturating_add(1);
        None
    }

    /// Retrieves the value stored for `key`.
    ///
    /// Only the bucket `key` hashes to is scanned.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] when no entry matches.
    pub fn get(&self, key: &str) -> Result<&V, TableError> {
        let index = self.bucket_index(key);
        trace!("get '{key}' from bucket {index}");

        self.buckets
            .get(index)
            .and_then(|bucket| bucket.iter().find(|entry| entry.key == key))
            .map(|entry| &entry.value)
            .ok_or_else(|| TableError::KeyNotFound { key: key.to_string() })
    }

    /// Get a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] when no entry matches.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, TableError> {
        let index = self.bucket_index(key);

        self.buckets
            .get_mut(index)
            .and_then(|bucket| bucket.iter_mut().find(|entry| entry.key == key))
            .map(|entry| &mut entry.value)
            .ok_or_else(|| TableError::KeyNotFound { key: key.to_string() })
    }
}

impl<V, S> ChainedHashTable<V, S> {
    /// Returns the number of distinct keys in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.table_size.get()
    }

    /// Returns the strategy the table is bound to
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the chain length of every bucket, indexed by bucket
    #[must_use]
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Iterates over the key-value pairs bucket by bucket, each chain in
    /// insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (entry.key.as_str(), &entry.value)))
    }
}

impl<V, S: HashStrategy> Index<&str> for ChainedHashTable<V, S> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present, like [`std::collections::HashMap`].
    #[allow(clippy::panic)]
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashTable<V, S>
where
    K: Into<String>,
    S: HashStrategy,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V: fmt::Debug, S> fmt::Display for ChainedHashTable<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashMap:")?;
        for (index, bucket) in self.buckets.iter().enumerate() {
            let pairs: Vec<(&str, &V)> =
                bucket.iter().map(|entry| (entry.key.as_str(), &entry.value)).collect();
            writeln!(f, "  Bucket {index} -> {pairs:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Djb2, Horner};

    #[test]
    fn test_put_and_get() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Simple, 10)?;
        assert_eq!(table.put("key1", 1), None);
        assert_eq!(table.put("key2", 2), None);
        assert_eq!(table.put("key3", 3), None);

        assert_eq!(table.get("key1"), Ok(&1));
        assert_eq!(table.get("key2"), Ok(&2));
        assert_eq!(table.get("key3"), Ok(&3));
        assert_eq!(table.get("key4"), Err(TableError::KeyNotFound { key: "key4".to_string() }));
        Ok(())
    }

    #[test]
    fn test_zero_table_size() {
        let table = ChainedHashTable::<i32, _>::new(Horner, 0);
        assert_eq!(table.err(), Some(TableError::InvalidTableSize(0)));
    }

    #[test]
    fn test_update_keeps_len_and_position() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Simple, 1)?;
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);

        assert_eq!(table.put("b", 20), Some(2));
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("b"), Ok(&20));

        let order: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_get_on_empty_table() -> Result<(), TableError> {
        let table: ChainedHashTable<String, _> = ChainedHashTable::new(Djb2, 10)?;
        assert!(table.is_empty());
        assert_eq!(table.get(""), Err(TableError::KeyNotFound { key: String::new() }));
        Ok(())
    }

    #[test]
    fn test_keys_are_compared_exactly() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Horner, 16)?;
        table.put("Key", 1);
        assert!(table.get("key").is_err());
        assert!(table.get("Key ").is_err());
        assert_eq!(table.get("Key"), Ok(&1));
        Ok(())
    }

    #[test]
    fn test_collisions_chain_in_insertion_order() -> Result<(), TableError> {
        // "ab" and "ba" have the same code point sum
        let mut table = ChainedHashTable::new(Simple, 7)?;
        table.put("ab", 1);
        table.put("ba", 2);

        assert_eq!(table.bucket_index("ab"), table.bucket_index("ba"));
        let lengths = table.bucket_lengths();
        assert_eq!(lengths.iter().sum::<usize>(), 2);
        assert_eq!(lengths.get(table.bucket_index("ab")), Some(&2));
        assert_eq!(table.get("ab"), Ok(&1));
        assert_eq!(table.get("ba"), Ok(&2));
        Ok(())
    }

    #[test]
    fn test_get_mut() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Djb2, 4)?;
        table.put("key1", 1);

        *table.get_mut("key1")? += 10;

        assert_eq!(table.get("key1"), Ok(&11));
        assert!(table.get_mut("key2").is_err());
        Ok(())
    }

    #[test]
    fn test_index_sugar_and_extend() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Horner, 5)?;
        table.extend(vec![("x", 'x'), ("y", 'y')]);
        table.extend([("x".to_string(), 'z')]);

        assert_eq!(table["x"], 'z');
        assert_eq!(table["y"], 'y');
        assert_eq!(table.len(), 2);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "key 'missing' not found")]
    fn test_index_sugar_panics_on_missing_key() {
        if let Ok(table) = ChainedHashTable::<u8, _>::new(Simple, 3) {
            let _value = table["missing"];
        }
    }

    #[test]
    fn test_dyn_strategy() -> Result<(), TableError> {
        let strategy: Box<dyn HashStrategy> = Box::new(Djb2);
        let mut table = ChainedHashTable::new(strategy, 100)?;
        table.put("a", "first");
        assert_eq!(table.bucket_index("a"), 70);
        assert_eq!(table.strategy().name(), "djb2_hash");
        assert_eq!(table.get("a"), Ok(&"first"));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(Simple, 3)?;
        // 'a' = 97 -> bucket 1, 'b' = 98 -> bucket 2
        table.put("a", 1);
        table.put("b", 2);

        let expected = "HashMap:\n  Bucket 0 -> []\n  Bucket 1 -> [(\"a\", 1)]\n  Bucket 2 -> [(\"b\", 2)]\n";
        assert_eq!(table.to_string(), expected);
        Ok(())
    }

    #[test]
    fn test_klucz_scenario() -> Result<(), TableError> {
        let keys: Vec<String> = (1..=25).map(|i| format!("klucz{i}")).collect();
        let strategies: [&dyn HashStrategy; 3] = [&Simple, &Horner, &Djb2];

        for strategy in strategies {
            let mut table = ChainedHashTable::new(strategy, 10)?;
            for key in &keys {
                table.put(key.as_str(), key.len());
            }

            assert_eq!(table.len(), 25);
            assert_eq!(table.bucket_lengths().iter().sum::<usize>(), 25);
            for key in &keys {
                assert_eq!(table.get(key), Ok(&key.len()));
            }
        }
        Ok(())
    }

    /// Answers one past the last bucket for every key
    struct PastTheEnd;

    impl HashStrategy for PastTheEnd {
        fn name(&self) -> &'static str {
            "past_the_end"
        }

        fn index(&self, _key: &str, table_size: TableSize) -> usize {
            table_size.get()
        }
    }

    #[test]
    fn test_out_of_range_strategy_still_stores() -> Result<(), TableError> {
        let mut table = ChainedHashTable::new(PastTheEnd, 4)?;
        assert_eq!(table.put("a", 1), None);
        assert_eq!(table.put("b", 2), None);
        assert_eq!(table.put("a", 10), Some(1));

        assert_eq!(table.len(), 2);
        assert_eq!(table.bucket_index("a"), 0);
        assert_eq!(table.bucket_lengths(), vec![2, 0, 0, 0]);
        assert_eq!(table.get("a"), Ok(&10));
        assert_eq!(table.get("b"), Ok(&2));
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_put_then_get(
            earlier in proptest::collection::vec((".{0,12}", any::<u32>()), 0..40),
            key in ".{0,12}",
            value in any::<u32>(),
            size in 1usize..64,
        ) {
            let mut table = ChainedHashTable::new(Horner, size)?;
            table.extend(earlier);
            table.put(key.clone(), value);
            prop_assert_eq!(table.get(&key)?, &value);
        }

        #[test]
        fn prop_overwrite_keeps_count(
            keys in proptest::collection::hash_set("[a-z]{1,8}", 1..30),
            size in 1usize..16,
        ) {
            let mut table = ChainedHashTable::new(Djb2, size)?;
            for key in &keys {
                table.put(key.as_str(), 1);
            }
            for key in &keys {
                prop_assert_eq!(table.put(key.as_str(), 2), Some(1));
            }
            prop_assert_eq!(table.len(), keys.len());
            for key in &keys {
                prop_assert_eq!(table.get(key)?, &2);
            }
        }
    }
}
