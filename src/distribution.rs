//! Bucket distribution analysis for hash strategies
//!
//! [`compute_distribution`] places every key of a batch into the bucket a
//! strategy assigns it, without deduplication, so the result is a pure
//! frequency report that can be used to compare how well strategies spread
//! similar keys.

use log::debug;

use crate::{HashStrategy, TableError, TableSize, strategy::bucket_of};

/// Keys grouped by the bucket a strategy placed them in.
///
/// Every bucket index in `0..table_size` is present, including empty ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Name of the strategy that produced the placement
    strategy: &'static str,
    /// Keys per bucket, in input order
    buckets: Vec<Vec<String>>,
}

/// Groups `keys` by the bucket `strategy` maps them to.
///
/// Input order is preserved inside each bucket and duplicate keys are
/// reported once per occurrence. An index the strategy reports past the last
/// bucket is reduced modulo the table size, so every key is placed.
///
/// # Errors
///
/// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
pub fn compute_distribution<S, I>(
    strategy: &S,
    keys: I,
    table_size: usize,
) -> Result<Distribution, TableError>
where
    S: HashStrategy + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let size = TableSize::new(table_size)?;
    let mut buckets = vec![Vec::new(); size.get()];

    for key in keys {
        let key = key.as_ref();
        if let Some(bucket) = buckets.get_mut(bucket_of(strategy, key, size)) {
            bucket.push(key.to_string());
        }
    }

    let distribution = Distribution { strategy: strategy.name(), buckets };
    debug!(
        "{} placed {} keys into {} buckets, {} left empty",
        distribution.strategy,
        distribution.total_keys(),
        size.get(),
        distribution.empty_buckets()
    );
    Ok(distribution)
}

impl Distribution {
    /// Name of the strategy that produced this distribution
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Number of buckets, equal to the table size
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Keys placed in bucket `index`, or `None` past the last bucket
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates over `(bucket index, keys)` in ascending bucket order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    /// Number of keys in every bucket
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Total number of keys placed
    #[must_use]
    pub fn total_keys(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Number of buckets that received no key
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Size of the fullest bucket
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Keys that landed in an already occupied bucket
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len().saturating_sub(1)).sum()
    }
}
