//! String hash strategies mapping a key onto a bucket index
//!
//! Every strategy folds the key's Unicode code points into an accumulator and
//! reduces it modulo the table size after each character, so results match the
//! reference values for arbitrarily long keys:
//!
//! | Strategy | Seed | Multiplier |
//! |----------|------|------------|
//! | [`Simple`] | 0 | 1 |
//! | [`Horner`] | 0 | 31 |
//! | [`Djb2`] | 5381 | 33 |

use std::num::NonZeroUsize;

use log::warn;

use crate::TableError;

/// Seed of the DJB2 accumulator
const DJB2_SEED: u128 = 5381;
/// Multiplier of the DJB2 accumulator
const DJB2_MULTIPLIER: u128 = 33;
/// Polynomial base used by Horner's scheme
const HORNER_BASE: u128 = 31;

/// Number of buckets in a table, guaranteed to be at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableSize(NonZeroUsize);

impl TableSize {
    /// Validates a bucket count.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidTableSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, TableError> {
        NonZeroUsize::new(size).map(Self).ok_or(TableError::InvalidTableSize(size))
    }

    /// Returns the bucket count
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for TableSize {
    type Error = TableError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<NonZeroUsize> for TableSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

/// A deterministic mapping from a string key to a bucket index.
///
/// Implementations must be pure: the same key and table size always yield the
/// same index, and the index is always below `table_size`.
pub trait HashStrategy {
    /// Name shown in reports
    fn name(&self) -> &'static str;

    /// Returns the bucket index of `key` in a table of `table_size` buckets
    fn index(&self, key: &str, table_size: TableSize) -> usize;
}

impl<T: HashStrategy + ?Sized> HashStrategy for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn index(&self, key: &str, table_size: TableSize) -> usize {
        (**self).index(key, table_size)
    }
}

impl<T: HashStrategy + ?Sized> HashStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn index(&self, key: &str, table_size: TableSize) -> usize {
        (**self).index(key, table_size)
    }
}

/// Sum of code points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simple;

/// Horner polynomial with base 31
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Horner;

/// Bernstein's DJB2: seed 5381, multiplier 33
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djb2;

impl HashStrategy for Simple {
    fn name(&self) -> &'static str {
        "simple_hash"
    }

    fn index(&self, key: &str, table_size: TableSize) -> usize {
        accumulate(key, table_size, 0, 1)
    }
}

impl HashStrategy for Horner {
    fn name(&self) -> &'static str {
        "horner_hash"
    }

    fn index(&self, key: &str, table_size: TableSize) -> usize {
        accumulate(key, table_size, 0, HORNER_BASE)
    }
}

impl HashStrategy for Djb2 {
    fn name(&self) -> &'static str {
        "djb2_hash"
    }

    fn index(&self, key: &str, table_size: TableSize) -> usize {
        accumulate(key, table_size, DJB2_SEED, DJB2_MULTIPLIER)
    }
}

/// Asks `strategy` for the bucket of `key` and folds an out-of-range answer
/// back into `0..table_size`, so a misbehaving strategy can never make a key
/// disappear.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn bucket_of<S>(strategy: &S, key: &str, table_size: TableSize) -> usize
where
    S: HashStrategy + ?Sized,
{
    let index = strategy.index(key, table_size);
    if index < table_size.get() {
        return index;
    }
    warn!(
        "{} returned index {index} for '{key}' in a table of {} buckets, reducing it",
        strategy.name(),
        table_size.get()
    );
    index % table_size.get()
}

/// Folds `acc = (acc * multiplier + code_point) mod table_size` over the key.
///
/// The accumulator stays below the table size, so with a `u128` accumulator
/// `acc * multiplier + code_point` cannot overflow for any `usize` table size.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn accumulate(key: &str, table_size: TableSize, seed: u128, multiplier: u128) -> usize {
    let modulus = table_size.get() as u128;
    let hash = key
        .chars()
        .fold(seed % modulus, |acc, c| (acc * multiplier + u128::from(u32::from(c))) % modulus);
    // hash < modulus, which came from a usize
    hash as usize
}

/// Sum of the key's code points modulo `table_size`.
///
/// # Errors
///
/// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
pub fn simple_hash(key: &str, table_size: usize) -> Result<usize, TableError> {
    Ok(Simple.index(key, TableSize::new(table_size)?))
}

/// Horner's scheme with base 31, reduced modulo `table_size` at every step.
///
/// # Errors
///
/// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
pub fn horner_hash(key: &str, table_size: usize) -> Result<usize, TableError> {
    Ok(Horner.index(key, TableSize::new(table_size)?))
}

/// DJB2 reduced modulo `table_size` at every step.
///
/// # Errors
///
/// Returns [`TableError::InvalidTableSize`] when `table_size` is zero.
pub fn djb2_hash(key: &str, table_size: usize) -> Result<usize, TableError> {
    Ok(Djb2.index(key, TableSize::new(table_size)?))
}
