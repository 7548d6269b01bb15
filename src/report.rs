//! Terminal tables for comparing strategies

use std::fmt::{self, Write};

use crate::{Distribution, HashStrategy, TableSize, strategy::bucket_of};

/// Width of the rule under a distribution table header
const DISTRIBUTION_RULE_WIDTH: usize = 40;
/// Width of the key column of the comparison table
const KEY_COLUMN_WIDTH: usize = 15;
/// Narrowest index column of the comparison table
const MIN_INDEX_COLUMN_WIDTH: usize = 6;

/// Bucket index of each key under several strategies, side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    /// Column headers, one per strategy
    strategies: Vec<&'static str>,
    /// Each key with its index under every strategy
    rows: Vec<(String, Vec<usize>)>,
}

impl ComparisonTable {
    /// Hashes every key with every strategy
    pub fn new<I>(keys: I, table_size: TableSize, strategies: &[&dyn HashStrategy]) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows = keys
            .into_iter()
            .map(|key| {
                let key = key.as_ref();
                let indices =
                    strategies.iter().map(|s| bucket_of(s, key, table_size)).collect();
                (key.to_string(), indices)
            })
            .collect();

        Self { strategies: strategies.iter().map(HashStrategy::name).collect(), rows }
    }

    /// Indices computed for `key`, in strategy order
    #[must_use]
    pub fn indices(&self, key: &str) -> Option<&[usize]> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, indices)| indices.as_slice())
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each column is as wide as its strategy name
        let widths: Vec<usize> =
            self.strategies.iter().map(|name| name.len().max(MIN_INDEX_COLUMN_WIDTH)).collect();

        let mut header = format!("{:width$}", "Key", width = KEY_COLUMN_WIDTH);
        for (name, width) in self.strategies.iter().zip(widths.iter().copied()) {
            write!(header, " | {name:width$}")?;
        }
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for (key, indices) in &self.rows {
            write!(f, "{key:width$}", width = KEY_COLUMN_WIDTH)?;
            for (index, width) in indices.iter().zip(widths.iter().copied()) {
                write!(f, " | {index:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key distribution for {}:", self.strategy())?;
        writeln!(f, "{:6} | {:5} | Keys", "Bucket", "Count")?;
        writeln!(f, "{}", "-".repeat(DISTRIBUTION_RULE_WIDTH))?;
        for (bucket, keys) in self.iter() {
            writeln!(f, "{bucket:6} | {:5} | {}", keys.len(), keys.join(", "))?;
        }
        Ok(())
    }
}
