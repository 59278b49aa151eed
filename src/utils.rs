//! Helpers for filling a `ProbingTable` from existing pairs

use crate::{ProbingTable, TableError};

/// Creates a `ProbingTable` from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Propagates [`TableError::TableFull`] from [`ProbingTable::set`].
pub fn from_pairs<K, V, I>(pairs: I) -> Result<ProbingTable, TableError>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = ProbingTable::new();
    extend_from_pairs(&mut table, pairs)?;
    Ok(table)
}

/// Inserts every pair of an iterator into `table`
///
/// # Errors
///
/// Stops at the first [`TableError::TableFull`].
pub fn extend_from_pairs<K, V, I>(table: &mut ProbingTable, pairs: I) -> Result<(), TableError>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    for (key, value) in pairs {
        table.set(key, value)?;
    }
    Ok(())
}
