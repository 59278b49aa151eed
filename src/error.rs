use thiserror::Error;

/// Errors returned by [`ProbingTable`](crate::ProbingTable) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The key is not present in the table
    #[error("key `{0}` not found")]
    NotFound(String),
    /// Every slot was visited without finding a place for a new key.
    ///
    /// The resize policy keeps the table below its load factor, so this means the
    /// capacity bookkeeping is broken.
    #[error("table is full: no free slot among {capacity} slots")]
    TableFull {
        /// Number of slots that were probed
        capacity: usize,
    },
}
