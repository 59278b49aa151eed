//! # Probing Table
//!
//! A string-to-string hash table built on open addressing with linear probing.
//!
//! Keys are hashed with a polynomial rolling hash (`h * 31 + code_point`, wrapping),
//! placed at `hash mod capacity`, and pushed forward one slot at a time on collision.
//! The table doubles once an insert would take it past 80% occupancy. Removed keys
//! leave tombstones so that lookups keep following their probe chains.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probing_table::{ProbingTable, TableError};
//!
//! let mut table = ProbingTable::new();
//!
//! // Insert values
//! table.set("apple", "red")?;
//! table.set("banana", "yellow")?;
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok("red"));
//!
//! // Update values
//! assert_eq!(table.set("apple", "green")?, Some("red".to_string()));
//! assert_eq!(table.get("apple"), Ok("green"));
//!
//! // Remove values
//! assert!(table.remove("apple"));
//! assert_eq!(table.get("apple"), Err(TableError::NotFound("apple".to_string())));
//! assert_eq!(table.len(), 1);
//! # Ok::<(), TableError>(())
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use probing_table::ProbingTable;
//!
//! let mut table = ProbingTable::new();
//! assert_eq!(table.capacity(), 16);
//!
//! for i in 0..13 {
//!     table.set(format!("key-{i}"), i.to_string())?;
//! }
//! assert_eq!(table.capacity(), 32);
//! # Ok::<(), probing_table::TableError>(())
//! ```

/// Error type shared by the table operations
mod error;
/// Rolling hash and index normalization
mod hash;
/// Slot states
mod slot;
/// The table itself
mod table;
/// Construction helpers
mod utils;

pub use error::TableError;
pub use hash::{hash, slot_index};
pub use table::{Iter, LOAD_FACTOR_PERCENT, MIN_CAPACITY, ProbingTable};
pub use utils::{extend_from_pairs, from_pairs};
