use std::{fmt, mem};

use log::{debug, error, trace};

use crate::{
    error::TableError,
    hash::{hash, slot_index},
    slot::Slot,
};

/// Smallest number of slots a table ever has
pub const MIN_CAPACITY: usize = 16;

/// Occupancy, in percent of the capacity, that an insert may not exceed
pub const LOAD_FACTOR_PERCENT: usize = 80;

/// Outcome of walking the probe sequence of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key lives at `index`
    Found {
        /// Position of the key
        index: usize,
        /// Number of slots inspected, including the one holding the key
        visited: usize,
    },
    /// The key is absent; a new entry for it belongs at this index
    Vacant(usize),
    /// The key is absent and no slot can take it
    Exhausted,
}

/// A string-to-string hash table with open addressing and linear probing.
///
/// Removed entries leave a tombstone behind so that keys placed further along the
/// same probe sequence stay reachable. Tombstones are reused by later inserts and
/// dropped whenever the slots are rebuilt.
///
/// Note: This implementation is not thread-safe. Share it behind a lock.
#[derive(Debug, Clone)]
pub struct ProbingTable {
    /// The slots, always a power of two in length
    slots: Vec<Slot>,
    /// Number of occupied slots
    len: usize,
    /// Number of tombstone slots
    tombstones: usize,
}

impl Default for ProbingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbingTable {
    /// Creates an empty table with [`MIN_CAPACITY`] slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` slots.
    ///
    /// The capacity is rounded up to a power of two no smaller than [`MIN_CAPACITY`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        Self { slots: vec![Slot::Empty; capacity], len: 0, tombstones: 0 }
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Starts at the key's home slot and steps forward one slot at a time, wrapping
    /// around, for at most `capacity` slots. Tombstones never stop the walk; the first
    /// one seen is remembered as the place for a new entry.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.slots.len();
        let mask = capacity.saturating_sub(1);
        let start = slot_index(hash(key), capacity);
        let mut reusable = None;

        for offset in 0..capacity {
            let index = start.wrapping_add(offset) & mask;
            match self.slots.get(index) {
                Some(Slot::Empty) | None => return Probe::Vacant(reusable.unwrap_or(index)),
                Some(Slot::Tombstone) => {
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                }
                Some(slot) => {
                    if slot.holds(key) {
                        return Probe::Found { index, visited: offset.saturating_add(1) };
                    }
                }
            }
        }

        reusable.map_or(Probe::Exhausted, Probe::Vacant)
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TableFull`] if no slot can take the key. The resize policy
    /// keeps the table below its load factor, so this signals broken bookkeeping.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, TableError> {
        let key = key.into();
        let value = value.into();

        if let Probe::Found { index, .. } = self.probe(&key) {
            let previous = self
                .slots
                .get_mut(index)
                .map(|slot| mem::replace(slot, Slot::Occupied { key, value }));
            return Ok(previous.and_then(Slot::into_value));
        }

        self.reserve_one()?;
        self.insert_new(key, value)?;
        Ok(None)
    }

    /// Places a key known to be absent
    fn insert_new(&mut self, key: String, value: String) -> Result<(), TableError> {
        let capacity = self.slots.len();
        let slot = match self.probe(&key) {
            Probe::Vacant(index) => self.slots.get_mut(index),
            Probe::Found { .. } | Probe::Exhausted => None,
        };
        let Some(slot) = slot else {
            error!("no slot left for key {key:?} after probing {capacity} slots");
            return Err(TableError::TableFull { capacity });
        };

        if matches!(slot, Slot::Tombstone) {
            self.tombstones = self.tombstones.saturating_sub(1);
        }
        *slot = Slot::Occupied { key, value };
        self.len = self.len.saturating_add(1);
        Ok(())
    }

    /// Rebuilds the slots if one more entry would push the table past its load factor.
    ///
    /// Live entries alone crossing the threshold double the capacity. Live entries
    /// plus tombstones crossing it rebuild at the same capacity.
    fn reserve_one(&mut self) -> Result<(), TableError> {
        let capacity = self.slots.len();
        let incoming = self.len.saturating_add(1);

        if exceeds_load_factor(incoming, capacity) {
            self.rebuild(capacity.saturating_mul(2).max(MIN_CAPACITY))
        } else if exceeds_load_factor(incoming.saturating_add(self.tombstones), capacity) {
            self.rebuild(capacity)
        } else {
            Ok(())
        }
    }

    /// Rehashes every live entry into `capacity` fresh slots, dropping tombstones
    fn rebuild(&mut self, capacity: usize) -> Result<(), TableError> {
        let old_slots = mem::replace(&mut self.slots, vec![Slot::Empty; capacity]);
        let old_capacity = old_slots.len();
        let dropped = mem::take(&mut self.tombstones);
        self.len = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                self.insert_new(key, value)?;
            }
        }

        debug!(
            "rebuilt table from {old_capacity} to {capacity} slots: {} entries moved, {dropped} tombstones dropped",
            self.len
        );
        Ok(())
    }

    /// Retrieves the value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&str, TableError> {
        let value = match self.probe(key) {
            Probe::Found { index, .. } => self.slots.get(index).and_then(Slot::value),
            Probe::Vacant(_) | Probe::Exhausted => None,
        };
        value.ok_or_else(|| TableError::NotFound(key.to_string()))
    }

    /// Returns true if the table contains the key
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found { .. })
    }

    /// Removes a key, returning true if it was present.
    ///
    /// The slot becomes a tombstone rather than empty.
    pub fn remove(&mut self, key: &str) -> bool {
        let Probe::Found { index, .. } = self.probe(key) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };

        *slot = Slot::Tombstone;
        self.len = self.len.saturating_sub(1);
        self.tombstones = self.tombstones.saturating_add(1);
        true
    }

    /// Number of slots visited to reach `key`, or `None` if it is absent.
    ///
    /// A key sitting in its home slot has a probe length of 1.
    #[must_use]
    pub fn probe_length(&self, key: &str) -> Option<usize> {
        match self.probe(key) {
            Probe::Found { visited, .. } => Some(visited),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        trace!("table holds {} entries", self.len);
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ratio of entries to slots
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Removes every entry. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    /// Removes every entry and shrinks back to [`MIN_CAPACITY`] slots
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the keys in slot order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    /// Returns the values in slot order
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.iter().map(|(_, value)| value.to_string()).collect()
    }

    /// Returns an iterator over the entries in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { slots: self.slots.iter() }
    }
}

/// Checks `count` entries against the load factor of `capacity` slots
fn exceeds_load_factor(count: usize, capacity: usize) -> bool {
    count.saturating_mul(100) > capacity.saturating_mul(LOAD_FACTOR_PERCENT)
}

impl fmt::Display for ProbingTable {
    /// Writes one line per slot: its index followed by its contents
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            writeln!(f, "{index} {slot}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProbingTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ProbingTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key.as_str(), value.as_str())),
            Slot::Empty | Slot::Tombstone => None,
        })
    }
}
