use std::fmt;

/// A single position in the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Never used since the last rebuild; terminates a probe walk
    #[default]
    Empty,
    /// Held an entry that was removed; probing continues past it
    Tombstone,
    /// Holds a live entry
    Occupied {
        /// The key of the entry
        key: String,
        /// The value associated with the key
        value: String,
    },
}

impl Slot {
    /// Returns true if this slot holds a live entry for `key`
    pub(crate) fn holds(&self, key: &str) -> bool {
        matches!(self, Self::Occupied { key: stored, .. } if stored == key)
    }

    /// Returns the value of a live entry
    pub(crate) fn value(&self) -> Option<&str> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            Self::Empty | Self::Tombstone => None,
        }
    }

    /// Consumes the slot, returning the value of a live entry
    pub(crate) fn into_value(self) -> Option<String> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("<empty>"),
            Self::Tombstone => f.write_str("<tombstone>"),
            Self::Occupied { key, value } => write!(f, "{key:?} => {value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_key_is_not_empty_slot() {
        let slot = Slot::Occupied { key: String::new(), value: "v".to_string() };
        assert!(slot.holds(""));
        assert!(!Slot::Empty.holds(""));
        assert!(!Slot::Tombstone.holds(""));
    }

    #[test]
    fn test_values() {
        let slot = Slot::Occupied { key: "k".to_string(), value: String::new() };
        assert_eq!(slot.value(), Some(""));
        assert_eq!(slot.into_value(), Some(String::new()));
        assert_eq!(Slot::Tombstone.value(), None);
        assert_eq!(Slot::Empty.into_value(), None);
    }

    #[test]
    fn test_display() {
        let slot = Slot::Occupied { key: "k".to_string(), value: "v".to_string() };
        assert_eq!(slot.to_string(), "\"k\" => \"v\"");
        assert_eq!(Slot::Empty.to_string(), "<empty>");
        assert_eq!(Slot::Tombstone.to_string(), "<tombstone>");
    }
}
