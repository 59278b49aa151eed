//! Polynomial rolling hash over the characters of a key and the reduction of that
//! hash to a slot index.

/// Multiplier of the rolling hash
const MULTIPLIER: i64 = 31;

/// Hashes a key as `acc = acc * 31 + code_point` over its characters.
///
/// The accumulator is a wrapping `i64`, so long keys overflow silently and the
/// result may be negative. Use [`slot_index`] to turn it into a table position.
#[must_use]
pub fn hash(key: &str) -> i64 {
    key.chars().fold(0_i64, |acc, ch| {
        acc.wrapping_mul(MULTIPLIER).wrapping_add(i64::from(u32::from(ch)))
    })
}

/// Reduces a hash to an index in `0..capacity`.
///
/// Equivalent to `((hash % capacity) + capacity) % capacity`. `capacity` must be a
/// power of two; the low bits of the two's-complement hash are the euclidean
/// remainder in that case. A zero capacity maps everything to 0.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn slot_index(hash: i64, capacity: usize) -> usize {
    debug_assert!(capacity == 0 || capacity.is_power_of_two());
    (hash as u64 as usize) & capacity.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_hashes() {
        assert_eq!(hash(""), 0);
        assert_eq!(hash("a"), 97);
        assert_eq!(hash("abc"), 96_354);
    }

    #[test]
    fn test_classic_collisions() {
        assert_eq!(hash("Aa"), 2112);
        assert_eq!(hash("Aa"), hash("BB"));
        assert_eq!(hash("AaAa"), hash("BBBB"));
        assert_eq!(hash("AaBB"), hash("BBAa"));
    }

    #[test]
    fn test_non_ascii_uses_code_points() {
        assert_eq!(hash("é"), 233);
        assert_eq!(hash("aé"), 97 * 31 + 233);
    }

    #[test]
    fn test_long_keys_wrap() {
        let key = "z".repeat(200);
        assert_eq!(hash(&key), hash(&key));
    }

    #[test]
    fn test_negative_hash_normalizes() {
        assert_eq!(slot_index(-1, 16), 15);
        assert_eq!(slot_index(-17, 16), 15);
        assert_eq!(slot_index(-16, 16), 0);
        assert_eq!(slot_index(i64::MIN, 16), 0);
        assert_eq!(slot_index(i64::MAX, 16), 15);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(slot_index(12_345, 0), 0);
    }

    proptest! {
        #[test]
        fn slot_index_matches_euclidean_remainder(h in any::<i64>(), shift in 4_u32..20) {
            let capacity = 1_usize << shift;
            let expected = h.rem_euclid(1_i64 << shift);
            prop_assert_eq!(i64::try_from(slot_index(h, capacity)).ok(), Some(expected));
        }
    }
}
