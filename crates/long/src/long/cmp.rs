use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::Long;

impl Long {
    /// Numeric equality. The bits must match, and when the tags differ a set
    /// top bit means one side is negative and the other is above `MAX_VALUE`,
    /// so the values differ. Zero is equal to zero under either tag.
    pub fn eq(&self, other: impl Into<Long>) -> bool {
        let other: Long = other.into();
        if self.unsigned != other.unsigned && self.top_bit() && other.top_bit() {
            return false;
        }
        self.bits == other.bits
    }

    /// Orders by the value each side denotes under its own tag.
    pub fn compare(&self, other: impl Into<Long>) -> Ordering {
        let other: Long = other.into();
        self.value().cmp(&other.value())
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub const fn is_odd(&self) -> bool {
        self.bits & 1 == 1
    }

    /// Strictly below zero. Always false for unsigned values.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        !self.unsigned && self.top_bit()
    }
}

impl PartialEq for Long {
    fn eq(&self, other: &Long) -> bool {
        Long::eq(self, *other)
    }
}

impl Eq for Long {}

impl PartialOrd for Long {
    fn partial_cmp(&self, other: &Long) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Long {
    fn cmp(&self, other: &Long) -> Ordering {
        self.compare(*other)
    }
}

impl Hash for Long {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::{BTreeSet, HashSet};

    use super::Long;

    #[test]
    fn eq_ignores_tag_below_top_bit() {
        assert!(Long::from(7i64).eq(Long::from(7u64)));
        assert!(Long::MAX_VALUE.eq(Long::MAX_VALUE.to_unsigned()));
        assert!(!Long::from(-1i64).eq(Long::MAX_UNSIGNED_VALUE));
        assert!(Long::from(-1i64).eq(Long::from(-1i64)));
    }

    #[test]
    fn eq_converts_host_numbers_whole() {
        assert!(Long::ONE.neg().eq(-1.0));
        assert!(Long::from(1u64 << 40).eq(1_099_511_627_776.0));
        assert!(!Long::from(1u64 << 40).eq(0.0));
        assert!(Long::MAX_VALUE.eq(f64::INFINITY));
        assert!(Long::ZERO.eq(f64::NAN));
    }

    #[test]
    fn compare_orders_by_value() {
        assert_eq!(Long::from(-1i64).compare(Long::ZERO), Ordering::Less);
        assert_eq!(Long::from(-1i64).compare(Long::MAX_UNSIGNED_VALUE), Ordering::Less);
        assert_eq!(Long::MIN_VALUE.to_unsigned().compare(Long::MAX_VALUE), Ordering::Greater);
        assert_eq!(Long::UZERO.compare(Long::ZERO), Ordering::Equal);
    }

    #[test]
    fn predicates() {
        assert!(Long::UZERO.is_zero());
        assert!(Long::from(-3i64).is_odd());
        assert!(!Long::from(-4i64).is_odd());
        assert!(Long::MIN_VALUE.is_negative());
        assert!(!Long::MAX_UNSIGNED_VALUE.is_negative());
        assert!(!Long::ZERO.is_negative());
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(Long::ZERO);
        assert!(set.contains(&Long::UZERO));
        set.insert(Long::from(-32i64));
        assert!(!set.contains(&Long::from(-32i64).to_unsigned()));
    }

    #[test]
    fn sorts_mixed_tags() {
        let set: BTreeSet<Long> = [
            Long::MAX_UNSIGNED_VALUE,
            Long::from(-5i64),
            Long::MAX_VALUE,
            Long::MIN_VALUE,
            Long::UZERO,
        ]
        .into_iter()
        .collect();
        let order: Vec<String> = set.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            order,
            [
                "-9223372036854775808",
                "-5",
                "0",
                "9223372036854775807",
                "18446744073709551615",
            ]
        );
    }
}
