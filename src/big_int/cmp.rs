use std::cmp::Ordering;

use super::BigInteger;

/// Compares two normalized magnitudes: more limbs is larger, otherwise the
/// first differing limb from the top decides.
pub(crate) fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert!(a.len() == 1 || a.last() != Some(&0));
    debug_assert!(b.len() == 1 || b.last() != Some(&0));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

// 实现大小比较
impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => cmp_mag(self.magnitude(), other.magnitude()),
            (false, false) => cmp_mag(self.magnitude(), other.magnitude()).reverse(),
        }
    }
}
