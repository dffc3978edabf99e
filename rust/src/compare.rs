//! Key ordering for the tree.
//!
//! A comparator is a strict "less than" predicate. Equality is never asked of
//! the key type: two keys are the same key when neither orders before the
//! other.

use std::fmt;

/// Strict weak ordering over keys of type `K`.
pub trait Compare<K: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns true if neither key orders before the other.
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order through `Ord`. The default comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

impl<K: Ord + ?Sized> Compare<K> for Less {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order through `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<K: Ord + ?Sized> Compare<K> for Greater {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

/// Adapts a closure `Fn(&K, &K) -> bool` into a comparator.
///
/// ```
/// use rbcontainers::{CompareFn, RBSet};
///
/// let by_len = CompareFn(|a: &&str, b: &&str| a.len() < b.len());
/// let mut set = RBSet::with_comparator(by_len);
/// set.insert("ccc");
/// set.insert("a");
/// assert!(!set.insert("b").1); // same length as "a"
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "ccc"]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct CompareFn<F>(pub F);

impl<K: ?Sized, F> Compare<K> for CompareFn<F>
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for CompareFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompareFn(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less_and_greater() {
        assert!(Less.less(&1, &2));
        assert!(!Less.less(&2, &2));
        assert!(Greater.less(&2, &1));
        assert!(!Greater.less(&1, &2));
    }

    #[test]
    fn test_equivalence_by_negation() {
        let modulo = CompareFn(|a: &u32, b: &u32| a % 10 < b % 10);
        assert!(modulo.equivalent(&3, &13));
        assert!(!modulo.equivalent(&3, &4));
        assert!(Less.equivalent("abc", "abc"));
    }
}
