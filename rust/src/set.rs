//! Ordered set facade: the tree engine with unit values.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeBounds;

use crate::compare::{Compare, Less};
use crate::iteration::{IntoIter, KeyIterator};
use crate::range_queries::RangeIterator;
use crate::types::{NodeRef, RBTree};

/// An ordered set of unique values.
///
/// # Examples
///
/// ```
/// use rbcontainers::RBSet;
///
/// let mut set = RBSet::new();
/// for v in [5, 3, 8, 1] {
///     set.insert(v);
/// }
/// assert!(set.contains(&3));
/// assert!(set.remove(&3));
/// assert!(!set.remove(&3));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 5, 8]);
/// ```
pub struct RBSet<T, C = Less> {
    tree: RBTree<T, (), C>,
}

/// In-order iterator over a set.
pub struct SetIter<'a, T, C = Less> {
    keys: KeyIterator<'a, T, (), C>,
}

/// Owning in-order iterator over a set.
pub struct SetIntoIter<T> {
    entries: IntoIter<T, ()>,
}

/// Iterator over a value range of a set.
pub struct SetRange<'a, T, C = Less> {
    inner: RangeIterator<'a, T, (), C>,
}

impl<T: Ord> RBSet<T, Less> {
    /// Creates an empty set ordered by `Ord`.
    pub fn new() -> Self {
        Self { tree: RBTree::new() }
    }
}

impl<T, C: Compare<T>> RBSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self { tree: RBTree::with_comparator(comparator) }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn value_comp(&self) -> &C {
        self.tree.comparator()
    }

    /// Borrow the underlying tree.
    pub fn as_tree(&self) -> &RBTree<T, (), C> {
        &self.tree
    }

    /// Insert a value. Returns its node and whether it was newly added.
    pub fn insert(&mut self, value: T) -> (NodeRef<T, ()>, bool) {
        self.tree.insert(value, ())
    }

    pub fn insert_hint(&mut self, hint: NodeRef<T, ()>, value: T) -> (NodeRef<T, ()>, bool) {
        self.tree.insert_hint(hint, value, ())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains_key(value)
    }

    pub fn count(&self, value: &T) -> usize {
        self.tree.count(value)
    }

    pub fn find(&self, value: &T) -> NodeRef<T, ()> {
        self.tree.find(value)
    }

    /// The value behind a handle, `None` for `end()` or an erased node.
    pub fn get(&self, node: NodeRef<T, ()>) -> Option<&T> {
        self.tree.key_at(node)
    }

    pub fn lower_bound(&self, value: &T) -> NodeRef<T, ()> {
        self.tree.lower_bound(value)
    }

    pub fn upper_bound(&self, value: &T) -> NodeRef<T, ()> {
        self.tree.upper_bound(value)
    }

    pub fn equal_range(&self, value: &T) -> (NodeRef<T, ()>, NodeRef<T, ()>) {
        self.tree.equal_range(value)
    }

    pub fn begin(&self) -> NodeRef<T, ()> {
        self.tree.begin()
    }

    pub fn end(&self) -> NodeRef<T, ()> {
        self.tree.end()
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first_key_value().map(|(v, _)| v)
    }

    pub fn last(&self) -> Option<&T> {
        self.tree.last_key_value().map(|(v, _)| v)
    }

    /// Remove a value. Returns true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.erase_key(value) == 1
    }

    /// Remove and return the stored value equivalent to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value).map(|(v, _)| v)
    }

    /// Erase the node behind a handle. Returns the number of nodes erased.
    pub fn erase(&mut self, node: NodeRef<T, ()>) -> usize {
        self.tree.erase(node)
    }

    /// Erase `[first, last)`.
    pub fn erase_range(&mut self, first: NodeRef<T, ()>, last: NodeRef<T, ()>) -> usize {
        self.tree.erase_range(first, last)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first().map(|(v, _)| v)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last().map(|(v, _)| v)
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.tree.retain(|v, _| keep(v))
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree)
    }

    pub fn iter(&self) -> SetIter<'_, T, C> {
        SetIter { keys: self.tree.keys() }
    }

    pub fn range<R: RangeBounds<T>>(&self, range: R) -> SetRange<'_, T, C> {
        SetRange { inner: self.tree.range(range) }
    }
}

// ============================================================================
// ITERATORS
// ============================================================================

impl<'a, T, C: Compare<T>> Iterator for SetIter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T, C: Compare<T>> DoubleEndedIterator for SetIter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for SetIter<'_, T, C> {}
impl<T, C: Compare<T>> FusedIterator for SetIter<'_, T, C> {}

impl<T> Iterator for SetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.entries.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for SetIntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.entries.next_back().map(|(v, _)| v)
    }
}

impl<T> ExactSizeIterator for SetIntoIter<T> {}

impl<'a, T, C: Compare<T>> Iterator for SetRange<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, _)| v)
    }
}

impl<T, C: Compare<T>> DoubleEndedIterator for SetRange<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(v, _)| v)
    }
}

// ============================================================================
// TRAITS
// ============================================================================

impl<T: Clone, C: Compare<T> + Clone> Clone for RBSet<T, C> {
    fn clone(&self) -> Self {
        Self { tree: self.tree.clone() }
    }
}

impl<T, C: Compare<T> + Default> Default for RBSet<T, C> {
    fn default() -> Self {
        Self { tree: RBTree::default() }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for RBSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C: Compare<T>> PartialEq for RBSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C: Compare<T>> Eq for RBSet<T, C> {}

impl<T: PartialOrd, C: Compare<T>> PartialOrd for RBSet<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, C: Compare<T>> Ord for RBSet<T, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for RBSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for RBSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T>> IntoIterator for RBSet<T, C> {
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter { entries: self.tree.into_iter() }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a RBSet<T, C> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
