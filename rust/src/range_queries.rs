//! Range query operations for RBTree.
//!
//! A range is resolved to a pair of nodes with `lower_bound` and
//! `upper_bound`, then walked with the ordinary successor links.

use std::ops::{Bound, RangeBounds};

use crate::compare::{Compare, Less};
use crate::types::{NodeId, RBTree, NIL};

/// Iterator over the key-value pairs of a key range, in order.
pub struct RangeIterator<'a, K, V, C = Less> {
    tree: &'a RBTree<K, V, C>,
    front: NodeId,
    back: NodeId,
    finished: bool,
}

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    /// Returns an iterator over key-value pairs in a range using Rust's range
    /// syntax. A range whose start lies after its end is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::RBTree;
    ///
    /// let tree: RBTree<i32, String> = (0..10).map(|i| (i, format!("value{}", i))).collect();
    ///
    /// let keys: Vec<_> = tree.range(3..7).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [3, 4, 5, 6]);
    ///
    /// let keys: Vec<_> = tree.range(7..).rev().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [9, 8, 7]);
    ///
    /// assert_eq!(tree.range(..=1).count(), 2);
    /// ```
    pub fn range<R>(&self, range: R) -> RangeIterator<'_, K, V, C>
    where
        R: RangeBounds<K>,
    {
        let (start, end) = self.resolve_range_bounds(&range);
        RangeIterator::new(self, start, end)
    }

    /// Smallest entry.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.nodes[self.subtree_min(self.root)].entry()
    }

    /// Largest entry, read through the max-cache.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.nodes[self.nodes[NIL].parent].entry()
    }

    // ============================================================================
    // RANGE HELPERS
    // ============================================================================

    /// Map range bounds to the first node inside and the first node past the
    /// range.
    fn resolve_range_bounds<R>(&self, range: &R) -> (NodeId, NodeId)
    where
        R: RangeBounds<K>,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound_id(key),
            Bound::Excluded(key) => self.upper_bound_id(key),
            Bound::Unbounded => self.subtree_min(self.root),
        };
        let end = match range.end_bound() {
            Bound::Included(key) => self.upper_bound_id(key),
            Bound::Excluded(key) => self.lower_bound_id(key),
            Bound::Unbounded => NIL,
        };
        (start, end)
    }
}

// ============================================================================
// RANGE ITERATOR
// ============================================================================

impl<'a, K, V, C: Compare<K>> RangeIterator<'a, K, V, C> {
    /// Iterate `[start, end)`; `back` is the last node inside.
    fn new(tree: &'a RBTree<K, V, C>, start: NodeId, end: NodeId) -> Self {
        let back = tree.predecessor_id(end);
        let finished = start == NIL
            || start == end
            || back == NIL
            || tree.less(tree.nodes[back].key(), tree.nodes[start].key());
        Self {
            tree,
            front: start,
            back,
            finished,
        }
    }
}

impl<'a, K, V, C: Compare<K>> Iterator for RangeIterator<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let id = self.front;
        if id == self.back {
            self.finished = true;
        } else {
            self.front = self.tree.successor_id(id);
        }
        self.tree.nodes[id].entry()
    }
}

impl<K, V, C: Compare<K>> DoubleEndedIterator for RangeIterator<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let id = self.back;
        if id == self.front {
            self.finished = true;
        } else {
            self.back = self.tree.predecessor_id(id);
        }
        self.tree.nodes[id].entry()
    }
}

impl<K, V, C: Compare<K>> std::iter::FusedIterator for RangeIterator<'_, K, V, C> {}
