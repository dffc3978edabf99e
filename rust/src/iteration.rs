//! Iterator implementations for RBTree.
//!
//! Navigation walks parent and child links only: no auxiliary stack and no
//! order index. The sentinel doubles as the end position, and stepping back
//! from it lands on the cached maximum.

use std::fmt;
use std::iter::FusedIterator;

use crate::compare::{Compare, Less};
use crate::types::{NodeId, NodeRef, RBTree, NIL};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over key-value pairs.
pub struct ItemIterator<'a, K, V, C = Less> {
    tree: &'a RBTree<K, V, C>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

/// Iterator over keys in order.
pub struct KeyIterator<'a, K, V, C = Less> {
    items: ItemIterator<'a, K, V, C>,
}

/// Iterator over values in key order.
pub struct ValueIterator<'a, K, V, C = Less> {
    items: ItemIterator<'a, K, V, C>,
}

/// Owning in-order iterator.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

/// Bidirectional position over a borrowed tree.
///
/// Moving past the last node parks the cursor on the end position; moving
/// back from there returns to the maximum.
pub struct Cursor<'a, K, V, C = Less> {
    tree: &'a RBTree<K, V, C>,
    current: NodeId,
}

// ============================================================================
// NAVIGATION
// ============================================================================

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    /// In-order successor. The successor of the maximum and of `end()` is
    /// `end()`.
    pub(crate) fn successor_id(&self, id: NodeId) -> NodeId {
        if id == NIL {
            return NIL;
        }
        let right = self.nodes[id].right;
        if right != NIL {
            return self.subtree_min(right);
        }
        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while parent != NIL && self.nodes[parent].right == child {
            child = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }

    /// In-order predecessor. The predecessor of `end()` is the maximum, the
    /// predecessor of the minimum is `end()`.
    pub(crate) fn predecessor_id(&self, id: NodeId) -> NodeId {
        if id == NIL {
            return self.nodes[NIL].parent;
        }
        let left = self.nodes[id].left;
        if left != NIL {
            return self.subtree_max(left);
        }
        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while parent != NIL && self.nodes[parent].left == child {
            child = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }

    /// Position of the smallest key, `end()` when empty.
    pub fn begin(&self) -> NodeRef<K, V> {
        NodeRef::new(self.subtree_min(self.root))
    }

    /// The past-the-end position: the sentinel.
    pub fn end(&self) -> NodeRef<K, V> {
        NodeRef::new(NIL)
    }

    /// Position of the largest key, read from the max-cache. `end()` when
    /// empty.
    pub fn last(&self) -> NodeRef<K, V> {
        NodeRef::new(self.nodes[NIL].parent)
    }

    /// Step a handle forward. A handle that is not live in this tree steps
    /// to `end()`.
    pub fn successor(&self, node: NodeRef<K, V>) -> NodeRef<K, V> {
        if !self.is_live_id(node.id()) {
            return self.end();
        }
        NodeRef::new(self.successor_id(node.id()))
    }

    /// Step a handle backward.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::RBTree;
    ///
    /// let tree: RBTree<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
    /// let max = tree.predecessor(tree.end());
    /// assert_eq!(tree.key_at(max), Some(&2));
    /// assert_eq!(tree.predecessor(tree.begin()), tree.end());
    /// ```
    pub fn predecessor(&self, node: NodeRef<K, V>) -> NodeRef<K, V> {
        if !node.is_end() && !self.is_live_id(node.id()) {
            return self.end();
        }
        NodeRef::new(self.predecessor_id(node.id()))
    }

    /// Returns an iterator over all key-value pairs in sorted order.
    pub fn iter(&self) -> ItemIterator<'_, K, V, C> {
        ItemIterator::new(self)
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K, V, C> {
        KeyIterator { items: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V, C> {
        ValueIterator { items: self.iter() }
    }

    /// Cursor parked on `begin()`.
    pub fn cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor { tree: self, current: self.subtree_min(self.root) }
    }

    /// Cursor parked on `node`, or on `end()` if `node` is not live.
    pub fn cursor_at(&self, node: NodeRef<K, V>) -> Cursor<'_, K, V, C> {
        let current = if self.is_live_id(node.id()) { node.id() } else { NIL };
        Cursor { tree: self, current }
    }
}

// ============================================================================
// ITEM ITERATOR
// ============================================================================

impl<'a, K, V, C: Compare<K>> ItemIterator<'a, K, V, C> {
    pub fn new(tree: &'a RBTree<K, V, C>) -> Self {
        Self {
            tree,
            front: tree.subtree_min(tree.root),
            back: tree.nodes[NIL].parent,
            remaining: tree.len,
        }
    }
}

impl<'a, K, V, C: Compare<K>> Iterator for ItemIterator<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = self.tree.successor_id(id);
        self.remaining -= 1;
        self.tree.nodes[id].entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C: Compare<K>> DoubleEndedIterator for ItemIterator<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = self.tree.predecessor_id(id);
        self.remaining -= 1;
        self.tree.nodes[id].entry()
    }
}

impl<K, V, C: Compare<K>> ExactSizeIterator for ItemIterator<'_, K, V, C> {}
impl<K, V, C: Compare<K>> FusedIterator for ItemIterator<'_, K, V, C> {}

impl<K, V, C> Clone for ItemIterator<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

// ============================================================================
// KEY AND VALUE ITERATORS
// ============================================================================

impl<'a, K, V, C: Compare<K>> Iterator for KeyIterator<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C: Compare<K>> DoubleEndedIterator for KeyIterator<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C: Compare<K>> ExactSizeIterator for KeyIterator<'_, K, V, C> {}

impl<'a, K, V, C: Compare<K>> Iterator for ValueIterator<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V, C: Compare<K>> DoubleEndedIterator for ValueIterator<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C: Compare<K>> ExactSizeIterator for ValueIterator<'_, K, V, C> {}

// ============================================================================
// OWNING ITERATOR
// ============================================================================

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V, C: Compare<K>> IntoIterator for RBTree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.len);
        let mut id = self.subtree_min(self.root);
        while id != NIL {
            // Links stay intact while entries are moved out
            let next = self.successor_id(id);
            entries.extend(self.nodes[id].entry.take());
            id = next;
        }
        IntoIter { entries: entries.into_iter() }
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a RBTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// CURSOR
// ============================================================================

impl<'a, K, V, C: Compare<K>> Cursor<'a, K, V, C> {
    /// Step to the in-order successor. Stays on the end position.
    pub fn move_next(&mut self) {
        self.current = self.tree.successor_id(self.current);
    }

    /// Step to the in-order predecessor. From the end position this is the
    /// maximum; from the minimum it is the end position.
    pub fn move_prev(&mut self) {
        self.current = self.tree.predecessor_id(self.current);
    }

    /// Entry under the cursor, `None` on the end position.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.tree.nodes.get(self.current).and_then(|n| n.entry())
    }

    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, v)| v)
    }

    /// Handle of the node under the cursor.
    pub fn node(&self) -> NodeRef<K, V> {
        NodeRef::new(self.current)
    }

    pub fn is_end(&self) -> bool {
        self.current == NIL
    }
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<K, V, C> PartialEq for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

// ============================================================================
// COLLECTION TRAITS
// ============================================================================

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug for RBTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C: Compare<K>> PartialEq for RBTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C: Compare<K>> Eq for RBTree<K, V, C> {}

impl<K: PartialOrd, V: PartialOrd, C: Compare<K>> PartialOrd for RBTree<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, C: Compare<K>> Ord for RBTree<K, V, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for RBTree<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for RBTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::RBTree;

    fn sample(n: i32) -> RBTree<i32, i32> {
        (0..n).map(|k| (k, k * k)).collect()
    }

    #[test]
    fn test_successor_walk_visits_in_order() {
        let tree: RBTree<i32, ()> = [5, 3, 8, 1, 4, 7, 9, 2, 6, 0].iter().map(|&k| (k, ())).collect();
        let mut keys = Vec::new();
        let mut pos = tree.begin();
        while pos != tree.end() {
            keys.push(*tree.key_at(pos).unwrap());
            pos = tree.successor(pos);
        }
        assert_eq!(keys, (0..10).collect::<Vec<_>>());
        assert_eq!(tree.successor(tree.end()), tree.end());
    }

    #[test]
    fn test_foreign_and_erased_handles_step_to_end() {
        let big = sample(100);
        let mut small = sample(3);
        let foreign = big.find(&90);
        assert_eq!(small.successor(foreign), small.end());
        assert_eq!(small.predecessor(foreign), small.end());
        assert!(small.cursor_at(foreign).is_end());

        let gone = small.find(&1);
        small.erase(gone);
        assert_eq!(small.successor(gone), small.end());
        assert_eq!(small.predecessor(gone), small.end());
        assert!(small.cursor_at(gone).get().is_none());
    }

    #[test]
    fn test_predecessor_walk_from_end() {
        let tree = sample(10);
        let mut keys = Vec::new();
        let mut pos = tree.predecessor(tree.end());
        while pos != tree.end() {
            keys.push(*tree.key_at(pos).unwrap());
            pos = tree.predecessor(pos);
        }
        assert_eq!(keys, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_tree_navigation() {
        let tree = RBTree::<i32, i32>::new();
        assert_eq!(tree.begin(), tree.end());
        assert_eq!(tree.last(), tree.end());
        assert_eq!(tree.predecessor(tree.end()), tree.end());
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_double_ended_iteration_meets_in_middle() {
        let tree = sample(7);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some((&0, &0)));
        assert_eq!(iter.next_back(), Some((&6, &36)));
        assert_eq!(iter.len(), 5);
        let middle: Vec<_> = iter.map(|(k, _)| *k).collect();
        assert_eq!(middle, [1, 2, 3, 4, 5]);

        let values: Vec<_> = tree.values().rev().copied().collect();
        assert_eq!(values, [36, 25, 16, 9, 4, 1, 0]);
    }

    #[test]
    fn test_into_iter_by_value() {
        let tree: RBTree<String, usize> =
            ["pear", "apple", "fig"].iter().map(|s| (s.to_string(), s.len())).collect();
        let owned: Vec<_> = tree.into_iter().collect();
        assert_eq!(
            owned,
            [("apple".to_string(), 5), ("fig".to_string(), 3), ("pear".to_string(), 4)]
        );
    }

    #[test]
    fn test_cursor_round_trip() {
        let tree = sample(3);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.key(), Some(&0));
        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.get(), Some((&2, &4)));
        cursor.move_next();
        assert!(cursor.is_end());
        cursor.move_next();
        assert!(cursor.is_end());
        cursor.move_prev();
        assert_eq!(cursor.value(), Some(&4));
        assert_eq!(cursor.node(), tree.last());
    }

    #[test]
    fn test_relational_traits() {
        let a = sample(3);
        let b = sample(3);
        let mut c = sample(3);
        c.insert(3, 0);
        assert_eq!(a, b);
        assert!(a < c);
        assert!(c > b);
        assert_eq!(format!("{:?}", a), "{0: 0, 1: 1, 2: 4}");
    }
}
