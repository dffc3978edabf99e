//! Construction and initialization logic for RBTree.
//!
//! Every constructor allocates the sentinel first, so it always lands in
//! arena slot `NIL` and lives exactly as long as the tree.

use crate::compact_arena::CompactArena;
use crate::compare::{Compare, Less};
use crate::types::{RBNode, RBTree, NIL};

impl<K: Ord, V> RBTree<K, V, Less> {
    /// Create an empty tree ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::RBTree;
    ///
    /// let tree = RBTree::<i32, String>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.begin(), tree.end());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// Create an empty tree whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Less)
    }
}

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    /// Create an empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::{Greater, RBTree};
    ///
    /// let mut tree = RBTree::with_comparator(Greater);
    /// tree.insert(1, ());
    /// tree.insert(3, ());
    /// tree.insert(2, ());
    /// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Create an empty tree ordered by `comparator` with room for `capacity`
    /// nodes before the arena grows.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        // One extra slot for the sentinel
        let mut nodes = CompactArena::with_capacity(capacity + 1);
        let nil = nodes.allocate(RBNode::sentinel());
        debug_assert_eq!(nil, NIL);

        Self {
            root: NIL,
            len: 0,
            nodes,
            comparator,
        }
    }

    /// The comparator this tree orders keys by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<K, V, C: Compare<K> + Default> Default for RBTree<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
