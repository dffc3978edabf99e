//! GET operations for RBTree.
//!
//! Point lookup, bound queries and access to the entry behind a handle. All
//! searches are iterative descents from the root.

use crate::compare::Compare;
use crate::types::{NodeId, NodeRef, RBTree, Side, Slot, NIL};

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Find the node holding `key`, or `end()` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.find(&1), tree.end());
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get_entry(tree.find(&1)), Some((&1, &"one")));
    /// ```
    pub fn find(&self, key: &K) -> NodeRef<K, V> {
        NodeRef::new(self.find_id(key))
    }

    /// First node whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> NodeRef<K, V> {
        NodeRef::new(self.lower_bound_id(key))
    }

    /// First node whose key is strictly greater than `key`.
    pub fn upper_bound(&self, key: &K) -> NodeRef<K, V> {
        NodeRef::new(self.upper_bound_id(key))
    }

    /// `(lower_bound(key), upper_bound(key))`: the half-open run of nodes
    /// equivalent to `key`, holding at most one node.
    pub fn equal_range(&self, key: &K) -> (NodeRef<K, V>, NodeRef<K, V>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Get a reference to the value associated with a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Get the stored key and value for a key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.nodes[self.find_id(key)].entry()
    }

    /// Get a mutable reference to the value for a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_id(key);
        self.nodes[id].entry.as_mut().map(|(_, v)| v)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_id(key) != NIL
    }

    /// Number of nodes holding `key`: 0 or 1.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    // ============================================================================
    // HANDLE ACCESS
    // ============================================================================

    /// Dereference a handle. `None` for `end()` and for erased nodes.
    pub fn get_entry(&self, node: NodeRef<K, V>) -> Option<(&K, &V)> {
        self.nodes.get(node.id()).and_then(|n| n.entry())
    }

    /// Key behind a handle.
    pub fn key_at(&self, node: NodeRef<K, V>) -> Option<&K> {
        self.get_entry(node).map(|(k, _)| k)
    }

    /// Value behind a handle.
    pub fn value_at(&self, node: NodeRef<K, V>) -> Option<&V> {
        self.get_entry(node).map(|(_, v)| v)
    }

    /// Mutable value behind a handle. Keys are never handed out mutably.
    pub fn value_at_mut(&mut self, node: NodeRef<K, V>) -> Option<&mut V> {
        self.nodes
            .get_mut(node.id())
            .and_then(|n| n.entry.as_mut())
            .map(|(_, v)| v)
    }

    /// Returns true if `node` refers to a live node of this tree.
    pub fn is_live(&self, node: NodeRef<K, V>) -> bool {
        self.is_live_id(node.id())
    }

    // ============================================================================
    // PRIVATE SEARCH HELPERS
    // ============================================================================

    #[inline]
    pub(crate) fn less(&self, a: &K, b: &K) -> bool {
        self.comparator.less(a, b)
    }

    #[inline]
    pub(crate) fn is_live_id(&self, id: NodeId) -> bool {
        id != NIL && self.nodes.get(id).is_some_and(|n| !n.is_vacant())
    }

    pub(crate) fn find_id(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            if self.less(key, node.key()) {
                current = node.left;
            } else if self.less(node.key(), key) {
                current = node.right;
            } else {
                return current;
            }
        }
        NIL
    }

    pub(crate) fn lower_bound_id(&self, key: &K) -> NodeId {
        let mut result = NIL;
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            if self.less(node.key(), key) {
                current = node.right;
            } else {
                result = current;
                current = node.left;
            }
        }
        result
    }

    pub(crate) fn upper_bound_id(&self, key: &K) -> NodeId {
        let mut result = NIL;
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            if self.less(key, node.key()) {
                result = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        result
    }

    /// Descend from `start` to where `key` lives or belongs.
    ///
    /// `start` must be a real node whose subtree covers `key`.
    pub(crate) fn search_slot(&self, start: NodeId, key: &K) -> Slot {
        let mut current = start;
        loop {
            let node = &self.nodes[current];
            if self.less(key, node.key()) {
                if node.left == NIL {
                    return Slot::Vacant { parent: current, side: Side::Left };
                }
                current = node.left;
            } else if self.less(node.key(), key) {
                if node.right == NIL {
                    return Slot::Vacant { parent: current, side: Side::Right };
                }
                current = node.right;
            } else {
                return Slot::Occupied(current);
            }
        }
    }
}
