//! INSERT operations for RBTree.
//!
//! Insertion finds the vacant link for the new key (from the root, or from a
//! verified hint), hangs a red node there and then restores the red-black
//! rules bottom-up with the five-case state machine below.

use log::trace;

use crate::compare::Compare;
use crate::types::{Color, NodeId, NodeRef, RBNode, RBTree, Side, Slot, NIL};

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Insert a key-value pair.
    ///
    /// Returns the node holding the key and whether it was created. An
    /// equivalent key already present is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbcontainers::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let (node, inserted) = tree.insert(1, "one");
    /// assert!(inserted);
    /// let (again, inserted) = tree.insert(1, "uno");
    /// assert!(!inserted);
    /// assert_eq!(node, again);
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (NodeRef<K, V>, bool) {
        if self.root == NIL {
            return (NodeRef::new(self.insert_root(key, value)), true);
        }
        match self.search_slot(self.root, &key) {
            Slot::Occupied(id) => (NodeRef::new(id), false),
            Slot::Vacant { parent, side } => {
                (NodeRef::new(self.attach(parent, side, key, value)), true)
            }
        }
    }

    /// Insert with a position hint.
    ///
    /// The hint is only a shortcut: when the key belongs right before or
    /// right after `hint` the new node is linked there without a descent from
    /// the root, otherwise this behaves exactly like [`insert`](Self::insert).
    pub fn insert_hint(&mut self, hint: NodeRef<K, V>, key: K, value: V) -> (NodeRef<K, V>, bool) {
        if self.root == NIL {
            return self.insert(key, value);
        }
        match self.check_hint(hint.id(), &key) {
            Some(Slot::Occupied(id)) => (NodeRef::new(id), false),
            Some(Slot::Vacant { parent, side }) => {
                (NodeRef::new(self.attach(parent, side, key, value)), true)
            }
            None => {
                trace!("hint {} rejected, descending from root", hint.id());
                self.insert(key, value)
            }
        }
    }

    /// Get the value for `key`, inserting `make()` first if it is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let id = if self.root == NIL {
            self.insert_root(key, make())
        } else {
            match self.search_slot(self.root, &key) {
                Slot::Occupied(id) => id,
                Slot::Vacant { parent, side } => self.attach(parent, side, key, make()),
            }
        };
        self.nodes[id].value_mut()
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    fn insert_root(&mut self, key: K, value: V) -> NodeId {
        let mut node = RBNode::new_leaf(key, value, NIL);
        node.color = Color::Black;
        let id = self.nodes.allocate(node);
        self.root = id;
        self.len = 1;
        self.nodes[NIL].parent = id;
        id
    }

    /// Link a new red node into the vacant `side` of `parent` and rebalance.
    fn attach(&mut self, parent: NodeId, side: Side, key: K, value: V) -> NodeId {
        // The node exists before any link changes
        let id = self.nodes.allocate(RBNode::new_leaf(key, value, parent));
        match side {
            Side::Left => self.nodes[parent].left = id,
            Side::Right => self.nodes[parent].right = id,
        }
        self.insert_case1(id);
        self.len += 1;
        self.refresh_max_cache();
        id
    }

    /// Decide whether `hint` pins down the slot for `key`.
    ///
    /// A hint is good when `key` falls between the hint and its in-order
    /// neighbour on the key's side. The `end()` hint is good for a new
    /// maximum.
    fn check_hint(&self, hint: NodeId, key: &K) -> Option<Slot> {
        if hint == NIL {
            let max = self.nodes[NIL].parent;
            return self
                .less(self.nodes[max].key(), key)
                .then_some(Slot::Vacant { parent: max, side: Side::Right });
        }
        if !self.is_live_id(hint) {
            return None;
        }

        let hint_key = self.nodes[hint].key();
        if self.less(key, hint_key) {
            let prev = self.predecessor_id(hint);
            if prev != NIL && !self.less(self.nodes[prev].key(), key) {
                return None;
            }
            // prev is the max of hint's left subtree when that subtree exists
            Some(if self.nodes[hint].left == NIL {
                Slot::Vacant { parent: hint, side: Side::Left }
            } else {
                Slot::Vacant { parent: prev, side: Side::Right }
            })
        } else if self.less(hint_key, key) {
            let next = self.successor_id(hint);
            if next != NIL && !self.less(key, self.nodes[next].key()) {
                return None;
            }
            Some(if self.nodes[hint].right == NIL {
                Slot::Vacant { parent: hint, side: Side::Right }
            } else {
                Slot::Vacant { parent: next, side: Side::Left }
            })
        } else {
            Some(Slot::Occupied(hint))
        }
    }

    // ============================================================================
    // INSERTION REBALANCING
    // ============================================================================

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.nodes[id].parent
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.nodes[id].is_red()
    }

    fn grandparent_of(&self, id: NodeId) -> NodeId {
        self.parent_of(self.parent_of(id))
    }

    fn uncle_of(&self, id: NodeId) -> NodeId {
        let parent = self.parent_of(id);
        let grand = self.parent_of(parent);
        if self.nodes[grand].left == parent {
            self.nodes[grand].right
        } else {
            self.nodes[grand].left
        }
    }

    /// Case 1: the node is the root.
    fn insert_case1(&mut self, n: NodeId) {
        if self.parent_of(n) == NIL {
            self.nodes[n].color = Color::Black;
        } else {
            self.insert_case2(n);
        }
    }

    /// Case 2: a black parent needs nothing.
    fn insert_case2(&mut self, n: NodeId) {
        if self.is_red(self.parent_of(n)) {
            self.insert_case3(n);
        }
    }

    /// Case 3: red parent and red uncle. Push the blackness down from the
    /// grandparent and start over there.
    fn insert_case3(&mut self, n: NodeId) {
        let uncle = self.uncle_of(n);
        if uncle != NIL && self.is_red(uncle) {
            let parent = self.parent_of(n);
            let grand = self.parent_of(parent);
            trace!("insert case 3 at node {}: recolor, continue at {}", n, grand);
            self.nodes[parent].color = Color::Black;
            self.nodes[uncle].color = Color::Black;
            self.nodes[grand].color = Color::Red;
            self.insert_case1(grand);
        } else {
            self.insert_case4(n);
        }
    }

    /// Case 4: black uncle and a zig-zag. Straighten it into a line.
    fn insert_case4(&mut self, mut n: NodeId) {
        let parent = self.parent_of(n);
        let grand = self.parent_of(parent);
        if n == self.nodes[parent].right && parent == self.nodes[grand].left {
            self.rotate_left(parent);
            n = self.nodes[n].left;
        } else if n == self.nodes[parent].left && parent == self.nodes[grand].right {
            self.rotate_right(parent);
            n = self.nodes[n].right;
        }
        self.insert_case5(n);
    }

    /// Case 5: black uncle and a straight line. Rotate the grandparent away.
    fn insert_case5(&mut self, n: NodeId) {
        let parent = self.parent_of(n);
        let grand = self.grandparent_of(n);
        trace!("insert case 5 at node {}: rotate grandparent {}", n, grand);
        self.nodes[parent].color = Color::Black;
        self.nodes[grand].color = Color::Red;
        if n == self.nodes[parent].left {
            self.rotate_right(grand);
        } else {
            self.rotate_left(grand);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{RBTree, NIL};

    #[test]
    fn test_first_insert_becomes_black_root() {
        let mut tree = RBTree::new();
        let (node, inserted) = tree.insert(5, "five");
        assert!(inserted);
        assert_eq!(tree.root, node.id());
        assert!(tree.nodes[tree.root].is_black());
        assert_eq!(tree.nodes[NIL].parent, tree.root);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_keeps_original() {
        let mut tree = RBTree::new();
        tree.insert(1, "a");
        tree.insert(2, "b");
        let before = tree.arena_stats().allocated_count;
        let (node, inserted) = tree.insert(2, "c");
        assert!(!inserted);
        assert_eq!(tree.value_at(node), Some(&"b"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.arena_stats().allocated_count, before);
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut tree = RBTree::new();
        for k in 0..1000 {
            tree.insert(k, ());
            assert!(tree.check_invariants(), "broken after inserting {}", k);
        }
        // 2 * log2(1001) < 20
        assert!(tree.height() <= 20);
        assert_eq!(tree.key_at(tree.last()), Some(&999));
    }

    #[test]
    fn test_zig_zag_insert() {
        // 3, 1, 2 forces case 4 followed by case 5
        let mut tree = RBTree::new();
        for k in [3, 1, 2] {
            tree.insert(k, ());
        }
        assert_eq!(tree.nodes[tree.root].key(), &2);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_good_hints() {
        let mut tree = RBTree::new();
        for k in [10, 20, 30, 40, 50] {
            tree.insert(k, ());
        }
        let at_30 = tree.find(&30);
        let (node, inserted) = tree.insert_hint(at_30, 25, ());
        assert!(inserted);
        assert_eq!(tree.key_at(node), Some(&25));

        let (node, inserted) = tree.insert_hint(at_30, 35, ());
        assert!(inserted);
        assert_eq!(tree.key_at(node), Some(&35));

        let end = tree.end();
        let (node, inserted) = tree.insert_hint(end, 60, ());
        assert!(inserted);
        assert_eq!(tree.last(), node);

        let (node, inserted) = tree.insert_hint(at_30, 30, ());
        assert!(!inserted);
        assert_eq!(node, at_30);

        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [10, 20, 25, 30, 35, 40, 50, 60]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_bad_hint_falls_back_to_root_descent() {
        let mut tree = RBTree::new();
        for k in [10, 5, 15, 3, 7] {
            tree.insert(k, ());
        }
        // 1 does not belong next to 7; a naive descent from 7 would misplace it
        let at_7 = tree.find(&7);
        tree.insert_hint(at_7, 1, ());
        tree.insert_hint(tree.end(), 4, ());
        tree.insert_hint(tree.begin(), 100, ());

        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 10, 15, 100]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_hint_on_empty_tree() {
        let mut tree = RBTree::new();
        let end = tree.end();
        let (node, inserted) = tree.insert_hint(end, 1, ());
        assert!(inserted);
        assert_eq!(tree.begin(), node);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut tree: RBTree<&str, i32> = RBTree::new();
        *tree.get_or_insert_with("a", || 0) += 1;
        *tree.get_or_insert_with("a", || 100) += 1;
        *tree.get_or_insert_with("b", Default::default) += 5;
        assert_eq!(tree.get(&"a"), Some(&2));
        assert_eq!(tree.get(&"b"), Some(&5));
        assert!(tree.check_invariants());
    }
}
