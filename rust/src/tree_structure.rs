//! Tree structure management operations for RBTree.
//!
//! Size queries, the structural primitives shared by both rebalancing
//! machines (child replacement and rotations), max-cache bookkeeping, and the
//! whole-tree operations: clear, copy and swap.

use crate::compact_arena::CompactArenaStats;
use crate::compare::Compare;
use crate::types::{NodeId, NodeRef, RBTree, NIL};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the root node, `end()` when the tree is empty.
    pub fn root_node(&self) -> NodeRef<K, V> {
        NodeRef::new(self.root)
    }

    /// Remove every element.
    ///
    /// Nodes are destroyed in post-order; the sentinel survives.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.len);
        let root = self.root;
        self.destroy_subtree(root);
        self.root = NIL;
        self.len = 0;
        self.nodes[NIL].parent = NIL;
    }

    fn destroy_subtree(&mut self, id: NodeId) {
        if id == NIL {
            return;
        }
        let (left, right) = (self.nodes[id].left, self.nodes[id].right);
        self.destroy_subtree(left);
        self.destroy_subtree(right);
        self.nodes.deallocate(id);
    }

    /// Replace the contents of this tree with a copy of `other`.
    ///
    /// Entries are re-inserted in pre-order, so the copy is rebuilt by the
    /// normal insertion path rather than duplicated link by link.
    pub fn copy_from(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        log::debug!("copying tree of {} nodes", other.len);
        self.clear();
        self.nodes.reserve(other.len);
        self.copy_subtree(other, other.root);
    }

    fn copy_subtree(&mut self, other: &Self, id: NodeId)
    where
        K: Clone,
        V: Clone,
    {
        if id == NIL {
            return;
        }
        let node = &other.nodes[id];
        if let Some((key, value)) = &node.entry {
            self.insert(key.clone(), value.clone());
        }
        self.copy_subtree(other, node.left);
        self.copy_subtree(other, node.right);
    }

    /// Exchange the contents of two trees, comparators included.
    ///
    /// Handles keep pointing at the same nodes, which now belong to the other
    /// tree.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    // ============================================================================
    // STRUCTURAL PRIMITIVES
    // ============================================================================

    /// Point `parent`'s link that held `old` at `new`, or make `new` the root
    /// when `parent` is the sentinel.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }

    rotation!(left, right);
    rotation!(right, left);

    subtree_extreme!(min, left);
    subtree_extreme!(max, right);

    /// Re-point the sentinel's parent at the maximum node.
    pub(crate) fn refresh_max_cache(&mut self) {
        let max = self.subtree_max(self.root);
        self.nodes[NIL].parent = max;
    }

    // ============================================================================
    // TREE STATISTICS
    // ============================================================================

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: NodeId) -> usize {
        if id == NIL {
            return 0;
        }
        let node = &self.nodes[id];
        1 + self.height_of(node.left).max(self.height_of(node.right))
    }

    /// Count the real nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> usize {
        self.count_nodes(self.root)
    }

    fn count_nodes(&self, id: NodeId) -> usize {
        if id == NIL {
            return 0;
        }
        let node = &self.nodes[id];
        1 + self.count_nodes(node.left) + self.count_nodes(node.right)
    }

    /// Get statistics for the node arena (sentinel slot included).
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.nodes.stats()
    }
}

impl<K: Clone, V: Clone, C: Compare<K> + Clone> Clone for RBTree<K, V, C> {
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity_and_comparator(self.len, self.comparator.clone());
        tree.copy_from(self);
        tree
    }
}
