//! Validation and debugging utilities for RBTree.
//!
//! This module contains the invariant checks used by the tests and by the
//! checked mutation operations, plus a few inspection helpers.

use crate::compare::Compare;
use crate::error::{RBResult, RBTreeError, TreeResult};
use crate::types::{Color, NodeId, RBTree, NIL};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    /// Check if the tree satisfies every red-black and bookkeeping invariant.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_sentinel().map_err(|e| e.to_string())?;
        self.check_root().map_err(|e| e.to_string())?;
        self.check_subtree(self.root, NIL).map_err(|e| e.to_string())?;
        self.check_ordering().map_err(|e| e.to_string())?;
        self.check_arena_tree_consistency().map_err(|e| e.to_string())?;
        self.check_max_cache().map_err(|e| e.to_string())
    }

    /// The sentinel is black, holds no entry and never grows children.
    fn check_sentinel(&self) -> TreeResult<()> {
        let sentinel = &self.nodes[NIL];
        if sentinel.color != Color::Black {
            return Err(RBTreeError::corrupted_tree("Sentinel", "colored red"));
        }
        if sentinel.entry.is_some() {
            return Err(RBTreeError::corrupted_tree("Sentinel", "holds an entry"));
        }
        if sentinel.left != NIL || sentinel.right != NIL {
            return Err(RBTreeError::corrupted_tree(
                "Sentinel",
                &format!("has children {} and {}", sentinel.left, sentinel.right),
            ));
        }
        Ok(())
    }

    fn check_root(&self) -> TreeResult<()> {
        if self.root == NIL {
            if self.len != 0 {
                return Err(RBTreeError::data_integrity(
                    "Root check",
                    &format!("empty tree reports {} elements", self.len),
                ));
            }
            return Ok(());
        }
        let root = &self.nodes[self.root];
        if root.is_red() {
            return Err(RBTreeError::corrupted_tree("Root", "colored red"));
        }
        if root.parent != NIL {
            return Err(RBTreeError::corrupted_tree(
                "Root",
                &format!("has parent {}", root.parent),
            ));
        }
        Ok(())
    }

    /// Check links, colors and black heights below `id`. Returns the number
    /// of black nodes on every path from `id` down to the sentinel, counting
    /// the sentinel.
    fn check_subtree(&self, id: NodeId, parent: NodeId) -> TreeResult<usize> {
        if id == NIL {
            return Ok(1);
        }
        let node = match self.nodes.get(id) {
            Some(node) if !node.is_vacant() => node,
            _ => {
                return Err(RBTreeError::corrupted_tree(
                    "Node",
                    &format!("link to freed slot {}", id),
                ))
            }
        };
        if node.parent != parent {
            return Err(RBTreeError::corrupted_tree(
                "Parent link",
                &format!("node {} points at {} instead of {}", id, node.parent, parent),
            ));
        }
        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(RBTreeError::corrupted_tree(
                "Coloring",
                &format!("red node {} has a red child", id),
            ));
        }

        let left = self.check_subtree(node.left, id)?;
        let right = self.check_subtree(node.right, id)?;
        if left != right {
            return Err(RBTreeError::corrupted_tree(
                "Black height",
                &format!("node {} has {} on the left and {} on the right", id, left, right),
            ));
        }
        Ok(left + usize::from(node.is_black()))
    }

    /// In-order keys must be strictly ascending.
    fn check_ordering(&self) -> TreeResult<()> {
        let mut keys = self.keys();
        let Some(mut prev) = keys.next() else {
            return Ok(());
        };
        for (position, key) in keys.enumerate() {
            if !self.less(prev, key) {
                return Err(RBTreeError::data_integrity(
                    "Ordering",
                    &format!("key at position {} is not above its predecessor", position + 1),
                ));
            }
            prev = key;
        }
        Ok(())
    }

    /// Check that arena allocation matches tree structure.
    fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        let reachable = self.count_nodes_in_tree();
        if reachable != self.len {
            return Err(RBTreeError::data_integrity(
                "Size check",
                &format!("{} reachable vs {} recorded", reachable, self.len),
            ));
        }
        let stats = self.arena_stats();
        // The sentinel occupies one slot
        if stats.allocated_count != self.len + 1 {
            return Err(RBTreeError::data_integrity(
                "Arena consistency check",
                &format!("{} in tree vs {} in arena", self.len + 1, stats.allocated_count),
            ));
        }
        Ok(())
    }

    fn check_max_cache(&self) -> TreeResult<()> {
        let cached = self.nodes[NIL].parent;
        let actual = self.subtree_max(self.root);
        if cached != actual {
            return Err(RBTreeError::corrupted_tree(
                "Max cache",
                &format!("points at {} but maximum is {}", cached, actual),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Number of black nodes from the root down to the sentinel, not counting
    /// the root and counting the sentinel. 0 for an empty tree.
    pub fn black_height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }
        let mut count = 0;
        let mut current = self.nodes[self.root].left;
        loop {
            if self.nodes[current].is_black() {
                count += 1;
            }
            if current == NIL {
                return count;
            }
            current = self.nodes[current].left;
        }
    }

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    // ============================================================================
    // VALIDATION HELPERS FOR OPERATIONS
    // ============================================================================

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> RBResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            RBTreeError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Color, RBTree, NIL};

    fn sample(n: i32) -> RBTree<i32, ()> {
        (0..n).map(|k| (k, ())).collect()
    }

    #[test]
    fn test_valid_trees_pass() {
        for n in [0, 1, 2, 3, 10, 100] {
            let tree = sample(n);
            assert_eq!(tree.validate(), Ok(()), "size {}", n);
        }
    }

    #[test]
    fn test_black_height() {
        assert_eq!(sample(0).black_height(), 0);
        // A lone black root: only the sentinel below it
        assert_eq!(sample(1).black_height(), 1);
        let tree = sample(100);
        assert!(tree.black_height() >= 2);
        assert!(tree.height() <= 2 * tree.black_height() + 1);
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree = sample(5);
        let root = tree.root;
        tree.nodes[root].color = Color::Red;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("Root"), "{}", err);
    }

    #[test]
    fn test_detects_red_red() {
        let mut tree = sample(20);
        // Paint every node red; some red node must then have a red child
        let mut pos = tree.begin();
        while pos != tree.end() {
            tree.nodes[pos.id()].color = Color::Red;
            pos = tree.successor(pos);
        }
        let root = tree.root;
        tree.nodes[root].color = Color::Black;
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_stale_max_cache() {
        let mut tree = sample(5);
        let begin = tree.begin().id();
        tree.nodes[NIL].parent = begin;
        let err = tree.validate().unwrap_err();
        assert!(err.contains("Max cache"), "{}", err);
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree = sample(7);
        let last = tree.last().id();
        tree.nodes[last].parent = last;
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_validate_for_operation_wraps_error() {
        let mut tree = sample(3);
        tree.len = 7;
        let err = tree.validate_for_operation("insert").unwrap_err();
        assert!(err.is_corruption());
        assert!(err.to_string().contains("insert"));
    }

    #[test]
    fn test_slice() {
        let tree: RBTree<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(tree.slice(), [(&1, &'a'), (&2, &'b')]);
    }
}
