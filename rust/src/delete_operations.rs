//! DELETE operations for RBTree.
//!
//! Erasing a node with two children unlinks its in-order neighbour with at
//! most one child (the victim) and relinks the victim into the erased node's
//! structural slot. Entries never move between nodes, so erasing a node only
//! invalidates handles to that node.

use log::{debug, trace};

use crate::compare::Compare;
use crate::types::{Color, NodeId, NodeRef, RBTree, NIL};

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    // ============================================================================
    // PUBLIC DELETE OPERATIONS
    // ============================================================================

    /// Erase the node behind `node`. Returns 1 if a node was removed, 0 for
    /// `end()` or a dangling handle.
    pub fn erase(&mut self, node: NodeRef<K, V>) -> usize {
        usize::from(self.remove_node(node).is_some())
    }

    /// Erase the node behind `node` and hand back its entry.
    pub fn remove_node(&mut self, node: NodeRef<K, V>) -> Option<(K, V)> {
        self.remove_at(node.id()).map(|(entry, _)| entry)
    }

    /// Erase the node holding `key`. Returns 1 if it existed, 0 otherwise.
    pub fn erase_key(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Remove `key` and return its entry.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.find_id(key);
        self.remove_at(id).map(|(entry, _)| entry)
    }

    /// Erase the node behind `node` and return the position of the element
    /// that followed it.
    pub fn erase_and_next(&mut self, node: NodeRef<K, V>) -> NodeRef<K, V> {
        match self.remove_at(node.id()) {
            Some((_, next)) => NodeRef::new(next),
            None => self.end(),
        }
    }

    /// Erase every node in the half-open run `[first, last)`.
    ///
    /// Returns the number of nodes removed.
    pub fn erase_range(&mut self, first: NodeRef<K, V>, last: NodeRef<K, V>) -> usize {
        if !self.is_live_id(first.id()) {
            return 0;
        }

        // last must be reachable from first
        let mut remaining = 0;
        let mut cursor = first.id();
        while cursor != last.id() && cursor != NIL {
            remaining += 1;
            cursor = self.successor_id(cursor);
        }
        if cursor != last.id() {
            return 0;
        }

        debug!("erasing a run of {} nodes", remaining);
        let mut current = first.id();
        let mut removed = 0;
        while removed < remaining {
            match self.remove_at(current) {
                Some((_, next)) => current = next,
                None => break,
            }
            removed += 1;
        }
        removed
    }

    /// Remove and return the smallest entry.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.subtree_min(self.root);
        self.remove_at(first).map(|(entry, _)| entry)
    }

    /// Remove and return the largest entry.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.nodes[NIL].parent;
        self.remove_at(last).map(|(entry, _)| entry)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.subtree_min(self.root);
        while current != NIL {
            let keep_it = match self.nodes[current].entry.as_mut() {
                Some((k, v)) => keep(k, v),
                None => true,
            };
            current = if keep_it {
                self.successor_id(current)
            } else {
                match self.remove_at(current) {
                    Some((_, next)) => next,
                    None => NIL,
                }
            };
        }
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Core erase. Returns the removed entry and the in-order successor of
    /// the erased node.
    pub(crate) fn remove_at(&mut self, target: NodeId) -> Option<((K, V), NodeId)> {
        if !self.is_live_id(target) {
            return None;
        }

        let next = self.successor_id(target);
        let removed = self.nodes[target].entry.take()?;

        let victim = self.erase_victim(target);
        let child = if self.nodes[victim].right == NIL {
            self.nodes[victim].left
        } else {
            self.nodes[victim].right
        };
        let removed_color = self.nodes[victim].color;

        if victim == target {
            self.splice_out(target, child);
        } else {
            self.relink_victim(target, victim, child);
        }

        if removed_color == Color::Black {
            if self.is_red(child) {
                self.nodes[child].color = Color::Black;
            } else {
                self.delete_case1(child);
            }
        }

        self.len -= 1;
        self.nodes.deallocate(target);
        self.refresh_max_cache();
        Some((removed, next))
    }

    /// The node that is physically unlinked when erasing `target`: the
    /// maximum of its left subtree, else the minimum of its right subtree,
    /// else `target` itself. It never has more than one child.
    fn erase_victim(&self, target: NodeId) -> NodeId {
        let node = &self.nodes[target];
        if node.left != NIL {
            self.subtree_max(node.left)
        } else if node.right != NIL {
            self.subtree_min(node.right)
        } else {
            target
        }
    }

    /// Put `child` in `victim`'s place. The sentinel's parent link is set
    /// too, so the fix-up can climb from a sentinel child.
    fn splice_out(&mut self, victim: NodeId, child: NodeId) {
        let parent = self.nodes[victim].parent;
        self.nodes[child].parent = parent;
        self.replace_child(parent, victim, child);
    }

    /// Move `victim` out of its own slot (leaving `child` there) and into
    /// `target`'s slot, taking over `target`'s color and children. The
    /// shortage, if any, is then at `child`.
    fn relink_victim(&mut self, target: NodeId, victim: NodeId, child: NodeId) {
        let from_left = self.nodes[target].left != NIL;
        let victim_parent = self.nodes[victim].parent;
        let (t_left, t_right) = (self.nodes[target].left, self.nodes[target].right);

        let child_parent = if victim_parent == target {
            // victim is target's own child and keeps `child` below it
            victim
        } else {
            self.replace_child(victim_parent, victim, child);
            if from_left {
                self.nodes[victim].left = t_left;
                self.nodes[t_left].parent = victim;
            } else {
                self.nodes[victim].right = t_right;
                self.nodes[t_right].parent = victim;
            }
            victim_parent
        };

        // The side victim did not come from
        if from_left {
            self.nodes[victim].right = t_right;
            if t_right != NIL {
                self.nodes[t_right].parent = victim;
            }
        } else {
            self.nodes[victim].left = t_left;
            if t_left != NIL {
                self.nodes[t_left].parent = victim;
            }
        }

        let parent = self.nodes[target].parent;
        self.replace_child(parent, target, victim);
        self.nodes[victim].parent = parent;
        self.nodes[victim].color = self.nodes[target].color;

        // Last, since `child` may be the sentinel
        self.nodes[child].parent = child_parent;
    }

    fn sibling_of(&self, n: NodeId) -> NodeId {
        let parent = self.parent_of(n);
        if self.nodes[parent].left == n {
            self.nodes[parent].right
        } else {
            self.nodes[parent].left
        }
    }

    #[inline]
    fn is_left_child(&self, n: NodeId) -> bool {
        self.nodes[self.parent_of(n)].left == n
    }

    // ============================================================================
    // DELETION REBALANCING
    // ============================================================================
    //
    // `n` sits in a slot one black short of its sibling's subtree. It may be
    // the sentinel, whose parent link was set by `splice_out`.

    /// Case 1: at the root the whole tree lost one black uniformly.
    fn delete_case1(&mut self, n: NodeId) {
        if self.parent_of(n) != NIL {
            self.delete_case2(n);
        }
    }

    /// Case 2: red sibling. Rotate it above the parent so the new sibling is
    /// black.
    fn delete_case2(&mut self, n: NodeId) {
        let sibling = self.sibling_of(n);
        if self.is_red(sibling) {
            let parent = self.parent_of(n);
            trace!("delete case 2 at node {}: rotate parent {}", n, parent);
            self.nodes[parent].color = Color::Red;
            self.nodes[sibling].color = Color::Black;
            if self.is_left_child(n) {
                self.rotate_left(parent);
            } else {
                self.rotate_right(parent);
            }
        }
        self.delete_case3(n);
    }

    /// Case 3: parent, sibling and the sibling's children all black. Paint
    /// the sibling red and move the shortage up to the parent.
    fn delete_case3(&mut self, n: NodeId) {
        let parent = self.parent_of(n);
        let sibling = self.sibling_of(n);
        if !self.is_red(parent) && self.is_black_family(sibling) {
            trace!("delete case 3 at node {}: continue at {}", n, parent);
            self.nodes[sibling].color = Color::Red;
            self.delete_case1(parent);
        } else {
            self.delete_case4(n);
        }
    }

    /// Case 4: red parent, black sibling with black children. Swap colors.
    fn delete_case4(&mut self, n: NodeId) {
        let parent = self.parent_of(n);
        let sibling = self.sibling_of(n);
        if self.is_red(parent) && self.is_black_family(sibling) {
            self.nodes[sibling].color = Color::Red;
            self.nodes[parent].color = Color::Black;
        } else {
            self.delete_case5(n);
        }
    }

    /// Case 5: black sibling whose near child is red and far child black.
    /// Rotate the sibling so the red child ends up on the far side.
    fn delete_case5(&mut self, n: NodeId) {
        let sibling = self.sibling_of(n);
        if !self.is_red(sibling) {
            let (near, far) = if self.is_left_child(n) {
                (self.nodes[sibling].left, self.nodes[sibling].right)
            } else {
                (self.nodes[sibling].right, self.nodes[sibling].left)
            };
            if self.is_red(near) && !self.is_red(far) {
                self.nodes[sibling].color = Color::Red;
                self.nodes[near].color = Color::Black;
                if self.is_left_child(n) {
                    self.rotate_right(sibling);
                } else {
                    self.rotate_left(sibling);
                }
            }
        }
        self.delete_case6(n);
    }

    /// Case 6: black sibling with a red far child. Rotate the parent toward
    /// `n`; the sibling takes the parent's color and the shortage is gone.
    fn delete_case6(&mut self, n: NodeId) {
        let parent = self.parent_of(n);
        let sibling = self.sibling_of(n);
        debug_assert_ne!(sibling, NIL, "a short slot always has a real sibling");
        trace!("delete case 6 at node {}: rotate parent {}", n, parent);

        self.nodes[sibling].color = self.nodes[parent].color;
        self.nodes[parent].color = Color::Black;
        if self.is_left_child(n) {
            let far = self.nodes[sibling].right;
            self.nodes[far].color = Color::Black;
            self.rotate_left(parent);
        } else {
            let far = self.nodes[sibling].left;
            self.nodes[far].color = Color::Black;
            self.rotate_right(parent);
        }
    }

    /// Black node whose children are both black.
    fn is_black_family(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        node.is_black() && !self.is_red(node.left) && !self.is_red(node.right)
    }
}
