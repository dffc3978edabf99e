//! Node implementation for RBTree.
//!
//! Construction of real nodes and the sentinel, color queries and entry access.

use crate::types::{Color, RBNode, NIL};

impl<K, V> RBNode<K, V> {
    // ============================================================================
    // CONSTRUCTION
    // ============================================================================

    /// A fresh red leaf hanging below `parent`.
    pub(crate) fn new_leaf(key: K, value: V, parent: crate::types::NodeId) -> Self {
        Self {
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
            entry: Some((key, value)),
        }
    }

    /// The sentinel: black, valueless, every link pointing at itself.
    pub(crate) fn sentinel() -> Self {
        Self {
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
            entry: None,
        }
    }

    // ============================================================================
    // COLOR
    // ============================================================================

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // ============================================================================
    // ENTRY ACCESS
    // ============================================================================

    /// Key of a real node.
    ///
    /// Only called on nodes linked into the tree, which always hold an entry.
    #[inline]
    pub(crate) fn key(&self) -> &K {
        match &self.entry {
            Some((key, _)) => key,
            None => unreachable!("sentinel has no key"),
        }
    }

    /// Value of a real node, mutably.
    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        match &mut self.entry {
            Some((_, value)) => value,
            None => unreachable!("sentinel has no value"),
        }
    }

    /// Borrow the entry as a pair of references.
    #[inline]
    pub fn entry(&self) -> Option<(&K, &V)> {
        self.entry.as_ref().map(|(k, v)| (k, v))
    }

    /// Returns true for the sentinel and for freed slots.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.entry.is_none()
    }
}

impl<K, V> Default for RBNode<K, V> {
    /// Freed arena slots hold a sentinel-shaped placeholder.
    fn default() -> Self {
        Self::sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_shape() {
        let nil: RBNode<i32, ()> = RBNode::sentinel();
        assert!(nil.is_black());
        assert!(nil.is_vacant());
        assert_eq!((nil.left, nil.right, nil.parent), (NIL, NIL, NIL));
    }

    #[test]
    fn test_new_leaf_is_red_with_sentinel_children() {
        let mut leaf = RBNode::new_leaf(3, "three", 7);
        assert!(leaf.is_red());
        assert_eq!(leaf.parent, 7);
        assert_eq!((leaf.left, leaf.right), (NIL, NIL));
        assert_eq!(*leaf.key(), 3);
        *leaf.value_mut() = "THREE";
        assert_eq!(leaf.entry(), Some((&3, &"THREE")));
    }
}
