//! Core types and data structures for RBTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the red-black tree implementation.

use std::fmt;
use std::marker::PhantomData;

use crate::compact_arena::CompactArena;
use crate::compare::Less;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Arena slot of the sentinel. Every leaf's children point here, and the
/// sentinel's `parent` caches the maximum node.
pub const NIL: NodeId = 0;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// One cell of the tree: three links, a color and the owned entry.
///
/// The sentinel and freed arena slots carry `entry == None`.
#[derive(Debug, Clone)]
pub struct RBNode<K, V> {
    pub(crate) color: Color,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) entry: Option<(K, V)>,
}

/// Red-black tree with an arena-allocated sentinel.
///
/// Keys are ordered by the comparator `C`; two keys are equivalent when
/// neither is less than the other. Duplicate keys are rejected.
///
/// # Examples
///
/// ```
/// use rbcontainers::RBTree;
///
/// let mut tree = RBTree::new();
/// tree.insert(2, "two");
/// tree.insert(1, "one");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 3);
///
/// let keys: Vec<_> = tree.keys().copied().collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Maximum**: O(1) through the sentinel's max-cache
/// - **Iteration**: O(n), amortized O(1) per step
pub struct RBTree<K, V, C = Less> {
    /// Root node, `NIL` when the tree is empty.
    pub(crate) root: NodeId,
    /// Number of real nodes.
    pub(crate) len: usize,
    /// Node storage. Slot `NIL` is the sentinel.
    pub(crate) nodes: CompactArena<RBNode<K, V>>,
    /// Strict weak ordering on keys.
    pub(crate) comparator: C,
}

// ============================================================================
// NODE HANDLES
// ============================================================================

/// Non-owning handle to a node of a tree, the position an iterator points at.
///
/// The handle equal to `end()` refers to the sentinel. A handle to an erased
/// node dangles: lookups through it return `None` and erasing it is a no-op,
/// but once the slot is reused it refers to whatever node lives there.
pub struct NodeRef<K, V>(pub(crate) NodeId, PhantomData<fn() -> (K, V)>);

impl<K, V> NodeRef<K, V> {
    pub(crate) fn new(id: NodeId) -> Self {
        NodeRef(id, PhantomData)
    }

    /// Return the raw node ID.
    pub fn id(&self) -> NodeId {
        self.0
    }

    /// Returns true if this handle is the end position.
    pub fn is_end(&self) -> bool {
        self.0 == NIL
    }
}

impl<K, V> Clone for NodeRef<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<K, V> {}

impl<K, V> PartialEq for NodeRef<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K, V> Eq for NodeRef<K, V> {}

impl<K, V> fmt::Debug for NodeRef<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "NodeRef(end)")
        } else {
            write!(f, "NodeRef({})", self.0)
        }
    }
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Which child link of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Outcome of searching for a key's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// An equivalent key already lives in this node.
    Occupied(NodeId),
    /// The key belongs in the empty `side` link of `parent`.
    Vacant { parent: NodeId, side: Side },
}
