//! Red-black tree ordered containers in Rust.
//!
//! This crate provides an ordered map and set backed by a red-black tree whose
//! nodes live in an arena. A single sentinel node stands in for every missing
//! child, acts as the past-the-end position and caches the maximum node, so
//! `last()` and stepping back from `end()` are O(1). A small LIFO stack adapter
//! over any back-insertable sequence rounds out the collection.
//!
//! ```
//! use rbcontainers::{RBMap, RBSet};
//!
//! let mut ages = RBMap::new();
//! ages.insert("carol", 41);
//! ages.insert("alice", 30);
//! *ages.get_or_insert_default("bob") += 25;
//! assert_eq!(ages.keys().copied().collect::<Vec<_>>(), ["alice", "bob", "carol"]);
//!
//! let set: RBSet<i32> = [5, 3, 8].into_iter().collect();
//! assert_eq!(set.first(), Some(&3));
//! ```

#[macro_use]
mod macros;

mod compact_arena;
mod compare;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod map;
mod node;
mod range_queries;
mod set;
mod stack;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use compare::{Compare, CompareFn, Greater, Less};
pub use error::{KeyResult, ModifyResult, RBResult, RBResultExt, RBTreeError};
pub use iteration::{Cursor, IntoIter, ItemIterator, KeyIterator, ValueIterator};
pub use map::RBMap;
pub use range_queries::RangeIterator;
pub use set::{RBSet, SetIter, SetIntoIter, SetRange};
pub use stack::{BackSequence, Stack};
pub use types::{Color, NodeId, NodeRef, RBNode, RBTree, NIL};

impl<K, V, C: Compare<K>> RBTree<K, V, C> {
    // ============================================================================
    // CHECKED OPERATIONS
    // ============================================================================

    /// Insert with invariant validation before and after the mutation.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<(NodeRef<K, V>, bool)> {
        self.validate_for_operation("try_insert")?;
        let result = self.insert(key, value);
        self.validate_for_operation("try_insert")?;
        Ok(result)
    }

    /// Remove with invariant validation. A missing key is `KeyNotFound`.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.validate_for_operation("try_remove")?;
        let (_, value) = self.remove(key).ok_or(RBTreeError::KeyNotFound)?;
        self.validate_for_operation("try_remove")?;
        Ok(value)
    }

    /// Erase through a handle, reporting a dangling handle as `InvalidHandle`.
    pub fn try_erase(&mut self, node: NodeRef<K, V>) -> ModifyResult<(K, V)> {
        let entry = self
            .remove_node(node)
            .ok_or_else(|| RBTreeError::invalid_handle("try_erase", node.id()));
        self.validate_for_operation("try_erase")
            .with_operation("try_erase")?;
        entry
    }

    /// Batch insert operations with rollback on any failure.
    ///
    /// Returns, per item, whether it created a new node. On failure every
    /// node this batch created is erased again before the error is returned,
    /// including one whose insertion itself broke the tree. Rollback goes
    /// through handles, so it does not depend on the comparator.
    pub fn batch_insert(&mut self, items: Vec<(K, V)>) -> ModifyResult<Vec<bool>> {
        let mut results = Vec::with_capacity(items.len());
        let mut created = Vec::new();

        for (key, value) in items {
            self.validate_for_operation("batch_insert")?;
            let (node, inserted) = self.insert(key, value);
            if inserted {
                created.push(node);
            }
            results.push(inserted);

            if let Err(e) = self.validate_for_operation("batch_insert") {
                log::debug!("batch insert failed, rolling back {} nodes", created.len());
                for node in created.into_iter().rev() {
                    self.erase(node);
                }
                return Err(e);
            }
        }

        Ok(results)
    }
}
