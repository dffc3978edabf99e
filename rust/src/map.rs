//! Ordered map facade over the red-black tree engine.

use std::fmt;
use std::ops::{Index, RangeBounds};

use crate::compare::{Compare, Less};
use crate::error::{KeyResult, RBTreeError};
use crate::iteration::{Cursor, IntoIter, ItemIterator, KeyIterator, ValueIterator};
use crate::range_queries::RangeIterator;
use crate::types::{NodeRef, RBTree};

/// An ordered map with unique keys.
///
/// Inserting a key that is already present keeps the stored value, the way a
/// C++ `std::map::insert` does. Use [`get_or_insert_default`] or [`get_mut`]
/// to overwrite.
///
/// [`get_or_insert_default`]: RBMap::get_or_insert_default
/// [`get_mut`]: RBMap::get_mut
///
/// # Examples
///
/// ```
/// use rbcontainers::RBMap;
///
/// let mut map = RBMap::new();
/// map.insert(3, "c");
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// assert_eq!(map[&2], "b");
/// assert!(map.at(&4).is_err());
/// assert_eq!(map.first(), Some((&1, &"a")));
/// assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct RBMap<K, V, C = Less> {
    tree: RBTree<K, V, C>,
}

impl<K: Ord, V> RBMap<K, V, Less> {
    /// Creates an empty map ordered by `Ord`.
    pub fn new() -> Self {
        Self { tree: RBTree::new() }
    }
}

impl<K, V, C: Compare<K>> RBMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self { tree: RBTree::with_comparator(comparator) }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The comparator keys are ordered by.
    pub fn key_comp(&self) -> &C {
        self.tree.comparator()
    }

    /// Borrow the underlying tree.
    pub fn as_tree(&self) -> &RBTree<K, V, C> {
        &self.tree
    }

    // ------------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------------

    /// Insert a pair unless the key is present. Returns the key's node and
    /// whether the pair was inserted.
    pub fn insert(&mut self, key: K, value: V) -> (NodeRef<K, V>, bool) {
        self.tree.insert(key, value)
    }

    /// Insert with a position hint. See [`RBTree::insert_hint`].
    pub fn insert_hint(&mut self, hint: NodeRef<K, V>, key: K, value: V) -> (NodeRef<K, V>, bool) {
        self.tree.insert_hint(hint, key, value)
    }

    /// Subscript access: the value for `key`, default-constructed first if
    /// the key is absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.tree.get_or_insert_with(key, V::default)
    }

    /// The value for `key`, created by `make` first if absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, make: F) -> &mut V {
        self.tree.get_or_insert_with(key, make)
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    /// Checked access. A missing key is an `OutOfRange` error.
    pub fn at(&self, key: &K) -> KeyResult<&V> {
        self.tree
            .get(key)
            .ok_or_else(|| RBTreeError::out_of_range("RBMap::at", "key not present"))
    }

    /// Checked mutable access. A missing key is an `OutOfRange` error.
    pub fn at_mut(&mut self, key: &K) -> KeyResult<&mut V> {
        self.tree
            .get_mut(key)
            .ok_or_else(|| RBTreeError::out_of_range("RBMap::at_mut", "key not present"))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.get_key_value(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    /// 1 if the key is present, else 0.
    pub fn count(&self, key: &K) -> usize {
        self.tree.count(key)
    }

    pub fn find(&self, key: &K) -> NodeRef<K, V> {
        self.tree.find(key)
    }

    pub fn lower_bound(&self, key: &K) -> NodeRef<K, V> {
        self.tree.lower_bound(key)
    }

    pub fn upper_bound(&self, key: &K) -> NodeRef<K, V> {
        self.tree.upper_bound(key)
    }

    pub fn equal_range(&self, key: &K) -> (NodeRef<K, V>, NodeRef<K, V>) {
        self.tree.equal_range(key)
    }

    /// Entry behind a handle.
    pub fn entry_at(&self, node: NodeRef<K, V>) -> Option<(&K, &V)> {
        self.tree.get_entry(node)
    }

    /// Mutable value behind a handle.
    pub fn value_at_mut(&mut self, node: NodeRef<K, V>) -> Option<&mut V> {
        self.tree.value_at_mut(node)
    }

    pub fn begin(&self) -> NodeRef<K, V> {
        self.tree.begin()
    }

    pub fn end(&self) -> NodeRef<K, V> {
        self.tree.end()
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first_key_value()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last_key_value()
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, v)| v)
    }

    /// Remove a key, returning the stored pair.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove(key)
    }

    /// Erase the node behind a handle. Returns the number of nodes erased.
    /// Handles to every other node stay valid.
    pub fn erase(&mut self, node: NodeRef<K, V>) -> usize {
        self.tree.erase(node)
    }

    pub fn erase_key(&mut self, key: &K) -> usize {
        self.tree.erase_key(key)
    }

    /// Erase `[first, last)`.
    pub fn erase_range(&mut self, first: NodeRef<K, V>, last: NodeRef<K, V>) -> usize {
        self.tree.erase_range(first, last)
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.tree.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.tree.pop_last()
    }

    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, keep: F) {
        self.tree.retain(keep)
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree)
    }

    // ------------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------------

    pub fn iter(&self) -> ItemIterator<'_, K, V, C> {
        self.tree.iter()
    }

    pub fn keys(&self) -> KeyIterator<'_, K, V, C> {
        self.tree.keys()
    }

    pub fn values(&self) -> ValueIterator<'_, K, V, C> {
        self.tree.values()
    }

    pub fn range<R: RangeBounds<K>>(&self, range: R) -> RangeIterator<'_, K, V, C> {
        self.tree.range(range)
    }

    pub fn cursor(&self) -> Cursor<'_, K, V, C> {
        self.tree.cursor()
    }

    pub fn cursor_at(&self, node: NodeRef<K, V>) -> Cursor<'_, K, V, C> {
        self.tree.cursor_at(node)
    }
}

impl<K: Clone, V: Clone, C: Compare<K> + Clone> Clone for RBMap<K, V, C> {
    fn clone(&self) -> Self {
        Self { tree: self.tree.clone() }
    }
}

impl<K, V, C: Compare<K> + Default> Default for RBMap<K, V, C> {
    fn default() -> Self {
        Self { tree: RBTree::default() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug for RBMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<K: PartialEq, V: PartialEq, C: Compare<K>> PartialEq for RBMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq, C: Compare<K>> Eq for RBMap<K, V, C> {}

impl<K: PartialOrd, V: PartialOrd, C: Compare<K>> PartialOrd for RBMap<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.tree.partial_cmp(&other.tree)
    }
}

impl<K: Ord, V: Ord, C: Compare<K>> Ord for RBMap<K, V, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tree.cmp(&other.tree)
    }
}

impl<K, V, C: Compare<K>> Index<&K> for RBMap<K, V, C> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for RBMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { tree: iter.into_iter().collect() }
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for RBMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter)
    }
}

impl<K, V, C: Compare<K>> IntoIterator for RBMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a RBMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Greater;

    #[test]
    fn test_insert_does_not_overwrite() {
        let mut map = RBMap::new();
        assert!(map.insert("k", 1).1);
        assert!(!map.insert("k", 2).1);
        assert_eq!(map.get(&"k"), Some(&1));
        *map.get_mut(&"k").unwrap() = 3;
        assert_eq!(map[&"k"], 3);
    }

    #[test]
    fn test_subscript_creates_default() {
        let mut counts: RBMap<char, usize> = RBMap::new();
        for c in "hello".chars() {
            *counts.get_or_insert_default(c) += 1;
        }
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.at(&'l'), Ok(&2));
        assert!(counts.at(&'z').unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_at_mut() {
        let mut map: RBMap<i32, String> = RBMap::new();
        map.insert(1, "a".to_string());
        map.at_mut(&1).unwrap().push('b');
        assert_eq!(map[&1], "ab");
        assert!(map.at_mut(&2).is_err());
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn test_index_missing_key_panics() {
        let map: RBMap<i32, i32> = RBMap::new();
        let _ = map[&1];
    }

    #[test]
    fn test_remove_and_erase() {
        let mut map: RBMap<i32, i32> = (0..10).map(|k| (k, -k)).collect();
        assert_eq!(map.remove(&3), Some(-3));
        assert_eq!(map.remove_entry(&4), Some((4, -4)));
        assert_eq!(map.erase_key(&5), 1);
        let node = map.find(&6);
        assert_eq!(map.erase(node), 1);

        let (first, last) = (map.lower_bound(&7), map.end());
        assert_eq!(map.erase_range(first, last), 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut map = RBMap::with_comparator(Greater);
        map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
        assert_eq!(map.first(), Some((&3, &'c')));
        assert_eq!(map.last(), Some((&1, &'a')));
        assert!(map.key_comp().less(&3, &1));
    }

    #[test]
    fn test_cursor_at_found_node() {
        let map: RBMap<i32, i32> = (0..5).map(|k| (k, k)).collect();
        let mut cursor = map.cursor_at(map.find(&2));
        cursor.move_prev();
        assert_eq!(cursor.key(), Some(&1));
        assert_eq!(map.entry_at(map.upper_bound(&2)), Some((&3, &3)));
    }

    #[test]
    fn test_swap_and_compare() {
        let mut a: RBMap<i32, i32> = [(1, 1)].into_iter().collect();
        let mut b: RBMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        assert!(a < b);
        a.swap(&mut b);
        assert!(a > b);
        b.insert(2, 2);
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "{1: 1, 2: 2}");
    }

    #[test]
    fn test_owned_and_borrowed_iteration() {
        let map: RBMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        let mut seen = Vec::new();
        for (k, v) in &map {
            seen.push((*k, *v));
        }
        assert_eq!(seen, [(1, "a"), (2, "b")]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
    }
}
