//! Ordered map type for CCL objects.
//!
//! This module provides [`CclMap`], a wrapper around [`IndexMap`] that keeps
//! keys in first-encounter order. Order matters twice in CCL: it decides the
//! order of canonical output, and repeated keys become lists in the order
//! they were written.
//!
//! ## Duplicate keys
//!
//! [`CclMap::append`] implements the duplicate-key rule. The first value for
//! a key is stored as is; every later value turns the slot into a
//! [`Node::List`] and is pushed onto it. A slot never turns back from a list.
//!
//! ```rust
//! use ccl::{CclMap, Node};
//!
//! let mut map = CclMap::new();
//! map.append("item".to_string(), Node::from("first"));
//! map.append("item".to_string(), Node::from("second"));
//!
//! assert_eq!(
//!     map.get("item"),
//!     Some(&Node::List(vec![Node::from("first"), Node::from("second")]))
//! );
//! ```

use crate::Node;
use indexmap::IndexMap;

/// An ordered map of string keys to CCL nodes.
///
/// Keys are compared by exact string equality, with no case folding or
/// Unicode normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CclMap(IndexMap<String, Node>);

impl CclMap {
    /// Creates an empty `CclMap`.
    #[must_use]
    pub fn new() -> Self {
        CclMap(IndexMap::new())
    }

    /// Creates an empty `CclMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        CclMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, replacing any previous value for the key.
    ///
    /// Replacing keeps the key's original position. Use [`CclMap::append`]
    /// to apply the duplicate-key rule instead.
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        self.0.insert(key, value)
    }

    /// Adds a value under `key`, turning repeated keys into a list.
    pub fn append(&mut self, key: String, value: Node) {
        match self.0.get_mut(&key) {
            None => {
                self.0.insert(key, value);
            }
            Some(Node::List(items)) => items.push(value),
            Some(existing) => {
                tracing::trace!(key = %key, "coercing duplicate key into a list");
                let first = std::mem::take(existing);
                *existing = Node::List(vec![first, value]);
            }
        }
    }

    /// Adds an anonymous list item; the `""` slot is always a list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ccl::{CclMap, Node};
    ///
    /// let mut map = CclMap::new();
    /// map.push_item(Node::from("only"));
    /// assert_eq!(map.get(""), Some(&Node::List(vec![Node::from("only")])));
    /// ```
    pub fn push_item(&mut self, value: Node) {
        match self.0.get_mut("") {
            Some(Node::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Node::List(vec![first, value]);
            }
            None => {
                self.0.insert(String::new(), Node::List(vec![value]));
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of keys in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }
}

impl IntoIterator for CclMap {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CclMap {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for CclMap {
    /// Collects pairs with [`CclMap::append`] semantics.
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        let mut map = CclMap::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}
