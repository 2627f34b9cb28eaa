//! Insertion-ordered map type for representation graphs.
//!
//! This module provides [`ReprMap`], an association list from values to
//! values that maintains insertion order. Order matters because map entries
//! serialize in the order they were inserted, making output deterministic.
//!
//! ## Why a vector?
//!
//! Map keys are full [`Value`](crate::Value)s, not just strings: a map from
//! reals to reals or from pairs to objects is as legal as one keyed by names.
//! `Value` carries floats and trait objects, so it implements neither `Hash`
//! nor `Eq`, which rules out hash-based storage. `ReprMap` stores its entries
//! in a vector and resolves keys by linear equality scan, which is the right
//! trade for the option-map scale this format describes.
//!
//! ## Examples
//!
//! ```rust
//! use plrepr::{ReprMap, Value};
//!
//! let mut map = ReprMap::new();
//! map.insert("name", "Alice");
//! map.insert("age", 30);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;

/// An insertion-ordered map of values to values.
///
/// Inserting an equal key again replaces the value in place, keeping the
/// entry's original position.
///
/// # Examples
///
/// ```rust
/// use plrepr::{ReprMap, Value};
///
/// let mut map = ReprMap::new();
/// map.insert("first", 1);
/// map.insert(2.5, "second");
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Value::from("first"), Value::from(2.5)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReprMap(Vec<(Value, Value)>);

impl ReprMap {
    /// Creates an empty `ReprMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprMap;
    ///
    /// let map = ReprMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        ReprMap(Vec::new())
    }

    /// Creates an empty `ReprMap` with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprMap;
    ///
    /// let map = ReprMap::with_capacity(10);
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ReprMap(Vec::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained an equal key, the old value is returned
    /// and the entry keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::{ReprMap, Value};
    ///
    /// let mut map = ReprMap::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert_eq!(map.insert("key", 43), Some(Value::from(42)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        for (existing, slot) in &mut self.0 {
            if *existing == key {
                return Some(std::mem::replace(slot, value));
            }
        }
        self.0.push((key, value));
        None
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::{ReprMap, Value};
    ///
    /// let mut map = ReprMap::new();
    /// map.insert("key", 42);
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: impl Into<Value>) -> Option<&Value> {
        let key = key.into();
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains an entry for the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprMap;
    ///
    /// let mut map = ReprMap::new();
    /// map.insert(1, "one");
    /// assert!(map.contains_key(1));
    /// assert!(!map.contains_key(2));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Value>) -> bool {
        let key = key.into();
        self.0.iter().any(|(k, _)| *k == key)
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprMap;
    ///
    /// let mut map = ReprMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert("key", 42);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprMap;
    ///
    /// let map = ReprMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.0.iter()
    }
}

impl Default for ReprMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<(Value, Value)>> for ReprMap {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for ReprMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for ReprMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ReprMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Value>, V: Into<Value>> Extend<(K, V)> for ReprMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
