//! Insertion-order-preserving member map backing object nodes.
//!
//! Built on `indexmap::IndexMap`, which gives O(1) average point operations
//! while iterating in insertion order. Two policies of the document model are
//! pinned here:
//!
//! - **Replace-in-place**: re-inserting an existing key updates the value but
//!   keeps the member in its original insertion slot.
//! - **Order-independent equality**: two maps are equal iff they hold the
//!   same key set with equal values per key, regardless of insertion order.
//!   Hashing agrees with that equality (commutative combine of per-entry
//!   hashes), so equal maps land in the same bucket when trees are
//!   deduplicated through a `HashSet`.
//!
//! Removal uses shift semantics so the surviving members keep their relative
//! order. That costs O(n) in the tail of the map rather than the O(1) of a
//! swap-remove; order fidelity is the contract here.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::value::JsonValue;

/// Ordered map from member name to value node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberMap {
    entries: IndexMap<String, JsonValue>,
}

impl MemberMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        MemberMap {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        MemberMap {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces a member, returning the previous value if the key
    /// was present. A replaced member keeps its original insertion slot.
    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.entries.insert(key, value)
    }

    /// Looks up a member. Absence is `None`, not an error.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.entries.get_mut(key)
    }

    /// True if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a member, returning its value if it was present. The relative
    /// order of the remaining members is preserved.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.entries.shift_remove(key)
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates members in insertion order with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut JsonValue)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.values()
    }
}

impl Hash for MemberMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Each entry is hashed in isolation and the results combined with a
        // commutative operation, making the digest independent of insertion
        // order. `DefaultHasher::new()` is deterministic (fixed keys), unlike
        // a `RandomState`-built hasher.
        let mut combined: u64 = 0;
        for (key, value) in &self.entries {
            let mut entry_hasher = DefaultHasher::new();
            key.hash(&mut entry_hasher);
            value.hash(&mut entry_hasher);
            combined = combined.wrapping_add(entry_hasher.finish());
        }
        state.write_usize(self.entries.len());
        state.write_u64(combined);
    }
}

impl IntoIterator for MemberMap {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MemberMap {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for MemberMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MemberMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<JsonValue>> Extend<(K, V)> for MemberMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
