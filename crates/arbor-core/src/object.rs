//! Object nodes — named members in insertion order.

use crate::array::JsonArray;
use crate::error::Result;
use crate::map::MemberMap;
use crate::scalar::JsonPrimitive;
use crate::value::JsonValue;

/// A JSON object: string-named members kept in insertion order.
///
/// `insert` is generic over anything convertible into a [`JsonValue`], which
/// subsumes the usual family of typed adders: booleans, numbers, strings,
/// characters (canonicalized to one-character strings), nested nodes, and
/// `Option` (where `None` normalizes to the null node before storage).
///
/// Equality and hashing ignore member order: two objects built from the same
/// members in different insertion orders are equal and hash identically, but
/// iterate (and serialize) differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonObject {
    members: MemberMap,
}

impl JsonObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        JsonObject {
            members: MemberMap::new(),
        }
    }

    /// Creates an empty object with pre-allocated member capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        JsonObject {
            members: MemberMap::with_capacity(capacity),
        }
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the object holds no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Inserts or replaces a member, returning the previous value if the key
    /// was present. A replaced member keeps its original insertion slot; a
    /// new member appends at the end of the iteration order.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<JsonValue>
    where
        K: Into<String>,
        V: Into<JsonValue>,
    {
        self.members.insert(key.into(), value.into())
    }

    /// True if a member with this name is present.
    pub fn has(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Looks up a member. Absence is `None`, not an error.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.members.get(key)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.members.get_mut(key)
    }

    /// Looks up a member expected to be an object. Absence propagates as
    /// `Ok(None)`, distinctly from a present member of the wrong shape,
    /// which fails with `TypeMismatch`.
    pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
        self.get(key).map(JsonValue::as_object).transpose()
    }

    /// Looks up a member expected to be an array. Same absence/mismatch
    /// split as [`get_object`](Self::get_object).
    pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
        self.get(key).map(JsonValue::as_array).transpose()
    }

    /// Looks up a member expected to be a primitive scalar. Same
    /// absence/mismatch split as [`get_object`](Self::get_object).
    pub fn get_primitive(&self, key: &str) -> Result<Option<&JsonPrimitive>> {
        self.get(key).map(JsonValue::as_primitive).transpose()
    }

    /// Removes a member, returning its value if it was present. The relative
    /// order of the remaining members is preserved.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.members.remove(key)
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.members.iter()
    }

    /// Iterates members in insertion order with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut JsonValue)> {
        self.members.iter_mut()
    }

    /// Iterates member names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys()
    }

    /// Iterates member values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.members.values()
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.members).into_iter()
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonObject {
            members: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<JsonValue>> Extend<(K, V)> for JsonObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}
