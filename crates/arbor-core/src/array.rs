//! Array nodes — ordered sequences of value nodes.

use crate::value::JsonValue;

/// An ordered, possibly-empty sequence of value nodes. Duplicates are
/// permitted, and unlike object equality, sequence order is significant:
/// two arrays with the same elements in different order are not equal.
///
/// `push` and `contains` accept anything convertible into a [`JsonValue`],
/// so raw scalars go through the standard coercion rules before storage or
/// comparison: characters fold to one-character strings and `Option::None`
/// normalizes to null. Querying with `'a'` therefore finds a stored `"a"`,
/// and querying with `2.0` finds a stored integer `2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonArray {
    elements: Vec<JsonValue>,
}

impl JsonArray {
    /// Creates an empty array.
    pub fn new() -> Self {
        JsonArray {
            elements: Vec::new(),
        }
    }

    /// Creates an empty array with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends a value. Raw scalars coerce through the standard rules;
    /// `Option::None` of any convertible type stores a null node.
    pub fn push<T: Into<JsonValue>>(&mut self, value: T) {
        self.elements.push(value.into());
    }

    /// True if any element equals the query after coercion. Scalar equality
    /// is tag-aware: a stored number never matches a string query even when
    /// their textual forms coincide, while integer and floating queries of
    /// the same magnitude match either stored form.
    pub fn contains<T: Into<JsonValue>>(&self, query: T) -> bool {
        let query = query.into();
        self.elements.iter().any(|element| *element == query)
    }

    /// Positional access. Out-of-range indices return `None`.
    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.elements.get(index)
    }

    /// Mutable positional access.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.elements.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous value.
    /// Out-of-range indices leave the array untouched and return `None`.
    pub fn set<T: Into<JsonValue>>(&mut self, index: usize, value: T) -> Option<JsonValue> {
        let slot = self.elements.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    /// Out-of-range indices return `None`.
    pub fn remove(&mut self, index: usize) -> Option<JsonValue> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Iterates elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
        self.elements.iter()
    }

    /// Iterates elements in order with mutable access.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, JsonValue> {
        self.elements.iter_mut()
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = std::slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a mut JsonArray {
    type Item = &'a mut JsonValue;
    type IntoIter = std::slice::IterMut<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonArray {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<JsonValue>> Extend<T> for JsonArray {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}
