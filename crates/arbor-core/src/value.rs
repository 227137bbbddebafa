//! The value node variant — the root type of the document model.

use crate::array::JsonArray;
use crate::error::{JsonError, JsonKind, Result};
use crate::object::JsonObject;
use crate::scalar::{JsonPrimitive, Number};

/// One JSON value. Exactly one of the four shapes is active at a time, and
/// the closed variant means every consumer handles all shapes exhaustively;
/// there is no open subclassing and no unchecked downcast.
///
/// `Null` is a unit variant: the shared null singleton costs nothing per
/// occurrence while still participating in structural equality. All
/// "explicit null" inputs (`Option::None` of any convertible type) normalize
/// to it at construction.
///
/// Containers own their children by value, so the tree is acyclic by
/// construction and `Clone` is a deep copy: every array and object in the
/// copy owns newly cloned children, and mutating the copy never affects the
/// original. Shared *reads* across threads are fine (`Send + Sync` by
/// composition); shared mutation requires `&mut` and therefore external
/// synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum JsonValue {
    #[default]
    Null,
    Primitive(JsonPrimitive),
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    /// Shape classification. Primitives report their scalar tag.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Primitive(p) => p.kind(),
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JsonValue::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Casts to an object node. Fails with `TypeMismatch` on any other shape;
    /// callers that want to branch instead of fail should check
    /// [`is_object`](Self::is_object) or match on the variant.
    pub fn as_object(&self) -> Result<&JsonObject> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Mutable cast to an object node.
    pub fn as_object_mut(&mut self) -> Result<&mut JsonObject> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Casts to an array node.
    pub fn as_array(&self) -> Result<&JsonArray> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(JsonError::TypeMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Mutable cast to an array node.
    pub fn as_array_mut(&mut self) -> Result<&mut JsonArray> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(JsonError::TypeMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Casts to a primitive scalar.
    pub fn as_primitive(&self) -> Result<&JsonPrimitive> {
        match self {
            JsonValue::Primitive(p) => Ok(p),
            other => Err(JsonError::TypeMismatch {
                expected: "primitive",
                found: other.kind(),
            }),
        }
    }

    /// Mutable cast to a primitive scalar.
    pub fn as_primitive_mut(&mut self) -> Result<&mut JsonPrimitive> {
        match self {
            JsonValue::Primitive(p) => Ok(p),
            other => Err(JsonError::TypeMismatch {
                expected: "primitive",
                found: other.kind(),
            }),
        }
    }

    /// Consumes the node, yielding the object it holds. On mismatch the
    /// node is dropped and only the error survives.
    pub fn into_object(self) -> Result<JsonObject> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Consumes the node, yielding the array it holds.
    pub fn into_array(self) -> Result<JsonArray> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(JsonError::TypeMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }
}

impl From<JsonPrimitive> for JsonValue {
    fn from(value: JsonPrimitive) -> Self {
        JsonValue::Primitive(value)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Primitive(JsonPrimitive::from(value))
                }
            }
        )*
    };
}

value_from_scalar!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, f32, f64, char, &str, String, Number
);

/// Null normalization: an absent typed value stores the null node, so
/// `array.push(None::<i64>)` and `object.insert("k", None::<&str>)` both
/// produce `null`.
impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}
