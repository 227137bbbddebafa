//! Error types for tree access operations.

use std::fmt;

use thiserror::Error;

/// Classification of a JSON value's shape, used in error reporting and
/// shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Lowercase name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when accessing a JSON tree.
///
/// Looking up a missing key is *not* an error: lookups return `Option` so
/// callers can branch without error-style control flow. The only failure mode
/// in this crate is asking a node for a shape or scalar tag it does not have,
/// which is reported at the call site that performed the cast.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// A typed cast (`as_object`, `as_array`, `as_primitive`, or one of the
    /// scalar getters) was invoked on a node of a different shape.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: JsonKind,
    },
}

/// Convenience alias used throughout arbor-core.
pub type Result<T> = std::result::Result<T, JsonError>;
