//! Primitive scalars — booleans, numbers, and strings.
//!
//! Two rules from the document model live here:
//!
//! - **Character canonicalization**: a `char` input is folded into a
//!   one-character string before storage. There is no character tag, so a
//!   stored `'a'` and a stored `"a"` are the same scalar.
//! - **Cross-representation numeric equality**: [`Number`] remembers whether
//!   it was built from an integer or a floating-point value so serialization
//!   can reproduce the exact textual form (`2` vs `2.0`), but equality and
//!   hashing compare *numeric value*: `Number::from(2)` equals
//!   `Number::from(2.0)` and the two hash identically.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{JsonError, JsonKind, Result};

/// A JSON number, preserving its original integer or floating representation.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    repr: Repr,
}

#[derive(Debug, Clone, Copy)]
enum Repr {
    Int(i64),
    Float(f64),
}

/// 2^63 as an f64. Floats in `[-2^63, 2^63)` with zero fraction convert to
/// `i64` exactly, so the cast below never saturates.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Equality/hash key for a [`Number`]. A float that holds an exact integer
/// value collapses to the integer form; `-0.0` collapses to `0`; every NaN
/// bit pattern collapses to one key so `Eq` stays lawful.
#[derive(PartialEq, Eq, Hash)]
enum Canonical {
    Int(i64),
    Float(u64),
}

impl Number {
    /// Builds an integer-form number.
    pub fn from_i64(value: i64) -> Self {
        Number {
            repr: Repr::Int(value),
        }
    }

    /// Builds a floating-form number. The value serializes with a fractional
    /// marker (`2.0`, not `2`) even when it holds a whole number.
    pub fn from_f64(value: f64) -> Self {
        Number {
            repr: Repr::Float(value),
        }
    }

    /// True if this number was built from an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self.repr, Repr::Int(_))
    }

    /// The integer value, if this number is integer-form. Floating-form
    /// numbers return `None` even when they hold a whole value; there is
    /// no silent truncation.
    pub fn as_i64(&self) -> Option<i64> {
        match self.repr {
            Repr::Int(i) => Some(i),
            Repr::Float(_) => None,
        }
    }

    /// The numeric value widened to `f64`. Always available.
    pub fn as_f64(&self) -> f64 {
        match self.repr {
            Repr::Int(i) => i as f64,
            Repr::Float(f) => f,
        }
    }

    fn canonical(self) -> Canonical {
        match self.repr {
            Repr::Int(i) => Canonical::Int(i),
            Repr::Float(f) => {
                if f.is_nan() {
                    return Canonical::Float(f64::NAN.to_bits());
                }
                // Covers -0.0 (== 0.0) and whole-valued floats in i64 range.
                if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
                    return Canonical::Int(f as i64);
                }
                Canonical::Float(f.to_bits())
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

// Lawful because canonicalization gives NaN a single identity.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Number {
    /// Canonical textual form. Integer-form numbers print as-is; floating-form
    /// numbers always carry a fractional or exponent marker so the two
    /// representations stay distinguishable in serialized output. Non-finite
    /// floats have no JSON spelling and print as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Int(i) => write!(f, "{i}"),
            Repr::Float(x) => {
                if !x.is_finite() {
                    return f.write_str("null");
                }
                let s = x.to_string();
                if s.contains('.') || s.contains('e') || s.contains('E') {
                    f.write_str(&s)
                } else {
                    write!(f, "{s}.0")
                }
            }
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::from_i64(value as i64)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from_f64(value as f64)
    }
}

/// The payload of a primitive value node: exactly one of boolean, number, or
/// string. Characters never appear here; they canonicalize to one-character
/// strings at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonPrimitive {
    Bool(bool),
    Number(Number),
    String(String),
}

impl JsonPrimitive {
    /// Shape classification of this scalar.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonPrimitive::Bool(_) => JsonKind::Bool,
            JsonPrimitive::Number(_) => JsonKind::Number,
            JsonPrimitive::String(_) => JsonKind::String,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonPrimitive::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonPrimitive::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonPrimitive::String(_))
    }

    /// The boolean value. Fails with `TypeMismatch` on any other tag.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            JsonPrimitive::Bool(b) => Ok(*b),
            other => Err(JsonError::TypeMismatch {
                expected: "boolean",
                found: other.kind(),
            }),
        }
    }

    /// The numeric value. Fails with `TypeMismatch` on any other tag.
    pub fn as_number(&self) -> Result<Number> {
        match self {
            JsonPrimitive::Number(n) => Ok(*n),
            other => Err(JsonError::TypeMismatch {
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    /// The integer value. Fails with `TypeMismatch` unless this is an
    /// integer-form number.
    pub fn as_i64(&self) -> Result<i64> {
        let n = self.as_number()?;
        n.as_i64().ok_or(JsonError::TypeMismatch {
            expected: "integer",
            found: JsonKind::Number,
        })
    }

    /// The numeric value widened to `f64`. Fails with `TypeMismatch` on
    /// non-number tags; integer-form numbers widen.
    pub fn as_f64(&self) -> Result<f64> {
        Ok(self.as_number()?.as_f64())
    }

    /// The string slice. Fails with `TypeMismatch` on any other tag.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            JsonPrimitive::String(s) => Ok(s),
            other => Err(JsonError::TypeMismatch {
                expected: "string",
                found: other.kind(),
            }),
        }
    }
}

macro_rules! primitive_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonPrimitive {
                fn from(value: $ty) -> Self {
                    JsonPrimitive::Number(Number::from(value))
                }
            }
        )*
    };
}

primitive_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, f32, f64);

impl From<bool> for JsonPrimitive {
    fn from(value: bool) -> Self {
        JsonPrimitive::Bool(value)
    }
}

impl From<Number> for JsonPrimitive {
    fn from(value: Number) -> Self {
        JsonPrimitive::Number(value)
    }
}

impl From<String> for JsonPrimitive {
    fn from(value: String) -> Self {
        JsonPrimitive::String(value)
    }
}

impl From<&str> for JsonPrimitive {
    fn from(value: &str) -> Self {
        JsonPrimitive::String(value.to_string())
    }
}

impl From<char> for JsonPrimitive {
    /// Character canonicalization: stored as a one-character string.
    fn from(value: char) -> Self {
        JsonPrimitive::String(String::from(value))
    }
}
