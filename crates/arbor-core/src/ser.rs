//! Canonical serializer — the minimal single-line textual form of a tree.
//!
//! Every node type implements `Display` with this writer, so
//! `value.to_string()` is the canonical form other components reproduce
//! byte-for-byte:
//!
//! - No whitespace is ever inserted.
//! - Numbers print their stored representation (`2` stays `2`, `2.0` stays
//!   `2.0`); non-finite floats have no JSON spelling and print as `null`.
//! - Strings are double-quoted with standard JSON escaping: `"` and `\`
//!   escaped, control characters as `\n` `\r` `\t` `\b` `\f` or `\u00XX`,
//!   everything else (including non-ASCII) passed through as UTF-8.
//! - Arrays and objects emit their entries comma-joined in insertion order.
//!
//! The `serde::Serialize` impls at the bottom expose the same structure to
//! arbitrary serde writers; formatting policy (pretty printing, key sorting)
//! belongs to those writers, never to this crate.

use std::fmt::{self, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::array::JsonArray;
use crate::object::JsonObject;
use crate::scalar::{JsonPrimitive, Number};
use crate::value::JsonValue;

/// Walks a value node, emitting canonical text.
fn write_value<W: Write>(value: &JsonValue, out: &mut W) -> fmt::Result {
    match value {
        JsonValue::Null => out.write_str("null"),
        JsonValue::Primitive(p) => write_primitive(p, out),
        JsonValue::Array(a) => write_array(a, out),
        JsonValue::Object(o) => write_object(o, out),
    }
}

fn write_primitive<W: Write>(primitive: &JsonPrimitive, out: &mut W) -> fmt::Result {
    match primitive {
        JsonPrimitive::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        JsonPrimitive::Number(n) => write!(out, "{n}"),
        JsonPrimitive::String(s) => write_escaped_string(s, out),
    }
}

fn write_array<W: Write>(array: &JsonArray, out: &mut W) -> fmt::Result {
    out.write_char('[')?;
    for (i, element) in array.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_value(element, out)?;
    }
    out.write_char(']')
}

fn write_object<W: Write>(object: &JsonObject, out: &mut W) -> fmt::Result {
    out.write_char('{')?;
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_escaped_string(key, out)?;
        out.write_char(':')?;
        write_value(value, out)?;
    }
    out.write_char('}')
}

/// Emits a double-quoted, JSON-escaped string.
fn write_escaped_string<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\u{0008}' => out.write_str("\\b")?,
            '\u{000C}' => out.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(self, f)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_object(self, f)
    }
}

impl fmt::Display for JsonPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_primitive(self, f)
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Primitive(p) => p.serialize(serializer),
            JsonValue::Array(a) => a.serialize(serializer),
            JsonValue::Object(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for JsonPrimitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            JsonPrimitive::Bool(b) => serializer.serialize_bool(*b),
            JsonPrimitive::Number(n) => n.serialize(serializer),
            JsonPrimitive::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.as_f64()),
        }
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
