//! # arbor-core
//!
//! In-memory JSON document tree with **insertion-ordered objects** and a
//! **canonical single-line serialization**.
//!
//! The crate is the value model a JSON library is built around: readers
//! construct these trees bottom-up, writers walk them, and binding layers
//! convert typed data through them. The invariants every such component
//! relies on live here: member ordering, scalar coercion (characters fold
//! to one-character strings, integer and floating numbers keep their textual
//! form but compare by value), null normalization, and structural
//! equality/hashing.
//!
//! ## Quick start
//!
//! ```rust
//! use arbor_core::{JsonArray, JsonObject};
//!
//! let mut scores = JsonArray::new();
//! scores.push(95);
//! scores.push(87);
//! scores.push(92);
//!
//! let mut person = JsonObject::new();
//! person.insert("name", "Alice");
//! person.insert("initial", 'A');        // canonicalized to "A"
//! person.insert("nickname", None::<&str>); // normalized to null
//! person.insert("scores", scores);
//!
//! assert!(person.get_array("scores").unwrap().is_some());
//! assert_eq!(
//!     person.to_string(),
//!     r#"{"name":"Alice","initial":"A","nickname":null,"scores":[95,87,92]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the closed [`JsonValue`] variant (Null / Primitive / Array / Object)
//! - [`object`] / [`array`] — builder and accessor wrappers over the variant
//! - [`map`] — the insertion-order-preserving [`MemberMap`] backing objects
//! - [`scalar`] — [`JsonPrimitive`] and [`Number`], coercion and equality rules
//! - [`ser`] — canonical `Display` serializer and `serde::Serialize` impls
//! - [`de`] — `serde::Deserialize` for tree construction by external readers
//! - [`error`] — [`JsonError`] and the shape classification [`JsonKind`]

pub mod array;
pub mod de;
pub mod error;
pub mod map;
pub mod object;
pub mod scalar;
pub mod ser;
pub mod value;

pub use array::JsonArray;
pub use error::{JsonError, JsonKind, Result};
pub use map::MemberMap;
pub use object::JsonObject;
pub use scalar::{JsonPrimitive, Number};
pub use value::JsonValue;
