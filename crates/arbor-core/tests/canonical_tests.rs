//! Canonical serialization: the exact single-line textual form other
//! components reproduce byte-for-byte.

use arbor_core::{JsonArray, JsonObject, JsonValue};

// ============================================================================
// Literals
// ============================================================================

#[test]
fn null_and_booleans() {
    assert_eq!(JsonValue::Null.to_string(), "null");
    assert_eq!(JsonValue::from(true).to_string(), "true");
    assert_eq!(JsonValue::from(false).to_string(), "false");
}

#[test]
fn empty_containers() {
    assert_eq!(JsonObject::new().to_string(), "{}");
    assert_eq!(JsonArray::new().to_string(), "[]");
    assert_eq!(JsonValue::Object(JsonObject::new()).to_string(), "{}");
    assert_eq!(JsonValue::Array(JsonArray::new()).to_string(), "[]");
}

#[test]
fn object_members_in_insertion_order_without_whitespace() {
    let mut object = JsonObject::new();
    object.insert("a", 1);
    object.insert("b", 2);
    assert_eq!(object.to_string(), r#"{"a":1,"b":2}"#);

    let mut reversed = JsonObject::new();
    reversed.insert("b", 2);
    reversed.insert("a", 1);
    assert_eq!(reversed.to_string(), r#"{"b":2,"a":1}"#);

    // Equal trees, different canonical text: order is preserved, not sorted.
    assert_eq!(object, reversed);
    assert_ne!(object.to_string(), reversed.to_string());
}

#[test]
fn nested_tree() {
    let mut address = JsonObject::new();
    address.insert("city", "Lisbon");
    address.insert("zip", None::<&str>);

    let mut tags = JsonArray::new();
    tags.push("admin");
    tags.push('x');

    let mut root = JsonObject::new();
    root.insert("id", 17);
    root.insert("ratio", 0.5);
    root.insert("address", address);
    root.insert("tags", tags);

    assert_eq!(
        root.to_string(),
        r#"{"id":17,"ratio":0.5,"address":{"city":"Lisbon","zip":null},"tags":["admin","x"]}"#
    );
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn escapes_quotes_and_backslashes() {
    let value = JsonValue::from(r#"say "hi" to c:\temp"#);
    assert_eq!(value.to_string(), r#""say \"hi\" to c:\\temp""#);
}

#[test]
fn escapes_control_characters() {
    let value = JsonValue::from("line1\nline2\tend\r");
    assert_eq!(value.to_string(), r#""line1\nline2\tend\r""#);

    let value = JsonValue::from("\u{0008}\u{000C}\u{0001}");
    assert_eq!(value.to_string(), r#""\b\f\u0001""#);
}

#[test]
fn passes_unicode_through_unescaped() {
    let value = JsonValue::from("café 你好");
    assert_eq!(value.to_string(), r#""café 你好""#);
}

#[test]
fn escapes_member_names_too() {
    let mut object = JsonObject::new();
    object.insert("with \"quote\"", 1);
    object.insert("tab\there", 2);
    assert_eq!(
        object.to_string(),
        r#"{"with \"quote\"":1,"tab\there":2}"#
    );
}

// ============================================================================
// The Display impls agree at every level
// ============================================================================

#[test]
fn value_and_wrapper_displays_agree() {
    let mut object = JsonObject::new();
    object.insert("k", [1, 2].into_iter().collect::<JsonArray>());

    let as_value = JsonValue::Object(object.clone());
    assert_eq!(object.to_string(), as_value.to_string());

    let array: JsonArray = ["a", "b"].into_iter().collect();
    let as_value = JsonValue::Array(array.clone());
    assert_eq!(array.to_string(), as_value.to_string());
}
