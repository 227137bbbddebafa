//! The serde seam: external readers construct trees through `Deserialize`,
//! external writers render them through `Serialize`. `serde_json` stands in
//! for both sides here.

use arbor_core::{JsonObject, JsonValue};

// ============================================================================
// Reading: serde events build the tree bottom-up
// ============================================================================

#[test]
fn reader_builds_ordered_tree() {
    let value: JsonValue =
        serde_json::from_str(r#"{"zebra":1,"apple":[true,null,"x"],"mango":{"n":2.5}}"#).unwrap();

    let object = value.as_object().unwrap();
    let keys: Vec<&str> = object.keys().collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);

    let apple = object.get_array("apple").unwrap().unwrap();
    assert_eq!(apple.len(), 3);
    assert!(apple.get(1).unwrap().is_null());
}

#[test]
fn reader_preserves_numeric_form() {
    let value: JsonValue = serde_json::from_str(r#"[2,2.0,-3]"#).unwrap();
    let array = value.as_array().unwrap();

    // "2" arrives integer-form, "2.0" floating-form; they are equal scalars
    // but serialize differently.
    assert_eq!(array.get(0), array.get(1));
    assert_eq!(value.to_string(), "[2,2.0,-3]");

    let first = array.get(0).unwrap().as_primitive().unwrap();
    let second = array.get(1).unwrap().as_primitive().unwrap();
    assert_eq!(first.as_i64(), Ok(2));
    assert!(second.as_i64().is_err());
    assert_eq!(second.as_f64(), Ok(2.0));
}

#[test]
fn reader_roundtrips_canonical_text() {
    let mut object = JsonObject::new();
    object.insert("name", "Alice");
    object.insert("initial", 'A');
    object.insert("age", 30);
    object.insert("score", 91.5);
    object.insert("nickname", None::<&str>);

    let text = object.to_string();
    let reparsed: JsonValue = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, JsonValue::Object(object));
    assert_eq!(reparsed.to_string(), text);
}

// ============================================================================
// Writing: any serde writer sees the same structure
// ============================================================================

#[test]
fn compact_writer_matches_canonical_form() {
    let mut object = JsonObject::new();
    object.insert("id", 17);
    object.insert("ratio", 0.5);
    object.insert("label", "a \"b\" c");
    object.insert("flags", [true, false].into_iter().collect::<arbor_core::JsonArray>());
    object.insert("gone", None::<i32>);

    let via_serde = serde_json::to_string(&object).unwrap();
    assert_eq!(via_serde, object.to_string());
}

#[test]
fn pretty_writing_is_a_writer_policy() {
    // Formatting belongs to the writer; the tree only fixes structure and
    // order. Pretty output must still reparse to the same tree.
    let mut object = JsonObject::new();
    object.insert("a", 1);
    object.insert("b", [2, 3].into_iter().collect::<arbor_core::JsonArray>());

    let pretty = serde_json::to_string_pretty(&object).unwrap();
    assert_ne!(pretty, object.to_string());

    let reparsed: JsonValue = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, JsonValue::Object(object));
}
