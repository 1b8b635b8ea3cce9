use crate::value::{Float64, Value, ValueTag};
use std::collections::{BTreeSet, HashSet};

// ---- helpers -----------------------------------------------------------

fn v_f(x: f64) -> Value {
    Value::from_f64(x).expect("finite f64")
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---- rendering ---------------------------------------------------------

#[test]
fn display_renders_text_bare() {
    assert_eq!(v_txt("Alice").to_string(), "Alice");
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Uint(7).to_string(), "7");
    assert_eq!(v_f(22.5).to_string(), "22.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
}

#[test]
fn display_renders_blob_and_list() {
    assert_eq!(Value::Blob(vec![0x01, 0xab]).to_string(), "0x01ab");
    assert_eq!(
        Value::List(vec![Value::Int(1), v_txt("two"), Value::List(vec![])]).to_string(),
        "[1, two, []]"
    );
}

// ---- conversions -------------------------------------------------------

#[test]
fn from_impls_pick_expected_variant() {
    assert_eq!(Value::from(25), Value::Int(25));
    assert_eq!(Value::from(25u8), Value::Uint(25));
    assert_eq!(Value::from("x"), v_txt("x"));
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Float64::from(2)), v_f(2.0));
}

#[test]
fn non_finite_floats_are_rejected() {
    assert!(Value::from_f64(f64::NAN).is_none());
    assert!(Value::try_from(f64::INFINITY).is_err());
}

// ---- tags --------------------------------------------------------------

#[test]
fn type_labels_are_stable() {
    assert_eq!(Value::Int(1).type_label(), "Int");
    assert_eq!(v_f(1.5).type_label(), "Float");
    assert_eq!(v_txt("a").type_label(), "Text");
    assert_eq!(Value::Null.tag(), ValueTag::Null);
    assert_eq!(ValueTag::Blob.to_u8(), 1);
}

#[test]
fn numeric_classification() {
    assert!(Value::Int(1).is_numeric());
    assert!(Value::Uint(1).is_numeric());
    assert!(v_f(0.5).is_numeric());
    assert!(!Value::Bool(true).is_numeric());
    assert!(!v_txt("1").is_numeric());
}

// ---- keyability --------------------------------------------------------

#[test]
fn values_are_usable_as_set_members() {
    let mut hashed = HashSet::new();
    hashed.insert(v_f(0.0));
    hashed.insert(v_f(-0.0));
    hashed.insert(Value::List(vec![Value::Int(1)]));
    hashed.insert(Value::List(vec![Value::Int(1)]));

    assert_eq!(hashed.len(), 2);

    let ordered: BTreeSet<_> = [Value::Int(2), Value::Int(1), Value::Null]
        .into_iter()
        .collect();
    assert_eq!(ordered.len(), 3);
}

#[test]
fn int_and_float_are_distinct_values() {
    assert_ne!(Value::Int(25), v_f(25.0));
    assert_ne!(Value::Int(1), Value::Uint(1));
}

#[test]
fn serde_round_trip_preserves_variant() {
    let value = Value::List(vec![v_txt("a"), Value::Int(1), v_f(1.5), Value::Null]);
    let json = serde_json::to_string(&value).expect("serialize");
    let back: Value = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, value);
}
