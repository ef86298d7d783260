use eflat::{value, Map, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(42.0));
    assert_eq!(value!(1234.99), Value::Number(1234.99));
    assert_eq!(value!(-123), Value::Number(-123.0));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));
    assert_eq!(
        value!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
    assert_eq!(
        value!([[1, 2], []]),
        Value::Array(vec![
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::Array(vec![]),
        ])
    );
}

#[test]
fn test_value_macro_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let built = value!({
        "hello": {"world": "good morning"},
        "list": [10, 1],
    });

    let mut world = Map::new();
    world.insert("world".to_string(), Value::from("good morning"));
    let mut expected = Map::new();
    expected.insert("hello".to_string(), Value::Object(world));
    expected.insert(
        "list".to_string(),
        Value::Array(vec![Value::Number(10.0), Value::Number(1.0)]),
    );

    assert_eq!(built, Value::Object(expected));
}

#[test]
fn test_value_macro_matches_json() {
    let built = value!({"a": {"b": [null, false, 2.5]}, "c": {}});
    let decoded: Value = serde_json::from_str(r#"{"a":{"b":[null,false,2.5]},"c":{}}"#).unwrap();
    assert_eq!(built, decoded);
}
