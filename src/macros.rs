/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Anything that is not `null`, `true`,
/// `false`, an array or an object goes through `Value::from`, so numbers end up
/// as `f64`. Negative numbers and other multi-token expressions need
/// parentheses inside arrays and objects: `value!([(-1), 2])`.
///
/// # Examples
///
/// ```rust
/// use eflat::{value, Value};
///
/// let v = value!({
///     "hello": {"world": [1, "two", null]},
///     "empty": {}
/// });
/// assert!(v.is_object());
/// assert_eq!(value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
