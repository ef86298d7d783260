//! Depth-first flattening of a value tree into dot-path keys.
//!
//! The [`Flattener`] walks a [`Map`], joining mapping keys with a separator as it
//! descends. Every node that is not a non-empty mapping becomes one entry of the
//! result: scalars, null, empty mappings, and sequences of any length. Sequences
//! are never expanded, whatever they contain.
//!
//! ```rust
//! use eflat::{flatten, value};
//!
//! let input = value!({
//!     "hallo": {
//!         "lorem": [10, 1],
//!         "ipsum": {"dolor": [1, 10]}
//!     }
//! });
//!
//! let flat = flatten(input.as_object().unwrap()).unwrap();
//! assert_eq!(flat.len(), 2);
//! assert_eq!(flat.get("hallo.lorem"), Some(&value!([10, 1])));
//! assert_eq!(flat.get("hallo.ipsum.dolor"), Some(&value!([1, 10])));
//! ```

use crate::{Collision, Error, FlattenOptions, Map, Result, Value};
use tracing::{debug, trace, warn};

/// Flattens nested maps according to a set of [`FlattenOptions`].
///
/// A `Flattener` holds no state between calls; one instance can be shared
/// freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    #[must_use]
    pub fn new(options: FlattenOptions) -> Self {
        Flattener { options }
    }

    #[must_use]
    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flattens `root` into a fresh single-level map.
    ///
    /// # Errors
    ///
    /// Fails only when a key collides under [`Collision::Reject`] or the
    /// nesting exceeds [`FlattenOptions::max_depth`]. No partial result is
    /// returned on error.
    pub fn flatten(&self, root: &Map) -> Result<Map> {
        debug!(
            entries = root.len(),
            separator = %self.options.separator,
            "flattening map"
        );
        let mut out = Map::with_capacity(root.len());
        self.walk(root, "", 1, &mut out)?;
        debug!(leaves = out.len(), "flattened map");
        Ok(out)
    }

    /// Flattens a [`Value`] whose root must be a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] if `root` is not [`Value::Object`], plus
    /// everything [`Flattener::flatten`] can return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eflat::{value, Error, Flattener};
    ///
    /// let flattener = Flattener::default();
    /// assert!(flattener.flatten_value(&value!({"a": 1})).is_ok());
    /// assert!(matches!(
    ///     flattener.flatten_value(&value!([1, 2])),
    ///     Err(Error::Structural { .. })
    /// ));
    /// ```
    pub fn flatten_value(&self, root: &Value) -> Result<Map> {
        match root {
            Value::Object(map) => self.flatten(map),
            other => Err(Error::structural("", other.kind())),
        }
    }

    fn walk(&self, map: &Map, prefix: &str, depth: usize, out: &mut Map) -> Result<()> {
        for (key, value) in map {
            let path = self.join(prefix, key);

            if let Some(limit) = self.options.max_depth {
                if depth > limit {
                    return Err(Error::depth_limit(&path, limit));
                }
            }

            match value {
                Value::Object(child) if !child.is_empty() => {
                    self.walk(child, &path, depth + 1, out)?;
                }
                leaf => self.emit(path, leaf, out)?,
            }
        }
        Ok(())
    }

    fn join(&self, prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            return key.to_string();
        }
        let separator = &self.options.separator;
        let mut path = String::with_capacity(prefix.len() + separator.len() + key.len());
        path.push_str(prefix);
        path.push_str(separator);
        path.push_str(key);
        path
    }

    fn emit(&self, path: String, leaf: &Value, out: &mut Map) -> Result<()> {
        trace!(key = %path, kind = leaf.kind(), "leaf");

        if out.contains_key(&path) {
            match self.options.collision {
                Collision::Reject => return Err(Error::collision(&path)),
                Collision::FirstWins => {
                    warn!(key = %path, "duplicate flat key, keeping first value");
                    return Ok(());
                }
                Collision::LastWins => {
                    warn!(key = %path, "duplicate flat key, overwriting earlier value");
                }
            }
        }

        out.insert(path, leaf.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn flat(input: Value) -> Map {
        Flattener::default().flatten_value(&input).unwrap()
    }

    #[test]
    fn test_top_level_scalar() {
        assert_eq!(
            flat(value!({"hello": "world"})),
            value_map(&[("hello", value!("world"))])
        );
    }

    #[test]
    fn test_nested_paths() {
        let out = flat(value!({"hello": {"world": {"again": "good morning"}}}));
        assert_eq!(
            out,
            value_map(&[("hello.world.again", value!("good morning"))])
        );
    }

    #[test]
    fn test_empty_containers_are_leaves() {
        let out = flat(value!({"a": {}, "b": [], "c": {"d": {}}}));
        assert_eq!(out.len(), 3);
        assert_eq!(out.get("a"), Some(&value!({})));
        assert_eq!(out.get("b"), Some(&value!([])));
        assert_eq!(out.get("c.d"), Some(&value!({})));
    }

    #[test]
    fn test_sequences_not_expanded() {
        let out = flat(value!({"list": [{"inner": 1}, [2, 3]]}));
        assert_eq!(out.len(), 1);
        assert_eq!(out.get("list"), Some(&value!([{"inner": 1}, [2, 3]])));
    }

    #[test]
    fn test_empty_root() {
        assert!(flat(value!({})).is_empty());
    }

    #[test]
    fn test_output_follows_traversal_order() {
        let out = flat(value!({"z": 1, "a": {"y": 2, "b": 3}, "m": 4}));
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a.y", "a.b", "m"]);
    }

    #[test]
    fn test_custom_separator() {
        let flattener = Flattener::new(FlattenOptions::new().with_separator("__"));
        let out = flattener
            .flatten_value(&value!({"db": {"port": 5432}}))
            .unwrap();
        assert_eq!(out.get("db__port"), Some(&Value::Number(5432.0)));
    }

    #[test]
    fn test_collision_policies() {
        let input = value!({"a.b": 1, "a": {"b": 2}});

        let last = Flattener::default().flatten_value(&input).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last.get("a.b"), Some(&Value::Number(2.0)));

        let first = Flattener::new(FlattenOptions::new().with_collision(Collision::FirstWins))
            .flatten_value(&input)
            .unwrap();
        assert_eq!(first.get("a.b"), Some(&Value::Number(1.0)));

        let err = Flattener::new(FlattenOptions::new().with_collision(Collision::Reject))
            .flatten_value(&input)
            .unwrap_err();
        assert_eq!(err, Error::collision("a.b"));
    }

    #[test]
    fn test_depth_limit() {
        let flattener = Flattener::new(FlattenOptions::new().with_max_depth(2));
        assert!(flattener.flatten_value(&value!({"a": {"b": 1}})).is_ok());

        let err = flattener
            .flatten_value(&value!({"a": {"b": {"c": 1}}}))
            .unwrap_err();
        assert_eq!(err, Error::depth_limit("a.b.c", 2));
    }

    #[test]
    fn test_non_mapping_root() {
        let err = Flattener::default()
            .flatten_value(&Value::Null)
            .unwrap_err();
        assert_eq!(err, Error::structural("", "null"));
    }

    fn value_map(entries: &[(&str, Value)]) -> Map {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}
