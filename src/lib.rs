//! # eflat
//!
//! Flattens arbitrarily nested JSON-like data into a single-level map whose keys
//! are dot-joined paths.
//!
//! ```text
//! {"hello": {"world": {"again": "good morning"}}}
//!     => {"hello.world.again": "good morning"}
//! ```
//!
//! ## Rules
//!
//! - A non-empty mapping is descended into; its key becomes part of the path.
//! - Everything else is a **leaf** and is emitted unchanged: strings, numbers,
//!   booleans, null, empty mappings, and sequences of any length.
//! - Sequences are never expanded, even when they contain mappings.
//! - Numbers are `f64`, as a JSON decoder produces them.
//!
//! ## Quick Start
//!
//! ```rust
//! use eflat::{flatten_json, Value};
//!
//! let flat = flatten_json(r#"{"hallo": {"lorem": [10, 1], "ipsum": {"dolor": {}}}}"#).unwrap();
//!
//! assert_eq!(flat.len(), 2);
//! assert_eq!(
//!     flat.get("hallo.lorem"),
//!     Some(&Value::Array(vec![Value::Number(10.0), Value::Number(1.0)]))
//! );
//! assert!(flat.get("hallo.ipsum.dolor").unwrap().is_object());
//! ```
//!
//! ### Typed input
//!
//! ```rust
//! use eflat::flatten_serializable;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Database { host: String, port: u16 }
//!
//! #[derive(Serialize)]
//! struct Config { database: Database, debug: bool }
//!
//! let config = Config {
//!     database: Database { host: "localhost".to_string(), port: 5432 },
//!     debug: true,
//! };
//!
//! let flat = flatten_serializable(&config).unwrap();
//! assert_eq!(flat.get("database.port").and_then(|v| v.as_f64()), Some(5432.0));
//! ```
//!
//! ### Options
//!
//! The separator, the policy for colliding keys and a depth limit are set
//! through [`FlattenOptions`] on a [`Flattener`]. See [`Collision`] for how
//! duplicate flat keys are handled.
//!
//! ## Logging
//!
//! Flattening emits `tracing` events (`debug` per call, `trace` per leaf,
//! `warn` on key collisions). No subscriber is installed by this crate.

pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use flatten::Flattener;
pub use map::Map;
pub use options::{Collision, FlattenOptions};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::Serialize;
use std::io;

/// Flattens a mapping with the default options.
///
/// # Examples
///
/// ```rust
/// use eflat::{flatten, value, Value};
///
/// let input = value!({"hello": {"world": "good morning"}});
/// let flat = flatten(input.as_object().unwrap()).unwrap();
/// assert_eq!(flat.get("hello.world"), Some(&Value::from("good morning")));
/// ```
///
/// # Errors
///
/// With the default options this never fails; the `Result` is kept so callers
/// can switch to a configured [`Flattener`] without changing signatures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten(root: &Map) -> Result<Map> {
    Flattener::default().flatten(root)
}

/// Flattens a value whose root is a mapping, with the default options.
///
/// # Errors
///
/// Returns [`Error::Structural`] if `root` is not a mapping.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_value(root: &Value) -> Result<Map> {
    Flattener::default().flatten_value(root)
}

/// Decodes a JSON document and flattens it.
///
/// # Examples
///
/// ```rust
/// use eflat::{flatten_json, Value};
///
/// let flat = flatten_json(r#"{"hello": {"world": null}}"#).unwrap();
/// assert_eq!(flat.get("hello.world"), Some(&Value::Null));
/// ```
///
/// # Errors
///
/// Returns [`Error::Decode`] if the text is not valid JSON, and
/// [`Error::Structural`] if the document is not a JSON object.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_json(json: &str) -> Result<Map> {
    let value: Value = serde_json::from_str(json).map_err(Error::decode)?;
    flatten_value(&value)
}

/// Decodes a JSON document from bytes and flattens it.
///
/// # Errors
///
/// Same as [`flatten_json`]; invalid UTF-8 is reported as [`Error::Decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_slice(json: &[u8]) -> Result<Map> {
    let value: Value = serde_json::from_slice(json).map_err(Error::decode)?;
    flatten_value(&value)
}

/// Reads a JSON document from an I/O stream and flattens it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same as [`flatten_json`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_reader<R>(mut reader: R) -> Result<Map>
where
    R: io::Read,
{
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| Error::io(&e.to_string()))?;
    flatten_slice(&buffer)
}

/// Converts any `T: Serialize` to a [`Value`] and flattens it.
///
/// # Errors
///
/// Returns an error if the value cannot be converted (e.g. non-string map
/// keys) or does not serialize to a mapping.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_serializable<T>(value: &T) -> Result<Map>
where
    T: ?Sized + Serialize,
{
    flatten_value(&to_value(value)?)
}
