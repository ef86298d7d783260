//! Error types for flattening.
//!
//! Flattening a well-formed tree of [`Value`](crate::Value)s never fails with the
//! default options. Errors come from three places:
//!
//! - **Structure**: the root handed to [`flatten_value`](crate::flatten_value) is
//!   not a mapping
//! - **Policy**: a key collision under [`Collision::Reject`](crate::Collision::Reject),
//!   or nesting deeper than the configured depth limit
//! - **Decoding**: the JSON or `Serialize` front ends could not produce a `Value`
//!
//! ## Examples
//!
//! ```rust
//! use eflat::{flatten_value, Error, Value};
//!
//! let err = flatten_value(&Value::from("not a map")).unwrap_err();
//! assert!(matches!(err, Error::Structural { .. }));
//! assert!(err.to_string().contains("string"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while flattening.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value expected to be a mapping was something else.
    #[error("Structural error at {path}: expected a mapping, found {found}")]
    Structural { path: String, found: &'static str },

    /// Two distinct input paths produced the same flat key.
    #[error("Key collision: flat key `{key}` is produced by more than one path")]
    KeyCollision { key: String },

    /// Nesting exceeded the configured depth limit.
    #[error("Depth limit of {limit} exceeded at `{path}`")]
    DepthLimit { path: String, limit: usize },

    /// The input text could not be decoded into a value tree.
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Unsupported type for conversion into a `Value`
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a structural error for a non-mapping value found at `path`.
    ///
    /// An empty path means the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eflat::Error;
    ///
    /// let err = Error::structural("", "array");
    /// assert!(err.to_string().contains("<root>"));
    /// ```
    pub fn structural(path: &str, found: &'static str) -> Self {
        Error::Structural {
            path: if path.is_empty() {
                "<root>".to_string()
            } else {
                path.to_string()
            },
            found,
        }
    }

    /// Creates a key collision error.
    pub fn collision(key: &str) -> Self {
        Error::KeyCollision {
            key: key.to_string(),
        }
    }

    /// Creates a depth limit error.
    pub fn depth_limit(path: &str, limit: usize) -> Self {
        Error::DepthLimit {
            path: path.to_string(),
            limit,
        }
    }

    /// Creates a decode error from any displayable decoder failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eflat::Error;
    ///
    /// let err = Error::decode("EOF while parsing an object");
    /// assert!(err.to_string().starts_with("Decode error"));
    /// ```
    pub fn decode<T: fmt::Display>(msg: T) -> Self {
        Error::Decode(msg.to_string())
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_names_root() {
        let err = Error::structural("", "null");
        assert_eq!(
            err.to_string(),
            "Structural error at <root>: expected a mapping, found null"
        );
    }

    #[test]
    fn test_structural_keeps_path() {
        let err = Error::structural("hello.world", "number");
        assert!(err.to_string().contains("hello.world"));
    }

    #[test]
    fn test_collision_message() {
        let err = Error::collision("a.b");
        assert!(err.to_string().contains("`a.b`"));
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
