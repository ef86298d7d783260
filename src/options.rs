//! Configuration options for flattening.
//!
//! - [`FlattenOptions`]: main configuration struct
//! - [`Collision`]: what to do when two paths produce the same flat key
//!
//! ## Examples
//!
//! ```rust
//! use eflat::{value, Collision, FlattenOptions, Flattener};
//!
//! let options = FlattenOptions::new()
//!     .with_separator("__")
//!     .with_collision(Collision::Reject);
//!
//! let input = value!({"db": {"host": "localhost"}});
//! let flat = Flattener::new(options)
//!     .flatten(input.as_object().unwrap())
//!     .unwrap();
//! assert!(flat.contains_key("db__host"));
//! ```

/// Policy applied when two distinct input paths join to the same flat key.
///
/// A collision needs a key that already contains the separator, e.g.
/// `{"a.b": 1, "a": {"b": 2}}` produces `a.b` twice.
///
/// # Examples
///
/// ```rust
/// use eflat::Collision;
///
/// assert_eq!(Collision::default(), Collision::LastWins);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Collision {
    /// The leaf visited last overwrites the earlier one.
    #[default]
    LastWins,
    /// The leaf visited first is kept; later ones are ignored.
    FirstWins,
    /// Abort with [`Error::KeyCollision`](crate::Error::KeyCollision).
    Reject,
}

/// Configuration options for a [`Flattener`](crate::Flattener).
///
/// # Examples
///
/// ```rust
/// use eflat::FlattenOptions;
///
/// let options = FlattenOptions::new();
/// assert_eq!(options.separator, ".");
/// assert_eq!(options.max_depth, None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FlattenOptions {
    pub separator: String,
    pub collision: Collision,
    /// Deepest mapping level allowed below the root. Root entries are depth 1.
    pub max_depth: Option<usize>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            separator: ".".to_string(),
            collision: Collision::default(),
            max_depth: None,
        }
    }
}

impl FlattenOptions {
    /// Creates default options (`.` separator, last-write-wins, no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string placed between path segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eflat::FlattenOptions;
    ///
    /// let options = FlattenOptions::new().with_separator("/");
    /// assert_eq!(options.separator, "/");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_collision(mut self, collision: Collision) -> Self {
        self.collision = collision;
        self
    }

    /// Limits how deep the traversal may descend.
    ///
    /// With a limit of `2`, `{"a": {"b": 1}}` flattens but
    /// `{"a": {"b": {"c": 1}}}` fails with
    /// [`Error::DepthLimit`](crate::Error::DepthLimit).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
