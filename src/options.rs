//! Configuration options for representation serialization.
//!
//! This module provides [`ReprOptions`], which controls how nested container
//! bodies are indented.
//!
//! ## Examples
//!
//! ```rust
//! use plrepr::{repr, to_string_with_options, ReprOptions};
//!
//! let value = repr!([1, 2]);
//!
//! // Default four-space indentation
//! let text = to_string_with_options(&value, ReprOptions::new()).unwrap();
//! assert_eq!(text, "[\n    1,\n    2\n    ]");
//!
//! // Narrower two-space indentation
//! let options = ReprOptions::new().with_indent(2);
//! let text = to_string_with_options(&value, options).unwrap();
//! assert_eq!(text, "[\n  1,\n  2\n  ]");
//! ```

/// Configuration options for representation serialization.
///
/// Controls the number of spaces written per indentation level when a
/// container body spills onto multiple lines.
///
/// # Examples
///
/// ```rust
/// use plrepr::ReprOptions;
///
/// // Default four-space indentation
/// let options = ReprOptions::new();
///
/// // Custom width
/// let options = ReprOptions::new().with_indent(2);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReprOptions {
    pub indent: usize,
}

impl Default for ReprOptions {
    fn default() -> Self {
        ReprOptions { indent: 4 }
    }
}

impl ReprOptions {
    /// Creates default options (four spaces per indentation level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprOptions;
    ///
    /// let options = ReprOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 4.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::ReprOptions;
    ///
    /// let options = ReprOptions::new().with_indent(8);
    /// assert_eq!(options.indent, 8);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Returns the padding string for `indent_level` levels of nesting.
    #[must_use]
    pub fn padding(&self, indent_level: usize) -> String {
        " ".repeat(self.indent * indent_level)
    }
}
