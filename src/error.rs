//! Error types for representation serialization.
//!
//! This module covers the failure modes of turning a value graph into text:
//! values with no representation, attempts to re-register an already tracked
//! object, and matrices whose element buffer disagrees with their shape.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: The value cannot be rendered in the representation format
//! - **Duplicate References**: An identity was inserted into a reference table twice
//! - **Shape Mismatches**: Matrix dimensions do not match the element count
//!
//! ## Examples
//!
//! ```rust
//! use plrepr::{Matrix, Error};
//!
//! let result = Matrix::new(2, 3, vec![1.0, 2.0]);
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Matrix error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while serializing a value graph.
///
/// Each error variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The value has no representation in the output format
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// An identity already present in the reference table was inserted again
    #[error("Reference *{index} is already registered; representations can not be updated")]
    DuplicateReference { index: usize },

    /// Matrix dimensions do not match the length of the element buffer
    #[error("Matrix shape mismatch: {rows} x {cols} does not fit {len} elements")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::Error;
    ///
    /// let err = Error::unsupported_type("i128 out of range");
    /// assert!(err.to_string().contains("Unsupported type"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a duplicate reference error for the record at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::Error;
    ///
    /// let err = Error::duplicate_reference(3);
    /// assert!(err.to_string().contains("*3"));
    /// ```
    pub fn duplicate_reference(index: usize) -> Self {
        Error::DuplicateReference { index }
    }

    /// Creates a shape mismatch error for a matrix whose buffer does not
    /// hold `rows * cols` elements.
    pub fn shape_mismatch(rows: usize, cols: usize, len: usize) -> Self {
        Error::ShapeMismatch { rows, cols, len }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
