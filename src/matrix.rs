//! Two-dimensional numeric matrices.
//!
//! A [`Matrix`] is a rectangular block of `f64` elements stored row-major.
//! Its textual form is the shape followed by the flattened elements:
//! `2 2 [1, 2, 3, 4]`. Matrices participate in reference sharing, so a
//! matrix reused across a value graph is expanded once and cited afterwards.

use std::fmt;

use crate::error::{Error, Result};

/// A two-dimensional matrix of `f64` elements in row-major order.
///
/// The element buffer length must equal `rows * cols`; constructors enforce
/// this and return [`Error::ShapeMismatch`] otherwise.
///
/// # Examples
///
/// ```rust
/// use plrepr::Matrix;
///
/// let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m.get(1, 2), Some(6.0));
/// assert_eq!(m.to_string(), "2 3 [1, 2, 3, 4, 5, 6]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a shape and a row-major element buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when `elements.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::Matrix;
    ///
    /// let m = Matrix::new(1, 2, vec![0.5, 1.5]).unwrap();
    /// assert_eq!(m.to_string(), "1 2 [0.5, 1.5]");
    ///
    /// assert!(Matrix::new(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, elements: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(elements.len()) {
            return Err(Error::shape_mismatch(rows, cols, elements.len()));
        }
        Ok(Matrix {
            rows,
            cols,
            elements,
        })
    }

    /// Creates a matrix from a list of equally sized rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the rows have differing lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plrepr::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.to_string(), "2 2 [1, 2, 3, 4]");
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut elements = Vec::with_capacity(row_count * col_count);
        for row in rows {
            if row.len() != col_count {
                return Err(Error::shape_mismatch(
                    row_count,
                    col_count,
                    elements.len() + row.len(),
                ));
            }
            elements.extend(row);
        }
        Ok(Matrix {
            rows: row_count,
            cols: col_count,
            elements,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the dimensions as a `(rows, cols)` pair.
    #[must_use]
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the total number of elements.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the matrix holds no elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.elements[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns the elements of `row` as a slice, or `None` when out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.elements[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns the row-major element buffer.
    #[must_use]
    #[inline]
    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.elements.iter()
    }
}

impl fmt::Display for Matrix {
    /// Writes the raw textual form: rows, columns, then the flattened elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self
            .elements
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} {} [{}]", self.rows, self.cols, elements)
    }
}
