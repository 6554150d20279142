// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Matrix Module - *Dense Column-Major Storage*
//!
//! Dense column-major matrix, the target layout for scalar operations that
//! are not sparse-safe, and the reference layout sparse results are checked
//! against.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use vec64::Vec64;

use crate::enums::error::OperatorError;

// Global counter for unnamed matrix instances
static UNNAMED_MATRIX_COUNTER: AtomicUsize = AtomicUsize::new(1);

fn next_name() -> String {
    let id = UNNAMED_MATRIX_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("UnnamedMatrix{}", id)
}

/// # Matrix
///
/// Column-major dense matrix of `f64`.
///
/// ### Properties
/// - `nrows`: Number of rows.
/// - `ncols`: Number of columns.
/// - `data`: Flat 64-byte aligned buffer in column-major order.
/// - `name`: Matrix name, used for diagnostics and pretty printing.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    pub nrows: usize,
    pub ncols: usize,
    pub data: Vec64<f64>,
    pub name: String,
}

impl Matrix {
    /// Constructs a new zeroed Matrix with shape and optional name.
    pub fn new(nrows: usize, ncols: usize, name: Option<String>) -> Self {
        Self::filled(nrows, ncols, 0.0, name)
    }

    /// Constructs a Matrix with every element set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: f64, name: Option<String>) -> Self {
        let data: Vec64<f64> = std::iter::repeat_n(value, nrows * ncols).collect();
        Matrix { nrows, ncols, data, name: name.unwrap_or_else(next_name) }
    }

    /// Constructs a Matrix from a flat column-major slice.
    ///
    /// Fails when the slice length does not match the shape.
    pub fn from_flat(
        data: &[f64],
        nrows: usize,
        ncols: usize,
        name: Option<String>,
    ) -> Result<Self, OperatorError> {
        if data.len() != nrows * ncols {
            return Err(OperatorError::ShapeMismatch { nrows, ncols, found: data.len() });
        }
        Ok(Matrix { nrows, ncols, data: Vec64::from(data), name: name.unwrap_or_else(next_name) })
    }

    /// Constructs a Matrix from row-major nested rows, which is how matrices
    /// are usually written out in tests and literals.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, OperatorError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut m = Matrix::new(nrows, ncols, None);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(OperatorError::ShapeMismatch {
                    nrows,
                    ncols,
                    found: rows.iter().map(|r| r.len()).sum(),
                });
            }
            for (j, v) in row.iter().enumerate() {
                m.set(i, j, *v);
            }
        }
        Ok(m)
    }

    /// Returns the value at (row, col) (0-based).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.nrows, "Row out of bounds");
        debug_assert!(col < self.ncols, "Col out of bounds");
        self.data[col * self.nrows + row]
    }

    /// Sets the value at (row, col) (0-based).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.nrows, "Row out of bounds");
        debug_assert!(col < self.ncols, "Col out of bounds");
        self.data[col * self.nrows + row] = value;
    }

    /// Returns true if the matrix is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Returns the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of non-zero elements.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|v| **v != 0.0).count()
    }

    /// Returns an immutable reference to the flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a mutable reference to the flat buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns a single column as a slice.
    #[inline]
    pub fn col(&self, col: usize) -> &[f64] {
        debug_assert!(col < self.ncols, "Col out of bounds");
        &self.data[(col * self.nrows)..((col + 1) * self.nrows)]
    }

    /// Renames the matrix
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

// Pretty print
impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix '{}': {} × {} [col-major]", self.name, self.nrows, self.ncols)?;
        for row in 0..self.nrows.min(6) {
            // Print up to 6 rows
            write!(f, "\n[")?;
            for col in 0..self.ncols.min(8) {
                // Print up to 8 cols
                write!(f, " {:8.4}", self.get(row, col))?;
                if col != self.ncols - 1 {
                    write!(f, ",")?;
                }
            }
            if self.ncols > 8 {
                write!(f, " ...")?;
            }
            write!(f, " ]")?;
        }
        if self.nrows > 6 {
            write!(f, "\n...")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let m = Matrix::new(2, 3, Some("z".into()));
        assert_eq!(m.len(), 6);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.name, "z");
        assert!(!m.is_empty());
    }

    #[test]
    fn test_from_rows_is_column_major() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows, 3);
        assert_eq!(m.ncols, 2);
        assert_eq!(m.as_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m.col(0), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).unwrap_err();
        assert_eq!(err, OperatorError::ShapeMismatch { nrows: 2, ncols: 2, found: 3 });
    }

    #[test]
    fn test_from_flat_shape_mismatch() {
        let err = Matrix::from_flat(&[1.0, 2.0, 3.0], 2, 2, None).unwrap_err();
        assert_eq!(err, OperatorError::ShapeMismatch { nrows: 2, ncols: 2, found: 3 });
    }

    #[test]
    fn test_set_and_get() {
        let mut m = Matrix::new(2, 2, None);
        m.set(1, 0, 7.5);
        assert_eq!(m.get(1, 0), 7.5);
        assert_eq!(m.nnz(), 1);
        m.set_name("renamed");
        assert_eq!(m.name, "renamed");
    }
}
