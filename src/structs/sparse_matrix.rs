// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Sparse Matrix Module - *Compressed Sparse Row Storage*
//!
//! CSR matrix of `f64`. Entries not stored are implicit zeros.
//!
//! Explicitly stored zeros are allowed: a stored `0.0` is still visited by
//! stored-only iteration. Only the positions missing from the structure are
//! implicit, and those are what a sparse-safe operator may skip.

use vec64::Vec64;

use crate::enums::error::OperatorError;
use crate::structs::matrix::Matrix;

/// # SparseMatrix
///
/// Compressed sparse row matrix.
///
/// ### Properties
/// - `row_ptr`: `nrows + 1` offsets into `col_idx`/`values`; row `i` spans
///   `row_ptr[i]..row_ptr[i + 1]`.
/// - `col_idx`: column of each stored entry, strictly increasing within a row.
/// - `values`: stored values, parallel to `col_idx`.
///
/// Fields are only set by the constructors, which uphold the CSR invariants
/// the kernels index by. Outside the crate they are read through accessors:
///
/// ```compile_fail
/// let mut m = scalarops::SparseMatrix::empty(1, 1);
/// m.row_ptr = vec![0, 5];
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) row_ptr: Vec<usize>,
    pub(crate) col_idx: Vec<usize>,
    pub(crate) values: Vec64<f64>,
}

impl SparseMatrix {
    /// An all-implicit-zero matrix of the given shape.
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        SparseMatrix {
            nrows,
            ncols,
            row_ptr: vec![0; nrows + 1],
            col_idx: Vec::new(),
            values: Vec64::with_capacity(0),
        }
    }

    /// Builds a CSR matrix from its parts, validating the structure.
    pub fn try_new(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec64<f64>,
    ) -> Result<Self, OperatorError> {
        let invalid = |message: String| Err(OperatorError::InvalidSparseStructure { message });

        if row_ptr.len() != nrows + 1 {
            return invalid(format!(
                "row_ptr has {} offsets, expected {}",
                row_ptr.len(),
                nrows + 1
            ));
        }
        if col_idx.len() != values.len() {
            return invalid(format!(
                "col_idx has {} entries but values has {}",
                col_idx.len(),
                values.len()
            ));
        }
        if row_ptr[0] != 0 || row_ptr[nrows] != values.len() {
            return invalid(format!(
                "row_ptr must run from 0 to {}, found {}..{}",
                values.len(),
                row_ptr[0],
                row_ptr[nrows]
            ));
        }
        for row in 0..nrows {
            let (start, end) = (row_ptr[row], row_ptr[row + 1]);
            if start > end || end > values.len() {
                return invalid(format!("row_ptr is not monotone at row {}", row));
            }
            let cols = &col_idx[start..end];
            if let Some(&c) = cols.iter().find(|&&c| c >= ncols) {
                return Err(OperatorError::IndexOutOfBounds { row, col: c, nrows, ncols });
            }
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return invalid(format!("columns of row {} are not strictly increasing", row));
            }
        }

        Ok(SparseMatrix { nrows, ncols, row_ptr, col_idx, values })
    }

    /// Compresses a dense matrix, storing only its non-zero elements.
    pub fn from_dense(dense: &Matrix) -> Self {
        let mut row_ptr = Vec::with_capacity(dense.nrows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec64::with_capacity(dense.nnz());
        row_ptr.push(0);
        for row in 0..dense.nrows {
            for col in 0..dense.ncols {
                let v = dense.get(row, col);
                if v != 0.0 {
                    col_idx.push(col);
                    values.push(v);
                }
            }
            row_ptr.push(col_idx.len());
        }
        SparseMatrix { nrows: dense.nrows, ncols: dense.ncols, row_ptr, col_idx, values }
    }

    /// Expands to dense storage, writing implicit zeros explicitly.
    pub fn to_dense(&self) -> Matrix {
        let mut dense = Matrix::new(self.nrows, self.ncols, None);
        for (row, col, v) in self.iter() {
            dense.set(row, col, v);
        }
        dense
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Row offsets, `nrows + 1` long.
    #[inline]
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column of each stored entry.
    #[inline]
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Stored values, parallel to [`col_idx`](Self::col_idx).
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored entries, including stored zeros.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Fraction of logical entries that are stored.
    pub fn density(&self) -> f64 {
        let cells = self.nrows * self.ncols;
        if cells == 0 { 0.0 } else { self.nnz() as f64 / cells as f64 }
    }

    /// Stored columns and values of one row.
    #[inline]
    pub fn row(&self, row: usize) -> (&[usize], &[f64]) {
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        (&self.col_idx[start..end], &self.values[start..end])
    }

    /// Value at (row, col), or `0.0` when the entry is implicit.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.nrows, "Row out of bounds");
        debug_assert!(col < self.ncols, "Col out of bounds");
        let (cols, vals) = self.row(row);
        match cols.binary_search(&col) {
            Ok(i) => vals[i],
            Err(_) => 0.0,
        }
    }

    /// Iterates stored entries as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.nrows).flat_map(move |row| {
            let (cols, vals) = self.row(row);
            cols.iter().zip(vals.iter()).map(move |(&col, &v)| (row, col, v))
        })
    }
}
