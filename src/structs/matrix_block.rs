// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # MatrixBlock - *Dense or Sparse Storage*
//!
//! Holds a matrix in whichever representation it currently has, and routes
//! scalar operators to the matching kernel.

use crate::kernels::scalar::{scalar_map_dense, scalar_map_sparse};
use crate::traits::scalar_operator::ScalarOperator;
use crate::{Matrix, SparseMatrix};

/// A matrix in dense or CSR representation.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixBlock {
    Dense(Matrix),
    Sparse(SparseMatrix),
}

impl MatrixBlock {
    #[inline]
    pub fn nrows(&self) -> usize {
        match self {
            MatrixBlock::Dense(m) => m.nrows,
            MatrixBlock::Sparse(m) => m.nrows,
        }
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        match self {
            MatrixBlock::Dense(m) => m.ncols,
            MatrixBlock::Sparse(m) => m.ncols,
        }
    }

    #[inline]
    pub fn is_sparse(&self) -> bool {
        matches!(self, MatrixBlock::Sparse(_))
    }

    /// Value at (row, col); implicit zeros read as `0.0`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match self {
            MatrixBlock::Dense(m) => m.get(row, col),
            MatrixBlock::Sparse(m) => m.get(row, col),
        }
    }

    /// Number of non-zero values. For sparse blocks this is the stored count.
    pub fn nnz(&self) -> usize {
        match self {
            MatrixBlock::Dense(m) => m.nnz(),
            MatrixBlock::Sparse(m) => m.nnz(),
        }
    }

    /// Dense copy of the block.
    pub fn to_dense(&self) -> Matrix {
        match self {
            MatrixBlock::Dense(m) => m.clone(),
            MatrixBlock::Sparse(m) => m.to_dense(),
        }
    }

    /// Applies a scalar operator, choosing the iteration strategy from the
    /// storage and from `op.is_sparse_safe()`.
    pub fn apply_scalar_operator<O>(&self, op: &O) -> MatrixBlock
    where
        O: ScalarOperator + ?Sized,
    {
        match self {
            MatrixBlock::Dense(m) => MatrixBlock::Dense(scalar_map_dense(op, m)),
            MatrixBlock::Sparse(m) => scalar_map_sparse(op, m),
        }
    }
}

impl From<Matrix> for MatrixBlock {
    fn from(m: Matrix) -> Self {
        MatrixBlock::Dense(m)
    }
}

impl From<SparseMatrix> for MatrixBlock {
    fn from(m: SparseMatrix) -> Self {
        MatrixBlock::Sparse(m)
    }
}
