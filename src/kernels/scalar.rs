// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Scalar Kernels
//!
//! Applies a [`ScalarOperator`] across slices and matrix storage.
//!
//! The sparse kernel is where sparse safety pays off. A sparse-safe operator
//! maps the stored values in place of the whole matrix and keeps the CSR
//! structure. Any other operator turns every implicit zero into
//! `op.zero_image()`, so the result is produced densely.
//!
//! With the `parallel_proc` feature, `par_` variants split the work across
//! the Rayon pool. They share the operator by reference, so it must be
//! fully configured before the call; the borrow checker enforces this.

use vec64::Vec64;

use crate::traits::scalar_operator::ScalarOperator;
use crate::traits::type_unions::Float;

#[cfg(feature = "matrix")]
use log::debug;
#[cfg(feature = "matrix")]
use crate::{Matrix, MatrixBlock, SparseMatrix};

/// Applies `op` to every element of `values`.
///
/// Inputs are widened to `f64` for evaluation and narrowed back to `T`.
pub fn scalar_map<T, O>(op: &O, values: &[T]) -> Vec64<T>
where
    T: Float,
    O: ScalarOperator + ?Sized,
{
    values
        .iter()
        .map(|v| T::from_f64(op.apply_scalar(v.to_f64_lossless())))
        .collect()
}

/// Applies `op` to every logical element of a dense matrix.
#[cfg(feature = "matrix")]
pub fn scalar_map_dense<O>(op: &O, input: &Matrix) -> Matrix
where
    O: ScalarOperator + ?Sized,
{
    let mut out = Matrix::new(input.nrows, input.ncols, Some(input.name.clone()));
    for (o, v) in out.as_mut_slice().iter_mut().zip(input.as_slice()) {
        *o = op.apply_scalar(*v);
    }
    out
}

/// Applies `op` to a sparse matrix.
///
/// Returns `MatrixBlock::Sparse` when `op` is sparse-safe, visiting stored
/// entries only; stored entries that map to exactly `0.0` are dropped from
/// the result. Otherwise returns `MatrixBlock::Dense`, with every implicit
/// zero replaced by `op.zero_image()`.
#[cfg(feature = "matrix")]
pub fn scalar_map_sparse<O>(op: &O, input: &SparseMatrix) -> MatrixBlock
where
    O: ScalarOperator + ?Sized,
{
    let mapped: Vec<f64> = input.values.iter().map(|v| op.apply_scalar(*v)).collect();
    assemble(op, input, &mapped)
}

/// Parallel [`scalar_map_dense`].
#[cfg(all(feature = "matrix", feature = "parallel_proc"))]
pub fn par_scalar_map_dense<O>(op: &O, input: &Matrix) -> Matrix
where
    O: ScalarOperator + ?Sized,
{
    use rayon::prelude::*;

    let mut out = Matrix::new(input.nrows, input.ncols, Some(input.name.clone()));
    out.as_mut_slice()
        .par_iter_mut()
        .zip(input.as_slice().par_iter())
        .for_each(|(o, v)| *o = op.apply_scalar(*v));
    out
}

/// Parallel [`scalar_map_sparse`]. Stored values are mapped across the
/// pool; assembling the output structure stays sequential.
#[cfg(all(feature = "matrix", feature = "parallel_proc"))]
pub fn par_scalar_map_sparse<O>(op: &O, input: &SparseMatrix) -> MatrixBlock
where
    O: ScalarOperator + ?Sized,
{
    use rayon::prelude::*;

    let mapped: Vec<f64> = input.values.par_iter().map(|v| op.apply_scalar(*v)).collect();
    assemble(op, input, &mapped)
}

/// Builds the sparse kernel output from the mapped stored values.
#[cfg(feature = "matrix")]
fn assemble<O>(op: &O, input: &SparseMatrix, mapped: &[f64]) -> MatrixBlock
where
    O: ScalarOperator + ?Sized,
{
    if op.is_sparse_safe() {
        debug!(
            "scalar op ({} side, constant={}): sparse-safe, visiting {} stored of {} x {}",
            op.side(),
            op.constant(),
            input.nnz(),
            input.nrows,
            input.ncols
        );
        MatrixBlock::Sparse(compact(input, mapped))
    } else {
        debug!(
            "scalar op ({} side, constant={}): not sparse-safe, densifying {} x {}",
            op.side(),
            op.constant(),
            input.nrows,
            input.ncols
        );
        MatrixBlock::Dense(scatter(input, mapped, op.zero_image()))
    }
}

/// Rebuilds `input`'s structure around `mapped`, dropping exact zeros.
#[cfg(feature = "matrix")]
fn compact(input: &SparseMatrix, mapped: &[f64]) -> SparseMatrix {
    let mut row_ptr = Vec::with_capacity(input.nrows + 1);
    let mut col_idx = Vec::with_capacity(mapped.len());
    let mut values = Vec64::with_capacity(mapped.len());
    row_ptr.push(0);
    for row in 0..input.nrows {
        let (start, end) = (input.row_ptr[row], input.row_ptr[row + 1]);
        for k in start..end {
            if mapped[k] != 0.0 {
                col_idx.push(input.col_idx[k]);
                values.push(mapped[k]);
            }
        }
        row_ptr.push(col_idx.len());
    }
    SparseMatrix { nrows: input.nrows, ncols: input.ncols, row_ptr, col_idx, values }
}

/// Dense output filled with `fill`, with `mapped` written at stored positions.
#[cfg(feature = "matrix")]
fn scatter(input: &SparseMatrix, mapped: &[f64], fill: f64) -> Matrix {
    let mut out = Matrix::filled(input.nrows, input.ncols, fill, None);
    for row in 0..input.nrows {
        let (start, end) = (input.row_ptr[row], input.row_ptr[row + 1]);
        for k in start..end {
            out.set(row, input.col_idx[k], mapped[k]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryFunction, LeftScalarOperator, RightScalarOperator};

    #[test]
    fn test_scalar_map_f64() {
        let op = RightScalarOperator::new(BinaryFunction::Multiply, 2.0);
        let out = scalar_map(&op, &[1.0f64, -2.0, 0.0]);
        assert_eq!(&out[..], &[2.0, -4.0, 0.0]);
    }

    #[test]
    fn test_scalar_map_f32() {
        let op = LeftScalarOperator::new(BinaryFunction::GreaterThan, 1.5f64);
        let out = scalar_map(&op, &[1.0f32, 2.0, 0.0]);
        assert_eq!(&out[..], &[1.0f32, 0.0, 1.0]);
    }

    #[cfg(feature = "matrix")]
    fn sample() -> SparseMatrix {
        // [ 4 0 ]
        // [ 0 0 ]
        // [ 0 -2 ]
        SparseMatrix::try_new(
            3,
            2,
            vec![0, 1, 1, 2],
            vec![0, 1],
            Vec64::from(&[4.0, -2.0][..]),
        )
        .unwrap()
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn test_sparse_safe_keeps_structure() {
        let op = RightScalarOperator::new(BinaryFunction::Multiply, 0.5);
        match scalar_map_sparse(&op, &sample()) {
            MatrixBlock::Sparse(m) => {
                assert_eq!(m.col_idx(), &[0, 1]);
                assert_eq!(m.values(), &[2.0, -1.0]);
            }
            other => panic!("Expected sparse result, got {:?}", other),
        }
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn test_sparse_safe_drops_new_zeros() {
        // X > 0 maps -2 to 0
        let op = RightScalarOperator::new(BinaryFunction::GreaterThan, 0.0);
        match scalar_map_sparse(&op, &sample()) {
            MatrixBlock::Sparse(m) => {
                assert_eq!(m.nnz(), 1);
                assert_eq!(m.get(0, 0), 1.0);
                assert_eq!(m.get(2, 1), 0.0);
            }
            other => panic!("Expected sparse result, got {:?}", other),
        }
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn test_unsafe_densifies() {
        // 3 > X maps every implicit zero to 1
        let op = LeftScalarOperator::new(BinaryFunction::GreaterThan, 3.0);
        match scalar_map_sparse(&op, &sample()) {
            MatrixBlock::Dense(m) => {
                assert_eq!(m.get(0, 0), 0.0);
                assert_eq!(m.get(1, 1), 1.0);
                assert_eq!(m.get(2, 1), 1.0);
                assert_eq!(m.nnz(), 5);
            }
            other => panic!("Expected dense result, got {:?}", other),
        }
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn test_dense_kernel() {
        let input = Matrix::from_rows(&[&[1.0, 0.0], &[-1.0, 2.0]]).unwrap();
        let op = LeftScalarOperator::new(BinaryFunction::Minus, 1.0);
        let out = scalar_map_dense(&op, &input);
        assert_eq!(out.get(0, 0), 0.0);
        assert_eq!(out.get(0, 1), 1.0);
        assert_eq!(out.get(1, 0), 2.0);
        assert_eq!(out.get(1, 1), -1.0);
    }

    #[cfg(feature = "matrix")]
    #[test]
    fn test_dense_kernel_keeps_name() {
        let input = Matrix::from_flat(&[1.0, 2.0], 2, 1, Some("weights".to_string())).unwrap();
        let op = RightScalarOperator::new(BinaryFunction::Plus, 1.0);
        assert_eq!(scalar_map_dense(&op, &input).name, "weights");
    }
}
