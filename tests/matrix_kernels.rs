//! Integration tests for applying scalar operators over dense and sparse storage

#![cfg(feature = "matrix")]

use scalarops::kernels::scalar::{scalar_map_dense, scalar_map_sparse};
use scalarops::{
    BinaryFunction, LeftScalarOperator, Matrix, MatrixBlock, RightScalarOperator, ScalarOperator,
    SparseMatrix, Vec64,
};

// Finite constants only; non-finite multiply is pinned separately in
// `test_multiply_by_non_finite_keeps_implicit_zeros`.
const CONSTANTS: [f64; 7] = [-3.0, -1.0, -0.0, 0.0, 0.5, 2.0, 7.0];

fn create_test_matrix() -> Matrix {
    Matrix::from_rows(&[
        &[0.0, 1.5, 0.0, -2.0],
        &[0.0, 0.0, 0.0, 0.0],
        &[4.0, 0.0, -0.5, 0.0],
        &[0.0, 3.0, 0.0, 1.0],
    ])
    .unwrap()
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn assert_same_values(got: &Matrix, want: &Matrix, context: &str) {
    assert_eq!((got.nrows, got.ncols), (want.nrows, want.ncols), "{context}");
    for (i, (g, w)) in got.as_slice().iter().zip(want.as_slice()).enumerate() {
        assert!(same(*g, *w), "{context}: element {i} is {g}, expected {w}");
    }
}

fn check_operator<O: ScalarOperator>(op: &O, context: &str) {
    let dense = create_test_matrix();
    let sparse = SparseMatrix::from_dense(&dense);

    let want = scalar_map_dense(op, &dense);
    let got = scalar_map_sparse(op, &sparse);

    assert_eq!(got.is_sparse(), op.is_sparse_safe(), "{context}");
    assert_same_values(&got.to_dense(), &want, context);
}

#[test]
fn test_sparse_kernel_matches_dense_left() {
    for f in BinaryFunction::ALL {
        for c in CONSTANTS {
            check_operator(&LeftScalarOperator::new(f, c), &format!("{c} {f} X"));
        }
    }
}

#[test]
fn test_sparse_kernel_matches_dense_right() {
    for f in BinaryFunction::ALL {
        for c in CONSTANTS {
            check_operator(&RightScalarOperator::new(f, c), &format!("X {f} {c}"));
        }
    }
}

#[test]
fn test_reused_operator_across_stages() {
    let sparse = SparseMatrix::from_dense(&create_test_matrix());
    let mut op = LeftScalarOperator::new(BinaryFunction::GreaterThanEquals, -1.0);

    let stage1 = scalar_map_sparse(&op, &sparse);
    assert!(stage1.is_sparse());
    // -1 >= X holds only for the -2 entry
    assert_eq!(stage1.nnz(), 1);
    assert_eq!(stage1.get(0, 3), 1.0);

    op.set_constant(1.0);
    let stage2 = scalar_map_sparse(&op, &sparse);
    assert!(!stage2.is_sparse());
    assert_eq!(stage2.get(1, 1), 1.0);
    assert_eq!(stage2.get(0, 1), 0.0);
}

#[test]
fn test_explicit_zero_entries() {
    // Row 0 stores an explicit zero at column 1
    let sparse = SparseMatrix::try_new(
        2,
        2,
        vec![0, 2, 2],
        vec![0, 1],
        Vec64::from(&[2.0, 0.0][..]),
    )
    .unwrap();

    let safe = RightScalarOperator::new(BinaryFunction::Plus, 0.0);
    match scalar_map_sparse(&safe, &sparse) {
        MatrixBlock::Sparse(m) => {
            assert_eq!(m.nnz(), 1);
            assert_eq!(m.get(0, 0), 2.0);
        }
        other => panic!("Expected sparse result, got {:?}", other),
    }

    let shifted = safe.with_constant(1.0);
    let out = scalar_map_sparse(&shifted, &sparse).to_dense();
    assert_eq!(out.as_slice(), &[3.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_multiply_by_non_finite_keeps_implicit_zeros() {
    // [ 0 2 ]
    // [ 0 0 ]
    let sparse =
        SparseMatrix::try_new(2, 2, vec![0, 1, 1], vec![1], Vec64::from(&[2.0][..])).unwrap();
    let dense = sparse.to_dense();

    for c in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let op = RightScalarOperator::new(BinaryFunction::Multiply, c);
        assert!(op.is_sparse_safe(), "X * {c}");

        // Dense evaluation: 0 * c is NaN at every implicit position
        let full = scalar_map_dense(&op, &dense);
        assert!(full.get(0, 0).is_nan() && full.get(1, 0).is_nan() && full.get(1, 1).is_nan());

        let out = scalar_map_sparse(&op, &sparse);
        assert!(out.is_sparse(), "X * {c}");
        assert_eq!(out.nnz(), 1);
        assert_eq!(out.get(0, 0), 0.0);
        assert_eq!(out.get(1, 0), 0.0);
        assert_eq!(out.get(1, 1), 0.0);
        assert!(same(out.get(0, 1), 2.0 * c), "X * {c}: stored entry");
    }
}

#[test]
fn test_block_dispatch() {
    let dense = create_test_matrix();
    let op = RightScalarOperator::new(BinaryFunction::Max, 0.0);

    let from_dense = MatrixBlock::from(dense.clone()).apply_scalar_operator(&op);
    let from_sparse = MatrixBlock::from(SparseMatrix::from_dense(&dense)).apply_scalar_operator(&op);

    assert!(!from_dense.is_sparse());
    assert!(from_sparse.is_sparse());
    assert_same_values(&from_sparse.to_dense(), &from_dense.to_dense(), "max(X, 0)");
    assert_eq!(from_sparse.nnz(), 4);
}

#[cfg(feature = "parallel_proc")]
#[test]
fn test_parallel_kernels_match_sequential() {
    use scalarops::kernels::scalar::{par_scalar_map_dense, par_scalar_map_sparse};

    let dense = create_test_matrix();
    let sparse = SparseMatrix::from_dense(&dense);
    for f in BinaryFunction::ALL {
        for c in CONSTANTS {
            let op = LeftScalarOperator::new(f, c);
            let context = format!("{c} {f} X");
            assert_same_values(
                &par_scalar_map_dense(&op, &dense),
                &scalar_map_dense(&op, &dense),
                &context,
            );
            assert_same_values(
                &par_scalar_map_sparse(&op, &sparse).to_dense(),
                &scalar_map_sparse(&op, &sparse).to_dense(),
                &context,
            );
        }
    }
}
