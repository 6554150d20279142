// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # scalarops
//!
//! Matrix-scalar operators that bind a binary function to a constant and
//! work out, up front, whether the operation is *sparse-safe*: whether every
//! implicit zero of a sparse matrix maps to zero, so that only stored entries
//! need visiting.
//!
//! ## Layout
//! - [`BinaryValueFunction`] - the two-argument function capability.
//! - [`BinaryFunction`] - the closed catalogue of concrete functions, with
//!   their zero-point tables.
//! - [`ScalarOperator`] - the base operator contract, implemented by
//!   [`LeftScalarOperator`] (`c op x`) and [`RightScalarOperator`] (`x op c`).
//! - `kernels::scalar` - applies an operator over slices, and with the
//!   `matrix` feature, over dense and CSR storage.
//!
//! ## Example
//! ```rust
//! use scalarops::{BinaryFunction, LeftScalarOperator, ScalarOperator};
//!
//! // 3 > X: every implicit zero becomes 1.0, so zeros cannot be skipped.
//! let mut op = LeftScalarOperator::new(BinaryFunction::GreaterThan, 3.0);
//! assert!(!op.is_sparse_safe());
//! assert_eq!(op.apply_scalar(0.0), 1.0);
//!
//! // -1 > X: zeros stay zero.
//! op.set_constant(-1.0);
//! assert!(op.is_sparse_safe());
//! ```

pub mod enums {
    pub mod error;
    pub mod function;
    pub mod side;
}

pub mod structs {
    pub mod operators {
        pub mod left;
        pub mod right;
    }
    #[cfg(feature = "matrix")]
    pub mod matrix;
    #[cfg(feature = "matrix")]
    pub mod sparse_matrix;
    #[cfg(feature = "matrix")]
    pub mod matrix_block;
}

pub mod traits {
    pub mod scalar_operator;
    pub mod type_unions;
    pub mod value_function;
}

pub mod kernels {
    pub mod scalar;
}

pub use enums::error::OperatorError;
pub use enums::function::BinaryFunction;
pub use enums::side::ScalarSide;
pub use structs::operators::left::LeftScalarOperator;
pub use structs::operators::right::RightScalarOperator;
pub use traits::scalar_operator::ScalarOperator;
pub use traits::type_unions::Float;
pub use traits::value_function::BinaryValueFunction;

#[cfg(feature = "matrix")]
pub use structs::matrix::Matrix;
#[cfg(feature = "matrix")]
pub use structs::matrix_block::MatrixBlock;
#[cfg(feature = "matrix")]
pub use structs::sparse_matrix::SparseMatrix;

pub use vec64::Vec64;
