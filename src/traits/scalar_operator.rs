// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ScalarOperator
//!
//! Base contract for matrix-scalar operators.
//!
//! An operator binds a [`BinaryValueFunction`] to a constant and carries a
//! derived *sparse-safe* flag: whether every implicit zero of a sparse
//! matrix maps to zero under the operation. Storage kernels read that flag
//! to decide between visiting stored entries only, or every logical entry.
//!
//! ### Lifecycle
//! Operators are plain values. Configuration (`new`, `set_constant`,
//! `with_constant`) needs ownership or `&mut`, while execution
//! (`apply_scalar`, `is_sparse_safe`) only needs `&self`. An operator that
//! has been handed to worker threads by reference therefore cannot be
//! reconfigured until every worker is done with it.
//!
//! ### Sparse safety
//! The flag is recomputed from scratch on every constant change:
//!
//! `sparse_safe = fn.is_unconditionally_zero_preserving() || zero_point_safe(side, constant)`
//!
//! so it is always a function of the *current* constant, never of the
//! constants the operator held before.

use crate::enums::side::ScalarSide;
use crate::traits::value_function::BinaryValueFunction;

/// Matrix-scalar operator with a function, a constant and a sparse-safe flag.
pub trait ScalarOperator: Send + Sync {
    /// The bound function.
    type Function: BinaryValueFunction;

    /// Returns the bound function.
    fn function(&self) -> &Self::Function;

    /// Returns the current constant.
    fn constant(&self) -> f64;

    /// Which operand position the constant occupies.
    fn side(&self) -> ScalarSide;

    /// Overwrites the constant and recomputes the sparse-safe flag.
    ///
    /// Accepts any double, including `NaN` and `±∞`.
    fn set_constant(&mut self, constant: f64);

    /// Whether implicit zeros may be skipped for the current constant.
    fn is_sparse_safe(&self) -> bool;

    /// Applies the operation to one matrix value.
    fn apply_scalar(&self, value: f64) -> f64;

    /// The constant-independent half of sparse safety.
    #[inline]
    fn is_sparse_safe_static(&self) -> bool {
        self.function().is_unconditionally_zero_preserving()
    }

    /// What every implicit zero maps to under this operator.
    ///
    /// When the operator is not sparse-safe, this is the fill value a
    /// kernel writes into the positions a sparse input never stored.
    #[inline]
    fn zero_image(&self) -> f64 {
        self.apply_scalar(0.0)
    }

    /// Consuming form of [`ScalarOperator::set_constant`], for configuring
    /// an operator fully before publishing it.
    #[inline]
    fn with_constant(mut self, constant: f64) -> Self
    where
        Self: Sized,
    {
        self.set_constant(constant);
        self
    }
}

/// Sparse-safety of `function` with `constant` bound on `side`.
///
/// Shared by both operator variants so the rule lives in one place.
#[inline]
pub(crate) fn infer_sparse_safe<F: BinaryValueFunction>(
    function: &F,
    constant: f64,
    side: ScalarSide,
) -> bool {
    function.is_unconditionally_zero_preserving()
        || match side {
            ScalarSide::Left => function.is_left_zero_point_safe(constant),
            ScalarSide::Right => function.is_right_zero_point_safe(constant),
        }
}
