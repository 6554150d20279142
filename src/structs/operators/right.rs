// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt::{Display, Formatter};

use log::trace;

use crate::enums::function::BinaryFunction;
use crate::enums::side::ScalarSide;
use crate::traits::scalar_operator::{ScalarOperator, infer_sparse_safe};
use crate::traits::value_function::BinaryValueFunction;

/// Scalar operator with the constant on the right-hand side.
///
/// Computes `fn.apply(x, constant)` for each matrix value `x`, e.g. `X > 5`.
/// Sparse-safe iff the function is unconditionally zero-preserving, or
/// `fn.apply(0, constant) == 0`; see [`BinaryFunction`] for the full table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightScalarOperator<F = BinaryFunction> {
    function: F,
    constant: f64,
    sparse_safe: bool,
}

impl<F: BinaryValueFunction> RightScalarOperator<F> {
    /// Binds `function` to `constant` and infers sparse safety.
    pub fn new(function: F, constant: f64) -> Self {
        let sparse_safe = infer_sparse_safe(&function, constant, ScalarSide::Right);
        Self { function, constant, sparse_safe }
    }
}

impl<F: BinaryValueFunction> ScalarOperator for RightScalarOperator<F> {
    type Function = F;

    #[inline]
    fn function(&self) -> &F {
        &self.function
    }

    #[inline]
    fn constant(&self) -> f64 {
        self.constant
    }

    #[inline]
    fn side(&self) -> ScalarSide {
        ScalarSide::Right
    }

    fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
        self.sparse_safe = infer_sparse_safe(&self.function, constant, ScalarSide::Right);
        trace!(
            "right scalar operator {:?} reconfigured: constant={}, sparse_safe={}",
            self.function, constant, self.sparse_safe
        );
    }

    #[inline]
    fn is_sparse_safe(&self) -> bool {
        self.sparse_safe
    }

    #[inline]
    fn apply_scalar(&self, value: f64) -> f64 {
        self.function.apply(value, self.constant)
    }
}

impl<F: BinaryValueFunction + Display> Display for RightScalarOperator<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} {}", self.function, self.constant)
    }
}
