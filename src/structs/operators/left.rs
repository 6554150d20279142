// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt::{Display, Formatter};

use log::trace;

use crate::enums::function::BinaryFunction;
use crate::enums::side::ScalarSide;
use crate::traits::scalar_operator::{ScalarOperator, infer_sparse_safe};
use crate::traits::value_function::BinaryValueFunction;

/// Scalar operator with the constant on the left-hand side.
///
/// Computes `fn.apply(constant, x)` for each matrix value `x`, i.e. the
/// case where a literal precedes the operator in the expression, `5 > X`.
///
/// ### Sparse safety
/// Safe iff the function is unconditionally zero-preserving, or
/// `fn.apply(constant, 0) == 0`. For the orderings that reduces to:
///
/// | Function          | safe when   |
/// |-------------------|-------------|
/// | GreaterThan       | `c <= 0`    |
/// | GreaterThanEquals | `c < 0`     |
/// | LessThan          | `c >= 0`    |
/// | LessThanEquals    | `c > 0`     |
///
/// ### Example
/// ```rust
/// use scalarops::{BinaryFunction, LeftScalarOperator, ScalarOperator};
///
/// let op = LeftScalarOperator::new(BinaryFunction::LessThanEquals, 0.0);
/// assert!(!op.is_sparse_safe());
/// assert_eq!(op.apply_scalar(5.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftScalarOperator<F = BinaryFunction> {
    function: F,
    constant: f64,
    sparse_safe: bool,
}

impl<F: BinaryValueFunction> LeftScalarOperator<F> {
    /// Binds `function` to `constant` and infers sparse safety.
    pub fn new(function: F, constant: f64) -> Self {
        let sparse_safe = infer_sparse_safe(&function, constant, ScalarSide::Left);
        Self { function, constant, sparse_safe }
    }
}

impl<F: BinaryValueFunction> ScalarOperator for LeftScalarOperator<F> {
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
        ScalarSide::Left
    }

    fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
        self.sparse_safe = infer_sparse_safe(&self.function, constant, ScalarSide::Left);
        trace!(
            "left scalar operator {:?} reconfigured: constant={}, sparse_safe={}",
            self.function, constant, self.sparse_safe
        );
    }

    #[inline]
    fn is_sparse_safe(&self) -> bool {
        self.sparse_safe
    }

    #[inline]
    fn apply_scalar(&self, value: f64) -> f64 {
        self.function.apply(self.constant, value)
    }
}

impl<F: BinaryValueFunction + Display> Display for LeftScalarOperator<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} X", self.constant, self.function)
    }
}
