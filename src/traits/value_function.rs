// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # BinaryValueFunction
//!
//! The function capability wrapped by every scalar operator.
//!
//! A function is stateless and immutable. Beyond `apply`, it answers the
//! zero-point questions the operators use to decide sparse safety:
//! - constant-independent: does `apply(x, 0) == 0` hold for *every* `x`?
//! - constant-dependent: with the constant fixed on the left (or right),
//!   does the implicit zero map to zero?
//!
//! The provided zero-point methods evaluate the function numerically. Closed
//! catalogues should override them with symbolic tables, as
//! [`crate::BinaryFunction`] does, so that boundary behaviour is stated
//! rather than inferred from a single evaluation.

use std::fmt::Debug;
use std::sync::Arc;

/// Stateless two-argument numeric function.
pub trait BinaryValueFunction: Debug + Send + Sync {
    /// Applies the function. Total over all doubles; `NaN` and `±∞`
    /// propagate under IEEE semantics.
    fn apply(&self, a: f64, b: f64) -> f64;

    /// True when `apply(x, 0) == 0` for every `x`, regardless of any
    /// runtime constant.
    #[inline]
    fn is_unconditionally_zero_preserving(&self) -> bool {
        false
    }

    /// Whether `apply(constant, 0) == 0`.
    #[inline]
    fn is_left_zero_point_safe(&self, constant: f64) -> bool {
        self.apply(constant, 0.0) == 0.0
    }

    /// Whether `apply(0, constant) == 0`.
    #[inline]
    fn is_right_zero_point_safe(&self, constant: f64) -> bool {
        self.apply(0.0, constant) == 0.0
    }
}

impl<T: BinaryValueFunction + ?Sized> BinaryValueFunction for &T {
    #[inline]
    fn apply(&self, a: f64, b: f64) -> f64 {
        (**self).apply(a, b)
    }

    #[inline]
    fn is_unconditionally_zero_preserving(&self) -> bool {
        (**self).is_unconditionally_zero_preserving()
    }

    #[inline]
    fn is_left_zero_point_safe(&self, constant: f64) -> bool {
        (**self).is_left_zero_point_safe(constant)
    }

    #[inline]
    fn is_right_zero_point_safe(&self, constant: f64) -> bool {
        (**self).is_right_zero_point_safe(constant)
    }
}

impl<T: BinaryValueFunction + ?Sized> BinaryValueFunction for Arc<T> {
    #[inline]
    fn apply(&self, a: f64, b: f64) -> f64 {
        (**self).apply(a, b)
    }

    #[inline]
    fn is_unconditionally_zero_preserving(&self) -> bool {
        (**self).is_unconditionally_zero_preserving()
    }

    #[inline]
    fn is_left_zero_point_safe(&self, constant: f64) -> bool {
        (**self).is_left_zero_point_safe(constant)
    }

    #[inline]
    fn is_right_zero_point_safe(&self, constant: f64) -> bool {
        (**self).is_right_zero_point_safe(constant)
    }
}
