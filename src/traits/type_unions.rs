// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use num_traits::{Float as NumFloat, NumCast, ToPrimitive};

/// Trait for float element types the scalar kernels accept.
///
/// Useful when specifying `my_fn::<T: Float>() {}`.
///
/// Operators always evaluate in `f64`; values are widened on the way in
/// and narrowed back through [`Float::from_f64`] on the way out.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: NumFloat + Copy + Default + ToPrimitive + PartialEq + Send + Sync + 'static {
    /// Lossless widening to `f64`.
    #[inline]
    fn to_f64_lossless(self) -> f64 {
        // f32 and f64 both widen without loss
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Narrowing from `f64`. Out-of-range values saturate to `±∞`,
    /// matching an `as` cast.
    #[inline]
    fn from_f64(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(|| {
            if v.is_sign_negative() { Self::neg_infinity() } else { Self::infinity() }
        })
    }
}

impl Float for f32 {}
impl Float for f64 {}
