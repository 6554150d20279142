// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::fmt;

/// Which operand position the constant takes in a matrix-scalar operation.
///
/// `Left` is `c op X` (the literal appeared left of the operator in the
/// source expression, e.g. `5 > X`), `Right` is `X op c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSide {
    Left,
    Right,
}

impl fmt::Display for ScalarSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarSide::Left => write!(f, "left"),
            ScalarSide::Right => write!(f, "right"),
        }
    }
}
