// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Binary Function Catalogue
//!
//! The closed set of binary functions a scalar operator can bind, together
//! with their zero-point tables.
//!
//! Comparison and logical functions return `1.0` for true and `0.0` for
//! false. Logical operands are true when non-zero, so `NaN` is true.
//!
//! ## Zero-point tables
//! For each function the tables answer "is `apply(c, 0) == 0`" (left) and
//! "is `apply(0, c) == 0`" (right) as a closed-form test on the constant.
//! The ordering rows are the exact policy; a `NaN` constant fails every
//! ordering test, so `NaN` constants are treated as unsafe there.
//!
//! | Function          | left safe when      | right safe when      |
//! |-------------------|---------------------|----------------------|
//! | GreaterThan       | `c <= 0`            | `c >= 0`             |
//! | GreaterThanEquals | `c < 0`             | `c > 0`              |
//! | LessThan          | `c >= 0`            | `c <= 0`             |
//! | LessThanEquals    | `c > 0`             | `c < 0`              |
//! | Equal             | `c != 0`            | `c != 0`             |
//! | NotEqual          | `c == 0`            | `c == 0`             |
//! | Plus, Minus       | `c == 0`            | `c == 0`             |
//! | Multiply, And     | always              | always               |
//! | Divide            | never               | `c != 0`, not NaN    |
//! | Modulus           | never               | `c` finite, `!= 0`   |
//! | Power             | never               | `c > 0`              |
//! | Min               | `c >= 0`            | `c >= 0`             |
//! | Max               | `c <= 0`            | `c <= 0`             |
//! | Or, Xor           | `c == 0`            | `c == 0`             |
//!
//! Multiply is treated as zero-preserving for every constant, but
//! `±∞ · 0` and `NaN · 0` are NaN. With a non-finite constant a stored-only
//! kernel leaves implicit zeros at `0`, where dense evaluation gives NaN.
//!
//! Adding a variant means adding a row here: derive it by substituting the
//! implicit zero into `apply` symbolically, and cover it in the tests below.

use std::fmt;
use std::str::FromStr;

use crate::enums::error::OperatorError;
use crate::traits::value_function::BinaryValueFunction;

/// Concrete binary function, identified by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryFunction {
    GreaterThan,
    GreaterThanEquals,
    LessThan,
    LessThanEquals,
    Equal,
    NotEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
    Min,
    Max,
    And,
    Or,
    Xor,
}

impl BinaryFunction {
    /// Every variant, in declaration order.
    pub const ALL: [BinaryFunction; 17] = [
        BinaryFunction::GreaterThan,
        BinaryFunction::GreaterThanEquals,
        BinaryFunction::LessThan,
        BinaryFunction::LessThanEquals,
        BinaryFunction::Equal,
        BinaryFunction::NotEqual,
        BinaryFunction::Plus,
        BinaryFunction::Minus,
        BinaryFunction::Multiply,
        BinaryFunction::Divide,
        BinaryFunction::Modulus,
        BinaryFunction::Power,
        BinaryFunction::Min,
        BinaryFunction::Max,
        BinaryFunction::And,
        BinaryFunction::Or,
        BinaryFunction::Xor,
    ];

    /// The four ordering predicates.
    pub const ORDERINGS: [BinaryFunction; 4] = [
        BinaryFunction::GreaterThan,
        BinaryFunction::GreaterThanEquals,
        BinaryFunction::LessThan,
        BinaryFunction::LessThanEquals,
    ];

    /// Expression-level opcode, e.g. `">="` or `"min"`.
    pub fn opcode(&self) -> &'static str {
        use BinaryFunction::*;
        match self {
            GreaterThan => ">",
            GreaterThanEquals => ">=",
            LessThan => "<",
            LessThanEquals => "<=",
            Equal => "==",
            NotEqual => "!=",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Modulus => "%%",
            Power => "^",
            Min => "min",
            Max => "max",
            And => "&",
            Or => "|",
            Xor => "xor",
        }
    }
}

#[inline(always)]
fn indicator(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[inline(always)]
fn truthy(v: f64) -> bool {
    v != 0.0
}

impl BinaryValueFunction for BinaryFunction {
    #[inline]
    fn apply(&self, a: f64, b: f64) -> f64 {
        use BinaryFunction::*;
        match self {
            GreaterThan => indicator(a > b),
            GreaterThanEquals => indicator(a >= b),
            LessThan => indicator(a < b),
            LessThanEquals => indicator(a <= b),
            Equal => indicator(a == b),
            NotEqual => indicator(a != b),
            Plus => a + b,
            Minus => a - b,
            Multiply => a * b,
            Divide => a / b,
            // Floored modulus: the result takes the sign of the divisor.
            Modulus => a - (a / b).floor() * b,
            Power => a.powf(b),
            Min => a.min(b),
            Max => a.max(b),
            And => indicator(truthy(a) && truthy(b)),
            Or => indicator(truthy(a) || truthy(b)),
            Xor => indicator(truthy(a) != truthy(b)),
        }
    }

    #[inline]
    fn is_unconditionally_zero_preserving(&self) -> bool {
        matches!(self, BinaryFunction::Multiply | BinaryFunction::And)
    }

    fn is_left_zero_point_safe(&self, c: f64) -> bool {
        use BinaryFunction::*;
        match self {
            GreaterThan => c <= 0.0,
            GreaterThanEquals => c < 0.0,
            LessThan => c >= 0.0,
            LessThanEquals => c > 0.0,
            Equal => c != 0.0,
            NotEqual => c == 0.0,
            Plus | Minus => c == 0.0,
            Multiply | And => true,
            // c / 0, c mod 0 and c ^ 0 are never zero
            Divide | Modulus | Power => false,
            Min => c >= 0.0,
            Max => c <= 0.0,
            Or | Xor => c == 0.0,
        }
    }

    fn is_right_zero_point_safe(&self, c: f64) -> bool {
        use BinaryFunction::*;
        match self {
            GreaterThan => c >= 0.0,
            GreaterThanEquals => c > 0.0,
            LessThan => c <= 0.0,
            LessThanEquals => c < 0.0,
            Equal => c != 0.0,
            NotEqual => c == 0.0,
            Plus | Minus => c == 0.0,
            Multiply | And => true,
            Divide => c != 0.0 && !c.is_nan(),
            Modulus => c != 0.0 && c.is_finite(),
            Power => c > 0.0,
            Min => c >= 0.0,
            Max => c <= 0.0,
            Or | Xor => c == 0.0,
        }
    }
}

impl fmt::Display for BinaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode())
    }
}

impl FromStr for BinaryFunction {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryFunction::ALL
            .iter()
            .copied()
            .find(|f| f.opcode() == s)
            .ok_or_else(|| OperatorError::UnknownFunction { opcode: s.to_string() })
    }
}
