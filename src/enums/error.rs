// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *scalarops* Error Type
//!
//! Defines the unified error type for the crate.
//!
//! Operators themselves never fail: every double, including `NaN` and
//! `±∞`, is passed through to the bound function. Errors only arise on the
//! surfaces around them, i.e., parsing function opcodes and building
//! matrix storage from caller-supplied parts.

use std::error::Error;
use std::fmt;

/// Catch all error type for `scalarops`
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorError {
    UnknownFunction {
        opcode: String,
    },
    ShapeMismatch {
        nrows: usize,
        ncols: usize,
        found: usize,
    },
    InvalidSparseStructure {
        message: String,
    },
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorError::UnknownFunction { opcode } => {
                write!(f, "Unknown function: opcode '{}' does not name a binary function.", opcode)
            }
            OperatorError::ShapeMismatch { nrows, ncols, found } => {
                write!(
                    f,
                    "Shape mismatch: {} × {} requires {} values, found {}.",
                    nrows,
                    ncols,
                    nrows * ncols,
                    found
                )
            }
            OperatorError::InvalidSparseStructure { message } => {
                write!(f, "Invalid sparse structure: {}", message)
            }
            OperatorError::IndexOutOfBounds { row, col, nrows, ncols } => {
                write!(
                    f,
                    "Index out of bounds: ({}, {}) is outside a {} × {} matrix.",
                    row, col, nrows, ncols
                )
            }
        }
    }
}

impl Error for OperatorError {}
