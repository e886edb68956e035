// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// MATH ERROR
// ================================================================================================

/// Represents an error returned by the polynomial arithmetic in this crate.
#[derive(Debug, PartialEq, Eq)]
pub enum MathError {
    /// Division by the zero polynomial (or inversion of zero).
    NotInvertible,
    /// An exact polynomial division left a non-zero remainder.
    NotDivisible,
    /// Number of X coordinates {0} does not match number of Y coordinates {1}
    DomainMismatch(usize, usize),
}

impl fmt::Display for MathError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInvertible => {
                write!(f, "cannot divide by zero")
            }
            Self::NotDivisible => {
                write!(f, "exact polynomial division left a non-zero remainder")
            }
            Self::DomainMismatch(num_xs, num_ys) => {
                write!(f, "number of X coordinates {} does not match number of Y coordinates {}", num_xs, num_ys)
            }
        }
    }
}

impl core::error::Error for MathError {}
