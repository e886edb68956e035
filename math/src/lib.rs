// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Arithmetic primitives for the FibonacciSq STARK prover.
//!
//! This crate contains the two algebraic layers everything else is built on:
//!
//! * **Field arithmetic** - modular arithmetic over the prime field with modulus
//!   $q = 3 \cdot 2^{30} + 1$, exposed through the [BaseElement] type. All stored values are
//!   kept in canonical reduced form.
//! * **Polynomial arithmetic** - dense univariate polynomials over the base field, represented
//!   as little-endian coefficient vectors. The [polynom] module keeps every result in canonical
//!   form (no trailing zero coefficients, with the zero polynomial represented as `[ZERO]`).

pub mod polynom;
pub mod utils;

mod field;
pub use field::BaseElement;

mod errors;
pub use errors::MathError;
