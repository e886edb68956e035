// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Degree-respecting projection for FRI layers.
//!
//! Folding reduces the degree of a polynomial by a factor of two at each step. For a polynomial
//! p(x) = p_even(x^2) + x * p_odd(x^2), the folded polynomial under a random coefficient beta is
//! p'(y) = p_even(y) + beta * p_odd(y), and its evaluation domain consists of the squares of the
//! first half of the previous domain.

use math::{polynom, BaseElement};


/// Folds a polynomial in coefficient form: splits `poly` into its even-index and odd-index
/// coefficients, scales the odd part by `beta`, and sums the two halves.
pub fn fold_poly(poly: &[BaseElement], beta: BaseElement) -> Vec<BaseElement> {
    let even: Vec<BaseElement> = poly.iter().copied().step_by(2).collect();
    let odd: Vec<BaseElement> = poly.iter().copied().skip(1).step_by(2).collect();
    polynom::add(&even, &polynom::mul_by_scalar(&odd, beta))
}

/// Folds an evaluation domain: squares every element of the first half of `domain`.
///
/// For a domain formed by a coset of a 2-power multiplicative subgroup, the second half of the
/// domain consists of the negations of the first half, so squaring the first half yields the
/// full evaluation domain of the folded polynomial.
pub fn fold_domain(domain: &[BaseElement]) -> Vec<BaseElement> {
    domain[..domain.len() / 2].iter().map(|&x| x.square()).collect()
}
