// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Dense univariate polynomial arithmetic over the base field.
//!
//! A polynomial is a vector of coefficients in little-endian order: index `i` holds the
//! coefficient of `x^i`. Every function in this module returns results in canonical form:
//! trailing zero coefficients are removed, and the zero polynomial is represented by a single
//! zero coefficient.

use crate::{errors::MathError, field::BaseElement, utils as crate_utils};

#[cfg(feature = "concurrent")]
use rayon::prelude::*;


// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x` using Horner's method.
pub fn eval(p: &[BaseElement], x: BaseElement) -> BaseElement {
    p.iter().rev().fold(BaseElement::ZERO, |acc, &coeff| acc * x + coeff)
}

/// Evaluates polynomial `p` at all coordinates in the `xs` slice.
///
/// When the `concurrent` feature is enabled, the evaluations are computed in multiple threads.
pub fn eval_many(p: &[BaseElement], xs: &[BaseElement]) -> Vec<BaseElement> {
    #[cfg(not(feature = "concurrent"))]
    let result = xs.iter().map(|&x| eval(p, x)).collect();

    #[cfg(feature = "concurrent")]
    let result = xs.par_iter().map(|&x| eval(p, x)).collect();

    result
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Uses Lagrange interpolation to build a polynomial from X and Y coordinates.
///
/// # Errors
/// Returns an error if the lengths of `xs` and `ys` differ.
pub fn interpolate(
    xs: &[BaseElement],
    ys: &[BaseElement],
) -> Result<Vec<BaseElement>, MathError> {
    if xs.len() != ys.len() {
        return Err(MathError::DomainMismatch(xs.len(), ys.len()));
    }

    let roots = get_zero_roots(xs);
    let mut divisor = [BaseElement::ZERO, BaseElement::ONE];
    let mut numerators: Vec<Vec<BaseElement>> = Vec::with_capacity(xs.len());
    for xcoord in xs {
        divisor[0] = -*xcoord;
        let (quot, _) = div_rem(&roots, &divisor)?;
        numerators.push(quot);
    }

    let mut denominators: Vec<BaseElement> = Vec::with_capacity(xs.len());
    for i in 0..xs.len() {
        denominators.push(eval(&numerators[i], xs[i]));
    }
    let denominators = crate_utils::batch_inversion(&denominators);

    let mut result = vec![BaseElement::ZERO; xs.len()];
    for i in 0..xs.len() {
        let y_slice = ys[i] * denominators[i];
        if ys[i] != BaseElement::ZERO {
            for (j, res) in result.iter_mut().enumerate() {
                if j < numerators[i].len() && numerators[i][j] != BaseElement::ZERO {
                    *res += numerators[i][j] * y_slice;
                }
            }
        }
    }

    Ok(remove_leading_zeros(&result))
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Adds polynomial `a` to polynomial `b`.
pub fn add(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { BaseElement::ZERO };
        let c2 = if i < b.len() { b[i] } else { BaseElement::ZERO };
        result.push(c1 + c2);
    }
    remove_leading_zeros(&result)
}

/// Subtracts polynomial `b` from polynomial `a`.
pub fn sub(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { BaseElement::ZERO };
        let c2 = if i < b.len() { b[i] } else { BaseElement::ZERO };
        result.push(c1 - c2);
    }
    remove_leading_zeros(&result)
}

/// Multiplies polynomial `a` by polynomial `b` using schoolbook multiplication.
pub fn mul(a: &[BaseElement], b: &[BaseElement]) -> Vec<BaseElement> {
    if is_zero(a) || is_zero(b) {
        return vec![BaseElement::ZERO];
    }

    let result_len = a.len() + b.len() - 1;
    let mut result = vec![BaseElement::ZERO; result_len];
    for i in 0..a.len() {
        for j in 0..b.len() {
            result[i + j] += a[i] * b[j];
        }
    }
    remove_leading_zeros(&result)
}

/// Multiplies every coefficient of polynomial `p` by constant `k`.
pub fn mul_by_scalar(p: &[BaseElement], k: BaseElement) -> Vec<BaseElement> {
    let result = p.iter().map(|&coeff| coeff * k).collect::<Vec<_>>();
    remove_leading_zeros(&result)
}

/// Divides polynomial `a` by polynomial `b` using long division; returns the quotient and the
/// remainder. The degree of the remainder is always smaller than the degree of `b`.
///
/// # Errors
/// Returns an error if `b` is the zero polynomial.
pub fn div_rem(
    a: &[BaseElement],
    b: &[BaseElement],
) -> Result<(Vec<BaseElement>, Vec<BaseElement>), MathError> {
    if is_zero(b) {
        return Err(MathError::NotInvertible);
    }

    let apos = degree_of(a);
    let bpos = degree_of(b);
    if is_zero(a) || apos < bpos {
        return Ok((vec![BaseElement::ZERO], remove_leading_zeros(a)));
    }

    let mut rem = a[..=apos].to_vec();
    let mut quot = vec![BaseElement::ZERO; apos - bpos + 1];
    let lead_inv = b[bpos].inv();
    for i in (0..quot.len()).rev() {
        let coeff = rem[i + bpos] * lead_inv;
        if coeff != BaseElement::ZERO {
            quot[i] = coeff;
            for j in 0..=bpos {
                rem[i + j] -= b[j] * coeff;
            }
        }
    }

    Ok((remove_leading_zeros(&quot), remove_leading_zeros(&rem)))
}

/// Divides polynomial `a` by polynomial `b` and returns the quotient.
///
/// # Errors
/// Returns an error if `b` is the zero polynomial, or if the division leaves a non-zero
/// remainder.
pub fn div_exact(a: &[BaseElement], b: &[BaseElement]) -> Result<Vec<BaseElement>, MathError> {
    let (quot, rem) = div_rem(a, b)?;
    if !is_zero(&rem) {
        return Err(MathError::NotDivisible);
    }
    Ok(quot)
}

/// Composes polynomial `p` with polynomial `q`, computing p(q(x)).
pub fn compose(p: &[BaseElement], q: &[BaseElement]) -> Vec<BaseElement> {
    // Horner's method lifted to polynomial coefficients
    p.iter().rev().fold(vec![BaseElement::ZERO], |acc, &coeff| {
        add(&mul(&acc, q), &[coeff])
    })
}

/// Returns a polynomial whose coefficient at index `i` is the coefficient of `p` at index
/// `i + shift`; used to discard known-zero low-order coefficients.
pub fn shifted(p: &[BaseElement], shift: usize) -> Vec<BaseElement> {
    if shift >= p.len() {
        return vec![BaseElement::ZERO];
    }
    remove_leading_zeros(&p[shift..])
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns the degree of the polynomial `poly`; the zero polynomial has degree 0.
pub fn degree_of(poly: &[BaseElement]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != BaseElement::ZERO {
            return i;
        }
    }
    0
}

/// Returns true if `poly` has no non-zero coefficients.
pub fn is_zero(poly: &[BaseElement]) -> bool {
    poly.iter().all(|&coeff| coeff == BaseElement::ZERO)
}

/// Returns a copy of `poly` with all trailing zero coefficients removed; the zero polynomial is
/// represented by a single zero coefficient.
pub fn remove_leading_zeros(poly: &[BaseElement]) -> Vec<BaseElement> {
    if is_zero(poly) {
        return vec![BaseElement::ZERO];
    }
    poly[..=degree_of(poly)].to_vec()
}

// HELPER FUNCTIONS
// ================================================================================================

fn get_zero_roots(xs: &[BaseElement]) -> Vec<BaseElement> {
    let mut n = xs.len() + 1;
    let mut result = vec![BaseElement::ZERO; n];

    n -= 1;
    result[n] = BaseElement::ONE;

    for i in 0..xs.len() {
        n -= 1;
        result[n] = BaseElement::ZERO;
        #[allow(clippy::assign_op_pattern)]
        for j in n..xs.len() {
            result[j] = result[j] - result[j + 1] * xs[i];
        }
    }

    result
}
