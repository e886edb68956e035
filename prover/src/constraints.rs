// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::{polynom, BaseElement};

use crate::{
    errors::ProverError,
    parameters::{LAST_CONSTRAINED_STEP, TRACE_DOMAIN_SIZE},
};

// CONSTRAINT BUILDER
// ================================================================================================

/// Builds the three constraint polynomials of the FibonacciSq statement from the trace
/// polynomial `f` and the trace domain generator `g`:
///
/// * c0 = (f(x) - input) / (x - 1), binding the first element of the trace,
/// * c1 = (f(x) - output) / (x - g^1022), binding the asserted output,
/// * c2 = (f(g^2 x) - f(g x)^2 - f(x)^2) / Z(x), enforcing the FibonacciSq transition, where
///   Z(x) = (x^1024 - 1) / ((x - g^1021)(x - g^1022)(x - g^1023)) vanishes exactly on the
///   constrained steps of the trace domain.
///
/// Each rational expression must reduce to a polynomial; a non-zero remainder means the trace
/// does not satisfy the corresponding constraint and is reported as an error.
pub fn build_constraints(
    trace_poly: &[BaseElement],
    generator: BaseElement,
    input: BaseElement,
    output: BaseElement,
) -> Result<[Vec<BaseElement>; 3], ProverError> {
    let one = BaseElement::ONE;

    // boundary constraint at the first step
    let numerator = polynom::sub(trace_poly, &[input]);
    let c0 = polynom::div_exact(&numerator, &[-one, one])
        .map_err(|_| ProverError::ConstraintNotDivisible(0))?;

    // boundary constraint at the asserted output
    let x_out = generator.exp(LAST_CONSTRAINED_STEP as u64);
    let numerator = polynom::sub(trace_poly, &[output]);
    let c1 = polynom::div_exact(&numerator, &[-x_out, one])
        .map_err(|_| ProverError::ConstraintNotDivisible(1))?;

    // FibonacciSq transition constraint
    let f_g2x = polynom::compose(trace_poly, &[BaseElement::ZERO, generator.square()]);
    let f_gx = polynom::compose(trace_poly, &[BaseElement::ZERO, generator]);
    let squares =
        polynom::add(&polynom::mul(&f_gx, &f_gx), &polynom::mul(trace_poly, trace_poly));
    let numerator = polynom::sub(&f_g2x, &squares);
    let vanishing = transition_vanishing_poly(generator)?;
    let c2 = polynom::div_exact(&numerator, &vanishing)
        .map_err(|_| ProverError::ConstraintNotDivisible(2))?;

    Ok([c0, c1, c2])
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns the vanishing polynomial of the constrained trace steps:
/// (x^1024 - 1) / ((x - g^1021)(x - g^1022)(x - g^1023)).
///
/// The transition constraint relates steps i, i+1 and i+2, so the last three points of the
/// trace domain are excluded from the vanishing set.
fn transition_vanishing_poly(generator: BaseElement) -> Result<Vec<BaseElement>, ProverError> {
    let one = BaseElement::ONE;

    let mut full_domain = vec![BaseElement::ZERO; TRACE_DOMAIN_SIZE + 1];
    full_domain[0] = -one;
    full_domain[TRACE_DOMAIN_SIZE] = one;

    let mut excluded = vec![one];
    for step in [1021, 1022, 1023] {
        excluded = polynom::mul(&excluded, &[-generator.exp(step), one]);
    }

    // exact by construction whenever g generates the trace domain
    polynom::div_exact(&full_domain, &excluded).map_err(|_| ProverError::InvalidTraceGenerator)
}

// TESTS
// ================================================================================================
