// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{hash_leaves, MerkleTree, Sha2_256};
use math::{
    polynom,
    utils::{get_power_series, get_power_series_with_offset},
    BaseElement,
};
use serde::{Deserialize, Serialize};

use crate::errors::ProverError;

// CONSTANTS
// ================================================================================================

/// Number of steps in the FibonacciSq trace.
pub const TRACE_LENGTH: usize = 1023;

/// Size of the trace domain; the trace is interpolated over the first 1023 points of an
/// order-1024 multiplicative subgroup.
pub const TRACE_DOMAIN_SIZE: usize = 1024;

/// Index of the trace step carrying the asserted output.
pub const LAST_CONSTRAINED_STEP: usize = 1022;

/// Ratio between the evaluation domain size and the trace domain size.
pub const LDE_BLOWUP_FACTOR: usize = 8;

/// Size of the low-degree extension domain.
pub const LDE_DOMAIN_SIZE: usize = TRACE_DOMAIN_SIZE * LDE_BLOWUP_FACTOR;

/// First element of the reference trace.
const TRACE_INPUT: u64 = 1;

/// Second element of the reference trace.
const TRACE_SECOND_INPUT: u64 = 3141592;

// DOMAIN PARAMETERS
// ================================================================================================

/// Pre-computed parameters of the FibonacciSq statement consumed by the prover: the execution
/// trace, the trace and evaluation domains with their generators, the trace polynomial, its
/// low-degree extension, and the Merkle commitment to the extension.
///
/// The JSON field names match the `domainparams.json` format of the original tooling; field
/// elements are serialized as decimal integers and the commitment root as a hex string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainParameters {
    /// The FibonacciSq execution trace.
    pub trace: Vec<BaseElement>,
    /// Generator of the trace domain subgroup.
    pub generator_g: BaseElement,
    /// The trace domain: successive powers of `generator_g`.
    pub subgroup_g: Vec<BaseElement>,
    /// Generator of the subgroup underlying the evaluation domain.
    pub generator_h: BaseElement,
    /// Successive powers of `generator_h`.
    pub subgroup_h: Vec<BaseElement>,
    /// The evaluation domain: a multiplicative coset of `subgroup_h`.
    pub evaluation_domain: Vec<BaseElement>,
    /// Coefficients of the trace polynomial.
    pub polynomial: Vec<BaseElement>,
    /// Evaluations of the trace polynomial over the evaluation domain.
    pub polynomial_evaluations: Vec<BaseElement>,
    /// Root of the Merkle tree committing to `polynomial_evaluations`.
    #[serde(with = "hex_digest")]
    pub evaluation_root: [u8; 32],
}

impl DomainParameters {
    /// Generates the domain parameters of the reference FibonacciSq-1023 statement.
    pub fn generate() -> Self {
        // FibonacciSq trace: a0 = 1, a1 = 3141592, a[i] = a[i-2]^2 + a[i-1]^2
        let mut trace = Vec::with_capacity(TRACE_LENGTH);
        trace.push(BaseElement::new(TRACE_INPUT));
        trace.push(BaseElement::new(TRACE_SECOND_INPUT));
        for i in 2..TRACE_LENGTH {
            let next = trace[i - 2].square() + trace[i - 1].square();
            trace.push(next);
        }

        // the trace domain is the order-1024 subgroup of the multiplicative group
        let generator_g = BaseElement::get_root_of_unity(10);
        let subgroup_g = get_power_series(generator_g, TRACE_DOMAIN_SIZE);

        // the trace polynomial interpolates the trace over the first 1023 domain points
        let polynomial = polynom::interpolate(&subgroup_g[..TRACE_LENGTH], &trace)
            .expect("trace length matches the interpolation domain");

        // the evaluation domain is a coset of the order-8192 subgroup, shifted by the field
        // generator so that it is disjoint from the trace domain
        let generator_h = BaseElement::get_root_of_unity(13);
        let subgroup_h = get_power_series(generator_h, LDE_DOMAIN_SIZE);
        let evaluation_domain =
            get_power_series_with_offset(generator_h, BaseElement::GENERATOR, LDE_DOMAIN_SIZE);

        let polynomial_evaluations = polynom::eval_many(&polynomial, &evaluation_domain);
        let tree = MerkleTree::<Sha2_256>::new(hash_leaves::<Sha2_256>(&polynomial_evaluations))
            .expect("evaluation domain holds more than one point");

        DomainParameters {
            trace,
            generator_g,
            subgroup_g,
            generator_h,
            subgroup_h,
            evaluation_domain,
            polynomial,
            polynomial_evaluations,
            evaluation_root: tree.root(),
        }
    }

    /// Checks the structural invariants of the parameters: sequence lengths, generator orders,
    /// and consistency between the domains and their generators.
    pub fn validate(&self) -> Result<(), ProverError> {
        if self.trace.len() != TRACE_LENGTH {
            return Err(ProverError::InvalidParameters("unexpected trace length"));
        }
        if self.subgroup_g.len() != TRACE_DOMAIN_SIZE {
            return Err(ProverError::InvalidParameters("unexpected trace domain size"));
        }
        if self.evaluation_domain.len() != LDE_DOMAIN_SIZE
            || self.subgroup_h.len() != LDE_DOMAIN_SIZE
        {
            return Err(ProverError::InvalidParameters("unexpected evaluation domain size"));
        }
        if self.polynomial_evaluations.len() != self.evaluation_domain.len() {
            return Err(ProverError::InvalidParameters(
                "number of evaluations does not match the evaluation domain size",
            ));
        }

        let one = BaseElement::ONE;
        if self.generator_g.exp(TRACE_DOMAIN_SIZE as u64) != one
            || self.generator_g.exp((TRACE_DOMAIN_SIZE / 2) as u64) == one
        {
            return Err(ProverError::InvalidParameters(
                "trace domain generator has unexpected order",
            ));
        }
        if self.generator_h.exp(LDE_DOMAIN_SIZE as u64) != one
            || self.generator_h.exp((LDE_DOMAIN_SIZE / 2) as u64) == one
        {
            return Err(ProverError::InvalidParameters(
                "evaluation domain generator has unexpected order",
            ));
        }

        Ok(())
    }
}

// HEX SERIALIZATION
// ================================================================================================

/// Serde adapter encoding a 32-byte digest as a hex string.
mod hex_digest {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = hex::decode(&encoded).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected a 32-byte hex string"))
    }
}
