// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains a zero-knowledge STARK prover for the FibonacciSq statement: the claim
//! that the 1023rd element of a FibonacciSq sequence equals a known constant.
//!
//! The prover consumes pre-computed [DomainParameters] (the execution trace, the trace
//! polynomial, its low-degree extension, and the commitment to the extension) and produces a
//! [StarkProof]: the ordered log of a Fiat-Shamir transcript over which the prover has
//!
//! 1. absorbed the commitment to the trace low-degree extension,
//! 2. reduced the statement to three constraint polynomials,
//! 3. combined the constraints into a single composition polynomial using random coefficients
//!    drawn from the transcript, evaluated it over the evaluation domain, and committed to the
//!    evaluations,
//! 4. run the commit phase of the FRI protocol on the composition polynomial,
//! 5. answered pseudo-random queries by decommitting trace and FRI layer evaluations together
//!    with their Merkle authentication paths.
//!
//! Every verifier challenge is derived from the rolling transcript state, so proving is fully
//! deterministic: identical inputs produce bit-identical proofs.
//!
//! When the crate is compiled with the `concurrent` feature enabled, evaluation of polynomials
//! over the evaluation domain is performed in multiple threads. The sequence of transcript
//! events is unaffected by the feature.

use crypto::{hash_leaves, MerkleTree, Sha2_256};
use tracing::{event, info_span, Level};

mod channel;
pub use channel::ProverChannel;

mod composer;
use composer::{build_composition_poly, evaluate_and_commit};

mod constraints;
pub use constraints::build_constraints;

mod errors;
pub use errors::ProverError;

mod options;
pub use options::ProofOptions;

mod parameters;
pub use parameters::{
    DomainParameters, LAST_CONSTRAINED_STEP, LDE_BLOWUP_FACTOR, LDE_DOMAIN_SIZE,
    TRACE_DOMAIN_SIZE, TRACE_LENGTH,
};

mod proof;
pub use proof::StarkProof;

use fri::FriProver;


// PROVER
// ================================================================================================

/// Generates a proof that the trace committed to by the domain parameters satisfies the
/// FibonacciSq statement.
///
/// # Errors
/// Returns an error if:
/// * The domain parameters fail structural validation.
/// * The commitment root in the parameters does not match the provided evaluations.
/// * The trace does not satisfy one of the statement constraints.
pub fn prove(
    params: &DomainParameters,
    options: &ProofOptions,
) -> Result<StarkProof, ProverError> {
    params.validate()?;

    let mut channel = ProverChannel::<Sha2_256>::new();

    // 1 ----- commit to the low-degree extension of the trace ------------------------------------
    let trace_tree = info_span!("commit_to_trace_lde").in_scope(|| {
        MerkleTree::<Sha2_256>::new(hash_leaves::<Sha2_256>(&params.polynomial_evaluations))
    })?;
    if trace_tree.root() != params.evaluation_root {
        return Err(ProverError::CommitmentMismatch);
    }
    channel.send(&params.evaluation_root);

    // 2 ----- reduce the statement to constraint polynomials -------------------------------------
    let constraints = info_span!("build_constraints").in_scope(|| {
        build_constraints(
            &params.polynomial,
            params.generator_g,
            params.trace[0],
            params.trace[LAST_CONSTRAINED_STEP],
        )
    })?;

    // 3 ----- build and commit to the composition polynomial -------------------------------------
    let span = info_span!("build_composition_poly").entered();
    let composition_poly = build_composition_poly(&constraints, &mut channel);
    event!(Level::DEBUG, "degree: {}", math::polynom::degree_of(&composition_poly));
    drop(span);

    let (evaluations, composition_tree) =
        info_span!("evaluate_composition_poly").in_scope(|| {
            evaluate_and_commit(&composition_poly, &params.evaluation_domain, &mut channel)
        })?;

    // 4 ----- execute the FRI commit phase -------------------------------------------------------
    let mut fri_prover = FriProver::new();
    info_span!("compute_fri_layers").in_scope(|| {
        fri_prover.build_layers(
            &mut channel,
            composition_poly,
            params.evaluation_domain.clone(),
            evaluations,
            composition_tree,
        )
    })?;
    event!(Level::DEBUG, "fri_layers: {}", fri_prover.num_layers());

    // 5 ----- answer verifier queries ------------------------------------------------------------
    let span = info_span!("decommit_queries", num_queries = options.num_queries()).entered();
    // sibling and transition openings on the first layer reach up to idx + 16, so query
    // positions are drawn from [0, |D0| - 16)
    let position_bound = params.evaluation_domain.len() - 2 * LDE_BLOWUP_FACTOR;
    for _ in 0..options.num_queries() {
        let position = channel.draw_integer(0, position_bound as u64 - 1) as usize;

        // open the trace evaluations needed to check composition-vs-trace consistency: the
        // queried point and its images under one and two trace steps
        for offset in [0, LDE_BLOWUP_FACTOR, 2 * LDE_BLOWUP_FACTOR] {
            let index = position + offset;
            channel.send_field_element(params.polynomial_evaluations[index]);
            channel.send_path(&trace_tree.prove(index));
        }

        fri_prover.open_query(&mut channel, position);
    }
    drop(span);

    Ok(StarkProof::new(channel.into_proof()))
}
