// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{hash_leaves, Hasher, MerkleTree};
use math::{polynom, BaseElement};

use crate::{channel::ProverChannel, errors::ProverError};

// CONSTRAINT COMPOSITION
// ================================================================================================

/// Combines the constraint polynomials into a single composition polynomial as a random linear
/// combination CP(x) = sum(beta_i * c_i(x)), with the coefficients drawn from the channel in
/// constraint order.
pub fn build_composition_poly<H: Hasher>(
    constraints: &[Vec<BaseElement>],
    channel: &mut ProverChannel<H>,
) -> Vec<BaseElement> {
    let mut result = vec![BaseElement::ZERO];
    for constraint in constraints {
        let beta = channel.draw_field_element();
        result = polynom::add(&result, &polynom::mul_by_scalar(constraint, beta));
    }
    result
}

/// Evaluates the composition polynomial over the evaluation domain, commits to the evaluations
/// with a Merkle tree, and sends the tree root to the channel.
///
/// Sending the root happens before any FRI folding coefficient is drawn, which fixes the
/// composition commitment as the seed of the FRI commit phase.
pub fn evaluate_and_commit<H: Hasher>(
    composition_poly: &[BaseElement],
    domain: &[BaseElement],
    channel: &mut ProverChannel<H>,
) -> Result<(Vec<BaseElement>, MerkleTree<H>), ProverError> {
    let evaluations = polynom::eval_many(composition_poly, domain);
    let tree = MerkleTree::new(hash_leaves::<H>(&evaluations))?;
    channel.send(AsRef::<[u8]>::as_ref(&tree.root()));
    Ok((evaluations, tree))
}
