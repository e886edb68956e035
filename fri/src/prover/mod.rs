// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{hash_leaves, Hasher, MerkleTree, MerkleTreeError};
use math::{polynom, BaseElement};

use crate::folding::{fold_domain, fold_poly};

mod channel;
pub use channel::ProverChannel;

#[cfg(test)]
mod tests;

// TYPES AND INTERFACES
// ================================================================================================

/// Executes the commit and query phases of the FRI protocol.
///
/// The commit phase repeatedly applies a degree-respecting projection to a polynomial until its
/// degree is reduced to zero, committing to the evaluations of every intermediate layer with a
/// Merkle tree and drawing the folding coefficient for the next layer from the channel. All
/// layers are retained so that the query phase can later open any committed evaluation.
pub struct FriProver<C: ProverChannel> {
    layers: Vec<FriLayer<C::Hasher>>,
}

/// A single FRI layer: a polynomial, its evaluation domain, the evaluations of the polynomial
/// over the domain, and a Merkle tree committing to those evaluations.
pub struct FriLayer<H: Hasher> {
    polynomial: Vec<BaseElement>,
    domain: Vec<BaseElement>,
    evaluations: Vec<BaseElement>,
    tree: MerkleTree<H>,
}

impl<H: Hasher> FriLayer<H> {
    /// Returns the polynomial of this layer in coefficient form.
    pub fn polynomial(&self) -> &[BaseElement] {
        &self.polynomial
    }

    /// Returns the evaluation domain of this layer.
    pub fn domain(&self) -> &[BaseElement] {
        &self.domain
    }

    /// Returns the evaluations of the layer polynomial over the layer domain.
    pub fn evaluations(&self) -> &[BaseElement] {
        &self.evaluations
    }

    /// Returns the root of the Merkle tree committing to the layer evaluations.
    pub fn root(&self) -> H::Digest {
        self.tree.root()
    }
}

// PROVER IMPLEMENTATION
// ================================================================================================

impl<C: ProverChannel> FriProver<C> {
    pub fn new() -> Self {
        FriProver { layers: Vec::new() }
    }

    // COMMIT PHASE
    // --------------------------------------------------------------------------------------------
    /// Executes the commit phase of the FRI protocol.
    ///
    /// Starting from the provided polynomial, its evaluation domain, evaluations, and the Merkle
    /// tree committing to them (whose root the caller must already have sent to the channel),
    /// the prover repeatedly folds the polynomial until its degree reaches zero. For every
    /// folded layer the prover halves the domain, evaluates the folded polynomial, commits to
    /// the evaluations, and sends the commitment to the channel. Folding coefficients are drawn
    /// from the channel after the preceding layer's commitment has been sent.
    ///
    /// # Errors
    /// Returns an error if a layer commitment tree cannot be constructed.
    ///
    /// # Panics
    /// Panics if:
    /// * A prior commit phase has not been completed with [Self::reset].
    /// * The number of evaluations does not match the domain size.
    pub fn build_layers(
        &mut self,
        channel: &mut C,
        mut polynomial: Vec<BaseElement>,
        mut domain: Vec<BaseElement>,
        mut evaluations: Vec<BaseElement>,
        mut tree: MerkleTree<C::Hasher>,
    ) -> Result<(), MerkleTreeError> {
        assert!(self.layers.is_empty(), "a prior commit phase has not been completed yet");
        assert_eq!(
            evaluations.len(),
            domain.len(),
            "number of evaluations must match the domain size"
        );

        while polynom::degree_of(&polynomial) > 0 {
            // draw a folding coefficient; the commitment to the current layer has already been
            // absorbed by the channel, either by the caller (first layer) or below
            let beta = channel.draw_fri_alpha();

            let next_polynomial = fold_poly(&polynomial, beta);
            let next_domain = fold_domain(&domain);
            let next_evaluations = polynom::eval_many(&next_polynomial, &next_domain);

            let next_tree = MerkleTree::new(hash_leaves::<C::Hasher>(&next_evaluations))?;
            channel.commit_fri_layer(next_tree.root());

            self.layers.push(FriLayer { polynomial, domain, evaluations, tree });
            polynomial = next_polynomial;
            domain = next_domain;
            evaluations = next_evaluations;
            tree = next_tree;
        }

        // the terminal layer must evaluate to its constant term everywhere
        let constant = polynomial[0];
        assert!(
            evaluations.iter().all(|&e| e == constant),
            "terminal FRI layer evaluations are not constant"
        );
        self.layers.push(FriLayer { polynomial, domain, evaluations, tree });

        Ok(())
    }

    // QUERY PHASE
    // --------------------------------------------------------------------------------------------
    /// Opens the committed evaluations relevant to a single query at the specified position of
    /// the first layer's domain.
    ///
    /// For every layer except the terminal one, sends the evaluation at the queried position and
    /// the evaluation at the folding sibling position (offset by half the domain), each followed
    /// by its Merkle authentication path. For the terminal layer, sends its constant value.
    ///
    /// # Panics
    /// Panics if layers have not been built yet.
    pub fn open_query(&self, channel: &mut C, position: usize) {
        assert!(!self.layers.is_empty(), "FRI layers have not been built yet");

        for layer in &self.layers[..self.layers.len() - 1] {
            let domain_size = layer.domain.len();
            let index = position % domain_size;
            let sibling = (index + domain_size / 2) % domain_size;

            channel.send_evaluation(layer.evaluations[index]);
            channel.send_auth_path(&layer.tree.prove(index));
            channel.send_evaluation(layer.evaluations[sibling]);
            channel.send_auth_path(&layer.tree.prove(sibling));
        }

        let last = &self.layers[self.layers.len() - 1];
        channel.send_evaluation(last.evaluations[0]);
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of layers computed during the last commit phase.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layers computed during the last commit phase.
    pub fn layers(&self) -> &[FriLayer<C::Hasher>] {
        &self.layers
    }

    /// Clears all internally stored layers so that another commit phase can be executed.
    pub fn reset(&mut self) {
        self.layers.clear();
    }
}

impl<C: ProverChannel> Default for FriProver<C> {
    fn default() -> Self {
        Self::new()
    }
}
