// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::Hasher;
use math::BaseElement;

// PROVER CHANNEL TRAIT
// ================================================================================================

/// Defines the interface through which the FRI prover communicates with the verifier.
///
/// In the non-interactive setting the implementation derives verifier randomness from a hash of
/// all preceding prover messages; the draw methods are therefore mutating, and the order of
/// calls against a channel is part of the protocol.
pub trait ProverChannel {
    /// Hash function used by the prover to commit to layer evaluations.
    type Hasher: Hasher;

    /// Sends a FRI layer commitment to the verifier.
    fn commit_fri_layer(&mut self, layer_root: <Self::Hasher as Hasher>::Digest);

    /// Returns a random folding coefficient drawn from the entire field.
    fn draw_fri_alpha(&mut self) -> BaseElement;

    /// Sends a decommitted layer evaluation to the verifier.
    fn send_evaluation(&mut self, value: BaseElement);

    /// Sends a Merkle authentication path for a previously sent evaluation.
    fn send_auth_path(&mut self, path: &[<Self::Hasher as Hasher>::Digest]);
}
