// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::Hasher;
use math::BaseElement;
use num_bigint::BigUint;

// TYPES AND INTERFACES
// ================================================================================================

/// A Fiat-Shamir transcript connecting the prover to a simulated verifier.
///
/// The channel owns a rolling 32-byte state, initially all zeros, and an ordered log of
/// human-readable proof messages. Sending a message absorbs it into the state; drawing a
/// pseudo-random value derives the next state from the current one and a monotonically
/// increasing counter, so that two channels receiving identical call sequences produce
/// byte-identical states and identical drawn values. The log records every message and every
/// drawn value, and constitutes the emitted proof; it does not feed back into the state.
pub struct ProverChannel<H: Hasher> {
    state: H::Digest,
    counter: u64,
    proof: Vec<String>,
}

// PROVER CHANNEL IMPLEMENTATION
// ================================================================================================

impl<H: Hasher> ProverChannel<H> {
    /// Returns a new prover channel with an all-zero state and an empty proof log.
    pub fn new() -> Self {
        ProverChannel {
            state: H::Digest::default(),
            counter: 0,
            proof: Vec::new(),
        }
    }

    // ABSORBING METHODS
    // --------------------------------------------------------------------------------------------

    /// Sends a sequence of bytes to the verifier: absorbs it into the rolling state and appends
    /// its hex encoding to the proof log.
    pub fn send(&mut self, bytes: &[u8]) {
        self.absorb(bytes);
        self.proof.push(format!("send:{}", hex::encode(bytes)));
    }

    /// Sends a field element to the verifier: absorbs its minimal big-endian byte representation
    /// and appends its decimal value to the proof log.
    pub fn send_field_element(&mut self, value: BaseElement) {
        self.absorb(&value.to_bytes());
        self.proof.push(format!("send:{}", value));
    }

    /// Sends a Merkle authentication path to the verifier as a single message absorbing the
    /// concatenation of all sibling digests.
    pub fn send_path(&mut self, path: &[H::Digest]) {
        let mut bytes = Vec::with_capacity(path.len() * 32);
        for digest in path {
            bytes.extend_from_slice(digest.as_ref());
        }
        self.send(&bytes);
    }

    // SQUEEZING METHODS
    // --------------------------------------------------------------------------------------------

    /// Draws a pseudo-random field element from the channel and appends its decimal value to
    /// the proof log.
    pub fn draw_field_element(&mut self) -> BaseElement {
        let value = self.next_value(&BigUint::from(BaseElement::MODULUS));
        self.proof.push(format!("receiveRandomFieldElement:{}", value));
        BaseElement::new(value)
    }

    /// Draws a pseudo-random integer in the range [min, max] from the channel and appends its
    /// decimal value to the proof log.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn draw_integer(&mut self, min: u64, max: u64) -> u64 {
        assert!(min <= max, "invalid range [{}, {}]", min, max);
        let value = min + self.next_value(&BigUint::from(max - min + 1));
        self.proof.push(format!("receiveRandomInt:{}", value));
        value
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the current rolling state of the channel.
    pub fn state(&self) -> H::Digest {
        self.state
    }

    /// Returns the proof log accumulated so far.
    pub fn proof(&self) -> &[String] {
        &self.proof
    }

    /// Consumes the channel and returns the accumulated proof log.
    pub fn into_proof(self) -> Vec<String> {
        self.proof
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    /// Updates the rolling state to hash(state || bytes).
    fn absorb(&mut self, bytes: &[u8]) {
        let mut data = self.state.as_ref().to_vec();
        data.extend_from_slice(bytes);
        self.state = H::hash(&data);
    }

    /// Advances the state to hash(state || counter) and reduces the full 256-bit state into
    /// [0, modulus).
    fn next_value(&mut self, modulus: &BigUint) -> u64 {
        self.counter += 1;
        self.state = H::merge_with_int(self.state, self.counter);
        let value = BigUint::from_bytes_be(self.state.as_ref()) % modulus;
        value.to_u64_digits().first().copied().unwrap_or(0)
    }
}

impl<H: Hasher> Default for ProverChannel<H> {
    fn default() -> Self {
        Self::new()
    }
}

// FRI PROVER CHANNEL IMPLEMENTATION
// ================================================================================================

impl<H: Hasher> fri::ProverChannel for ProverChannel<H> {
    type Hasher = H;

    /// Sends a FRI layer commitment to the verifier.
    fn commit_fri_layer(&mut self, layer_root: H::Digest) {
        self.send(layer_root.as_ref());
    }

    /// Draws a FRI folding coefficient from the channel.
    fn draw_fri_alpha(&mut self) -> BaseElement {
        self.draw_field_element()
    }

    fn send_evaluation(&mut self, value: BaseElement) {
        self.send_field_element(value);
    }

    fn send_auth_path(&mut self, path: &[H::Digest]) {
        self.send_path(path);
    }
}
