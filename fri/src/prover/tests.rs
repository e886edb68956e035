// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{hash_leaves, Hasher, MerkleTree, Sha2_256};
use math::{polynom, utils::get_power_series_with_offset, BaseElement};

use super::{FriProver, ProverChannel};

// TEST CHANNEL
// ================================================================================================

/// A minimal deterministic channel: draws folding coefficients from a rolling hash of the layer
/// commitments and records everything the prover sends.
#[derive(Default)]
struct TestChannel {
    state: [u8; 32],
    counter: u64,
    commitments: Vec<[u8; 32]>,
    evaluations: Vec<BaseElement>,
    paths: Vec<usize>,
}

impl ProverChannel for TestChannel {
    type Hasher = Sha2_256;

    fn commit_fri_layer(&mut self, layer_root: [u8; 32]) {
        self.state = Sha2_256::merge(&[self.state, layer_root]);
        self.commitments.push(layer_root);
    }

    fn draw_fri_alpha(&mut self) -> BaseElement {
        self.counter += 1;
        self.state = Sha2_256::merge_with_int(self.state, self.counter);
        let value = u64::from_be_bytes(self.state[24..].try_into().unwrap());
        BaseElement::new(value)
    }

    fn send_evaluation(&mut self, value: BaseElement) {
        self.evaluations.push(value);
    }

    fn send_auth_path(&mut self, path: &[[u8; 32]]) {
        self.paths.push(path.len());
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn build_test_inputs(
    degree: usize,
    domain_size: usize,
) -> (Vec<BaseElement>, Vec<BaseElement>, Vec<BaseElement>, MerkleTree<Sha2_256>) {
    let polynomial: Vec<BaseElement> = (1..=degree as u64 + 1).map(BaseElement::new).collect();
    let generator = BaseElement::get_root_of_unity(math::utils::log2(domain_size));
    let domain = get_power_series_with_offset(generator, BaseElement::GENERATOR, domain_size);
    let evaluations = polynom::eval_many(&polynomial, &domain);
    let tree = MerkleTree::new(hash_leaves::<Sha2_256>(&evaluations)).unwrap();
    (polynomial, domain, evaluations, tree)
}

fn committed_prover(degree: usize, domain_size: usize) -> (FriProver<TestChannel>, TestChannel) {
    let (polynomial, domain, evaluations, tree) = build_test_inputs(degree, domain_size);
    let mut channel = TestChannel::default();
    channel.commit_fri_layer(tree.root());

    let mut prover = FriProver::new();
    prover.build_layers(&mut channel, polynomial, domain, evaluations, tree).unwrap();
    (prover, channel)
}

// COMMIT PHASE
// ================================================================================================

#[test]
fn build_layers_until_degree_zero() {
    let (prover, channel) = committed_prover(7, 32);

    // degree sequence is 7 -> 3 -> 1 -> 0
    assert_eq!(4, prover.num_layers());
    assert_eq!(4, channel.commitments.len());

    let degrees: Vec<usize> =
        prover.layers().iter().map(|l| polynom::degree_of(l.polynomial())).collect();
    assert_eq!(vec![7, 3, 1, 0], degrees);
}

#[test]
fn layer_invariants() {
    let (prover, _) = committed_prover(7, 32);
    let layers = prover.layers();

    for pair in layers.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        // the domain halves at every layer
        assert_eq!(current.domain().len() / 2, next.domain().len());

        // the next domain consists of the squares of the first half of the current domain
        for (x, y) in current.domain().iter().zip(next.domain().iter()) {
            assert_eq!(x.square(), *y);
        }

        // evaluations match the layer polynomial over the layer domain
        assert_eq!(next.evaluations(), polynom::eval_many(next.polynomial(), next.domain()));

        // commitments match the evaluations
        let leaves = hash_leaves::<Sha2_256>(next.evaluations());
        assert_eq!(next.root(), MerkleTree::<Sha2_256>::new(leaves).unwrap().root());
    }

    // the terminal layer is a constant polynomial evaluating to itself everywhere
    let last = &layers[layers.len() - 1];
    assert_eq!(0, polynom::degree_of(last.polynomial()));
    for &e in last.evaluations() {
        assert_eq!(last.polynomial()[0], e);
    }
}

#[test]
fn folding_coefficients_are_drawn_after_commitments() {
    // two provers given the same inputs must produce identical layers
    let (p1, c1) = committed_prover(15, 64);
    let (p2, c2) = committed_prover(15, 64);

    assert_eq!(c1.commitments, c2.commitments);
    for (l1, l2) in p1.layers().iter().zip(p2.layers().iter()) {
        assert_eq!(l1.polynomial(), l2.polynomial());
        assert_eq!(l1.evaluations(), l2.evaluations());
    }
}

#[test]
fn reset_allows_new_commit_phase() {
    let (mut prover, _) = committed_prover(7, 32);
    prover.reset();
    assert_eq!(0, prover.num_layers());

    let (polynomial, domain, evaluations, tree) = build_test_inputs(3, 16);
    let mut channel = TestChannel::default();
    channel.commit_fri_layer(tree.root());
    prover.build_layers(&mut channel, polynomial, domain, evaluations, tree).unwrap();
    assert_eq!(3, prover.num_layers());
}

// QUERY PHASE
// ================================================================================================

#[test]
fn open_query_emits_pairs_per_layer() {
    let (prover, mut channel) = committed_prover(7, 32);
    let num_layers = prover.num_layers();

    channel.evaluations.clear();
    channel.paths.clear();
    prover.open_query(&mut channel, 11);

    // two openings per non-terminal layer plus the terminal constant
    assert_eq!((num_layers - 1) * 2 + 1, channel.evaluations.len());
    assert_eq!((num_layers - 1) * 2, channel.paths.len());

    // authentication path lengths match the layer tree depths: 5, 4, 3
    assert_eq!(vec![5, 5, 4, 4, 3, 3], channel.paths);

    // opened values are the committed evaluations at the query and sibling positions
    let mut expected = Vec::new();
    for layer in &prover.layers()[..num_layers - 1] {
        let n = layer.domain().len();
        expected.push(layer.evaluations()[11 % n]);
        expected.push(layer.evaluations()[(11 + n / 2) % n]);
    }
    expected.push(prover.layers()[num_layers - 1].evaluations()[0]);
    assert_eq!(expected, channel.evaluations);
}
