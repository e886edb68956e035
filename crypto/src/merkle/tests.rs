// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::BaseElement;

use super::{hash_leaves, MerkleTree};
use crate::{errors::MerkleTreeError, hash::Hasher, Sha2_256};

type Digest = <Sha2_256 as Hasher>::Digest;

fn make_leaves(n: usize) -> Vec<Digest> {
    let elements: Vec<BaseElement> = (1..=n as u64).map(BaseElement::new).collect();
    hash_leaves::<Sha2_256>(&elements)
}

#[test]
fn new_tree() {
    let tree = MerkleTree::<Sha2_256>::new(make_leaves(8)).unwrap();
    assert_eq!(3, tree.depth());
    assert_eq!(8, tree.leaves().len());

    // two leaves
    let tree = MerkleTree::<Sha2_256>::new(make_leaves(2)).unwrap();
    assert_eq!(1, tree.depth());

    // too few leaves
    assert_eq!(
        Err(MerkleTreeError::TooFewLeaves(1)),
        MerkleTree::<Sha2_256>::new(make_leaves(1)).map(|_| ())
    );
}

#[test]
fn pad_to_power_of_two() {
    let tree = MerkleTree::<Sha2_256>::new(make_leaves(6)).unwrap();
    assert_eq!(8, tree.leaves().len());
    assert_eq!(3, tree.depth());

    // padding leaves are the hash of a 32-byte zero sentinel
    let sentinel = Sha2_256::hash(&[0u8; 32]);
    assert_eq!(sentinel, tree.leaves()[6]);
    assert_eq!(sentinel, tree.leaves()[7]);

    // padded trees still authenticate every real leaf
    let leaves = make_leaves(6);
    for (index, &leaf) in leaves.iter().enumerate() {
        let path = tree.prove(index);
        assert_eq!(Ok(()), MerkleTree::<Sha2_256>::verify(tree.root(), index, leaf, &path));
    }
}

#[test]
fn prove_and_verify() {
    let leaves = make_leaves(16);
    let tree = MerkleTree::<Sha2_256>::new(leaves.clone()).unwrap();

    for (index, &leaf) in leaves.iter().enumerate() {
        let path = tree.prove(index);
        assert_eq!(4, path.len());
        assert_eq!(Ok(()), MerkleTree::<Sha2_256>::verify(tree.root(), index, leaf, &path));
    }
}

#[test]
fn verify_rejects_tampering() {
    let leaves = make_leaves(16);
    let tree = MerkleTree::<Sha2_256>::new(leaves.clone()).unwrap();
    let index = 5;
    let path = tree.prove(index);

    // flipping a single bit of any path sibling breaks verification
    for level in 0..path.len() {
        for bit in [0, 7] {
            let mut tampered = path.clone();
            tampered[level][0] ^= 1 << bit;
            assert_eq!(
                Err(MerkleTreeError::BadAuthPath),
                MerkleTree::<Sha2_256>::verify(tree.root(), index, leaves[index], &tampered)
            );
        }
    }

    // tampering with the leaf breaks verification
    let mut bad_leaf = leaves[index];
    bad_leaf[31] ^= 1;
    assert_eq!(
        Err(MerkleTreeError::BadAuthPath),
        MerkleTree::<Sha2_256>::verify(tree.root(), index, bad_leaf, &path)
    );

    // wrong index breaks verification
    assert_eq!(
        Err(MerkleTreeError::BadAuthPath),
        MerkleTree::<Sha2_256>::verify(tree.root(), index + 1, leaves[index], &path)
    );

    // tampering with the root breaks verification
    let mut bad_root = tree.root();
    bad_root[0] ^= 1;
    assert_eq!(
        Err(MerkleTreeError::BadAuthPath),
        MerkleTree::<Sha2_256>::verify(bad_root, index, leaves[index], &path)
    );
}

#[test]
fn trees_with_same_leaves_have_same_root() {
    let t1 = MerkleTree::<Sha2_256>::new(make_leaves(32)).unwrap();
    let t2 = MerkleTree::<Sha2_256>::new(make_leaves(32)).unwrap();
    assert_eq!(t1.root(), t2.root());

    let t3 = MerkleTree::<Sha2_256>::new(make_leaves(31)).unwrap();
    assert_ne!(t1.root(), t3.root());
}
