// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crypto::{hash_leaves, MerkleTree, Sha2_256};
use math::BaseElement;

const SIZES: [usize; 3] = [1_024, 8_192, 65_536];

pub fn merkle_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle");

    for &size in SIZES.iter() {
        let elements: Vec<BaseElement> = (0..size as u64).map(BaseElement::new).collect();
        let leaves = hash_leaves::<Sha2_256>(&elements);

        group.bench_with_input(BenchmarkId::new("build", size), &size, |bench, _| {
            bench.iter_batched(
                || leaves.clone(),
                |leaves| MerkleTree::<Sha2_256>::new(leaves).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });

        let tree = MerkleTree::<Sha2_256>::new(leaves).unwrap();
        group.bench_with_input(BenchmarkId::new("prove", size), &size, |bench, _| {
            bench.iter(|| tree.prove(size / 2))
        });
    }
}

criterion_group!(merkle_group, merkle_tree_construction);
criterion_main!(merkle_group);
