// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, Criterion};
use prover::{prove, DomainParameters, ProofOptions};

fn prove_fibonacci_sq(c: &mut Criterion) {
    let params = DomainParameters::generate();
    let options = ProofOptions::default();

    let mut group = c.benchmark_group("prover");
    group.sample_size(10);
    group.bench_function("prove", |bench| {
        bench.iter(|| prove(&params, &options).unwrap())
    });
}

criterion_group!(prover_group, prove_fibonacci_sq);
criterion_main!(prover_group);
