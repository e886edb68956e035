// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the prover side of the FRI (Fast Reed-Solomon IOP of Proximity)
//! protocol: the commit phase, which repeatedly folds a polynomial under verifier-supplied
//! randomness and commits to the evaluations of every layer, and the query phase, which opens
//! committed evaluations together with their Merkle authentication paths.
//!
//! All interaction with the verifier goes through the [ProverChannel] trait; a concrete
//! Fiat-Shamir implementation of the trait lives in the prover crate.

pub mod folding;

mod prover;
pub use prover::{FriLayer, FriProver, ProverChannel};
