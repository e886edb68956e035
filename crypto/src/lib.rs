// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains cryptographic primitives used in STARK proof generation:
//!
//! * **Hash functions** - which are defined using the [Hasher] trait. The crate contains a
//!   SHA-256 implementation of the trait, which is the hash function used for both Merkle
//!   commitments and the Fiat-Shamir transcript.
//! * **Merkle trees** - which are used as a commitment scheme over sequences of field elements.
//!   The [MerkleTree] implementation stores nodes in a flat vector and computes authentication
//!   paths by index arithmetic.

mod hash;
pub use hash::{Hasher, Sha2_256};

mod merkle;
pub use merkle::{build_merkle_nodes, hash_leaves, MerkleTree};

mod errors;
pub use errors::MerkleTreeError;
