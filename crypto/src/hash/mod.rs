// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt::Debug;

use sha2::{Digest, Sha256};

#[cfg(test)]
mod tests;

// HASHER TRAIT
// ================================================================================================

/// Defines a cryptographic hash function with a 32-byte digest.
pub trait Hasher {
    /// Specifies a digest type returned by this hasher.
    type Digest: Debug + Default + Copy + Eq + PartialEq + Send + Sync + AsRef<[u8]>;

    /// Returns a hash of the provided sequence of bytes.
    fn hash(bytes: &[u8]) -> Self::Digest;

    /// Returns a hash of two digests. This method is intended for use in the construction of
    /// Merkle trees.
    fn merge(values: &[Self::Digest; 2]) -> Self::Digest;

    /// Returns a hash of the provided digest and a u64 value; used to derive pseudo-random
    /// values from a seed.
    fn merge_with_int(seed: Self::Digest, value: u64) -> Self::Digest;
}

// SHA2
// ================================================================================================

/// SHA-256 implementation of the [Hasher] trait.
pub struct Sha2_256();

impl Hasher for Sha2_256 {
    type Digest = [u8; 32];

    fn hash(bytes: &[u8]) -> Self::Digest {
        Sha256::digest(bytes).into()
    }

    fn merge(values: &[Self::Digest; 2]) -> Self::Digest {
        let mut data = [0; 64];
        data[..32].copy_from_slice(&values[0]);
        data[32..].copy_from_slice(&values[1]);
        Sha256::digest(data).into()
    }

    fn merge_with_int(seed: Self::Digest, value: u64) -> Self::Digest {
        let mut data = [0; 64];
        data[..32].copy_from_slice(&seed);
        data[56..].copy_from_slice(&value.to_le_bytes());
        Sha256::digest(data).into()
    }
}
