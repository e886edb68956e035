// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

use crypto::MerkleTreeError;

// PROVER ERROR
// ================================================================================================

/// Represents an error returned by the prover during an execution of the proof generation
/// process. All errors are fatal to the current proof attempt; the prover never retries.
#[derive(Debug, PartialEq, Eq)]
pub enum ProverError {
    /// The trace polynomial does not satisfy the constraint with the specified index.
    ConstraintNotDivisible(usize),
    /// The trace domain generator does not generate a subgroup of the expected order.
    InvalidTraceGenerator,
    /// The commitment provided with the domain parameters does not match the committed values.
    CommitmentMismatch,
    /// The domain parameters failed structural validation.
    InvalidParameters(&'static str),
    /// A Merkle commitment could not be constructed or verified.
    MerkleTree(MerkleTreeError),
}

impl fmt::Display for ProverError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintNotDivisible(index) => {
                write!(f, "the trace does not satisfy constraint {}", index)
            }
            Self::InvalidTraceGenerator => {
                write!(f, "the trace domain generator does not generate a subgroup of the expected order")
            }
            Self::CommitmentMismatch => {
                write!(f, "the provided commitment root does not match the committed evaluations")
            }
            Self::InvalidParameters(reason) => {
                write!(f, "invalid domain parameters: {}", reason)
            }
            Self::MerkleTree(err) => {
                write!(f, "merkle commitment failed: {}", err)
            }
        }
    }
}

impl core::error::Error for ProverError {}

impl From<MerkleTreeError> for ProverError {
    fn from(err: MerkleTreeError) -> Self {
        ProverError::MerkleTree(err)
    }
}
