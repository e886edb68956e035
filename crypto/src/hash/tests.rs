// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{Hasher, Sha2_256};

#[test]
fn hash_empty_input() {
    // SHA-256 of the empty string
    let expected = [
        0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
        0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
        0x78, 0x52, 0xb8, 0x55,
    ];
    assert_eq!(expected, Sha2_256::hash(&[]));
}

#[test]
fn hash_is_deterministic() {
    assert_eq!(Sha2_256::hash(b"abcd"), Sha2_256::hash(b"abcd"));
    assert_ne!(Sha2_256::hash(b"abcd"), Sha2_256::hash(b"abce"));
}

#[test]
fn merge_is_order_sensitive() {
    let a = Sha2_256::hash(b"a");
    let b = Sha2_256::hash(b"b");
    assert_ne!(Sha2_256::merge(&[a, b]), Sha2_256::merge(&[b, a]));
}

#[test]
fn merge_with_int_differs_per_value() {
    let seed = Sha2_256::hash(b"seed");
    assert_eq!(Sha2_256::merge_with_int(seed, 1), Sha2_256::merge_with_int(seed, 1));
    assert_ne!(Sha2_256::merge_with_int(seed, 1), Sha2_256::merge_with_int(seed, 2));
}
