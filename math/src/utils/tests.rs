// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::BaseElement;

#[test]
fn get_power_series() {
    let n = 1024;
    let b = BaseElement::new(3);

    let expected = (0..n).map(|p| b.exp(p as u64)).collect::<Vec<_>>();
    assert_eq!(expected, super::get_power_series(b, n));
}

#[test]
fn get_power_series_with_offset() {
    let n = 1024;
    let b = BaseElement::new(3);
    let s = BaseElement::new(7);

    let expected = (0..n).map(|p| s * b.exp(p as u64)).collect::<Vec<_>>();
    assert_eq!(expected, super::get_power_series_with_offset(b, s, n));
}

#[test]
fn batch_inversion() {
    let values = (1..9u64).map(BaseElement::new).collect::<Vec<_>>();
    let inverses = super::batch_inversion(&values);

    for (&value, &inverse) in values.iter().zip(inverses.iter()) {
        assert_eq!(value.inv(), inverse);
    }
}

#[test]
fn batch_inversion_skips_zeros() {
    let values = vec![BaseElement::new(5), BaseElement::ZERO, BaseElement::new(29)];
    let inverses = super::batch_inversion(&values);

    assert_eq!(values[0].inv(), inverses[0]);
    assert_eq!(BaseElement::ZERO, inverses[1]);
    assert_eq!(values[2].inv(), inverses[2]);
}

#[test]
fn log2() {
    assert_eq!(0, super::log2(1));
    assert_eq!(3, super::log2(8));
    assert_eq!(13, super::log2(8192));
}
