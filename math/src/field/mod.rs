// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the 32-bit STARK-friendly prime field with modulus $3 \cdot 2^{30} + 1$.
//!
//! Operations in this field are implemented with plain 64-bit reduction and values are stored in
//! their canonical form using `u64` as the backing type. The multiplicative group of this field
//! contains a subgroup of order $2^{30}$, which is what makes the repeated domain halving of the
//! FRI protocol possible.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand::Rng;


// CONSTANTS
// ================================================================================================

// Field modulus = 3 * 2^30 + 1
const M: u64 = 3221225473;

// A multiplicative generator of the field
const G: u64 = 5;

// FIELD ELEMENT
// ================================================================================================

/// Represents a base field element.
///
/// Internal values are stored in their canonical form in the range [0, M). The backing type is
/// `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct BaseElement(u64);

impl BaseElement {
    /// The additive identity.
    pub const ZERO: Self = BaseElement(0);

    /// The multiplicative identity.
    pub const ONE: Self = BaseElement(1);

    /// Prime modulus of the field.
    pub const MODULUS: u64 = M;

    /// Number of bits needed to represent the field modulus.
    pub const MODULUS_BITS: u32 = 32;

    /// A multiplicative generator of the entire field.
    pub const GENERATOR: Self = BaseElement(G);

    /// Let MODULUS = k * 2^n + 1; then, TWO_ADICITY is n.
    pub const TWO_ADICITY: u32 = 30;

    /// 2^30 root of unity computed as GENERATOR^3.
    pub const TWO_ADIC_ROOT_OF_UNITY: Self = BaseElement(125);

    /// Creates a new field element from a u64 value. If the value is greater than or equal to
    /// the field modulus, modular reduction is silently performed. This function can also be used
    /// to initialize constants.
    pub const fn new(value: u64) -> Self {
        BaseElement(value % M)
    }

    /// Returns a canonical integer representation of this field element.
    pub const fn as_int(&self) -> u64 {
        self.0
    }

    /// Returns this field element added to itself.
    pub fn double(self) -> Self {
        self + self
    }

    /// Returns this field element raised to power 2.
    pub fn square(self) -> Self {
        self * self
    }

    /// Exponentiates this field element by `power` using square-and-multiply.
    pub fn exp(self, power: u64) -> Self {
        let mut r = Self::ONE;
        let mut b = self;
        let mut p = power;

        if p == 0 {
            return Self::ONE;
        } else if b == Self::ZERO {
            return Self::ZERO;
        }

        while p > 0 {
            if p & 1 == 1 {
                r *= b;
            }
            p >>= 1;
            b = b.square();
        }

        r
    }

    /// Returns a multiplicative inverse of this field element computed with the extended
    /// Euclidean algorithm. If this element is ZERO, ZERO is returned.
    pub fn inv(self) -> Self {
        BaseElement(inv(self.0))
    }

    /// Returns the root of unity of order 2^`n`.
    ///
    /// # Panics
    /// Panics if `n` is zero or is greater than 30.
    pub fn get_root_of_unity(n: u32) -> Self {
        assert!(n != 0, "cannot get root of unity for n = 0");
        assert!(n <= Self::TWO_ADICITY, "order cannot exceed 2^{}", Self::TWO_ADICITY);
        let power = 1u64 << (Self::TWO_ADICITY - n);
        Self::TWO_ADIC_ROOT_OF_UNITY.exp(power)
    }

    /// Returns a random field element drawn uniformly from the entire field using a
    /// cryptographically secure RNG.
    pub fn rand() -> Self {
        BaseElement(rand::thread_rng().gen_range(0..M))
    }

    /// Returns the minimal big-endian byte representation of this field element; the zero
    /// element is represented by an empty byte string.
    pub fn to_bytes(&self) -> Vec<u8> {
        let bytes = self.0.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        bytes[skip..].to_vec()
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add(self.0, rhs.0))
    }
}

impl AddAssign for BaseElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub(self.0, rhs.0))
    }
}

impl SubAssign for BaseElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul(self.0, rhs.0))
    }
}

impl MulAssign for BaseElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Div for BaseElement {
    type Output = Self;

    /// Computes self * inv(rhs); the result of dividing by ZERO is ZERO.
    fn div(self, rhs: Self) -> Self {
        Self(mul(self.0, inv(rhs.0)))
    }
}

impl DivAssign for BaseElement {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(sub(0, self.0))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into a field element. If the value is greater than or equal to
    /// the field modulus, modular reduction is silently performed.
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for BaseElement {
    fn from(value: u32) -> Self {
        Self::new(value as u64)
    }
}

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        Self(value as u64)
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BaseElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BaseElement {
    /// Deserializes a 64-bit integer into a field element, reducing it into the canonical range.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Computes (a + b) % M; a and b are assumed to be valid field elements.
const fn add(a: u64, b: u64) -> u64 {
    let z = a + b;
    if z >= M {
        z - M
    } else {
        z
    }
}

/// Computes (a - b) % M; a and b are assumed to be valid field elements.
const fn sub(a: u64, b: u64) -> u64 {
    if a < b {
        M - b + a
    } else {
        a - b
    }
}

/// Computes (a * b) % M; a and b are assumed to be valid field elements.
const fn mul(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % M as u128) as u64
}

/// Computes y such that (x * y) % M = 1 except for when x = 0; in such a case, 0 is returned.
fn inv(x: u64) -> u64 {
    if x == 0 {
        return 0;
    }

    let (mut r, mut new_r) = (M as i64, x as i64);
    let (mut t, mut new_t) = (0i64, 1i64);
    while new_r != 0 {
        let q = r / new_r;
        (r, new_r) = (new_r, r - q * new_r);
        (t, new_t) = (new_t, t - q * new_t);
    }

    // M is prime, so gcd(M, x) = 1 for any non-zero x and t is the inverse up to sign
    if t < 0 {
        t += M as i64;
    }
    t as u64
}
