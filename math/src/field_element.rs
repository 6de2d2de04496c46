use std::fmt;
use std::hash::Hash;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::ParseFieldElementError;
use crate::tables::{EXP, GENERATOR, GROUP_ORDER, LOG};

/// Element of the binary field GF(2^8).
///
/// Addition is XOR. Multiplication and division go through the
/// logarithm/exponent tables and select the zero result with a
/// constant-time mask, so their running time does not depend on whether an
/// operand is zero.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Zeroize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Gf256(u8);

impl<'a> Arbitrary<'a> for Gf256 {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary().map(Gf256::new)
    }
}

impl Distribution<Gf256> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gf256 {
        Gf256::new(rng.random())
    }
}

impl Gf256 {
    pub const BYTES: usize = 1;

    /// Number of elements in the field.
    pub const ORDER: usize = 256;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Generator of the multiplicative group the tables are built from.
    pub const fn generator() -> Self {
        Self(GENERATOR)
    }

    /// Field multiplication.
    ///
    /// The table lookup runs for every input, including zero operands, and
    /// the zero result is chosen with [`ConditionallySelectable`].
    #[must_use]
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        let log_sum = (LOG[self.0 as usize] as u16 + LOG[rhs.0 as usize] as u16)
            % GROUP_ORDER;
        let product = Self(EXP[log_sum as usize]);
        let either_zero = self.ct_eq(&Self::ZERO) | rhs.ct_eq(&Self::ZERO);
        Self::conditional_select(&product, &Self::ZERO, either_zero)
    }

    /// Field division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Callers must rule that out by construction:
    /// reaching it means an internal invariant was broken, not that the
    /// input was bad.
    #[must_use]
    #[inline]
    pub fn divide(self, rhs: Self) -> Self {
        assert!(!rhs.is_zero(), "Attempted to divide by zero in GF(2^8).");

        let log_diff = (LOG[self.0 as usize] as u16 + GROUP_ORDER
            - LOG[rhs.0 as usize] as u16)
            % GROUP_ORDER;
        let quotient = Self(EXP[log_diff as usize]);
        Self::conditional_select(&quotient, &Self::ZERO, self.ct_eq(&Self::ZERO))
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::ONE.divide(*self)
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Accepts decimal (`"42"`) and `0x`-prefixed hexadecimal (`"0x2a"`).
impl FromStr for Gf256 {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
        {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => s.parse::<u8>(),
        };
        parsed
            .map(Self::new)
            .map_err(ParseFieldElementError::ParseU8Error)
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Gf256> for u8 {
    fn from(elem: Gf256) -> Self {
        elem.0
    }
}

impl From<&Gf256> for u8 {
    fn from(elem: &Gf256) -> Self {
        elem.0
    }
}

impl ConstantTimeEq for Gf256 {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gf256 {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl Zero for Gf256 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl ConstZero for Gf256 {
    const ZERO: Self = Self(0);
}

impl One for Gf256 {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

impl ConstOne for Gf256 {
    const ONE: Self = Self(1);
}

impl Add for Gf256 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

// Characteristic 2: subtraction and addition coincide.
impl Sub for Gf256 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl SubAssign for Gf256 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl Neg for Gf256 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl Mul for Gf256 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl MulAssign for Gf256 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Gf256 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        self.divide(other)
    }
}

impl DivAssign for Gf256 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
