//! # BigInteger
//! Arbitrary-precision signed integers in sign-magnitude form.
//!
//! The magnitude is a [`DigitVec<u32>`] of base `2^32` limbs, least significant
//! limb first. Every value has exactly one representation:
//! - the limb sequence is never empty, zero is the single limb `0`;
//! - there is no high zero limb beyond the most significant one;
//! - zero is never negative.
//!
//! Each operation restores this canonical form before returning.

mod arith;
mod bitwise;
mod cmp;
mod codec;
mod traits;
mod ops;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_vec::DigitVec;

pub(crate) use self::cmp::cmp_mag;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    /// `true` for values `>= 0`.
    positive: bool,
    digits: DigitVec<u32>,
}

// 实现构造
impl BigInteger {
    /// Builds a value from little-endian limbs, normalizing them.
    pub(crate) fn from_raw(mag: Vec<u32>, positive: bool) -> Self {
        BigInteger::from_digits(DigitVec::from(mag), positive)
    }

    pub(crate) fn from_digits(digits: DigitVec<u32>, positive: bool) -> Self {
        let mut val = BigInteger { positive, digits };
        val.normalize();
        val
    }

    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }

    fn value_of(mag: u128, positive: bool) -> Self {
        if mag <= MAX_CONSTANT as u128 {
            return if positive {
                POS_CACHE[mag as usize].clone()
            } else {
                NEG_CACHE[mag as usize].clone()
            };
        }
        let mut limbs = Vec::with_capacity(4);
        let mut rest = mag;
        while rest != 0 {
            limbs.push(rest as u32);
            rest >>= LIMB_BITS;
        }
        BigInteger::from_raw(limbs, positive)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::value_of(val.unsigned_abs() as u128, val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 规范化
impl BigInteger {
    /// Drops high zero limbs and makes zero non-negative.
    pub(crate) fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits = DigitVec::from(vec![0]);
        }
        if self.is_zero() {
            self.positive = true;
        }
    }

    /// Flips the sign; zero stays non-negative.
    pub(crate) fn change_sign(&mut self) {
        self.positive = !self.positive;
        self.normalize();
    }

    pub(crate) fn magnitude(&self) -> &[u32] {
        self.digits.as_slice()
    }
}

// 杂项辅助函数
impl BigInteger {
    /// The magnitude's limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        self.digits.as_slice()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() == [0]
    }

    pub fn is_one(&self) -> bool {
        self.positive && self.magnitude() == [1]
    }

    pub fn is_negative_one(&self) -> bool {
        !self.positive && self.magnitude() == [1]
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.positive && !self.is_zero()
    }

    pub fn abs(&self) -> BigInteger {
        let mut res = self.clone();
        res.positive = true;
        res
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> BigInteger {
        if self.is_zero() {
            BigInteger::zero()
        } else if self.positive {
            POS_CACHE[1].clone()
        } else {
            NEG_CACHE[1].clone()
        }
    }

    /// Number of significant bits in the magnitude; `0` for zero.
    pub fn bit_length(&self) -> u64 {
        let mag = self.magnitude();
        let top = mag[mag.len() - 1];
        (mag.len() as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64
    }
}
