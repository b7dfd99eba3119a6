//! `num-traits` integration.

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use super::BigInteger;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

impl Zero for BigInteger {
    fn zero() -> Self {
        BigInteger::zero()
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        BigInteger::one()
    }

    fn is_one(&self) -> bool {
        BigInteger::is_one(self)
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = BigIntError;

    /// Only radix 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if radix != 10 {
            return Err(BigIntError::invalid(format!("unsupported radix {}", radix)));
        }
        BigInteger::from_decimal_str(s)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInteger::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInteger::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl BigInteger {
    /// The magnitude as `u128`, `None` when it needs more than four limbs.
    fn magnitude_u128(&self) -> Option<u128> {
        let mag = self.magnitude();
        if mag.len() > (u128::BITS / LIMB_BITS) as usize {
            return None;
        }
        Some(mag.iter().rev().fold(0u128, |acc, &x| (acc << LIMB_BITS) | x as u128))
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let mag = self.magnitude_u128()?;
        if self.positive {
            i128::try_from(mag).ok()
        } else if mag == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(mag).ok().map(|v| -v)
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.positive { self.magnitude_u128() } else { None }
    }
}

impl FromPrimitive for BigInteger {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInteger::from(n))
    }
}
