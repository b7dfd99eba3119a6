//! Bitwise operators and shifts.
//!
//! `&`, `|`, `^` and `!` act on the infinite width two's complement form of
//! the value. The operands are sign extended to a common width, converted
//! with complement-and-increment, combined limb by limb and converted back.
//!
//! Shifts work on the magnitude directly. `>>` of a negative value goes
//! through `a >> k == !(!a >> k)` and therefore rounds toward negative
//! infinity, unlike `/`, which truncates toward zero.

use log::debug;
use num_traits::ToPrimitive;

use super::BigInteger;
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_vec::DigitVec;
use crate::error::{BigIntError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline(always)]
    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }

    /// Sign of the result in two's complement.
    fn is_negative(self, a_negative: bool, b_negative: bool) -> bool {
        match self {
            BitOp::And => a_negative && b_negative,
            BitOp::Or => a_negative || b_negative,
            BitOp::Xor => a_negative != b_negative,
        }
    }
}

/// Complements every limb, then adds one.
fn twos_complement_in_place(limbs: &mut [u32]) {
    let mut carry = true;
    for x in limbs.iter_mut() {
        let (val, overflow) = (!*x).overflowing_add(carry as u32);
        *x = val;
        carry = overflow;
    }
}

/// `width` limbs of two's complement; `width` must exceed the magnitude's length.
fn to_twos_complement(val: &BigInteger, width: usize) -> Result<DigitVec<u32>> {
    let mag = val.magnitude();
    let mut limbs = DigitVec::from_elem(width, 0u32)?;
    limbs.as_mut_slice()[..mag.len()].copy_from_slice(mag);
    if val.is_negative() {
        twos_complement_in_place(limbs.as_mut_slice());
    }
    Ok(limbs)
}

// 实现位运算
impl BigInteger {
    fn bitwise_assign(&mut self, rhs: &BigInteger, op: BitOp) -> Result<&mut Self> {
        // one extra limb holds the sign extension
        let width = self.digits.len().max(rhs.digits.len()) + 1;
        let mut a = to_twos_complement(self, width)?;
        let b = to_twos_complement(rhs, width)?;

        for (x, &y) in a.iter_mut().zip(b.iter()) {
            *x = op.apply(*x, y);
        }

        let negative = op.is_negative(self.is_negative(), rhs.is_negative());
        if negative {
            twos_complement_in_place(a.as_mut_slice());
        }
        self.digits = a;
        self.positive = !negative;
        self.normalize();
        Ok(self)
    }

    pub fn try_bitand_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        self.bitwise_assign(rhs, BitOp::And)
    }

    pub fn try_bitor_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        self.bitwise_assign(rhs, BitOp::Or)
    }

    pub fn try_bitxor_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        self.bitwise_assign(rhs, BitOp::Xor)
    }

    /// `!self`, which equals `-self - 1`.
    pub fn try_not(&self) -> Result<BigInteger> {
        let mut res = self.clone();
        res.change_sign();
        res.try_sub_assign(&POS_CACHE[1])?;
        Ok(res)
    }
}

// 实现移位
impl BigInteger {
    fn shift_amount(amount: &BigInteger) -> Result<usize> {
        if amount.is_negative() {
            debug!("rejecting negative shift amount {}", amount);
            return Err(BigIntError::invalid("shift amount can't be negative"));
        }
        amount.to_usize().ok_or_else(|| {
            debug!("rejecting shift amount {}", amount);
            BigIntError::range("shift amount does not fit in usize")
        })
    }

    /// `self << amount`, i.e. `self * 2^amount`.
    pub fn try_shl(&self, amount: &BigInteger) -> Result<BigInteger> {
        self.shl_bits(BigInteger::shift_amount(amount)?)
    }

    /// `self >> amount`, rounding toward negative infinity.
    pub fn try_shr(&self, amount: &BigInteger) -> Result<BigInteger> {
        self.shr_bits(BigInteger::shift_amount(amount)?)
    }

    pub fn try_shl_assign(&mut self, amount: &BigInteger) -> Result<&mut Self> {
        *self = self.try_shl(amount)?;
        Ok(self)
    }

    pub fn try_shr_assign(&mut self, amount: &BigInteger) -> Result<&mut Self> {
        *self = self.try_shr(amount)?;
        Ok(self)
    }

    pub fn shl_bits(&self, n: usize) -> Result<BigInteger> {
        if self.is_zero() {
            return Ok(BigInteger::zero());
        }
        let n_ints = n / LIMB_BITS as usize;
        let n_bits = (n % LIMB_BITS as usize) as u32;
        let mag = self.magnitude();
        let len = mag
            .len()
            .checked_add(n_ints)
            .and_then(|len| len.checked_add(1))
            .ok_or_else(|| BigIntError::range("shifted length does not fit in usize"))?;

        let mut new_mag = DigitVec::from_elem(len, 0u32)?;
        let out = new_mag.as_mut_slice();
        for (i, &x) in mag.iter().enumerate() {
            out[i + n_ints] |= x << n_bits;
            if n_bits != 0 {
                out[i + n_ints + 1] |= x >> (LIMB_BITS - n_bits);
            }
        }

        Ok(BigInteger::from_digits(new_mag, self.positive))
    }

    pub fn shr_bits(&self, n: usize) -> Result<BigInteger> {
        if self.is_negative() {
            // !self is non-negative
            return self.try_not()?.shr_magnitude(n)?.try_not();
        }
        self.shr_magnitude(n)
    }

    /// Truncating shift of the magnitude, keeping the sign.
    fn shr_magnitude(&self, n: usize) -> Result<BigInteger> {
        let n_ints = n / LIMB_BITS as usize;
        let n_bits = (n % LIMB_BITS as usize) as u32;
        let mag = self.magnitude();
        if n_ints >= mag.len() {
            return Ok(BigInteger::zero());
        }

        let len = mag.len() - n_ints;
        let mut new_mag = DigitVec::from_elem(len, 0u32)?;
        let out = new_mag.as_mut_slice();
        for (i, x) in out.iter_mut().enumerate() {
            let low = mag[i + n_ints] >> n_bits;
            let high = match mag.get(i + n_ints + 1) {
                Some(&next) if n_bits != 0 => next << (LIMB_BITS - n_bits),
                _ => 0,
            };
            *x = low | high;
        }

        Ok(BigInteger::from_digits(new_mag, self.positive))
    }
}
