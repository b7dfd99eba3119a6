//! Decimal string parsing and rendering.

use std::fmt::Display;
use std::str::FromStr;

use log::{debug, trace};

use super::BigInteger;
use super::arith::short_divide_in_place;
use crate::big_num_constants::*;
use crate::digit_vec::DigitVec;
use crate::error::{BigIntError, Result};
use crate::helpers::{div_round_up, is_odd, parse_decimal_chunk, pow, shift_divide, shift_mod, shift_multiply};

// 实现解析
impl BigInteger {
    /// Parses an optional leading `-` followed by one or more decimal digits.
    /// Leading zeros are accepted, `"-0"` is zero.
    pub fn from_decimal_str(s: &str) -> Result<BigInteger> {
        if s.is_empty() {
            debug!("rejecting empty decimal string");
            return Err(BigIntError::invalid("string can't be empty"));
        }
        let bytes = s.as_bytes();
        let positive = bytes[0] != b'-';
        let body = if positive { bytes } else { &bytes[1..] };
        if body.is_empty() {
            debug!("rejecting decimal string {:?} without digits", s);
            return Err(BigIntError::invalid("string should have at least 1 digit"));
        }

        // base 10^9, least significant chunk first
        let num_chunks = div_round_up(body.len(), DECIMAL_CHUNK_DIGITS);
        let mut chunks: DigitVec<u64> = DigitVec::with_capacity(num_chunks)?;
        let mut end = body.len();
        while end > 0 {
            let start = end.saturating_sub(DECIMAL_CHUNK_DIGITS);
            let chunk = parse_decimal_chunk(&body[start..end]).map_err(|err| {
                debug!("rejecting decimal string {:?}: {}", s, err);
                err
            })?;
            chunks.push(chunk)?;
            end = start;
        }
        trace!("parsed {} decimal digits into {} chunks", body.len(), num_chunks);

        let digits = BigInteger::chunks_to_limbs(chunks)?;
        Ok(BigInteger::from_digits(digits, positive))
    }

    /// Converts base `10^9` chunks to base `2^32` limbs.
    ///
    /// Repeatedly divides the chunk number by `2^16`; each remainder is one
    /// half of an output limb, low half first. Dividing by the full `2^32`
    /// would overflow `u64` in `remainder * 10^9 + chunk`.
    fn chunks_to_limbs(mut chunks: DigitVec<u64>) -> Result<DigitVec<u32>> {
        let half_base = shift_multiply(1, HALF_LIMB_BITS);
        let chunk_base = pow(10u64, DECIMAL_CHUNK_DIGITS as u32);
        let mut digits = DigitVec::with_capacity(chunks.len())?;
        let mut iteration: u64 = 0;

        while chunks.len() > 1 || *chunks.at(0)? >= half_base {
            let mut carry = 0;
            for x in chunks.iter_mut().rev() {
                let cur = *x + carry * chunk_base;
                *x = shift_divide(cur, HALF_LIMB_BITS);
                carry = shift_mod(cur, HALF_LIMB_BITS);
            }
            while chunks.len() > 1 && chunks.last() == Some(&0) {
                chunks.pop();
            }
            BigInteger::push_half_limb(&mut digits, carry, iteration)?;
            iteration += 1;
        }
        let last = *chunks.at(0)?;
        BigInteger::push_half_limb(&mut digits, last, iteration)?;

        Ok(digits)
    }

    #[inline(always)]
    fn push_half_limb(digits: &mut DigitVec<u32>, half: u64, iteration: u64) -> Result<()> {
        if is_odd(iteration) {
            if let Some(top) = digits.as_mut_slice().last_mut() {
                *top |= shift_multiply(half, HALF_LIMB_BITS) as u32;
            }
            Ok(())
        } else {
            digits.push(half as u32)
        }
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInteger::from_decimal_str(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = BigIntError;

    fn try_from(s: &str) -> Result<Self> {
        BigInteger::from_decimal_str(s)
    }
}

impl TryFrom<String> for BigInteger {
    type Error = BigIntError;

    fn try_from(s: String) -> Result<Self> {
        BigInteger::from_decimal_str(&s)
    }
}

// 实现打印
impl BigInteger {
    /// Canonical decimal form: no leading zeros, `-` iff negative, `"0"` for zero.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.magnitude_to_decimal();
        if self.positive {
            digits
        } else {
            let mut s = String::with_capacity(digits.len() + 1);
            s.push('-');
            s.push_str(&digits);
            s
        }
    }

    /// Divides a copy of the magnitude by 10 until a single digit is left.
    fn magnitude_to_decimal(&self) -> String {
        let mut work: Vec<u32> = self.magnitude().to_vec();
        let mut rev_digits: Vec<u8> = Vec::with_capacity(work.len() * 10);

        while work.len() > 1 || work[0] >= 10 {
            let rem = short_divide_in_place(&mut work, 10);
            rev_digits.push(b'0' + rem as u8);
            while work.len() > 1 && work.last() == Some(&0) {
                work.pop();
            }
        }
        rev_digits.push(b'0' + work[0] as u8);

        rev_digits.iter().rev().map(|&d| d as char).collect()
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(self.positive, "", &self.magnitude_to_decimal())
    }
}
