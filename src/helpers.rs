//! Small stateless numeric helpers shared by the codec and the engine.

use num_traits::PrimInt;

use crate::error::{BigIntError, Result};

/// `base` raised to `power` by repeated squaring. Wraps on overflow like the
/// primitive `wrapping_mul`.
pub fn pow<T: PrimInt>(mut base: T, mut power: u32) -> T {
    let mut result = T::one();
    while power > 0 {
        if power & 1 == 1 {
            result = result * base;
        }
        power >>= 1;
        if power > 0 {
            base = base * base;
        }
    }
    result
}

#[inline]
pub fn is_odd<T: PrimInt>(num: T) -> bool {
    num & T::one() == T::one()
}

/// Quotient rounded toward positive infinity, for non-negative operands.
#[inline]
pub fn div_round_up<T: PrimInt>(divisible: T, divider: T) -> T {
    let q = divisible / divider;
    if q * divider == divisible { q } else { q + T::one() }
}

#[inline]
pub fn shift_divide(num: u64, pow: u32) -> u64 {
    num >> pow
}

#[inline]
pub fn shift_multiply(num: u64, pow: u32) -> u64 {
    num << pow
}

#[inline]
pub fn shift_mod(num: u64, pow: u32) -> u64 {
    num & (shift_multiply(1, pow) - 1)
}

/// Parses a run of ASCII decimal digits (at most 19, so the value fits in `u64`).
pub fn parse_decimal_chunk(chunk: &[u8]) -> Result<u64> {
    debug_assert!(chunk.len() <= 19);
    let mut res: u64 = 0;
    for &c in chunk {
        if !c.is_ascii_digit() {
            return Err(BigIntError::invalid("string contains non-digit char"));
        }
        res = res * 10 + (c - b'0') as u64;
    }
    Ok(res)
}
