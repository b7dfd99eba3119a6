//! Sign-aware addition and subtraction, schoolbook multiplication, and
//! truncating division (short division or Knuth's Algorithm D).

use std::cmp::Ordering;

use log::{debug, trace};

use super::{BigInteger, cmp_mag};
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_vec::DigitVec;
use crate::error::{unwrap_op, BigIntError, Result};

// 实现加法
impl BigInteger {
    /// `self += rhs`.
    pub fn try_add_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        if self.positive == rhs.positive {
            self.add_same_sign(rhs.magnitude())?;
        } else {
            // a + b == a - (-b), and -b has the sign of a
            self.subtract_same_sign(rhs.magnitude())?;
        }
        Ok(self)
    }

    pub fn try_add(&self, rhs: &BigInteger) -> Result<BigInteger> {
        let mut res = self.clone();
        res.try_add_assign(rhs)?;
        Ok(res)
    }

    /// `|self| += mag`, sign unchanged.
    fn add_same_sign(&mut self, mag: &[u32]) -> Result<()> {
        let digits = add_mag(self.magnitude(), mag)?;
        self.digits = digits;
        self.normalize();
        Ok(())
    }
}

// 实现减法
impl BigInteger {
    /// `self -= rhs`.
    pub fn try_sub_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        if self.positive != rhs.positive {
            self.add_same_sign(rhs.magnitude())?;
        } else {
            self.subtract_same_sign(rhs.magnitude())?;
        }
        Ok(self)
    }

    pub fn try_sub(&self, rhs: &BigInteger) -> Result<BigInteger> {
        let mut res = self.clone();
        res.try_sub_assign(rhs)?;
        Ok(res)
    }

    /// Subtracts a magnitude carrying the same sign as `self`. The smaller
    /// magnitude is always taken from the larger one; the sign flips when
    /// `|self| < |mag|`.
    fn subtract_same_sign(&mut self, mag: &[u32]) -> Result<()> {
        let digits = match cmp_mag(self.magnitude(), mag) {
            Ordering::Less => {
                let digits = sub_mag(mag, self.magnitude())?;
                self.positive = !self.positive;
                digits
            }
            _ => sub_mag(self.magnitude(), mag)?,
        };
        self.digits = digits;
        self.normalize();
        Ok(())
    }
}

// 自增自减
impl BigInteger {
    /// Prefix `++`.
    pub fn increment(&mut self) -> &mut Self {
        unwrap_op(self.try_add_assign(&POS_CACHE[1]))
    }

    /// Prefix `--`.
    pub fn decrement(&mut self) -> &mut Self {
        unwrap_op(self.try_sub_assign(&POS_CACHE[1]))
    }

    /// Postfix `++`: increments and returns the previous value.
    pub fn post_increment(&mut self) -> BigInteger {
        let old = self.clone();
        self.increment();
        old
    }

    /// Postfix `--`: decrements and returns the previous value.
    pub fn post_decrement(&mut self) -> BigInteger {
        let old = self.clone();
        self.decrement();
        old
    }
}

// 实现乘法
impl BigInteger {
    /// `self *= rhs`.
    pub fn try_mul_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInteger::zero();
            return Ok(self);
        }
        let digits = mul_mag(self.magnitude(), rhs.magnitude())?;
        self.positive = self.positive == rhs.positive;
        self.digits = digits;
        self.normalize();
        Ok(self)
    }

    pub fn try_mul(&self, rhs: &BigInteger) -> Result<BigInteger> {
        let mut res = self.clone();
        res.try_mul_assign(rhs)?;
        Ok(res)
    }
}

// 实现除法
impl BigInteger {
    /// Quotient and remainder of truncating division.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `self == q * rhs + r` with `|r| < |rhs|`.
    pub fn try_div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if rhs.is_zero() {
            debug!("division of {} limbs by zero", self.digits.len());
            return Err(BigIntError::DivisionByZero);
        }
        if rhs.is_one() {
            return Ok((self.clone(), BigInteger::zero()));
        }
        if rhs.is_negative_one() {
            return Ok((-self, BigInteger::zero()));
        }

        let (u, v) = (self.magnitude(), rhs.magnitude());
        if cmp_mag(u, v) == Ordering::Less {
            trace!("dividend smaller than divisor, quotient is zero");
            return Ok((BigInteger::zero(), self.clone()));
        }

        let (q, r) = if v.len() == 1 {
            trace!("short division of {} limbs", u.len());
            let mut q = self.digits.clone();
            let r = short_divide_in_place(q.as_mut_slice(), v[0]);
            (q, DigitVec::from(vec![r]))
        } else {
            trace!("knuth division of {} limbs by {} limbs", u.len(), v.len());
            divide_knuth(u, v)?
        };

        let q_positive = self.positive == rhs.positive;
        Ok((
            BigInteger::from_digits(q, q_positive),
            BigInteger::from_digits(r, self.positive),
        ))
    }

    /// `self /= rhs`. Fails with [`BigIntError::DivisionByZero`] before `self` is touched.
    pub fn try_div_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        let (q, _) = self.try_div_rem(rhs)?;
        *self = q;
        Ok(self)
    }

    /// `self %= rhs`, equal to `self - (self / rhs) * rhs`.
    pub fn try_rem_assign(&mut self, rhs: &BigInteger) -> Result<&mut Self> {
        let (_, r) = self.try_div_rem(rhs)?;
        *self = r;
        Ok(self)
    }

    pub fn try_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.try_div_rem(rhs).map(|(q, _)| q)
    }

    pub fn try_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.try_div_rem(rhs).map(|(_, r)| r)
    }

    /// Single pass short division by one limb. Returns the quotient (sign of
    /// `self`) and the magnitude of the remainder.
    pub fn div_rem_u32(&self, divisor: u32) -> Result<(BigInteger, u32)> {
        if divisor == 0 {
            debug!("short division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        let mut q = self.digits.clone();
        let r = short_divide_in_place(q.as_mut_slice(), divisor);
        Ok((BigInteger::from_digits(q, self.positive), r))
    }
}

/// `x + y` for magnitudes, sized to the longer operand plus one carry limb.
fn add_mag(x: &[u32], y: &[u32]) -> Result<DigitVec<u32>> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = DigitVec::with_capacity(long.len() + 1)?;

    let mut carry: u64 = 0;
    for (i, &a) in long.iter().enumerate() {
        let b = short.get(i).copied().unwrap_or(0);
        let sum = a as u64 + b as u64 + carry;
        result.push(sum as u32)?;
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        result.push(carry as u32)?;
    }

    Ok(result)
}

/// `big - little` for magnitudes; requires `big >= little`.
fn sub_mag(big: &[u32], little: &[u32]) -> Result<DigitVec<u32>> {
    debug_assert!(cmp_mag(big, little) != Ordering::Less);
    let mut result = DigitVec::with_capacity(big.len())?;

    let mut borrow = false;
    for (i, &a) in big.iter().enumerate() {
        let b = little.get(i).copied().unwrap_or(0);
        let (diff, b1) = a.overflowing_sub(b);
        let (diff, b2) = diff.overflowing_sub(borrow as u32);
        result.push(diff)?;
        borrow = b1 || b2;
    }
    debug_assert!(!borrow);

    Ok(result)
}

/// Schoolbook product into `x.len() + y.len()` limbs.
fn mul_mag(x: &[u32], y: &[u32]) -> Result<DigitVec<u32>> {
    let mut result = DigitVec::from_elem(x.len() + y.len(), 0u32)?;
    let z = result.as_mut_slice();

    for (j, &b) in y.iter().enumerate() {
        if b == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (i, &a) in x.iter().enumerate() {
            // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, never overflows
            let product = a as u64 * b as u64 + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> LIMB_BITS;
        }
        z[j + x.len()] = carry as u32;
    }

    Ok(result)
}

/// `x * k`, always `x.len() + 1` limbs (the top one may be zero).
fn mul_by_limb(x: &[u32], k: u32) -> Result<DigitVec<u32>> {
    let mut result = DigitVec::with_capacity(x.len() + 1)?;
    let mut carry: u64 = 0;
    for &a in x {
        let product = a as u64 * k as u64 + carry;
        result.push(product as u32)?;
        carry = product >> LIMB_BITS;
    }
    result.push(carry as u32)?;
    Ok(result)
}

/// Divides `limbs` in place by `divisor`, returning the remainder.
pub(crate) fn short_divide_in_place(limbs: &mut [u32], divisor: u32) -> u32 {
    debug_assert!(divisor != 0);
    let divisor = divisor as u64;
    let mut rem: u64 = 0;
    for x in limbs.iter_mut().rev() {
        let cur = (rem << LIMB_BITS) | *x as u64;
        *x = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    rem as u32
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// Requires `v.len() >= 2` and `u >= v`. Returns un-normalized quotient and remainder limbs.
fn divide_knuth(u: &[u32], v: &[u32]) -> Result<(DigitVec<u32>, DigitVec<u32>)> {
    let n = v.len();
    let m = u.len() - n;
    debug_assert!(n >= 2);

    // D1 normalize
    // d = b / (v[n-1] + 1) makes the top limb of v * d at least b / 2,
    // so the estimate below is off by at most two. v * d keeps n limbs.
    let d = (LIMB_BASE / (v[n - 1] as u64 + 1)) as u32;
    let mut vn = mul_by_limb(v, d)?;
    let top = vn.pop();
    debug_assert_eq!(top, Some(0));
    let mut un = mul_by_limb(u, d)?;
    let vn = vn.as_slice();
    let v_top = vn[n - 1] as u64;
    let v_next = vn[n - 2] as u64;

    let mut q = DigitVec::from_elem(m + 1, 0u32)?;
    {
        let un = un.as_mut_slice();
        let q = q.as_mut_slice();
        // D2 loop on j
        for j in (0..=m).rev() {
            // D3 calculate qhat from the top two limbs of the window
            let num = ((un[j + n] as u64) << LIMB_BITS) | un[j + n - 1] as u64;
            let mut qhat = num / v_top;
            let mut rhat = num % v_top;
            while qhat >= LIMB_BASE
                || qhat * v_next > ((rhat << LIMB_BITS) | un[j + n - 2] as u64)
            {
                qhat -= 1;
                rhat += v_top;
                if rhat >= LIMB_BASE {
                    break;
                }
            }
            debug_assert!(qhat < LIMB_BASE);

            // D4 multiply and subtract, D5 test remainder
            let window = &mut un[j..=j + n];
            if mul_sub(window, vn, qhat) {
                // D6 add back
                qhat -= 1;
                add_back(window, vn);
            }
            q[j] = qhat as u32;
        }
    }

    // D8 unnormalize
    un.resize(n, 0)?;
    let rem = short_divide_in_place(un.as_mut_slice(), d);
    debug_assert_eq!(rem, 0);

    Ok((q, un))
}

/// `window -= qhat * v`, where `window` has `v.len() + 1` limbs.
/// Returns `true` when the result went negative.
#[inline(always)]
fn mul_sub(window: &mut [u32], v: &[u32], qhat: u64) -> bool {
    let n = v.len();
    let mut carry: u64 = 0;
    let mut borrow = false;
    for i in 0..n {
        let product = qhat * v[i] as u64 + carry;
        carry = product >> LIMB_BITS;
        let (t, b1) = window[i].overflowing_sub(product as u32);
        let (t, b2) = t.overflowing_sub(borrow as u32);
        window[i] = t;
        borrow = b1 || b2;
    }
    let (t, b1) = window[n].overflowing_sub(carry as u32);
    let (t, b2) = t.overflowing_sub(borrow as u32);
    window[n] = t;
    b1 || b2
}

/// `window += v`, dropping the final carry that cancels the earlier borrow.
#[inline(always)]
fn add_back(window: &mut [u32], v: &[u32]) {
    let n = v.len();
    let mut carry: u64 = 0;
    for i in 0..n {
        let sum = window[i] as u64 + v[i] as u64 + carry;
        window[i] = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    window[n] = window[n].wrapping_add(carry as u32);
}
