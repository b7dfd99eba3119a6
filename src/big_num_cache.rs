use lazy_static::*;

use crate::BigInteger;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInteger::from_raw(vec![n], true))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT as u32)
        .map(|n| BigInteger::from_raw(vec![n], n == 0))
        .collect();
}
