//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers in sign-magnitude form. Bitwise
//!   operators and shifts behave as if the value were represented in two's-complement notation.
//! - [`DigitVec`]: the growable limb buffer backing the magnitude.
//!
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b = BigInteger::from(-900000000000i64);
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a / &b).to_string(), "-11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&b >> 10u32).to_string(), "-878906250");
//! ```
//!
//! Every operator has a fallible `try_*` counterpart returning [`Result`]; the
//! operators themselves panic on division by zero, bad shift amounts and
//! allocation failure.

mod big_int;
mod big_num_cache;
mod big_num_constants;
pub mod digit_vec;
mod error;
pub mod helpers;

pub use big_int::BigInteger;
pub use digit_vec::DigitVec;
pub use error::{BigIntError, Result};
