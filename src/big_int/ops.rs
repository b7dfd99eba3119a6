//! Operator traits. Each binary operator copies the left operand (when it is
//! borrowed) and applies the matching `try_*_assign` method.
//!
//! # Panics
//! The operators panic where the `try_*` methods return an error:
//! `/` and `%` by zero, shifts by a negative amount or by an amount that does
//! not fit in `usize`, and allocation failure.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use super::BigInteger;
use crate::error::unwrap_op;

macro_rules! impl_binop {
    ($($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $try_assign: ident;)*) => {
    $(
    impl $OpAssign<&BigInteger> for BigInteger {
        #[track_caller]
        fn $op_assign(&mut self, rhs: &BigInteger) {
            unwrap_op(self.$try_assign(rhs));
        }
    }

    impl $OpAssign for BigInteger {
        #[track_caller]
        fn $op_assign(&mut self, rhs: BigInteger) {
            self.$op_assign(&rhs);
        }
    }

    impl $Op<&BigInteger> for BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(mut self, rhs: &BigInteger) -> Self::Output {
            self.$op_assign(rhs);
            self
        }
    }

    impl $Op for BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(mut self, rhs: BigInteger) -> Self::Output {
            self.$op_assign(&rhs);
            self
        }
    }

    impl $Op<&BigInteger> for &BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(self, rhs: &BigInteger) -> Self::Output {
            self.clone().$op(rhs)
        }
    }

    impl $Op<BigInteger> for &BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(self, rhs: BigInteger) -> Self::Output {
            self.clone().$op(&rhs)
        }
    }
    )*
    };
}

impl_binop! {
    Add, add, AddAssign, add_assign, try_add_assign;
    Sub, sub, SubAssign, sub_assign, try_sub_assign;
    Mul, mul, MulAssign, mul_assign, try_mul_assign;
    Div, div, DivAssign, div_assign, try_div_assign;
    Rem, rem, RemAssign, rem_assign, try_rem_assign;
    BitAnd, bitand, BitAndAssign, bitand_assign, try_bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign, try_bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign, try_bitxor_assign;
}

// native integers on either side convert through `From`
macro_rules! impl_binop_native {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident; $($t: ty),*) => {
    $(
    impl $OpAssign<$t> for BigInteger {
        #[track_caller]
        fn $op_assign(&mut self, rhs: $t) {
            self.$op_assign(&BigInteger::from(rhs));
        }
    }

    impl $Op<$t> for BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(mut self, rhs: $t) -> Self::Output {
            self.$op_assign(rhs);
            self
        }
    }

    impl $Op<$t> for &BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn $op(self, rhs: $t) -> Self::Output {
            self.clone().$op(rhs)
        }
    }

    impl $Op<BigInteger> for $t {
        type Output = BigInteger;

        #[track_caller]
        fn $op(self, rhs: BigInteger) -> Self::Output {
            BigInteger::from(self).$op(&rhs)
        }
    }

    impl $Op<&BigInteger> for $t {
        type Output = BigInteger;

        #[track_caller]
        fn $op(self, rhs: &BigInteger) -> Self::Output {
            BigInteger::from(self).$op(rhs)
        }
    }
    )*
    };
}

macro_rules! impl_all_binop_native {
    ($($t: ty),*) => {
        impl_binop_native!(Add, add, AddAssign, add_assign; $($t),*);
        impl_binop_native!(Sub, sub, SubAssign, sub_assign; $($t),*);
        impl_binop_native!(Mul, mul, MulAssign, mul_assign; $($t),*);
        impl_binop_native!(Div, div, DivAssign, div_assign; $($t),*);
        impl_binop_native!(Rem, rem, RemAssign, rem_assign; $($t),*);
        impl_binop_native!(BitAnd, bitand, BitAndAssign, bitand_assign; $($t),*);
        impl_binop_native!(BitOr, bitor, BitOrAssign, bitor_assign; $($t),*);
        impl_binop_native!(BitXor, bitxor, BitXorAssign, bitxor_assign; $($t),*);
    };
}
impl_all_binop_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// 实现移位
impl ShlAssign<&BigInteger> for BigInteger {
    #[track_caller]
    fn shl_assign(&mut self, amount: &BigInteger) {
        unwrap_op(self.try_shl_assign(amount));
    }
}

impl ShrAssign<&BigInteger> for BigInteger {
    #[track_caller]
    fn shr_assign(&mut self, amount: &BigInteger) {
        unwrap_op(self.try_shr_assign(amount));
    }
}

impl Shl<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn shl(self, amount: &BigInteger) -> Self::Output {
        unwrap_op(self.try_shl(amount))
    }
}

impl Shr<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn shr(self, amount: &BigInteger) -> Self::Output {
        unwrap_op(self.try_shr(amount))
    }
}

impl Shl<&BigInteger> for BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn shl(self, amount: &BigInteger) -> Self::Output {
        &self << amount
    }
}

impl Shr<&BigInteger> for BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn shr(self, amount: &BigInteger) -> Self::Output {
        &self >> amount
    }
}

macro_rules! impl_shift_native {
    ($($t: ty),*) => {
    $(
    impl Shl<$t> for &BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn shl(self, amount: $t) -> Self::Output {
            self << &BigInteger::from(amount)
        }
    }

    impl Shr<$t> for &BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn shr(self, amount: $t) -> Self::Output {
            self >> &BigInteger::from(amount)
        }
    }

    impl Shl<$t> for BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn shl(self, amount: $t) -> Self::Output {
            &self << amount
        }
    }

    impl Shr<$t> for BigInteger {
        type Output = BigInteger;

        #[track_caller]
        fn shr(self, amount: $t) -> Self::Output {
            &self >> amount
        }
    }

    impl ShlAssign<$t> for BigInteger {
        #[track_caller]
        fn shl_assign(&mut self, amount: $t) {
            *self <<= &BigInteger::from(amount);
        }
    }

    impl ShrAssign<$t> for BigInteger {
        #[track_caller]
        fn shr_assign(&mut self, amount: $t) {
            *self >>= &BigInteger::from(amount);
        }
    }
    )*
    };
}
impl_shift_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        self.change_sign();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn not(self) -> Self::Output {
        unwrap_op(self.try_not())
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    #[track_caller]
    fn not(self) -> Self::Output {
        unwrap_op(self.try_not())
    }
}

// 与原生整数比较
macro_rules! impl_cmp_native {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for BigInteger {
        fn eq(&self, other: &$t) -> bool {
            *self == BigInteger::from(*other)
        }
    }

    impl PartialEq<BigInteger> for $t {
        fn eq(&self, other: &BigInteger) -> bool {
            BigInteger::from(*self) == *other
        }
    }

    impl PartialOrd<$t> for BigInteger {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            Some(self.cmp(&BigInteger::from(*other)))
        }
    }

    impl PartialOrd<BigInteger> for $t {
        fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
            Some(BigInteger::from(*self).cmp(other))
        }
    }
    )*
    };
}
impl_cmp_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
