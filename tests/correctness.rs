use big_integer::{BigIntError, BigInteger};

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

const TEN_POW_91: &str = "10000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
const NEG_TEN_POW_90: &str = "-1000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
const TEN_POW_38: &str = "100000000000000000000000000000000000000";

#[test]
fn one_plus_one() {
    assert_eq!(BigInteger::from(2), BigInteger::from(1) + BigInteger::from(1));
    assert_eq!(BigInteger::from(2), BigInteger::from(1) + 1);
    assert_eq!(BigInteger::from(2), 1 + BigInteger::from(1));
}

#[test]
fn default_is_zero() {
    let x = BigInteger::default();
    assert_eq!(BigInteger::from(0), x);
    assert_eq!(x.to_string(), "0");
}

#[test]
fn clone_is_independent() {
    let mut x = BigInteger::from(2);
    let y = x.clone();
    x = BigInteger::from(4);
    assert_eq!(2, y);
    assert_eq!(4, x);
}

#[test]
fn invalid_strings() {
    for s in ["abc", "123x", "", "-", "-x", "123-456", "--5", "++5", "+5", " 1"] {
        assert!(
            matches!(s.parse::<BigInteger>(), Err(BigIntError::InvalidArgument(_))),
            "{:?} should be rejected",
            s
        );
    }
}

#[test]
fn self_assignment() {
    let mut a = BigInteger::from(5);
    a = a.clone();
    assert!(a == 5);
}

#[test]
fn comparisons() {
    let a = BigInteger::from(100);
    let b = BigInteger::from(100);
    let c = BigInteger::from(200);
    let d = BigInteger::from(-100);

    assert!(a == b);
    assert!(a != c);
    assert!(a < c);
    assert!(c > a);
    assert!(a <= b);
    assert!(c >= a);
    assert!(d != 0);
    assert!(d < a);
    assert!(BigInteger::from(1) != -BigInteger::from(1));
    assert!(BigInteger::from(0) == -BigInteger::from(0));
    assert!(big(NEG_TEN_POW_90) < big(TEN_POW_38));
    assert!(big(TEN_POW_91) > big(TEN_POW_38));
}

#[test]
fn compound_assignment_chains() {
    let mut a = BigInteger::from(5);
    let b = BigInteger::from(1);
    *a.try_add_assign(&b).unwrap() += &b;
    assert_eq!(7, a);

    let mut a = BigInteger::from(5);
    *a.try_sub_assign(&b).unwrap() -= &b;
    assert_eq!(3, a);

    let mut a = BigInteger::from(5);
    let two = BigInteger::from(2);
    *a.try_mul_assign(&two).unwrap() *= &two;
    assert_eq!(20, a);

    let mut a = BigInteger::from(100);
    *a.try_div_assign(&two).unwrap() /= &two;
    assert_eq!(25, a);

    let mut a = BigInteger::from(64);
    *a.try_shr_assign(&two).unwrap() >>= 1;
    assert_eq!(8, a);
}

#[test]
fn signed_arithmetic() {
    let mut a = BigInteger::from(5);
    a += BigInteger::from(-20);
    assert_eq!(a, -15);
    a -= -100;
    assert_eq!(a, 85);
    assert_eq!(BigInteger::from(-5) * BigInteger::from(20), -100);
}

#[test]
fn division_truncates() {
    assert_eq!(BigInteger::from(5) / BigInteger::from(20), 0);
    assert_eq!(BigInteger::from(-20) / 5, -4);
    assert_eq!(BigInteger::from(-20) % 5, 0);
    assert_eq!(BigInteger::from(23) / 5, 4);
    assert_eq!(BigInteger::from(23) % 5, 3);
    assert_eq!(BigInteger::from(23) / -5, -4);
    assert_eq!(BigInteger::from(-23) / 5, -4);
    assert_eq!(BigInteger::from(23) % -5, 3);
    assert_eq!(BigInteger::from(-23) % 5, -3);
}

#[test]
fn division_by_zero() {
    let a = BigInteger::from(7);
    let zero = BigInteger::from(0);
    assert_eq!(a.try_div(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(a.try_rem(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(big(TEN_POW_91).try_div_rem(&zero), Err(BigIntError::DivisionByZero));
    assert_eq!(a.div_rem_u32(0), Err(BigIntError::DivisionByZero));
}

#[test]
fn increment_and_decrement() {
    let mut a = BigInteger::from(42);
    let pre = a.increment().clone();
    let post = a.post_increment();
    assert_eq!(43, pre);
    assert_eq!(43, post);
    assert_eq!(44, a);

    let mut a = BigInteger::from(42);
    let pre = a.decrement().clone();
    let post = a.post_decrement();
    assert_eq!(41, pre);
    assert_eq!(41, post);
    assert_eq!(40, a);

    let mut a = BigInteger::from(0);
    a.decrement();
    assert_eq!(a, -1);
    a.increment();
    assert!(a.is_zero() && !a.is_negative());
}

#[test]
fn bitwise() {
    let a = BigInteger::from(0x55);
    let b = BigInteger::from(0xaa);
    assert_eq!(&a & &b, 0);
    assert_eq!(&a | &b, 0xff);
    assert_eq!(&b & -1, 0xaa);
    assert_eq!(&a & (0xcc - 256), 0x44);
    assert_eq!(&a | (&b - 256), -1);
    assert_eq!(BigInteger::from(0x55) ^ 0xcc, 0x99);
    assert_eq!(BigInteger::from(0xaa) ^ (BigInteger::from(0xcc) - 256), 0x66 - 256);
    assert_eq!(!&b, -&b - 1);
}

#[test]
fn shifts() {
    let mut a = BigInteger::from(23);
    assert_eq!(&a << 5, 23 * 32);
    a <<= 5;
    assert_eq!(a, 23 * 32);

    let mut a = BigInteger::from(-1234);
    assert_eq!(&a >> 3, -155);
    a >>= 3;
    assert_eq!(a, -155);

    assert_eq!(BigInteger::from(-1) >> 100, -1);
    assert_eq!(BigInteger::from(1) >> 100, 0);
}

#[test]
fn shift_errors() {
    let a = BigInteger::from(1);
    assert!(matches!(
        a.try_shl(&BigInteger::from(-1)),
        Err(BigIntError::InvalidArgument(_))
    ));
    assert!(matches!(
        a.try_shr(&BigInteger::from(-5)),
        Err(BigIntError::InvalidArgument(_))
    ));
    let huge = BigInteger::from(u128::MAX);
    assert!(matches!(a.try_shl(&huge), Err(BigIntError::RangeError(_))));
    assert!(matches!(a.try_shr(&huge), Err(BigIntError::RangeError(_))));
}

#[test]
fn add_long() {
    let c = big("10000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000");
    assert_eq!(c, big(TEN_POW_91) + big(TEN_POW_38));

    let b = big(&NEG_TEN_POW_90[1..]);
    assert_eq!(big(NEG_TEN_POW_90) + &b, 0);

    let c = big("-999999999999999999999999999999999999999999999999999900000000000000000000000000000000000000");
    assert_eq!(c, big(NEG_TEN_POW_90) + big(TEN_POW_38));
}

#[test]
fn add_long_pow2() {
    let a = big("18446744073709551616");
    let b = big("-18446744073709551616");
    let c = big("36893488147419103232");
    assert_eq!(c, &a + &a);
    assert_eq!(a, &b + &c);
    assert_eq!(a, &c + &b);
}

#[test]
fn sub_long() {
    let c = big("9999999999999999999999999999999999999999999999999999900000000000000000000000000000000000000");
    assert_eq!(c, big(TEN_POW_91) - big(TEN_POW_38));
    assert_eq!(big("36893488147419103232") - big("36893488147419103231"), 1);
}

#[test]
fn mul_long() {
    let c = big(&format!("{}{}", TEN_POW_91, "00000000000000000000000000000000000000"));
    assert_eq!(c, big(TEN_POW_91) * big(TEN_POW_38));

    let c = big(&format!("{}{}", NEG_TEN_POW_90, "00000000000000000000000000000000000000"));
    assert_eq!(c, big(NEG_TEN_POW_90) * big(TEN_POW_38));

    let a = big("-100000000000000000000000000");
    let c = big("10000000000000000000000000000000000000000000000000000");
    assert_eq!(c, &a * &a);
}

#[test]
fn mul_long_pow2() {
    let a = big("18446744073709551616");
    let b = big("340282366920938463463374607431768211456");
    let c = big("115792089237316195423570985008687907853269984665640564039457584007913129639936");
    assert_eq!(b, &a * &a);
    assert_eq!(c, &b * &b);
}

#[test]
fn div_long() {
    let c = big("100000000000000000000000000000000000000000000000000000");
    assert_eq!(c, big(TEN_POW_91) / big(TEN_POW_38));

    let neg_a = big(&format!("-{}", TEN_POW_91));
    assert_eq!(-&c, &neg_a / big(TEN_POW_38));
    assert_eq!(c, &neg_a / -big(TEN_POW_38));
    assert_eq!(&neg_a % big(TEN_POW_38), 0);
}

#[test]
fn div_rem_identity_long() {
    let a = big("-3417856182746231874623148723164812376512852437523846123876");
    let b = big("12341236412857618761234871264871");
    let (q, r) = a.try_div_rem(&b).unwrap();
    assert_eq!(&q * &b + &r, a);
    assert!(r.is_negative());
    assert!(r.abs() < b.abs());
}

#[test]
fn negation_long() {
    let a = big("10000000000000000000000000000000000000000000000000000");
    let c = big("-10000000000000000000000000000000000000000000000000000");
    assert_eq!(-&a, c);
    assert_eq!(a, -c);
}

#[test]
fn shl_long() {
    assert_eq!(
        big("1091951238831590836520041079875950759639875963123939936"),
        big("34123476213487213641251283746123461238746123847623123") << 5
    );
    assert_eq!(
        big("-104637598388784443044449444577438556334703518260785595038524928"),
        big("-817481237412378461284761285761238721364871236412387461238476") << 7
    );
    assert_eq!(
        big("26502603392713913241969902328696116541550413468869982914247384891392"),
        big("12341236412857618761234871264871264128736412836643859238479") << 31
    );
}

#[test]
fn shr_long() {
    assert_eq!(
        big("4730073393008085198307104580698364137020387111323398632330851"),
        big("151362348576258726345827346582347652384652387562348756234587245") >> 5
    );
    assert_eq!(
        big("1118311528397465815295799577134738919815767762822175104787"),
        big("143143875634875624357862345873246581736418273641238413412741") >> 7
    );
    assert_eq!(
        big("-1591563309890326054125627839548891585559049824963"),
        big("-3417856182746231874623148723164812376512852437523846123876") >> 31
    );
}

#[test]
fn string_conv() {
    assert_eq!("100", big("100").to_string());
    assert_eq!("100", big("0100").to_string());
    assert_eq!("0", big("0").to_string());
    assert_eq!("0", big("-0").to_string());
    assert_eq!("0", big("-0000000000000000000000").to_string());
    assert_eq!("-1000000000000000", big("-1000000000000000").to_string());
    assert_eq!("2147483647", big("2147483647").to_string());
    assert_eq!("2147483648", big("2147483648").to_string());
    assert_eq!("-2147483649", big("-2147483649").to_string());
    assert_eq!(TEN_POW_91, big(TEN_POW_91).to_decimal_string());
}

#[test]
fn converting_ctors() {
    let a = BigInteger::from(1);
    assert_eq!(a, BigInteger::from(1u32));
    assert_eq!(a, BigInteger::from(1i64));
    assert_eq!(a, BigInteger::from(1u64));
    assert_eq!(a, BigInteger::from(1usize));
    assert_eq!(a, BigInteger::from(1u128));

    let a = BigInteger::from(-1);
    assert_eq!(a, BigInteger::from(-1i64));
    assert_eq!(a, BigInteger::from(-1i128));
    assert_eq!(a, BigInteger::from(-1isize));

    assert_eq!(BigInteger::from(i32::MIN).to_string(), i32::MIN.to_string());
    assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn take_leaves_zero() {
    let mut a = big(TEN_POW_91);
    let b = std::mem::take(&mut a);
    assert!(a.is_zero());
    assert_eq!(b.to_string(), TEN_POW_91);
}
