//! Code for implementing From/To BigNum

use crate::*;
use stdlib::convert::TryFrom;


impl BigNum {
    /// Build from unsigned integer
    pub(crate) fn from_unsigned(mut n: u128) -> BigNum {
        let radix = u128::from(arithmetic::RADIX);

        // u128::MAX has 39 decimal digits
        let mut digits = Vec::with_capacity(39);
        loop {
            digits.push((n % radix) as u8);
            n /= radix;
            if n == 0 {
                break;
            }
        }
        arithmetic::from_little_endian(digits)
    }
}


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for BigNum {
            fn from(n: $t) -> Self {
                BigNum::from_unsigned(n as u128)
            }
        }

        impl From<&$t> for BigNum {
            fn from(n: &$t) -> Self {
                BigNum::from_unsigned(*n as u128)
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);


impl From<&BigUint> for BigNum {
    fn from(n: &BigUint) -> Self {
        // to_radix_be returns [0] for zero
        BigNum::from_trusted_digits(n.to_radix_be(10))
    }
}

impl From<BigUint> for BigNum {
    #[inline]
    fn from(n: BigUint) -> Self {
        BigNum::from(&n)
    }
}

impl From<&BigNum> for BigUint {
    #[inline]
    fn from(n: &BigNum) -> Self {
        n.to_biguint()
    }
}

impl From<BigNum> for BigUint {
    #[inline]
    fn from(n: BigNum) -> Self {
        n.to_biguint()
    }
}

impl TryFrom<Vec<u8>> for BigNum {
    type Error = ArithmeticError;

    #[inline]
    fn try_from(digits: Vec<u8>) -> Result<Self, ArithmeticError> {
        BigNum::from_digits(digits)
    }
}

impl TryFrom<&[u8]> for BigNum {
    type Error = ArithmeticError;

    fn try_from(digits: &[u8]) -> Result<Self, ArithmeticError> {
        validate_digits(digits)?;
        let mut buffer = arithmetic::digit_buffer(digits.len())?;
        buffer.extend_from_slice(digits);
        Ok(BigNum::from_trusted_digits(buffer))
    }
}

impl From<BigNum> for Vec<u8> {
    #[inline]
    fn from(n: BigNum) -> Self {
        n.into_digits()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("test_macros.rs");

    macro_rules! impl_case {
        ($t:ident : $input:expr => $expected:literal) => {
            paste! {
                #[test]
                fn [< from_ $t _ $expected >]() {
                    let n = BigNum::from($input as $t);
                    assert_eq!(n.to_string(), $expected);
                }
            }
        };
    }

    impl_case!(u8: 0 => "0");
    impl_case!(u8: 255 => "255");
    impl_case!(u16: 1000 => "1000");
    impl_case!(u32: 4294967295u32 => "4294967295");
    impl_case!(u64: 18446744073709551615u64 => "18446744073709551615");
    impl_case!(u128: u128::MAX => "340282366920938463463374607431768211455");
    impl_case!(usize: 10 => "10");

    #[test]
    fn biguint_round_trip() {
        let s = "98765432109876543210987654321098765432109876543210";
        let big: BigUint = s.parse().unwrap();
        let n = BigNum::from(&big);
        assert_eq!(n, bignum!("98765432109876543210987654321098765432109876543210"));
        assert_eq!(BigUint::from(n), big);
    }

    #[test]
    fn biguint_zero() {
        let n = BigNum::from(BigUint::zero());
        assert_digits_eq!(n, [0]);
        assert_eq!(BigNum::zero().to_biguint(), BigUint::zero());
    }

    #[test]
    fn try_from_slice() {
        let n = BigNum::try_from(&[4u8, 2][..]).unwrap();
        assert_eq!(n, bignum!("42"));

        let err = BigNum::try_from(&[4u8, 12][..]).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::InvalidOperand(InvalidOperand::DigitOutOfRange { index: 1, value: 12 })
        );
    }

    #[test]
    fn try_from_vec_rejects_empty() {
        let err = BigNum::try_from(Vec::<u8>::new()).unwrap_err();
        assert_eq!(err, ArithmeticError::InvalidOperand(InvalidOperand::Empty));
    }
}
