//!
//! Multiplication operator trait implementation
//!

use crate::*;
use stdlib::iter::Product;


impl<'a, 'b> Mul<&'b BigNum> for &'a BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: &BigNum) -> BigNum {
        impl_ops::unwrap_arithmetic(arithmetic::mul(self, rhs))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigNum, mul);
forward_op_assign_to_ref_ref!(impl MulAssign for BigNum, mul_assign, Mul::mul);


impl Product for BigNum {
    #[inline]
    fn product<I: Iterator<Item = BigNum>>(iter: I) -> BigNum {
        iter.fold(BigNum::one(), |acc, n| acc * n)
    }
}

impl<'a> Product<&'a BigNum> for BigNum {
    #[inline]
    fn product<I: Iterator<Item = &'a BigNum>>(iter: I) -> BigNum {
        iter.fold(BigNum::one(), |acc, n| acc * n)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    include!("test_macros.rs");

    #[test]
    fn factorial_25() {
        let total: BigNum = (1u8..=25).map(BigNum::from).product();
        assert_eq!(total, bignum!("15511210043330985984000000"));
    }

    #[test]
    fn product_of_empty_is_one() {
        let total: BigNum = Vec::<BigNum>::new().iter().product();
        assert!(total.is_one());
    }

    #[test]
    fn square_and_pow() {
        let n = bignum!("111111111");
        assert_eq!(n.square(), bignum!("12345678987654321"));
        assert_eq!(bignum!("2").pow(100), bignum!("1267650600228229401496703205376"));
        assert_eq!(bignum!("987").pow(0), BigNum::one());
        assert_eq!(bignum!("0").pow(5), BigNum::zero());
    }

    #[test]
    fn shift_left() {
        assert_eq!(bignum!("42").shift_left(3), bignum!("42000"));
        assert_eq!(bignum!("0").shift_left(3), bignum!("0"));
    }
}
