//! Addition operator trait implementation
//!

use crate::*;
use stdlib::iter::Sum;


impl<'a, 'b> Add<&'b BigNum> for &'a BigNum {
    type Output = BigNum;

    #[inline]
    fn add(self, rhs: &BigNum) -> BigNum {
        impl_ops::unwrap_arithmetic(arithmetic::add(self, rhs))
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigNum, add);
forward_op_assign_to_ref_ref!(impl AddAssign for BigNum, add_assign, Add::add);


impl Sum for BigNum {
    #[inline]
    fn sum<I: Iterator<Item = BigNum>>(iter: I) -> BigNum {
        iter.fold(BigNum::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a BigNum> for BigNum {
    #[inline]
    fn sum<I: Iterator<Item = &'a BigNum>>(iter: I) -> BigNum {
        iter.fold(BigNum::zero(), |acc, n| acc + n)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    include!("test_macros.rs");

    #[test]
    fn sum_of_owned() {
        let values = vec![bignum!("999"), bignum!("1"), bignum!("9000")];
        let total: BigNum = values.into_iter().sum();
        assert_eq!(total, bignum!("10000"));
    }

    #[test]
    fn sum_of_refs() {
        let values = [bignum!("12345678901234567890"), bignum!("98765432109876543210")];
        let total: BigNum = values.iter().sum();
        assert_eq!(total, bignum!("111111111011111111100"));
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let total: BigNum = Vec::<BigNum>::new().into_iter().sum();
        assert!(total.is_zero());
    }
}
