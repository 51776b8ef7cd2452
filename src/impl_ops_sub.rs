//!
//! Subtraction operator trait implementation
//!
//! Like primitive unsigned integers, `a - b` panics when `b > a`.
//! Use `bignum::sub` or `CheckedSub` for a fallible version.
//!

use crate::*;


impl<'a, 'b> Sub<&'b BigNum> for &'a BigNum {
    type Output = BigNum;

    #[inline]
    fn sub(self, rhs: &BigNum) -> BigNum {
        impl_ops::unwrap_arithmetic(arithmetic::sub(self, rhs))
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigNum, sub);
forward_op_assign_to_ref_ref!(impl SubAssign for BigNum, sub_assign, Sub::sub);


#[cfg(test)]
mod test {
    use super::*;

    include!("test_macros.rs");

    #[test]
    fn sub_assign() {
        let mut n = bignum!("1000000");
        n -= bignum!("1");
        assert_eq!(n, bignum!("999999"));
        n -= &bignum!("999999");
        assert!(n.is_zero());
    }

    #[test]
    fn saturating_sub_clamps_to_zero() {
        let a = bignum!("99");
        let b = bignum!("101");
        assert_eq!(a.saturating_sub(&b), BigNum::zero());
        assert_eq!(b.saturating_sub(&a), bignum!("2"));
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn sub_assign_underflow_panics() {
        let mut n = bignum!("0");
        n -= bignum!("1");
    }
}
