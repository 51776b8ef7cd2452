//! Code for num_traits

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero};

use crate::{arithmetic, BigNum};


impl Zero for BigNum {
    #[inline]
    fn zero() -> BigNum {
        BigNum::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigNum::is_zero(self)
    }
}

impl One for BigNum {
    #[inline]
    fn one() -> BigNum {
        BigNum::one()
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigNum::is_one(self)
    }
}

impl CheckedAdd for BigNum {
    #[inline]
    fn checked_add(&self, rhs: &BigNum) -> Option<BigNum> {
        arithmetic::add(self, rhs).ok()
    }
}

/// Returns None if `rhs > self`
impl CheckedSub for BigNum {
    #[inline]
    fn checked_sub(&self, rhs: &BigNum) -> Option<BigNum> {
        arithmetic::sub(self, rhs).ok()
    }
}

impl CheckedMul for BigNum {
    #[inline]
    fn checked_mul(&self, rhs: &BigNum) -> Option<BigNum> {
        arithmetic::mul(self, rhs).ok()
    }
}


impl ToPrimitive for BigNum {
    fn to_i64(&self) -> Option<i64> {
        self.to_u128().and_then(|n| n.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| n.to_i128())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| n.to_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        let radix = u128::from(arithmetic::RADIX);
        self.digits()
            .iter()
            .try_fold(0u128, |acc, &d| acc.checked_mul(radix)?.checked_add(u128::from(d)))
    }

    fn to_f64(&self) -> Option<f64> {
        let n = self.digits().iter().fold(0.0, |acc, &d| acc * 10.0 + f64::from(d));
        Some(n)
    }
}

/// Negative values have no BigNum representation
impl FromPrimitive for BigNum {
    #[inline]
    fn from_i64(n: i64) -> Option<BigNum> {
        u64::try_from(n).ok().map(BigNum::from)
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigNum> {
        u128::try_from(n).ok().map(BigNum::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigNum> {
        Some(BigNum::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigNum> {
        Some(BigNum::from(n))
    }
}
