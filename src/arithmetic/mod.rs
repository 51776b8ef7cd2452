//! arithmetic routines
//!
//! All algorithms read their operands' big-endian digits from the
//! least significant end, push result digits into a little-endian
//! buffer, and reverse that buffer once when the result is complete.
//!

use crate::*;
use num_integer::div_rem;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;

pub use self::addition::add;
pub use self::subtraction::sub;
pub use self::multiplication::{mul, mul_single};


/// Numeric base of every digit
pub(crate) const RADIX: u8 = 10;


/// Compare two numbers, returning the ordering of `a` relative to `b`
///
/// Canonical numbers with more digits are always larger, so digits are
/// only examined (most significant first) when lengths are equal.
///
/// `Ordering` is `#[repr(i8)]`; `compare(a, b) as i8` yields -1, 0 or 1.
///
pub fn compare(a: &BigNum, b: &BigNum) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    a.digits()
     .iter()
     .zip(b.digits().iter())
     .map(|(x, y)| x.cmp(y))
     .find(|&ord| ord != Ordering::Equal)
     .unwrap_or(Ordering::Equal)
}


/// Reclaim the storage held by `value`
///
/// Accepts `None` as a no-op, so releasing an absent value is safe.
///
#[inline]
pub fn release<T: Into<Option<BigNum>>>(value: T) {
    drop(value.into());
}


/// Add carry to given number, returning the low digit and storing
/// overflow back in carry
///
/// `n + carry` must be less than 100.
///
#[inline]
pub(crate) fn split_carry(n: u8, carry: &mut u8) -> u8 {
    let (hi, lo) = div_rem(n + *carry, RADIX);
    debug_assert!(hi < RADIX);
    *carry = hi;
    lo
}

/// Calculate `a - b - borrow`, storing the borrow needed by the next
/// more-significant digit
#[inline]
pub(crate) fn sub_borrow(a: u8, b: u8, borrow: &mut u8) -> u8 {
    debug_assert!(*borrow <= 1);

    // lend ten up-front so the difference never goes negative
    let diff = a + RADIX - *borrow - b;
    if diff < RADIX {
        *borrow = 1;
        diff
    } else {
        *borrow = 0;
        diff - RADIX
    }
}


/// Allocate empty little-endian digit buffer with room for `capacity` digits
pub(crate) fn digit_buffer(capacity: usize) -> Result<Vec<u8>, ArithmeticError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity)?;
    Ok(buffer)
}

/// Convert little-endian buffer of digits into canonical BigNum
///
/// Zeros at the significant end are dropped (keeping at least one digit)
/// before the buffer is reversed into big-endian order.
///
pub(crate) fn from_little_endian(mut digits: Vec<u8>) -> BigNum {
    let significant = digits.iter().rposition(|&d| d != 0).map_or(1, |idx| idx + 1);
    digits.truncate(significant);
    if digits.is_empty() {
        digits.push(0);
    }
    digits.reverse();
    BigNum::from_trusted_digits(digits)
}


#[cfg(test)]
mod test_compare {
    use super::*;

    include!("../test_macros.rs");

    macro_rules! impl_case {
        ($name:ident: $a:literal <=> $b:literal == $expected:ident) => {
            #[test]
            fn $name() {
                let a = bignum!($a);
                let b = bignum!($b);
                assert_eq!(compare(&a, &b), Ordering::$expected);
                assert_eq!(compare(&b, &a), Ordering::$expected.reverse());
            }
        };
    }

    impl_case!(case_123_99: "123" <=> "99" == Greater);
    impl_case!(case_0_0: "0" <=> "0" == Equal);
    impl_case!(case_0_1: "0" <=> "1" == Less);
    impl_case!(case_456_456: "456" <=> "456" == Equal);
    impl_case!(case_455_456: "455" <=> "456" == Less);
    impl_case!(case_900_199: "900" <=> "199" == Greater);
    impl_case!(case_10000000000_9999999999: "10000000000" <=> "9999999999" == Greater);
    impl_case!(case_31415926535_31415926536: "31415926535" <=> "31415926536" == Less);

    #[test]
    fn ordering_maps_to_signed_unit() {
        let a = digits!(1, 2, 3);
        let b = digits!(9, 9);
        assert_eq!(compare(&a, &b) as i8, 1);
        assert_eq!(compare(&b, &a) as i8, -1);
        assert_eq!(compare(&a, &a) as i8, 0);
    }
}

#[cfg(test)]
mod test_helpers {
    use super::*;

    #[test]
    fn split_carry_below_radix() {
        let mut carry = 0;
        assert_eq!(split_carry(7, &mut carry), 7);
        assert_eq!(carry, 0);
    }

    #[test]
    fn split_carry_overflow() {
        let mut carry = 1;
        assert_eq!(split_carry(18, &mut carry), 9);
        assert_eq!(carry, 1);

        let mut carry = 8;
        assert_eq!(split_carry(81, &mut carry), 9);
        assert_eq!(carry, 8);
    }

    #[test]
    fn sub_borrow_cases() {
        let mut borrow = 0;
        assert_eq!(sub_borrow(5, 3, &mut borrow), 2);
        assert_eq!(borrow, 0);

        assert_eq!(sub_borrow(1, 9, &mut borrow), 2);
        assert_eq!(borrow, 1);

        assert_eq!(sub_borrow(0, 0, &mut borrow), 9);
        assert_eq!(borrow, 1);

        assert_eq!(sub_borrow(1, 0, &mut borrow), 0);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn from_little_endian_trims_significant_zeros() {
        let n = from_little_endian(vec![2, 0, 0]);
        assert_eq!(n.digits(), &[2]);

        let n = from_little_endian(vec![0, 0, 0]);
        assert_eq!(n.digits(), &[0]);

        let n = from_little_endian(vec![0, 5, 1]);
        assert_eq!(n.digits(), &[1, 5, 0]);
    }

    #[test]
    fn release_accepts_none() {
        release(None::<BigNum>);
        release(BigNum::one());
        release(Some(BigNum::zero()));
    }
}
