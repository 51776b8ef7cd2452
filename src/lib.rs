// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Big Decimal Natural Number
//!
//! `BigNum` stores any non-negative integer as a sequence of base-10
//! digits, most significant digit first. Arithmetic is done the way it
//! is done on paper: digit by digit, propagating carries and borrows,
//! and building products from single-digit partial products.
//!
//! Every value is kept in canonical form: at least one digit, and no
//! leading zeros unless the value is exactly zero (`[0]`).
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other unsigned numbers. Fallible versions of
//! each operation are available as free functions returning `Result`.
//!
//! # Example
//!
//! ```
//! use bignum::BigNum;
//! use std::str::FromStr;
//!
//! let a = BigNum::from_str("123").unwrap();
//! let b = BigNum::from_str("456").unwrap();
//!
//! assert_eq!((&a * &b).to_string(), "56088");
//! assert_eq!(bignum::sub(&a, &b), Err(bignum::ArithmeticError::NegativeResult));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::fmt;
use self::stdlib::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use self::stdlib::str::FromStr;
use self::stdlib::TryReserveError;
use self::stdlib::Vec;

use num_bigint::BigUint;
pub use num_traits::{FromPrimitive, One, ToPrimitive, Zero};


// const DEBUG_DIGIT_LIMIT: usize = ${RUST_BIGNUM_DEBUG_DIGIT_LIMIT} or 40;
include!(concat!(env!("OUT_DIR"), "/debug_digit_limit.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

mod digit;
pub use digit::Digit;

// compare, add, sub, mul_single, mul
pub mod arithmetic;
pub use arithmetic::{add, compare, mul, mul_single, release, sub};

// From<T>, To<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;

// PartialOrd, Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Display, Debug
mod impl_fmt;

mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;


/// An arbitrary precision non-negative decimal integer
///
/// Digits are stored most-significant first, and always in canonical
/// form (see crate documentation).
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigNum {
    digits: Vec<u8>,
}

impl BigNum {
    /// The value zero, `[0]`
    #[inline]
    pub fn zero() -> BigNum {
        BigNum { digits: vec![0] }
    }

    /// The value one, `[1]`
    #[inline]
    pub fn one() -> BigNum {
        BigNum { digits: vec![1] }
    }

    /// Construct from big-endian decimal digits
    ///
    /// The digits must already be canonical: non-empty, each within
    /// 0-9, and without leading zeros (unless the value is `[0]`).
    ///
    /// ```
    /// # use bignum::{BigNum, ArithmeticError, InvalidOperand};
    /// let n = BigNum::from_digits(vec![1, 2, 3]).unwrap();
    /// assert_eq!(n.to_string(), "123");
    ///
    /// let err = BigNum::from_digits(vec![0, 7]).unwrap_err();
    /// assert_eq!(err, ArithmeticError::InvalidOperand(InvalidOperand::LeadingZero));
    /// ```
    pub fn from_digits(digits: Vec<u8>) -> Result<BigNum, ArithmeticError> {
        match validate_digits(&digits) {
            Ok(()) => Ok(BigNum { digits }),
            Err(err) => {
                tracing::debug!(digit_count = digits.len(), %err, "rejected digit sequence");
                Err(ArithmeticError::InvalidOperand(err))
            }
        }
    }

    /// Construct from big-endian decimal digits, removing any leading zeros
    pub fn from_digits_trimmed(mut digits: Vec<u8>) -> Result<BigNum, ArithmeticError> {
        if digits.is_empty() {
            return Err(ArithmeticError::InvalidOperand(InvalidOperand::Empty));
        }
        trim_leading_zeros(&mut digits);
        BigNum::from_digits(digits)
    }

    /// Wrap digits which are known to be canonical
    #[inline]
    pub(crate) fn from_trusted_digits(digits: Vec<u8>) -> BigNum {
        debug_assert_eq!(validate_digits(&digits), Ok(()));
        BigNum { digits }
    }

    /// Borrow the big-endian decimal digits
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Take ownership of the big-endian decimal digits
    #[inline]
    pub fn into_digits(self) -> Vec<u8> {
        self.digits
    }

    /// Iterate over digits, most significant first
    pub fn iter_digits(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.digits.iter().map(|&d| Digit::from_trusted(d))
    }

    /// Number of decimal digits (always at least one)
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Returns true if the value is one
    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    /// Subtract, returning zero rather than failing when `rhs > self`
    pub fn saturating_sub(&self, rhs: &BigNum) -> BigNum {
        match arithmetic::sub(self, rhs) {
            Ok(difference) => difference,
            Err(ArithmeticError::NegativeResult) => BigNum::zero(),
            Err(err) => impl_ops::arithmetic_panic(err),
        }
    }

    /// Multiply by `digit * 10^shift`
    pub fn mul_digit(&self, digit: Digit, shift: usize) -> BigNum {
        impl_ops::unwrap_arithmetic(arithmetic::mul_single(self, digit, shift))
    }

    /// Multiply by ten to the power of `shift`
    pub fn shift_left(&self, shift: usize) -> BigNum {
        self.mul_digit(Digit::ONE, shift)
    }

    /// Square this number
    pub fn square(&self) -> BigNum {
        self * self
    }

    /// Raise to the power `exp` by repeated squaring
    pub fn pow(&self, exp: u32) -> BigNum {
        if exp == 0 {
            return BigNum::one();
        }

        let mut base = self.clone();
        let mut result = BigNum::one();
        let mut exp = exp;
        loop {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp == 0 {
                return result;
            }
            base = base.square();
        }
    }

    /// Convert to a `num_bigint::BigUint`
    pub fn to_biguint(&self) -> BigUint {
        self.digits.iter().fold(BigUint::zero(), |acc, &d| acc * 10u8 + d)
    }
}

impl Default for BigNum {
    #[inline]
    fn default() -> BigNum {
        BigNum::zero()
    }
}


/// Check digits satisfy canonical form
pub(crate) fn validate_digits(digits: &[u8]) -> Result<(), InvalidOperand> {
    match digits {
        [] => return Err(InvalidOperand::Empty),
        [0, _, ..] => return Err(InvalidOperand::LeadingZero),
        _ => {}
    }

    match digits.iter().position(|&d| d >= arithmetic::RADIX) {
        Some(index) => Err(InvalidOperand::DigitOutOfRange { index, value: digits[index] }),
        None => Ok(()),
    }
}

/// Remove leading zeros from big-endian digits, keeping at least one digit
pub(crate) fn trim_leading_zeros(digits: &mut Vec<u8>) {
    let idx = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));

    if idx > 0 {
        digits.copy_within(idx.., 0);
        digits.truncate(digits.len() - idx);
    }
}


/// Reasons a digit sequence is not a valid BigNum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOperand {
    /// No digits at all
    Empty,
    /// Digit value is not within 0-9
    DigitOutOfRange { index: usize, value: u8 },
    /// Most significant digit is zero in a multi-digit value
    LeadingZero,
}

impl fmt::Display for InvalidOperand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use InvalidOperand::*;

        match *self {
            Empty => f.write_str("digit sequence is empty"),
            DigitOutOfRange { index, value } => {
                write!(f, "digit {} at position {} is not a decimal digit", value, index)
            }
            LeadingZero => f.write_str("digit sequence has a leading zero"),
        }
    }
}

/// Errors produced by the checked arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// An operand violated the canonical digit form
    InvalidOperand(InvalidOperand),
    /// Subtraction where the subtrahend is larger than the minuend
    NegativeResult,
    /// Storage for the result could not be reserved
    AllocationFailure,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            InvalidOperand(ref e) => write!(f, "invalid operand: {}", e),
            NegativeResult => f.write_str("subtraction result would be negative"),
            AllocationFailure => f.write_str("failed to allocate digit storage"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}

#[cfg(feature = "std")]
impl std::error::Error for InvalidOperand {}

impl From<InvalidOperand> for ArithmeticError {
    fn from(err: InvalidOperand) -> ArithmeticError {
        ArithmeticError::InvalidOperand(err)
    }
}

impl From<TryReserveError> for ArithmeticError {
    fn from(_: TryReserveError) -> ArithmeticError {
        ArithmeticError::AllocationFailure
    }
}


/// Errors produced when parsing decimal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigNumError {
    /// No digits in the input
    Empty,
    /// Character which is neither a decimal digit nor a separator
    InvalidDigit { index: usize, found: char },
}

impl fmt::Display for ParseBigNumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigNumError::*;

        match *self {
            Empty => f.write_str("Failed to parse empty string"),
            InvalidDigit { index, found } => {
                write!(f, "InvalidDigit {:?} at byte {}", found, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigNumError {}




#[cfg(test)]
extern crate proptest;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
