//! Single decimal digit
//!

use crate::*;
use stdlib::convert::TryFrom;


/// A single base-10 digit, in the range 0-9
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const ONE: Digit = Digit(1);
    pub const MAX: Digit = Digit(9);

    /// Construct digit, returning None if n is not within 0-9
    #[inline]
    pub const fn new(n: u8) -> Option<Digit> {
        if n < arithmetic::RADIX {
            Some(Digit(n))
        } else {
            None
        }
    }

    /// Construct from value already known to be within radix
    #[inline]
    pub(crate) fn from_trusted(n: u8) -> Digit {
        debug_assert!(n < arithmetic::RADIX);
        Digit(n)
    }

    /// Parse ascii digit character
    #[inline]
    pub fn from_char(c: char) -> Option<Digit> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Ascii character of this digit
    #[inline]
    pub fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = ArithmeticError;

    fn try_from(n: u8) -> Result<Digit, ArithmeticError> {
        Digit::new(n).ok_or(ArithmeticError::InvalidOperand(
            InvalidOperand::DigitOutOfRange { index: 0, value: n }
        ))
    }
}

impl From<Digit> for u8 {
    #[inline]
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for BigNum {
    #[inline]
    fn from(d: Digit) -> BigNum {
        BigNum::from_trusted_digits(vec![d.0])
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
