//!
//! Addition algorithms
//!

use crate::*;
use super::{digit_buffer, from_little_endian, split_carry};


/// Add two numbers, returning newly allocated sum
///
/// Never fails for valid operands, other than running out of memory.
///
pub fn add(a: &BigNum, b: &BigNum) -> Result<BigNum, ArithmeticError> {
    let mut sum = digit_buffer(a.len().max(b.len()) + 1)?;
    extend_digit_slice_sum_into(a.digits(), b.digits(), &mut sum);
    Ok(from_little_endian(sum))
}

/// Push sum of two big-endian digit slices into `dest`, least
/// significant digit first
///
/// Exhausted operands contribute zero digits; a final carry is pushed
/// as the most significant digit.
///
#[inline]
pub(crate) fn extend_digit_slice_sum_into(a: &[u8], b: &[u8], dest: &mut Vec<u8>) {
    let mut a_digits = a.iter().rev();
    let mut b_digits = b.iter().rev();

    let mut carry = 0;
    loop {
        let (a_digit, b_digit) = match (a_digits.next(), b_digits.next()) {
            (None, None) => break,
            (a_digit, b_digit) => (a_digit.copied().unwrap_or(0), b_digit.copied().unwrap_or(0)),
        };
        dest.push(split_carry(a_digit + b_digit, &mut carry));
    }

    if carry != 0 {
        dest.push(carry);
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("../test_macros.rs");
    include!("addition.tests.rs");
}
