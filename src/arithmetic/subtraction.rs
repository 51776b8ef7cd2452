//!
//! Subtraction algorithms
//!

use crate::*;
use super::{compare, digit_buffer, from_little_endian, sub_borrow};


/// Subtract `b` from `a`, returning newly allocated difference
///
/// Fails with `ArithmeticError::NegativeResult` if `a < b`; no digit
/// work is done in that case.
///
pub fn sub(a: &BigNum, b: &BigNum) -> Result<BigNum, ArithmeticError> {
    if compare(a, b) == Ordering::Less {
        tracing::debug!(
            minuend_digits = a.len(),
            subtrahend_digits = b.len(),
            "subtraction would produce a negative result"
        );
        return Err(ArithmeticError::NegativeResult);
    }

    let mut difference = digit_buffer(a.len())?;
    extend_digit_slice_difference_into(a.digits(), b.digits(), &mut difference);

    // strip leading zeros, ie 101 - 99 = "002"
    Ok(from_little_endian(difference))
}

/// Push difference of big-endian digit slices into `dest`, least
/// significant digit first
///
/// Iteration is driven by `a` alone, which is only valid because
/// `a >= b` leaves no outstanding borrow once `a` is exhausted.
///
#[inline]
pub(crate) fn extend_digit_slice_difference_into(a: &[u8], b: &[u8], dest: &mut Vec<u8>) {
    debug_assert!(a.len() >= b.len());

    let mut b_digits = b.iter().rev();
    let mut borrow = 0;
    for &a_digit in a.iter().rev() {
        let b_digit = b_digits.next().copied().unwrap_or(0);
        dest.push(sub_borrow(a_digit, b_digit, &mut borrow));
    }

    debug_assert_eq!(borrow, 0);
}


#[cfg(test)]
mod test {
    use super::*;

    include!("../test_macros.rs");
    include!("subtraction.tests.rs");
}
