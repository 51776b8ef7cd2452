//!
//! Multiplication algorithms
//!

use crate::*;
use super::{add, digit_buffer, from_little_endian, split_carry};


/// Multiply `a` by the single digit `d`, scaled by `10^shift`
///
/// The result is zero, with no trailing zeros appended, whenever the
/// digit or `a` is zero.
///
pub fn mul_single(a: &BigNum, d: Digit, shift: usize) -> Result<BigNum, ArithmeticError> {
    if d.is_zero() || a.is_zero() {
        return Ok(BigNum::zero());
    }

    let capacity = a.len()
                    .checked_add(shift)
                    .and_then(|n| n.checked_add(1))
                    .ok_or(ArithmeticError::AllocationFailure)?;

    let mut product = digit_buffer(capacity)?;

    // shift zeros occupy the least significant positions
    product.resize(shift, 0);
    extend_digit_slice_product_into(a.digits(), d.get(), &mut product);

    Ok(from_little_endian(product))
}

/// Push product of big-endian digit slice and single digit `n` into
/// `dest`, least significant digit first
#[inline]
pub(crate) fn extend_digit_slice_product_into(a: &[u8], n: u8, dest: &mut Vec<u8>) {
    let mut carry = 0;
    for &a_digit in a.iter().rev() {
        dest.push(split_carry(a_digit * n, &mut carry));
    }

    if carry != 0 {
        dest.push(carry);
    }
}

/// Multiply two numbers, returning newly allocated product
///
/// Sums one scaled single-digit partial product per digit of `b`,
/// starting at the least significant digit. Each accumulator and
/// partial product is dropped as soon as it has been added.
///
pub fn mul(a: &BigNum, b: &BigNum) -> Result<BigNum, ArithmeticError> {
    let _scope = tracing::trace_span!(
        "BigNum multiply",
        lhs_digits = a.len(),
        rhs_digits = b.len(),
    )
    .entered();

    let mut product = BigNum::zero();
    for (shift, digit) in b.iter_digits().rev().enumerate() {
        let partial = mul_single(a, digit, shift)?;
        product = add(&product, &partial)?;
    }

    Ok(product)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("../test_macros.rs");
    include!("multiplication.tests.rs");
}
