//! Implement math operations: Add,Sub, etc

use crate::*;


/// Unwrap result of checked arithmetic, panicking like primitive
/// integer operators do
#[inline]
#[track_caller]
pub(crate) fn unwrap_arithmetic(result: Result<BigNum, ArithmeticError>) -> BigNum {
    match result {
        Ok(n) => n,
        Err(err) => arithmetic_panic(err),
    }
}

#[cold]
#[track_caller]
pub(crate) fn arithmetic_panic(err: ArithmeticError) -> ! {
    panic!("{}", err)
}


macro_rules! impl_ops_for_primitive {
    ($t:ty) => {
        impl_ops_for_primitive!(IMPL: $t, Add::add, AddAssign::add_assign);
        impl_ops_for_primitive!(IMPL: $t, Sub::sub, SubAssign::sub_assign);
        impl_ops_for_primitive!(IMPL: $t, Mul::mul, MulAssign::mul_assign);

        forward_communative_binop!(impl Add<BigNum>::add for $t);
        forward_communative_binop!(impl Mul<BigNum>::mul for $t);
        forward_communative_binop!(impl Add<&BigNum>::add for $t);
        forward_communative_binop!(impl Mul<&BigNum>::mul for $t);
    };
    (IMPL: $t:ty, $imp:ident::$method:ident, $imp_assign:ident::$method_assign:ident) => {
        impl $imp<$t> for BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: $t) -> BigNum {
                $imp::$method(&self, &BigNum::from(rhs))
            }
        }

        impl $imp<$t> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: $t) -> BigNum {
                $imp::$method(self, &BigNum::from(rhs))
            }
        }

        impl $imp_assign<$t> for BigNum {
            #[inline]
            fn $method_assign(&mut self, rhs: $t) {
                $imp_assign::$method_assign(self, &BigNum::from(rhs));
            }
        }
    };
}

impl_ops_for_primitive!(u8);
impl_ops_for_primitive!(u16);
impl_ops_for_primitive!(u32);
impl_ops_for_primitive!(u64);
impl_ops_for_primitive!(u128);
impl_ops_for_primitive!(usize);


impl Mul<Digit> for &BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: Digit) -> BigNum {
        self.mul_digit(rhs, 0)
    }
}

impl Mul<Digit> for BigNum {
    type Output = BigNum;

    #[inline]
    fn mul(self, rhs: Digit) -> BigNum {
        self.mul_digit(rhs, 0)
    }
}

forward_communative_binop!(impl Mul<BigNum>::mul for Digit);
forward_communative_binop!(impl Mul<&BigNum>::mul for Digit);
