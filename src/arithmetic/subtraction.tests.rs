mod sub_bignums {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal - $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs = bignum!($a);
                let rhs = bignum!($b);
                let expected = bignum!($c);

                let difference = sub(&lhs, &rhs).unwrap();
                assert_eq!(difference.digits(), expected.digits());

                assert_eq!(&lhs - &rhs, expected);
            }
        };
        ( $name:ident: $a:literal - $b:literal => NegativeResult ) => {
            #[test]
            fn $name() {
                let lhs = bignum!($a);
                let rhs = bignum!($b);
                assert_eq!(sub(&lhs, &rhs), Err(ArithmeticError::NegativeResult));
            }
        };
    }

    impl_case!(case_101_99: "101" - "99" = "2");
    impl_case!(case_5_5: "5" - "5" = "0");
    impl_case!(case_0_0: "0" - "0" = "0");
    impl_case!(case_10_1: "10" - "1" = "9");
    impl_case!(case_1000_1: "1000" - "1" = "999");
    impl_case!(case_579_456: "579" - "456" = "123");
    impl_case!(case_100000_99999: "100000" - "99999" = "1");
    impl_case!(case_123456789_123456788: "123456789" - "123456788" = "1");
    impl_case!(
        case_639426823468638998_25010755222:
        "639426823468638998" - "25010755222" = "639426798457883776"
    );

    impl_case!(case_99_101: "99" - "101" => NegativeResult);
    impl_case!(case_0_1: "0" - "1" => NegativeResult);
    impl_case!(case_455_456: "455" - "456" => NegativeResult);
}

#[test]
fn sub_101_99_strips_leading_zeros() {
    let difference = sub(&digits!(1, 0, 1), &digits!(9, 9)).unwrap();
    assert_digits_eq!(difference, [2]);
}

#[test]
fn sub_equal_operands_is_canonical_zero() {
    let difference = sub(&digits!(5), &digits!(5)).unwrap();
    assert_digits_eq!(difference, [0]);
    assert!(difference.is_zero());
}

#[test]
#[should_panic(expected = "negative")]
fn sub_operator_panics_on_negative_result() {
    let _ = digits!(1) - digits!(2);
}

#[test]
fn extend_digit_slice_difference_is_little_endian() {
    let mut dest = Vec::new();
    extend_digit_slice_difference_into(&[1, 0, 1], &[9, 9], &mut dest);
    assert_eq!(dest, &[2, 0, 0]);
}
