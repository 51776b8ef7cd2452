mod test_mul_single {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $d:literal << $shift:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let a = bignum!($a);
                let d = Digit::new($d).unwrap();
                let product = mul_single(&a, d, $shift).unwrap();
                assert_eq!(product, bignum!($c));
            }
        };
    }

    impl_case!(case_123_0_2: "123" * 0 << 2 = "0");
    impl_case!(case_0_7_3: "0" * 7 << 3 = "0");
    impl_case!(case_123_1_0: "123" * 1 << 0 = "123");
    impl_case!(case_123_4_0: "123" * 4 << 0 = "492");
    impl_case!(case_123_5_1: "123" * 5 << 1 = "6150");
    impl_case!(case_123_6_2: "123" * 6 << 2 = "73800");
    impl_case!(case_999_9_0: "999" * 9 << 0 = "8991");
    impl_case!(case_9_9_5: "9" * 9 << 5 = "8100000");
    impl_case!(case_1_1_10: "1" * 1 << 10 = "10000000000");

    #[test]
    fn zero_digit_ignores_shift() {
        let product = mul_single(&digits!(1, 2, 3), Digit::ZERO, 2).unwrap();
        assert_digits_eq!(product, [0]);
    }

    #[test]
    fn huge_shift_reports_allocation_failure() {
        let result = mul_single(&digits!(1), Digit::ONE, usize::MAX);
        assert_eq!(result, Err(ArithmeticError::AllocationFailure));
    }
}

mod test_mul {
    use super::*;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let a = bignum!($a);
                let b = bignum!($b);
                let expected = bignum!($c);

                assert_eq!(mul(&a, &b).unwrap(), expected);
                assert_eq!(mul(&b, &a).unwrap(), expected);
            }

            paste! {
                #[test]
                fn [< $name _operators >]() {
                    let a = bignum!($a);
                    let b = bignum!($b);
                    let expected = bignum!($c);

                    assert_eq!(&a * &b, expected);
                    assert_eq!(a.clone() * b.clone(), expected);

                    let mut product = a;
                    product *= &b;
                    assert_eq!(product, expected);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" * "0" = "0");
    impl_case!(case_5_5: "5" * "5" = "25");
    impl_case!(case_7_22: "7" * "22" = "154");
    impl_case!(case_254_791: "254" * "791" = "200914");
    impl_case!(case_123_456: "123" * "456" = "56088");
    impl_case!(case_123_0: "123" * "0" = "0");
    impl_case!(case_123_1: "123" * "1" = "123");
    impl_case!(case_100_1000: "100" * "1000" = "100000");
    impl_case!(case_99999_99999: "99999" * "99999" = "9999800001");
    impl_case!(
        case_209504545595_605739580991:
        "209504545595" * "605739580991" = "126905195664425154784645"
    );

    #[test]
    fn mul_123_456_digits() {
        let product = mul(&digits!(1, 2, 3), &digits!(4, 5, 6)).unwrap();
        assert_digits_eq!(product, [5, 6, 0, 8, 8]);
    }

    #[test]
    fn mul_with_interior_zero_digits() {
        let product = mul(&bignum!("1234"), &bignum!("1001")).unwrap();
        assert_eq!(product, bignum!("1235234"));
    }
}

#[test]
fn extend_digit_slice_product_is_little_endian() {
    let mut dest = Vec::new();
    extend_digit_slice_product_into(&[1, 2, 3], 9, &mut dest);
    assert_eq!(dest, &[7, 0, 1, 1]);
}
