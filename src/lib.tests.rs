include!("test_macros.rs");

mod from_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($d:literal),* ] => Ok) => {
            #[test]
            fn $name() {
                let digits: Vec<u8> = vec![ $( $d ),* ];
                let n = BigNum::from_digits(digits.clone()).unwrap();
                assert_eq!(n.digits(), digits.as_slice());
            }
        };
        ($name:ident: [ $($d:literal),* ] => $err:expr) => {
            #[test]
            fn $name() {
                let digits: Vec<u8> = vec![ $( $d ),* ];
                let err = BigNum::from_digits(digits).unwrap_err();
                assert_eq!(err, ArithmeticError::InvalidOperand($err));
            }
        };
    }

    impl_case!(case_0: [0] => Ok);
    impl_case!(case_9: [9] => Ok);
    impl_case!(case_101: [1, 0, 1] => Ok);
    impl_case!(case_empty: [] => InvalidOperand::Empty);
    impl_case!(case_007: [0, 0, 7] => InvalidOperand::LeadingZero);
    impl_case!(case_00: [0, 0] => InvalidOperand::LeadingZero);
    impl_case!(case_1_10: [1, 10] => InvalidOperand::DigitOutOfRange { index: 1, value: 10 });
    impl_case!(case_255: [255] => InvalidOperand::DigitOutOfRange { index: 0, value: 255 });
}

mod from_digits_trimmed {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [ $($d:literal),* ] => [ $($e:literal),+ ]) => {
            #[test]
            fn $name() {
                let n = BigNum::from_digits_trimmed(vec![ $( $d ),* ]).unwrap();
                assert_digits_eq!(n, [ $( $e ),+ ]);
            }
        };
    }

    impl_case!(case_002: [0, 0, 2] => [2]);
    impl_case!(case_000: [0, 0, 0] => [0]);
    impl_case!(case_0: [0] => [0]);
    impl_case!(case_1020: [0, 1, 0, 2, 0] => [1, 0, 2, 0]);

    #[test]
    fn empty_is_invalid() {
        let err = BigNum::from_digits_trimmed(vec![]).unwrap_err();
        assert_eq!(err, ArithmeticError::InvalidOperand(InvalidOperand::Empty));
    }

    #[test]
    fn out_of_range_after_trim() {
        let err = BigNum::from_digits_trimmed(vec![0, 0, 3, 11]).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::InvalidOperand(InvalidOperand::DigitOutOfRange { index: 1, value: 11 })
        );
    }
}

mod accessors {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert_digits_eq!(BigNum::zero(), [0]);
        assert_digits_eq!(BigNum::one(), [1]);
        assert_digits_eq!(BigNum::default(), [0]);
        assert!(BigNum::zero().is_zero());
        assert!(!BigNum::zero().is_one());
        assert!(bignum!("1").is_one());
        assert!(!bignum!("10").is_one());
    }

    #[test]
    fn len_counts_digits() {
        assert_eq!(bignum!("0").len(), 1);
        assert_eq!(bignum!("56088").len(), 5);
    }

    #[test]
    fn iter_digits_both_directions() {
        let n = bignum!("1203");
        let forward: Vec<u8> = n.iter_digits().map(Digit::get).collect();
        let backward: Vec<u8> = n.iter_digits().rev().map(u8::from).collect();
        assert_eq!(forward, [1, 2, 0, 3]);
        assert_eq!(backward, [3, 0, 2, 1]);
    }

    #[test]
    fn into_digits() {
        assert_eq!(bignum!("907").into_digits(), vec![9, 0, 7]);
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn compare_123_99() {
        assert_eq!(compare(&digits!(1, 2, 3), &digits!(9, 9)) as i8, 1);
    }

    #[test]
    fn add_99_1() {
        assert_digits_eq!(add(&digits!(9, 9), &digits!(1)).unwrap(), [1, 0, 0]);
    }

    #[test]
    fn sub_101_99() {
        assert_digits_eq!(sub(&digits!(1, 0, 1), &digits!(9, 9)).unwrap(), [2]);
    }

    #[test]
    fn mul_single_123_0_2() {
        assert_digits_eq!(mul_single(&digits!(1, 2, 3), Digit::ZERO, 2).unwrap(), [0]);
    }

    #[test]
    fn mul_123_456() {
        assert_digits_eq!(mul(&digits!(1, 2, 3), &digits!(4, 5, 6)).unwrap(), [5, 6, 0, 8, 8]);
    }

    #[test]
    fn sub_5_5() {
        assert_digits_eq!(sub(&digits!(5), &digits!(5)).unwrap(), [0]);
    }

    #[test]
    fn sub_smaller_minus_larger_is_negative_result() {
        assert_eq!(sub(&digits!(9, 9), &digits!(1, 0, 1)), Err(ArithmeticError::NegativeResult));
    }
}

mod errors {
    use super::*;
    use stdlib::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            ArithmeticError::NegativeResult.to_string(),
            "subtraction result would be negative"
        );
        assert_eq!(
            ArithmeticError::InvalidOperand(InvalidOperand::DigitOutOfRange { index: 2, value: 12 }).to_string(),
            "invalid operand: digit 12 at position 2 is not a decimal digit"
        );
        assert_eq!(ParseBigNumError::Empty.to_string(), "Failed to parse empty string");
    }

    #[test]
    fn from_invalid_operand() {
        let err: ArithmeticError = InvalidOperand::LeadingZero.into();
        assert_eq!(err, ArithmeticError::InvalidOperand(InvalidOperand::LeadingZero));
    }
}

mod pow {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $base:literal ^ $exp:literal = $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _pow >]() {
                    assert_eq!(bignum!($base).pow($exp), bignum!($expected));
                }
            }
        };
    }

    impl_case!(case_10_20: "10" ^ 20 = "100000000000000000000");
    impl_case!(case_3_7: "3" ^ 7 = "2187");
    impl_case!(case_99_1: "99" ^ 1 = "99");
    impl_case!(case_1_1000: "1" ^ 1000 = "1");
}
