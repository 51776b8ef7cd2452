// file to be included in tests modules

/// Parse string literal into BigNum
macro_rules! bignum {
    ( $s:literal ) => {{
        let n: BigNum = $s.parse().unwrap();
        n
    }};
}

/// Build BigNum from literal big-endian digits
macro_rules! digits {
    ( $($d:literal),+ ) => {{
        BigNum::from_digits(vec![ $( $d ),+ ]).unwrap()
    }};
}

macro_rules! assert_digits_eq {
    ( $v:expr, [ $($digits:literal),+ ] ) => {
        let expected: &[u8] = &[ $( $digits ),+ ];
        assert_eq!($v.digits(), expected);
    };
}
