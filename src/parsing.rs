//! Routines for parsing decimal text into BigNum

use crate::*;


impl FromStr for BigNum {
    type Err = ParseBigNumError;

    #[inline]
    fn from_str(s: &str) -> Result<BigNum, ParseBigNumError> {
        parse_decimal_digits(s)
    }
}


/// Parse ascii decimal digits, ignoring '_' separators and an
/// optional leading '+'
///
/// Leading zeros are accepted and removed.
///
pub(crate) fn parse_decimal_digits(s: &str) -> Result<BigNum, ParseBigNumError> {
    let (offset, body) = match s.strip_prefix('+') {
        Some(body) => (1, body),
        None => (0, s),
    };

    let mut digits = Vec::with_capacity(body.len());
    for (index, c) in body.char_indices() {
        match Digit::from_char(c) {
            Some(d) => digits.push(d.get()),
            None if c == '_' => continue,
            None => {
                return Err(ParseBigNumError::InvalidDigit { index: index + offset, found: c });
            }
        }
    }

    if digits.is_empty() {
        return Err(ParseBigNumError::Empty);
    }

    trim_leading_zeros(&mut digits);
    Ok(BigNum::from_trusted_digits(digits))
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                BigNum::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty : "" => "Empty");
    impl_case!(case_bad_string_only_plus : "+" => "Empty");
    impl_case!(case_bad_string_only_underscore : "___" => "Empty");

    impl_case!(case_bad_string_negative : "-12" => "InvalidDigit");
    impl_case!(case_bad_string_hello : "hello" => "InvalidDigit");
    impl_case!(case_bad_string_decimal_point : "12.5" => "InvalidDigit");
    impl_case!(case_bad_string_exponent : "1e5" => "InvalidDigit");
    impl_case!(case_bad_string_whitespace : " 12" => "InvalidDigit");
    impl_case!(case_bad_string_double_plus : "++1" => "InvalidDigit");

    #[test]
    fn invalid_digit_reports_position() {
        let err = BigNum::from_str("+12z3").unwrap_err();
        assert_eq!(err, ParseBigNumError::InvalidDigit { index: 3, found: 'z' });
    }
}
