//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use stdlib::string::String;


impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(self.len());
        push_digit_chars(&mut buf, self.digits());

        // honor width, fill, and zero-padding flags
        f.pad_integral(true, "", &buf)
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_debug(self.digits(), f, DEBUG_DIGIT_LIMIT)
    }
}


/// Write digits as `BigNum("...")`, eliding the middle of numbers
/// longer than `limit`
fn format_debug(digits: &[u8], f: &mut fmt::Formatter, limit: usize) -> fmt::Result {
    if digits.len() <= limit {
        let mut buf = String::with_capacity(digits.len());
        push_digit_chars(&mut buf, digits);
        return write!(f, "BigNum(\"{}\")", buf);
    }

    let head_len = (limit + 1) / 2;
    let tail_len = limit - head_len;

    let mut buf = String::with_capacity(limit + 3);
    push_digit_chars(&mut buf, &digits[..head_len]);
    buf.push_str("...");
    push_digit_chars(&mut buf, &digits[digits.len() - tail_len..]);

    write!(f, "BigNum(\"{}\", digits={})", buf, digits.len())
}

fn push_digit_chars(buf: &mut String, digits: &[u8]) {
    for &d in digits {
        buf.push(Digit::from_trusted(d).to_char());
    }
}


/// Helper wrapping digits so tests can choose a limit
#[cfg(test)]
struct DebugWithLimit<'a>(&'a [u8], usize);

#[cfg(test)]
impl fmt::Debug for DebugWithLimit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_debug(self.0, f, self.1)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use stdlib::string::ToString;

    include!("test_macros.rs");

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n = bignum!($input);
                assert_eq!(n.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_000: "000" => "0");
    impl_case!(case_56088: "56088" => "56088");
    impl_case!(case_0012: "0012" => "12");

    #[test]
    fn display_padding() {
        let n = bignum!("42");
        assert_eq!(format!("{:>6}", n), "    42");
        assert_eq!(format!("{:06}", n), "000042");
        assert_eq!(format!("{:<4}|", n), "42  |");
    }

    #[test]
    fn debug_short() {
        assert_eq!(format!("{:?}", bignum!("123")), "BigNum(\"123\")");
    }

    #[test]
    fn debug_elides_long_numbers() {
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(
            format!("{:?}", DebugWithLimit(&digits, 4)),
            "BigNum(\"12...89\", digits=9)"
        );
        assert_eq!(
            format!("{:?}", DebugWithLimit(&digits, 5)),
            "BigNum(\"123...89\", digits=9)"
        );
        assert_eq!(
            format!("{:?}", DebugWithLimit(&digits, 9)),
            "BigNum(\"123456789\")"
        );
    }
}
