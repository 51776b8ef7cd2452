//!
//! Support for serde implementations
//!
//! Values serialize as decimal strings; deserialization accepts
//! strings and (unless the `string-only` feature is set) unsigned
//! integers.
//!
use crate::*;
use serde::{de, ser};


impl ser::Serialize for BigNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigNum
struct BigNumVisitor;

impl<'de> de::Visitor<'de> for BigNumVisitor {
    type Value = BigNum;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or string of decimal digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        BigNum::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        Ok(BigNum::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        BigNum::from_i64(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}

#[cfg(not(feature = "string-only"))]
impl<'de> de::Deserialize<'de> for BigNum {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigNumVisitor)
    }
}

#[cfg(feature = "string-only")]
impl<'de> de::Deserialize<'de> for BigNum {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(BigNumVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    include!("test_macros.rs");

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let value: BigNum = $input.parse().unwrap();
                    assert_tokens(&value, &[expected]);
                }
            }
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_00050: "00050" => "50");
        impl_case!(case_56088: "56088" => "56088");
        impl_case!(case_1_000_000: "1_000_000" => "1000000");
    }

    #[cfg(not(feature = "string-only"))]
    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = BigNum::from($input as u64);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I16, I32, I64, U16, U32, U64 : 999);

        #[test]
        fn negative_int_is_rejected() {
            assert_de_tokens_error::<BigNum>(
                &[Token::I64(-5)],
                "invalid value: integer `-5`, expected a non-negative integer or string of decimal digits",
            );
        }
    }

    #[test]
    fn invalid_string_is_rejected() {
        assert_de_tokens_error::<BigNum>(
            &[Token::Str("12a")],
            "InvalidDigit 'a' at byte 2",
        );
    }

    #[test]
    fn json_round_trip() {
        let n = bignum!("123456789012345678901234567890");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"123456789012345678901234567890\"");

        let parsed: BigNum = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, n);
    }
}
