use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::BigInt;

/// Serialized as a decimal string, so no precision is lost in formats whose
/// numbers are bounded.
impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(v))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn serializes_as_decimal_string() {
        let value: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        assert_eq!(serde_json::from_str::<BigInt>(&json).unwrap(), value);
    }

    #[test]
    fn deserializes_integers() {
        assert_eq!(serde_json::from_str::<BigInt>("-42").unwrap(), BigInt::from(-42));
        assert_eq!(serde_json::from_str::<BigInt>("18446744073709551615").unwrap(), BigInt::from(u64::MAX));
    }

    #[test]
    fn rejects_malformed_numerals() {
        let err = serde_json::from_str::<BigInt>("\"12x\"").unwrap_err();
        assert!(err.to_string().contains("invalid digit"));
    }
}
