//!
//! Support for serde implementations
//!
use crate::*;
use serde::{de, ser};

impl ser::Serialize for BigNat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by serde to construct a BigNat
struct BigNatVisitor;

impl<'de> de::Visitor<'de> for BigNatVisitor {
    type Value = BigNat;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string of decimal digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigNat, E>
    where
        E: de::Error,
    {
        BigNat::parse_decimal_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigNat, E>
    where
        E: de::Error,
    {
        Ok(BigNat::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigNat, E>
    where
        E: de::Error,
    {
        Ok(BigNat::from(value))
    }
}

impl<'de> de::Deserialize<'de> for BigNat {
    fn deserialize<D>(deserializer: D) -> Result<BigNat, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(BigNatVisitor)
    }
}
