//! Long values travel through JSON as decimal strings, since a JSON number
//! can't carry 64 bits exactly. Numbers are still accepted on input.
use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::long::Long;

impl Serialize for Long {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct LongVisitor;

impl<'de> Visitor<'de> for LongVisitor {
    type Value = Long;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 64-bit integer or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Long, E> {
        Ok(Long::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Long, E> {
        // keep the signed tag while the value fits
        match i64::try_from(v) {
            Ok(s) => Ok(Long::from(s)),
            Err(_) => Ok(Long::from(v)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Long, E> {
        Ok(Long::from_number(v, false))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Long, E> {
        Long::from_string(v, false)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Long {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Long, D::Error> {
        deserializer.deserialize_any(LongVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::long::Long;

    #[test]
    fn serializes_as_string() {
        let out = serde_json::to_string(&Long::MAX_UNSIGNED_VALUE).expect("serialize");
        assert_eq!(out, "\"18446744073709551615\"");
        let out = serde_json::to_string(&[Long::from(-1i64), Long::ZERO]).expect("serialize");
        assert_eq!(out, "[\"-1\",\"0\"]");
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let v: Vec<Long> = serde_json::from_str("[1, -2, 18446744073709551615, 2.5, \"-9223372036854775808\"]")
            .expect("deserialize");
        assert_eq!(v[0].as_i64(), 1);
        assert!(!v[0].is_unsigned());
        assert_eq!(v[1].as_i64(), -2);
        assert!(v[2].eq(Long::MAX_UNSIGNED_VALUE));
        assert_eq!(v[3].as_i64(), 2);
        assert!(v[4].eq(Long::MIN_VALUE));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(serde_json::from_str::<Long>("\"12ab\"").is_err());
        assert!(serde_json::from_str::<Long>("true").is_err());
    }
}
