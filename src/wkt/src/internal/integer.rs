// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adapters for `int64` and `uint64` fields.
//!
//! Discovery documents declare these as `"type": "string"` with a `format`, as
//! JSON numbers lose precision beyond 2^53. They are always sent as strings.
//! Deserialization also accepts JSON numbers.

use serde::de::Unexpected;

macro_rules! integer_adapter {
    ($adapter: ident, $visitor: ident, $t: ty, $msg: literal) => {
        pub struct $adapter;

        impl serde_with::SerializeAs<$t> for $adapter {
            fn serialize_as<S>(value: &$t, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.collect_str(value)
            }
        }

        impl<'de> serde_with::DeserializeAs<'de, $t> for $adapter {
            fn deserialize_as<D>(deserializer: D) -> Result<$t, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                deserializer.deserialize_any($visitor)
            }
        }

        struct $visitor;

        impl serde::de::Visitor<'_> for $visitor {
            type Value = $t;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str($msg)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                // Parse as i128 first, values just outside the range would
                // round into it if parsed as `f64`.
                if let Ok(v) = value.parse::<i128>() {
                    return self.visit_i128(v);
                }
                match value.parse::<f64>() {
                    Ok(v) => self.visit_f64(v),
                    Err(_) => Err(E::invalid_value(Unexpected::Str(value), &self)),
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                <$t>::try_from(value)
                    .map_err(|_| E::invalid_value(Unexpected::Other(&value.to_string()), &self))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                // `as` saturates, the range check must use the float values.
                if value.fract() != 0.0 || value < <$t>::MIN as f64 || value >= <$t>::MAX as f64 {
                    return Err(E::invalid_value(Unexpected::Float(value), &self));
                }
                Ok(value as Self::Value)
            }
        }
    };
}

integer_adapter!(I64, I64Visitor, i64, "a 64-bit signed integer");
integer_adapter!(U64, U64Visitor, u64, "a 64-bit unsigned integer");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(json!("123"), 123)]
    #[test_case(json!("-456"), -456)]
    #[test_case(json!(789), 789)]
    #[test_case(json!(-10), -10)]
    #[test_case(json!(2e3), 2000)]
    #[test_case(json!("3e2"), 300)]
    #[test_case(json!(i64::MAX.to_string()), i64::MAX; "max string")]
    #[test_case(json!(i64::MIN.to_string()), i64::MIN; "min string")]
    fn i64_deserialize(input: Value, want: i64) -> Result {
        let got = I64::deserialize_as(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!((i64::MAX as i128 + 1).to_string()); "max plus one")]
    #[test_case(json!((i64::MIN as i128 - 1).to_string()); "min minus one")]
    #[test_case(json!(u64::MAX); "u64 max")]
    #[test_case(json!(1.5))]
    #[test_case(json!("2.5"))]
    #[test_case(json!("twelve"))]
    #[test_case(json!(null))]
    fn i64_rejects(input: Value) {
        let err = I64::deserialize_as(input).unwrap_err();
        assert!(err.is_data(), "{err:?}");
    }

    #[test_case(0)]
    #[test_case(i64::MAX)]
    #[test_case(i64::MIN)]
    fn i64_serialize_as_string(input: i64) -> Result {
        let got = I64::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(got, json!(input.to_string()));
        Ok(())
    }

    #[test_case(json!("18446744073709551615"), u64::MAX)]
    #[test_case(json!(42), 42)]
    fn u64_deserialize(input: Value, want: u64) -> Result {
        let got = U64::deserialize_as(input)?;
        assert_eq!(got, want);
        let back = U64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(back, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!(-1); "negative")]
    #[test_case(json!("-1"); "negative string")]
    #[test_case(json!("18446744073709551616"); "max plus one")]
    fn u64_rejects(input: Value) {
        let err = U64::deserialize_as(input).unwrap_err();
        assert!(err.is_data(), "{err:?}");
    }
}
