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

//! Adapters for floating point fields.
//!
//! Finite values are sent as JSON numbers. JSON has no representation for
//! NaN or the infinities, these are sent as the strings `"NaN"`, `"Infinity"`
//! and `"-Infinity"`. Some services also send finite values as strings, so
//! deserialization accepts numbers, numeric strings, and the special strings.

use serde::de::Unexpected;

macro_rules! float_adapter {
    ($adapter: ident, $visitor: ident, $t: ty, $ser_fn: ident, $msg: literal) => {
        pub struct $adapter;

        impl serde_with::SerializeAs<$t> for $adapter {
            fn serialize_as<S>(value: &$t, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                match *value {
                    v if v.is_nan() => serializer.serialize_str("NaN"),
                    v if v == <$t>::INFINITY => serializer.serialize_str("Infinity"),
                    v if v == <$t>::NEG_INFINITY => serializer.serialize_str("-Infinity"),
                    v => serializer.$ser_fn(v),
                }
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
                match value {
                    "NaN" => Ok(<$t>::NAN),
                    "Infinity" => Ok(<$t>::INFINITY),
                    "-Infinity" => Ok(<$t>::NEG_INFINITY),
                    s => match s.trim().parse::<f64>() {
                        // `f64::from_str()` accepts "inf" and "nan", and
                        // saturates values out of range.
                        Ok(v) if v.is_finite() => self.visit_f64(v),
                        _ => Err(E::invalid_value(Unexpected::Str(s), &self)),
                    },
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value as Self::Value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(value as Self::Value)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value < <$t>::MIN as f64 || value > <$t>::MAX as f64 {
                    return Err(E::invalid_value(Unexpected::Float(value), &self));
                }
                Ok(value as Self::Value)
            }
        }
    };
}

float_adapter!(F32, F32Visitor, f32, serialize_f32, "a 32-bit float");
float_adapter!(F64, F64Visitor, f64, serialize_f64, "a 64-bit float");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    fn same(left: f64, right: f64) -> bool {
        (left.is_nan() && right.is_nan()) || left == right
    }

    #[test_case(1.5, json!(1.5))]
    #[test_case(0.0, json!(0.0))]
    #[test_case(-2.25, json!(-2.25))]
    #[test_case(f64::MAX, json!(f64::MAX))]
    #[test_case(f64::NAN, json!("NaN"))]
    #[test_case(-f64::NAN, json!("NaN"); "negative nan")]
    #[test_case(f64::INFINITY, json!("Infinity"))]
    #[test_case(f64::NEG_INFINITY, json!("-Infinity"))]
    fn f64_serialize_and_back(input: f64, want: Value) -> Result {
        let got = F64::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(got, want);
        let back = F64::deserialize_as(got)?;
        assert!(same(back, input), "{back} != {input}");
        Ok(())
    }

    #[test_case(json!("0.5"), 0.5)]
    #[test_case(json!("-7"), -7.0)]
    #[test_case(json!(" 42.0"), 42.0; "leading whitespace")]
    #[test_case(json!("1e3"), 1000.0)]
    #[test_case(json!(3), 3.0)]
    #[test_case(json!(-4), -4.0)]
    #[test_case(json!(u64::MAX), u64::MAX as f64)]
    fn f64_accepts_numbers_and_strings(input: Value, want: f64) -> Result {
        let got = F64::deserialize_as(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!("nan"))]
    #[test_case(json!("inf"))]
    #[test_case(json!("infinity"))]
    #[test_case(json!("1.8e308"); "out of range")]
    #[test_case(json!("abc"))]
    #[test_case(json!(true))]
    #[test_case(json!([1.0]))]
    fn f64_rejects(input: Value) {
        let err = F64::deserialize_as(input).unwrap_err();
        assert!(err.is_data(), "{err:?}");
    }

    #[test_case(9876.5, json!(9876.5))]
    #[test_case(f32::NAN, json!("NaN"))]
    #[test_case(f32::INFINITY, json!("Infinity"))]
    #[test_case(f32::NEG_INFINITY, json!("-Infinity"))]
    fn f32_serialize_and_back(input: f32, want: Value) -> Result {
        let got = F32::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(got, want);
        let back = F32::deserialize_as(got)?;
        assert!(same(back as f64, input as f64), "{back} != {input}");
        Ok(())
    }

    #[test_case(json!(f32::MAX as f64 * 2.0); "above max")]
    #[test_case(json!(f32::MIN as f64 * 2.0); "below min")]
    #[test_case(json!("3.5e38"); "string above max")]
    fn f32_rejects_out_of_range(input: Value) {
        let err = F32::deserialize_as(input).unwrap_err();
        assert!(err.is_data(), "{err:?}");
    }
}
