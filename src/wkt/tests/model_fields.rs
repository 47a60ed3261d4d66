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

#[cfg(test)]
mod tests {
    use google_api_wkt::FieldMask;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    // Models the shape of a generated resource with special wire types.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Measurement {
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<google_api_wkt::internal::F64>")]
        value: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<google_api_wkt::internal::F32>")]
        ratio: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<Vec<google_api_wkt::internal::F64>>")]
        samples: Option<Vec<f64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<google_api_wkt::internal::I64>")]
        total_bytes: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        mask: Option<FieldMask>,
    }

    #[test]
    fn unset_fields_are_omitted() -> Result {
        let got = serde_json::to_value(Measurement::default())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn zero_values_are_sent() -> Result {
        let input = Measurement {
            value: Some(0.0),
            ratio: Some(0.0),
            samples: Some(Vec::new()),
            total_bytes: Some(0),
            mask: Some(FieldMask::default()),
        };
        let got = serde_json::to_value(&input)?;
        assert_eq!(
            got,
            json!({"value": 0.0, "ratio": 0.0, "samples": [], "totalBytes": "0", "mask": ""})
        );
        Ok(())
    }

    #[test_case(json!({"value": "NaN"}))]
    #[test_case(json!({"value": "Infinity"}))]
    #[test_case(json!({"value": "-Infinity"}))]
    #[test_case(json!({"value": "2.5"}))]
    #[test_case(json!({"value": 2.5}))]
    fn floats_from_strings_or_numbers(input: serde_json::Value) -> Result {
        let got = serde_json::from_value::<Measurement>(input)?;
        assert!(got.value.is_some(), "{got:?}");
        Ok(())
    }

    #[test]
    fn special_floats_in_lists() -> Result {
        let input = Measurement {
            samples: Some(vec![1.0, f64::INFINITY, f64::NEG_INFINITY]),
            ..Default::default()
        };
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"samples": [1.0, "Infinity", "-Infinity"]}));
        let back = serde_json::from_value::<Measurement>(got)?;
        assert_eq!(back, input);
        Ok(())
    }

    #[test]
    fn null_is_none() -> Result {
        let got = serde_json::from_value::<Measurement>(json!({
            "value": null,
            "ratio": null,
            "totalBytes": null,
        }))?;
        assert_eq!(got, Measurement::default());
        Ok(())
    }

    #[test]
    fn full() -> Result {
        let input = json!({
            "value": 1.25,
            "ratio": "NaN",
            "totalBytes": "9007199254740993",
            "mask": "value,totalBytes",
        });
        let got = serde_json::from_value::<Measurement>(input)?;
        assert_eq!(got.value, Some(1.25));
        assert!(got.ratio.is_some_and(f32::is_nan), "{got:?}");
        assert_eq!(got.total_bytes, Some(9_007_199_254_740_993));
        assert_eq!(
            got.mask,
            Some(FieldMask::default().set_paths(["value", "totalBytes"]))
        );
        Ok(())
    }
}
