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

//! Send explicit JSON `null` values in request bodies.
//!
//! The generated models omit unset (`None`) fields from the request body. In
//! a `PATCH` request an omitted field is left unchanged by the service. To
//! clear a field the request must send it as `null`, the request builders
//! collect these fields as dotted paths of JSON field names, e.g.
//! `displayName` or `settings.timeZone`.
//!
//! A path may not name a field that also has a value in the request.

use gax::Result;
use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the request body is not a JSON object")]
    BodyNotAnObject,
    #[error("empty path in the list of null fields")]
    EmptyPath,
    #[error("the null field path {0:?} contains an empty segment")]
    EmptySegment(String),
    #[error("the null field path {path:?} crosses {segment:?}, which is not an object")]
    NotAnObject { path: String, segment: String },
    #[error("the field {0:?} is listed as a null field but has a value")]
    FieldHasValue(String),
}

/// Serializes `body` and sets each field in `null_fields` to JSON `null`.
pub fn to_json<T>(body: &T, null_fields: &[String]) -> Result<Value>
where
    T: serde::Serialize,
{
    let value = serde_json::to_value(body).map_err(gax::error::Error::ser)?;
    apply(value, null_fields).map_err(gax::error::Error::ser)
}

/// Sets each field in `null_fields` to JSON `null`.
///
/// Missing intermediate objects are created. Fields that are already `null`
/// are left as-is.
pub fn apply(mut body: Value, null_fields: &[String]) -> std::result::Result<Value, Error> {
    if null_fields.is_empty() {
        return Ok(body);
    }
    let root = body.as_object_mut().ok_or(Error::BodyNotAnObject)?;
    for path in null_fields {
        set_null(root, path)?;
    }
    Ok(body)
}

fn set_null(root: &mut Map<String, Value>, path: &str) -> std::result::Result<(), Error> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let segments = path.split('.').collect::<Vec<_>>();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::EmptySegment(path.to_string()));
    }
    let (leaf, parents) = segments
        .split_last()
        .ok_or_else(|| Error::EmptySegment(path.to_string()))?;
    let mut object = root;
    for segment in parents {
        let child = object
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if child.is_null() {
            *child = Value::Object(Map::new());
        }
        object = child.as_object_mut().ok_or_else(|| Error::NotAnObject {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    }
    match object.get(*leaf) {
        Some(v) if !v.is_null() => Err(Error::FieldHasValue(path.to_string())),
        _ => {
            object.insert(leaf.to_string(), Value::Null);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn paths(p: &[&str]) -> Vec<String> {
        p.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn none() -> anyhow::Result<()> {
        let body = json!({"name": "users/u1"});
        let got = apply(body.clone(), &[])?;
        assert_eq!(got, body);
        Ok(())
    }

    #[test]
    fn top_level() -> anyhow::Result<()> {
        let body = json!({"name": "users/u1"});
        let got = apply(body, &paths(&["nickname", "age"]))?;
        assert_eq!(got, json!({"name": "users/u1", "nickname": null, "age": null}));
        Ok(())
    }

    #[test]
    fn nested() -> anyhow::Result<()> {
        let body = json!({"name": "users/u1", "settings": {"locale": "en"}});
        let got = apply(
            body,
            &paths(&["settings.timeZone", "profile.photo.url", "labels.env"]),
        )?;
        assert_eq!(
            got,
            json!({
                "name": "users/u1",
                "settings": {"locale": "en", "timeZone": null},
                "profile": {"photo": {"url": null}},
                "labels": {"env": null},
            })
        );
        Ok(())
    }

    #[test]
    fn already_null() -> anyhow::Result<()> {
        let body = json!({"nickname": null, "settings": null});
        let got = apply(body, &paths(&["nickname", "settings.locale"]))?;
        assert_eq!(got, json!({"nickname": null, "settings": {"locale": null}}));
        Ok(())
    }

    #[test_case(json!({}), "", Error::EmptyPath; "empty path")]
    #[test_case(json!({}), "a..b", Error::EmptySegment("a..b".into()); "empty segment")]
    #[test_case(json!({}), "a.", Error::EmptySegment("a.".into()); "trailing dot")]
    #[test_case(json!({"a": 1}), "a.b", Error::NotAnObject{ path: "a.b".into(), segment: "a".into() }; "crosses scalar")]
    #[test_case(json!({"a": [1]}), "a.b", Error::NotAnObject{ path: "a.b".into(), segment: "a".into() }; "crosses array")]
    #[test_case(json!({"a": "x"}), "a", Error::FieldHasValue("a".into()); "has value")]
    #[test_case(json!({"a": {"b": 0}}), "a.b", Error::FieldHasValue("a.b".into()); "nested has value")]
    #[test_case(json!([]), "a", Error::BodyNotAnObject; "body is array")]
    fn errors(body: Value, path: &str, want: Error) {
        let got = apply(body, &paths(&[path]));
        assert_eq!(got, Err(want));
    }

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Resource {
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height_feet: Option<f64>,
    }

    #[test]
    fn to_json_success() -> anyhow::Result<()> {
        let resource = Resource {
            display_name: Some("Alice".into()),
            height_feet: None,
        };
        let got = to_json(&resource, &paths(&["heightFeet"]))?;
        assert_eq!(got, json!({"displayName": "Alice", "heightFeet": null}));
        Ok(())
    }

    #[test]
    fn to_json_conflict() {
        let resource = Resource {
            display_name: Some("Alice".into()),
            height_feet: Some(6.2),
        };
        let err = to_json(&resource, &paths(&["heightFeet"])).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }
}
