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

//! Serialize request fields as query parameters.
//!
//! The generated code keeps query parameters as optional fields in the
//! request. Converting the field to a [serde_json::Value] first lets the
//! generated code treat all the parameter types uniformly:
//! - `None` fields are not included in the query.
//! - Scalars are formatted as usual, 64-bit integers and field masks are
//!   already strings in their JSON form.
//! - Repeated fields become repeated query parameters.
//! - Object fields use the `field.subfield` format.

use gax::Result;
use gax::error::Error;

/// Adds the query parameter `name` with the value of `parameter`.
pub fn add<T>(
    builder: reqwest::RequestBuilder,
    name: &str,
    parameter: &T,
) -> Result<reqwest::RequestBuilder>
where
    T: serde::Serialize,
{
    let value = serde_json::to_value(parameter).map_err(Error::ser)?;
    Ok(value.add(builder, name))
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}
