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

/// A set of field paths, used to select the fields changed by an update.
///
/// Field paths use the JSON names of the fields, separated by dots for nested
/// fields, for example `displayName` or `settings.timeZone`.
///
/// Discovery-based APIs send field masks as a single string with the paths
/// separated by commas, both in query parameters (`updateMask=a,b.c`) and in
/// request bodies.
///
/// # Example
/// ```
/// # use google_api_wkt::FieldMask;
/// let mask = FieldMask::default().set_paths(["displayName", "email"]);
/// assert_eq!(mask.to_string(), "displayName,email");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the paths.
    pub fn set_paths<T, V>(mut self, paths: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = paths.into_iter().map(|p| p.into()).collect();
        self
    }

    /// Returns true if the mask has no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl std::fmt::Display for FieldMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.paths.join(","))
    }
}

impl std::str::FromStr for FieldMask {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::default().set_paths(s.split(',')))
    }
}

impl<V: Into<String>> FromIterator<V> for FieldMask {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::default().set_paths(iter)
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(PathsVisitor)
    }
}

struct PathsVisitor;

impl serde::de::Visitor<'_> for PathsVisitor {
    type Value = FieldMask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let Ok(mask) = value.parse::<FieldMask>();
        Ok(mask)
    }
}
