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

/// The response of methods that return no data, for example most `delete`
/// methods.
///
/// Services answer such requests with `{}`, or with a `204 No Content` and no
/// body at all. Both decode to `Empty`. Any fields the service may add in the
/// future are ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn serialize() -> Result {
        let got = serde_json::to_value(Empty::default())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn deserialize_ignores_unknown() -> Result {
        let got = serde_json::from_value::<Empty>(json!({"kind": "discovery#empty"}))?;
        assert_eq!(got, Empty::default());
        Ok(())
    }
}
