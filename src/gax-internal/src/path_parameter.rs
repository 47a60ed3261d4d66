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

//! Errors binding request fields to the request path.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. The generated code returns an error when a parameter is missing
//! or empty, or when the URL template itself cannot be parsed.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("malformed URL template {template:?}: {reason}")]
    MalformedTemplate {
        template: String,
        reason: &'static str,
    },
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

pub fn malformed(template: &str, reason: &'static str) -> gax::error::Error {
    gax::error::Error::binding(Error::MalformedTemplate {
        template: template.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn malformed() {
        let e = super::malformed("v1/{name", "unterminated expression");
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MalformedTemplate { template, .. }) if template == "v1/{name"),
            "{e:?}"
        );
    }
}
