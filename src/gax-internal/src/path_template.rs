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

//! Expand the URL templates of REST methods.
//!
//! The REST methods describe their path with a subset of [RFC 6570] URI
//! templates:
//! - `{name}` is replaced by the value of `name`, with all the reserved
//!   characters percent-encoded. A `/` in the value becomes `%2F`.
//! - `{+name}` is replaced by the value of `name`, keeping the reserved
//!   characters. A value such as `users/u1/rooms/r1` spans multiple path
//!   segments. `?` and `#` are still encoded, a value never starts the
//!   query or the fragment of the URL.
//!
//! Values are raw text. A `%` in a value is always encoded as `%25`, values
//! are never treated as already percent-encoded.
//!
//! Path parameters are required, an empty value is an error.
//!
//! [RFC 6570]: https://datatracker.ietf.org/doc/html/rfc6570

use crate::path_parameter::{malformed, missing};
use gax::Result;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// RFC 3986 unreserved characters are never encoded.
const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// Reserved expansion also keeps the RFC 3986 reserved characters, except
// the ones ending the path.
const RESERVED: &AsciiSet = &SIMPLE
    .remove(b':')
    .remove(b'/')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Expands `template` using the values in `params`.
///
/// # Example
/// ```
/// # use google_api_gax_internal::path_template::expand;
/// let path = expand("v1beta1/{+name}", &[("name", "users/u1")])?;
/// assert_eq!(path, "v1beta1/users/u1");
/// let path = expand("v1beta1/users/{user}", &[("user", "a/b")])?;
/// assert_eq!(path, "v1beta1/users/a%2Fb");
/// # gax::Result::<()>::Ok(())
/// ```
pub fn expand(template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| malformed(template, "unterminated expression"))?;
        let expression = &after[..end];
        let (name, encode_set) = match expression.strip_prefix('+') {
            Some(name) => (name, RESERVED),
            None => (expression, SIMPLE),
        };
        if name.is_empty() {
            return Err(malformed(template, "empty variable name"));
        }
        let value = params
            .iter()
            .find_map(|(k, v)| (*k == name).then_some(*v))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(name))?;
        path.extend(utf8_percent_encode(value, encode_set));
        rest = &after[end + 1..];
    }
    if rest.contains('}') {
        return Err(malformed(template, "unmatched closing brace"));
    }
    path.push_str(rest);
    Ok(path)
}

/// Resolves `path` relative to the service endpoint.
///
/// The endpoint is the base path of the service, typically ending with `/`.
/// Endpoints configured by the application may omit the trailing slash.
pub fn resolve(endpoint: &str, path: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_parameter::Error as PathError;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("v1beta1/users", &[], "v1beta1/users"; "no variables")]
    #[test_case("v1beta1/{+name}", &[("name", "users/u1")], "v1beta1/users/u1"; "reserved keeps slash")]
    #[test_case("v1beta1/users/{name}", &[("name", "u1/x")], "v1beta1/users/u1%2Fx"; "simple encodes slash")]
    #[test_case("v1beta1/{+parent}/blurbs:search", &[("parent", "rooms/r1")], "v1beta1/rooms/r1/blurbs:search"; "custom verb")]
    #[test_case("v1/{a}/{b}", &[("a", "x y"), ("b", "caf\u{e9}")], "v1/x%20y/caf%C3%A9"; "simple encodes space and utf8")]
    #[test_case("v1/{+a}", &[("a", "x y:z")], "v1/x%20y:z"; "reserved encodes space")]
    #[test_case("v1/{a}", &[("a", "p:q@r")], "v1/p%3Aq%40r"; "simple encodes reserved")]
    #[test_case("v1/{a}", &[("a", "a-b.c_d~e")], "v1/a-b.c_d~e"; "unreserved kept")]
    #[test_case("v1/{a}", &[("b", "unused"), ("a", "used")], "v1/used"; "lookup by name")]
    #[test_case("v1/{+name}", &[("name", "users/a%2Fb")], "v1/users/a%252Fb"; "reserved encodes percent")]
    #[test_case("v1/{name}", &[("name", "100%")], "v1/100%25"; "simple encodes percent")]
    #[test_case("v1/{+name}", &[("name", "users/u1?alt=proto")], "v1/users/u1%3Falt=proto"; "reserved encodes question mark")]
    #[test_case("v1/{+name}", &[("name", "users/u1#frag")], "v1/users/u1%23frag"; "reserved encodes hash")]
    fn expand_success(template: &str, params: &[(&str, &str)], want: &str) -> anyhow::Result<()> {
        let got = expand(template, params)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("v1/{+name}", &[]; "missing")]
    #[test_case("v1/{+name}", &[("name", "")]; "empty")]
    #[test_case("v1/{name}", &[("other", "x")]; "different name")]
    fn expand_missing(template: &str, params: &[(&str, &str)]) {
        let err = expand(template, params).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::MissingRequiredParameter(n)) if n == "name"),
            "{err:?}"
        );
    }

    #[test_case("v1/{name"; "unterminated")]
    #[test_case("v1/{}"; "empty name")]
    #[test_case("v1/{+}"; "empty reserved name")]
    #[test_case("v1/name}"; "unmatched close")]
    fn expand_malformed(template: &str) {
        let err = expand(template, &[("name", "x")]).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::MalformedTemplate { .. })),
            "{err:?}"
        );
    }

    #[test_case("https://showcase.googleapis.com/", "v1beta1/users"; "trailing slash")]
    #[test_case("https://showcase.googleapis.com", "v1beta1/users"; "no trailing slash")]
    #[test_case("https://showcase.googleapis.com/", "/v1beta1/users"; "leading slash")]
    fn resolve_paths(endpoint: &str, path: &str) {
        assert_eq!(
            resolve(endpoint, path),
            "https://showcase.googleapis.com/v1beta1/users"
        );
    }
}
