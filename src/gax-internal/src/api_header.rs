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

//! Telemetry header helpers.

/// The name of the header identifying the client library.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// The library type for generated clients.
pub const GAPIC: &str = "gapic";

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize the `x-goog-api-client` header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    ///
    /// The value has the form
    /// `gl-rust/{rustc} gax/{version} rest/{version}-reqwest {type}/{version}`.
    pub fn rest_header_value(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<&str, &str> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .collect()
    }

    #[test]
    fn rest_header_value() {
        let header = XGoogApiClient {
            name: "google-api-showcase",
            version: "1.2.3",
            library_type: GAPIC,
        };
        let formatted = header.rest_header_value();
        let fields = breakdown(&formatted);
        assert_eq!(fields.len(), 4, "{formatted}");
        assert_eq!(fields.get(GAPIC), Some(&"1.2.3"));
        assert_eq!(fields.get("gax"), Some(&build_info::PKG_VERSION));

        let rest = fields.get("rest").copied().unwrap_or_default();
        assert!(rest.ends_with("-reqwest"), "{formatted}");

        let got = fields.get("gl-rust").copied().unwrap_or_default();
        assert!(
            !got.is_empty() && build_info::RUSTC_VERSION.contains(got),
            "mismatched rustc version {} and {got}",
            build_info::RUSTC_VERSION
        );
    }
}
