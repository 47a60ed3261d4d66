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

//! Tracing spans for HTTP requests.
//!
//! The span attributes follow the names in the OpenTelemetry [semantic
//! conventions] for HTTP client spans, so applications forwarding `tracing`
//! spans to OpenTelemetry get familiar attributes.
//!
//! [semantic conventions]: https://opentelemetry.io/docs/specs/semconv/http/http-spans/

use gax::error::Error;
use tracing::Span;
use tracing::field::Empty;

const KEY_HTTP_STATUS_CODE: &str = "http.response.status_code";
const KEY_ERROR_TYPE: &str = "error.type";

/// Creates the span for a single HTTP request.
///
/// The query string is not recorded, it may contain user data.
pub(crate) fn http_request_span(request: &reqwest::Request) -> Span {
    let url = request.url();
    tracing::info_span!(
        "http_request",
        "otel.kind" = "Client",
        "http.request.method" = %request.method(),
        "server.address" = url.host_str().unwrap_or_default(),
        "server.port" = url.port_or_known_default().unwrap_or_default(),
        "url.path" = url.path(),
        "http.response.status_code" = Empty,
        "error.type" = Empty,
    )
}

/// Records the result of the request in `span`.
pub(crate) fn record_result<T>(span: &Span, result: &gax::Result<gax::response::Response<T>>) {
    match result {
        Ok(response) => {
            span.record(KEY_HTTP_STATUS_CODE, response.status().as_u16());
        }
        Err(e) => {
            if let Some(code) = e.http_status_code() {
                span.record(KEY_HTTP_STATUS_CODE, code);
            }
            span.record(KEY_ERROR_TYPE, error_type(e).as_str());
        }
    }
}

// A low-cardinality classification of the error.
fn error_type(e: &Error) -> String {
    if let Some(code) = e.http_status_code() {
        return code.to_string();
    }
    let t = match e {
        e if e.is_timeout() => "TIMEOUT",
        e if e.is_authentication() => "AUTHENTICATION",
        e if e.is_deserialization() => "DESERIALIZATION",
        e if e.is_serialization() => "SERIALIZATION",
        e if e.is_io() => "CONNECTION_ERROR",
        _ => "UNKNOWN",
    };
    t.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use test_case::test_case;

    #[test_case(Error::timeout("t"), "TIMEOUT")]
    #[test_case(Error::deser("d"), "DESERIALIZATION")]
    #[test_case(Error::ser("s"), "SERIALIZATION")]
    #[test_case(Error::io("i"), "CONNECTION_ERROR")]
    #[test_case(Error::other("o"), "UNKNOWN")]
    #[test_case(Error::http(503, http::HeaderMap::new(), bytes::Bytes::new()), "503")]
    #[test_case(Error::service_with_http_metadata(Status::default().set_code(Code::NotFound), Some(404), None), "404")]
    fn classify(e: Error, want: &str) {
        assert_eq!(error_type(&e), want, "{e:?}");
    }

    #[test]
    fn span_without_subscriber() -> anyhow::Result<()> {
        let request = reqwest::Client::builder()
            .build()?
            .get("https://showcase.googleapis.com/v1beta1/users?pageToken=secret")
            .build()?;
        let span = http_request_span(&request);
        record_result::<()>(&span, &Err(Error::timeout("t")));
        record_result(&span, &Ok(gax::response::Response::from(())));
        Ok(())
    }
}
