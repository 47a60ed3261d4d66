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

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to create the necessary
/// connection, the request may timeout before a response is received, or the
/// library may be unable to format the request due to invalid or missing
/// inputs.
///
/// Most applications will just return the error or log it. Some applications
/// may need to interrogate the error details. This type offers a series of
/// predicates to determine the error kind, and accessors to query the most
/// common error details. Applications can query the error
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use google_api_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_not_modified() => { println!("use the cached copy"); },
///     Err(e) if matches!(e.status(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.status().unwrap());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use google_api_gax::error::rpc::{Code, Status};
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_api_gax::error::Error;
    /// use google_api_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_api_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting an attempt timeout
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have completed in the service.
    ///
    /// # Troubleshooting
    ///
    /// The client libraries preserve unknown fields, so this typically
    /// indicates a field whose type changed in the service, or a proxy
    /// returning a non-JSON payload with a successful status code.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient.
    ///
    /// # Troubleshooting
    ///
    /// Common causes include header values with invalid characters (see
    /// [with_header][crate::options::RequestOptionsBuilder::with_header]), and
    /// a list of null fields that conflicts with the fields set in the request.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use google_api_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.errors);
    ///     }
    /// }
    /// ```
    ///
    /// Google REST APIs return a JSON error payload including the HTTP status
    /// code, a canonical status name, a human-readable message, and a list of
    /// [ErrorItem][crate::error::rpc::ErrorItem] values with the domain and
    /// reason of each problem.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_api_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, a proxy or the Google load balancers may generate errors
    /// without the detailed JSON payload. In such cases the client library
    /// returns the status code, headers, and payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_api_gax::error::Error;
    /// let e = fetch_if_changed("the thing");
    /// if let Some(etag) = e.http_headers().and_then(|h| h.get("etag")) {
    ///     println!("the current version is {etag:?}");
    /// }
    ///
    /// fn fetch_if_changed(name: &str) -> Error {
    ///     # let mut map = http::HeaderMap::new();
    ///     # map.insert("etag", http::HeaderValue::from_static("\"abc\""));
    ///     # Error::http(304, map, bytes::Bytes::new())
    /// }
    /// ```
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The resource has not changed since the version named in a conditional
    /// request.
    ///
    /// Requests with an `If-None-Match` header receive a `304 Not Modified`
    /// response when the resource still matches the given entity tag. The
    /// client libraries report this as an error, as there is no body to
    /// return. The response headers are available via
    /// [http_headers()][Error::http_headers].
    ///
    /// # Example
    /// ```
    /// use google_api_gax::error::Error;
    /// let e = Error::http(304, http::HeaderMap::new(), bytes::Bytes::new());
    /// assert!(e.is_not_modified());
    /// ```
    pub fn is_not_modified(&self) -> bool {
        self.http_status_code() == Some(http::StatusCode::NOT_MODIFIED.as_u16())
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot find a valid HTTP binding to make the request.
    ///
    /// This indicates the request is missing required path parameters.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A field used in
    /// the URL path of the request was not initialized in the request builder.
    /// The error message names the missing parameter.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured
    /// [Credentials][crate::credentials::Credentials] provider. Consult the
    /// documentation for the specific provider you configured.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a broken connection after the request is sent, or
    /// failing to resolve the endpoint host.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request, such as a closed
    /// connection or an unreachable endpoint. Verify the endpoint configured
    /// in the client builder.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer, with the response headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
            status_code: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer.
    ///
    /// This includes HTTP errors without the JSON error payload of the Google
    /// REST APIs, such as errors generated in a proxy, and `304 Not Modified`
    /// responses.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => match std::str::from_utf8(p.as_ref()) {
                Ok(message) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
                Err(_) => write!(f, "the HTTP transport reports a [{code}] error: {p:?}"),
            },
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, ErrorItem};
    use std::error::Error as StdError;
    use test_case::test_case;

    fn source() -> std::io::Error {
        std::io::Error::other("simulated problem")
    }

    fn json_headers() -> HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND")
            .set_errors([ErrorItem::default().set_reason("notFound")]);
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(!error.is_not_modified(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("no access");
        let error =
            Error::service_with_http_metadata(status.clone(), Some(403), Some(json_headers()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(403));
        assert_eq!(error.http_headers(), Some(&json_headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test_case(Error::timeout(source()), Error::is_timeout; "timeout")]
    #[test_case(Error::deser(source()), Error::is_deserialization; "deser")]
    #[test_case(Error::ser(source()), Error::is_serialization; "ser")]
    #[test_case(Error::binding(source()), Error::is_binding; "binding")]
    #[test_case(Error::io(source()), Error::is_io; "io")]
    fn with_source(error: Error, predicate: fn(&Error) -> bool) {
        assert!(predicate(&error), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("bad key"), "{error}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, json_headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&json_headers()));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(500, json_headers(), payload.clone());
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
    }

    #[test]
    fn not_modified() {
        let mut headers = json_headers();
        headers.insert("etag", http::HeaderValue::from_static("\"v1\""));
        let error = Error::http(304, headers.clone(), bytes::Bytes::new());
        assert!(error.is_not_modified(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.to_string().contains("304"), "{error}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(json_headers(), source());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&json_headers()));
    }

    #[test]
    fn other() {
        let error = Error::other("unclassified");
        assert!(error.to_string().contains("unclassified"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }
}
