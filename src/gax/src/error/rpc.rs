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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error details returned by Google REST APIs.
///
/// Failed requests return a JSON payload with the form:
///
/// ```norust
/// {
///   "error": {
///     "code": 404,
///     "message": "User users/123 not found",
///     "status": "NOT_FOUND",
///     "errors": [{"domain": "global", "reason": "notFound", "message": "..."}],
///     "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", ...}]
///   }
/// }
/// ```
///
/// You can find out more about this error model in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// The individual errors reported by the service.
    ///
    /// Most discovery-based APIs report at least one item, with a `reason`
    /// such as `notFound` or `rateLimitExceeded`.
    pub errors: Vec<ErrorItem>,

    /// Structured error details, kept in their JSON form.
    ///
    /// Each detail carries an `@type` field naming its schema.
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [errors][Status::errors].
    pub fn set_errors<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = ErrorItem>,
    {
        self.errors = v.into_iter().collect();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = serde_json::Value>,
    {
        self.details = v.into_iter().collect();
        self
    }
}

/// One of the errors in a [Status].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorItem {
    /// The scope of the error, for example `global` or `usageLimits`.
    pub domain: String,

    /// A short identifier of the error, for example `notFound`.
    pub reason: String,

    /// A human-readable description of the error.
    pub message: String,

    /// The request field, header, or parameter that caused the error, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// How to interpret [location][ErrorItem::location], for example
    /// `parameter` or `header`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location_type: String,
}

impl ErrorItem {
    /// Sets the value for [domain][ErrorItem::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value for [reason][ErrorItem::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [message][ErrorItem::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [location][ErrorItem::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value for [location_type][ErrorItem::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = v.into();
        self
    }
}

/// The canonical error codes for Google APIs.
///
/// Sometimes multiple error codes may apply. Services should return the most
/// specific error code that applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    ///
    /// HTTP Mapping: 200 OK
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    ///
    /// HTTP Mapping: 499 Client Closed Request
    Cancelled = 1,

    /// Unknown error.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    #[default]
    Unknown = 2,

    /// The client specified an invalid argument.
    ///
    /// HTTP Mapping: 400 Bad Request
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete.
    ///
    /// HTTP Mapping: 504 Gateway Timeout
    DeadlineExceeded = 4,

    /// Some requested entity was not found.
    ///
    /// HTTP Mapping: 404 Not Found
    NotFound = 5,

    /// The entity that a client attempted to create already exists.
    ///
    /// HTTP Mapping: 409 Conflict
    AlreadyExists = 6,

    /// The caller does not have permission to execute the specified
    /// operation.
    ///
    /// HTTP Mapping: 403 Forbidden
    PermissionDenied = 7,

    /// Some resource has been exhausted, perhaps a per-user quota.
    ///
    /// HTTP Mapping: 429 Too Many Requests
    ResourceExhausted = 8,

    /// The operation was rejected because the system is not in a state
    /// required for the operation's execution.
    ///
    /// HTTP Mapping: 400 Bad Request
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue such as
    /// a sequencer check failure or transaction abort.
    ///
    /// HTTP Mapping: 409 Conflict
    Aborted = 10,

    /// The operation was attempted past the valid range.
    ///
    /// HTTP Mapping: 400 Bad Request
    OutOfRange = 11,

    /// The operation is not implemented or is not supported/enabled in this
    /// service.
    ///
    /// HTTP Mapping: 501 Not Implemented
    Unimplemented = 12,

    /// Internal errors.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    Internal = 13,

    /// The service is currently unavailable.
    ///
    /// HTTP Mapping: 503 Service Unavailable
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    DataLoss = 15,

    /// The request does not have valid authentication credentials for the
    /// operation.
    ///
    /// HTTP Mapping: 401 Unauthorized
    Unauthenticated = 16,
}

impl Code {
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// The closest code for an HTTP status.
    ///
    /// Older APIs omit the `status` field in their error payloads, only the
    /// HTTP status code is available.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            400..=499 => Code::FailedPrecondition,
            500..=599 => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl std::convert::From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::convert::TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        match value {
            "OK" => Ok(Code::Ok),
            "CANCELLED" => Ok(Code::Cancelled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            _ => Err(format!("unknown status code value {value}")),
        }
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

/// The JSON envelope used in error responses.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: u16,
    message: String,
    status: Option<String>,
    errors: Vec<ErrorItem>,
    details: Vec<serde_json::Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) => Code::Unknown,
            None => Code::from_http_status(wrapper.code),
        };
        Ok(Status {
            code,
            message: wrapper.message,
            errors: wrapper.errors,
            details: wrapper.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::Unimplemented)
            .set_message("test-message");
        let want = Status {
            code: Code::Unimplemented,
            message: "test-message".into(),
            ..Default::default()
        };
        assert_eq!(got, want);

        let got = Status::default()
            .set_code(Code::Unimplemented as i32)
            .set_message("test-message");
        assert_eq!(got, want);
    }

    #[test]
    fn status_errors_and_details() {
        let item = ErrorItem::default()
            .set_domain("global")
            .set_reason("required")
            .set_message("Required parameter: name")
            .set_location("name")
            .set_location_type("parameter");
        let detail = json!({"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "R"});
        let got = Status::default()
            .set_errors([item.clone()])
            .set_details([detail.clone()]);
        assert_eq!(got.errors, vec![item]);
        assert_eq!(got.details, vec![detail]);
    }

    #[test]
    fn error_item_serialization() -> Result<()> {
        let item = ErrorItem::default()
            .set_domain("global")
            .set_reason("notFound")
            .set_message("not here");
        let got = serde_json::to_value(&item)?;
        assert_eq!(
            got,
            json!({"domain": "global", "reason": "notFound", "message": "not here"})
        );

        let input = json!({
            "domain": "global",
            "reason": "invalid",
            "message": "bad value",
            "location": "pageSize",
            "locationType": "parameter",
        });
        let got = serde_json::from_value::<ErrorItem>(input)?;
        assert_eq!(got.location, "pageSize");
        assert_eq!(got.location_type, "parameter");
        Ok(())
    }

    #[test]
    fn try_from_bytes() -> Result<()> {
        let payload = json!({"error": {
            "code": 404,
            "message": "User users/123 not found",
            "status": "NOT_FOUND",
            "errors": [{
                "domain": "global",
                "reason": "notFound",
                "message": "User users/123 not found",
            }],
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "RESOURCE_MISSING",
            }],
        }});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&payload)?;
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "User users/123 not found");
        assert_eq!(
            got.errors,
            vec![
                ErrorItem::default()
                    .set_domain("global")
                    .set_reason("notFound")
                    .set_message("User users/123 not found")
            ]
        );
        assert_eq!(got.details.len(), 1);
        Ok(())
    }

    #[test_case(400, Code::InvalidArgument)]
    #[test_case(401, Code::Unauthenticated)]
    #[test_case(403, Code::PermissionDenied)]
    #[test_case(404, Code::NotFound)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(418, Code::FailedPrecondition)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(599, Code::Internal)]
    fn try_from_bytes_without_status(http_code: u16, want: Code) -> Result<()> {
        let payload = json!({"error": {"code": http_code, "message": "legacy"}});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&payload)?;
        assert_eq!(got.code, want);
        assert_eq!(got.message, "legacy");
        Ok(())
    }

    #[test]
    fn try_from_bytes_unknown_status() -> Result<()> {
        let payload = json!({"error": {"code": 404, "status": "NOT_A_STATUS"}});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = Status::try_from(&payload)?;
        assert_eq!(got.code, Code::Unknown);
        Ok(())
    }

    #[test_case(r#"{"error": "bad request"}"#; "error is a string")]
    #[test_case("<html>bad gateway</html>"; "not json")]
    #[test_case(""; "empty")]
    fn try_from_bytes_not_status(input: &'static str) {
        let payload = bytes::Bytes::from_static(input.as_bytes());
        let got = Status::try_from(&payload);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::Unknown)]
    #[test_case(Code::InvalidArgument)]
    #[test_case(Code::DeadlineExceeded)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::AlreadyExists)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::ResourceExhausted)]
    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::OutOfRange)]
    #[test_case(Code::Unimplemented)]
    #[test_case(Code::Internal)]
    #[test_case(Code::Unavailable)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_names(code: Code) -> Result<()> {
        let name = code.to_string();
        assert_eq!(Code::try_from(name.as_str()), Ok(code));
        assert_eq!(Code::from(code as i32), code);
        Ok(())
    }

    #[test]
    fn code_unknown_values() {
        assert_eq!(Code::from(-1), Code::Unknown);
        assert_eq!(Code::from(17), Code::Unknown);
        assert!(Code::try_from("WHAT").is_err());
    }
}
