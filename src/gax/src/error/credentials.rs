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

use std::error::Error;
use std::sync::Arc;

type ArcError = Arc<dyn Error + Send + Sync>;

/// Represents an error creating or using [Credentials].
///
/// Providers return this error when they cannot produce the authentication
/// headers for a request. For example, a provider backed by a token file may
/// fail to read the file, or a provider fetching tokens from a metadata server
/// may fail to contact it. The latter kind of errors may be transient.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be custom credential providers, and tests mocking them.
///
/// # Example
/// ```
/// # use google_api_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create credentials");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
///
/// [Credentials]: crate::credentials::Credentials
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: String,
    source: Option<ArcError>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping some other error.
    ///
    /// # Example
    /// ```
    /// # use google_api_gax::error::CredentialsError;
    /// let source = std::io::Error::other("cannot read token file");
    /// let err = CredentialsError::from_source(false, source);
    /// assert!(!err.is_transient());
    /// assert!(format!("{err}").contains("cannot read token file"));
    /// ```
    pub fn from_source<T>(is_transient: bool, source: T) -> Self
    where
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and a source.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the error is transient and may succeed in future
    /// attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

fn transient_msg(is_transient: bool) -> &'static str {
    if is_transient {
        TRANSIENT_MSG
    } else {
        PERMANENT_MSG
    }
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot create the authentication headers, {}, {}",
            transient_msg(self.is_transient),
            self.message
        )
    }
}

// The source is the wrapped error, not the `Arc` holding it.
impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_source(transient: bool) {
        let got = CredentialsError::from_source(transient, std::io::Error::other("test-only"));
        assert_eq!(got.is_transient(), transient, "{got}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{got:?}");
        assert!(got.to_string().contains("test-only"), "{got}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let got = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(got.source().is_none(), "{got}");
        assert!(got.to_string().contains("test-only"), "{got}");
    }

    #[test]
    fn new() {
        let got = CredentialsError::new(false, "outer", std::io::Error::other("inner"));
        assert!(got.to_string().contains("outer"), "{got}");
        let source = got
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{got:?}");
    }

    #[test]
    fn source_chain_through_clone() {
        let got = CredentialsError::from_source(false, std::io::Error::other("inner")).clone();
        let inner = got
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .map(|e| e.to_string());
        assert_eq!(inner.as_deref(), Some("inner"), "{got:?}");
        let wrapper = got.source().and_then(|e| e.downcast_ref::<ArcError>());
        assert!(wrapper.is_none(), "{got:?}");
    }

    #[test]
    fn fmt() {
        let got = CredentialsError::from_msg(true, "test-only-err-123").to_string();
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(TRANSIENT_MSG), "{got}");

        let got = CredentialsError::from_msg(false, "test-only-err-123").to_string();
        assert!(got.contains(PERMANENT_MSG), "{got}");
    }
}
