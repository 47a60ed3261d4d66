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

//! Credentials used to authenticate requests.
//!
//! The client libraries call a [Credentials] object before each request. The
//! credentials return the headers that authenticate the request, for example,
//! an `authorization` header with a bearer token, or an `x-goog-api-key`
//! header with an [API key].
//!
//! This crate provides a few simple providers:
//! - [anonymous] credentials add no headers. Use these with public resources,
//!   and with emulators or test servers.
//! - [access_token] credentials send a pre-existing OAuth2 access token.
//! - [api_key] credentials send an API key.
//!
//! Applications with more complex needs can implement [CredentialsProvider]
//! and convert their implementation to `Credentials` using `From`.
//!
//! [API key]: https://cloud.google.com/docs/authentication/api-keys

use crate::error::CredentialsError;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::future::Future;
use std::sync::Arc;

/// The result type used by credential providers.
pub type Result<T> = std::result::Result<T, CredentialsError>;

const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

/// An implementation of [CredentialsProvider], shared by all the requests of a
/// client.
///
/// `Credentials` are cheap to clone, all clones share the same provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// The trait implemented by all credential providers.
///
/// # Example
/// ```
/// # use google_api_gax::credentials::{Credentials, CredentialsProvider, Result};
/// # use http::{HeaderMap, HeaderValue};
/// #[derive(Debug)]
/// struct FromEnvironment;
/// impl CredentialsProvider for FromEnvironment {
///     async fn headers(&self) -> Result<HeaderMap> {
///         let mut headers = HeaderMap::new();
///         headers.insert("x-goog-api-key", HeaderValue::from_static("from-env"));
///         Ok(headers)
///     }
/// }
/// let credentials = Credentials::from(FromEnvironment);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    ///
    /// The provider may refresh tokens as needed, and may return the same
    /// headers for many requests.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

/// Dyn-compatible versions of the traits in this module.
pub mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the authentication headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible version.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Anonymous credentials.
///
/// These credentials do not provide any authentication information. They are
/// useful for accessing public resources that do not require authentication,
/// and for tests against local servers.
pub mod anonymous {
    use super::*;

    #[derive(Debug)]
    struct AnonymousCredentials;

    impl CredentialsProvider for AnonymousCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    /// A builder for creating anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder {}

    impl Builder {
        /// Creates a new builder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a [Credentials] instance.
        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousCredentials)
        }
    }
}

/// Credentials using a pre-existing OAuth2 access token.
///
/// The token is sent as-is, in an `authorization: Bearer` header. These
/// credentials do not refresh the token. Applications obtaining tokens from
/// other sources (e.g. `gcloud auth print-access-token`) can use them for
/// short-lived programs.
pub mod access_token {
    use super::*;

    struct AccessTokenCredentials {
        token: HeaderValue,
        quota_project_id: Option<String>,
    }

    impl std::fmt::Debug for AccessTokenCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AccessTokenCredentials")
                .field("token", &"[censored]")
                .field("quota_project_id", &self.quota_project_id)
                .finish()
        }
    }

    impl CredentialsProvider for AccessTokenCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            build_headers(
                http::header::AUTHORIZATION,
                self.token.clone(),
                &self.quota_project_id,
            )
        }
    }

    /// A builder for access token credentials.
    #[derive(Debug)]
    pub struct Builder {
        token: String,
        quota_project_id: Option<String>,
    }

    impl Builder {
        /// Creates a new builder with the given access token.
        ///
        /// # Example
        /// ```
        /// # use google_api_gax::credentials::access_token::Builder;
        /// let credentials = Builder::new("ya29.placeholder").build();
        /// ```
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
                quota_project_id: None,
            }
        }

        /// Sets the [quota project] for these credentials.
        ///
        /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
        pub fn with_quota_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.quota_project_id = Some(v.into());
            self
        }

        /// Returns a [Credentials] instance with the configured settings.
        ///
        /// Fails if the token contains characters that are not valid in HTTP
        /// headers.
        pub fn build(self) -> Result<Credentials> {
            let token = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| CredentialsError::new(false, "invalid access token", e))?;
            Ok(Credentials::from(AccessTokenCredentials {
                token,
                quota_project_id: self.quota_project_id,
            }))
        }
    }
}

/// Credentials using an [API key].
///
/// Only some services and methods accept API keys. Consult the service
/// documentation for details.
///
/// [API key]: https://cloud.google.com/docs/authentication/api-keys
pub mod api_key {
    use super::*;

    const API_KEY_HEADER_KEY: &str = "x-goog-api-key";

    struct ApiKeyCredentials {
        api_key: HeaderValue,
        quota_project_id: Option<String>,
    }

    impl std::fmt::Debug for ApiKeyCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ApiKeyCredentials")
                .field("api_key", &"[censored]")
                .field("quota_project_id", &self.quota_project_id)
                .finish()
        }
    }

    impl CredentialsProvider for ApiKeyCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            build_headers(
                HeaderName::from_static(API_KEY_HEADER_KEY),
                self.api_key.clone(),
                &self.quota_project_id,
            )
        }
    }

    /// A builder for API key credentials.
    #[derive(Debug)]
    pub struct Builder {
        api_key: String,
        quota_project_id: Option<String>,
    }

    impl Builder {
        /// Creates a new builder with the given API key.
        ///
        /// # Example
        /// ```
        /// # use google_api_gax::credentials::api_key::Builder;
        /// let credentials = Builder::new("my-api-key").build();
        /// ```
        pub fn new<T: Into<String>>(api_key: T) -> Self {
            Self {
                api_key: api_key.into(),
                quota_project_id: None,
            }
        }

        /// Sets the [quota project] for these credentials.
        ///
        /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
        pub fn with_quota_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.quota_project_id = Some(v.into());
            self
        }

        /// Returns a [Credentials] instance with the configured settings.
        pub fn build(self) -> Result<Credentials> {
            let api_key = HeaderValue::from_str(&self.api_key)
                .map_err(|e| CredentialsError::new(false, "invalid API key", e))?;
            Ok(Credentials::from(ApiKeyCredentials {
                api_key,
                quota_project_id: self.quota_project_id,
            }))
        }
    }
}

fn build_headers(
    name: HeaderName,
    mut value: HeaderValue,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    value.set_sensitive(true);
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(name, value);
    if let Some(project) = quota_project_id {
        let project = HeaderValue::from_str(project)
            .map_err(|e| CredentialsError::new(false, "invalid quota project id", e))?;
        headers.insert(HeaderName::from_static(QUOTA_PROJECT_KEY), project);
    }
    Ok(headers)
}
