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

//! Per request options.
//!
//! The client library defaults are intended to work for most applications,
//! but applications sometimes need to customize a single call. For example,
//! they may set a timeout for a specific call, request a partial response, or
//! attribute the call to a different user for quota purposes.
//!
//! The `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait, where applications can override these
//! defaults.

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    fields: Vec<String>,
    quota_user: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the HTTP request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Selects the fields included in the response.
    ///
    /// The service returns only these fields. See [partial responses] for the
    /// syntax. Calling this function again adds more fields to the selection.
    ///
    /// [partial responses]: https://developers.google.com/gdata/docs/2.0/basics#PartialResponse
    pub fn set_fields<I, V>(&mut self, v: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields.extend(v.into_iter().map(|s| s.into()));
    }

    /// Gets the partial response selectors.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Sets the user used for quota accounting.
    ///
    /// An arbitrary string that uniquely identifies a user, up to 40
    /// characters. The services use it to enforce per-user quota limits.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    /// Gets the quota user.
    pub fn quota_user(&self) -> &Option<String> {
        &self.quota_user
    }

    /// Adds a header to the request.
    ///
    /// The header is appended, headers with the same name are all sent.
    pub fn add_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.headers.push((name.into(), value.into()));
    }

    /// Gets the additional headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the name of the resource targeted
/// by the RPC, as well as any options affecting the request, such as
/// additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the HTTP request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Selects the fields included in the response.
    fn with_fields<I, V>(self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>;

    /// Sets the user used for quota accounting.
    fn with_quota_user<V: Into<String>>(self, v: V) -> Self;

    /// Adds a header to the request.
    fn with_header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_fields<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.request_options().set_fields(v);
        self
    }

    fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_user(v);
        self
    }

    fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.request_options().add_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.fields().is_empty(), "{opts:?}");
        assert_eq!(opts.quota_user(), &None);
        assert!(opts.headers().is_empty(), "{opts:?}");

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_fields(["name", "etag"]);
        opts.set_fields(["nextPageToken"]);
        assert_eq!(opts.fields(), &["name", "etag", "nextPageToken"]);

        opts.set_quota_user("user-123");
        assert_eq!(opts.quota_user().as_deref(), Some("user-123"));

        opts.add_header("x-test-header", "a");
        opts.add_header("x-test-header", "b");
        assert_eq!(
            opts.headers(),
            &[
                ("x-test-header".to_string(), "a".to_string()),
                ("x-test-header".to_string(), "b".to_string())
            ]
        );
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default();
        assert_eq!(builder.request_options(), &RequestOptions::default());

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );
        assert_eq!(builder.request_options().attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));

        let mut builder = TestBuilder::default().with_fields(["items(name)", "nextPageToken"]);
        assert_eq!(
            builder.request_options().fields(),
            &["items(name)", "nextPageToken"]
        );

        let mut builder = TestBuilder::default().with_quota_user("user-123");
        assert_eq!(
            builder.request_options().quota_user().as_deref(),
            Some("user-123")
        );

        let mut builder = TestBuilder::default().with_header("x-goog-request-reason", "audit");
        assert_eq!(
            builder.request_options().headers(),
            &[("x-goog-request-reason".to_string(), "audit".to_string())]
        );
    }
}
