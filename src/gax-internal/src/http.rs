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

use crate::observability::{http_request_span, record_result};
use crate::options::{ClientConfig, Credentials};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::credentials::anonymous;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use reqwest::header::{HeaderName, HeaderValue};
use tracing::Instrument;

/// The user agent sent with every request, after any application prefix.
pub const DEFAULT_USER_AGENT: &str = concat!("google-api-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: Option<String>,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(config: ClientConfig, default_endpoint: &str) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let cred = config
            .cred
            .unwrap_or_else(|| anonymous::Builder::new().build());
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint,
            user_agent: config.user_agent,
            tracing,
        })
    }

    /// Starts a request for `path`, resolved relative to the endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, crate::path_template::resolve(&self.endpoint, &path))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        builder = builder
            .query(&[("alt", "json")])
            .header(reqwest::header::USER_AGENT, self.user_agent(&options)?);
        if !options.fields().is_empty() {
            builder = builder.query(&[("fields", options.fields().join(","))]);
        }
        if let Some(quota_user) = options.quota_user() {
            builder = builder.query(&[("quotaUser", quota_user)]);
        }
        for (name, value) in options.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?;
            let value = HeaderValue::from_str(value).map_err(Error::ser)?;
            builder = builder.header(name, value);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.request_attempt(builder).await
    }

    fn user_agent(&self, options: &RequestOptions) -> Result<HeaderValue> {
        let prefix = options
            .user_agent()
            .as_deref()
            .or(self.user_agent.as_deref());
        let value = match prefix {
            Some(p) => format!("{p} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        HeaderValue::from_str(&value).map_err(Error::ser)
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<Response<O>> {
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);
        let request = builder.build().map_err(Error::ser)?;
        tracing::debug!(method = %request.method(), path = request.url().path(), "sending request");
        if !self.tracing {
            return self.send(request).await;
        }
        let span = http_request_span(&request);
        let result = self.send(request).instrument(span.clone()).await;
        record_result(&span, &result);
        result
    }

    async fn send<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
    ) -> Result<Response<O>> {
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        tracing::debug!(status = response.status().as_u16(), "received response");
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts an unsuccessful response into an error.
///
/// Responses with the standard error envelope become service errors, other
/// responses (including `304 Not Modified`) keep the raw status code, headers
/// and payload.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // A 204 has no body, and an empty body is not valid JSON.
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && status == reqwest::StatusCode::NO_CONTENT) => {
            O::default()
        }
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_status(status).set_headers(parts.headers),
        response,
    ))
}
