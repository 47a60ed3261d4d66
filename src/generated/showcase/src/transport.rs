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
//
// Code generated by sidekick. DO NOT EDIT.

use crate::Result;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::path_parameter;
use gaxi::path_template::expand;
use gaxi::query_parameter;

fn api_client_header() -> reqwest::header::HeaderValue {
    reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER)
}

/// Implements [Identity](super::stub::Identity) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Identity {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Identity")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Identity {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Identity for Identity {
    async fn create_user(
        &self,
        req: crate::model::CreateUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::User>> {
        let builder = self
            .inner
            .builder(reqwest::Method::POST, "v1beta1/users".to_string())
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, Some(req.user.unwrap_or_default()), options)
            .await
    }

    async fn get_user(
        &self,
        req: crate::model::GetUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::User>> {
        let path = expand("v1beta1/{+name}", &[("name", req.name.as_str())])?;
        let mut builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        if let Some(etag) = &req.if_none_match {
            builder = builder.header(reqwest::header::IF_NONE_MATCH, etag);
        }
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn update_user(
        &self,
        req: crate::model::UpdateUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::User>> {
        let name = req
            .user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .ok_or_else(|| path_parameter::missing("user.name"))?;
        let path = expand("v1beta1/{+name}", &[("name", name)])?;
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = query_parameter::add(builder, "updateMask", &req.update_mask)?;
        let body = gaxi::null_fields::to_json(&req.user.unwrap_or_default(), &req.null_fields)?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_user(
        &self,
        req: crate::model::DeleteUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let path = expand("v1beta1/{+name}", &[("name", req.name.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn list_users(
        &self,
        req: crate::model::ListUsersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListUsersResponse>> {
        let builder = self
            .inner
            .builder(reqwest::Method::GET, "v1beta1/users".to_string())
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }
}

/// Implements [Messaging](super::stub::Messaging) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Messaging {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Messaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Messaging")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Messaging {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Messaging for Messaging {
    async fn create_room(
        &self,
        req: crate::model::CreateRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Room>> {
        let builder = self
            .inner
            .builder(reqwest::Method::POST, "v1beta1/rooms".to_string())
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, Some(req.room.unwrap_or_default()), options)
            .await
    }

    async fn get_room(
        &self,
        req: crate::model::GetRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Room>> {
        let path = expand("v1beta1/{+name}", &[("name", req.name.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn delete_room(
        &self,
        req: crate::model::DeleteRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let path = expand("v1beta1/{+name}", &[("name", req.name.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn list_rooms(
        &self,
        req: crate::model::ListRoomsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListRoomsResponse>> {
        let builder = self
            .inner
            .builder(reqwest::Method::GET, "v1beta1/rooms".to_string())
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn create_blurb(
        &self,
        req: crate::model::CreateBlurbRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Blurb>> {
        let path = expand("v1beta1/{+parent}/blurbs", &[("parent", req.parent.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, Some(req.blurb.unwrap_or_default()), options)
            .await
    }

    async fn get_blurb(
        &self,
        req: crate::model::GetBlurbRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Blurb>> {
        let path = expand("v1beta1/{+name}", &[("name", req.name.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn list_blurbs(
        &self,
        req: crate::model::ListBlurbsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ListBlurbsResponse>> {
        let path = expand("v1beta1/{+parent}/blurbs", &[("parent", req.parent.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<NoBody>, options)
            .await
    }

    async fn search_blurbs(
        &self,
        req: crate::model::SearchBlurbsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::SearchBlurbsResponse>> {
        let path = expand("v1beta1/{+parent}/blurbs:search", &[("parent", req.parent.as_str())])?;
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, Some(req), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::Identity as _;

    #[tokio::test]
    async fn update_user_requires_name() -> anyhow::Result<()> {
        let config = gaxi::options::ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let stub = Identity::new(config).await?;
        let req = crate::model::UpdateUserRequest::new()
            .set_user(crate::model::User::new().set_display_name("Alice"));
        let err = stub
            .update_user(req, gax::options::RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_user_requires_name() -> anyhow::Result<()> {
        let config = gaxi::options::ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let stub = Identity::new(config).await?;
        let err = stub
            .get_user(
                crate::model::GetUserRequest::new(),
                gax::options::RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[test]
    fn api_client_header_value() {
        let value = api_client_header();
        let value = value.to_str().unwrap_or_default();
        assert!(value.starts_with("gl-rust/"), "{value}");
        assert!(
            value.ends_with(&format!("gapic/{}", env!("CARGO_PKG_VERSION"))),
            "{value}"
        );
    }
}
