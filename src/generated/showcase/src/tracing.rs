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

/// Implements a [Identity](super::stub::Identity) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Identity<T>
where
    T: super::stub::Identity + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Identity<T>
where
    T: super::stub::Identity + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Identity for Identity<T>
where
    T: super::stub::Identity + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_user(
        &self,
        req: crate::model::CreateUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::User>> {
        self.inner.create_user(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_user(
        &self,
        req: crate::model::GetUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::User>> {
        self.inner.get_user(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_user(
        &self,
        req: crate::model::UpdateUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::User>> {
        self.inner.update_user(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_user(
        &self,
        req: crate::model::DeleteUserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        self.inner.delete_user(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_users(
        &self,
        req: crate::model::ListUsersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListUsersResponse>> {
        self.inner.list_users(req, options).await
    }
}

/// Implements a [Messaging](super::stub::Messaging) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Messaging<T>
where
    T: super::stub::Messaging + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Messaging<T>
where
    T: super::stub::Messaging + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Messaging for Messaging<T>
where
    T: super::stub::Messaging + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_room(
        &self,
        req: crate::model::CreateRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Room>> {
        self.inner.create_room(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_room(
        &self,
        req: crate::model::GetRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Room>> {
        self.inner.get_room(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_room(
        &self,
        req: crate::model::DeleteRoomRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        self.inner.delete_room(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_rooms(
        &self,
        req: crate::model::ListRoomsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListRoomsResponse>> {
        self.inner.list_rooms(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_blurb(
        &self,
        req: crate::model::CreateBlurbRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Blurb>> {
        self.inner.create_blurb(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_blurb(
        &self,
        req: crate::model::GetBlurbRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Blurb>> {
        self.inner.get_blurb(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_blurbs(
        &self,
        req: crate::model::ListBlurbsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBlurbsResponse>> {
        self.inner.list_blurbs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn search_blurbs(
        &self,
        req: crate::model::SearchBlurbsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SearchBlurbsResponse>> {
        self.inner.search_blurbs(req, options).await
    }
}
