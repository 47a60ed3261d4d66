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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! error conditions. In general, such tests use the client types and replace
//! the stub with a mock.
//!
//! The traits in this module define the interface between the clients and
//! their transport. Mocks implement the traits for the methods the test
//! exercises. Only the `client` types call the stubs.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::Identity].
///
/// Application developers may need to implement this trait to mock
/// `client::Identity`.  In other use-cases, application developers only
/// use `client::Identity` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait Identity: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Identity::create_user].
    fn create_user(
        &self,
        _req: crate::model::CreateUserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::User>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Identity::get_user].
    fn get_user(
        &self,
        _req: crate::model::GetUserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::User>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Identity::update_user].
    fn update_user(
        &self,
        _req: crate::model::UpdateUserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::User>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Identity::delete_user].
    fn delete_user(
        &self,
        _req: crate::model::DeleteUserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Identity::list_users].
    fn list_users(
        &self,
        _req: crate::model::ListUsersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListUsersResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}

/// Defines the trait used to implement [super::client::Messaging].
///
/// Application developers may need to implement this trait to mock
/// `client::Messaging`.  In other use-cases, application developers only
/// use `client::Messaging` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait Messaging: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::Messaging::create_room].
    fn create_room(
        &self,
        _req: crate::model::CreateRoomRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Room>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::get_room].
    fn get_room(
        &self,
        _req: crate::model::GetRoomRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Room>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::delete_room].
    fn delete_room(
        &self,
        _req: crate::model::DeleteRoomRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::list_rooms].
    fn list_rooms(
        &self,
        _req: crate::model::ListRoomsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListRoomsResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::create_blurb].
    fn create_blurb(
        &self,
        _req: crate::model::CreateBlurbRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Blurb>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::get_blurb].
    fn get_blurb(
        &self,
        _req: crate::model::GetBlurbRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Blurb>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::list_blurbs].
    fn list_blurbs(
        &self,
        _req: crate::model::ListBlurbsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListBlurbsResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::Messaging::search_blurbs].
    fn search_blurbs(
        &self,
        _req: crate::model::SearchBlurbsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::SearchBlurbsResponse>>> + Send
    {
        gaxi::unimplemented::unimplemented_stub()
    }
}
