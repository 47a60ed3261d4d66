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

pub mod identity {
    use crate::Result;

    /// A builder for [Identity][crate::client::Identity].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_api_showcase_v1beta1::*;
    /// # use builder::identity::ClientBuilder;
    /// # use client::Identity;
    /// let builder : ClientBuilder = Identity::builder();
    /// let client = builder
    ///     .with_endpoint("https://showcase.googleapis.com")
    ///     .build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Identity;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Identity;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Identity] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Identity::create_user][crate::client::Identity::create_user] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::identity::CreateUser;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateUser {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateUser(RequestBuilder<crate::model::CreateUserRequest>);

    impl CreateUser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateUserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::User> {
            (*self.0.stub)
                .create_user(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::User>> {
            (*self.0.stub)
                .create_user(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [user][crate::model::CreateUserRequest::user].
        pub fn set_user<T: Into<crate::model::User>>(mut self, v: T) -> Self {
            self.0.request.user = Some(v.into());
            self
        }

        /// Sets or clears the value of [user][crate::model::CreateUserRequest::user].
        pub fn set_or_clear_user<T: Into<crate::model::User>>(mut self, v: Option<T>) -> Self {
            self.0.request.user = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateUser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Identity::get_user][crate::client::Identity::get_user] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::identity::GetUser;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetUser {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetUser(RequestBuilder<crate::model::GetUserRequest>);

    impl GetUser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::User> {
            (*self.0.stub)
                .get_user(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::User>> {
            (*self.0.stub)
                .get_user(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetUserRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetUserRequest::if_none_match].
        ///
        /// The service responds with `304 Not Modified` if the user's etag
        /// matches this value. The call returns an error where
        /// [is_not_modified()][gax::error::Error::is_not_modified] is true.
        pub fn set_if_none_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets or clears the value of [if_none_match][crate::model::GetUserRequest::if_none_match].
        pub fn set_or_clear_if_none_match<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.if_none_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Identity::update_user][crate::client::Identity::update_user] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::identity::UpdateUser;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateUser {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateUser(RequestBuilder<crate::model::UpdateUserRequest>);

    impl UpdateUser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateUserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::User> {
            (*self.0.stub)
                .update_user(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::User>> {
            (*self.0.stub)
                .update_user(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [user][crate::model::UpdateUserRequest::user].
        pub fn set_user<T: Into<crate::model::User>>(mut self, v: T) -> Self {
            self.0.request.user = Some(v.into());
            self
        }

        /// Sets or clears the value of [user][crate::model::UpdateUserRequest::user].
        pub fn set_or_clear_user<T: Into<crate::model::User>>(mut self, v: Option<T>) -> Self {
            self.0.request.user = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateUserRequest::update_mask].
        ///
        /// The mask lists the fields to update using their JSON names.
        pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateUserRequest::update_mask].
        pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }

        /// Sets the value of [null_fields][crate::model::UpdateUserRequest::null_fields].
        ///
        /// Each entry is a dotted path of JSON field names, for example
        /// `nickname` or `settings.timeZone`. These fields are sent as JSON
        /// `null`, which clears them in the service. A field listed here must
        /// not have a value in the user, the call fails before sending the
        /// request if it does.
        pub fn set_null_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            self.0.request.null_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateUser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Identity::delete_user][crate::client::Identity::delete_user] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::identity::DeleteUser;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteUser {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteUser(RequestBuilder<crate::model::DeleteUserRequest>);

    impl DeleteUser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            (*self.0.stub)
                .delete_user(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<wkt::Empty>> {
            (*self.0.stub)
                .delete_user(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::DeleteUserRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Identity::list_users][crate::client::Identity::list_users] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::identity::ListUsers;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListUsers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListUsers(RequestBuilder<crate::model::ListUsersRequest>);

    impl ListUsers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Identity>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUsersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListUsersResponse> {
            (*self.0.stub)
                .list_users(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ListUsersResponse>> {
            (*self.0.stub)
                .list_users(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream stops after the page with an empty `next_page_token`,
        /// or after the first error.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListUsersResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_page_token(token);
                }
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListUsersResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [page_size][crate::model::ListUsersRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of [page_size][crate::model::ListUsersRequest::page_size].
        pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.page_size = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::ListUsersRequest::page_token].
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUsers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod messaging {
    use crate::Result;

    /// A builder for [Messaging][crate::client::Messaging].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_api_showcase_v1beta1::*;
    /// # use builder::messaging::ClientBuilder;
    /// # use client::Messaging;
    /// let builder : ClientBuilder = Messaging::builder();
    /// let client = builder
    ///     .with_endpoint("https://showcase.googleapis.com")
    ///     .build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Messaging;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Messaging;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Messaging] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Messaging::create_room][crate::client::Messaging::create_room] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::CreateRoom;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateRoom {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateRoom(RequestBuilder<crate::model::CreateRoomRequest>);

    impl CreateRoom {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateRoomRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Room> {
            (*self.0.stub)
                .create_room(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Room>> {
            (*self.0.stub)
                .create_room(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [room][crate::model::CreateRoomRequest::room].
        pub fn set_room<T: Into<crate::model::Room>>(mut self, v: T) -> Self {
            self.0.request.room = Some(v.into());
            self
        }

        /// Sets or clears the value of [room][crate::model::CreateRoomRequest::room].
        pub fn set_or_clear_room<T: Into<crate::model::Room>>(mut self, v: Option<T>) -> Self {
            self.0.request.room = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateRoom {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::get_room][crate::client::Messaging::get_room] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::GetRoom;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetRoom {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetRoom(RequestBuilder<crate::model::GetRoomRequest>);

    impl GetRoom {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRoomRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Room> {
            (*self.0.stub)
                .get_room(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Room>> {
            (*self.0.stub)
                .get_room(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetRoomRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRoom {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::delete_room][crate::client::Messaging::delete_room] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::DeleteRoom;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteRoom {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteRoom(RequestBuilder<crate::model::DeleteRoomRequest>);

    impl DeleteRoom {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteRoomRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wkt::Empty> {
            (*self.0.stub)
                .delete_room(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<wkt::Empty>> {
            (*self.0.stub)
                .delete_room(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::DeleteRoomRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteRoom {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::list_rooms][crate::client::Messaging::list_rooms] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::ListRooms;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListRooms {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListRooms(RequestBuilder<crate::model::ListRoomsRequest>);

    impl ListRooms {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRoomsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListRoomsResponse> {
            (*self.0.stub)
                .list_rooms(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ListRoomsResponse>> {
            (*self.0.stub)
                .list_rooms(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream stops after the page with an empty `next_page_token`,
        /// or after the first error.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListRoomsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_page_token(token);
                }
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListRoomsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [page_size][crate::model::ListRoomsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of [page_size][crate::model::ListRoomsRequest::page_size].
        pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.page_size = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::ListRoomsRequest::page_token].
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRooms {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::create_blurb][crate::client::Messaging::create_blurb] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::CreateBlurb;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateBlurb {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateBlurb(RequestBuilder<crate::model::CreateBlurbRequest>);

    impl CreateBlurb {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBlurbRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Blurb> {
            (*self.0.stub)
                .create_blurb(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Blurb>> {
            (*self.0.stub)
                .create_blurb(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [parent][crate::model::CreateBlurbRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [blurb][crate::model::CreateBlurbRequest::blurb].
        pub fn set_blurb<T: Into<crate::model::Blurb>>(mut self, v: T) -> Self {
            self.0.request.blurb = Some(v.into());
            self
        }

        /// Sets or clears the value of [blurb][crate::model::CreateBlurbRequest::blurb].
        pub fn set_or_clear_blurb<T: Into<crate::model::Blurb>>(mut self, v: Option<T>) -> Self {
            self.0.request.blurb = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBlurb {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::get_blurb][crate::client::Messaging::get_blurb] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::GetBlurb;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetBlurb {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetBlurb(RequestBuilder<crate::model::GetBlurbRequest>);

    impl GetBlurb {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBlurbRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Blurb> {
            (*self.0.stub)
                .get_blurb(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Blurb>> {
            (*self.0.stub)
                .get_blurb(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetBlurbRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBlurb {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::list_blurbs][crate::client::Messaging::list_blurbs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::ListBlurbs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListBlurbs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListBlurbs(RequestBuilder<crate::model::ListBlurbsRequest>);

    impl ListBlurbs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBlurbsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListBlurbsResponse> {
            (*self.0.stub)
                .list_blurbs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ListBlurbsResponse>> {
            (*self.0.stub)
                .list_blurbs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream stops after the page with an empty `next_page_token`,
        /// or after the first error.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListBlurbsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_page_token(token);
                }
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListBlurbsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListBlurbsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListBlurbsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of [page_size][crate::model::ListBlurbsRequest::page_size].
        pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.page_size = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::ListBlurbsRequest::page_token].
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBlurbs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Messaging::search_blurbs][crate::client::Messaging::search_blurbs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_api_showcase_v1beta1::builder;
    /// use builder::messaging::SearchBlurbs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # anyhow::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SearchBlurbs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SearchBlurbs(RequestBuilder<crate::model::SearchBlurbsRequest>);

    impl SearchBlurbs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Messaging>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SearchBlurbsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SearchBlurbsResponse> {
            (*self.0.stub)
                .search_blurbs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, returning the full response with its status
        /// code and headers.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::SearchBlurbsResponse>> {
            (*self.0.stub)
                .search_blurbs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream stops after the page with an empty `next_page_token`,
        /// or after the first error.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::SearchBlurbsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_page_token(token);
                }
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::SearchBlurbsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::SearchBlurbsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [query][crate::model::SearchBlurbsRequest::query].
        pub fn set_query<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.query = Some(v.into());
            self
        }

        /// Sets or clears the value of [query][crate::model::SearchBlurbsRequest::query].
        pub fn set_or_clear_query<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.query = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_size][crate::model::SearchBlurbsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of [page_size][crate::model::SearchBlurbsRequest::page_size].
        pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.page_size = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page_token][crate::model::SearchBlurbsRequest::page_token].
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SearchBlurbs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
