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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Showcase API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_api_showcase_v1beta1::client::Identity;
/// let client = Identity::builder().build().await?;
/// // use `client` to make requests to the Showcase API.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A simple identity service.
///
/// # Configuration
///
/// To configure `Identity` use the `with_*` methods in the type returned
/// by [builder()][Identity::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://showcase.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override
///   this default.
/// * [with_credentials()]: by default this client sends anonymous requests.
///   Most services need an access token or an API key.
///
/// [with_endpoint()]: super::builder::identity::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::identity::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Identity` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `Identity` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Identity {
    inner: std::sync::Arc<dyn super::stub::dynamic::Identity>,
}

impl Identity {
    /// Returns a builder for [Identity].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_api_showcase_v1beta1::client::Identity;
    /// let client = Identity::builder().build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::identity::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::identity::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Identity + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Identity>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Identity> {
        super::transport::Identity::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Identity> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Identity::new)
    }

    /// Creates a user.
    pub fn create_user(&self) -> super::builder::identity::CreateUser {
        super::builder::identity::CreateUser::new(self.inner.clone())
    }

    /// Retrieves the user with the given name.
    pub fn get_user(&self) -> super::builder::identity::GetUser {
        super::builder::identity::GetUser::new(self.inner.clone())
    }

    /// Updates a user.
    ///
    /// Only the fields in the update mask are changed. Use
    /// [set_null_fields][crate::builder::identity::UpdateUser::set_null_fields]
    /// to clear fields.
    pub fn update_user(&self) -> super::builder::identity::UpdateUser {
        super::builder::identity::UpdateUser::new(self.inner.clone())
    }

    /// Deletes a user, their profile, and all of their authored messages.
    pub fn delete_user(&self) -> super::builder::identity::DeleteUser {
        super::builder::identity::DeleteUser::new(self.inner.clone())
    }

    /// Lists all users.
    pub fn list_users(&self) -> super::builder::identity::ListUsers {
        super::builder::identity::ListUsers::new(self.inner.clone())
    }
}

/// Implements a client for the Showcase API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_api_showcase_v1beta1::client::Messaging;
/// let client = Messaging::builder().build().await?;
/// // use `client` to make requests to the Showcase API.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A simple messaging service that implements chat rooms and profile posts.
///
/// # Configuration
///
/// To configure `Messaging` use the `with_*` methods in the type returned
/// by [builder()][Messaging::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://showcase.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override
///   this default.
/// * [with_credentials()]: by default this client sends anonymous requests.
///   Most services need an access token or an API key.
///
/// [with_endpoint()]: super::builder::messaging::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::messaging::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `Messaging` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `Messaging` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Messaging {
    inner: std::sync::Arc<dyn super::stub::dynamic::Messaging>,
}

impl Messaging {
    /// Returns a builder for [Messaging].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_api_showcase_v1beta1::client::Messaging;
    /// let client = Messaging::builder().build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::messaging::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::messaging::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Messaging + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Messaging>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Messaging> {
        super::transport::Messaging::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Messaging> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Messaging::new)
    }

    /// Creates a room.
    pub fn create_room(&self) -> super::builder::messaging::CreateRoom {
        super::builder::messaging::CreateRoom::new(self.inner.clone())
    }

    /// Retrieves the room with the given name.
    pub fn get_room(&self) -> super::builder::messaging::GetRoom {
        super::builder::messaging::GetRoom::new(self.inner.clone())
    }

    /// Deletes a room and all of its blurbs.
    pub fn delete_room(&self) -> super::builder::messaging::DeleteRoom {
        super::builder::messaging::DeleteRoom::new(self.inner.clone())
    }

    /// Lists all chat rooms.
    pub fn list_rooms(&self) -> super::builder::messaging::ListRooms {
        super::builder::messaging::ListRooms::new(self.inner.clone())
    }

    /// Creates a blurb.
    ///
    /// If the parent is a room, the blurb is understood to be a message in that
    /// room. If the parent is a profile, the blurb is understood to be a post on
    /// the profile.
    pub fn create_blurb(&self) -> super::builder::messaging::CreateBlurb {
        super::builder::messaging::CreateBlurb::new(self.inner.clone())
    }

    /// Retrieves the blurb with the given name.
    pub fn get_blurb(&self) -> super::builder::messaging::GetBlurb {
        super::builder::messaging::GetBlurb::new(self.inner.clone())
    }

    /// Lists blurbs for a specific chat room or user profile depending on the
    /// parent resource name.
    pub fn list_blurbs(&self) -> super::builder::messaging::ListBlurbs {
        super::builder::messaging::ListBlurbs::new(self.inner.clone())
    }

    /// Searches the blurbs of a chat room or user profile.
    ///
    /// The page token for this method is sent in the request body.
    pub fn search_blurbs(&self) -> super::builder::messaging::SearchBlurbs {
        super::builder::messaging::SearchBlurbs::new(self.inner.clone())
    }
}
