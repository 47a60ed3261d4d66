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
#![no_implicit_prelude]
extern crate gax;
extern crate serde;
extern crate serde_json;
extern crate serde_with;
extern crate std;
extern crate wkt;

/// A user.
///
/// Fields not set (`None`) are omitted from request bodies. To send a field
/// with its zero value set it to `Some(zero)`. To clear a field in an update
/// use [UpdateUser::set_null_fields][crate::builder::identity::UpdateUser::set_null_fields].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct User {
    /// The resource name of the user, for example `users/123`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The display name of the user.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The email address of the user.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub email: std::option::Option<std::string::String>,

    /// The age of the user in years.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub age: std::option::Option<i32>,

    /// The height of the user in feet.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<wkt::internal::F64>")]
    pub height_feet: std::option::Option<f64>,

    /// The nickname of the user.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub nickname: std::option::Option<std::string::String>,

    /// Enables the receiving of notifications.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_notifications: std::option::Option<bool>,

    /// Output only. The creation time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<std::string::String>,

    /// Output only. The last update time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<std::string::String>,

    /// An opaque version identifier, changes on each update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub etag: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl User {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::User::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::User::name].
    pub fn set_or_clear_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [display_name][crate::model::User::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::User::display_name].
    pub fn set_or_clear_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [email][crate::model::User::email].
    pub fn set_email<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.email = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [email][crate::model::User::email].
    pub fn set_or_clear_email<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.email = v.map(|x| x.into());
        self
    }

    /// Sets the value of [age][crate::model::User::age].
    pub fn set_age<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.age = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [age][crate::model::User::age].
    pub fn set_or_clear_age<T: std::convert::Into<i32>>(mut self, v: std::option::Option<T>) -> Self {
        self.age = v.map(|x| x.into());
        self
    }

    /// Sets the value of [height_feet][crate::model::User::height_feet].
    pub fn set_height_feet<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.height_feet = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [height_feet][crate::model::User::height_feet].
    pub fn set_or_clear_height_feet<T: std::convert::Into<f64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.height_feet = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nickname][crate::model::User::nickname].
    pub fn set_nickname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.nickname = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nickname][crate::model::User::nickname].
    pub fn set_or_clear_nickname<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.nickname = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_notifications][crate::model::User::enable_notifications].
    pub fn set_enable_notifications<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_notifications = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_notifications][crate::model::User::enable_notifications].
    pub fn set_or_clear_enable_notifications<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.enable_notifications = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_time][crate::model::User::create_time].
    pub fn set_create_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::User::update_time].
    pub fn set_update_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::User::etag].
    pub fn set_etag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.etag = std::option::Option::Some(v.into());
        self
    }
}

/// A chat room.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Room {
    /// The resource name of the chat room, for example `rooms/456`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The human readable name of the chat room.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The description of the chat room.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// Output only. The creation time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<std::string::String>,

    /// Output only. The last update time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Room {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Room::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::Room::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::Room::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Room::description].
    pub fn set_or_clear_description<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Room::create_time].
    pub fn set_create_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Room::update_time].
    pub fn set_update_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.update_time = std::option::Option::Some(v.into());
        self
    }
}

/// A message posted by a user to a room or to another user's profile.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Blurb {
    /// The resource name of the blurb, for example `rooms/456/blurbs/789`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The resource name of the blurb's author.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user: std::option::Option<std::string::String>,

    /// The textual content of this blurb.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub text: std::option::Option<std::string::String>,

    /// A relevance score assigned by the service.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<wkt::internal::F32>")]
    pub score: std::option::Option<f32>,

    /// The number of times the blurb was viewed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<wkt::internal::I64>")]
    pub view_count: std::option::Option<i64>,

    /// Output only. The creation time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<std::string::String>,

    /// Output only. The last update time, in RFC 3339 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Blurb {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Blurb::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [user][crate::model::Blurb::user].
    pub fn set_user<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.user = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [text][crate::model::Blurb::text].
    pub fn set_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [score][crate::model::Blurb::score].
    pub fn set_score<T: std::convert::Into<f32>>(mut self, v: T) -> Self {
        self.score = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [score][crate::model::Blurb::score].
    pub fn set_or_clear_score<T: std::convert::Into<f32>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.score = v.map(|x| x.into());
        self
    }

    /// Sets the value of [view_count][crate::model::Blurb::view_count].
    pub fn set_view_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.view_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Blurb::create_time].
    pub fn set_create_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Blurb::update_time].
    pub fn set_update_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.update_time = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [Identity::create_user][crate::client::Identity::create_user].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateUserRequest {
    /// The user to create, sent as the request body.
    pub user: std::option::Option<crate::model::User>,
}

impl CreateUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [user][crate::model::CreateUserRequest::user].
    pub fn set_user<T: std::convert::Into<crate::model::User>>(mut self, v: T) -> Self {
        self.user = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [Identity::get_user][crate::client::Identity::get_user].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUserRequest {
    /// The resource name of the requested user.
    pub name: std::string::String,

    /// Only return the user if its current etag differs from this value.
    ///
    /// Sent as the `If-None-Match` header. If the user is unchanged the
    /// service responds with `304 Not Modified`.
    pub if_none_match: std::option::Option<std::string::String>,
}

impl GetUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetUserRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_none_match][crate::model::GetUserRequest::if_none_match].
    pub fn set_if_none_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_none_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [Identity::update_user][crate::client::Identity::update_user].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateUserRequest {
    /// The user to update. The `name` field selects the user.
    pub user: std::option::Option<crate::model::User>,

    /// The fields to update, as JSON field names.
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Fields sent as JSON `null`, as dotted paths of JSON field names.
    ///
    /// Use this to clear fields in the user. A field listed here must not
    /// have a value in [user][crate::model::UpdateUserRequest::user].
    pub null_fields: std::vec::Vec<std::string::String>,
}

impl UpdateUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [user][crate::model::UpdateUserRequest::user].
    pub fn set_user<T: std::convert::Into<crate::model::User>>(mut self, v: T) -> Self {
        self.user = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateUserRequest::update_mask].
    pub fn set_update_mask<T: std::convert::Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [null_fields][crate::model::UpdateUserRequest::null_fields].
    pub fn set_null_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.null_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [Identity::delete_user][crate::client::Identity::delete_user].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUserRequest {
    /// The resource name of the user to delete.
    pub name: std::string::String,
}

impl DeleteUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteUserRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Identity::list_users][crate::client::Identity::list_users].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUsersRequest {
    /// The maximum number of users to return. The service may return fewer.
    pub page_size: std::option::Option<i32>,

    /// The value of `next_page_token` returned by a previous call.
    pub page_token: std::option::Option<std::string::String>,
}

impl ListUsersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page_size][crate::model::ListUsersRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListUsersRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [Identity::list_users][crate::client::Identity::list_users].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUsersResponse {
    /// The list of users.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub users: std::vec::Vec<crate::model::User>,

    /// A token to retrieve the next page of results. Empty or missing on the
    /// last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListUsersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [users][crate::model::ListUsersResponse::users].
    pub fn set_users<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::User>,
    {
        use std::iter::Iterator;
        self.users = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListUsersResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListUsersResponse {
    type PageItem = crate::model::User;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.users
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request message for [Messaging::create_room][crate::client::Messaging::create_room].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateRoomRequest {
    /// The room to create, sent as the request body.
    pub room: std::option::Option<crate::model::Room>,
}

impl CreateRoomRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [room][crate::model::CreateRoomRequest::room].
    pub fn set_room<T: std::convert::Into<crate::model::Room>>(mut self, v: T) -> Self {
        self.room = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [Messaging::get_room][crate::client::Messaging::get_room].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRoomRequest {
    /// The resource name of the requested room.
    pub name: std::string::String,
}

impl GetRoomRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetRoomRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Messaging::delete_room][crate::client::Messaging::delete_room].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteRoomRequest {
    /// The resource name of the room to delete.
    pub name: std::string::String,
}

impl DeleteRoomRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteRoomRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Messaging::list_rooms][crate::client::Messaging::list_rooms].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRoomsRequest {
    /// The maximum number of rooms to return. The service may return fewer.
    pub page_size: std::option::Option<i32>,

    /// The value of `next_page_token` returned by a previous call.
    pub page_token: std::option::Option<std::string::String>,
}

impl ListRoomsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page_size][crate::model::ListRoomsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListRoomsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [Messaging::list_rooms][crate::client::Messaging::list_rooms].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListRoomsResponse {
    /// The list of rooms.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub rooms: std::vec::Vec<crate::model::Room>,

    /// A token to retrieve the next page of results. Empty or missing on the
    /// last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListRoomsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [rooms][crate::model::ListRoomsResponse::rooms].
    pub fn set_rooms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Room>,
    {
        use std::iter::Iterator;
        self.rooms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListRoomsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListRoomsResponse {
    type PageItem = crate::model::Room;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.rooms
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request message for [Messaging::create_blurb][crate::client::Messaging::create_blurb].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBlurbRequest {
    /// The resource name of the room or user profile receiving the blurb.
    pub parent: std::string::String,

    /// The blurb to create, sent as the request body.
    pub blurb: std::option::Option<crate::model::Blurb>,
}

impl CreateBlurbRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateBlurbRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [blurb][crate::model::CreateBlurbRequest::blurb].
    pub fn set_blurb<T: std::convert::Into<crate::model::Blurb>>(mut self, v: T) -> Self {
        self.blurb = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [Messaging::get_blurb][crate::client::Messaging::get_blurb].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBlurbRequest {
    /// The resource name of the requested blurb.
    pub name: std::string::String,
}

impl GetBlurbRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetBlurbRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Messaging::list_blurbs][crate::client::Messaging::list_blurbs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBlurbsRequest {
    /// The resource name of the room or user profile with the blurbs.
    pub parent: std::string::String,

    /// The maximum number of blurbs to return. The service may return fewer.
    pub page_size: std::option::Option<i32>,

    /// The value of `next_page_token` returned by a previous call.
    pub page_token: std::option::Option<std::string::String>,
}

impl ListBlurbsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListBlurbsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListBlurbsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListBlurbsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [Messaging::list_blurbs][crate::client::Messaging::list_blurbs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBlurbsResponse {
    /// The list of blurbs.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub blurbs: std::vec::Vec<crate::model::Blurb>,

    /// A token to retrieve the next page of results. Empty or missing on the
    /// last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListBlurbsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [blurbs][crate::model::ListBlurbsResponse::blurbs].
    pub fn set_blurbs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Blurb>,
    {
        use std::iter::Iterator;
        self.blurbs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListBlurbsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListBlurbsResponse {
    type PageItem = crate::model::Blurb;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.blurbs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request message for [Messaging::search_blurbs][crate::client::Messaging::search_blurbs].
///
/// Except for `parent`, which is part of the URL, the fields are sent in the
/// request body. That includes the page token.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchBlurbsRequest {
    /// The resource name of the room or user profile to search.
    #[serde(skip)]
    pub parent: std::string::String,

    /// The words to search for in the blurb text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query: std::option::Option<std::string::String>,

    /// The maximum number of blurbs to return. The service may return fewer.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page_size: std::option::Option<i32>,

    /// The value of `next_page_token` returned by a previous call.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page_token: std::option::Option<std::string::String>,
}

impl SearchBlurbsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::SearchBlurbsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [query][crate::model::SearchBlurbsRequest::query].
    pub fn set_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::SearchBlurbsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::SearchBlurbsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = std::option::Option::Some(v.into());
        self
    }
}

/// The response message for [Messaging::search_blurbs][crate::client::Messaging::search_blurbs].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchBlurbsResponse {
    /// The blurbs that matched the search query.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub blurbs: std::vec::Vec<crate::model::Blurb>,

    /// A token to retrieve the next page of results. Empty or missing on the
    /// last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_page_token: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SearchBlurbsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [blurbs][crate::model::SearchBlurbsResponse::blurbs].
    pub fn set_blurbs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Blurb>,
    {
        use std::iter::Iterator;
        self.blurbs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::SearchBlurbsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = std::option::Option::Some(v.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for SearchBlurbsResponse {
    type PageItem = crate::model::Blurb;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.blurbs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone().unwrap_or_default()
    }
}
