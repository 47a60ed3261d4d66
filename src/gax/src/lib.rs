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

//! Google APIs helpers.
//!
//! This crate contains the types shared by all the Google API REST client
//! libraries for Rust: the error type returned by every call, the per-call
//! request options, the response wrapper, pagination support, and the
//! credentials used to authenticate requests.
//!
//! Applications rarely depend on this crate directly. The client libraries
//! re-export the types needed in their APIs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Defines some types and traits to iterate over List RPCs, page by page or
/// item by item.
pub mod paginator;

pub mod client_builder;
pub mod credentials;
pub mod options;
pub mod response;
