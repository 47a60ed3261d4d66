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

//! Wire types for Google API REST clients.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! Google REST APIs described by discovery documents use a handful of types
//! with a custom JSON encoding. For example, 64-bit integers travel as JSON
//! strings, floating point fields may carry `"NaN"` or `"Infinity"`, and field
//! masks are a single comma-separated string. This crate provides those types
//! and the `serde_with` adapters used by the generated models.

mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;

#[doc(hidden)]
pub mod internal;
