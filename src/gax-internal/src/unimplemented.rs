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

/// The default body for each method in the generated stub traits.
///
/// Only test code mocking a client reaches this function, and only when the
/// test calls a method it did not mock.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations of each method, so ",
        "services can add new methods without breaking existing mocks. The ",
        "clients override all the methods. If you see this error in a test ",
        "mocking a client, verify that the test mocks all the methods it ",
        "calls."
    ));
}
