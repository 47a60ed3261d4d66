// Copyright 2024 Google LLC
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

// Verify generated request builders can implement `RequestOptionsBuilder`
// outside the crate.
#[cfg(test)]
mod tests {
    use google_api_gax::options::internal::RequestBuilder;
    use google_api_gax::options::{RequestOptions, RequestOptionsBuilder};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct GetThing {
        name: String,
        options: RequestOptions,
    }

    impl GetThing {
        fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.name = v.into();
            self
        }
    }

    impl RequestBuilder for GetThing {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn chained_setters() {
        let builder = GetThing::default()
            .set_name("things/t1")
            .with_user_agent("myapp/4.5.6")
            .with_attempt_timeout(Duration::from_secs(123))
            .with_fields(["name"])
            .with_fields(["etag"])
            .with_quota_user("user-123")
            .with_header("x-goog-request-reason", "testing")
            .with_header("x-goog-request-reason", "again");
        assert_eq!(builder.name, "things/t1");

        let options = builder.options;
        assert_eq!(options.user_agent().as_deref(), Some("myapp/4.5.6"));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(123)));
        assert_eq!(options.fields(), ["name", "etag"]);
        assert_eq!(options.quota_user().as_deref(), Some("user-123"));
        assert_eq!(
            options.headers(),
            [
                ("x-goog-request-reason".to_string(), "testing".to_string()),
                ("x-goog-request-reason".to_string(), "again".to_string()),
            ]
        );
    }

    #[test]
    fn defaults() {
        let options = GetThing::default().options;
        assert_eq!(options, RequestOptions::default());
        assert!(options.fields().is_empty());
        assert!(options.headers().is_empty());
    }
}
