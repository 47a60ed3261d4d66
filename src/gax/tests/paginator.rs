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

// Drive a paginator against a fake list RPC.
#[cfg(test)]
mod tests {
    use google_api_gax::error::Error;
    use google_api_gax::paginator::internal::new_paginator;
    use google_api_gax::paginator::{PageableResponse, Paginator};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct ListFoosResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for ListFoosResponse {
        type PageItem = String;

        fn items(self) -> Vec<Self::PageItem> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    /// Serves pages keyed by the request token and records the tokens it
    /// receives.
    #[derive(Clone, Default)]
    struct FakeService {
        pages: Arc<HashMap<String, ListFoosResponse>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeService {
        fn new(pages: &[(&str, &[&str], &str)]) -> Self {
            let pages = pages
                .iter()
                .map(|(token, items, next)| {
                    let response = ListFoosResponse {
                        items: items.iter().map(|s| s.to_string()).collect(),
                        next_page_token: next.to_string(),
                    };
                    (token.to_string(), response)
                })
                .collect();
            Self {
                pages: Arc::new(pages),
                requests: Arc::default(),
            }
        }

        async fn list(&self, token: String) -> Result<ListFoosResponse, Error> {
            self.requests
                .lock()
                .expect("requests mutex is not poisoned")
                .push(token.clone());
            self.pages
                .get(&token)
                .cloned()
                .ok_or_else(|| Error::io(format!("unknown page token {token:?}")))
        }

        fn paginator(&self, seed: &str) -> Paginator<ListFoosResponse, Error> {
            let service = self.clone();
            new_paginator(seed.to_string(), move |token| {
                let service = service.clone();
                async move { service.list(token).await }
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests
                .lock()
                .expect("requests mutex is not poisoned")
                .clone()
        }
    }

    #[tokio::test]
    async fn items_across_pages() -> anyhow::Result<()> {
        let service = FakeService::new(&[
            ("", &["f1", "f2"], "abc123"),
            ("abc123", &["f3", "f4"], ""),
        ]);
        let mut items = service.paginator("").items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?);
        }
        assert_eq!(got, ["f1", "f2", "f3", "f4"]);
        assert_eq!(service.requests(), ["", "abc123"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_pages_continue() -> anyhow::Result<()> {
        let service = FakeService::new(&[
            ("", &[], "p2"),
            ("p2", &[], "p3"),
            ("p3", &["f1"], ""),
        ]);
        let mut pages = service.paginator("");
        let mut count = 0;
        while let Some(page) = pages.next().await {
            page?;
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(service.requests(), ["", "p2", "p3"]);
        Ok(())
    }

    #[tokio::test]
    async fn stops_after_error() {
        let service = FakeService::new(&[("", &["f1"], "missing")]);
        let mut items = service.paginator("").items();
        assert_eq!(items.next().await.transpose().ok().flatten().as_deref(), Some("f1"));
        let err = items.next().await.and_then(|r| r.err());
        assert!(err.as_ref().is_some_and(Error::is_io), "{err:?}");
        assert!(items.next().await.is_none());
        assert_eq!(service.requests(), ["", "missing"]);
    }

    #[tokio::test]
    async fn repeated_token_is_requested_again() {
        use futures::StreamExt;
        // The paginator trusts the service, a page that returns its own token
        // is fetched again.
        let service = FakeService::new(&[("loop", &["f1"], "loop")]);
        let pages = service.paginator("loop").into_stream().take(3);
        let got = pages.collect::<Vec<_>>().await;
        assert_eq!(got.len(), 3);
        assert_eq!(service.requests(), ["loop", "loop", "loop"]);
    }
}
