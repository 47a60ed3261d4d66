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

//! Iterate over the pages, or the items, of a list RPC.
//!
//! Many REST APIs return large collections in pages. The response contains a
//! `nextPageToken`, the client sends this token in the following request to
//! get the next page. The collection is exhausted when the token is empty.
//!
//! The request builders for these RPCs offer `by_page()` and `by_item()`,
//! returning a [Paginator] or an [ItemPaginator] respectively.
//!
//! # Example
//! ```no_run
//! # use google_api_gax::paginator::{PageableResponse, Paginator};
//! # async fn sample<T: PageableResponse + Send + 'static>(mut pages: Paginator<T, google_api_gax::error::Error>) -> google_api_gax::Result<()> {
//! while let Some(page) = pages.next().await {
//!     let page = page?;
//!     for item in page.items() {
//!         // use `item`
//!     }
//! }
//! # Ok(()) }
//! ```

use futures::stream::{self, BoxStream, Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Describes a page of results returned by a list RPC.
pub trait PageableResponse {
    /// The type of the items in the page.
    type PageItem: Send;

    /// Consumes the page and returns its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty if there are no more pages.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts a list RPC into a [Stream] of pages.
///
/// The first request uses the page token set in the request, if any. The
/// paginator stops after the first page with an empty `next_page_token`, or
/// after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: BoxStream<'static, Result<T, E>>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Returns the next page, or `None` when the collection is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a [Stream] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Unpin + Send {
        self.stream
    }

    /// Returns a paginator over the items, flattening the pages.
    pub fn items(self) -> ItemPaginator<T, E> {
        let stream = self.stream.flat_map(|page| match page {
            Ok(page) => stream::iter(page.items().into_iter().map(Ok)).left_stream(),
            Err(e) => stream::once(async move { Err(e) }).right_stream(),
        });
        ItemPaginator {
            stream: stream.boxed(),
        }
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// An adapter that converts a list RPC into a [Stream] of items.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: BoxStream<'static, Result<T::PageItem, E>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    /// Returns the next item, or `None` when the collection is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a [Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Unpin + Send {
        self.stream
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator").finish_non_exhaustive()
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! Implementation details for the generated request builders.
    use super::*;

    type ControlFlow = std::ops::ControlFlow<(), String>;

    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    pub fn new_paginator<T, E, F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Paginator<T, E>
    where
        T: PageableResponse + Send + 'static,
        E: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = stream::unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let token = page.next_page_token();
                        let next = if token.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(token)
                        };
                        Some((Ok(page), next))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Paginator {
            stream: stream.boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::new_paginator;
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    type TestError = String;

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    type Fake = Arc<Mutex<VecDeque<(String, Result<TestResponse, TestError>)>>>;

    fn fake(pages: Vec<(&str, Result<TestResponse, TestError>)>) -> Fake {
        Arc::new(Mutex::new(
            pages
                .into_iter()
                .map(|(t, r)| (t.to_string(), r))
                .collect(),
        ))
    }

    fn paginator(seed: &str, fake: Fake) -> Paginator<TestResponse, TestError> {
        let execute = move |token: String| {
            let (want, response) = fake
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected call to execute");
            assert_eq!(token, want);
            async move { response }
        };
        new_paginator(seed.to_string(), execute)
    }

    #[tokio::test]
    async fn pages() {
        let fake = fake(vec![
            ("", Ok(page(&["item1", "item2"], "token1"))),
            ("token1", Ok(page(&[], "token2"))),
            ("token2", Ok(page(&["item3"], ""))),
        ]);
        let mut pages = paginator("", fake.clone());
        let mut got = Vec::new();
        while let Some(p) = pages.next().await {
            got.push(p.unwrap().items);
        }
        assert_eq!(
            got,
            vec![
                vec!["item1".to_string(), "item2".to_string()],
                vec![],
                vec!["item3".to_string()]
            ]
        );
        assert!(fake.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_token() {
        let fake = fake(vec![("start-here", Ok(page(&["item3"], "")))]);
        let pages: Vec<_> = paginator("start-here", fake.clone())
            .into_stream()
            .collect()
            .await;
        assert_eq!(pages.len(), 1);
        assert!(fake.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stops_on_error() {
        let fake = fake(vec![
            ("", Ok(page(&["item1"], "token1"))),
            ("token1", Err("uh-oh".to_string())),
            ("token2", Ok(page(&["never"], ""))),
        ]);
        let mut pages = paginator("", fake.clone());
        assert!(matches!(pages.next().await, Some(Ok(_))));
        assert!(matches!(pages.next().await, Some(Err(e)) if e == "uh-oh"));
        assert!(pages.next().await.is_none());
        assert_eq!(fake.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn items() {
        let fake = fake(vec![
            ("", Ok(page(&["item1", "item2"], "token1"))),
            ("token1", Ok(page(&["item3"], ""))),
        ]);
        let mut items = paginator("", fake).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
    }

    #[tokio::test]
    async fn items_with_error() {
        let fake = fake(vec![
            ("", Ok(page(&["item1"], "token1"))),
            ("token1", Err("uh-oh".to_string())),
        ]);
        let got: Vec<_> = paginator("", fake).items().into_stream().collect().await;
        assert_eq!(got, vec![Ok("item1".to_string()), Err("uh-oh".to_string())]);
    }
}
