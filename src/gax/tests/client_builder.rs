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

// Verify `ClientBuilder` can be used outside the crate.
#[cfg(test)]
mod tests {
    use google_api_gax::client_builder::Result;
    use google_api_gax::client_builder::internal::ClientConfig;

    #[tokio::test]
    async fn default() -> anyhow::Result<()> {
        let client = MyClient::builder().build().await?;
        assert_eq!(client.endpoint, None);
        assert!(client.credential.is_none());
        assert!(!client.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn with_settings() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_endpoint("http://localhost:7469")
            .with_credentials(Credential("test-only"))
            .with_tracing()
            .build()
            .await?;
        assert_eq!(client.endpoint.as_deref(), Some("http://localhost:7469"));
        assert_eq!(client.credential, Some(Credential("test-only")));
        assert!(client.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn factory_error() {
        let err = MyClient::builder()
            .with_endpoint("")
            .build()
            .await
            .err()
            .unwrap();
        assert!(err.is_transport(), "{err:?}");
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Credential(&'static str);

    pub struct MyClient {
        endpoint: Option<String>,
        credential: Option<Credential>,
        tracing: bool,
    }

    impl MyClient {
        pub fn builder() -> my_client::Builder {
            google_api_gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig<Credential>) -> Result<Self> {
            if config.endpoint.as_deref() == Some("") {
                return Err(google_api_gax::client_builder::Error::transport(
                    std::io::Error::other("empty endpoint"),
                ));
            }
            Ok(Self {
                endpoint: config.endpoint,
                credential: config.cred,
                tracing: config.tracing,
            })
        }
    }

    mod my_client {
        use google_api_gax::client_builder::internal::{ClientConfig, ClientFactory};
        pub type Builder = google_api_gax::client_builder::ClientBuilder<Factory, super::Credential>;
        pub struct Factory;
        impl ClientFactory for Factory {
            type Client = super::MyClient;
            type Credentials = super::Credential;
            async fn build(
                self,
                config: ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
