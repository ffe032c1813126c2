use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{CategoryReference, Pokemon, TypeResponse};
use crate::config::ApiConfig;

/// Read-only lookups against the creature-data service.
///
/// Implementations must not cache: every call goes to the upstream.
#[async_trait]
pub trait PokemonApi: Send + Sync {
    /// Fetch a single record by name or numeric id.
    async fn fetch_by_name(&self, name: &str) -> Result<Pokemon, ApiError>;

    /// Fetch the creatures belonging to a type, flattened into
    /// `{name, url}` references in upstream order.
    async fn fetch_by_type(&self, category: &str) -> Result<Vec<CategoryReference>, ApiError>;
}

/// [`PokemonApi`] over HTTPS using a single pooled `reqwest::Client`.
pub struct HttpPokemonClient {
    client: Client,
    base_url: Url,
}

impl HttpPokemonClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone());
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{resource}/{key}/`. The key is pushed as a single path
    /// segment, so user input is percent-encoded rather than interpreted.
    fn endpoint(&self, resource: &str, key: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(resource)
            .push(key)
            .push("");
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, key: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: key.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PokemonApi for HttpPokemonClient {
    async fn fetch_by_name(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = self.endpoint("pokemon", name)?;
        self.get_json(url, name).await
    }

    async fn fetch_by_type(&self, category: &str) -> Result<Vec<CategoryReference>, ApiError> {
        let url = self.endpoint("type", category)?;
        let response: TypeResponse = self.get_json(url, category).await?;
        Ok(response.into_references())
    }
}
