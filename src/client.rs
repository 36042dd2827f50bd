use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::SuggestError;
use crate::model::{Recipe, SuggestRequest};
use crate::response::{extract_recipe_detail, normalize_suggestions};

/// HTTP client for the recipe suggestion service.
///
/// One request per call: no retry, no deduplication of repeated
/// submissions. Overlapping calls are independent and complete in whatever
/// order the transport delivers them.
pub struct RecipeApiClient {
    client: Client,
    base_url: String,
}

impl RecipeApiClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-suggest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(RecipeApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RecipeApiClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `POST /api/v1/recipes/suggest`: one network call, response reconciled
    /// into the canonical recipe list.
    pub async fn suggest(&self, request: &SuggestRequest) -> Result<Vec<Recipe>, SuggestError> {
        let response = self
            .client
            .post(format!("{}/api/v1/recipes/suggest", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!("suggest response: {body:?}");
        normalize_suggestions(body)
    }

    /// `GET /api/v1/recipes/{id}`: fetch one recipe for the detail view.
    pub async fn recipe(&self, id: &str) -> Result<Recipe, SuggestError> {
        let response = self
            .client
            .get(format!("{}/api/v1/recipes/{}", self.base_url, id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!("recipe detail response: {body:?}");
        extract_recipe_detail(body)
    }
}
