//! HTTP client for the Spoonacular recipe API

use super::error::{ApiError, ApiResult};
use super::models::{RecipeDetails, SearchPage};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default number of results requested per search
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the screens need from a recipe backend.
pub trait RecipeApi: Send + Sync {
    fn search_recipes(&self, query: &str, number: u32) -> ApiResult<SearchPage>;

    fn recipe_information(&self, id: u64) -> ApiResult<RecipeDetails>;
}

pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Init)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        // Reject a malformed host up front
        Url::parse(&base_url)?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /recipes/complexSearch?apiKey=..&query=..&number=..`
    ///
    /// The query is passed through untouched; an empty query is sent as `query=`.
    pub fn search_url(&self, query: &str, number: u32) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}/recipes/complexSearch", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("query", query)
            .append_pair("number", &number.to_string());
        Ok(url)
    }

    /// `GET /recipes/{id}/information?apiKey=..&includeNutrition=false`
    pub fn information_url(&self, id: u64) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}/recipes/{id}/information", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("includeNutrition", "false");
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let endpoint = redacted(&url);
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ApiError::Network {
                url: endpoint.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: endpoint,
            });
        }

        let body = response.text().map_err(|source| ApiError::Network {
            url: endpoint.clone(),
            source: source.without_url(),
        })?;

        serde_json::from_str(&body).map_err(|source| ApiError::Parse {
            url: endpoint,
            source,
        })
    }
}

impl RecipeApi for SpoonacularClient {
    fn search_recipes(&self, query: &str, number: u32) -> ApiResult<SearchPage> {
        let url = self.search_url(query, number)?;
        let page: SearchPage = self.get_json(url)?;
        info!(
            "Search {:?} returned {} of {} recipes",
            query,
            page.results.len(),
            page.total_results
        );
        Ok(page)
    }

    fn recipe_information(&self, id: u64) -> ApiResult<RecipeDetails> {
        let url = self.information_url(id)?;
        self.get_json(url)
    }
}

/// URL without its query string. The API key must not appear in logs or errors.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
