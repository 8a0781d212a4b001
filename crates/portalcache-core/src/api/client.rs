//! HTTP client for the Rick and Morty REST API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::CharacterPage;

use super::ApiError;

/// Base URL for the public API
const API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// HTTP request timeout in seconds.
/// The API is fast; 30s covers slow connections while still failing eventually.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the character catalog.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the public API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client with a custom base URL (config override, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one page of the character catalog. Pages are 1-based.
    pub async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        let url = format!("{}/character?page={}", self.base_url, page);
        debug!(url = %url, "Fetching character page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()).into());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }
}

// ============================================================================
// Tests
// ============================================================================
