//! Per-page fetch state for the character catalog.
//!
//! `CharacterFetcher` is the view-facing side of the API: it performs one
//! paginated fetch at a time and exposes the outcome as plain fields the
//! presentation layer reads after each call. It never touches the store or
//! the cache; wiring results into persisted state is the caller's job.

use tracing::error;

use crate::models::Character;

use super::ApiClient;

/// Shown when an error carries no message of its own
const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Observable result of the most recent page fetch.
pub struct CharacterFetcher {
    client: ApiClient,
    /// Items of the last successfully fetched page
    pub characters: Vec<Character>,
    /// True from the start of a fetch until it settles
    pub loading: bool,
    /// Message of the last failure; cleared when a new fetch starts
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl CharacterFetcher {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            characters: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }

    /// Fetch one page and fold the outcome into the observable fields.
    ///
    /// On success the page's results replace `characters` wholesale and the
    /// pagination flags are copied verbatim from the response metadata. On
    /// any failure (transport, HTTP status, malformed body) the fields keep
    /// their previous values and `error` carries the message. `loading` is
    /// cleared on every path.
    pub async fn fetch_page(&mut self, page: u32) {
        self.loading = true;
        self.error = None;

        match self.client.fetch_page(page).await {
            Ok(response) => {
                self.characters = response.results;
                self.current_page = page;
                self.total_pages = response.info.pages;
                self.has_next = response.info.next.is_some();
                self.has_prev = response.info.prev.is_some();
            }
            Err(e) => {
                error!(page, error = %e, "Failed to fetch character page");
                let message = format!("{:#}", e);
                self.error = Some(if message.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                });
            }
        }

        self.loading = false;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testutil::{one_shot_server, PAGE_ONE_BODY};

    #[tokio::test]
    async fn test_fetch_page_success_sets_all_fields() {
        let base = one_shot_server("200 OK", PAGE_ONE_BODY).await;
        let mut fetcher = CharacterFetcher::new(ApiClient::with_base_url(base).unwrap());

        fetcher.fetch_page(1).await;

        assert_eq!(fetcher.characters.len(), 1);
        assert_eq!(fetcher.characters[0].id, 1);
        assert_eq!(fetcher.current_page, 1);
        assert_eq!(fetcher.total_pages, 5);
        assert!(fetcher.has_next);
        assert!(!fetcher.has_prev);
        assert!(!fetcher.loading);
        assert!(fetcher.error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_page_http_error_leaves_items_unchanged() {
        // Seed the fetcher with a successful page first
        let base = one_shot_server("200 OK", PAGE_ONE_BODY).await;
        let mut fetcher = CharacterFetcher::new(ApiClient::with_base_url(base).unwrap());
        fetcher.fetch_page(1).await;
        let before = fetcher.characters.clone();

        let base = one_shot_server("500 Internal Server Error", "").await;
        fetcher.client = ApiClient::with_base_url(base).unwrap();
        fetcher.fetch_page(2).await;

        assert!(!fetcher.loading);
        let message = fetcher.error.as_deref().expect("error should be set");
        assert!(!message.is_empty());
        assert_eq!(fetcher.characters, before);
        assert_eq!(fetcher.current_page, 1);
    }

    #[tokio::test]
    async fn test_fetch_page_network_error_is_caught() {
        // Bind then drop a listener so the port refuses connections
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut fetcher =
            CharacterFetcher::new(ApiClient::with_base_url(format!("http://{}", addr)).unwrap());
        fetcher.fetch_page(1).await;

        assert!(!fetcher.loading);
        assert!(fetcher.error.is_some());
        assert!(fetcher.characters.is_empty());
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_fetch() {
        let base = one_shot_server("500 Internal Server Error", "").await;
        let mut fetcher = CharacterFetcher::new(ApiClient::with_base_url(base).unwrap());
        fetcher.fetch_page(1).await;
        assert!(fetcher.error.is_some());

        let base = one_shot_server("200 OK", PAGE_ONE_BODY).await;
        fetcher.client = ApiClient::with_base_url(base).unwrap();
        fetcher.fetch_page(1).await;
        assert!(fetcher.error.is_none());
    }
}
