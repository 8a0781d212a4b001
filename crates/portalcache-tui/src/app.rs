//! Application state for the portalcache TUI.
//!
//! `App` owns the character store, the API fetch state, and the UI state
//! (current page/route, selection, status line). Fetches run in a spawned
//! Tokio task; the completed fetcher comes back through an MPSC channel and
//! its results are wired into the store here.

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, warn};

use portalcache_core::{ApiClient, CharacterFetcher, CharacterStore, Config, FileCache};

/// Buffer size for the fetch result channel. One fetch is in flight at a
/// time, so a small buffer is plenty.
const CHANNEL_BUFFER_SIZE: usize = 4;

/// The two pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Characters,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Characters => "Characters",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Route::Home => Route::Characters,
            Route::Characters => Route::Home,
        }
    }
}

/// Main application state container
pub struct App {
    pub config: Config,
    pub store: CharacterStore<FileCache>,

    /// Fetch state; `None` while a fetch task has it on loan
    fetcher: Option<CharacterFetcher>,
    fetch_rx: mpsc::Receiver<CharacterFetcher>,
    fetch_tx: mpsc::Sender<CharacterFetcher>,

    // UI state
    pub route: Route,
    pub selection: usize,
    pub status_message: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub has_next: bool,
    pub has_prev: bool,
}

impl App {
    /// Create the application, hydrating the store from the on-disk cache.
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let cache_dir = config
            .cache_dir()
            .unwrap_or_else(|_| PathBuf::from("./cache"));
        let cache = FileCache::new(cache_dir)?;

        let mut store = CharacterStore::new(cache);
        store.hydrate();

        let api = match &config.base_url {
            Some(url) => ApiClient::with_base_url(url.clone())?,
            None => ApiClient::new()?,
        };
        let fetcher = CharacterFetcher::new(api);

        let (fetch_tx, fetch_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            store,
            fetcher: Some(fetcher),
            fetch_rx,
            fetch_tx,
            route: Route::Home,
            selection: 0,
            status_message: None,
            error: None,
            loading: false,
            has_next: false,
            has_prev: false,
        })
    }

    /// Page to load on startup: config override, else the hydrated position.
    pub fn start_page(&self) -> u32 {
        self.config.start_page.unwrap_or(self.store.current_page())
    }

    // ===== Fetching =====

    /// Kick off a background fetch for `page`. Requests are serialized: while
    /// one is in flight the fetcher is on loan and further requests are
    /// ignored with a status note.
    pub fn request_page(&mut self, page: u32) {
        let Some(mut fetcher) = self.fetcher.take() else {
            self.status_message = Some("Still loading...".to_string());
            return;
        };

        self.loading = true;
        self.status_message = Some(format!("Loading page {}...", page));

        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            fetcher.fetch_page(page).await;
            if tx.send(fetcher).await.is_err() {
                error!("Fetch result channel closed");
            }
        });
    }

    pub fn next_page(&mut self) {
        if self.has_next {
            let page = self.store.current_page() + 1;
            self.request_page(page);
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev {
            let page = self.store.current_page().saturating_sub(1).max(1);
            self.request_page(page);
        }
    }

    pub fn refresh(&mut self) {
        let page = self.store.current_page();
        self.request_page(page);
    }

    /// Drain completed fetch tasks and fold their results into the store.
    pub fn check_background_tasks(&mut self) {
        while let Ok(fetcher) = self.fetch_rx.try_recv() {
            self.process_fetch_result(fetcher);
        }
    }

    fn process_fetch_result(&mut self, fetcher: CharacterFetcher) {
        if let Some(message) = &fetcher.error {
            self.error = Some(message.clone());
        } else {
            self.error = None;
            self.store.set_characters(fetcher.characters.clone());
            self.store.set_current_page(fetcher.current_page);
            self.store.set_total_pages(fetcher.total_pages);
            self.has_next = fetcher.has_next;
            self.has_prev = fetcher.has_prev;
            self.clamp_selection();
        }

        self.loading = false;
        self.status_message = None;
        self.fetcher = Some(fetcher);
    }

    // ===== Store actions =====

    /// Drop all cached state and start over from page 1.
    pub fn clear_cache(&mut self) {
        self.store.reset();
        self.selection = 0;
        self.has_next = false;
        self.has_prev = false;
        self.error = None;
        self.status_message = Some("Cache cleared".to_string());
    }

    // ===== Selection =====

    pub fn select_next(&mut self) {
        let count = self.store.total_characters();
        if count > 0 && self.selection + 1 < count {
            self.selection += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.store.total_characters();
        if count == 0 {
            self.selection = 0;
        } else if self.selection >= count {
            self.selection = count - 1;
        }
    }

    pub fn selected_character(&self) -> Option<&portalcache_core::Character> {
        self.store.characters().get(self.selection)
    }
}

// ============================================================================
// Tests
// ============================================================================
