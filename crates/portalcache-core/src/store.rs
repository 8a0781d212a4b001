//! In-memory character store, mirrored into the cache.
//!
//! The store is the single source of truth for the character list and its
//! pagination position. All mutation goes through the named actions below;
//! every action re-persists the state through the injected `CacheAdapter`.
//! Persistence is best-effort: a failed write is logged and swallowed, and
//! no action ever returns an error.
//!
//! Each field is persisted under its own key rather than as one composite
//! snapshot, so a failure between two writes can leave the on-disk state
//! internally inconsistent. `hydrate` loads whatever is present.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::cache::CacheAdapter;
use crate::models::Character;

const KEY_CHARACTERS: &str = "characters";
const KEY_ALL_CHARACTERS: &str = "all_characters";
const KEY_CURRENT_PAGE: &str = "current_page";
const KEY_TOTAL_PAGES: &str = "total_pages";

const PERSISTED_KEYS: [&str; 4] = [
    KEY_CHARACTERS,
    KEY_ALL_CHARACTERS,
    KEY_CURRENT_PAGE,
    KEY_TOTAL_PAGES,
];

/// Pages are 1-based
const DEFAULT_PAGE: u32 = 1;

pub struct CharacterStore<C: CacheAdapter> {
    cache: C,
    characters: Vec<Character>,
    /// Auxiliary full-list cache, independent of the paged view
    all_characters: Vec<Character>,
    current_page: u32,
    total_pages: u32,
}

impl<C: CacheAdapter> CharacterStore<C> {
    /// Create an empty store. Call `hydrate` to pick up persisted state;
    /// the store never hydrates itself.
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            characters: Vec::new(),
            all_characters: Vec::new(),
            current_page: DEFAULT_PAGE,
            total_pages: 0,
        }
    }

    // ===== Read access =====

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn all_characters(&self) -> &[Character] {
        &self.all_characters
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_characters(&self) -> usize {
        self.characters.len()
    }

    /// First character with the given id, if any. Linear scan - the list is
    /// one page (or a few hundred entries at most), an index isn't worth it.
    pub fn get_by_id(&self, id: i64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    // ===== Actions =====

    /// Replace the character list wholesale (loading a page fresh).
    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        self.persist();
    }

    /// Append to the character list, preserving order. No dedup, no id
    /// collision check (infinite-scroll accumulation).
    pub fn add_characters(&mut self, mut characters: Vec<Character>) {
        self.characters.append(&mut characters);
        self.persist();
    }

    /// Replace the auxiliary full list.
    pub fn set_all_characters(&mut self, characters: Vec<Character>) {
        self.all_characters = characters;
        self.persist();
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
        self.persist();
    }

    pub fn set_total_pages(&mut self, pages: u32) {
        self.total_pages = pages;
        self.persist();
    }

    /// Overwrite each in-memory field with its persisted value, where one
    /// exists. Absent or unreadable entries leave the field as it was.
    pub fn hydrate(&mut self) {
        Self::load_field(&self.cache, KEY_CHARACTERS, &mut self.characters);
        Self::load_field(&self.cache, KEY_ALL_CHARACTERS, &mut self.all_characters);
        Self::load_field(&self.cache, KEY_CURRENT_PAGE, &mut self.current_page);
        Self::load_field(&self.cache, KEY_TOTAL_PAGES, &mut self.total_pages);
    }

    /// Clear all fields to defaults and drop every persisted key.
    pub fn reset(&mut self) {
        self.characters.clear();
        self.all_characters.clear();
        self.current_page = DEFAULT_PAGE;
        self.total_pages = 0;

        for key in PERSISTED_KEYS {
            if let Err(e) = self.cache.remove(key) {
                warn!(key, error = %e, "Failed to remove persisted store field");
            }
        }
    }

    // ===== Persistence =====

    /// Write every field under its own key. A failed write skips that field
    /// only; the remaining fields are still attempted.
    fn persist(&self) {
        Self::save_field(&self.cache, KEY_CHARACTERS, &self.characters);
        Self::save_field(&self.cache, KEY_ALL_CHARACTERS, &self.all_characters);
        Self::save_field(&self.cache, KEY_CURRENT_PAGE, &self.current_page);
        Self::save_field(&self.cache, KEY_TOTAL_PAGES, &self.total_pages);
    }

    fn save_field<T: Serialize>(cache: &C, key: &str, value: &T) {
        if let Err(e) = cache.save(key, value) {
            warn!(key, error = %e, "Failed to persist store field");
        }
    }

    fn load_field<T: DeserializeOwned>(cache: &C, key: &str, field: &mut T) {
        match cache.load(key) {
            Ok(Some(value)) => *field = value,
            Ok(None) => {}
            Err(e) => {
                warn!(key, error = %e, "Failed to load persisted store field");
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FileCache;
    use crate::models::{Character, LocationRef};
    use anyhow::{anyhow, Result};

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            kind: String::new(),
            gender: "unknown".to_string(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: String::new(),
        }
    }

    fn file_store(dir: &tempfile::TempDir) -> CharacterStore<FileCache> {
        let cache = FileCache::new(dir.path().to_path_buf()).unwrap();
        CharacterStore::new(cache)
    }

    /// Adapter whose every operation fails, for the isolation tests.
    struct BrokenCache;

    impl CacheAdapter for BrokenCache {
        fn save<T: Serialize>(&self, _key: &str, _value: &T) -> Result<()> {
            Err(anyhow!("disk full"))
        }

        fn load<T: DeserializeOwned>(&self, _key: &str) -> Result<Option<T>> {
            Err(anyhow!("disk unreadable"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(anyhow!("disk read-only"))
        }
    }

    #[test]
    fn test_round_trip_through_hydrate() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = file_store(&dir);
        store.set_characters(vec![character(1, "Rick"), character(2, "Morty")]);
        store.set_all_characters(vec![character(3, "Summer")]);
        store.set_current_page(3);
        store.set_total_pages(42);

        let mut fresh = file_store(&dir);
        fresh.hydrate();

        assert_eq!(fresh.characters(), store.characters());
        assert_eq!(fresh.all_characters(), store.all_characters());
        assert_eq!(fresh.current_page(), 3);
        assert_eq!(fresh.total_pages(), 42);
    }

    #[test]
    fn test_hydrate_leaves_absent_fields_at_defaults() {
        let dir = tempfile::tempdir().unwrap();

        // Persist only the page number
        let cache = FileCache::new(dir.path().to_path_buf()).unwrap();
        cache.save("current_page", &7u32).unwrap();

        let mut store = file_store(&dir);
        store.hydrate();

        assert_eq!(store.current_page(), 7);
        assert_eq!(store.total_pages(), 0);
        assert!(store.characters().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent_and_clears_keys() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = file_store(&dir);
        store.set_characters(vec![character(1, "Rick")]);
        store.set_current_page(5);

        store.reset();
        store.reset();

        assert!(store.characters().is_empty());
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_pages(), 0);

        // A fresh store over the same directory finds nothing to hydrate
        let mut fresh = file_store(&dir);
        fresh.hydrate();
        assert!(fresh.characters().is_empty());
        assert_eq!(fresh.current_page(), 1);

        // And the key files themselves are gone
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_add_characters_preserves_order_without_dedup() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);

        store.add_characters(vec![character(1, "Rick"), character(2, "Morty")]);
        store.add_characters(vec![character(1, "Rick again")]);

        let names: Vec<&str> = store.characters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Rick", "Morty", "Rick again"]);
        assert_eq!(store.total_characters(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);
        store.set_characters(vec![character(1, "Rick"), character(2, "Morty")]);

        assert_eq!(store.get_by_id(2).map(|c| c.name.as_str()), Some("Morty"));
        assert!(store.get_by_id(99).is_none());
    }

    #[test]
    fn test_get_by_id_returns_first_match() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = file_store(&dir);
        store.add_characters(vec![character(1, "first"), character(1, "second")]);

        assert_eq!(store.get_by_id(1).map(|c| c.name.as_str()), Some("first"));
    }

    #[test]
    fn test_actions_survive_broken_cache() {
        let mut store = CharacterStore::new(BrokenCache);

        store.set_characters(vec![character(1, "Rick")]);
        store.add_characters(vec![character(2, "Morty")]);
        store.set_all_characters(vec![character(3, "Summer")]);
        store.set_current_page(4);
        store.set_total_pages(9);
        store.hydrate();

        assert_eq!(store.total_characters(), 2);
        assert_eq!(store.current_page(), 4);
        assert_eq!(store.total_pages(), 9);

        store.reset();
        assert!(store.characters().is_empty());
        assert_eq!(store.current_page(), 1);
    }
}
