use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::config;

/// Product ids the visitor liked, kept sorted so a toggle pair leaves both the set and its
/// stored form unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<String>);

impl FavoriteSet {
    fn position(&self, id: &str) -> Result<usize, usize> {
        self.0.binary_search_by(|fav| fav.as_str().cmp(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_ok()
    }

    /// Adds `id` if absent, removes it if present. Returns whether it is liked afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.position(id) {
            Ok(pos) => {
                self.0.remove(pos);
                false
            }
            Err(pos) => {
                self.0.insert(pos, id.to_string());
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Parses a stored value. Older or hand-edited values may be unsorted or repeat ids.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut ids: Vec<String> = serde_json::from_str(raw)?;
        ids.sort();
        ids.dedup();
        Ok(FavoriteSet(ids))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }
}

pub trait FavoriteStore {
    fn load(&self) -> FavoriteSet;
    fn save(&self, favorites: &FavoriteSet);

    fn toggle(&self, favorites: &mut FavoriteSet, id: &str) -> bool {
        let liked = favorites.toggle(id);
        self.save(favorites);
        liked
    }
}

/// `window.localStorage` under a fixed key.
pub struct LocalFavoriteStore {
    key: &'static str,
}

impl Default for LocalFavoriteStore {
    fn default() -> Self {
        Self {
            key: config::FAVORITES_STORAGE_KEY,
        }
    }
}

impl LocalFavoriteStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl FavoriteStore for LocalFavoriteStore {
    fn load(&self) -> FavoriteSet {
        let Some(raw) = Self::storage().and_then(|s| s.get_item(self.key).ok().flatten()) else {
            return FavoriteSet::default();
        };
        match FavoriteSet::from_json(&raw) {
            Ok(favorites) => {
                info!("Loaded {} favorite products", favorites.len());
                favorites
            }
            Err(e) => {
                warn!("Ignoring unreadable favorites: {}", e);
                FavoriteSet::default()
            }
        }
    }

    fn save(&self, favorites: &FavoriteSet) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, &favorites.to_json()).is_err() {
                    warn!("Failed to persist favorites");
                }
            }
            None => warn!("localStorage unavailable, favorites not persisted"),
        }
    }
}

/// In-memory store, keeps the serialized value so tests exercise the same format.
#[derive(Default)]
pub struct MemoryFavoriteStore {
    raw: RefCell<Option<String>>,
}

impl MemoryFavoriteStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl FavoriteStore for MemoryFavoriteStore {
    fn load(&self) -> FavoriteSet {
        self.raw
            .borrow()
            .as_deref()
            .and_then(|raw| FavoriteSet::from_json(raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, favorites: &FavoriteSet) {
        *self.raw.borrow_mut() = Some(favorites.to_json());
    }
}
