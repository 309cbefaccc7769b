//! The user's starred currency codes and their persisted slot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, error::StoreError};

/// Favorites used when no persisted value exists yet.
const DEFAULT_FAVORITES: [&str; 2] = ["INR", "EUR"];

/// Ordered set of starred currency codes.
///
/// Insertion order is preserved and meaningful: selectors offer
/// favorites in the order the user starred them. Membership is never
/// checked against the live currency list; a code that the rate source
/// stopped offering stays starred until the user removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    codes: Vec<CurrencyCode>,
}

impl Default for Favorites {
    fn default() -> Self {
        Self {
            codes: DEFAULT_FAVORITES.iter().copied().map(CurrencyCode::from).collect(),
        }
    }
}

impl Favorites {
    /// Builds a set from a persisted list, dropping duplicate codes
    /// while keeping the first occurrence's position.
    #[must_use]
    pub fn new(codes: Vec<CurrencyCode>) -> Self {
        let mut unique: Vec<CurrencyCode> = Vec::with_capacity(codes.len());
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.codes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Toggles membership; returns `true` when `code` is now starred.
    ///
    /// Removing keeps the order of the remaining members; adding
    /// appends at the end.
    pub fn toggle(&mut self, code: &CurrencyCode) -> bool {
        match self.codes.iter().position(|c| c == code) {
            Some(index) => {
                self.codes.remove(index);
                false
            }
            None => {
                self.codes.push(code.clone());
                true
            }
        }
    }

    /// Option order for a currency selector: favorites first in their
    /// own order, then the remaining codes of `all` in list order.
    #[must_use]
    pub fn selection_order(&self, all: &[CurrencyCode]) -> Vec<CurrencyCode> {
        let mut options = self.codes.clone();
        options.extend(all.iter().filter(|code| !self.contains(code)).cloned());
        options
    }
}

/// Minimal capability over the persisted favorites slot, so the
/// workflow can be backed by any durable key-value mechanism.
pub trait FavoritesStore {
    /// Loads the persisted favorites, falling back to the defaults
    /// when no usable value exists.
    fn load(&self) -> Result<Favorites, StoreError>;

    /// Overwrites the persisted favorites.
    fn save(&self, favorites: &Favorites) -> Result<(), StoreError>;
}

/// File-backed store: one JSON array of codes at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Favorites, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Favorites::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Vec<CurrencyCode>>(&content) {
            Ok(codes) => Ok(Favorites::new(codes)),
            Err(err) => {
                tracing::warn!("unreadable favorites file, using defaults: {err}");
                Ok(Favorites::default())
            }
        }
    }

    fn save(&self, favorites: &Favorites) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(favorites)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::from(s)
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cambio_favorites_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn default_is_inr_eur() {
        let favorites = Favorites::default();
        let codes: Vec<_> = favorites.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["INR", "EUR"]);
    }

    #[test]
    fn toggle_twice_restores_value_and_order() {
        let mut favorites = Favorites::default();
        let before = favorites.clone();

        assert!(favorites.toggle(&code("GBP")));
        assert!(!favorites.toggle(&code("GBP")));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle(&code("INR")));
        assert!(favorites.toggle(&code("INR")));
        let codes: Vec<_> = favorites.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["EUR", "INR"]);
    }

    #[test]
    fn new_drops_duplicates_keeping_first() {
        let favorites = Favorites::new(vec![code("USD"), code("EUR"), code("USD")]);
        let codes: Vec<_> = favorites.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["USD", "EUR"]);
    }

    #[test]
    fn selection_order_lists_favorites_first() {
        let favorites = Favorites::default();
        let all = ["EUR", "GBP", "INR", "USD"].map(CurrencyCode::from);
        let order: Vec<_> = favorites
            .selection_order(&all)
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(order, ["INR", "EUR", "GBP", "USD"]);
    }

    #[test]
    fn selection_order_keeps_stale_favorites() {
        let mut favorites = Favorites::default();
        favorites.toggle(&code("XAU"));
        let all = ["EUR", "USD"].map(CurrencyCode::from);
        let order = favorites.selection_order(&all);
        assert!(order.contains(&code("XAU")));
    }

    #[test]
    fn file_store_round_trips_order() {
        let path = scratch_path("round_trip");
        let store = JsonFileStore::new(&path);

        let mut favorites = Favorites::default();
        favorites.toggle(&code("GBP"));
        store.save(&favorites).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, favorites);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = JsonFileStore::new(scratch_path("missing"));
        assert_eq!(store.load().unwrap(), Favorites::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), Favorites::default());

        fs::remove_file(&path).ok();
    }
}
