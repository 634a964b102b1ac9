//! The persisted list query: search text, category filter and sort order.

use crate::error::Result;
use crate::store::{keys, persist, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub search: String,
    pub filter_category: String,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter_category: ALL_CATEGORIES.to_string(),
            sort_by: SortKey::Name,
            sort_dir: SortDir::Asc,
        }
    }
}

impl ViewState {
    /// Loads the persisted view state, or the defaults.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        persist::load(store, keys::STATE).unwrap_or_default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        persist::save(store, keys::STATE, self)
    }

    /// Drops the persisted state, so the next load yields the defaults.
    pub fn forget<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
        store.remove(keys::STATE)
    }

    /// Column-header semantics: selecting the active key flips the direction,
    /// selecting another key sorts by it ascending.
    pub fn sort_by_header(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_by = key;
            self.sort_dir = SortDir::Asc;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || self.filter_category != ALL_CATEGORIES
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Price => f.write_str("price"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(format!("Unknown sort key: {} (expected name or price)", other)),
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => f.write_str("asc"),
            SortDir::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDir::Asc),
            "desc" | "descending" => Ok(SortDir::Desc),
            other => Err(format!("Unknown sort direction: {} (expected asc or desc)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn defaults_when_nothing_persisted() {
        let store = InMemoryStore::new();
        assert_eq!(ViewState::load(&store), ViewState::default());
    }

    #[test]
    fn persists_with_camel_case_keys() {
        let store = InMemoryStore::new();
        let view = ViewState {
            search: "mouse".into(),
            filter_category: "Electronics".into(),
            sort_by: SortKey::Price,
            sort_dir: SortDir::Desc,
        };
        view.save(&store).unwrap();

        let raw = store.raw(keys::STATE).unwrap();
        assert!(raw.contains("\"filterCategory\":\"Electronics\""));
        assert!(raw.contains("\"sortBy\":\"price\""));
        assert_eq!(ViewState::load(&store), view);
    }

    #[test]
    fn forget_removes_persisted_state() {
        let store = InMemoryStore::new();
        let view = ViewState {
            search: "lamp".into(),
            ..ViewState::default()
        };
        view.save(&store).unwrap();

        ViewState::forget(&store).unwrap();
        assert!(store.raw(keys::STATE).is_none());
        assert_eq!(ViewState::load(&store), ViewState::default());
    }

    #[test]
    fn partial_state_fills_defaults() {
        let store = InMemoryStore::new();
        store.set(keys::STATE, r#"{"search":"pen"}"#).unwrap();
        let view = ViewState::load(&store);
        assert_eq!(view.search, "pen");
        assert_eq!(view.filter_category, ALL_CATEGORIES);
    }

    #[test]
    fn unknown_enum_value_falls_back_to_defaults() {
        let store = InMemoryStore::new();
        store.set(keys::STATE, r#"{"sortBy":"weight"}"#).unwrap();
        assert_eq!(ViewState::load(&store), ViewState::default());
    }

    #[test]
    fn header_sort_toggles_or_switches() {
        let mut view = ViewState::default();
        view.sort_by_header(SortKey::Name);
        assert_eq!(view.sort_dir, SortDir::Desc);

        view.sort_by_header(SortKey::Price);
        assert_eq!(view.sort_by, SortKey::Price);
        assert_eq!(view.sort_dir, SortDir::Asc);
    }

    #[test]
    fn clear_resets_everything() {
        let mut view = ViewState {
            search: "x".into(),
            filter_category: "Home".into(),
            sort_by: SortKey::Price,
            sort_dir: SortDir::Desc,
        };
        assert!(view.is_filtered());
        view.clear();
        assert_eq!(view, ViewState::default());
        assert!(!view.is_filtered());
    }
}
