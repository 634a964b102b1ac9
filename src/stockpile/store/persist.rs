//! Typed JSON persistence over a [`KeyValueStore`].
//!
//! `save` reports failures to the caller; `load` never does. A value that is
//! missing, unreadable, malformed or of the wrong shape loads as `None`, so
//! callers fall back to their defaults.

use super::KeyValueStore;
use crate::error::{Result, StockpileError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub fn save<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value).map_err(StockpileError::Serialization)?;
    store.set(key, &encoded).map_err(|e| {
        warn!(key, error = %e, "failed to save");
        match e {
            StockpileError::Storage(_) => e,
            other => StockpileError::Storage(other.to_string()),
        }
    })
}

pub fn load<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read");
            return None;
        }
    };
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed value");
            None
        }
    }
}
