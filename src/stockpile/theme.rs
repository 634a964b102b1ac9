use crate::error::Result;
use crate::store::{keys, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Display preference. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// The persisted preference, else whatever the system prefers.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self::load_with(store, system_preference)
    }

    /// Like [`ThemeMode::load`] with an injectable system detector.
    pub fn load_with<S, F>(store: &S, detect: F) -> Self
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce() -> ThemeMode,
    {
        match store.get(keys::THEME) {
            Ok(Some(raw)) => raw
                .trim()
                .trim_matches('"')
                .parse()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "ignoring persisted theme");
                    detect()
                }),
            Ok(None) => detect(),
            Err(e) => {
                warn!(error = %e, "failed to read theme");
                detect()
            }
        }
    }

    /// Stored as the bare word `dark` or `light`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.set(keys::THEME, &self.to_string())
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub fn system_preference() -> ThemeMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("Unknown theme: {} (expected dark or light)", other)),
        }
    }
}
