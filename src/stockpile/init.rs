use crate::api::StockpileApi;
use crate::config::StockpileConfig;
use crate::error::{Result, StockpileError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the data directory, mainly for scripts and tests.
pub const HOME_ENV: &str = "STOCKPILE_HOME";

pub struct StockpileContext {
    pub api: StockpileApi<FileStore>,
    pub config: StockpileConfig,
}

/// `$STOCKPILE_HOME` when set and non-empty, else the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    data_dir_from(std::env::var_os(HOME_ENV).map(PathBuf::from))
}

fn data_dir_from(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "stockpile", "stockpile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockpileError::Config("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<StockpileContext> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");

    let config = StockpileConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        StockpileConfig::default()
    });

    let store = FileStore::new(dir.clone());
    let api = StockpileApi::new(store, dir);

    Ok(StockpileContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let temp = TempDir::new().unwrap();
        let dir = data_dir_from(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn empty_override_is_ignored() {
        let dir = data_dir_from(Some(PathBuf::new()));
        if let Ok(dir) = dir {
            assert!(!dir.as_os_str().is_empty());
        }
    }
}
