use crate::error::{Result, StockpileError};
use crate::transfer::ImportPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DELETE_DELAY_MS: u64 = 180;
const DEFAULT_EXPORT_FILE: &str = "inventory.json";

/// Configuration for stockpile, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockpileConfig {
    /// How import treats fields it cannot read ("lenient" or "strict")
    #[serde(default)]
    pub import_policy: ImportPolicy,

    /// Pause before a confirmed delete is committed, when a row is on screen
    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u64,

    /// File written by `export` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_delete_delay_ms() -> u64 {
    DEFAULT_DELETE_DELAY_MS
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for StockpileConfig {
    fn default() -> Self {
        Self {
            import_policy: ImportPolicy::default(),
            delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl StockpileConfig {
    pub const KEYS: [&'static str; 3] = ["import_policy", "delete_delay_ms", "export_file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockpileError::Io)?;
        let config: StockpileConfig =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockpileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockpileError::Serialization)?;
        fs::write(config_path, content).map_err(StockpileError::Io)?;
        Ok(())
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "import_policy" => Some(self.import_policy.to_string()),
            "delete_delay_ms" => Some(self.delete_delay_ms.to_string()),
            "export_file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    /// Sets a key from its textual form. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "import_policy" => {
                self.import_policy = value.parse()?;
            }
            "delete_delay_ms" => {
                self.delete_delay_ms = value
                    .parse()
                    .map_err(|_| format!("delete_delay_ms must be a whole number, got {}", value))?;
            }
            "export_file" => {
                if value.is_empty() {
                    return Err("export_file cannot be empty".to_string());
                }
                self.export_file = value.to_string();
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// Every key with its current value, in a stable order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
