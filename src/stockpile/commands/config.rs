use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockpileConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = StockpileConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockpileConfig::load(data_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockpileConfig::load(data_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(data_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::transfer::ImportPolicy;
    use tempfile::TempDir;

    #[test]
    fn set_then_show() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("import_policy".into(), "Strict".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "import_policy set to strict");
        assert_eq!(result.config.unwrap().import_policy, ImportPolicy::Strict);

        let shown = run(temp.path(), ConfigAction::ShowKey("import_policy".into())).unwrap();
        assert_eq!(shown.messages[0].content, "strict");
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }

    #[test]
    fn bad_value_is_not_saved() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("delete_delay_ms".into(), "soon".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), StockpileConfig::default());
    }
}
