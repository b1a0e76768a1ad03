use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let (mut config, warning) = ShelfConfig::load_or_default(&paths.data_dir);
    let mut result = CmdResult::default();
    if let Some(warning) = warning {
        result.add_message(CmdMessage::warning(warning));
    }

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(&paths.data_dir)?;
                result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            }
            Err(ShelfError::Config(reason)) => result.add_message(CmdMessage::error(reason)),
            Err(e) => return Err(e),
        },
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ColorChoice;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> ShelfPaths {
        ShelfPaths {
            data_dir: dir.path().to_path_buf(),
            library_file: dir.path().join("library.json"),
        }
    }

    #[test]
    fn show_all_returns_config() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ShelfConfig::default()));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set("color".into(), "never".into());
        let result = run(&paths(&dir), action).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.color, ColorChoice::Never);
    }

    #[test]
    fn show_key_reports_value() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::ShowKey("library-file".into());
        let result = run(&paths(&dir), action).unwrap();
        assert_eq!(result.messages[0].content, "library-file = library.json");
    }

    #[test]
    fn malformed_config_is_a_warning_not_a_failure() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

        let shown = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Warning);
        assert_eq!(shown.config, Some(ShelfConfig::default()));

        let set = run(
            &paths(&dir),
            ConfigAction::Set("color".into(), "always".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Warning);
        assert_eq!(set.messages[1].level, MessageLevel::Success);
        let repaired = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(repaired.color, ColorChoice::Always);
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let show = run(&paths(&dir), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(show.messages[0].level, MessageLevel::Error);
        assert_eq!(show.messages[0].content, "Unknown config key: theme");

        let set = run(
            &paths(&dir),
            ConfigAction::Set("theme".into(), "dark".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
