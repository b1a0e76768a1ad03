use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_FILE: &str = "library.json";

pub const KEY_LIBRARY_FILE: &str = "library-file";
pub const KEY_COLOR: &str = "color";

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `None` means "detect from the terminal".
    pub fn forced(&self) -> Option<bool> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Always => Some(true),
            ColorChoice::Never => Some(false),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ColorChoice {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(ShelfError::Config(format!(
                "Invalid color value: {} (expected auto, always or never)",
                other
            ))),
        }
    }
}

/// Configuration for shelf, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Library file; relative paths resolve against the data directory.
    #[serde(default = "default_library_file")]
    pub library_file: String,

    #[serde(default)]
    pub color: ColorChoice,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            color: ColorChoice::default(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Like [`ShelfConfig::load`], but an unreadable or malformed file yields
    /// the defaults plus a warning for the user instead of an error.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> (Self, Option<String>) {
        let config_dir = config_dir.as_ref();
        match Self::load(config_dir) {
            Ok(config) => (config, None),
            Err(e) => {
                let warning = format!(
                    "Ignoring unreadable config {} ({}), using defaults.",
                    config_dir.join(CONFIG_FILENAME).display(),
                    e
                );
                (Self::default(), Some(warning))
            }
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn library_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.library_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_LIBRARY_FILE => Some(self.library_file.clone()),
            KEY_COLOR => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_LIBRARY_FILE => {
                if value.trim().is_empty() {
                    return Err(ShelfError::Config("library-file cannot be empty".into()));
                }
                self.library_file = value.trim().to_string();
            }
            KEY_COLOR => self.color = value.parse()?,
            other => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        [KEY_LIBRARY_FILE, KEY_COLOR]
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.library_file, "library.json");
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ShelfConfig::default();
        config.set(KEY_COLOR, "never").unwrap();
        config.set(KEY_LIBRARY_FILE, "books.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.color, ColorChoice::Never);
        assert_eq!(loaded.library_file, "books.json");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"color":"always"}"#).unwrap();

        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config.color, ColorChoice::Always);
        assert_eq!(config.library_file, "library.json");
    }

    #[test]
    fn test_load_or_default_warns_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ color: ").unwrap();

        assert!(ShelfConfig::load(dir.path()).is_err());
        let (config, warning) = ShelfConfig::load_or_default(dir.path());
        assert_eq!(config, ShelfConfig::default());
        assert!(warning.unwrap().starts_with("Ignoring unreadable config"));

        let clean = TempDir::new().unwrap();
        assert_eq!(ShelfConfig::load_or_default(clean.path()).1, None);
    }

    #[test]
    fn test_library_path_resolution() {
        let data_dir = Path::new("/data/shelf");
        let mut config = ShelfConfig::default();
        assert_eq!(
            config.library_path(data_dir),
            PathBuf::from("/data/shelf/library.json")
        );

        config.library_file = "/elsewhere/books.json".into();
        assert_eq!(
            config.library_path(data_dir),
            PathBuf::from("/elsewhere/books.json")
        );
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = ShelfConfig::default();
        assert!(config.set(KEY_COLOR, "sometimes").is_err());
        assert!(config.set(KEY_LIBRARY_FILE, "  ").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_list_all_covers_known_keys() {
        let keys: Vec<String> = ShelfConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["library-file", "color"]);
    }
}
