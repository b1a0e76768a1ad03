use crate::api::ShelfApi;
use crate::commands::ShelfPaths;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory (config and default library location).
pub const DATA_DIR_ENV: &str = "SHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    /// Set when config.json could not be read and defaults are in use.
    pub config_warning: Option<String>,
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine the data directory".to_string()))
}

/// Library path precedence: explicit override, then config, then default.
pub fn resolve_paths(data_dir: &Path, config: &ShelfConfig, file: Option<PathBuf>) -> ShelfPaths {
    let library_file = file.unwrap_or_else(|| config.library_path(data_dir));
    ShelfPaths {
        data_dir: data_dir.to_path_buf(),
        library_file,
    }
}

/// Builds the API over the on-disk library. Fails when the library file
/// exists but cannot be parsed.
pub fn initialize(file: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = data_dir()?;
    initialize_in(&data_dir, file)
}

pub fn initialize_in(data_dir: &Path, file: Option<PathBuf>) -> Result<ShelfContext> {
    let (config, config_warning) = ShelfConfig::load_or_default(data_dir);
    if let Some(warning) = &config_warning {
        debug!(%warning, "config fallback");
    }
    let paths = resolve_paths(data_dir, &config, file);
    debug!(library = %paths.library_file.display(), "using library file");

    let store = FileStore::new(paths.library_file.clone());
    let api = ShelfApi::open(store, paths)?;
    Ok(ShelfContext {
        api,
        config,
        config_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_prefers_explicit_file() {
        let data = Path::new("/data");
        let config = ShelfConfig::default();

        let default = resolve_paths(data, &config, None);
        assert_eq!(default.library_file, PathBuf::from("/data/library.json"));

        let explicit = resolve_paths(data, &config, Some(PathBuf::from("/tmp/mine.json")));
        assert_eq!(explicit.library_file, PathBuf::from("/tmp/mine.json"));
    }

    #[test]
    fn resolve_uses_configured_file() {
        let config = ShelfConfig {
            library_file: "books/catalog.json".into(),
            ..ShelfConfig::default()
        };
        let paths = resolve_paths(Path::new("/data"), &config, None);
        assert_eq!(
            paths.library_file,
            PathBuf::from("/data/books/catalog.json")
        );
    }

    #[test]
    fn initialize_starts_empty_without_files() {
        let dir = TempDir::new().unwrap();
        let ctx = initialize_in(dir.path(), None).unwrap();
        assert!(ctx.api.library().is_empty());
        assert_eq!(ctx.config, ShelfConfig::default());
        assert!(ctx.config_warning.is_none());
    }

    #[test]
    fn initialize_survives_malformed_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "not json").unwrap();

        let ctx = initialize_in(dir.path(), None).unwrap();
        assert_eq!(ctx.config, ShelfConfig::default());
        assert!(ctx.config_warning.is_some());
    }

    #[test]
    fn initialize_loads_existing_library() {
        let dir = TempDir::new().unwrap();
        let books = vec![Book::new("Emma", "Jane Austen", 1815, "Novel", true)];
        fs::write(
            dir.path().join("library.json"),
            serde_json::to_string(&books).unwrap(),
        )
        .unwrap();

        let ctx = initialize_in(dir.path(), None).unwrap();
        assert_eq!(ctx.api.library().books(), books.as_slice());
    }

    #[test]
    fn initialize_fails_on_malformed_library() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("library.json"), "not json at all").unwrap();

        let result = initialize_in(dir.path(), None);
        assert!(matches!(result, Err(ShelfError::Serialization(_))));
    }
}
