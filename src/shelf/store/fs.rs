use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Library;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Library> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "library file absent, starting empty");
            return Ok(Library::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let library: Library = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        debug!(path = %self.path.display(), books = library.len(), "library loaded");
        Ok(library)
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(library).map_err(ShelfError::Serialization)?;
        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        debug!(path = %self.path.display(), books = library.len(), "library saved");
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
