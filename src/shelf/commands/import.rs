use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Book, Library};
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const IMPORT_EXT: &str = "json";

/// Appends the books found in JSON files (same format as the library file).
///
/// Directories are scanned one level deep for `.json` files. Files that cannot
/// be read or parsed are reported and skipped. The library is saved once, at
/// the end, and only when something was imported.
pub fn run<S: DataStore>(
    store: &mut S,
    library: &mut Library,
    paths: Vec<PathBuf>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported: Vec<Book> = Vec::new();

    for path in paths {
        if path.is_dir() {
            for file in json_files_in(&path)? {
                import_into(&file, &mut imported, &mut result);
            }
        } else if path.is_file() {
            import_into(&path, &mut imported, &mut result);
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    let total = imported.len();
    if total > 0 {
        library.extend(imported.iter().cloned());
        store.save(library)?;
        info!(total, "books imported");
    }

    result.add_message(CmdMessage::success(format!("Total imported: {}", total)));
    Ok(result.with_affected_books(imported))
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(ShelfError::Io)? {
        let path = entry.map_err(ShelfError::Io)?.path();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(IMPORT_EXT))
            .unwrap_or(false);
        if path.is_file() && is_json {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn import_into(path: &Path, imported: &mut Vec<Book>, result: &mut CmdResult) {
    match read_books(path) {
        Ok(books) => {
            result.add_message(CmdMessage::info(format!(
                "Imported: {} ({} books)",
                path.display(),
                books.len()
            )));
            imported.extend(books);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "import failed");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import: {} ({})",
                path.display(),
                e
            )));
        }
    }
}

fn read_books(path: &Path) -> Result<Vec<Book>> {
    let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
    let library: Library = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
    Ok(library.books().to_vec())
}
