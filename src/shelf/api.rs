//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every shelf operation,
//! whatever the UI. It owns two things:
//!
//! - the [`DataStore`] handle, the only way anything reaches disk;
//! - the in-memory [`Library`], loaded once in [`ShelfApi::open`].
//!
//! Commands receive both explicitly. There is no ambient state: a mode
//! handler sees exactly the library and store the facade hands it.
//!
//! ## Dispatch
//!
//! UIs describe what the user picked as an [`Action`] and call
//! [`ShelfApi::dispatch`]. Each action maps to one command module; only `Add`
//! and `Remove` write, and they write the whole library back immediately.
//! The typed helpers (`add_book`, `search_books`, ...) are thin wrappers for
//! callers that prefer methods.
//!
//! Import, export and config sit outside the mode set and have their own
//! methods.
//!
//! ## Testing
//!
//! `ShelfApi<InMemoryStore>` runs every operation without a filesystem. API
//! tests check routing and persistence counts, not command logic.

use crate::commands::{self, Action, CmdResult, ShelfPaths};
use crate::error::Result;
use crate::model::{Book, Library, SearchField};
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ShelfApi<S: DataStore> {
    store: S,
    library: Library,
    paths: ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    /// Loads the library from `store`. A malformed library file fails here.
    pub fn open(store: S, paths: ShelfPaths) -> Result<Self> {
        let library = store.load()?;
        debug!(books = library.len(), "library opened");
        Ok(Self {
            store,
            library,
            paths,
        })
    }

    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        debug!(
            action = action.name(),
            mutates = action.mutates(),
            "dispatch"
        );
        match action {
            Action::Add(book) => commands::add::run(&mut self.store, &mut self.library, book),
            Action::Remove { title } => {
                commands::remove::run(&mut self.store, &mut self.library, &title)
            }
            Action::Search { field, query } => commands::search::run(&self.library, field, &query),
            Action::List => commands::list::run(&self.library),
            Action::Stats => commands::stats::run(&self.library),
            Action::Titles => commands::titles::run(&self.library),
            Action::Exit => commands::exit::run(),
        }
    }

    pub fn add_book(&mut self, book: Book) -> Result<CmdResult> {
        self.dispatch(Action::Add(book))
    }

    pub fn remove_book(&mut self, title: impl Into<String>) -> Result<CmdResult> {
        self.dispatch(Action::Remove {
            title: title.into(),
        })
    }

    pub fn search_books(
        &mut self,
        field: SearchField,
        query: impl Into<String>,
    ) -> Result<CmdResult> {
        self.dispatch(Action::Search {
            field,
            query: query.into(),
        })
    }

    pub fn list_books(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::List)
    }

    pub fn stats(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::Stats)
    }

    pub fn titles(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::Titles)
    }

    pub fn exit(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::Exit)
    }

    pub fn import_books(&mut self, paths: Vec<PathBuf>) -> Result<CmdResult> {
        commands::import::run(&mut self.store, &mut self.library, paths)
    }

    pub fn export_archive(&self, out_dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.library, out_dir)
    }

    pub fn export_single_file(&self, out_dir: &Path, name: &str) -> Result<CmdResult> {
        commands::export::run_single_file(&self.library, out_dir, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &ShelfPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::{CmdMessage, MessageLevel};
