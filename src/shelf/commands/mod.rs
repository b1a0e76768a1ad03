use crate::config::ShelfConfig;
use crate::model::{Book, LibraryStats, SearchField};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod exit;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;
pub mod titles;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    /// Holds config.json and, unless overridden, the library file.
    pub data_dir: PathBuf,
    pub library_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books added or removed by the command.
    pub affected_books: Vec<Book>,
    /// Books the caller should display.
    pub listed_books: Vec<Book>,
    pub titles: Vec<String>,
    pub stats: Option<LibraryStats>,
    pub config: Option<ShelfConfig>,
    pub written_files: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_titles(mut self, titles: Vec<String>) -> Self {
        self.titles = titles;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_written_file(mut self, path: PathBuf) -> Self {
        self.written_files.push(path);
        self
    }
}

/// One user-selected mode together with its inputs.
///
/// Modes never interact: each one reads the current library and, for `Add`
/// and `Remove`, writes it back through the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(Book),
    Remove { title: String },
    Search { field: SearchField, query: String },
    List,
    Stats,
    Titles,
    Exit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Remove { .. } => "remove",
            Action::Search { .. } => "search",
            Action::List => "list",
            Action::Stats => "stats",
            Action::Titles => "titles",
            Action::Exit => "exit",
        }
    }

    /// Whether running this action can change the library.
    pub fn mutates(&self) -> bool {
        matches!(self, Action::Add(_) | Action::Remove { .. })
    }
}
