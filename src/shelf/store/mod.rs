//! # Storage Layer
//!
//! The [`DataStore`] trait is the only I/O boundary between the in-memory
//! [`Library`] and wherever it is persisted. It has exactly two operations:
//! load everything, and save everything.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file
//!   holding an array of book records.
//! - [`memory::InMemoryStore`]: keeps the last saved library in memory and
//!   counts saves, for tests.
//!
//! ## Full Rewrite
//!
//! Every mutation rewrites the whole file. There is no incremental update, no
//! locking and no temp-file-and-rename: a crash mid-write can truncate the
//! file. The catalog is small and single-user, so the simple scheme stays.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "title": "Emma",
//!     "author": "Jane Austen",
//!     "year": 1815,
//!     "genre": "Novel",
//!     "read": true
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::Library;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the full library. A missing backing file is an empty library.
    fn load(&self) -> Result<Library>;

    /// Overwrite the persisted library with `library`.
    fn save(&mut self, library: &Library) -> Result<()>;

    /// Where the library lives, for stores that have a location.
    fn location(&self) -> Option<&Path> {
        None
    }
}
