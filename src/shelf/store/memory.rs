use super::DataStore;
use crate::error::Result;
use crate::model::Library;

/// In-memory storage for tests. Nothing is persisted.
#[derive(Default)]
pub struct InMemoryStore {
    library: Library,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose next `load` returns `library`.
    pub fn with_library(library: Library) -> Self {
        Self { library, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> &Library {
        &self.library
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Library> {
        Ok(self.library.clone())
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.library = library.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Book;

    /// Builds a library plus a store already holding it.
    #[derive(Default)]
    pub struct LibraryFixture {
        pub library: Library,
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.library.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    1990 + i as i32,
                    "Fiction",
                    i % 2 == 0,
                ));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, read: bool) -> Self {
            self.library
                .push(Book::new(title, author, 2000, "Fiction", read));
            self
        }

        pub fn build(self) -> (InMemoryStore, Library) {
            let store = InMemoryStore::with_library(self.library.clone());
            (store, self.library)
        }
    }
}
