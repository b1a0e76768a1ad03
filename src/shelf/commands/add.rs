use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Library};
use crate::store::DataStore;
use tracing::info;

/// Appends `book` and persists the library. No deduplication: adding the same
/// book twice stores it twice.
pub fn run<S: DataStore>(store: &mut S, library: &mut Library, book: Book) -> Result<CmdResult> {
    library.push(book.clone());
    store.save(library)?;
    info!(title = %book.title, total = library.len(), "book added");

    let message = CmdMessage::success(format!("Book '{}' added to your library!", book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_saves() {
        let mut store = InMemoryStore::new();
        let mut library = Library::new();
        let book = Book::new("Emma", "Jane Austen", 1815, "Novel", true);

        let result = run(&mut store, &mut library, book.clone()).unwrap();

        assert_eq!(library.books(), &[book.clone()]);
        assert_eq!(store.saved(), &library);
        assert_eq!(store.save_count(), 1);
        assert_eq!(result.affected_books, vec![book]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Book 'Emma' added to your library!"
        );
    }

    #[test]
    fn each_add_grows_by_exactly_one() {
        let mut store = InMemoryStore::new();
        let mut library = Library::new();

        for i in 0..5 {
            let book = Book::new(format!("T{}", i), "A", 2000 + i, "G", i % 2 == 0);
            run(&mut store, &mut library, book.clone()).unwrap();
            assert_eq!(library.len(), (i + 1) as usize);
            assert_eq!(library.books().last(), Some(&book));
        }
        assert_eq!(store.save_count(), 5);
    }

    #[test]
    fn identical_adds_are_kept_as_duplicates() {
        let mut store = InMemoryStore::new();
        let mut library = Library::new();
        let book = Book::new("Dune", "Frank Herbert", 1965, "SF", false);

        run(&mut store, &mut library, book.clone()).unwrap();
        run(&mut store, &mut library, book).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn empty_text_fields_are_accepted() {
        let mut store = InMemoryStore::new();
        let mut library = Library::new();

        run(&mut store, &mut library, Book::new("", "", 1000, "", false)).unwrap();
        assert_eq!(library.books()[0].title, "");
    }
}
