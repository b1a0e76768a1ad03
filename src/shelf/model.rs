use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest publication year accepted by the input surfaces.
pub const YEAR_MIN: i32 = 1000;
/// Latest publication year accepted by the input surfaces.
pub const YEAR_MAX: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// The whole catalog, in insertion order.
///
/// Serializes as a bare JSON array of books, which is also the on-disk format.
/// Titles are not unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) {
        self.books.extend(books);
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.books.iter().any(|b| b.title == title)
    }

    /// Drops every book whose title equals `title`, returning how many went.
    pub fn remove_title(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b.title != title);
        before - self.books.len()
    }

    pub fn titles(&self) -> Vec<String> {
        self.books.iter().map(|b| b.title.clone()).collect()
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// Book fields a search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }

    /// Case-insensitive substring test. An empty query matches everything.
    pub fn matches(&self, book: &Book, query: &str) -> bool {
        self.value(book)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Percentage of read books, 0 for an empty library.
    pub completion: f64,
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read).count();
        let completion = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            read,
            unread: total - read,
            completion,
        }
    }

    pub fn completion_label(&self) -> String {
        format!("{:.2}%", self.completion)
    }
}
