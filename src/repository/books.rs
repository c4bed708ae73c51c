//! Record store: the authoritative set of books, keyed by ISBN

use indexmap::IndexMap;

use crate::models::Book;

#[derive(Debug, Clone, Default)]
pub struct BooksRepository {
    books: IndexMap<String, Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or silently replace the entry under `book.isbn`.
    ///
    /// A replaced entry keeps its original position in iteration order.
    /// Returns the previous entry, if any.
    pub fn put(&mut self, book: Book) -> Option<Book> {
        self.books.insert(book.isbn.clone(), book)
    }

    /// Get book by ISBN
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// First book whose title matches `title` ignoring case and surrounding
    /// whitespace, scanning in insertion order.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.values().find(|book| book.title_matches(title))
    }

    /// Mutable variant of [`find_by_title`](Self::find_by_title), handing out
    /// the live entry.
    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.values_mut().find(|book| book.title_matches(title))
    }

    /// Snapshot of every entry as it stands now
    pub fn all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
