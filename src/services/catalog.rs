//! Catalog management service

use crate::{
    error::AppResult,
    import::RecordSource,
    models::{
        import_report::{ImportReport, RejectedRow},
        Book, RawRecord, SearchOutcome,
    },
    repository::Repository,
};

#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    pub(super) repository: Repository,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Load every row of `source`, skipping the ones that fail validation.
    ///
    /// A source that cannot be read at all leaves the catalog untouched and
    /// is reported through `ImportReport::failure`.
    pub fn load(&mut self, source: &mut dyn RecordSource) -> ImportReport {
        let mut report = ImportReport::new(source.name());

        let rows = match source.rows() {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Error opening file: {}: {}", report.source, e);
                report.failure = Some(e.to_string());
                return report;
            }
        };

        for row in rows {
            match self.ingest(row.record) {
                Ok(_) => report.added += 1,
                Err(e) => report.rejected.push(RejectedRow {
                    line_number: row.line_number,
                    line: row.line,
                    reason: e.to_string(),
                }),
            }
        }

        tracing::info!(
            added = report.added,
            rejected = report.rejected.len(),
            "Books loaded from {}",
            report.source
        );
        report
    }

    /// Validate one raw row and add the resulting book.
    pub fn ingest(&mut self, raw: RawRecord) -> AppResult<Book> {
        let isbn = raw.isbn.clone();
        let book = Book::try_from(raw).inspect_err(|e| {
            tracing::error!(isbn = %isbn, "Rejected row: {}", e);
        })?;
        self.add_book(book.clone());
        Ok(book)
    }

    /// Upsert into the record store and insert a fresh node into the title
    /// index.
    ///
    /// Re-adding an ISBN replaces the record but leaves the older index node in
    /// place, so exact title search can still return the earlier copy.
    pub fn add_book(&mut self, book: Book) {
        self.repository.titles.insert(&book);
        tracing::info!(
            "Added book: {} (ISBN: {}, Quantity: {})",
            book.title,
            book.isbn,
            book.total_copies
        );
        if let Some(previous) = self.repository.books.put(book) {
            tracing::debug!(isbn = %previous.isbn, "Replaced existing record");
        }
    }

    /// Exact title search against the title index
    pub fn search_by_title(&self, title: &str) -> SearchOutcome {
        tracing::debug!("Searching for title: '{}'", title);
        match self.repository.titles.search(title) {
            Some(book) => SearchOutcome::Found { book: book.clone() },
            None => SearchOutcome::NotFound {
                title: title.to_string(),
            },
        }
    }

    /// Get book by ISBN
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.repository.books.get(isbn)
    }

    /// Case-insensitive title lookup against the record store
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.repository.books.find_by_title(title)
    }

    /// Full inventory as it stands now
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        import::{DelimitedReader, MockRecordSource},
    };
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn book(isbn: &str, title: &str, copies: u32) -> Book {
        Book::new(isbn, title, "Anonymous", Decimal::ONE, copies)
    }

    #[test]
    fn test_add_book_writes_both_stores() {
        let mut catalog = CatalogService::new();
        catalog.add_book(book("X1", "Dune", 2));

        assert_eq!(catalog.get("X1"), Some(&book("X1", "Dune", 2)));
        assert!(catalog.search_by_title("Dune").book().is_some());
        assert_eq!(catalog.repository().titles.len(), 1);
    }

    #[test]
    fn test_get_returns_latest_state() {
        let mut catalog = CatalogService::new();
        catalog.add_book(book("X1", "Dune", 2));
        catalog.add_book(book("X1", "Dune", 5));

        assert_eq!(catalog.get("X1").map(|b| b.total_copies), Some(5));
        assert_eq!(catalog.list_books().len(), 1);
    }

    #[test]
    fn test_readd_leaves_stale_index_node() {
        let mut catalog = CatalogService::new();
        catalog.add_book(book("X1", "Dune", 2));
        catalog.add_book(book("X1", "Dune", 5));

        assert_eq!(catalog.repository().titles.len(), 2);
        let found = catalog.search_by_title("Dune");
        assert_eq!(found.book().map(|b| b.total_copies), Some(2));
    }

    #[test]
    fn test_search_by_title_is_exact() {
        let mut catalog = CatalogService::new();
        catalog.add_book(book("X1", "Pride and Prejudice", 1));

        assert!(matches!(
            catalog.search_by_title("pride and prejudice"),
            SearchOutcome::NotFound { .. }
        ));
        assert!(catalog.find_by_title("pride and prejudice").is_some());
    }

    #[test]
    fn test_ingest_rejects_missing_quantity() {
        let mut catalog = CatalogService::new();
        let err = catalog
            .ingest(RawRecord::from_line("X1,Dune,Frank Herbert,9.99,"))
            .unwrap_err();

        assert!(err.is_malformed_row());
        assert!(catalog.list_books().is_empty());
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let input = "\
X1,Dune,Frank Herbert,9.99,1
X2,Emma,Jane Austen,,3
X3,1984,George Orwell,7.25,4
X4,Ulysses,James Joyce,abc,1
";
        let mut catalog = CatalogService::new();
        let report = catalog.load(&mut DelimitedReader::new("inline", Cursor::new(input)));

        assert_eq!(report.added, 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].line_number, 2);
        assert_eq!(report.rejected[1].line, "X4,Ulysses,James Joyce,abc,1");
        assert!(!report.is_clean());
        assert!(catalog.get("X1").is_some());
        assert!(catalog.get("X3").is_some());
        assert!(catalog.get("X2").is_none());
    }

    #[test]
    fn test_load_unreadable_source_yields_empty_catalog() {
        let mut source = MockRecordSource::new();
        source.expect_name().return_const("books.csv".to_string());
        source.expect_rows().times(1).returning(|| {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            )))
        });

        let mut catalog = CatalogService::new();
        let report = catalog.load(&mut source);

        assert_eq!(report.source, "books.csv");
        assert_eq!(report.added, 0);
        assert!(report.failure.is_some());
        assert!(catalog.list_books().is_empty());
    }
}
