//! Reservation and lending workflow

use crate::models::{Book, LendOutcome, ReturnOutcome};

use super::catalog::CatalogService;

impl CatalogService {
    /// Queue a request for `title`. Titles are not checked against the
    /// catalog here; unknown ones are dropped when their turn comes.
    pub fn reserve_book(&mut self, title: impl Into<String>) {
        let title = title.into();
        tracing::info!("Reserved: '{}'", title);
        self.repository.reservations.reserve(title);
    }

    /// Pending reservations, oldest first
    pub fn reservations(&self) -> Vec<String> {
        self.repository.reservations.peek_all()
    }

    /// Outstanding loans as snapshotted when lent, oldest first
    pub fn borrowed(&self) -> Vec<Book> {
        self.repository.loans.all()
    }

    /// Serve the oldest reservation.
    ///
    /// The title is resolved through the record store's case-insensitive
    /// finder. An unknown title is dropped; a known title with no copy left
    /// goes back to the front of the queue.
    pub fn lend_book(&mut self) -> LendOutcome {
        let repo = &mut self.repository;

        let Some(title) = repo.reservations.pop_front() else {
            return LendOutcome::NoBooksToLend;
        };

        let Some(book) = repo.books.find_by_title_mut(&title) else {
            tracing::warn!("Book not found: '{}', reservation dropped", title);
            return LendOutcome::BookNotFound { title };
        };

        if book.total_copies == 0 {
            tracing::warn!("No copies of '{}' available, reservation kept at front", title);
            repo.reservations.push_front(title.clone());
            return LendOutcome::Unavailable { title };
        }

        // The ledger copy is taken before either counter moves.
        repo.loans.push(book.clone());
        book.total_copies -= 1;
        book.borrowed_count += 1;

        tracing::info!(
            isbn = %book.isbn,
            borrowed = book.borrowed_count,
            "Lent: {} (Remaining copies: {})",
            book.title,
            book.total_copies
        );
        LendOutcome::Lent {
            title: book.title.clone(),
            remaining: book.total_copies,
        }
    }

    /// Take back the most recent loan.
    ///
    /// The copy is credited to whichever live entry currently carries the
    /// loaned title, not to the snapshot held by the ledger.
    pub fn return_book(&mut self) -> ReturnOutcome {
        let repo = &mut self.repository;

        let Some(snapshot) = repo.loans.pop() else {
            return ReturnOutcome::NoBooksToReturn;
        };

        let Some(book) = repo.books.find_by_title_mut(&snapshot.title) else {
            tracing::error!("Book not found for returning: {}", snapshot.title);
            return ReturnOutcome::ReturnError {
                title: snapshot.title,
            };
        };

        // An upsert since the loan may have reset the counter.
        book.borrowed_count = book.borrowed_count.saturating_sub(1);
        book.total_copies += 1;

        tracing::info!(
            isbn = %book.isbn,
            borrowed = book.borrowed_count,
            "Returned: {} (Available copies: {})",
            book.title,
            book.total_copies
        );
        ReturnOutcome::Returned {
            title: book.title.clone(),
            available: book.total_copies,
        }
    }
}
