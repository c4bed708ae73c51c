//! Outcomes reported by the lending desk.
//!
//! None of these are errors: every case, including an empty queue or an
//! unknown title, is a normal result the caller prints and moves on from.

use serde::Serialize;

use super::book::Book;

/// Result of handing out the oldest reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LendOutcome {
    /// A copy went out; `remaining` copies are left on the shelf.
    Lent { title: String, remaining: u32 },
    /// The title exists but has no copy left. The reservation is back at the front.
    Unavailable { title: String },
    /// Nothing in the catalog matches. The reservation was dropped.
    BookNotFound { title: String },
    NoBooksToLend,
}

impl std::fmt::Display for LendOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LendOutcome::Lent { title, remaining } => {
                write!(f, "Lent: {} (Remaining copies: {})", title, remaining)
            }
            LendOutcome::Unavailable { title } => write!(
                f,
                "No copies of '{}' available. It will be lent when the next copy is returned.",
                title
            ),
            LendOutcome::BookNotFound { title } => write!(f, "Book not found: '{}'", title),
            LendOutcome::NoBooksToLend => write!(f, "No books to lend."),
        }
    }
}

/// Result of taking back the most recent loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned { title: String, available: u32 },
    /// The loan was popped but no catalog entry carries its title any more.
    ReturnError { title: String },
    NoBooksToReturn,
}

impl std::fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnOutcome::Returned { title, available } => {
                write!(f, "Returned: {} (Available copies: {})", title, available)
            }
            ReturnOutcome::ReturnError { title } => {
                write!(f, "Error: Book not found for returning: {}", title)
            }
            ReturnOutcome::NoBooksToReturn => write!(f, "No books to return."),
        }
    }
}

/// Result of an exact title lookup against the title index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { book: Book },
    NotFound { title: String },
}

impl SearchOutcome {
    pub fn book(&self) -> Option<&Book> {
        match self {
            SearchOutcome::Found { book } => Some(book),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found { book } => write!(
                f,
                "Book found by Title: '{}' by {} (Quantity: {})",
                book.title, book.author, book.total_copies
            ),
            SearchOutcome::NotFound { .. } => write!(f, "Book not found by Title."),
        }
    }
}
