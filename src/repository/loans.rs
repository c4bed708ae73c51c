//! Lending ledger: snapshots of lent books, returned last in, first out

use crate::models::Book;

#[derive(Debug, Clone, Default)]
pub struct LoansRepository {
    stack: Vec<Book>,
}

impl LoansRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loan. The snapshot is owned by the ledger and never follows
    /// the live catalog entry.
    pub fn push(&mut self, snapshot: Book) {
        self.stack.push(snapshot);
    }

    /// Most recent loan, if any
    pub fn pop(&mut self) -> Option<Book> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&Book> {
        self.stack.last()
    }

    /// Outstanding loans, oldest first
    pub fn all(&self) -> Vec<Book> {
        self.stack.clone()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
