//! Reservation queue: pending requests by title, first come first served

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct ReservationsRepository {
    queue: VecDeque<String>,
}

impl ReservationsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request. Identical titles are kept as separate entries.
    pub fn reserve(&mut self, title: impl Into<String>) {
        self.queue.push_back(title.into());
    }

    /// Front-to-back copy of the queue, detached from later changes
    pub fn peek_all(&self) -> Vec<String> {
        self.queue.iter().cloned().collect()
    }

    pub fn pop_front(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Put a request back ahead of everything else, keeping its priority.
    pub fn push_front(&mut self, title: impl Into<String>) {
        self.queue.push_front(title.into());
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_with_duplicates() {
        let mut queue = ReservationsRepository::new();
        queue.reserve("1984");
        queue.reserve("1984");
        queue.reserve("Dune");

        assert_eq!(queue.peek_all(), vec!["1984", "1984", "Dune"]);
        assert_eq!(queue.pop_front().as_deref(), Some("1984"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_peek_all_is_detached() {
        let mut queue = ReservationsRepository::new();
        queue.reserve("Emma");
        let view = queue.peek_all();
        queue.reserve("Dune");
        queue.pop_front();

        assert_eq!(view, vec!["Emma"]);
    }

    #[test]
    fn test_push_front_restores_priority() {
        let mut queue = ReservationsRepository::new();
        queue.reserve("Dune");
        queue.reserve("Emma");

        let title = queue.pop_front().unwrap();
        queue.push_front(title);
        assert_eq!(queue.peek_all(), vec!["Dune", "Emma"]);
    }

    #[test]
    fn test_pop_empty() {
        let mut queue = ReservationsRepository::new();
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }
}
