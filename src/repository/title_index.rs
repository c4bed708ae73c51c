//! Title index: an unbalanced binary search tree over book titles.
//!
//! Nodes live in an arena and link to each other by position. Each node holds
//! a copy of the book taken at insertion time, so the index can lag behind the
//! record store after a loan or return; it is never rewritten in place.
//!
//! Titles compare case-sensitively and byte-wise. Equal titles go right, so
//! the first book inserted under a title is the one a search reaches first.
//! There is no deletion and no rebalancing: the shape depends only on
//! insertion order, and sorted input degrades into a list.

use std::cmp::Ordering;

use crate::models::Book;

#[derive(Debug, Clone)]
struct Node {
    book: Book,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    nodes: Vec<Node>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node holding a copy of `book`. Never updates an existing node.
    pub fn insert(&mut self, book: &Book) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            book: book.clone(),
            left: None,
            right: None,
        });
        if id == 0 {
            return;
        }

        let mut current = 0;
        loop {
            let node = &mut self.nodes[current];
            let slot = if book.title < node.book.title {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    tracing::debug!(title = %book.title, node = id, parent = current, "indexed title");
                    return;
                }
            }
        }
    }

    /// Exact, case-sensitive lookup along the search path
    pub fn search(&self, title: &str) -> Option<&Book> {
        let mut current = self.root();
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match title.cmp(node.book.title.as_str()) {
                Ordering::Equal => return Some(&node.book),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Indexed books in title order; equal titles appear in insertion order.
    pub fn in_order(&self) -> Vec<&Book> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root();
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            if let Some(id) = stack.pop() {
                out.push(&self.nodes[id].book);
                current = self.nodes[id].right;
            }
        }
        out
    }

    /// Number of edges on the longest root-to-leaf path, plus one.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root().map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        deepest
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}
