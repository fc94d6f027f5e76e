//! FIFO frontier for breadth-first search.

use crate::error::SearchError;
use std::collections::VecDeque;

/// A first-in-first-out queue of nodes waiting to be explored.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    queue: VecDeque<T>,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends a node to the back.
    pub fn push(&mut self, node: T) {
        self.queue.push_back(node);
    }

    /// Removes the node at the front.
    ///
    /// Callers are expected to check [`Frontier::is_empty`] first; popping
    /// an empty frontier is reported as [`SearchError::EmptyFrontier`].
    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.queue.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
