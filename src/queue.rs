//! Generic FIFO container.
//!
//! [`Queue`] keeps elements in insertion order: index 0 is the head (the
//! oldest element still present) and the last index is the tail. Lookups on
//! an empty queue return `None` rather than an error.
//!
//! # Example
//!
//! ```rust
//! use taskq::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a")?;
//! queue.enqueue("b")?;
//!
//! assert_eq!(queue.peek(), Some(&"a"));
//! assert_eq!(queue.last(), Some(&"b"));
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.len(), 1);
//! # Ok::<(), taskq::TaskqError>(())
//! ```

use crate::error::{Result, TaskqError};
use serde::Serialize;
use std::collections::vec_deque::{self, VecDeque};

/// Ordered container with queue semantics and linear search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Append `item` at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`TaskqError::Allocation`] if the queue cannot grow.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        self.elements
            .try_reserve(1)
            .map_err(|e| TaskqError::allocation("enqueue", &e))?;
        self.elements.push_back(item);
        Ok(())
    }

    /// Remove and return the head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Head element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Same as [`peek`](Self::peek).
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.peek()
    }

    /// Tail element without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove every element.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps every mutating operation on the
    /// same error path.
    pub fn clear(&mut self) -> Result<()> {
        self.elements.clear();
        Ok(())
    }

    /// Reverse the order in place.
    ///
    /// # Errors
    ///
    /// Never fails today; see [`clear`](Self::clear).
    pub fn reverse(&mut self) -> Result<()> {
        self.elements.make_contiguous().reverse();
        Ok(())
    }

    /// Visit every element in queue order with its index.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.elements.iter().enumerate() {
            callback(item, index);
        }
    }

    /// Position of the first element matching `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().position(predicate)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Check whether an equal element is present.
    #[must_use]
    pub fn includes(&self, item: &T) -> bool {
        self.elements.contains(item)
    }
}

impl<T: Serialize> Queue<T> {
    /// Dump the elements, head first, as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`TaskqError::Json`] if an element fails to serialize.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.elements)?)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(items: &[i32]) -> Queue<i32> {
        items.iter().copied().collect()
    }

    fn contents(queue: &Queue<i32>) -> Vec<i32> {
        queue.iter().copied().collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.first(), None);
        assert_eq!(queue.last(), None);
    }

    #[test]
    fn test_enqueue_appends_at_tail() {
        let mut queue = Queue::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.first(), Some(&1));
        assert_eq!(queue.last(), Some(&3));
    }

    #[test]
    fn test_dequeue_preserves_fifo_order() {
        let mut queue = queue_of(&[10, 20, 30]);
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.first(), Some(&20));
        assert_eq!(queue.dequeue(), Some(20));
        assert_eq!(queue.dequeue(), Some(30));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_on_empty_is_noop() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_length_tracks_enqueues_and_dequeues() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue();
        queue.dequeue();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&2));

        queue.enqueue(99).unwrap();
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.last(), Some(&99));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let queue = queue_of(&[7, 8]);
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_clear_empties_queue() {
        let mut queue = queue_of(&[1, 2, 3]);
        queue.clear().unwrap();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_reverse_swaps_first_and_last() {
        let mut queue = queue_of(&[1, 2, 3, 4]);
        queue.reverse().unwrap();
        assert_eq!(queue.first(), Some(&4));
        assert_eq!(queue.last(), Some(&1));
        assert_eq!(contents(&queue), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let mut queue = queue_of(&[5, 1, 4, 2]);
        queue.reverse().unwrap();
        queue.reverse().unwrap();
        assert_eq!(contents(&queue), vec![5, 1, 4, 2]);
    }

    #[test]
    fn test_reverse_after_wraparound() {
        // Dequeue then enqueue so the ring buffer wraps before reversing.
        let mut queue = Queue::new();
        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue();
        queue.dequeue();
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();

        queue.reverse().unwrap();
        assert_eq!(contents(&queue), vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_find_index() {
        let queue = queue_of(&[3, 6, 9, 12]);
        assert_eq!(queue.find_index(|n| n % 2 == 0), Some(1));
        assert_eq!(queue.find_index(|n| *n > 100), None);
    }

    #[test]
    fn test_includes() {
        let queue = queue_of(&[1, 2, 3]);
        assert!(queue.includes(&2));
        assert!(!queue.includes(&4));
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let queue = queue_of(&[4, 5, 6]);
        let mut seen = Vec::new();
        queue.for_each(|item, index| seen.push((index, *item)));
        assert_eq!(seen, vec![(0, 4), (1, 5), (2, 6)]);
    }

    #[test]
    fn test_get_mut_modifies_in_place() {
        let mut queue = queue_of(&[1, 2]);
        if let Some(item) = queue.get_mut(1) {
            *item = 20;
        }
        assert_eq!(queue.get(1), Some(&20));
        assert_eq!(queue.get(2), None);
    }

    #[test]
    fn test_to_json() {
        let queue = queue_of(&[1, 2, 3]);
        assert_eq!(queue.to_json().unwrap(), "[1,2,3]");
        assert_eq!(Queue::<i32>::new().to_json().unwrap(), "[]");
    }
}
