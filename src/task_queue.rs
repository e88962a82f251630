//! Task-specific queue with status-aware lookups and listings.
//!
//! [`TaskQueue`] wraps a [`Queue<Task>`] and adds:
//! - [`next_pending`](TaskQueue::next_pending) / [`next_completed`](TaskQueue::next_completed):
//!   earliest task (by insertion order) with the given status
//! - [`list`](TaskQueue::list), [`list_pending`](TaskQueue::list_pending),
//!   [`list_completed`](TaskQueue::list_completed): status-partitioned views
//!
//! The pending/completed partition is never stored; every query rescans the
//! queue. Listings return data, not text, so callers decide how to render.
//!
//! # Example
//!
//! ```rust
//! use taskq::{Listing, Priority, Task, TaskQueue};
//!
//! let mut queue = TaskQueue::new();
//! queue.enqueue(Task::new("Buy milk", Priority::Medium))?;
//! queue.enqueue(Task::new("File taxes", Priority::Critical))?;
//!
//! queue.complete_next();
//! assert_eq!(queue.next_pending().map(|t| t.description()), Some("File taxes"));
//! assert_eq!(queue.next_completed().map(|t| t.description()), Some("Buy milk"));
//!
//! assert!(matches!(queue.list(), Listing::Partitioned { .. }));
//! # Ok::<(), taskq::TaskqError>(())
//! ```

use crate::error::Result;
use crate::queue::Queue;
use crate::task::{Priority, Status, Task};
use serde::Serialize;
use std::collections::vec_deque;

// ============================================================================
// Listing types
// ============================================================================

/// One task as shown in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskRecord<'a> {
    pub description: &'a str,
    pub priority: Priority,
    pub status: Status,
}

impl<'a> From<&'a Task> for TaskRecord<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            description: task.description(),
            priority: task.priority(),
            status: task.status(),
        }
    }
}

/// Result of listing a single status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    /// Matching tasks in queue order; never empty
    Records(Vec<TaskRecord<'a>>),
    /// No task has this status
    NothingToShow(Status),
}

impl Section<'_> {
    /// Records in this section, empty when there is nothing to show.
    #[must_use]
    pub fn records(&self) -> &[TaskRecord<'_>] {
        match self {
            Section::Records(records) => records.as_slice(),
            Section::NothingToShow(_) => &[],
        }
    }

    #[must_use]
    pub fn is_nothing_to_show(&self) -> bool {
        matches!(self, Section::NothingToShow(_))
    }
}

/// Result of listing the whole queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The queue holds no tasks at all
    QueueEmpty,
    /// All pending tasks, then all completed tasks
    Partitioned {
        pending: Section<'a>,
        completed: Section<'a>,
    },
}

// ============================================================================
// TaskQueue
// ============================================================================

/// Insertion-ordered queue of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueue {
    tasks: Queue<Task>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Queue operations
    // ------------------------------------------------------------------------

    /// Append a task at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`TaskqError::Allocation`](crate::TaskqError::Allocation) if
    /// the queue cannot grow.
    pub fn enqueue(&mut self, task: Task) -> Result<()> {
        self.tasks.enqueue(task)
    }

    pub fn dequeue(&mut self) -> Option<Task> {
        self.tasks.dequeue()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Task> {
        self.tasks.peek()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Task> {
        self.tasks.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn includes(&self, task: &Task) -> bool {
        self.tasks.includes(task)
    }

    /// # Errors
    ///
    /// See [`Queue::clear`].
    pub fn clear(&mut self) -> Result<()> {
        self.tasks.clear()
    }

    /// # Errors
    ///
    /// See [`Queue::reverse`].
    pub fn reverse(&mut self) -> Result<()> {
        self.tasks.reverse()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&Task, usize),
    {
        self.tasks.for_each(callback);
    }

    /// # Errors
    ///
    /// See [`Queue::to_json`].
    pub fn to_json(&self) -> Result<String> {
        self.tasks.to_json()
    }

    // ------------------------------------------------------------------------
    // Status lookups
    // ------------------------------------------------------------------------

    /// Index of the earliest task with `status`.
    ///
    /// Checks the head before scanning; the result is the same either way.
    fn position_of(&self, status: Status) -> Option<usize> {
        match self.tasks.peek() {
            Some(head) if head.status() == status => Some(0),
            Some(_) => self.tasks.find_index(|task| task.status() == status),
            None => None,
        }
    }

    /// Earliest pending task in queue order.
    #[must_use]
    pub fn next_pending(&self) -> Option<&Task> {
        self.position_of(Status::Pending)
            .and_then(|i| self.tasks.get(i))
    }

    pub fn next_pending_mut(&mut self) -> Option<&mut Task> {
        self.position_of(Status::Pending)
            .and_then(|i| self.tasks.get_mut(i))
    }

    /// Earliest completed task in queue order.
    #[must_use]
    pub fn next_completed(&self) -> Option<&Task> {
        self.position_of(Status::Completed)
            .and_then(|i| self.tasks.get(i))
    }

    pub fn next_completed_mut(&mut self) -> Option<&mut Task> {
        self.position_of(Status::Completed)
            .and_then(|i| self.tasks.get_mut(i))
    }

    /// Mark the next pending task completed and return it.
    pub fn complete_next(&mut self) -> Option<&Task> {
        let task = self.next_pending_mut()?;
        task.complete();
        Some(task)
    }

    /// Number of (pending, completed) tasks.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        let pending = self.iter().filter(|task| task.is_pending()).count();
        (pending, self.len() - pending)
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    fn section(&self, status: Status) -> Section<'_> {
        let records: Vec<TaskRecord<'_>> = self
            .iter()
            .filter(|task| task.status() == status)
            .map(TaskRecord::from)
            .collect();

        if records.is_empty() {
            Section::NothingToShow(status)
        } else {
            Section::Records(records)
        }
    }

    /// Pending tasks in queue order.
    #[must_use]
    pub fn list_pending(&self) -> Section<'_> {
        self.section(Status::Pending)
    }

    /// Completed tasks in queue order.
    #[must_use]
    pub fn list_completed(&self) -> Section<'_> {
        self.section(Status::Completed)
    }

    /// Every task, pending ones first and completed ones second.
    ///
    /// Within each group the queue order is kept; the groups are not
    /// interleaved.
    #[must_use]
    pub fn list(&self) -> Listing<'_> {
        if self.is_empty() {
            return Listing::QueueEmpty;
        }

        Listing::Partitioned {
            pending: self.list_pending(),
            completed: self.list_completed(),
        }
    }
}

impl FromIterator<Task> for TaskQueue {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskQueue {
    type Item = &'a Task;
    type IntoIter = vec_deque::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
