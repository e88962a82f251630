//! taskq - terminal task manager
//!
//! An in-memory, single-session to-do list built around an ordered task
//! queue. Tasks are appended with a description and a priority, completed
//! one-way, inspected, listed by status, removed, or cleared.
//!
//! # Architecture
//!
//! Dependencies point one way: shell → task queue → queue → task.
//!
//! - [`task`] - `Task` entity with `Priority` and `Status` labels
//! - [`queue`] - generic FIFO `Queue<T>`
//! - [`task_queue`] - `TaskQueue` with next-pending/next-completed lookups
//!   and status-partitioned listings
//! - [`locale`] - English and Portuguese labels and messages
//! - [`config`] - shell configuration loading
//! - [`shell`] - interactive menu loop and rendering
//! - [`error`] - error types
//!
//! # Example
//!
//! ```rust
//! use taskq::{Priority, Task, TaskQueue};
//!
//! let mut queue = TaskQueue::new();
//! queue.enqueue(Task::new("Buy milk", Priority::Medium))?;
//! queue.enqueue(Task::new("File taxes", Priority::Critical))?;
//!
//! let next = queue.next_pending().unwrap();
//! assert_eq!(next.to_string(), "Medium - Buy milk - Pending");
//! # Ok::<(), taskq::TaskqError>(())
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod queue;
pub mod shell;
pub mod task;
pub mod task_queue;

// Re-export commonly used types
pub use error::{Result, TaskqError};

pub use config::ShellConfig;
pub use locale::{Locale, Messages};
pub use queue::Queue;
pub use task::{ParsePriorityError, Priority, Status, Task};
pub use task_queue::{Listing, Section, TaskQueue, TaskRecord};
