//! The task entity and its two label enums.
//!
//! - [`Priority`] - descriptive urgency label, never used for ordering
//! - [`Status`] - `Pending` or `Completed`, nothing in between
//! - [`Task`] - description + priority + status
//!
//! # Example
//!
//! ```rust
//! use taskq::{Locale, Priority, Status, Task};
//!
//! let mut task = Task::new("Buy milk", Priority::Medium);
//! assert_eq!(task.status(), Status::Pending);
//!
//! task.complete();
//! assert_eq!(task.to_string(), "Medium - Buy milk - Completed");
//! assert_eq!(task.render(Locale::Portuguese), "Média - Buy milk - Completa");
//!
//! let priority: Priority = "muito alta".parse().unwrap();
//! assert_eq!(priority, Priority::Critical);
//! ```

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Priority
// ============================================================================

/// Urgency label attached to a task.
///
/// The variants are declared lowest to highest for presentation only; the
/// queue never sorts or compares by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Lowest,
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities in menu order.
    pub const ALL: [Priority; 5] = [
        Priority::Lowest,
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Human-readable label in the given locale.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Priority::Lowest) => "Lowest",
            (Locale::English, Priority::Low) => "Low",
            (Locale::English, Priority::Medium) => "Medium",
            (Locale::English, Priority::High) => "High",
            (Locale::English, Priority::Critical) => "Critical",
            (Locale::Portuguese, Priority::Lowest) => "Muito Baixa",
            (Locale::Portuguese, Priority::Low) => "Baixa",
            (Locale::Portuguese, Priority::Medium) => "Média",
            (Locale::Portuguese, Priority::High) => "Alta",
            (Locale::Portuguese, Priority::Critical) => "Muito Alta",
        }
    }

    /// Comma-separated list of labels, used in the priority prompt.
    #[must_use]
    pub fn choices(locale: Locale) -> String {
        Self::ALL
            .iter()
            .map(|p| p.label(locale))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Locale::English))
    }
}

/// Error returned when parsing an invalid priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    input: String,
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority: '{}'", self.input)
    }
}

impl std::error::Error for ParsePriorityError {}

/// Lowercase and collapse internal whitespace so "  Muito   ALTA " matches.
fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "1" | "lowest" | "muito baixa" => Ok(Priority::Lowest),
            "2" | "low" | "baixa" => Ok(Priority::Low),
            "3" | "medium" | "média" | "media" => Ok(Priority::Medium),
            "4" | "high" | "alta" => Ok(Priority::High),
            "5" | "critical" | "muito alta" => Ok(Priority::Critical),
            _ => Err(ParsePriorityError {
                input: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Status
// ============================================================================

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    /// Human-readable label in the given locale.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Status::Pending) => "Pending",
            (Locale::English, Status::Completed) => "Completed",
            (Locale::Portuguese, Status::Pending) => "Pendente",
            (Locale::Portuguese, Status::Completed) => "Completa",
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self == Status::Pending
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        self == Status::Completed
    }

    /// Check if this status can move to `target`.
    ///
    /// Completion is one-way: a completed task never returns to pending.
    ///
    /// ```
    /// use taskq::Status;
    ///
    /// assert!(Status::Pending.can_transition_to(Status::Completed));
    /// assert!(!Status::Completed.can_transition_to(Status::Pending));
    /// ```
    #[must_use]
    pub fn can_transition_to(self, target: Status) -> bool {
        !matches!((self, target), (Status::Completed, Status::Pending))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Locale::English))
    }
}

// ============================================================================
// Task
// ============================================================================

/// A unit of work owned by a [`TaskQueue`](crate::TaskQueue).
///
/// Setters replace a field wholesale and do not validate; input checks such
/// as a non-empty description belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    priority: Priority,
    status: Status,
}

impl Task {
    /// Create a new pending task.
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
            status: Status::Pending,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replace the status. Completion is one-way.
    pub fn set_status(&mut self, status: Status) {
        debug_assert!(
            self.status.can_transition_to(status),
            "task {:?} cannot go from {:?} to {:?}",
            self.description,
            self.status,
            status
        );
        self.status = status;
    }

    /// Mark this task completed.
    pub fn complete(&mut self) {
        self.set_status(Status::Completed);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Render as `"<priority> - <description> - <status>"` in `locale`.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        format!(
            "{} - {} - {}",
            self.priority.label(locale),
            self.description,
            self.status.label(locale)
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Locale::English))
    }
}
