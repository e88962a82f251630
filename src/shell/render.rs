//! Text rendering for the shell: menu, task tables, notices.
//!
//! Every function returns a `String`; the shell decides where it goes.
//! Colors are applied after padding so table borders stay aligned.

use crate::locale::{Locale, Messages};
use crate::shell::menu::MenuChoice;
use crate::task::{Status, Task};
use crate::task_queue::{Listing, Section, TaskRecord};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Formats shell output for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    locale: Locale,
    color: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(locale: Locale, color: bool) -> Self {
        Self { locale, color }
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    fn paint(&self, text: &str, status: Option<Status>) -> String {
        if !self.color {
            return text.to_string();
        }
        match status {
            Some(Status::Pending) => text.yellow().to_string(),
            Some(Status::Completed) => text.green().to_string(),
            None => text.to_string(),
        }
    }

    // ------------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn success(&self, message: &str) -> String {
        if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    #[must_use]
    pub fn warning(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    #[must_use]
    pub fn error(&self, message: &str) -> String {
        let prefix = self.messages().error_prefix;
        if self.color {
            format!("{} {}", prefix.red().bold(), message)
        } else {
            format!("{prefix} {message}")
        }
    }

    // ------------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------------

    /// The numbered main menu framed by title rules.
    #[must_use]
    pub fn menu(&self) -> String {
        let messages = self.messages();
        let width = messages
            .menu_options
            .iter()
            .map(|o| o.chars().count())
            .max()
            .unwrap_or(0);
        // "- " + "NN. " + option + " -"
        let line_width = width + 8;
        let rule = format!("{:-^line_width$}", format!(" {} ", messages.menu_title));

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        for choice in MenuChoice::ALL {
            let number = format!("{}.", choice.number());
            out.push_str(&format!(
                "- {number:<4}{:<width$} -\n",
                choice.label(self.locale)
            ));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }

    // ------------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------------

    /// Single-line form used by "show first" and "show next".
    #[must_use]
    pub fn task_line(&self, task: &Task) -> String {
        let line = task.render(self.locale);
        self.paint(&line, Some(task.status()))
    }

    /// A two-column table with one row per field.
    #[must_use]
    pub fn record(&self, record: &TaskRecord<'_>) -> String {
        let messages = self.messages();
        let rows = [
            (messages.column_description, record.description, None),
            (
                messages.column_priority,
                record.priority.label(self.locale),
                None,
            ),
            (
                messages.column_status,
                record.status.label(self.locale),
                Some(record.status),
            ),
        ];

        let key_width = rows.iter().map(|r| r.0.width()).max().unwrap_or(0);
        let value_width = rows.iter().map(|r| r.1.width()).max().unwrap_or(0);

        let border = |left: char, mid: char, right: char| {
            format!(
                "{left}{}{mid}{}{right}\n",
                "─".repeat(key_width + 2),
                "─".repeat(value_width + 2)
            )
        };

        let mut out = border('┌', '┬', '┐');
        for (key, value, status) in rows {
            out.push_str(&format!(
                "│ {} │ {} │\n",
                pad(key, key_width),
                self.paint(&pad(value, value_width), status)
            ));
        }
        out.push_str(&border('└', '┴', '┘'));
        out
    }

    /// Records of one status, or the matching "nothing to show" notice.
    #[must_use]
    pub fn section(&self, section: &Section<'_>) -> String {
        match section {
            Section::NothingToShow(status) => {
                let notice = match status {
                    Status::Pending => self.messages().no_pending,
                    Status::Completed => self.messages().no_completed,
                };
                format!("{}\n", self.warning(notice))
            }
            Section::Records(records) => {
                let status = records.first().map_or(Status::Pending, |r| r.status);
                let heading = match status {
                    Status::Pending => self.messages().pending_heading,
                    Status::Completed => self.messages().completed_heading,
                };
                let heading = format!("{heading} ({})", records.len());

                let mut out = if self.color {
                    format!("{}\n", heading.bold())
                } else {
                    format!("{heading}\n")
                };
                for record in records {
                    out.push_str(&self.record(record));
                }
                out
            }
        }
    }

    /// The full listing: pending section, then completed section.
    #[must_use]
    pub fn listing(&self, listing: &Listing<'_>) -> String {
        match listing {
            Listing::QueueEmpty => format!("{}\n", self.warning(self.messages().queue_empty)),
            Listing::Partitioned { pending, completed } => {
                format!("{}{}", self.section(pending), self.section(completed))
            }
        }
    }
}

/// Left-align `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
