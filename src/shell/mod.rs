//! Interactive menu loop.
//!
//! [`Shell`] reads menu choices from any [`BufRead`] and writes to any
//! [`Write`], so sessions can be scripted in tests. It owns the
//! [`TaskQueue`] for the whole session and is the only layer that validates
//! input or prints.
//!
//! # Example
//!
//! ```rust
//! use taskq::{ShellConfig, shell::Shell};
//!
//! let config = ShellConfig::default()
//!     .with_color(false)
//!     .with_clear_screen(false)
//!     .with_pause_after_action(false);
//!
//! let input = "1\nBuy milk\nmedium\n0\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(input, &mut output, config);
//! shell.run()?;
//! assert_eq!(shell.queue().len(), 1);
//! # Ok::<(), taskq::TaskqError>(())
//! ```

pub mod menu;
pub mod render;

pub use menu::{MenuChoice, ParseMenuChoiceError};
pub use render::Renderer;

use crate::config::ShellConfig;
use crate::error::{Result, TaskqError};
use crate::task::{Priority, Task};
use crate::task_queue::TaskQueue;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// ANSI sequence: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Whether the session continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A single interactive session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    queue: TaskQueue,
    config: ShellConfig,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session with an empty queue.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        let renderer = Renderer::new(config.locale, config.color);
        Self {
            input,
            output,
            queue: TaskQueue::new(),
            config,
            renderer,
        }
    }

    /// Start from an existing queue instead of an empty one.
    #[must_use]
    pub fn with_queue(mut self, queue: TaskQueue) -> Self {
        self.queue = queue;
        self
    }

    #[must_use]
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    /// Consume the shell and return the queue.
    pub fn into_queue(self) -> TaskQueue {
        self.queue
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`TaskqError::Io`] if the terminal cannot be read or written,
    /// or any other fatal error. Allocation failures are reported to the
    /// user and do not end the session.
    pub fn run(&mut self) -> Result<()> {
        debug!("Session started (locale: {})", self.config.locale);

        loop {
            if self.config.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }

            let menu = self.renderer.menu();
            write!(self.output, "{menu}")?;
            let prompt = self.config.locale.messages().menu_prompt;
            let Some(line) = self.prompt(prompt)? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.execute(choice)?,
                Err(e) => {
                    debug!("{e}");
                    let notice = self.renderer.warning(self.messages().invalid_option);
                    writeln!(self.output, "{notice}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }

            if self.config.pause_after_action {
                let press_enter = self.messages().press_enter;
                if self.prompt(press_enter)?.is_none() {
                    break;
                }
            }
        }

        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        self.output.flush()?;

        let (pending, completed) = self.queue.counts();
        debug!(
            "Session ended with {} pending and {} completed tasks",
            pending, completed
        );
        Ok(())
    }

    /// Perform one menu action.
    ///
    /// # Errors
    ///
    /// Only fatal errors are returned; see [`run`](Self::run).
    pub fn execute(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!("Menu action: {:?}", choice);
        let messages = self.messages();

        match choice {
            MenuChoice::Exit => return Ok(Flow::Exit),

            MenuChoice::AddTask => {
                let Some(task) = self.ask_task()? else {
                    return Ok(Flow::Exit);
                };
                match self.queue.enqueue(task) {
                    Ok(()) => self.say_success()?,
                    Err(e) => self.report("add task", e)?,
                }
            }

            MenuChoice::CompleteNext => match self.queue.complete_next() {
                Some(_) => self.say_success()?,
                None => self.say_warning(messages.nothing_to_complete)?,
            },

            MenuChoice::RemoveFirst => match self.queue.dequeue() {
                Some(_) => self.say_success()?,
                None => self.say_warning(messages.nothing_to_remove)?,
            },

            MenuChoice::ShowFirst => {
                let line = self.queue.peek().map(|t| self.renderer.task_line(t));
                self.show(line)?;
            }

            MenuChoice::ShowNext => {
                let line = self.queue.next_pending().map(|t| self.renderer.task_line(t));
                self.show(line)?;
            }

            MenuChoice::ListAll => {
                let text = self.renderer.listing(&self.queue.list());
                write!(self.output, "{text}")?;
            }

            MenuChoice::ListPending => {
                let text = self.renderer.section(&self.queue.list_pending());
                write!(self.output, "{text}")?;
            }

            MenuChoice::ListCompleted => {
                let text = self.renderer.section(&self.queue.list_completed());
                write!(self.output, "{text}")?;
            }

            MenuChoice::Reverse => match self.queue.reverse() {
                Ok(()) => self.say_success()?,
                Err(e) => self.report("reverse queue", e)?,
            },

            MenuChoice::Clear => match self.queue.clear() {
                Ok(()) => self.say_success()?,
                Err(e) => self.report("clear queue", e)?,
            },
        }

        Ok(Flow::Continue)
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Print `text` and read one line without its newline; `None` at EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Bytes, not read_line: one line of bad UTF-8 must not end the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a description and priority, re-asking until both are valid.
    fn ask_task(&mut self) -> Result<Option<Task>> {
        let messages = self.messages();

        let description = loop {
            let Some(line) = self.prompt(messages.description_prompt)? else {
                return Ok(None);
            };
            let line = line.trim();
            if !line.is_empty() {
                break line.to_string();
            }
            self.say_warning(messages.description_required)?;
        };

        let question = format!(
            "{} ({}): ",
            messages.priority_prompt,
            Priority::choices(self.config.locale)
        );
        let priority = loop {
            let Some(line) = self.prompt(&question)? else {
                return Ok(None);
            };
            match line.parse::<Priority>() {
                Ok(priority) => break priority,
                Err(e) => {
                    debug!("{e}");
                    self.say_warning(messages.invalid_priority)?;
                }
            }
        };

        Ok(Some(Task::new(description, priority)))
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    fn messages(&self) -> &'static crate::locale::Messages {
        self.config.locale.messages()
    }

    fn show(&mut self, line: Option<String>) -> Result<()> {
        match line {
            Some(line) => {
                writeln!(self.output, "{line}")?;
                self.say_success()
            }
            None => self.say_warning(self.messages().nothing_to_show),
        }
    }

    fn say_success(&mut self) -> Result<()> {
        let text = self.renderer.success(self.messages().success);
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn say_warning(&mut self, message: &str) -> Result<()> {
        let text = self.renderer.warning(message);
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn say_error(&mut self, message: &str) -> Result<()> {
        let text = self.renderer.error(message);
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print a failed action and keep going, unless the error is fatal.
    fn report(&mut self, action: &str, err: TaskqError) -> Result<()> {
        if err.is_fatal() {
            return Err(err);
        }
        warn!("Failed to {}: {}", action, err);
        self.say_error(&err.to_string())
    }
}
