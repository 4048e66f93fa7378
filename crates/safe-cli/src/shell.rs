//! # Dispatch Loop
//!
//! [`Shell`] takes one line at a time: built-ins first (`help`, `exit`,
//! `quit`), everything else through the command registry and onto the
//! operator. Nothing a line does can stop the loop except `exit`/`quit`.
//!
//! | Outcome | Shown as |
//! |---------|----------|
//! | classified operator failure | one red line from the [`TerminalSink`] |
//! | resolve error | `Error: ...` |
//! | unclassified failure | `Error: ...`, logged at `error` |
//!
//! ```
//! use safe_cli::{Flow, Shell};
//! use safe_cli_command::default_registry;
//! use safe_cli_core::Config;
//! use safe_cli_operator::OfflineOperator;
//!
//! let safe = safe_cli_core::validate("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
//! let operator = OfflineOperator::new(safe, &Config::default(), Vec::new());
//! let mut shell = Shell::new(default_registry(), operator, safe);
//! let mut messages = Vec::new();
//!
//! assert_eq!(shell.execute_line("get_nonce", &mut messages).unwrap(), Flow::Continue);
//! assert_eq!(shell.execute_line("quit", &mut messages).unwrap(), Flow::Exit);
//! assert_eq!(String::from_utf8_lossy(shell.operator().output()), "0\n");
//! ```

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use safe_cli_command::{ClassifiedMessage, CommandRegistry, MessageSink, ResolveError};
use safe_cli_core::{Address, SafeOperator, UnclassifiedError};

use crate::logging::new_correlation_id;

const HELP: &str = "help";
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Print [`Shell::help`], then read the next line.
    Help,
    /// Leave the loop.
    Exit,
}

/// A line that could not be run to completion.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The line did not resolve to a command.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The operator failed outside the classified set.
    #[error(transparent)]
    Unclassified(#[from] UnclassifiedError),
}

/// The terminal could not be driven.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Line editor failure other than Ctrl-C / Ctrl-D.
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

/// Prints classified messages as single red lines on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink;

impl MessageSink for TerminalSink {
    fn emit(&mut self, message: ClassifiedMessage) {
        println!("{}", message.text().red());
    }
}

/// Line dispatcher bound to one Safe and one operator.
#[derive(Debug)]
pub struct Shell<O> {
    registry: CommandRegistry,
    operator: O,
    safe: Address,
}

impl<O: SafeOperator> Shell<O> {
    /// Create a shell for `safe`.
    pub const fn new(registry: CommandRegistry, operator: O, safe: Address) -> Self {
        Self {
            registry,
            operator,
            safe,
        }
    }

    /// Borrow the operator.
    pub const fn operator(&self) -> &O {
        &self.operator
    }

    /// The registry lines are resolved against.
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Prompt showing the Safe address.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} ", self.safe.to_string().blue().bold(), ">".red().bold())
    }

    /// Registered commands with their argument grammar, plus the built-ins.
    #[must_use]
    pub fn help(&self) -> String {
        let specs = self.registry.specs();
        let width = specs
            .iter()
            .map(|spec| spec.usage().len())
            .max()
            .unwrap_or(0);

        let mut text = String::from("Commands:\n");
        for spec in specs {
            let _ = writeln!(text, "  {:width$}  {}", spec.usage(), spec.summary());
        }
        let _ = writeln!(text, "  {HELP:width$}  Show this list");
        let _ = writeln!(text, "  {:width$}  Leave the console", EXIT_WORDS.join("|"));
        text
    }

    /// Run one line.
    ///
    /// Blank lines are ignored. Classified operator failures go to `sink` and
    /// count as handled.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Resolve`] if the line does not resolve and
    /// [`LineError::Unclassified`] if the operator fails outside the
    /// classified set.
    pub fn execute_line(
        &mut self,
        line: &str,
        sink: &mut dyn MessageSink,
    ) -> Result<Flow, LineError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }
        if trimmed == HELP {
            return Ok(Flow::Help);
        }
        if EXIT_WORDS.contains(&trimmed) {
            return Ok(Flow::Exit);
        }

        let parsed = self.registry.resolve(trimmed)?;
        let span = crate::with_correlation_id!(new_correlation_id(), "command", name = parsed.name());
        let _entered = span.enter();

        parsed
            .invoke(&mut self.operator, sink)
            .map_err(|error| {
                tracing::error!(%error, "unclassified operator failure");
                error
            })?;
        Ok(Flow::Continue)
    }

    /// Read lines from the terminal until `exit`, `quit` or Ctrl-D.
    ///
    /// Ctrl-C abandons the current line. History is loaded from and saved to
    /// `history` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the terminal cannot be set up or read.
    pub fn run(&mut self, history: Option<&Path>) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = history {
            if let Err(error) = editor.load_history(path) {
                tracing::debug!(path = %path.display(), %error, "no history loaded");
            }
        }

        let mut sink = TerminalSink;
        loop {
            let line = match editor.readline(&self.prompt()) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(error) => return Err(error.into()),
            };
            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }

            match self.execute_line(&line, &mut sink) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Help) => print!("{}", self.help()),
                Ok(Flow::Exit) => break,
                Err(error) => eprintln!("{} {error}", "Error:".red()),
            }
        }

        if let Some(path) = history {
            save_history(&mut editor, path);
        }
        Ok(())
    }
}

fn save_history(editor: &mut DefaultEditor, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(error) = std::fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), %error, "cannot create history directory");
            return;
        }
    }
    if let Err(error) = editor.save_history(path) {
        tracing::warn!(path = %path.display(), %error, "cannot save history");
    }
}
