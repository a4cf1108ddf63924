//! Driver module
//!
//! Turns user input into commands and commands into output. A driver owns
//! the input side (a script file or a line-oriented terminal), the `Console`
//! executes each command, and the shared `report` helper renders the result.
//!
//! # Components
//!
//! - `command` - the command vocabulary and line parsing
//! - `console` - command execution against the bank
//! - `script` - CSV script driver
//! - `interactive` - line-by-line driver
//!
//! Drivers are selected at runtime through `create_driver`, the same way
//! every presentation surface reaches the core through one `Console`.

pub mod command;
pub mod console;
pub mod interactive;
pub mod script;

pub use command::{AtmAction, Command};
pub use console::{Console, Outcome};
pub use interactive::InteractiveDriver;
pub use script::ScriptDriver;

use crate::config::BankConfig;
use crate::core::{Clock, FixedClock, SystemClock};
use crate::io::write_statement_csv;
use crate::types::BankError;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// A source of commands for a console
pub trait SessionDriver {
    /// Feed commands to `console` until the input is exhausted or the user quits
    ///
    /// # Arguments
    ///
    /// * `console` - The console executing the commands
    /// * `output` - Where rendered outcomes and error lines go
    ///
    /// # Errors
    ///
    /// Only fatal failures (unreadable input, unwritable output). Errors from
    /// individual commands are written to `output` and the driver carries on.
    fn drive(&mut self, console: &mut Console, output: &mut dyn Write) -> Result<(), BankError>;
}

/// Options for one run of the program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Script to execute; the interactive driver runs when absent
    pub script: Option<PathBuf>,
    /// Statement CSV written for the session active at the end of the run
    pub statement: Option<PathBuf>,
    /// Fixed date for new transactions
    pub today: Option<NaiveDate>,
}

impl RunSettings {
    pub fn clock(&self) -> Rc<dyn Clock> {
        match self.today {
            Some(date) => Rc::new(FixedClock(date)),
            None => Rc::new(SystemClock),
        }
    }
}

/// Create the driver selected by the run settings
///
/// # Returns
///
/// A `ScriptDriver` when a script is given, otherwise an `InteractiveDriver`
/// on stdin that prompts only when stdin is a terminal.
pub fn create_driver(settings: &RunSettings) -> Box<dyn SessionDriver> {
    match &settings.script {
        Some(path) => Box::new(ScriptDriver::new(path.clone())),
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Box::new(InteractiveDriver::new(stdin.lock(), prompt))
        }
    }
}

/// Run a complete session
///
/// Builds a console from `config`, drives it, then writes the statement if
/// one was requested.
///
/// # Errors
///
/// Fatal driver errors and statement I/O errors.
pub fn run(
    settings: &RunSettings,
    config: &BankConfig,
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut console = Console::new(config, settings.clock());
    let mut driver = create_driver(settings);

    driver.drive(&mut console, output)?;
    output.flush()?;

    if let Some(path) = &settings.statement {
        match console.ledger() {
            Some(ledger) => {
                let file = File::create(path).map_err(|e| BankError::Io {
                    message: format!("Failed to create statement '{}': {}", path.display(), e),
                })?;
                let mut writer = BufWriter::new(file);
                write_statement_csv(ledger.transaction_log(), &mut writer)?;
                tracing::debug!(statement = %path.display(), rows = ledger.len(), "statement written");
            }
            None => {
                tracing::warn!(statement = %path.display(), "no active session at end of run; statement not written");
            }
        }
    }

    Ok(())
}

/// Write a command result to the output
///
/// Successful outcomes are printed as rendered; errors get an `error: `
/// prefix. Errors that are not user-correctable are also logged.
///
/// # Returns
///
/// `true` when the outcome asks the driver to stop.
pub(crate) fn report(
    result: Result<Outcome, BankError>,
    output: &mut dyn Write,
) -> Result<bool, BankError> {
    match result {
        Ok(outcome) => {
            writeln!(output, "{}", outcome)?;
            Ok(outcome == Outcome::Quit)
        }
        Err(e) => {
            if !e.is_user_error() {
                tracing::warn!(error = %e, "command failed");
            }
            writeln!(output, "error: {}", e)?;
            Ok(false)
        }
    }
}
