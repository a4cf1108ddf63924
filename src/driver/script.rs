//! Script driver
//!
//! Runs a CSV session script against a console. Each row produces one
//! rendered block on the output; rows that fail produce an `error: ` line
//! and processing continues. A `quit` row ends the script early.

use crate::driver::console::Console;
use crate::driver::{report, SessionDriver};
use crate::io::ScriptReader;
use crate::types::BankError;
use std::io::Write;
use std::path::PathBuf;

/// Drives a console from a script file
#[derive(Debug, Clone)]
pub struct ScriptDriver {
    path: PathBuf,
}

impl ScriptDriver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScriptDriver { path: path.into() }
    }
}

impl SessionDriver for ScriptDriver {
    /// Execute every script row in order
    ///
    /// # Errors
    ///
    /// Only fatal I/O errors: the script cannot be opened or the output
    /// cannot be written. Row-level failures are reported inline.
    fn drive(&mut self, console: &mut Console, output: &mut dyn Write) -> Result<(), BankError> {
        let reader = ScriptReader::open(&self.path)?;
        let mut rows = 0usize;

        for item in reader {
            rows += 1;
            let result = item.and_then(|command| console.execute(command));
            if report(result, output)? {
                break;
            }
        }

        tracing::debug!(rows, script = %self.path.display(), "script finished");
        Ok(())
    }
}
