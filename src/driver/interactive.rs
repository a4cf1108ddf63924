//! Interactive driver
//!
//! Reads one command per line from a `BufRead` and writes results to the
//! output. With prompting enabled each line is preceded by `> `, which is
//! what a terminal user sees; piped input usually runs without it.

use crate::driver::command::Command;
use crate::driver::console::Console;
use crate::driver::{report, SessionDriver};
use crate::types::BankError;
use std::io::{BufRead, Write};

pub const BANNER: &str = "SecureBank - type 'help' for commands";

#[derive(Debug)]
pub struct InteractiveDriver<R> {
    input: R,
    prompt: bool,
}

impl<R: BufRead> InteractiveDriver<R> {
    pub fn new(input: R, prompt: bool) -> Self {
        InteractiveDriver { input, prompt }
    }
}

impl<R: BufRead> SessionDriver for InteractiveDriver<R> {
    /// Read and execute lines until `quit` or end of input
    ///
    /// # Errors
    ///
    /// `Io` if reading the input or writing the output fails.
    fn drive(&mut self, console: &mut Console, output: &mut dyn Write) -> Result<(), BankError> {
        writeln!(output, "{}", BANNER)?;
        writeln!(output, "{}", console.login_hint())?;

        let mut line = String::new();
        loop {
            if self.prompt {
                write!(output, "> ")?;
                output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => Ok(command),
                Ok(None) => continue,
                Err(e) => Err(e),
            };

            let result = command.and_then(|command| console.execute(command));
            if report(result, output)? {
                break;
            }
        }

        Ok(())
    }
}
