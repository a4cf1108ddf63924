//! CSV session scripts
//!
//! A script is a CSV file with the header `action,account,pin,amount,description`.
//! Each row is one user action:
//!
//! ```text
//! action,account,pin,amount,description
//! login,123456789,1234,,
//! deposit,,,100.00,Paycheck
//! atm-open,,,,
//! atm-withdraw,,,,
//! atm-quick,,,40,
//! atm-exit,,,,
//! logout,,,,
//! ```
//!
//! ATM actions use an `atm-` prefix. Trailing empty columns may be omitted.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from
//!   `ScriptReader::open()`
//! - Rows that cannot be turned into a command are yielded as `Err` items
//!   carrying the line number, and iteration continues
//! - A header or I/O failure while iterating is yielded once, then the
//!   iterator ends

use crate::driver::command::{Command, CommandFields};
use crate::types::BankError;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One script row as it appears in the file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ScriptRecord {
    pub action: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

/// Convert a script row into a command
///
/// `atm-<sub>` is split into the `atm` verb and its sub-verb; a bare `atm`
/// opens the kiosk.
pub fn convert_script_record(record: &ScriptRecord) -> Result<Command, BankError> {
    let action = record.action.trim();
    let (verb, sub) = match action.split_once('-') {
        Some((verb, sub)) => (verb, Some(sub)),
        None => (action, None),
    };

    if sub.is_some() && !verb.eq_ignore_ascii_case("atm") {
        return Err(BankError::unknown_command(action));
    }

    Command::from_fields(
        verb,
        sub,
        CommandFields {
            account: &record.account,
            pin: &record.pin,
            amount: &record.amount,
            description: &record.description,
        },
    )
}

/// Streaming reader over script commands
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: csv::Reader<R>,
    headers: Option<StringRecord>,
    record: StringRecord,
    done: bool,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be opened or read
    /// - `Parse` if the header line is not valid UTF-8
    pub fn open(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| BankError::Io {
            message: format!("Failed to open script '{}': {}", path.display(), e),
        })?;
        let mut reader = Self::from_reader(file);
        reader.headers()?;
        Ok(reader)
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any reader
    ///
    /// The CSV reader trims whitespace from every field and accepts rows
    /// with fewer columns than the header.
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);

        ScriptReader {
            reader,
            headers: None,
            record: StringRecord::new(),
            done: false,
        }
    }

    fn headers(&mut self) -> Result<StringRecord, BankError> {
        if let Some(headers) = &self.headers {
            return Ok(headers.clone());
        }
        let headers = self.reader.headers()?.clone();
        self.headers = Some(headers.clone());
        Ok(headers)
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Command, BankError>;

    /// Read the next row and convert it
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - a usable command
    /// * `Some(Err(BankError))` - a malformed row, with its line number
    /// * `None` - end of file
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let headers = match self.headers() {
            Ok(headers) => headers,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());
                let converted = self
                    .record
                    .deserialize::<ScriptRecord>(Some(&headers))
                    .map_err(|e| BankError::parse(line, e.to_string()))
                    .and_then(|record| {
                        convert_script_record(&record).map_err(|e| match e {
                            BankError::Parse { message, .. } => BankError::parse(line, message),
                            other => BankError::parse(line, other.to_string()),
                        })
                    });
                Some(converted)
            }
            Err(e) => {
                // A failing reader fails the same way on every call
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    self.done = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}
