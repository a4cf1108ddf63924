//! Error types for SecureBank
//!
//! This module defines every error a caller can observe. The core errors
//! (`AuthError`, `TransactionError`) are user-correctable and carry the short
//! display strings shown on screen. `BankError` wraps them together with the
//! session and driver failures.
//!
//! # Error Categories
//!
//! - **Authentication**: missing credentials, malformed PIN, unknown pair
//! - **Transaction**: invalid amount, insufficient funds
//! - **Session**: acting in the wrong login state
//! - **Driver**: I/O failures, unparseable script rows or command lines

use thiserror::Error;

/// Login failures reported by the session authenticator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The account number or the PIN was empty
    #[error("Please enter both account number and PIN")]
    MissingCredentials,

    /// The PIN was not exactly four digits
    ///
    /// Checked before the directory is consulted.
    #[error("PIN must be 4 digits")]
    InvalidPinFormat,

    /// Unknown account number or mismatched PIN
    ///
    /// The two cases are indistinguishable to the caller.
    #[error("Invalid account number or PIN")]
    AuthenticationFailed,
}

/// Rejections from `Ledger::apply`
///
/// Both leave the balance and the log untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Amount was non-numeric, zero, negative or not representable
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// Operations attempted in the wrong login state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please log in first")]
    NotLoggedIn,

    #[error("Already logged in; log out first")]
    AlreadyLoggedIn,

    /// A kiosk action arrived while the ATM screen was not open
    #[error("ATM mode is not active")]
    KioskClosed,

    /// A dashboard action arrived while the ATM screen was open
    #[error("Exit ATM mode first")]
    KioskActive,

    /// The kiosk action does not exist on the current screen
    #[error("'{action}' is not available on the {screen} screen")]
    UnavailableAction {
        action: &'static str,
        screen: &'static str,
    },
}

/// Crate-level error
///
/// Everything a driver can encounter while executing a command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A script row or command line could not be understood
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// The command word is not part of the vocabulary
    #[error("Unknown command '{command}'")]
    UnknownCommand {
        /// The unrecognised word
        command: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return BankError::Io {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        BankError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(command: &str) -> Self {
        BankError::UnknownCommand {
            command: command.to_string(),
        }
    }

    /// Whether the error is an expected, user-correctable condition
    ///
    /// Drivers log the rest at `warn`.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BankError::Auth(_) | BankError::Transaction(_) | BankError::Session(_)
        )
    }
}
