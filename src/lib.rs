//! SecureBank
//! # Overview
//!
//! A terminal banking session over a fixed set of demo accounts: log in with
//! an account number and PIN, deposit and withdraw, review the history and
//! use an ATM-style screen flow.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, Session, errors)
//! - [`config`] - Demo fixtures: credential directory, ledger seed, quick amounts
//! - [`core`] - Business logic components:
//!   - [`core::authenticator`] - Account number / PIN validation
//!   - [`core::ledger`] - Balance and transaction log
//!   - [`core::bank`] - Login/logout state machine
//! - [`ui`] - Text rendering and the ATM kiosk screen flow
//! - [`driver`] - Commands, the console that executes them, and input drivers
//! - [`io`] - CSV scripts and statement export
//! - [`cli`] - CLI arguments parsing
//!
//! # Session Lifecycle
//!
//! - **Login**: seeds a fresh ledger (opening balance and five seed
//!   transactions) for the authenticated account
//! - **Deposit / Withdrawal**: validated and applied by the ledger, newest
//!   transaction first
//! - **Logout**: drops the ledger; nothing is persisted

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod io;
pub mod types;
pub mod ui;

pub use config::BankConfig;
pub use core::{Bank, Ledger, LedgerSummary, SessionAuthenticator};
pub use driver::{Command, Console, Outcome};
pub use io::write_statement_csv;
pub use types::{
    AccountNumber, AuthError, BankError, Session, SessionError, Transaction, TransactionError,
    TransactionId, TransactionKind,
};
