//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account number and session types
//! - `transaction`: Transaction kinds, records and amount parsing
//! - `error`: Error types for SecureBank

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{AccountNumber, Session};
pub use error::{AuthError, BankError, SessionError, TransactionError};
pub use transaction::{parse_amount, Transaction, TransactionId, TransactionKind};
