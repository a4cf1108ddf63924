//! Core business logic module
//!
//! This module contains the account ledger state machine:
//! - `traits` - Credential store and clock abstractions
//! - `authenticator` - Account number / PIN validation
//! - `ledger` - Balance and transaction log, the sole mutator of both
//! - `summary` - Aggregate figures over a transaction log
//! - `bank` - Login/logout state machine gating ledger access

pub mod authenticator;
pub mod bank;
pub mod ledger;
pub mod summary;
pub mod traits;

pub use authenticator::SessionAuthenticator;
pub use bank::{Bank, SessionState};
pub use ledger::Ledger;
pub use summary::LedgerSummary;
pub use traits::{Clock, CredentialStore, FixedClock, SystemClock};
