//! Transaction-related types for SecureBank
//!
//! This module defines the transaction kinds, the immutable transaction
//! record kept in a ledger's log, and amount parsing for user-typed input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
///
/// Assigned monotonically by the ledger; never reused within a session.
pub type TransactionId = u64;

/// Kinds of balance-changing events a ledger accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Credit funds to the account
    ///
    /// Increases the balance unconditionally.
    Deposit,

    /// Debit funds from the account
    ///
    /// Requires the amount to be covered by the current balance.
    Withdrawal,
}

impl TransactionKind {
    /// Description recorded when the caller leaves it empty
    pub fn default_description(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Cash deposit",
            TransactionKind::Withdrawal => "ATM withdrawal",
        }
    }

    /// Description used for transactions entered at the ATM kiosk
    pub fn kiosk_description(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "ATM deposit",
            TransactionKind::Withdrawal => "ATM withdrawal",
        }
    }

    /// Capitalized label used in history tables
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    /// Accepts both `withdrawal` and the shorter `withdraw`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" | "withdraw" => Ok(TransactionKind::Withdrawal),
            other => Err(format!("Invalid transaction kind '{}'", other)),
        }
    }
}

/// A single recorded balance change
///
/// Fields are private so a transaction cannot be altered after the ledger
/// has created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Decimal,
    date: NaiveDate,
    description: String,
}

impl Transaction {
    /// Build a transaction record
    ///
    /// Only the ledger and seed fixtures create transactions; the amount is
    /// expected to be strictly positive.
    pub(crate) fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Transaction {
            id,
            kind,
            amount,
            date,
            description: description.into(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Unsigned amount in currency units
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount as it affects the balance: negative for withdrawals
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Parse a user-typed amount
///
/// Surrounding whitespace is ignored. Plain decimal notation is tried first,
/// then scientific notation (`1e2`). Returns `None` for anything that is not
/// a finite number; positivity is checked by the ledger.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
