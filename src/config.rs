//! Bank configuration
//!
//! Fixture data the core is initialized with: the credential directory, the
//! ledger seed every session starts from, and the quick amounts offered by
//! the dashboard forms and the ATM kiosk. `BankConfig::default()` holds the
//! demo fixtures; nothing here is ever read from a file.

use crate::types::{AccountNumber, Transaction, TransactionId, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Fixed table of account number → expected PIN
///
/// PINs are stored and compared in plaintext. That is acceptable only for a
/// demo directory and must not be copied into anything real.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDirectory {
    entries: HashMap<AccountNumber, String>,
}

impl CredentialDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry, builder style
    pub fn with_account(mut self, account: impl Into<String>, pin: impl Into<String>) -> Self {
        self.insert(account, pin);
        self
    }

    pub fn insert(&mut self, account: impl Into<String>, pin: impl Into<String>) {
        self.entries.insert(AccountNumber::new(account), pin.into());
    }

    pub fn pin_for(&self, account: &str) -> Option<&str> {
        self.entries.get(account).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Account / PIN pairs sorted by account, for the login hint
    pub fn entries(&self) -> Vec<(&AccountNumber, &str)> {
        let mut entries: Vec<(&AccountNumber, &str)> = self
            .entries
            .iter()
            .map(|(account, pin)| (account, pin.as_str()))
            .collect();
        entries.sort();
        entries
    }

    /// The three demo accounts shown on the login screen
    pub fn demo() -> Self {
        CredentialDirectory::new()
            .with_account("123456789", "1234")
            .with_account("987654321", "5678")
            .with_account("555666777", "9999")
    }
}

/// One seeded log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTransaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

impl SeedTransaction {
    pub(crate) fn to_transaction(&self) -> Transaction {
        Transaction::new(
            self.id,
            self.kind,
            self.amount,
            self.date,
            self.description.clone(),
        )
    }
}

/// Starting state for every session's ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSeed {
    pub opening_balance: Decimal,
    /// Newest first, the same order the ledger keeps
    pub transactions: Vec<SeedTransaction>,
}

impl LedgerSeed {
    /// Empty log with the given balance
    pub fn with_balance(opening_balance: Decimal) -> Self {
        LedgerSeed {
            opening_balance,
            transactions: Vec::new(),
        }
    }

    /// First id the ledger hands out after seeding
    pub fn next_id(&self) -> TransactionId {
        self.transactions
            .iter()
            .map(|tx| tx.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn demo() -> Self {
        let seed = |id: TransactionId,
                    kind: TransactionKind,
                    amount: Decimal,
                    (y, m, d): (i32, u32, u32),
                    description: &str| SeedTransaction {
            id,
            kind,
            amount,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
            description: description.to_string(),
        };

        LedgerSeed {
            opening_balance: Decimal::new(250075, 2),
            transactions: vec![
                seed(
                    1,
                    TransactionKind::Deposit,
                    Decimal::new(1000, 0),
                    (2024, 1, 15),
                    "Salary deposit",
                ),
                seed(
                    2,
                    TransactionKind::Withdrawal,
                    Decimal::new(150, 0),
                    (2024, 1, 14),
                    "ATM withdrawal",
                ),
                seed(
                    3,
                    TransactionKind::Deposit,
                    Decimal::new(500, 0),
                    (2024, 1, 12),
                    "Transfer from savings",
                ),
                seed(
                    4,
                    TransactionKind::Withdrawal,
                    Decimal::new(7550, 2),
                    (2024, 1, 10),
                    "Online purchase",
                ),
                seed(
                    5,
                    TransactionKind::Deposit,
                    Decimal::new(250, 0),
                    (2024, 1, 8),
                    "Freelance payment",
                ),
            ],
        }
    }
}

/// Preset amounts offered as one-tap buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAmounts {
    /// ATM kiosk buttons, used for both withdrawals and deposits
    pub kiosk: Vec<Decimal>,
    /// Dashboard withdraw form
    pub withdraw_form: Vec<Decimal>,
    /// Dashboard deposit form
    pub deposit_form: Vec<Decimal>,
}

impl Default for QuickAmounts {
    fn default() -> Self {
        let amounts = |values: &[i64]| -> Vec<Decimal> {
            values.iter().map(|&v| Decimal::new(v, 0)).collect()
        };
        QuickAmounts {
            kiosk: amounts(&[20, 40, 60, 80, 100, 200]),
            withdraw_form: amounts(&[20, 40, 60, 100, 200]),
            deposit_form: amounts(&[50, 100, 200, 500, 1000]),
        }
    }
}

impl QuickAmounts {
    /// Form presets for a transaction kind
    pub fn form(&self, kind: TransactionKind) -> &[Decimal] {
        match kind {
            TransactionKind::Deposit => &self.deposit_form,
            TransactionKind::Withdrawal => &self.withdraw_form,
        }
    }
}

/// Everything a `Bank` is constructed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub directory: CredentialDirectory,
    pub seed: LedgerSeed,
    pub quick_amounts: QuickAmounts,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            directory: CredentialDirectory::demo(),
            seed: LedgerSeed::demo(),
            quick_amounts: QuickAmounts::default(),
        }
    }
}
