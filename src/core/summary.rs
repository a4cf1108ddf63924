//! Aggregate figures over a transaction log
//!
//! Backs the dashboard overview cards and the history summary: how many
//! transactions there are, what was deposited and withdrawn in total, and
//! when the most recent one happened.

use crate::types::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    pub transaction_count: usize,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    /// Date of the newest entry, `None` for an empty log
    pub last_transaction: Option<NaiveDate>,
}

impl LedgerSummary {
    /// Summarize a newest-first log
    pub fn from_log<'a, I>(log: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = LedgerSummary::default();

        for tx in log {
            if summary.transaction_count == 0 {
                summary.last_transaction = Some(tx.date());
            }
            summary.transaction_count += 1;

            // Display figures only, saturating
            match tx.kind() {
                TransactionKind::Deposit => {
                    summary.total_deposits = summary.total_deposits.saturating_add(tx.amount())
                }
                TransactionKind::Withdrawal => {
                    summary.total_withdrawals =
                        summary.total_withdrawals.saturating_add(tx.amount())
                }
            }
        }

        summary
    }
}
