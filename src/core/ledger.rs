//! Account ledger
//!
//! This module provides the `Ledger`, which owns one account's balance and
//! its transaction log and is the only thing allowed to change either.
//!
//! The Ledger is responsible for:
//! - Validating amounts and covering withdrawals against the balance
//! - Assigning monotonically increasing transaction ids
//! - Stamping new transactions with the clock's date
//! - Keeping the log newest first
//!
//! `apply` either records the transaction and moves the balance, or returns an
//! error and changes nothing.

use crate::config::LedgerSeed;
use crate::core::summary::LedgerSummary;
use crate::core::traits::Clock;
use crate::types::{parse_amount, Transaction, TransactionError, TransactionId, TransactionKind};
use rust_decimal::Decimal;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::rc::Rc;

/// Decimal places of the currency's minor unit
pub const MINOR_UNIT_SCALE: u32 = 2;

/// One account's balance and transaction log
#[derive(Debug)]
pub struct Ledger {
    balance: Decimal,
    /// Newest first
    log: VecDeque<Transaction>,
    next_id: TransactionId,
    clock: Rc<dyn Clock>,
}

impl Ledger {
    /// Create a ledger with an opening balance and an empty log
    pub fn new(opening_balance: Decimal, clock: Rc<dyn Clock>) -> Self {
        Ledger {
            balance: opening_balance,
            log: VecDeque::new(),
            next_id: 1,
            clock,
        }
    }

    /// Create a ledger from fixture data
    ///
    /// Seed transactions are taken as already applied: the opening balance is
    /// used as is and is not recomputed from the log.
    pub fn from_seed(seed: &LedgerSeed, clock: Rc<dyn Clock>) -> Self {
        Ledger {
            balance: seed.opening_balance,
            log: seed
                .transactions
                .iter()
                .map(|tx| tx.to_transaction())
                .collect(),
            next_id: seed.next_id(),
            clock,
        }
    }

    /// The current balance
    pub fn current_balance(&self) -> Decimal {
        self.balance
    }

    /// Apply a deposit or withdrawal
    ///
    /// An empty or whitespace-only `description` is replaced by the kind's
    /// default ("Cash deposit" / "ATM withdrawal").
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - the newly recorded transaction, now at the head
    ///   of the log
    /// * `Err(TransactionError)` - nothing was changed
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative, has more than two
    ///   significant decimal places, or a deposit would overflow the balance
    /// - `InsufficientFunds` if a withdrawal exceeds the current balance
    pub fn apply(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        description: &str,
    ) -> Result<Transaction, TransactionError> {
        if amount <= Decimal::ZERO || amount.normalize().scale() > MINOR_UNIT_SCALE {
            return Err(TransactionError::InvalidAmount);
        }

        let new_balance = match kind {
            TransactionKind::Deposit => self
                .balance
                .checked_add(amount)
                .ok_or(TransactionError::InvalidAmount)?,
            TransactionKind::Withdrawal => {
                if amount > self.balance {
                    return Err(TransactionError::InsufficientFunds);
                }
                self.balance - amount
            }
        };

        let description = match description.trim() {
            "" => kind.default_description(),
            _ => description,
        };

        let tx = Transaction::new(self.next_id, kind, amount, self.clock.today(), description);

        self.next_id += 1;
        self.balance = new_balance;
        self.log.push_front(tx.clone());

        tracing::debug!(
            id = tx.id(),
            kind = %kind,
            amount = %amount,
            balance = %self.balance,
            "transaction applied"
        );

        Ok(tx)
    }

    /// Apply a transaction from a user-typed amount
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if `raw_amount` is not a number, otherwise whatever
    /// `apply` reports.
    pub fn apply_input(
        &mut self,
        kind: TransactionKind,
        raw_amount: &str,
        description: &str,
    ) -> Result<Transaction, TransactionError> {
        let amount = parse_amount(raw_amount).ok_or(TransactionError::InvalidAmount)?;
        self.apply(kind, amount, description)
    }

    /// Whether a withdrawal of `amount` would be accepted
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.balance
    }

    /// The log, newest first
    pub fn transaction_log(&self) -> vec_deque::Iter<'_, Transaction> {
        self.log.iter()
    }

    /// The most recent transaction
    pub fn latest(&self) -> Option<&Transaction> {
        self.log.front()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_log(&self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FixedClock;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn demo_ledger() -> Ledger {
        Ledger::from_seed(&LedgerSeed::demo(), Rc::new(FixedClock(today())))
    }

    fn snapshot(ledger: &Ledger) -> (Decimal, Vec<Transaction>) {
        (
            ledger.current_balance(),
            ledger.transaction_log().cloned().collect(),
        )
    }

    #[test]
    fn test_seeded_state() {
        let ledger = demo_ledger();
        assert_eq!(ledger.current_balance(), Decimal::new(250075, 2));
        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger.latest().unwrap().description(), "Salary deposit");
    }

    #[test]
    fn test_deposit_with_empty_description() {
        let mut ledger = demo_ledger();

        let tx = ledger
            .apply(TransactionKind::Deposit, Decimal::new(10000, 2), "")
            .unwrap();

        assert_eq!(ledger.current_balance(), Decimal::new(260075, 2));
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.amount(), Decimal::new(100, 0));
        assert_eq!(tx.description(), "Cash deposit");
        assert_eq!(tx.date(), today());
        assert_eq!(tx.id(), 6);
        assert_eq!(ledger.latest(), Some(&tx));
        assert_eq!(ledger.len(), 6);
    }

    #[test]
    fn test_withdrawal_with_blank_description() {
        let mut ledger = demo_ledger();

        let tx = ledger
            .apply(TransactionKind::Withdrawal, Decimal::new(50, 0), "   ")
            .unwrap();

        assert_eq!(ledger.current_balance(), Decimal::new(245075, 2));
        assert_eq!(tx.description(), "ATM withdrawal");
        assert_eq!(ledger.latest().unwrap().kind(), TransactionKind::Withdrawal);
    }

    #[test]
    fn test_description_kept_verbatim() {
        let mut ledger = demo_ledger();
        let tx = ledger
            .apply(TransactionKind::Deposit, Decimal::ONE, "  Birthday gift ")
            .unwrap();
        assert_eq!(tx.description(), "  Birthday gift ");
    }

    #[test]
    fn test_withdrawal_exceeding_balance_changes_nothing() {
        let mut ledger = demo_ledger();
        let before = snapshot(&ledger);

        let result = ledger.apply(TransactionKind::Withdrawal, Decimal::new(300000, 2), "");

        assert_eq!(result, Err(TransactionError::InsufficientFunds));
        assert_eq!(snapshot(&ledger), before);
        assert_eq!(ledger.current_balance(), Decimal::new(250075, 2));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut ledger = demo_ledger();
        ledger
            .apply(TransactionKind::Withdrawal, Decimal::new(250075, 2), "")
            .unwrap();
        assert_eq!(ledger.current_balance(), Decimal::ZERO);

        assert_eq!(
            ledger.apply(TransactionKind::Withdrawal, Decimal::new(1, 2), ""),
            Err(TransactionError::InsufficientFunds)
        );
    }

    #[rstest]
    #[case::zero_deposit(TransactionKind::Deposit, Decimal::ZERO)]
    #[case::negative_deposit(TransactionKind::Deposit, Decimal::new(-100, 0))]
    #[case::zero_withdrawal(TransactionKind::Withdrawal, Decimal::ZERO)]
    #[case::negative_withdrawal(TransactionKind::Withdrawal, Decimal::new(-1, 2))]
    fn test_non_positive_amount_rejected(#[case] kind: TransactionKind, #[case] amount: Decimal) {
        let mut ledger = demo_ledger();
        let before = snapshot(&ledger);

        assert_eq!(
            ledger.apply(kind, amount, "x"),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(snapshot(&ledger), before);
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::empty("")]
    #[case::zero("0")]
    #[case::negative("-20")]
    #[case::nan("NaN")]
    fn test_invalid_input_rejected(#[case] raw: &str) {
        let mut ledger = demo_ledger();
        let before = snapshot(&ledger);

        assert_eq!(
            ledger.apply_input(TransactionKind::Deposit, raw, ""),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(snapshot(&ledger), before);
    }

    #[test]
    fn test_apply_input_parses_amount() {
        let mut ledger = demo_ledger();
        let tx = ledger
            .apply_input(TransactionKind::Withdrawal, " 75.25 ", "Groceries")
            .unwrap();
        assert_eq!(tx.amount(), Decimal::new(7525, 2));
        assert_eq!(ledger.current_balance(), Decimal::new(242550, 2));
    }

    #[rstest]
    #[case::sub_cent_deposit(TransactionKind::Deposit, "0.001")]
    #[case::sub_cent_withdrawal(TransactionKind::Withdrawal, "0.001")]
    #[case::three_places(TransactionKind::Deposit, "10.125")]
    #[case::scientific(TransactionKind::Withdrawal, "1e-3")]
    fn test_sub_cent_amount_rejected(#[case] kind: TransactionKind, #[case] raw: &str) {
        let mut ledger = demo_ledger();
        let before = snapshot(&ledger);

        assert_eq!(
            ledger.apply_input(kind, raw, ""),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(snapshot(&ledger), before);
    }

    #[test]
    fn test_shown_balance_stays_withdrawable() {
        let mut ledger = demo_ledger();
        let _ = ledger.apply_input(TransactionKind::Withdrawal, "0.001", "");

        ledger
            .apply_input(TransactionKind::Withdrawal, "2500.75", "")
            .unwrap();
        assert_eq!(ledger.current_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_trailing_zeros_beyond_cents_accepted() {
        let mut ledger = demo_ledger();
        let tx = ledger
            .apply_input(TransactionKind::Deposit, "1.5000", "")
            .unwrap();
        assert_eq!(tx.amount(), Decimal::new(15, 1));
        assert_eq!(ledger.current_balance(), Decimal::new(250225, 2));
    }

    #[test]
    fn test_deposit_overflow_is_invalid_amount() {
        let mut ledger = Ledger::new(Decimal::MAX, Rc::new(FixedClock(today())));
        assert_eq!(
            ledger.apply(TransactionKind::Deposit, Decimal::ONE, ""),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(ledger.current_balance(), Decimal::MAX);
        assert!(ledger.is_empty());
    }

    #[rstest]
    #[case::deposit(TransactionKind::Deposit, Decimal::new(12345, 2))]
    #[case::withdrawal(TransactionKind::Withdrawal, Decimal::new(12345, 2))]
    #[case::large_deposit(TransactionKind::Deposit, Decimal::new(1_000_000, 0))]
    #[case::small_withdrawal(TransactionKind::Withdrawal, Decimal::new(1, 2))]
    fn test_successful_apply_moves_balance_and_prepends(
        #[case] kind: TransactionKind,
        #[case] amount: Decimal,
    ) {
        let mut ledger = demo_ledger();
        let (before_balance, before_log) = snapshot(&ledger);

        let tx = ledger.apply(kind, amount, "").unwrap();

        let expected = match kind {
            TransactionKind::Deposit => before_balance + amount,
            TransactionKind::Withdrawal => before_balance - amount,
        };
        assert_eq!(ledger.current_balance(), expected);

        let (_, after_log) = snapshot(&ledger);
        assert_eq!(after_log.len(), before_log.len() + 1);
        assert_eq!(after_log[0], tx);
        assert_eq!(after_log[0].kind(), kind);
        assert_eq!(&after_log[1..], &before_log[..]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut ledger = demo_ledger();
        let first = ledger.apply(TransactionKind::Deposit, Decimal::TEN, "a").unwrap();
        let second = ledger.apply(TransactionKind::Deposit, Decimal::TEN, "a").unwrap();
        let third = ledger
            .apply(TransactionKind::Withdrawal, Decimal::TEN, "a")
            .unwrap();

        assert_eq!(first.id(), 6);
        assert!(second.id() > first.id());
        assert!(third.id() > second.id());
        assert_eq!(ledger.len(), 8);
    }

    #[test]
    fn test_rejected_apply_does_not_consume_id() {
        let mut ledger = demo_ledger();
        let _ = ledger.apply(TransactionKind::Withdrawal, Decimal::new(999999, 0), "");
        let tx = ledger.apply(TransactionKind::Deposit, Decimal::ONE, "").unwrap();
        assert_eq!(tx.id(), 6);
    }

    #[rstest]
    #[case::below(Decimal::new(20, 0), true)]
    #[case::exact(Decimal::new(250075, 2), true)]
    #[case::above(Decimal::new(250076, 2), false)]
    #[case::zero(Decimal::ZERO, false)]
    fn test_can_withdraw(#[case] amount: Decimal, #[case] expected: bool) {
        assert_eq!(demo_ledger().can_withdraw(amount), expected);
    }

    #[test]
    fn test_summary_tracks_new_transactions() {
        let mut ledger = demo_ledger();
        ledger
            .apply(TransactionKind::Withdrawal, Decimal::new(100, 0), "")
            .unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.transaction_count, 6);
        assert_eq!(summary.total_withdrawals, Decimal::new(32550, 2));
        assert_eq!(summary.last_transaction, Some(today()));
    }
}
