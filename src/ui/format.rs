//! Display formatting helpers
//!
//! Two-decimal money, masked account numbers and short calendar dates. Pure
//! functions, no locale handling.

use crate::types::{AccountNumber, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Shown in place of a hidden balance
pub const HIDDEN_BALANCE: &str = "••••••";

/// `$2500.75`
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// `+$100.00` for deposits, `-$75.50` for withdrawals
pub fn signed_money(tx: &Transaction) -> String {
    let amount = tx.signed_amount();
    let sign = if amount.is_sign_negative() { '-' } else { '+' };
    format!("{}{}", sign, money(amount.abs()))
}

/// Balance or the hidden placeholder
pub fn balance(amount: Decimal, visible: bool) -> String {
    if visible {
        money(amount)
    } else {
        HIDDEN_BALANCE.to_string()
    }
}

/// Preset button label: `$20`, `$12.5`
pub fn preset(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

/// `•••• •••• 789`
pub fn masked_account(account: &AccountNumber) -> String {
    format!("•••• •••• {}", account.last_three())
}

/// `Jan 15, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rstest::rstest;

    #[rstest]
    #[case::two_places(Decimal::new(250075, 2), "$2500.75")]
    #[case::whole(Decimal::new(100, 0), "$100.00")]
    #[case::one_place(Decimal::new(755, 1), "$75.50")]
    #[case::zero(Decimal::ZERO, "$0.00")]
    #[case::thousands_unseparated(Decimal::new(1_000_000, 0), "$1000000.00")]
    fn test_money(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(money(amount), expected);
    }

    #[rstest]
    #[case::deposit(TransactionKind::Deposit, "+$1000.00")]
    #[case::withdrawal(TransactionKind::Withdrawal, "-$1000.00")]
    fn test_signed_money(#[case] kind: TransactionKind, #[case] expected: &str) {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let tx = Transaction::new(1, kind, Decimal::new(1000, 0), date, "x");
        assert_eq!(signed_money(&tx), expected);
    }

    #[rstest]
    #[case::visible(true, "$2500.75")]
    #[case::hidden(false, "••••••")]
    fn test_balance(#[case] visible: bool, #[case] expected: &str) {
        assert_eq!(balance(Decimal::new(250075, 2), visible), expected);
    }

    #[rstest]
    #[case::whole(Decimal::new(20, 0), "$20")]
    #[case::trailing_zeros(Decimal::new(2000, 2), "$20")]
    #[case::fraction(Decimal::new(125, 1), "$12.5")]
    fn test_preset(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(preset(amount), expected);
    }

    #[test]
    fn test_masked_account() {
        assert_eq!(
            masked_account(&AccountNumber::from("123456789")),
            "•••• •••• 789"
        );
    }

    #[rstest]
    #[case::two_digit_day((2024, 1, 15), "Jan 15, 2024")]
    #[case::single_digit_day((2024, 1, 8), "Jan 8, 2024")]
    #[case::december((2023, 12, 31), "Dec 31, 2023")]
    fn test_long_date(#[case] ymd: (i32, u32, u32), #[case] expected: &str) {
        let (y, m, d) = ymd;
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(long_date(date), expected);
    }
}
