//! Text rendering of dashboard and kiosk views
//!
//! Every function returns a `String` without a trailing newline; callers
//! decide how to frame it.

use crate::config::{CredentialDirectory, QuickAmounts};
use crate::core::{Ledger, LedgerSummary};
use crate::types::{AccountNumber, Transaction, TransactionKind};
use crate::ui::format::{balance, long_date, masked_account, money, preset, signed_money};
use crate::ui::kiosk::{AtmKiosk, AtmScreen};
use rust_decimal::Decimal;
use std::fmt::Write;

/// Confirmation line for a recorded transaction
///
/// `Recorded #6 deposit of $100.00 (Cash deposit); balance $2600.75`
pub fn receipt(tx: &Transaction, balance_after: Decimal) -> String {
    format!(
        "Recorded #{} {} of {} ({}); balance {}",
        tx.id(),
        tx.kind(),
        money(tx.amount()),
        tx.description(),
        money(balance_after)
    )
}

/// One history row: `Jan 15, 2024 | Deposit | Salary deposit | +$1000.00`
pub fn history_row(tx: &Transaction) -> String {
    format!(
        "{} | {} | {} | {}",
        long_date(tx.date()),
        tx.kind().label(),
        tx.description(),
        signed_money(tx)
    )
}

/// The full transaction history, newest first
pub fn history<'a, I>(log: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<String> = log.into_iter().map(history_row).collect();
    if rows.is_empty() {
        "No transactions yet.".to_string()
    } else {
        rows.join("\n")
    }
}

/// Summary cards: count, last date, totals
pub fn summary(summary: &LedgerSummary) -> String {
    let last = summary
        .last_transaction
        .map(long_date)
        .unwrap_or_else(|| "never".to_string());

    format!(
        "Transactions: {} (last: {})\nTotal deposits: {}\nTotal withdrawals: {}",
        summary.transaction_count,
        last,
        money(summary.total_deposits),
        money(summary.total_withdrawals)
    )
}

/// Dashboard overview for the logged-in account
pub fn overview(account: &AccountNumber, ledger: &Ledger, show_balance: bool) -> String {
    format!(
        "Account: {}\nAvailable balance: {}\n{}",
        account,
        balance(ledger.current_balance(), show_balance),
        summary(&ledger.summary())
    )
}

/// Login hint listing every account in the directory
///
/// ```text
/// Demo accounts:
///   Account: 123456789, PIN: 1234
/// ```
pub fn demo_accounts(directory: &CredentialDirectory) -> String {
    let mut out = String::from("Demo accounts:");
    for (account, pin) in directory.entries() {
        let _ = write!(out, "\n  Account: {}, PIN: {}", account, pin);
    }
    out
}

/// Preset buttons, unavailable ones in parentheses: `$20 $40 ($60)`
fn preset_buttons(amounts: &[Decimal], available: impl Fn(Decimal) -> bool) -> String {
    amounts
        .iter()
        .map(|&amount| {
            if available(amount) {
                preset(amount)
            } else {
                format!("({})", preset(amount))
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Dashboard form presets
///
/// Withdrawal presets above the balance are unavailable.
pub fn form_presets(quick_amounts: &QuickAmounts, ledger: &Ledger) -> String {
    format!(
        "Withdraw presets: {}\nDeposit presets: {}",
        preset_buttons(quick_amounts.form(TransactionKind::Withdrawal), |amount| {
            ledger.can_withdraw(amount)
        }),
        preset_buttons(quick_amounts.form(TransactionKind::Deposit), |_| true)
    )
}

/// The current kiosk screen
pub fn kiosk(kiosk: &AtmKiosk, account: &AccountNumber, ledger: &Ledger) -> String {
    let mut out = String::from("[SecureBank ATM] ");

    match kiosk.screen() {
        AtmScreen::Main => {
            let _ = write!(
                out,
                "Account: {}\nCheck Balance | Withdraw | Deposit | Exit",
                masked_account(account)
            );
        }
        AtmScreen::Balance => {
            let _ = write!(
                out,
                "Available Balance: {}",
                balance(ledger.current_balance(), kiosk.balance_visible())
            );
        }
        AtmScreen::AmountSelection(kind) => {
            let title = match kind {
                TransactionKind::Deposit => "Deposit",
                TransactionKind::Withdrawal => "Withdrawal",
            };
            let _ = write!(out, "Select {} Amount", title);
            if kind == TransactionKind::Withdrawal {
                let _ = write!(out, "\nAvailable Balance: {}", money(ledger.current_balance()));
            }

            let available = kiosk.available_quick_amounts(ledger);
            let buttons = preset_buttons(kiosk.quick_amounts(), |amount| available.contains(&amount));
            let _ = write!(out, "\n{} | Other Amount | Cancel", buttons);
        }
        AtmScreen::CustomAmount(kind) => {
            out.push_str("Enter Amount");
            if kind == TransactionKind::Withdrawal {
                let _ = write!(out, "\nMaximum: {}", money(ledger.current_balance()));
            }
        }
    }

    if let Some(error) = kiosk.last_error() {
        let _ = write!(out, "\n! {}", error);
    }

    out
}
