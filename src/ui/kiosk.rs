//! ATM kiosk screen flow
//!
//! The kiosk is a small state machine layered over an active ledger:
//!
//! ```text
//! Main --check_balance--> Balance --back--> Main
//! Main --begin(kind)--> AmountSelection(kind) --cancel--> Main
//! AmountSelection(kind) --other_amount--> CustomAmount(kind) --cancel--> AmountSelection(kind)
//! AmountSelection / CustomAmount --successful transaction--> Main
//! ```
//!
//! The kiosk owns no money; every transaction goes through `Ledger::apply`
//! with the ATM descriptions. A rejected transaction keeps the current screen
//! and remembers the error for display.

use crate::core::Ledger;
use crate::types::{BankError, SessionError, Transaction, TransactionError, TransactionKind};
use crate::types::parse_amount;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmScreen {
    Main,
    Balance,
    AmountSelection(TransactionKind),
    CustomAmount(TransactionKind),
}

impl AtmScreen {
    pub fn name(self) -> &'static str {
        match self {
            AtmScreen::Main => "main",
            AtmScreen::Balance => "balance",
            AtmScreen::AmountSelection(TransactionKind::Deposit) => "deposit",
            AtmScreen::AmountSelection(TransactionKind::Withdrawal) => "withdraw",
            AtmScreen::CustomAmount(_) => "custom amount",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AtmKiosk {
    screen: AtmScreen,
    show_balance: bool,
    last_error: Option<TransactionError>,
    quick_amounts: Vec<Decimal>,
}

impl AtmKiosk {
    /// Open on the main screen with the balance hidden
    pub fn new(quick_amounts: Vec<Decimal>) -> Self {
        AtmKiosk {
            screen: AtmScreen::Main,
            show_balance: false,
            last_error: None,
            quick_amounts,
        }
    }

    pub fn screen(&self) -> AtmScreen {
        self.screen
    }

    pub fn balance_visible(&self) -> bool {
        self.show_balance
    }

    pub fn last_error(&self) -> Option<TransactionError> {
        self.last_error
    }

    pub fn quick_amounts(&self) -> &[Decimal] {
        &self.quick_amounts
    }

    /// Quick amounts that can be chosen right now
    ///
    /// Withdrawal presets above the balance are unavailable; deposits are
    /// never restricted. Empty outside the amount selection screen.
    pub fn available_quick_amounts(&self, ledger: &Ledger) -> Vec<Decimal> {
        match self.screen {
            AtmScreen::AmountSelection(TransactionKind::Withdrawal) => self
                .quick_amounts
                .iter()
                .copied()
                .filter(|&amount| ledger.can_withdraw(amount))
                .collect(),
            AtmScreen::AmountSelection(TransactionKind::Deposit) => self.quick_amounts.clone(),
            _ => Vec::new(),
        }
    }

    /// Main → Balance
    pub fn check_balance(&mut self) -> Result<(), SessionError> {
        self.expect_screen("balance", |s| s == AtmScreen::Main)?;
        self.screen = AtmScreen::Balance;
        Ok(())
    }

    /// Flip balance visibility on the balance screen; returns the new state
    pub fn toggle_balance(&mut self) -> Result<bool, SessionError> {
        self.expect_screen("toggle", |s| s == AtmScreen::Balance)?;
        self.show_balance = !self.show_balance;
        Ok(self.show_balance)
    }

    /// Balance → Main
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.expect_screen("back", |s| s == AtmScreen::Balance)?;
        self.go_main();
        Ok(())
    }

    /// Main → AmountSelection(kind)
    pub fn begin(&mut self, kind: TransactionKind) -> Result<(), SessionError> {
        let action = match kind {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdraw",
        };
        self.expect_screen(action, |s| s == AtmScreen::Main)?;
        self.screen = AtmScreen::AmountSelection(kind);
        self.last_error = None;
        Ok(())
    }

    /// AmountSelection(kind) → CustomAmount(kind)
    pub fn other_amount(&mut self) -> Result<(), SessionError> {
        let kind = self.selection_kind("other")?;
        self.screen = AtmScreen::CustomAmount(kind);
        self.last_error = None;
        Ok(())
    }

    /// Step back one screen from an amount screen
    ///
    /// AmountSelection → Main, CustomAmount → AmountSelection.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match self.screen {
            AtmScreen::AmountSelection(_) => self.go_main(),
            AtmScreen::CustomAmount(kind) => {
                self.screen = AtmScreen::AmountSelection(kind);
                self.last_error = None;
            }
            screen => {
                return Err(SessionError::UnavailableAction {
                    action: "cancel",
                    screen: screen.name(),
                })
            }
        }
        Ok(())
    }

    /// Choose a preset on the amount selection screen
    ///
    /// # Errors
    ///
    /// - `UnavailableAction` when not on the amount selection screen
    /// - `InvalidAmount` when `amount` is not one of the presets
    /// - `InsufficientFunds` when a withdrawal preset exceeds the balance
    pub fn quick(&mut self, ledger: &mut Ledger, amount: Decimal) -> Result<Transaction, BankError> {
        let kind = self.selection_kind("quick")?;

        if !self.quick_amounts.contains(&amount) {
            return Err(self.reject(TransactionError::InvalidAmount));
        }

        self.submit(ledger, kind, amount)
    }

    /// Confirm a typed amount on the custom amount screen
    ///
    /// # Errors
    ///
    /// - `UnavailableAction` when not on the custom amount screen
    /// - `InvalidAmount` / `InsufficientFunds` from the ledger
    pub fn confirm(&mut self, ledger: &mut Ledger, raw_amount: &str) -> Result<Transaction, BankError> {
        let kind = match self.screen {
            AtmScreen::CustomAmount(kind) => kind,
            screen => {
                return Err(SessionError::UnavailableAction {
                    action: "confirm",
                    screen: screen.name(),
                }
                .into())
            }
        };

        match parse_amount(raw_amount) {
            Some(amount) => self.submit(ledger, kind, amount),
            None => Err(self.reject(TransactionError::InvalidAmount)),
        }
    }

    fn submit(
        &mut self,
        ledger: &mut Ledger,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<Transaction, BankError> {
        match ledger.apply(kind, amount, kind.kiosk_description()) {
            Ok(tx) => {
                self.go_main();
                Ok(tx)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    fn reject(&mut self, error: TransactionError) -> BankError {
        self.last_error = Some(error);
        error.into()
    }

    fn go_main(&mut self) {
        self.screen = AtmScreen::Main;
        self.last_error = None;
    }

    fn selection_kind(&self, action: &'static str) -> Result<TransactionKind, SessionError> {
        match self.screen {
            AtmScreen::AmountSelection(kind) => Ok(kind),
            screen => Err(SessionError::UnavailableAction {
                action,
                screen: screen.name(),
            }),
        }
    }

    fn expect_screen(
        &self,
        action: &'static str,
        allowed: impl Fn(AtmScreen) -> bool,
    ) -> Result<(), SessionError> {
        if allowed(self.screen) {
            Ok(())
        } else {
            Err(SessionError::UnavailableAction {
                action,
                screen: self.screen.name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerSeed, QuickAmounts};
    use crate::core::FixedClock;
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn ledger_with(balance: Decimal) -> Ledger {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        Ledger::from_seed(&LedgerSeed::with_balance(balance), Rc::new(clock))
    }

    fn kiosk() -> AtmKiosk {
        AtmKiosk::new(QuickAmounts::default().kiosk)
    }

    #[test]
    fn test_opens_on_main_with_hidden_balance() {
        let kiosk = kiosk();
        assert_eq!(kiosk.screen(), AtmScreen::Main);
        assert!(!kiosk.balance_visible());
        assert_eq!(kiosk.last_error(), None);
    }

    #[test]
    fn test_balance_screen_toggle_and_back() {
        let mut kiosk = kiosk();
        kiosk.check_balance().unwrap();
        assert_eq!(kiosk.screen(), AtmScreen::Balance);

        assert!(kiosk.toggle_balance().unwrap());
        assert!(!kiosk.toggle_balance().unwrap());
        assert!(kiosk.toggle_balance().unwrap());

        kiosk.back().unwrap();
        assert_eq!(kiosk.screen(), AtmScreen::Main);
        // Visibility sticks for the lifetime of the kiosk
        assert!(kiosk.balance_visible());
    }

    #[test]
    fn test_quick_withdrawal() {
        let mut ledger = ledger_with(Decimal::new(100, 0));
        let mut kiosk = kiosk();

        kiosk.begin(TransactionKind::Withdrawal).unwrap();
        let tx = kiosk.quick(&mut ledger, Decimal::new(40, 0)).unwrap();

        assert_eq!(tx.description(), "ATM withdrawal");
        assert_eq!(ledger.current_balance(), Decimal::new(60, 0));
        assert_eq!(kiosk.screen(), AtmScreen::Main);
    }

    #[test]
    fn test_quick_deposit_uses_atm_description() {
        let mut ledger = ledger_with(Decimal::ZERO);
        let mut kiosk = kiosk();

        kiosk.begin(TransactionKind::Deposit).unwrap();
        let tx = kiosk.quick(&mut ledger, Decimal::new(200, 0)).unwrap();

        assert_eq!(tx.description(), "ATM deposit");
        assert_eq!(ledger.current_balance(), Decimal::new(200, 0));
    }

    #[test]
    fn test_quick_withdrawal_over_balance_stays_with_error() {
        let mut ledger = ledger_with(Decimal::new(50, 0));
        let mut kiosk = kiosk();
        kiosk.begin(TransactionKind::Withdrawal).unwrap();

        assert_eq!(
            kiosk.available_quick_amounts(&ledger),
            vec![Decimal::new(20, 0), Decimal::new(40, 0)]
        );

        let err = kiosk.quick(&mut ledger, Decimal::new(60, 0)).unwrap_err();
        assert_eq!(err, BankError::Transaction(TransactionError::InsufficientFunds));
        assert_eq!(kiosk.screen(), AtmScreen::AmountSelection(TransactionKind::Withdrawal));
        assert_eq!(kiosk.last_error(), Some(TransactionError::InsufficientFunds));
        assert_eq!(ledger.current_balance(), Decimal::new(50, 0));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_quick_rejects_non_preset() {
        let mut ledger = ledger_with(Decimal::new(500, 0));
        let mut kiosk = kiosk();
        kiosk.begin(TransactionKind::Deposit).unwrap();

        let err = kiosk.quick(&mut ledger, Decimal::new(25, 0)).unwrap_err();
        assert_eq!(err, BankError::Transaction(TransactionError::InvalidAmount));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_custom_amount_flow() {
        let mut ledger = ledger_with(Decimal::new(100, 0));
        let mut kiosk = kiosk();

        kiosk.begin(TransactionKind::Withdrawal).unwrap();
        kiosk.other_amount().unwrap();
        assert_eq!(kiosk.screen(), AtmScreen::CustomAmount(TransactionKind::Withdrawal));

        assert_eq!(
            kiosk.confirm(&mut ledger, "abc").unwrap_err(),
            BankError::Transaction(TransactionError::InvalidAmount)
        );
        assert_eq!(
            kiosk.confirm(&mut ledger, "100.01").unwrap_err(),
            BankError::Transaction(TransactionError::InsufficientFunds)
        );
        assert_eq!(kiosk.screen(), AtmScreen::CustomAmount(TransactionKind::Withdrawal));

        let tx = kiosk.confirm(&mut ledger, "12.34").unwrap();
        assert_eq!(tx.amount(), Decimal::new(1234, 2));
        assert_eq!(kiosk.screen(), AtmScreen::Main);
        assert_eq!(kiosk.last_error(), None);
    }

    #[test]
    fn test_cancel_steps_back() {
        let mut kiosk = kiosk();
        kiosk.begin(TransactionKind::Deposit).unwrap();
        kiosk.other_amount().unwrap();

        kiosk.cancel().unwrap();
        assert_eq!(kiosk.screen(), AtmScreen::AmountSelection(TransactionKind::Deposit));

        kiosk.cancel().unwrap();
        assert_eq!(kiosk.screen(), AtmScreen::Main);

        assert_eq!(
            kiosk.cancel().unwrap_err(),
            SessionError::UnavailableAction {
                action: "cancel",
                screen: "main"
            }
        );
    }

    #[test]
    fn test_actions_on_wrong_screen() {
        let mut ledger = ledger_with(Decimal::new(100, 0));
        let mut kiosk = kiosk();

        assert!(kiosk.toggle_balance().is_err());
        assert!(kiosk.back().is_err());
        assert!(kiosk.other_amount().is_err());
        assert_eq!(
            kiosk.quick(&mut ledger, Decimal::new(20, 0)).unwrap_err(),
            BankError::Session(SessionError::UnavailableAction {
                action: "quick",
                screen: "main"
            })
        );
        assert!(kiosk.confirm(&mut ledger, "20").is_err());

        kiosk.check_balance().unwrap();
        assert!(kiosk.begin(TransactionKind::Deposit).is_err());
        assert!(ledger.is_empty());
    }
}
