//! Command execution
//!
//! The `Console` is the presentation layer's single entry point into the
//! core. It owns the `Bank`, the dashboard's balance visibility and, while
//! ATM mode is open, the kiosk. Each `execute` call runs one user action to
//! completion and returns what should be shown.

use crate::config::{BankConfig, QuickAmounts};
use crate::core::{Bank, Clock, Ledger};
use crate::driver::command::{AtmAction, Command, HELP};
use crate::types::{AccountNumber, BankError, SessionError, Transaction};
use crate::ui::render;
use crate::ui::AtmKiosk;
use rust_decimal::Decimal;
use std::fmt;
use std::rc::Rc;

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    LoggedIn(AccountNumber),
    LoggedOut(AccountNumber),
    Recorded {
        transaction: Transaction,
        balance: Decimal,
    },
    /// `None` when the balance is hidden
    Balance(Option<Decimal>),
    BalanceVisibility(bool),
    /// Pre-rendered history or overview text
    View(String),
    Kiosk {
        receipt: Option<String>,
        screen: String,
    },
    KioskClosed,
    Help,
    Quit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::LoggedIn(account) => write!(f, "Welcome back! Logged in as {}", account),
            Outcome::LoggedOut(account) => write!(f, "Logged out of {}", account),
            Outcome::Recorded {
                transaction,
                balance,
            } => f.write_str(&render::receipt(transaction, *balance)),
            Outcome::Balance(amount) => write!(
                f,
                "Available balance: {}",
                match amount {
                    Some(amount) => crate::ui::format::money(*amount),
                    None => crate::ui::format::HIDDEN_BALANCE.to_string(),
                }
            ),
            Outcome::BalanceVisibility(true) => f.write_str("Balance shown"),
            Outcome::BalanceVisibility(false) => f.write_str("Balance hidden"),
            Outcome::View(text) => f.write_str(text),
            Outcome::Kiosk { receipt, screen } => match receipt {
                Some(receipt) => write!(f, "{}\n{}", receipt, screen),
                None => f.write_str(screen),
            },
            Outcome::KioskClosed => f.write_str("Exited ATM mode"),
            Outcome::Help => f.write_str(HELP),
            Outcome::Quit => f.write_str("Goodbye"),
        }
    }
}

#[derive(Debug)]
pub struct Console {
    bank: Bank,
    quick_amounts: QuickAmounts,
    show_balance: bool,
    kiosk: Option<AtmKiosk>,
    login_hint: String,
}

impl Console {
    pub fn new(config: &BankConfig, clock: Rc<dyn Clock>) -> Self {
        Console {
            bank: Bank::with_clock(config, clock),
            quick_amounts: config.quick_amounts.clone(),
            show_balance: true,
            kiosk: None,
            login_hint: render::demo_accounts(&config.directory),
        }
    }

    /// The demo accounts a user can log in with
    pub fn login_hint(&self) -> &str {
        &self.login_hint
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn kiosk(&self) -> Option<&AtmKiosk> {
        self.kiosk.as_ref()
    }

    pub fn quick_amounts(&self) -> &QuickAmounts {
        &self.quick_amounts
    }

    /// Run one command to completion
    ///
    /// # Errors
    ///
    /// Any user-correctable error from the core, plus `SessionError`s for
    /// commands issued in the wrong state. Nothing is changed on error.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, BankError> {
        match command {
            Command::Login { account, pin } => {
                let account = self.bank.login(&account, &pin)?.account().clone();
                self.show_balance = true;
                self.kiosk = None;
                Ok(Outcome::LoggedIn(account))
            }
            Command::Logout => {
                let session = self.bank.logout()?;
                self.kiosk = None;
                Ok(Outcome::LoggedOut(session.account().clone()))
            }
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
            Command::Atm(action) => self.execute_atm(action),
            // Dashboard commands from here on
            _ if self.kiosk.is_some() => Err(SessionError::KioskActive.into()),
            Command::Transact {
                kind,
                amount,
                description,
            } => {
                let ledger = self.bank.active_ledger_mut()?;
                let transaction = ledger.apply_input(kind, &amount, &description)?;
                Ok(Outcome::Recorded {
                    transaction,
                    balance: ledger.current_balance(),
                })
            }
            Command::Balance => {
                let (_, ledger) = self.bank.active()?;
                Ok(Outcome::Balance(
                    self.show_balance.then(|| ledger.current_balance()),
                ))
            }
            Command::ToggleBalance => {
                self.bank.active()?;
                self.show_balance = !self.show_balance;
                Ok(Outcome::BalanceVisibility(self.show_balance))
            }
            Command::History => {
                let (_, ledger) = self.bank.active()?;
                Ok(Outcome::View(render::history(ledger.transaction_log())))
            }
            Command::Summary => {
                let (session, ledger) = self.bank.active()?;
                Ok(Outcome::View(render::overview(
                    session.account(),
                    ledger,
                    self.show_balance,
                )))
            }
            Command::Presets => {
                let (_, ledger) = self.bank.active()?;
                Ok(Outcome::View(render::form_presets(
                    &self.quick_amounts,
                    ledger,
                )))
            }
        }
    }

    fn execute_atm(&mut self, action: AtmAction) -> Result<Outcome, BankError> {
        self.bank.active()?;

        match action {
            AtmAction::Open => {
                if self.kiosk.is_none() {
                    self.kiosk = Some(AtmKiosk::new(self.quick_amounts.kiosk.clone()));
                }
                return self.kiosk_view(None);
            }
            AtmAction::Exit => {
                self.kiosk.take().ok_or(SessionError::KioskClosed)?;
                return Ok(Outcome::KioskClosed);
            }
            _ => {}
        }

        let kiosk = self.kiosk.as_mut().ok_or(SessionError::KioskClosed)?;
        let ledger = self.bank.active_ledger_mut()?;

        let transaction = match action {
            AtmAction::Open | AtmAction::Exit => None,
            AtmAction::CheckBalance => kiosk.check_balance().map(|_| None)?,
            AtmAction::ToggleBalance => kiosk.toggle_balance().map(|_| None)?,
            AtmAction::Back => kiosk.back().map(|_| None)?,
            AtmAction::Begin(kind) => kiosk.begin(kind).map(|_| None)?,
            AtmAction::Other => kiosk.other_amount().map(|_| None)?,
            AtmAction::Cancel => kiosk.cancel().map(|_| None)?,
            AtmAction::Quick(amount) => Some(kiosk.quick(ledger, amount)?),
            AtmAction::Confirm(raw) => Some(kiosk.confirm(ledger, &raw)?),
        };

        let receipt = transaction.map(|tx| render::receipt(&tx, ledger.current_balance()));
        self.kiosk_view(receipt)
    }

    fn kiosk_view(&self, receipt: Option<String>) -> Result<Outcome, BankError> {
        let (session, ledger) = self.bank.active()?;
        let kiosk = self.kiosk.as_ref().ok_or(SessionError::KioskClosed)?;
        Ok(Outcome::Kiosk {
            receipt,
            screen: render::kiosk(kiosk, session.account(), ledger),
        })
    }

    /// The active ledger, if logged in
    pub fn ledger(&self) -> Option<&Ledger> {
        self.bank.ledger()
    }
}
