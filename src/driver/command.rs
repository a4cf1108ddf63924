//! Command vocabulary
//!
//! Every user action a presentation surface can trigger, independent of
//! where it came from. Script rows and typed lines are both turned into a
//! `Command` through `Command::from_fields`.
//!
//! Amounts for dashboard transactions and custom ATM amounts are kept as the
//! raw text the user entered; the ledger decides whether it is valid.

use crate::types::{parse_amount, BankError, TransactionKind};
use rust_decimal::Decimal;

/// Actions available inside ATM mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtmAction {
    Open,
    CheckBalance,
    ToggleBalance,
    Begin(TransactionKind),
    Quick(Decimal),
    Other,
    Confirm(String),
    Cancel,
    Back,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { account: String, pin: String },
    Logout,
    Transact {
        kind: TransactionKind,
        amount: String,
        description: String,
    },
    Balance,
    ToggleBalance,
    History,
    Summary,
    /// Dashboard quick amounts for the deposit and withdraw forms
    Presets,
    Atm(AtmAction),
    Help,
    Quit,
}

/// Loose argument slots shared by every input format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandFields<'a> {
    pub account: &'a str,
    pub pin: &'a str,
    pub amount: &'a str,
    pub description: &'a str,
}

impl Command {
    /// Build a command from a verb, an optional sub-verb and argument slots
    ///
    /// `atm` without a sub-verb opens the kiosk. Unused slots are ignored.
    ///
    /// # Errors
    ///
    /// - `UnknownCommand` for a verb or ATM sub-verb outside the vocabulary
    /// - `Parse` for an ATM quick amount that is not a number
    pub fn from_fields(
        verb: &str,
        sub: Option<&str>,
        fields: CommandFields<'_>,
    ) -> Result<Command, BankError> {
        let verb = verb.trim().to_lowercase();

        let command = match verb.as_str() {
            "login" => Command::Login {
                account: fields.account.to_string(),
                pin: fields.pin.to_string(),
            },
            "logout" => Command::Logout,
            "deposit" | "withdraw" | "withdrawal" => Command::Transact {
                kind: verb
                    .parse()
                    .map_err(|_| BankError::unknown_command(&verb))?,
                amount: fields.amount.to_string(),
                description: fields.description.to_string(),
            },
            "balance" => Command::Balance,
            "toggle" => Command::ToggleBalance,
            "history" => Command::History,
            "summary" | "overview" => Command::Summary,
            "presets" => Command::Presets,
            "atm" => Command::Atm(Self::atm_action(sub.unwrap_or("open"), fields)?),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(BankError::unknown_command(&verb)),
        };

        Ok(command)
    }

    fn atm_action(sub: &str, fields: CommandFields<'_>) -> Result<AtmAction, BankError> {
        let sub = sub.trim().to_lowercase();

        let action = match sub.as_str() {
            "open" => AtmAction::Open,
            "balance" => AtmAction::CheckBalance,
            "toggle" => AtmAction::ToggleBalance,
            "withdraw" => AtmAction::Begin(TransactionKind::Withdrawal),
            "deposit" => AtmAction::Begin(TransactionKind::Deposit),
            "quick" => {
                let amount = parse_amount(fields.amount).ok_or_else(|| {
                    BankError::parse(None, format!("quick amount '{}' is not a number", fields.amount))
                })?;
                AtmAction::Quick(amount)
            }
            "other" => AtmAction::Other,
            "confirm" => AtmAction::Confirm(fields.amount.to_string()),
            "cancel" => AtmAction::Cancel,
            "back" => AtmAction::Back,
            "exit" => AtmAction::Exit,
            _ => return Err(BankError::unknown_command(&format!("atm {}", sub))),
        };

        Ok(action)
    }

    /// Parse a typed command line
    ///
    /// ```text
    /// login 123456789 1234
    /// deposit 100 Birthday money
    /// withdraw 40
    /// atm quick 20
    /// atm confirm 12.50
    /// ```
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse_line(line: &str) -> Result<Option<Command>, BankError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, rest)) = words.split_first() else {
            return Ok(None);
        };

        let arg = |idx: usize| rest.get(idx).copied().unwrap_or("");
        let lowered = verb.to_lowercase();

        let command = match lowered.as_str() {
            "login" => Command::from_fields(
                verb,
                None,
                CommandFields {
                    account: arg(0),
                    pin: arg(1),
                    ..CommandFields::default()
                },
            )?,
            "deposit" | "withdraw" | "withdrawal" => {
                let description = rest.get(1..).map(|w| w.join(" ")).unwrap_or_default();
                Command::from_fields(
                    verb,
                    None,
                    CommandFields {
                        amount: arg(0),
                        description: &description,
                        ..CommandFields::default()
                    },
                )?
            }
            "atm" => Command::from_fields(
                verb,
                rest.first().copied(),
                CommandFields {
                    amount: arg(1),
                    ..CommandFields::default()
                },
            )?,
            _ => Command::from_fields(verb, None, CommandFields::default())?,
        };

        Ok(Some(command))
    }
}

/// Help text for the interactive console
pub const HELP: &str = "\
Commands:
  login <account> <pin>          open a session
  logout                         close the session
  deposit <amount> [description]
  withdraw <amount> [description]
  balance                        show the available balance
  toggle                         hide/show the balance
  history                        list transactions, newest first
  summary                        account overview
  presets                        quick amounts for deposit/withdraw
  atm [open]                     enter ATM mode
  atm balance|toggle|back        balance screen
  atm withdraw|deposit           choose an amount screen
  atm quick <amount>             pick a preset amount
  atm other                      type a custom amount
  atm confirm <amount>           submit the custom amount
  atm cancel                     step back
  atm exit                       leave ATM mode
  help                           show this text
  quit                           leave";
