//! Session state machine
//!
//! The `Bank` gates access to the ledger behind authentication:
//!
//! ```text
//! LoggedOut --login ok--> LoggedIn --logout--> LoggedOut
//! ```
//!
//! Every login seeds a fresh `Ledger` from the configured fixtures; logout
//! drops it. The ledger is only reachable while logged in.

use crate::config::{BankConfig, CredentialDirectory, LedgerSeed};
use crate::core::authenticator::SessionAuthenticator;
use crate::core::ledger::Ledger;
use crate::core::traits::{Clock, SystemClock};
use crate::types::{BankError, Session, SessionError};
use std::rc::Rc;

/// The session-level state
#[derive(Debug)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { session: Session, ledger: Ledger },
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }
}

/// Owns the authenticator, the ledger seed and the current session
#[derive(Debug)]
pub struct Bank {
    authenticator: SessionAuthenticator<CredentialDirectory>,
    seed: LedgerSeed,
    clock: Rc<dyn Clock>,
    state: SessionState,
}

impl Bank {
    /// Create a logged-out bank using the system clock
    pub fn new(config: &BankConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Create a logged-out bank with an explicit clock
    pub fn with_clock(config: &BankConfig, clock: Rc<dyn Clock>) -> Self {
        Bank {
            authenticator: SessionAuthenticator::new(config.directory.clone()),
            seed: config.seed.clone(),
            clock,
            state: SessionState::LoggedOut,
        }
    }

    /// Authenticate and open a session with a freshly seeded ledger
    ///
    /// Returns a copy of the opened session.
    ///
    /// # Errors
    ///
    /// - `SessionError::AlreadyLoggedIn` if a session is active
    /// - any `AuthError` from the authenticator
    pub fn login(&mut self, account: &str, pin: &str) -> Result<Session, BankError> {
        if self.state.is_logged_in() {
            return Err(SessionError::AlreadyLoggedIn.into());
        }

        let session = self.authenticator.authenticate(account, pin)?;
        let ledger = Ledger::from_seed(&self.seed, Rc::clone(&self.clock));

        tracing::debug!(account = %session.account(), "session opened");
        self.state = SessionState::LoggedIn {
            session: session.clone(),
            ledger,
        };

        Ok(session)
    }

    /// End the active session, discarding its ledger
    ///
    /// Returns the session that was closed.
    pub fn logout(&mut self) -> Result<Session, SessionError> {
        match std::mem::replace(&mut self.state, SessionState::LoggedOut) {
            SessionState::LoggedIn { session, .. } => {
                tracing::debug!(account = %session.account(), "session closed");
                Ok(session)
            }
            SessionState::LoggedOut => Err(SessionError::NotLoggedIn),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::LoggedIn { session, .. } => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    pub fn ledger(&self) -> Option<&Ledger> {
        match &self.state {
            SessionState::LoggedIn { ledger, .. } => Some(ledger),
            SessionState::LoggedOut => None,
        }
    }

    pub fn ledger_mut(&mut self) -> Option<&mut Ledger> {
        match &mut self.state {
            SessionState::LoggedIn { ledger, .. } => Some(ledger),
            SessionState::LoggedOut => None,
        }
    }

    /// Session and ledger together, or `NotLoggedIn`
    pub fn active(&self) -> Result<(&Session, &Ledger), SessionError> {
        match &self.state {
            SessionState::LoggedIn { session, ledger } => Ok((session, ledger)),
            SessionState::LoggedOut => Err(SessionError::NotLoggedIn),
        }
    }

    /// Mutable ledger access, or `NotLoggedIn`
    pub fn active_ledger_mut(&mut self) -> Result<&mut Ledger, SessionError> {
        self.ledger_mut().ok_or(SessionError::NotLoggedIn)
    }
}
