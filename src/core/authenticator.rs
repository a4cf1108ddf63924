//! Session authenticator
//!
//! Validates an account number and PIN pair against a credential store and
//! yields a `Session` on success. There is no lockout, throttling or attempt
//! counting, and failures are not recorded anywhere.

use crate::config::CredentialDirectory;
use crate::core::traits::CredentialStore;
use crate::types::{AccountNumber, AuthError, Session};

/// Required PIN length
pub const PIN_LENGTH: usize = 4;

/// Checks credentials against a fixed directory
#[derive(Debug, Clone)]
pub struct SessionAuthenticator<S = CredentialDirectory> {
    store: S,
}

impl<S: CredentialStore> SessionAuthenticator<S> {
    pub fn new(store: S) -> Self {
        SessionAuthenticator { store }
    }

    /// Authenticate an account number and PIN
    ///
    /// Checks run in order:
    /// 1. both fields non-empty
    /// 2. the PIN is exactly four ASCII digits (no lookup happens otherwise)
    /// 3. the store holds exactly this PIN for the account
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` if either field is empty
    /// - `InvalidPinFormat` if the PIN is not four digits
    /// - `AuthenticationFailed` for an unknown account or a wrong PIN
    pub fn authenticate(&self, account: &str, pin: &str) -> Result<Session, AuthError> {
        if account.is_empty() || pin.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        if !is_well_formed_pin(pin) {
            return Err(AuthError::InvalidPinFormat);
        }

        match self.store.expected_pin(account) {
            Some(expected) if expected == pin => {
                tracing::debug!(account, "credentials accepted");
                Ok(Session::new(AccountNumber::new(account)))
            }
            _ => Err(AuthError::AuthenticationFailed),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn is_well_formed_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}
