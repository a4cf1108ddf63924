//! Account-related types for SecureBank
//!
//! This module defines the account number token and the session value that
//! an authenticated caller holds.

use std::borrow::Borrow;
use std::fmt;

/// Opaque account number token
///
/// Compared verbatim; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        AccountNumber(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last three characters, as shown on the ATM welcome screen
    pub fn last_three(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(2)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        AccountNumber::new(number)
    }
}

/// An authenticated session
///
/// Created only by the authenticator on success. Holding one means the
/// account number was matched against the credential directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    account: AccountNumber,
}

impl Session {
    pub(crate) fn new(account: AccountNumber) -> Self {
        Session { account }
    }

    pub fn account(&self) -> &AccountNumber {
        &self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nine_digits("123456789", "789")]
    #[case::exactly_three("789", "789")]
    #[case::shorter("12", "12")]
    #[case::empty("", "")]
    fn test_last_three(#[case] number: &str, #[case] expected: &str) {
        assert_eq!(AccountNumber::new(number).last_three(), expected);
    }

    #[test]
    fn test_session_exposes_account() {
        let session = Session::new(AccountNumber::from("987654321"));
        assert_eq!(session.account().as_str(), "987654321");
    }
}
