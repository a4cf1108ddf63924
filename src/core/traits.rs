//! Core traits for credential lookup and date keeping
//!
//! These are the seams where tests substitute their own fixtures: a credential
//! store other than the demo directory, and a clock pinned to a known date.

use crate::config::CredentialDirectory;
use chrono::{Local, NaiveDate};
use std::fmt;

/// Source of expected PINs
pub trait CredentialStore {
    /// The PIN on file for `account`, if the account is known
    fn expected_pin(&self, account: &str) -> Option<&str>;
}

impl CredentialStore for CredentialDirectory {
    fn expected_pin(&self, account: &str) -> Option<&str> {
        self.pin_for(account)
    }
}

/// Source of "today" for newly recorded transactions
pub trait Clock: fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_directory_is_a_credential_store() {
        let directory = CredentialDirectory::new().with_account("42", "0042");
        assert_eq!(directory.expected_pin("42"), Some("0042"));
        assert_eq!(directory.expected_pin("43"), None);
    }
}
