//! Presentation module
//!
//! Terminal renditions of the dashboard, the history table and the ATM
//! kiosk. Nothing here owns business rules; the kiosk only sequences screens
//! and forwards transactions to the ledger.
//!
//! - `format` - money, date and account masking helpers
//! - `kiosk` - ATM screen state machine
//! - `render` - text views

pub mod format;
pub mod kiosk;
pub mod render;

pub use kiosk::{AtmKiosk, AtmScreen};
