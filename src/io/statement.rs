//! Statement export
//!
//! Writes a ledger's transaction log as CSV with the columns
//! `id,date,type,amount,description`, newest first. Amounts are written with
//! two decimal places and dates in ISO form (`2024-01-15`).

use crate::types::{BankError, Transaction};
use csv::Writer;
use std::io::Write;

/// Write a transaction log to CSV
///
/// # Arguments
///
/// * `log` - Transactions in the order they should appear
/// * `output` - Destination writer
///
/// # Errors
///
/// `Io` if a record cannot be written or the writer cannot be flushed.
pub fn write_statement_csv<'a, I>(log: I, output: &mut dyn Write) -> Result<(), BankError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "date", "type", "amount", "description"])
        .map_err(|e| BankError::Io {
            message: format!("Failed to write statement header: {}", e),
        })?;

    for tx in log {
        writer
            .write_record(&[
                tx.id().to_string(),
                tx.date().format("%Y-%m-%d").to_string(),
                tx.kind().to_string(),
                format!("{:.2}", tx.amount().round_dp(2)),
                tx.description().to_string(),
            ])
            .map_err(|e| BankError::Io {
                message: format!("Failed to write statement row {}: {}", tx.id(), e),
            })?;
    }

    writer.flush()?;

    Ok(())
}
