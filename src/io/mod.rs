//! I/O module
//!
//! Handles CSV session scripts and statement output.
//!
//! # Components
//!
//! - `script` - script row format and a streaming reader with an iterator interface
//! - `statement` - transaction log export

pub mod script;
pub mod statement;

pub use script::{convert_script_record, ScriptReader, ScriptRecord};
pub use statement::write_statement_csv;
