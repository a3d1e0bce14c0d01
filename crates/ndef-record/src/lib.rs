//! Decoding of a single NDEF record
//!
//! Message level concerns (MB/ME chaining, chunking) are left to the caller, which can use
//! [`NdefRecord::total_length`] to step from one record to the next

uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod ffi;
pub mod header;
pub mod parser;
pub mod payload;
pub mod record;
pub mod tnf;

pub use config::ParserConfig;
pub use error::{FormatError, PayloadError, RecordField};
pub use header::NdefHeader;
pub use parser::{parse_record, parse_record_with};
pub use record::NdefRecord;
pub use tnf::{TnfDecoding, TypeNameFormat};
