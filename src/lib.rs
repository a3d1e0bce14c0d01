pub mod logging;

// Re-export the record crate
pub use ndef_record::*;
pub use ndef_util::slice;
