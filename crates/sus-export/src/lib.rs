//! Regulatory billing file builders.
//!
//! Two national fixed-width formats: the monthly ambulatory batch file
//! (header, body lines, trailer) and the high-cost authorization file
//! (header, demographic body, procedure sub-records). Byte layout is a
//! compatibility contract with the downstream regulator; record lengths and
//! field positions are exact.

pub mod apac;
pub mod bpa;
pub mod checksum;
pub mod error;

pub use apac::{ApacFileBuilder, ApacOptions};
pub use bpa::{BpaFileBuilder, BpaOptions};
pub use checksum::{CONTROL_CEILING, CONTROL_FLOOR, ambulatory_control, authorization_control};
pub use error::ExportError;

/// Line terminator for every record in both formats.
pub const RECORD_TERMINATOR: &str = "\r\n";

/// Defensive re-validation of an assembled record's length. Packing already
/// guarantees this; a failure here signals a logic defect, and the caller
/// must not emit a partial file.
pub(crate) fn require_record_length(
    record: &str,
    name: &'static str,
    expected: usize,
) -> Result<(), ExportError> {
    let actual = record.chars().count();
    if actual != expected {
        return Err(ExportError::RecordLength {
            record: name,
            expected,
            actual,
        });
    }
    Ok(())
}
