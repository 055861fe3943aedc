use thiserror::Error;

use sus_layout::LayoutError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Control value escaped its closed domain. Unreachable for well-formed
    /// sums; signals a logic defect, not a user error.
    #[error("checksum control value {value} outside 1111..=2221")]
    ChecksumDomain { value: i64 },

    #[error("{record}: assembled record is {actual} characters, format requires {expected}")]
    RecordLength {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("body line {index}: patient health card and taxpayer number are mutually exclusive")]
    DocumentConflict { index: usize },

    #[error("body line {index}: a patient health card or taxpayer number is required")]
    MissingPatientDocument { index: usize },

    #[error("authorization body record is missing the patient health card number")]
    MissingPatientCard,

    #[error("authorization number is required")]
    MissingAuthorizationNumber,

    #[error("field {field} holds a non-numeric value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
